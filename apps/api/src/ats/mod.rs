// ATS compatibility scoring.
// Rule table in weights.rs, text heuristics in text.rs, the engine in analyzer.rs.
// The engine is pure; handlers.rs is the only HTTP-facing file here.

pub mod analyzer;
pub mod handlers;
pub mod report;
pub mod text;
pub mod weights;
