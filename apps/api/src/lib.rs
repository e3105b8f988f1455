//! ATS compatibility scoring service.
//!
//! [`ats::analyzer::analyze_ats`] is the pure scoring entry point; the rest of
//! the crate serves it over HTTP for the resume editor.

pub mod ats;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
