use std::sync::Arc;

use crate::ats::analyzer::AtsScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable ATS scorer. Default: RuleBasedAtsScorer.
    pub ats_scorer: Arc<dyn AtsScorer>,
}
