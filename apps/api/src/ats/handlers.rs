//! Axum route handlers for the ATS API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::ats::report::AtsResult;
use crate::ats::weights::{AtsWeights, ACTION_VERBS, METRICS_PATTERN};
use crate::errors::AppError;
use crate::models::resume::ResumeSnapshot;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsRulesResponse {
    pub backend: &'static str,
    pub weights: AtsWeights,
    pub action_verbs: &'static [&'static str],
    pub metrics_pattern: &'static str,
}

/// POST /api/v1/ats/analyze
///
/// Scores the posted resume snapshot. Missing fields count as empty.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<ResumeSnapshot>, JsonRejection>,
) -> Result<Json<AtsResult>, AppError> {
    let Json(resume) = payload?;
    let result = state.ats_scorer.analyze(&resume);
    Ok(Json(result))
}

/// GET /api/v1/ats/rules
///
/// Returns the rule table the active scorer applies.
pub async fn handle_rules(State(state): State<AppState>) -> Json<AtsRulesResponse> {
    Json(AtsRulesResponse {
        backend: state.ats_scorer.backend(),
        weights: state.ats_scorer.weights().clone(),
        action_verbs: ACTION_VERBS,
        metrics_pattern: METRICS_PATTERN,
    })
}
