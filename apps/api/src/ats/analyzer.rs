//! ATS compatibility scoring: pluggable, trait-based scorer over a resume snapshot.
//!
//! Default: `RuleBasedAtsScorer` (pure-Rust, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`, chosen at startup.

use tracing::debug;

use crate::ats::report::{AtsBreakdown, AtsResult, AtsWarning};
use crate::ats::text::{experience_haystack, has_quantified_impact, naive_word_count};
use crate::ats::weights::{AtsWeights, ACTION_VERBS, MAX_SCORE};
use crate::models::resume::ResumeSnapshot;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
///
/// Scoring is total: every snapshot, including a fully empty one, yields a result.
pub trait AtsScorer: Send + Sync {
    fn analyze(&self, resume: &ResumeSnapshot) -> AtsResult;

    /// The rule table in effect, exposed for score explanations.
    fn weights(&self) -> &AtsWeights;

    /// Short backend label, e.g. "rules".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedAtsScorer
// ────────────────────────────────────────────────────────────────────────────

/// Fixed rule table over resume text.
///
/// Algorithm (evaluated in this order, which is also the warning order):
/// 1. Structure: points for summary, experience, education, technical skills.
/// 2. Keywords: points per technical skill found in the experience haystack.
/// 3. Bullets: points per description opening with an action verb, and per
///    description carrying a quantified metric.
/// 4. Readability: penalty when the summary word count leaves the allowed range.
///
/// Each sub-score is capped after accumulation; the total is capped at 100.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAtsScorer {
    weights: AtsWeights,
}

impl RuleBasedAtsScorer {
    pub fn new(weights: AtsWeights) -> Self {
        Self { weights }
    }
}

impl AtsScorer for RuleBasedAtsScorer {
    fn analyze(&self, resume: &ResumeSnapshot) -> AtsResult {
        compute_ats(resume, &self.weights)
    }

    fn weights(&self) -> &AtsWeights {
        &self.weights
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

/// Scores a resume with the default rule table.
pub fn analyze_ats(resume: &ResumeSnapshot) -> AtsResult {
    compute_ats(resume, &AtsWeights::default())
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_ats(resume: &ResumeSnapshot, weights: &AtsWeights) -> AtsResult {
    let mut warnings = Vec::new();

    let breakdown = AtsBreakdown {
        structure: score_structure(resume, weights, &mut warnings),
        keywords: score_keywords(resume, weights, &mut warnings),
        bullets: score_bullets(resume, weights, &mut warnings),
        readability: score_readability(resume, weights, &mut warnings),
    };
    let score = breakdown.total().min(MAX_SCORE);

    debug!(
        score,
        structure = breakdown.structure,
        keywords = breakdown.keywords,
        bullets = breakdown.bullets,
        readability = breakdown.readability,
        warnings = warnings.len(),
        "ATS analysis complete"
    );

    AtsResult {
        score,
        breakdown,
        warnings,
    }
}

fn score_structure(
    resume: &ResumeSnapshot,
    weights: &AtsWeights,
    warnings: &mut Vec<AtsWarning>,
) -> u32 {
    let checks = [
        (
            !resume.personal_info.summary.is_empty(),
            weights.summary_points,
            AtsWarning::MissingSummary,
        ),
        (
            !resume.experience.is_empty(),
            weights.experience_points,
            AtsWarning::MissingExperience,
        ),
        (
            !resume.education.is_empty(),
            weights.education_points,
            AtsWarning::MissingEducation,
        ),
        (
            !resume.skills.technical.is_empty(),
            weights.skills_points,
            AtsWarning::MissingTechnicalSkills,
        ),
    ];

    let mut points = 0u32;
    for (present, award, warning) in checks {
        if present {
            points = points.saturating_add(award);
        } else {
            warnings.push(warning);
        }
    }
    points.min(weights.structure_max)
}

fn score_keywords(
    resume: &ResumeSnapshot,
    weights: &AtsWeights,
    warnings: &mut Vec<AtsWarning>,
) -> u32 {
    let haystack = experience_haystack(&resume.experience);

    let raw = resume
        .skills
        .technical
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .fold(0u32, |acc, _| acc.saturating_add(weights.keyword_match_points));

    // The coverage check reads the uncapped accumulator.
    if raw < weights.keyword_warning_threshold {
        warnings.push(AtsWarning::SkillsNotReflected);
    }
    raw.min(weights.keywords_max)
}

fn score_bullets(
    resume: &ResumeSnapshot,
    weights: &AtsWeights,
    warnings: &mut Vec<AtsWarning>,
) -> u32 {
    let mut points = 0u32;
    let mut has_metrics = false;

    for entry in &resume.experience {
        let description = entry.description.to_lowercase();

        for verb in ACTION_VERBS {
            if description.starts_with(verb) {
                points = points.saturating_add(weights.action_verb_points);
            }
        }

        if has_quantified_impact(&description) {
            has_metrics = true;
            points = points.saturating_add(weights.metrics_points);
        }
    }

    if !has_metrics {
        warnings.push(AtsWarning::MissingMeasurableImpact);
    }
    points.min(weights.bullets_max)
}

fn score_readability(
    resume: &ResumeSnapshot,
    weights: &AtsWeights,
    warnings: &mut Vec<AtsWarning>,
) -> u32 {
    let mut points = weights.readability_max;
    let words = naive_word_count(&resume.personal_info.summary);

    if words < weights.summary_min_words || words > weights.summary_max_words {
        points = points.saturating_sub(weights.summary_length_penalty);
        warnings.push(AtsWarning::SummaryLength);
    }
    points.min(weights.readability_max)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
