use serde::{Deserialize, Serialize};

/// Upper bound of the overall ATS score.
pub const MAX_SCORE: u32 = 100;

/// Verbs that earn bullet points when an experience description opens with them.
pub const ACTION_VERBS: &[&str] = &[
    "built",
    "developed",
    "led",
    "designed",
    "implemented",
    "optimized",
    "improved",
    "created",
    "managed",
    "automated",
];

/// Matches quantified impact: `40%`, `10+`, `500 users`, `12 clients`.
/// Applied to lower-cased text, ASCII digits only.
pub const METRICS_PATTERN: &str = r"[0-9]+%|[0-9]+\+|[0-9]+ users|[0-9]+ clients";

/// Point values, caps and thresholds of the rule table.
///
/// `Default` is the production table. Sub-score caps are applied after
/// accumulation, so edits that push a category's raw sum past its cap are
/// still bounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsWeights {
    // Structure
    pub structure_max: u32,
    pub summary_points: u32,
    pub experience_points: u32,
    pub education_points: u32,
    pub skills_points: u32,

    // Keywords
    pub keywords_max: u32,
    pub keyword_match_points: u32,
    /// Raw (pre-cap) keyword points below this trigger the coverage warning.
    pub keyword_warning_threshold: u32,

    // Bullets
    pub bullets_max: u32,
    pub action_verb_points: u32,
    pub metrics_points: u32,

    // Readability
    pub readability_max: u32,
    pub summary_length_penalty: u32,
    /// Inclusive lower bound on summary word count.
    pub summary_min_words: usize,
    /// Inclusive upper bound on summary word count.
    pub summary_max_words: usize,
}

impl Default for AtsWeights {
    fn default() -> Self {
        Self {
            structure_max: 30,
            summary_points: 8,
            experience_points: 8,
            education_points: 6,
            skills_points: 8,

            keywords_max: 30,
            keyword_match_points: 2,
            keyword_warning_threshold: 10,

            bullets_max: 20,
            action_verb_points: 2,
            metrics_points: 5,

            readability_max: 20,
            summary_length_penalty: 8,
            summary_min_words: 30,
            summary_max_words: 90,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_points_fill_cap_exactly() {
        let w = AtsWeights::default();
        let sum = w.summary_points + w.experience_points + w.education_points + w.skills_points;
        assert_eq!(sum, w.structure_max);
    }

    #[test]
    fn test_category_caps_sum_to_max_score() {
        let w = AtsWeights::default();
        assert_eq!(
            w.structure_max + w.keywords_max + w.bullets_max + w.readability_max,
            MAX_SCORE
        );
    }

    #[test]
    fn test_action_verbs_are_lowercase_and_distinct() {
        for verb in ACTION_VERBS {
            assert_eq!(*verb, verb.to_lowercase());
        }
        let mut sorted = ACTION_VERBS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ACTION_VERBS.len());
    }
}
