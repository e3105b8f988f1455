//! Text helpers for the ATS rules. Whitespace splits and substring checks only.

use std::sync::OnceLock;

use regex::Regex;

use crate::ats::weights::METRICS_PATTERN;
use crate::models::resume::ExperienceEntry;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn metrics_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(METRICS_PATTERN).expect("metrics pattern is valid"))
}

/// Lower-cased experience descriptions joined with a single space.
pub fn experience_haystack(entries: &[ExperienceEntry]) -> String {
    entries
        .iter()
        .map(|e| e.description.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Number of pieces left after splitting on whitespace runs.
///
/// Empty pieces are kept: `""` counts as 1 and `" a "` as 3. Summary length
/// scoring depends on this exact count.
pub fn naive_word_count(text: &str) -> usize {
    whitespace_run().split(text).count()
}

/// True when lower-cased text carries a percentage, `N+`, `N users` or `N clients`.
pub fn has_quantified_impact(text: &str) -> bool {
    metrics_regex().is_match(text)
}
