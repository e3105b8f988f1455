use std::fmt;

use serde::{Serialize, Serializer};

/// A weak area found while scoring. Serializes as its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtsWarning {
    MissingSummary,
    MissingExperience,
    MissingEducation,
    MissingTechnicalSkills,
    SkillsNotReflected,
    MissingMeasurableImpact,
    SummaryLength,
}

impl AtsWarning {
    pub fn message(self) -> &'static str {
        match self {
            AtsWarning::MissingSummary => "Missing professional summary",
            AtsWarning::MissingExperience => "No experience section found",
            AtsWarning::MissingEducation => "Education section missing",
            AtsWarning::MissingTechnicalSkills => "No technical skills listed",
            AtsWarning::SkillsNotReflected => "Skills are not reflected clearly in experience",
            AtsWarning::MissingMeasurableImpact => {
                "Add measurable impact (numbers, %, scale) in experience"
            }
            // Text says 40–80 while the scored range is 30–90; both are observable as-is.
            AtsWarning::SummaryLength => "Professional summary length should be 40–80 words",
        }
    }
}

impl fmt::Display for AtsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for AtsWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Per-category sub-scores, each already capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AtsBreakdown {
    pub structure: u32,   // 0 – 30
    pub keywords: u32,    // 0 – 30
    pub bullets: u32,     // 0 – 20
    pub readability: u32, // 0 – 20
}

impl AtsBreakdown {
    pub fn total(&self) -> u32 {
        self.structure
            .saturating_add(self.keywords)
            .saturating_add(self.bullets)
            .saturating_add(self.readability)
    }
}

/// Output of one analysis. Warnings keep rule evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsResult {
    pub score: u32, // 0 – 100
    pub breakdown: AtsBreakdown,
    pub warnings: Vec<AtsWarning>,
}
