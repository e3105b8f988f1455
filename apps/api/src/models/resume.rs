use serde::{Deserialize, Deserializer, Serialize};

/// Resume data as edited by the client-side form builder.
///
/// Every field defaults when absent or `null`, so a half-filled form still
/// deserializes. `null` items inside lists are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "skip_null_items")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "skip_null_items")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(deserialize_with = "skip_null_items")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "skip_null_items")]
    pub certifications: Vec<CertificationEntry>,
    #[serde(deserialize_with = "skip_null_items")]
    pub coding_profiles: Vec<CodingProfile>,
    #[serde(deserialize_with = "skip_null_items")]
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub portfolio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "skip_null_items")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "skip_null_items")]
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "skip_null_items")]
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodingProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// `null` deserializes to `T::default()` instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` items are dropped; a `null` list deserializes to an empty one.
fn skip_null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let resume: ResumeSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resume, ResumeSnapshot::default());
    }

    #[test]
    fn test_camel_case_fields_are_read() {
        let resume: ResumeSnapshot = serde_json::from_value(json!({
            "personalInfo": { "fullName": "Ada Lovelace", "summary": "Engineer" },
            "experience": [{ "title": "Dev", "startDate": "2020-01", "description": "Built things" }],
            "education": [{ "degree": "BSc", "gpa": "3.9" }],
            "skills": { "technical": ["Rust"], "soft": ["Mentoring"] },
            "codingProfiles": [{ "platform": "GitHub", "username": "ada" }]
        }))
        .unwrap();

        assert_eq!(resume.personal_info.full_name, "Ada Lovelace");
        assert_eq!(resume.personal_info.summary, "Engineer");
        assert_eq!(resume.experience[0].start_date, "2020-01");
        assert_eq!(resume.experience[0].description, "Built things");
        assert_eq!(resume.education[0].gpa.as_deref(), Some("3.9"));
        assert_eq!(resume.skills.technical, vec!["Rust".to_string()]);
        assert_eq!(resume.coding_profiles[0].username, "ada");
    }

    #[test]
    fn test_null_scored_fields_become_empty() {
        let resume: ResumeSnapshot = serde_json::from_value(json!({
            "personalInfo": { "summary": null },
            "experience": [{ "description": null }],
            "education": null,
            "skills": { "technical": null }
        }))
        .unwrap();

        assert!(resume.personal_info.summary.is_empty());
        assert!(resume.experience[0].description.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.skills.technical.is_empty());
    }

    #[test]
    fn test_null_unscored_fields_become_empty() {
        let resume: ResumeSnapshot = serde_json::from_value(json!({
            "personalInfo": { "summary": "x", "linkedin": null, "github": null },
            "experience": [{
                "description": "Built 10+ tools",
                "endDate": null,
                "current": null
            }],
            "education": [{ "endDate": null, "gpa": null }],
            "skills": { "soft": null },
            "projects": null,
            "hobbies": null
        }))
        .unwrap();

        assert!(resume.personal_info.linkedin.is_empty());
        assert_eq!(resume.experience[0].description, "Built 10+ tools");
        assert!(resume.experience[0].end_date.is_empty());
        assert!(!resume.experience[0].current);
        assert_eq!(resume.education.len(), 1);
        assert!(resume.education[0].gpa.is_none());
        assert!(resume.skills.soft.is_empty());
        assert!(resume.projects.is_empty());
        assert!(resume.hobbies.is_empty());
    }

    #[test]
    fn test_null_list_items_are_dropped() {
        let resume: ResumeSnapshot = serde_json::from_value(json!({
            "experience": [null, { "description": "Led launches" }],
            "skills": { "technical": ["React", null, "Go"], "soft": [null] }
        }))
        .unwrap();

        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].description, "Led launches");
        assert_eq!(
            resume.skills.technical,
            vec!["React".to_string(), "Go".to_string()]
        );
        assert!(resume.skills.soft.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let resume: ResumeSnapshot = serde_json::from_value(json!({
            "template": "modern",
            "personalInfo": { "photo": "data:image/png;base64,AAAA" }
        }))
        .unwrap();
        assert_eq!(resume, ResumeSnapshot::default());
    }
}
