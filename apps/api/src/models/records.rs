#![allow(dead_code)]

//! Typed resume records — the canonical per-category entry shapes.
//!
//! Form payloads evolved across app versions, so several fields answer to more
//! than one name. Scalar fields default to the empty string: for rendering,
//! "absent" and "blank" behave identically and both keep a field off the page.

use serde::{Deserialize, Serialize};

fn first_non_empty<'a>(primary: &'a str, fallback: &'a str) -> Option<&'a str> {
    if !primary.trim().is_empty() {
        Some(primary.trim())
    } else if !fallback.trim().is_empty() {
        Some(fallback.trim())
    } else {
        None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal details
// ────────────────────────────────────────────────────────────────────────────

/// Identity and contact block. At most one record is active per render.
///
/// The trailing fields (nationality, passport, declaration) only appear on the
/// formal template family; the others ignore them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, alias = "address")]
    pub location: String,
    #[serde(default, alias = "professional_summary")]
    pub summary: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, alias = "photo")]
    pub profile_image: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub declaration: String,
}

impl PersonalInfo {
    /// Display name joined from the non-empty name parts.
    pub fn full_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.first_name.trim().is_empty() {
            parts.push(self.first_name.trim());
        }
        if !self.last_name.trim().is_empty() {
            parts.push(self.last_name.trim());
        }
        parts.join(" ")
    }

    /// Contact fragments in display order, blanks already dropped.
    pub fn contact_parts(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location]
            .into_iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Link fragments (profiles and websites), blanks dropped.
    pub fn link_parts(&self) -> Vec<&str> {
        [&self.linkedin, &self.github, &self.website]
            .into_iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }

    pub fn has_summary(&self) -> bool {
        !self.summary.trim().is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dated entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default, alias = "institution")]
    pub school_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, alias = "currently_studying")]
    pub present: bool,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub position: String,
    #[serde(default, alias = "company")]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, alias = "currently_working")]
    pub present: bool,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolunteerEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "organization_name")]
    pub organization: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, alias = "currently_volunteering")]
    pub present: bool,
    #[serde(default)]
    pub contributions: Vec<String>,
}

/// Project entries are the worst offenders for field drift: `name`/`title`,
/// `role`/`your_role` and `outcome`/`result` all coexist in stored data.
/// The `display_*` accessors pick the first non-empty spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub your_role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub result: String,
    #[serde(default, alias = "skills_used")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub link: String,
}

impl ProjectEntry {
    pub fn display_name(&self) -> Option<&str> {
        first_non_empty(&self.name, &self.title)
    }

    pub fn display_role(&self) -> Option<&str> {
        first_non_empty(&self.role, &self.your_role)
    }

    pub fn display_outcome(&self) -> Option<&str> {
        first_non_empty(&self.outcome, &self.result)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Credentials
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "issuing_organization")]
    pub organization: String,
    #[serde(default, alias = "issue_date")]
    pub date: String,
}

/// Spoken-language proficiency, coarsest scale that survives translation to a
/// dot row on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[serde(alias = "Native")]
    Native,
    #[serde(alias = "Fluent")]
    Fluent,
    #[serde(alias = "Conversational", alias = "intermediate", alias = "Intermediate")]
    Conversational,
    #[serde(alias = "Basic", alias = "beginner", alias = "Beginner")]
    Basic,
}

impl Default for Proficiency {
    fn default() -> Self {
        Proficiency::Conversational
    }
}

impl Proficiency {
    /// Filled dots on the six-point scale drawn by the dot-row templates.
    pub fn dots(self) -> u8 {
        match self {
            Proficiency::Native => 6,
            Proficiency::Fluent => 5,
            Proficiency::Conversational => 3,
            Proficiency::Basic => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Conversational => "Conversational",
            Proficiency::Basic => "Basic",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(default, alias = "language")]
    pub name: String,
    #[serde(default)]
    pub proficiency: Proficiency,
}

impl LanguageEntry {
    /// Entry built from a bare name, as produced by plain list payloads.
    pub fn named(name: String) -> Self {
        LanguageEntry {
            name,
            proficiency: Proficiency::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_name_joins_non_empty_parts() {
        let person = PersonalInfo {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        };
        assert_eq!(person.full_name(), "Ada Lovelace");

        let mononym = PersonalInfo {
            first_name: "  Ada  ".into(),
            ..Default::default()
        };
        assert_eq!(mononym.full_name(), "Ada", "blank parts must not leave gaps");
    }

    #[test]
    fn test_personal_aliases_accepted() {
        let person: PersonalInfo = serde_json::from_value(json!({
            "first_name": "Ada",
            "address": "London",
            "professional_summary": "Analyst and programmer."
        }))
        .expect("aliased payload should deserialize");
        assert_eq!(person.location, "London");
        assert_eq!(person.summary, "Analyst and programmer.");
    }

    #[test]
    fn test_contact_parts_drop_blanks() {
        let person = PersonalInfo {
            email: "ada@example.com".into(),
            phone: "   ".into(),
            location: "London".into(),
            ..Default::default()
        };
        assert_eq!(person.contact_parts(), vec!["ada@example.com", "London"]);
    }

    #[test]
    fn test_experience_company_alias_and_flag() {
        let entry: ExperienceEntry = serde_json::from_value(json!({
            "position": "Engineer",
            "company": "Analytical Engines Ltd",
            "currently_working": true
        }))
        .expect("aliased experience should deserialize");
        assert_eq!(entry.company_name, "Analytical Engines Ltd");
        assert!(entry.present);
        assert!(entry.responsibilities.is_empty());
    }

    #[test]
    fn test_project_display_accessors_prefer_primary() {
        let entry = ProjectEntry {
            name: "Engine".into(),
            title: "Old Title".into(),
            your_role: "Lead".into(),
            result: "Shipped".into(),
            ..Default::default()
        };
        assert_eq!(entry.display_name(), Some("Engine"));
        assert_eq!(
            entry.display_role(),
            Some("Lead"),
            "legacy spelling must back-fill an empty primary field"
        );
        assert_eq!(entry.display_outcome(), Some("Shipped"));

        let blank = ProjectEntry::default();
        assert_eq!(blank.display_name(), None);
    }

    #[test]
    fn test_proficiency_accepts_mixed_case_and_defaults() {
        let entry: LanguageEntry =
            serde_json::from_value(json!({ "language": "French", "proficiency": "Fluent" }))
                .expect("capitalized proficiency should deserialize");
        assert_eq!(entry.proficiency, Proficiency::Fluent);

        let bare: LanguageEntry = serde_json::from_value(json!({ "name": "English" }))
            .expect("missing proficiency should default");
        assert_eq!(bare.proficiency, Proficiency::Conversational);
    }

    #[test]
    fn test_proficiency_dot_scale_is_monotonic() {
        assert!(Proficiency::Native.dots() > Proficiency::Fluent.dots());
        assert!(Proficiency::Fluent.dots() > Proficiency::Conversational.dots());
        assert!(Proficiency::Conversational.dots() > Proficiency::Basic.dots());
        assert!(Proficiency::Native.dots() <= 6, "scale is six points wide");
    }
}
