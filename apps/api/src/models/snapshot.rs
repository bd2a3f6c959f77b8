//! Snapshot model — the nine data categories, their raw stored values, and the
//! typed view renderers consume.
//!
//! `RawSnapshot` is deliberately untyped (`serde_json::Value` per category): it
//! mirrors what persistence hands back, including legacy shapes. `ResumeData`
//! is the lenient decode of that snapshot. Decoding never fails outward; a
//! category that cannot be understood decodes to its empty state with a warning
//! so one bad record cannot blank the whole document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::records::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
    ProjectEntry, VolunteerEntry,
};
use crate::normalize::{normalize_list, normalize_opt, ListKind};

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

/// One storable resume category. The wire name doubles as the local document
/// key and as the suffix of the backing table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Personal,
    Education,
    Experience,
    Volunteer,
    Project,
    Skills,
    Hobbies,
    Certifications,
    Languages,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Category; 9] = [
        Category::Personal,
        Category::Education,
        Category::Experience,
        Category::Volunteer,
        Category::Project,
        Category::Skills,
        Category::Hobbies,
        Category::Certifications,
        Category::Languages,
    ];

    /// The subset the local single-document backend stores. Certifications and
    /// languages only exist on the relational backend.
    pub const LOCAL: [Category; 7] = [
        Category::Personal,
        Category::Education,
        Category::Experience,
        Category::Volunteer,
        Category::Project,
        Category::Skills,
        Category::Hobbies,
    ];

    /// Wire/key name, e.g. `experience`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Education => "education",
            Category::Experience => "experience",
            Category::Volunteer => "volunteer",
            Category::Project => "project",
            Category::Skills => "skills",
            Category::Hobbies => "hobbies",
            Category::Certifications => "certifications",
            Category::Languages => "languages",
        }
    }

    /// Backing table on the relational backend.
    pub fn table(self) -> &'static str {
        match self {
            Category::Personal => "resume_personal",
            Category::Education => "resume_education",
            Category::Experience => "resume_experience",
            Category::Volunteer => "resume_volunteer",
            Category::Project => "resume_project",
            Category::Skills => "resume_skills",
            Category::Hobbies => "resume_hobbies",
            Category::Certifications => "resume_certifications",
            Category::Languages => "resume_languages",
        }
    }

    /// Human heading used by the listing view.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Personal => "Personal details",
            Category::Education => "Education",
            Category::Experience => "Experience",
            Category::Volunteer => "Volunteer experience",
            Category::Project => "Projects",
            Category::Skills => "Skills",
            Category::Hobbies => "Hobbies",
            Category::Certifications => "Certifications",
            Category::Languages => "Languages",
        }
    }

    /// Parses a route segment or import key. Unknown names are `None`; the
    /// caller decides whether that is a 404 or a rejected import.
    pub fn parse(raw: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == raw.trim().to_lowercase())
    }

    pub fn is_local(self) -> bool {
        Category::LOCAL.contains(&self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw snapshot
// ────────────────────────────────────────────────────────────────────────────

/// Raw per-category values exactly as persisted. Absent keys are a valid
/// no-data state, so every slot is optional and absent slots stay off the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Value>,
}

impl RawSnapshot {
    pub fn get(&self, category: Category) -> Option<&Value> {
        match category {
            Category::Personal => self.personal.as_ref(),
            Category::Education => self.education.as_ref(),
            Category::Experience => self.experience.as_ref(),
            Category::Volunteer => self.volunteer.as_ref(),
            Category::Project => self.project.as_ref(),
            Category::Skills => self.skills.as_ref(),
            Category::Hobbies => self.hobbies.as_ref(),
            Category::Certifications => self.certifications.as_ref(),
            Category::Languages => self.languages.as_ref(),
        }
    }

    pub fn set(&mut self, category: Category, value: Option<Value>) {
        let slot = match category {
            Category::Personal => &mut self.personal,
            Category::Education => &mut self.education,
            Category::Experience => &mut self.experience,
            Category::Volunteer => &mut self.volunteer,
            Category::Project => &mut self.project,
            Category::Skills => &mut self.skills,
            Category::Hobbies => &mut self.hobbies,
            Category::Certifications => &mut self.certifications,
            Category::Languages => &mut self.languages,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.into_iter().all(|c| self.get(c).is_none())
    }

    /// Categories currently carrying a value, in canonical order.
    pub fn present_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_some())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typed view
// ────────────────────────────────────────────────────────────────────────────

/// Fully decoded resume content, the only input the template composer sees.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResumeData {
    pub personal: Option<PersonalInfo>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub volunteer: Vec<VolunteerEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
    pub hobbies: Vec<String>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
}

impl ResumeData {
    /// Decodes a raw snapshot, category by category. Entries that fail to
    /// decode are dropped individually so the rest of the category survives.
    pub fn from_raw(raw: &RawSnapshot) -> ResumeData {
        ResumeData {
            personal: decode_personal(raw.get(Category::Personal)),
            education: decode_entries(raw.get(Category::Education), Category::Education),
            experience: decode_entries(raw.get(Category::Experience), Category::Experience),
            volunteer: decode_entries(raw.get(Category::Volunteer), Category::Volunteer),
            projects: decode_entries(raw.get(Category::Project), Category::Project),
            skills: normalize_opt(raw.get(Category::Skills), ListKind::Skill),
            hobbies: normalize_opt(raw.get(Category::Hobbies), ListKind::Hobby),
            certifications: decode_entries(
                raw.get(Category::Certifications),
                Category::Certifications,
            ),
            languages: decode_languages(raw.get(Category::Languages)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.personal.is_none()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.volunteer.is_empty()
            && self.projects.is_empty()
            && self.skills.is_empty()
            && self.hobbies.is_empty()
            && self.certifications.is_empty()
            && self.languages.is_empty()
    }
}

/// Personal details are stored as a single object, but some flows persist a
/// one-element array. A decode failure warns and yields no header block.
fn decode_personal(raw: Option<&Value>) -> Option<PersonalInfo> {
    let value = match raw {
        Some(Value::Array(items)) => items.first()?,
        Some(value) => value,
        None => return None,
    };
    match serde_json::from_value::<PersonalInfo>(value.clone()) {
        Ok(person) => Some(person),
        Err(err) => {
            warn!("personal record failed to decode, rendering without it: {err}");
            None
        }
    }
}

/// Decodes an entry list element by element. A lone object counts as a
/// one-element list; anything else decodes to empty with a warning.
fn decode_entries<T: serde::de::DeserializeOwned>(
    raw: Option<&Value>,
    category: Category,
) -> Vec<T> {
    let Some(value) = raw else {
        return Vec::new();
    };
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        other => {
            warn!(
                "{} holds a {} where a list was expected, treating as empty",
                category.key(),
                json_type_name(other)
            );
            return Vec::new();
        }
    };
    let mut decoded = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(entry) => decoded.push(entry),
            Err(err) => {
                warn!("{} entry {index} failed to decode, dropping it: {err}", category.key());
            }
        }
    }
    decoded
}

/// Languages accept both typed rows (`{name, proficiency}`) and every plain
/// list shape the normalizer knows. Typed rows win when any decode.
fn decode_languages(raw: Option<&Value>) -> Vec<LanguageEntry> {
    let Some(value) = raw else {
        return Vec::new();
    };
    if let Value::Array(items) = value {
        let typed: Vec<LanguageEntry> = items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .filter(|entry: &LanguageEntry| !entry.name.trim().is_empty())
            .collect();
        if !typed.is_empty() {
            return typed;
        }
    }
    normalize_list(value, ListKind::Language)
        .into_iter()
        .map(LanguageEntry::named)
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
