//! Shared section contract for the template composer.
//!
//! Every template walks some subset of these sections and renders a section
//! iff it has content. Empty sections are omitted entirely: no heading, no
//! placeholder, no reserved space. The plain listing view deliberately does
//! the opposite and shows explicit placeholders instead.

use crate::models::snapshot::ResumeData;

/// Renderable document sections, in the canonical single-column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Volunteer,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Hobbies,
}

impl Section {
    pub const DEFAULT_ORDER: [Section; 9] = [
        Section::Summary,
        Section::Experience,
        Section::Volunteer,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Languages,
        Section::Hobbies,
    ];

    /// Default heading text. Templates may override for their own voice.
    pub fn title(self) -> &'static str {
        match self {
            Section::Summary => "Professional Summary",
            Section::Experience => "Experience",
            Section::Volunteer => "Volunteer Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Languages => "Languages",
            Section::Hobbies => "Hobbies",
        }
    }

    /// The omit-iff-empty gate. A section with no usable content renders
    /// nothing, never an empty shell.
    pub fn has_content(self, data: &ResumeData) -> bool {
        match self {
            Section::Summary => data.personal.as_ref().map_or(false, |p| p.has_summary()),
            Section::Experience => !data.experience.is_empty(),
            Section::Volunteer => !data.volunteer.is_empty(),
            Section::Education => !data.education.is_empty(),
            Section::Skills => !data.skills.is_empty(),
            Section::Projects => !data.projects.is_empty(),
            Section::Certifications => !data.certifications.is_empty(),
            Section::Languages => !data.languages.is_empty(),
            Section::Hobbies => !data.hobbies.is_empty(),
        }
    }
}

/// Front slice of `items` up to a per-template cap. Caps apply after
/// normalization, before layout.
pub fn capped<T>(items: &[T], cap: usize) -> &[T] {
    &items[..items.len().min(cap)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::records::PersonalInfo;

    #[test]
    fn test_empty_data_has_no_sections() {
        let data = ResumeData::default();
        for section in Section::DEFAULT_ORDER {
            assert!(
                !section.has_content(&data),
                "{} must gate off on empty data",
                section.title()
            );
        }
    }

    #[test]
    fn test_summary_gates_on_summary_text_not_personal_presence() {
        let mut data = ResumeData {
            personal: Some(PersonalInfo {
                first_name: "Ada".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(
            !Section::Summary.has_content(&data),
            "a personal record without summary text is not a summary section"
        );
        data.personal.as_mut().unwrap().summary = "Analyst.".into();
        assert!(Section::Summary.has_content(&data));
    }

    #[test]
    fn test_list_sections_gate_on_emptiness() {
        let data = ResumeData {
            skills: vec!["Go".into()],
            ..Default::default()
        };
        assert!(Section::Skills.has_content(&data));
        assert!(!Section::Hobbies.has_content(&data));
    }

    #[test]
    fn test_capped_slices_from_the_front() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(capped(&items, 3), &[1, 2, 3]);
        assert_eq!(capped(&items, 10), &[1, 2, 3, 4, 5]);
        let empty: &[i32] = &[];
        assert_eq!(capped(empty, 3), empty);
    }
}
