//! Template composition — six interchangeable layouts over one data model.
//!
//! Every template implements the same contract: take the decoded
//! [`ResumeData`](crate::models::snapshot::ResumeData) plus a resolved
//! [`Theme`], emit page markup, a stylesheet and its page geometry. The
//! composer wraps that into a [`RenderedDocument`] ready for the preview and
//! print shells. Switching templates re-renders the same data; it never
//! touches stored records.

pub mod handlers;
pub mod listing;
pub mod markup;
pub mod page;
pub mod sections;

mod classic;
mod compact;
mod creative;
mod executive;
mod minimal;
mod modern;

use serde::{Deserialize, Deserializer, Serialize};

use crate::dates::DatePattern;
use crate::models::snapshot::ResumeData;
use crate::render::page::page_css;

// ────────────────────────────────────────────────────────────────────────────
// Template identity
// ────────────────────────────────────────────────────────────────────────────

/// Stable template identifiers. `Classic` is the deterministic fallback for
/// any identifier nobody recognizes, so selection can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Compact,
    Executive,
    Minimal,
    Creative,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Compact,
        TemplateId::Executive,
        TemplateId::Minimal,
        TemplateId::Creative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Compact => "compact",
            TemplateId::Executive => "executive",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
        }
    }

    /// Total parse: unknown or blank identifiers fall back to the default
    /// template, never to an error.
    pub fn parse(raw: &str) -> TemplateId {
        let needle = raw.trim().to_lowercase();
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .unwrap_or_default()
    }

    /// Catalog label.
    pub fn label(self) -> &'static str {
        match self {
            TemplateId::Classic => "Classic",
            TemplateId::Modern => "Modern",
            TemplateId::Compact => "Compact",
            TemplateId::Executive => "Executive",
            TemplateId::Minimal => "Minimal",
            TemplateId::Creative => "Creative",
        }
    }

    /// One-line catalog description.
    pub fn description(self) -> &'static str {
        match self {
            TemplateId::Classic => "Single-column serif layout with understated rule lines.",
            TemplateId::Modern => "Two-column layout with a tinted sidebar and skill chips.",
            TemplateId::Compact => "Dense single column tuned to fit long histories on one page.",
            TemplateId::Executive => "Formal serif layout with personal particulars and declaration.",
            TemplateId::Minimal => "Whitespace-heavy layout surfacing only the core sections.",
            TemplateId::Creative => "Banner header, accent theming and prominent interest sections.",
        }
    }

    /// Accent used when the selection carries none (or an invalid one).
    pub fn default_accent(self) -> &'static str {
        match self {
            TemplateId::Classic => "#1f3a5f",
            TemplateId::Modern => "#0e7490",
            TemplateId::Compact => "#374151",
            TemplateId::Executive => "#5b3a29",
            TemplateId::Minimal => "#111111",
            TemplateId::Creative => "#c2410c",
        }
    }

    /// Date style for the family. The formal family spells out the day.
    pub fn date_pattern(self) -> DatePattern {
        match self {
            TemplateId::Executive => DatePattern::DayMonthYear,
            _ => DatePattern::MonthYear,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection and theme
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_FONT_SCALE: f32 = 0.8;
pub const MAX_FONT_SCALE: f32 = 1.25;

/// The user-held choice of template plus optional theme overrides. This is
/// what `PUT /api/v1/selection` updates and every render consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSelection {
    #[serde(default, deserialize_with = "lenient_template_id")]
    pub template: TemplateId,
    /// Hex accent override, e.g. `#0e7490`. Invalid values are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Multiplier on the template's base font size, clamped on resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<f32>,
}

impl Default for TemplateSelection {
    fn default() -> Self {
        TemplateSelection {
            template: TemplateId::default(),
            accent: None,
            font_scale: None,
        }
    }
}

impl TemplateSelection {
    pub fn of(template: TemplateId) -> TemplateSelection {
        TemplateSelection {
            template,
            ..Default::default()
        }
    }
}

fn lenient_template_id<'de, D>(deserializer: D) -> Result<TemplateId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(TemplateId::parse(&raw))
}

/// Resolved theme values a template can use without further validation.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: String,
    pub font_scale: f32,
}

impl Theme {
    /// Applies the selection's overrides over the template's defaults.
    /// Invalid accents fall back; out-of-range font scales clamp.
    pub fn resolve(selection: &TemplateSelection) -> Theme {
        let accent = selection
            .accent
            .as_deref()
            .map(str::trim)
            .filter(|candidate| is_hex_color(candidate))
            .unwrap_or_else(|| selection.template.default_accent())
            .to_string();
        let font_scale = selection
            .font_scale
            .unwrap_or(1.0)
            .clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
        Theme { accent, font_scale }
    }
}

fn is_hex_color(raw: &str) -> bool {
    match raw.strip_prefix('#') {
        Some(body) => {
            (body.len() == 3 || body.len() == 6) && body.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// One composed A4 document: sheet markup plus its full stylesheet.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub template: TemplateId,
    pub title: String,
    pub page_html: String,
    pub css: String,
}

/// Composes the selected template over decoded data. Pure and total: any
/// `ResumeData`, including the empty one, renders to a valid sheet.
pub fn compose(data: &ResumeData, selection: &TemplateSelection) -> RenderedDocument {
    let theme = Theme::resolve(selection);
    let template = selection.template;
    let (metrics, body, template_css) = match template {
        TemplateId::Classic => classic::render(data, &theme),
        TemplateId::Modern => modern::render(data, &theme),
        TemplateId::Compact => compact::render(data, &theme),
        TemplateId::Executive => executive::render(data, &theme),
        TemplateId::Minimal => minimal::render(data, &theme),
        TemplateId::Creative => creative::render(data, &theme),
    };
    let title = data
        .personal
        .as_ref()
        .map(|person| person.full_name())
        .filter(|name| !name.is_empty())
        .map(|name| format!("{name} - Resume"))
        .unwrap_or_else(|| "Resume".to_string());
    RenderedDocument {
        template,
        title,
        page_html: format!(
            "<div class=\"sheet tpl-{}\">{}</div>",
            template.as_str(),
            body
        ),
        css: format!("{}\n{}", page_css(&metrics, theme.font_scale), template_css),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendation
// ────────────────────────────────────────────────────────────────────────────

/// Job-target category to suggested template. Fixed table; lookups are exact
/// on the normalized category name.
const TEMPLATE_RECOMMENDATIONS: &[(&str, TemplateId)] = &[
    ("software", TemplateId::Modern),
    ("engineering", TemplateId::Modern),
    ("data", TemplateId::Modern),
    ("finance", TemplateId::Executive),
    ("legal", TemplateId::Executive),
    ("management", TemplateId::Executive),
    ("design", TemplateId::Creative),
    ("marketing", TemplateId::Creative),
    ("media", TemplateId::Creative),
    ("academic", TemplateId::Classic),
    ("research", TemplateId::Classic),
    ("healthcare", TemplateId::Classic),
    ("operations", TemplateId::Compact),
    ("administration", TemplateId::Compact),
    ("consulting", TemplateId::Minimal),
    ("product", TemplateId::Minimal),
];

/// Suggests a template for a declared job target. Unknown targets get the
/// default template rather than an error.
pub fn recommend_template(job_target: &str) -> TemplateId {
    let needle = job_target.trim().to_lowercase();
    TEMPLATE_RECOMMENDATIONS
        .iter()
        .find(|(category, _)| *category == needle)
        .map(|(_, template)| *template)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::records::{ExperienceEntry, PersonalInfo};
    use crate::models::snapshot::RawSnapshot;
    use serde_json::json;

    fn make_full_data() -> ResumeData {
        let mut raw = RawSnapshot::default();
        raw.set(
            crate::models::snapshot::Category::Personal,
            Some(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "summary": "Analyst and the first programmer."
            })),
        );
        raw.set(
            crate::models::snapshot::Category::Experience,
            Some(json!([{
                "position": "Engineer",
                "company_name": "Analytical Engines",
                "start_date": "2022-01-01",
                "end_date": "",
                "present": true,
                "responsibilities": ["Wrote the first program", "Reviewed <punch cards>"]
            }])),
        );
        raw.set(
            crate::models::snapshot::Category::Skills,
            Some(json!([{ "skill_name": "Go" }, { "skill_name": "Rust" }])),
        );
        ResumeData::from_raw(&raw)
    }

    #[test]
    fn test_parse_known_identifiers() {
        assert_eq!(TemplateId::parse("modern"), TemplateId::Modern);
        assert_eq!(TemplateId::parse("  EXECUTIVE "), TemplateId::Executive);
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_default() {
        assert_eq!(
            TemplateId::parse("gothic"),
            TemplateId::Classic,
            "unknown identifiers must select the default deterministically"
        );
        assert_eq!(TemplateId::parse(""), TemplateId::Classic);
    }

    #[test]
    fn test_selection_deserializes_unknown_template_leniently() {
        let selection: TemplateSelection =
            serde_json::from_value(json!({ "template": "gothic" }))
                .expect("unknown template name must not fail the body");
        assert_eq!(selection.template, TemplateId::Classic);
    }

    #[test]
    fn test_theme_resolves_defaults_and_overrides() {
        let default_theme = Theme::resolve(&TemplateSelection::of(TemplateId::Modern));
        assert_eq!(default_theme.accent, TemplateId::Modern.default_accent());
        assert!((default_theme.font_scale - 1.0).abs() < f32::EPSILON);

        let custom = Theme::resolve(&TemplateSelection {
            template: TemplateId::Modern,
            accent: Some("#A1B2c3".to_string()),
            font_scale: Some(1.1),
        });
        assert_eq!(custom.accent, "#A1B2c3");
    }

    #[test]
    fn test_theme_rejects_bad_accent_and_clamps_scale() {
        let theme = Theme::resolve(&TemplateSelection {
            template: TemplateId::Classic,
            accent: Some("red; } body { display: none".to_string()),
            font_scale: Some(9.0),
        });
        assert_eq!(
            theme.accent,
            TemplateId::Classic.default_accent(),
            "non-hex accents must not reach the stylesheet"
        );
        assert!((theme.font_scale - MAX_FONT_SCALE).abs() < f32::EPSILON);

        let tiny = Theme::resolve(&TemplateSelection {
            template: TemplateId::Classic,
            accent: None,
            font_scale: Some(0.1),
        });
        assert!((tiny.font_scale - MIN_FONT_SCALE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_compose_renders_header_dates_and_escapes() {
        let document = compose(&make_full_data(), &TemplateSelection::default());
        assert_eq!(document.template, TemplateId::Classic);
        assert_eq!(document.title, "Ada Lovelace - Resume");
        assert!(document.page_html.contains("Ada Lovelace"));
        assert!(document.page_html.contains("Analytical Engines"));
        assert!(
            document.page_html.contains("Jan 2022 - Present"),
            "ongoing entry must format start and read Present"
        );
        assert!(
            document.page_html.contains("&lt;punch cards&gt;"),
            "markup characters in form data must render as text"
        );
        assert!(document.page_html.contains("Go"));
        assert!(document.page_html.contains("Rust"));
    }

    #[test]
    fn test_compose_omits_empty_sections() {
        let document = compose(&make_full_data(), &TemplateSelection::default());
        assert!(
            !document.page_html.contains("Hobbies"),
            "an empty category must not leave a heading behind"
        );
        assert!(!document.page_html.contains("Volunteer"));
    }

    #[test]
    fn test_compose_is_total_over_empty_data() {
        for template in TemplateId::ALL {
            let document = compose(&ResumeData::default(), &TemplateSelection::of(template));
            assert!(
                document.page_html.starts_with("<div class=\"sheet"),
                "{} must render a sheet for empty data",
                template.as_str()
            );
            assert!(document.css.contains("size: A4"));
            assert_eq!(document.title, "Resume");
        }
    }

    #[test]
    fn test_every_template_renders_full_fixture() {
        let data = make_full_data();
        for template in TemplateId::ALL {
            let document = compose(&data, &TemplateSelection::of(template));
            assert!(
                document.page_html.contains("Ada Lovelace"),
                "{} must render the header",
                template.as_str()
            );
            assert!(
                document.css.contains("width: 210mm"),
                "{} must keep A4 geometry",
                template.as_str()
            );
        }
    }

    #[test]
    fn test_templates_differ_in_markup() {
        let data = make_full_data();
        let classic = compose(&data, &TemplateSelection::of(TemplateId::Classic));
        let modern = compose(&data, &TemplateSelection::of(TemplateId::Modern));
        assert_ne!(
            classic.page_html, modern.page_html,
            "switching templates must change presentation"
        );
        assert_ne!(classic.css, modern.css);
    }

    #[test]
    fn test_switching_template_reuses_same_data() {
        let data = make_full_data();
        for template in [TemplateId::Compact, TemplateId::Creative, TemplateId::Minimal] {
            let document = compose(&data, &TemplateSelection::of(template));
            assert!(
                document.page_html.contains("Analytical Engines"),
                "{} renders from the same records",
                template.as_str()
            );
        }
    }

    #[test]
    fn test_single_experience_document_end_to_end() {
        // Personal details plus one ongoing experience, nothing else stored.
        let mut raw = RawSnapshot::default();
        raw.set(
            crate::models::snapshot::Category::Personal,
            Some(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com"
            })),
        );
        raw.set(
            crate::models::snapshot::Category::Experience,
            Some(json!([{
                "position": "Engineer",
                "company_name": "Analytical Co",
                "start_date": "2022-01-01",
                "end_date": "",
                "present": true,
                "responsibilities": ["Designed algorithms"]
            }])),
        );
        let data = ResumeData::from_raw(&raw);

        let document = compose(&data, &TemplateSelection::of(TemplateId::Classic));
        assert!(document.page_html.contains("Ada Lovelace"));
        assert!(document.page_html.contains("ada@example.com"));
        assert!(document.page_html.contains("Engineer"));
        assert!(document.page_html.contains("Analytical Co"));
        assert!(document.page_html.contains("Jan 2022 - Present"));
        assert!(document.page_html.contains("Designed algorithms"));
        for absent in ["Education", "Skills", "Projects", "Hobbies"] {
            assert!(
                !document.page_html.contains(absent),
                "empty {absent} must not leave a heading alongside the populated experience"
            );
        }
    }

    #[test]
    fn test_recommendation_table_and_fallback() {
        assert_eq!(recommend_template("software"), TemplateId::Modern);
        assert_eq!(recommend_template(" Finance "), TemplateId::Executive);
        assert_eq!(recommend_template("design"), TemplateId::Creative);
        assert_eq!(
            recommend_template("zookeeping"),
            TemplateId::Classic,
            "unknown targets fall back to the default template"
        );
    }

    #[test]
    fn test_experience_present_flag_survives_decode() {
        // Guards the fixture the compose tests rely on.
        let data = make_full_data();
        let entry: &ExperienceEntry = &data.experience[0];
        assert!(entry.present);
        assert!(data.personal.as_ref().map_or(false, PersonalInfo::has_summary));
    }
}
