//! Minimal template — whitespace-heavy layout over the core sections only.
//!
//! Surfaces summary, experience, education, skills and projects; everything
//! else stays off the page by design, not by emptiness. Skills and projects
//! carry caps so the generous spacing still fits one sheet.

use crate::dates::format_range;
use crate::models::snapshot::ResumeData;
use crate::render::markup::{bullet_list, esc, meta_line};
use crate::render::page::PageMetrics;
use crate::render::sections::{capped, Section};
use crate::render::{TemplateId, Theme};

const MAX_PROJECTS: usize = 3;
const MAX_SKILLS: usize = 8;

pub(super) fn render(data: &ResumeData, theme: &Theme) -> (PageMetrics, String, String) {
    let metrics = PageMetrics::uniform(24.0, 10.0, 1.65);
    let dates = TemplateId::Minimal.date_pattern();
    let mut body = String::new();

    if let Some(person) = &data.personal {
        let name = person.full_name();
        if !name.is_empty() {
            body.push_str(&format!("<h1 class=\"name\">{}</h1>", esc(&name)));
        }
        let contact = meta_line(&person.contact_parts(), "   ");
        if !contact.is_empty() {
            body.push_str(&format!("<div class=\"contact\">{contact}</div>"));
        }
    }

    for section in [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
    ] {
        if !section.has_content(data) {
            continue;
        }
        body.push_str(&format!(
            "<section class=\"sec\"><h2>{}</h2>",
            esc(section.title())
        ));
        match section {
            Section::Summary => {
                if let Some(person) = &data.personal {
                    body.push_str(&format!("<p>{}</p>", esc(person.summary.trim())));
                }
            }
            Section::Experience => {
                for entry in &data.experience {
                    body.push_str(&entry_html(
                        &entry.position,
                        &meta_line(&[&entry.company_name, &entry.location], ", "),
                        &format_range(
                            Some(&entry.start_date),
                            Some(&entry.end_date),
                            entry.present,
                            dates,
                        ),
                        &bullet_list(&entry.responsibilities, "bullets"),
                    ));
                }
            }
            Section::Education => {
                for entry in &data.education {
                    body.push_str(&entry_html(
                        &entry.degree,
                        &meta_line(&[&entry.school_name, &entry.location], ", "),
                        &format_range(
                            Some(&entry.start_date),
                            Some(&entry.end_date),
                            entry.present,
                            dates,
                        ),
                        "",
                    ));
                }
            }
            Section::Skills => {
                let kept = capped(&data.skills, MAX_SKILLS);
                body.push_str(&format!(
                    "<p>{}</p>",
                    meta_line(&kept.iter().map(String::as_str).collect::<Vec<_>>(), "   ")
                ));
            }
            Section::Projects => {
                for entry in capped(&data.projects, MAX_PROJECTS) {
                    let mut extra = String::new();
                    if !entry.description.trim().is_empty() {
                        extra.push_str(&format!("<p>{}</p>", esc(entry.description.trim())));
                    }
                    body.push_str(&entry_html(
                        entry.display_name().unwrap_or("Project"),
                        entry.display_role().unwrap_or_default(),
                        &format_range(
                            Some(&entry.start_date),
                            Some(&entry.end_date),
                            entry.present,
                            dates,
                        ),
                        &extra,
                    ));
                }
            }
            _ => {}
        }
        body.push_str("</section>");
    }

    (metrics, body, css(theme))
}

fn entry_html(heading: &str, subline: &str, date_text: &str, extra: &str) -> String {
    let mut block = String::from("<div class=\"entry\">");
    block.push_str(&format!(
        "<div class=\"entry-head\"><span class=\"entry-role\">{}</span>\
         <span class=\"entry-date\">{}</span></div>",
        esc(heading),
        esc(date_text)
    ));
    if !subline.is_empty() {
        block.push_str(&format!("<div class=\"entry-org\">{subline}</div>"));
    }
    block.push_str(extra);
    block.push_str("</div>");
    block
}

fn css(theme: &Theme) -> String {
    let accent = &theme.accent;
    format!(
        ".tpl-minimal {{ font-family: 'Helvetica Neue', Arial, sans-serif; \
         font-weight: 300; }}\n\
         .tpl-minimal .name {{ font-size: 2.2em; font-weight: 200; \
         letter-spacing: 0.12em; margin-bottom: 1mm; }}\n\
         .tpl-minimal .contact {{ font-size: 0.85em; color: #6b7280; \
         letter-spacing: 0.04em; margin-bottom: 4mm; }}\n\
         .tpl-minimal .sec {{ margin-top: 7mm; }}\n\
         .tpl-minimal h2 {{ font-size: 0.8em; font-weight: 500; \
         text-transform: uppercase; letter-spacing: 0.22em; color: {accent}; \
         margin-bottom: 2.5mm; }}\n\
         .tpl-minimal .entry {{ margin-bottom: 3.5mm; }}\n\
         .tpl-minimal .entry-head {{ display: flex; \
         justify-content: space-between; align-items: baseline; }}\n\
         .tpl-minimal .entry-role {{ font-weight: 500; }}\n\
         .tpl-minimal .entry-date {{ font-size: 0.82em; color: #9ca3af; \
         white-space: nowrap; }}\n\
         .tpl-minimal .entry-org {{ color: #6b7280; font-size: 0.9em; \
         margin-bottom: 0.8mm; }}\n\
         .tpl-minimal .bullets {{ margin-left: 4.5mm; list-style: none; }}\n\
         .tpl-minimal .bullets li::before {{ content: \"–  \"; \
         color: {accent}; }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::records::{LanguageEntry, VolunteerEntry};

    fn make_theme() -> Theme {
        Theme {
            accent: "#111111".to_string(),
            font_scale: 1.0,
        }
    }

    #[test]
    fn test_non_core_sections_stay_off_the_page() {
        let data = ResumeData {
            volunteer: vec![VolunteerEntry {
                role: "Mentor".into(),
                ..Default::default()
            }],
            hobbies: vec!["chess".into()],
            languages: vec![LanguageEntry::named("French".into())],
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(
            !body.contains("Mentor"),
            "minimal surfaces only the core sections regardless of data"
        );
        assert!(!body.contains("chess"));
        assert!(!body.contains("French"));
    }

    #[test]
    fn test_skills_are_capped() {
        let data = ResumeData {
            skills: (1..=12).map(|n| format!("Skill{n}")).collect(),
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(body.contains("Skill8"));
        assert!(!body.contains("Skill9"));
    }

    #[test]
    fn test_generous_geometry() {
        let (metrics, _, _) = render(&ResumeData::default(), &make_theme());
        assert!(metrics.margin_left_mm >= 20.0);
        assert!(metrics.line_height > 1.5);
    }
}
