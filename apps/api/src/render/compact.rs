//! Compact template — dense single column tuned for one-page fit.
//!
//! Long histories are truncated rather than paginated: per-entry bullet lists
//! and the project list are capped and the tail is silently dropped. Caps
//! apply after normalization, before layout.

use crate::dates::{format_date, format_range};
use crate::models::snapshot::ResumeData;
use crate::render::markup::{bullet_list, esc, meta_line};
use crate::render::page::PageMetrics;
use crate::render::sections::{capped, Section};
use crate::render::{TemplateId, Theme};

/// Bullets kept per entry.
const MAX_BULLETS: usize = 3;
/// Projects kept overall.
const MAX_PROJECTS: usize = 4;

pub(super) fn render(data: &ResumeData, theme: &Theme) -> (PageMetrics, String, String) {
    let metrics = PageMetrics::uniform(12.0, 9.0, 1.3);
    let dates = TemplateId::Compact.date_pattern();
    let mut body = String::new();

    if let Some(person) = &data.personal {
        let name = person.full_name();
        if !name.is_empty() {
            body.push_str(&format!("<h1 class=\"name\">{}</h1>", esc(&name)));
        }
        let contact = meta_line(
            &person
                .contact_parts()
                .into_iter()
                .chain(person.link_parts())
                .collect::<Vec<_>>(),
            " · ",
        );
        if !contact.is_empty() {
            body.push_str(&format!("<div class=\"contact\">{contact}</div>"));
        }
    }

    for section in Section::DEFAULT_ORDER {
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
                    body.push_str(&row_html(
                        &entry.position,
                        &meta_line(&[&entry.company_name, &entry.location], ", "),
                        &format_range(
                            Some(&entry.start_date),
                            Some(&entry.end_date),
                            entry.present,
                            dates,
                        ),
                        &bullet_list(capped(&entry.responsibilities, MAX_BULLETS), "bullets"),
                    ));
                }
            }
            Section::Volunteer => {
                for entry in &data.volunteer {
                    body.push_str(&row_html(
                        &entry.role,
                        &meta_line(&[&entry.organization, &entry.location], ", "),
                        &format_range(
                            Some(&entry.start_date),
                            Some(&entry.end_date),
                            entry.present,
                            dates,
                        ),
                        &bullet_list(capped(&entry.contributions, MAX_BULLETS), "bullets"),
                    ));
                }
            }
            Section::Education => {
                for entry in &data.education {
                    body.push_str(&row_html(
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
            Section::Projects => {
                for entry in capped(&data.projects, MAX_PROJECTS) {
                    let mut extra = String::new();
                    if !entry.description.trim().is_empty() {
                        extra.push_str(&format!("<p>{}</p>", esc(entry.description.trim())));
                    }
                    body.push_str(&row_html(
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
            Section::Certifications => {
                for entry in &data.certifications {
                    body.push_str(&row_html(
                        &entry.name,
                        &esc(entry.organization.trim()),
                        &format_date(Some(&entry.date), dates),
                        "",
                    ));
                }
            }
            Section::Skills => body.push_str(&inline_html(&data.skills)),
            Section::Hobbies => body.push_str(&inline_html(&data.hobbies)),
            Section::Languages => {
                let rows: Vec<String> = data
                    .languages
                    .iter()
                    .filter(|entry| !entry.name.trim().is_empty())
                    .map(|entry| format!("{} ({})", entry.name.trim(), entry.proficiency.label()))
                    .collect();
                body.push_str(&inline_html(&rows));
            }
        }
        body.push_str("</section>");
    }

    (metrics, body, css(theme))
}

fn row_html(heading: &str, subline: &str, date_text: &str, extra: &str) -> String {
    let mut row = String::from("<div class=\"entry\"><div class=\"entry-head\">");
    row.push_str(&format!("<span class=\"entry-role\">{}</span>", esc(heading)));
    if !subline.is_empty() {
        row.push_str(&format!("<span class=\"entry-org\">{subline}</span>"));
    }
    row.push_str(&format!(
        "<span class=\"entry-date\">{}</span></div>",
        esc(date_text)
    ));
    row.push_str(extra);
    row.push_str("</div>");
    row
}

fn inline_html(items: &[String]) -> String {
    format!(
        "<p class=\"inline-list\">{}</p>",
        meta_line(&items.iter().map(String::as_str).collect::<Vec<_>>(), " · ")
    )
}

fn css(theme: &Theme) -> String {
    let accent = &theme.accent;
    format!(
        ".tpl-compact {{ font-family: 'Helvetica Neue', Arial, sans-serif; }}\n\
         .tpl-compact .name {{ font-size: 1.7em; margin-bottom: 0.8mm; }}\n\
         .tpl-compact .contact {{ font-size: 0.88em; color: #4b5563; \
         margin-bottom: 2mm; }}\n\
         .tpl-compact .sec {{ margin-top: 2.6mm; }}\n\
         .tpl-compact h2 {{ font-size: 0.88em; text-transform: uppercase; \
         letter-spacing: 0.08em; color: {accent}; \
         border-bottom: 0.3mm solid #d1d5db; margin-bottom: 1.2mm; }}\n\
         .tpl-compact .entry {{ margin-bottom: 1.6mm; }}\n\
         .tpl-compact .entry-head {{ display: flex; gap: 2mm; \
         align-items: baseline; }}\n\
         .tpl-compact .entry-role {{ font-weight: 600; }}\n\
         .tpl-compact .entry-org {{ color: #4b5563; }}\n\
         .tpl-compact .entry-date {{ margin-left: auto; color: #6b7280; \
         font-size: 0.85em; white-space: nowrap; }}\n\
         .tpl-compact .bullets {{ margin-left: 4mm; }}\n\
         .tpl-compact .inline-list {{ margin: 0; }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::records::{ExperienceEntry, ProjectEntry};

    fn make_theme() -> Theme {
        Theme {
            accent: "#374151".to_string(),
            font_scale: 1.0,
        }
    }

    #[test]
    fn test_bullets_are_capped_per_entry() {
        let data = ResumeData {
            experience: vec![ExperienceEntry {
                position: "Engineer".into(),
                responsibilities: (1..=6).map(|n| format!("Duty {n}")).collect(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(body.contains("Duty 3"));
        assert!(
            !body.contains("Duty 4"),
            "bullets beyond the cap are dropped silently"
        );
    }

    #[test]
    fn test_projects_are_capped() {
        let data = ResumeData {
            projects: (1..=6)
                .map(|n| ProjectEntry {
                    name: format!("Project {n}"),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(body.contains("Project 4"));
        assert!(!body.contains("Project 5"));
    }

    #[test]
    fn test_short_lists_are_untouched() {
        let data = ResumeData {
            experience: vec![ExperienceEntry {
                position: "Engineer".into(),
                responsibilities: vec!["Only duty".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(body.contains("Only duty"));
    }

    #[test]
    fn test_dense_geometry() {
        let (metrics, _, _) = render(&ResumeData::default(), &make_theme());
        assert!(metrics.margin_left_mm < 15.0);
        assert!(metrics.base_font_pt < 10.0);
    }
}
