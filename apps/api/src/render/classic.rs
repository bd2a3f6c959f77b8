//! Classic template — single-column serif layout, the default family.
//!
//! Walks the canonical section order and renders every section that carries
//! content. Accent color is applied as solid ink on headings and rules.

use crate::dates::{format_date, format_range};
use crate::models::snapshot::ResumeData;
use crate::render::markup::{bullet_list, esc, meta_line};
use crate::render::page::PageMetrics;
use crate::render::sections::Section;
use crate::render::{TemplateId, Theme};

pub(super) fn render(data: &ResumeData, theme: &Theme) -> (PageMetrics, String, String) {
    let metrics = PageMetrics::uniform(18.0, 10.5, 1.45);
    let dates = TemplateId::Classic.date_pattern();
    let mut body = String::new();

    if let Some(person) = &data.personal {
        let name = person.full_name();
        if !name.is_empty() {
            body.push_str(&format!("<h1 class=\"name\">{}</h1>", esc(&name)));
        }
        let contact = meta_line(&person.contact_parts(), " | ");
        if !contact.is_empty() {
            body.push_str(&format!("<div class=\"contact\">{contact}</div>"));
        }
        let links = meta_line(&person.link_parts(), " | ");
        if !links.is_empty() {
            body.push_str(&format!("<div class=\"contact links\">{links}</div>"));
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
        let inner = match section {
            Section::Summary => summary_html(data),
            Section::Experience => experience_html(data, dates),
            Section::Volunteer => volunteer_html(data, dates),
            Section::Education => education_html(data, dates),
            Section::Skills => inline_list_html(&data.skills),
            Section::Projects => projects_html(data, dates),
            Section::Certifications => certifications_html(data, dates),
            Section::Languages => languages_html(data),
            Section::Hobbies => inline_list_html(&data.hobbies),
        };
        body.push_str(&inner);
        body.push_str("</section>");
    }

    (metrics, body, css(theme))
}

fn entry_block(heading: &str, date_text: &str, subline: &str, extra: &str) -> String {
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

fn summary_html(data: &ResumeData) -> String {
    match &data.personal {
        Some(person) => format!("<p class=\"summary\">{}</p>", esc(person.summary.trim())),
        None => String::new(),
    }
}

fn experience_html(data: &ResumeData, dates: crate::dates::DatePattern) -> String {
    data.experience
        .iter()
        .map(|entry| {
            entry_block(
                &entry.position,
                &format_range(
                    Some(&entry.start_date),
                    Some(&entry.end_date),
                    entry.present,
                    dates,
                ),
                &meta_line(&[&entry.company_name, &entry.location], ", "),
                &bullet_list(&entry.responsibilities, "bullets"),
            )
        })
        .collect()
}

fn volunteer_html(data: &ResumeData, dates: crate::dates::DatePattern) -> String {
    data.volunteer
        .iter()
        .map(|entry| {
            entry_block(
                &entry.role,
                &format_range(
                    Some(&entry.start_date),
                    Some(&entry.end_date),
                    entry.present,
                    dates,
                ),
                &meta_line(&[&entry.organization, &entry.location], ", "),
                &bullet_list(&entry.contributions, "bullets"),
            )
        })
        .collect()
}

fn education_html(data: &ResumeData, dates: crate::dates::DatePattern) -> String {
    data.education
        .iter()
        .map(|entry| {
            entry_block(
                &entry.degree,
                &format_range(
                    Some(&entry.start_date),
                    Some(&entry.end_date),
                    entry.present,
                    dates,
                ),
                &meta_line(&[&entry.school_name, &entry.location], ", "),
                &bullet_list(&entry.details, "bullets"),
            )
        })
        .collect()
}

fn projects_html(data: &ResumeData, dates: crate::dates::DatePattern) -> String {
    data.projects
        .iter()
        .map(|entry| {
            let mut extra = String::new();
            let description = entry.description.trim();
            if !description.is_empty() {
                extra.push_str(&format!("<p>{}</p>", esc(description)));
            }
            if let Some(outcome) = entry.display_outcome() {
                extra.push_str(&format!(
                    "<p class=\"outcome\">Outcome: {}</p>",
                    esc(outcome)
                ));
            }
            let tech = meta_line(
                &entry.technologies.iter().map(String::as_str).collect::<Vec<_>>(),
                ", ",
            );
            if !tech.is_empty() {
                extra.push_str(&format!("<div class=\"tech\">Technologies: {tech}</div>"));
            }
            let link = entry.link.trim();
            if !link.is_empty() {
                extra.push_str(&format!("<div class=\"tech\">{}</div>", esc(link)));
            }
            entry_block(
                entry.display_name().unwrap_or("Project"),
                &format_range(
                    Some(&entry.start_date),
                    Some(&entry.end_date),
                    entry.present,
                    dates,
                ),
                &esc(entry.display_role().unwrap_or_default()),
                &extra,
            )
        })
        .collect()
}

fn certifications_html(data: &ResumeData, dates: crate::dates::DatePattern) -> String {
    data.certifications
        .iter()
        .map(|entry| {
            entry_block(
                &entry.name,
                &format_date(Some(&entry.date), dates),
                &esc(entry.organization.trim()),
                "",
            )
        })
        .collect()
}

fn languages_html(data: &ResumeData) -> String {
    let rows: Vec<String> = data
        .languages
        .iter()
        .filter(|entry| !entry.name.trim().is_empty())
        .map(|entry| format!("{} ({})", entry.name.trim(), entry.proficiency.label()))
        .collect();
    format!(
        "<p class=\"inline-list\">{}</p>",
        meta_line(&rows.iter().map(String::as_str).collect::<Vec<_>>(), ", ")
    )
}

fn inline_list_html(items: &[String]) -> String {
    format!(
        "<p class=\"inline-list\">{}</p>",
        meta_line(&items.iter().map(String::as_str).collect::<Vec<_>>(), " · ")
    )
}

fn css(theme: &Theme) -> String {
    let accent = &theme.accent;
    format!(
        ".tpl-classic {{ font-family: Georgia, 'Times New Roman', serif; }}\n\
         .tpl-classic .name {{ font-size: 2.1em; text-align: center; \
         letter-spacing: 0.04em; margin-bottom: 1.5mm; }}\n\
         .tpl-classic .contact {{ text-align: center; font-size: 0.88em; \
         color: #4b5563; margin-bottom: 1mm; }}\n\
         .tpl-classic .sec {{ margin-top: 4.5mm; }}\n\
         .tpl-classic h2 {{ font-size: 0.92em; text-transform: uppercase; \
         letter-spacing: 0.12em; color: {accent}; \
         border-bottom: 0.4mm solid {accent}; padding-bottom: 0.8mm; \
         margin-bottom: 2.2mm; }}\n\
         .tpl-classic .entry {{ margin-bottom: 2.8mm; }}\n\
         .tpl-classic .entry-head {{ display: flex; \
         justify-content: space-between; align-items: baseline; }}\n\
         .tpl-classic .entry-role {{ font-weight: bold; }}\n\
         .tpl-classic .entry-date {{ font-size: 0.85em; color: #6b7280; \
         white-space: nowrap; }}\n\
         .tpl-classic .entry-org {{ font-style: italic; color: #4b5563; \
         font-size: 0.92em; margin-bottom: 0.8mm; }}\n\
         .tpl-classic .bullets {{ margin-left: 5mm; margin-top: 0.8mm; }}\n\
         .tpl-classic .bullets li {{ margin-bottom: 0.6mm; }}\n\
         .tpl-classic .outcome {{ margin-top: 0.6mm; }}\n\
         .tpl-classic .tech {{ font-size: 0.88em; color: #4b5563; \
         margin-top: 0.6mm; }}\n\
         .tpl-classic .summary, .tpl-classic .inline-list {{ margin: 0; }}"
    )
}
