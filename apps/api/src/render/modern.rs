//! Modern template — two-column layout with a tinted sidebar.
//!
//! The sidebar carries contact details and the list-shaped sections (skills,
//! languages, hobbies); the main column carries the narrative sections. Both
//! columns apply the omit-iff-empty gate independently.

use crate::dates::format_range;
use crate::models::snapshot::ResumeData;
use crate::render::markup::{bullet_list, esc, meta_line, tag_list};
use crate::render::page::PageMetrics;
use crate::render::sections::Section;
use crate::render::{TemplateId, Theme};

pub(super) fn render(data: &ResumeData, theme: &Theme) -> (PageMetrics, String, String) {
    // The sheet itself has no padding; each column pads to the sidebar edge.
    let metrics = PageMetrics::uniform(0.0, 10.0, 1.4);
    let mut body = String::new();
    body.push_str(&format!("<aside class=\"side\">{}</aside>", side_html(data)));
    body.push_str(&format!("<div class=\"main\">{}</div>", main_html(data)));
    (metrics, body, css(theme))
}

fn side_html(data: &ResumeData) -> String {
    let mut side = String::new();

    if let Some(person) = &data.personal {
        let contact_rows: String = person
            .contact_parts()
            .into_iter()
            .chain(person.link_parts())
            .map(|part| format!("<div class=\"row\">{}</div>", esc(part)))
            .collect();
        if !contact_rows.is_empty() {
            side.push_str(&format!(
                "<div class=\"side-sec\"><h3>Contact</h3>{contact_rows}</div>"
            ));
        }
    }

    if Section::Skills.has_content(data) {
        side.push_str(&format!(
            "<div class=\"side-sec\"><h3>{}</h3><div class=\"chips\">{}</div></div>",
            Section::Skills.title(),
            tag_list(&data.skills, "chip")
        ));
    }

    if Section::Languages.has_content(data) {
        let rows: String = data
            .languages
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(|entry| {
                format!(
                    "<div class=\"row\">{} <span class=\"lvl\">{}</span></div>",
                    esc(entry.name.trim()),
                    esc(entry.proficiency.label())
                )
            })
            .collect();
        side.push_str(&format!(
            "<div class=\"side-sec\"><h3>{}</h3>{rows}</div>",
            Section::Languages.title()
        ));
    }

    if Section::Hobbies.has_content(data) {
        let rows: String = data
            .hobbies
            .iter()
            .map(|hobby| format!("<div class=\"row\">{}</div>", esc(hobby.trim())))
            .collect();
        side.push_str(&format!(
            "<div class=\"side-sec\"><h3>{}</h3>{rows}</div>",
            Section::Hobbies.title()
        ));
    }

    side
}

fn main_html(data: &ResumeData) -> String {
    let dates = TemplateId::Modern.date_pattern();
    let mut main = String::new();

    if let Some(person) = &data.personal {
        let name = person.full_name();
        if !name.is_empty() {
            main.push_str(&format!("<h1 class=\"name\">{}</h1>", esc(&name)));
        }
    }

    for section in [
        Section::Summary,
        Section::Experience,
        Section::Projects,
        Section::Volunteer,
        Section::Education,
        Section::Certifications,
    ] {
        if !section.has_content(data) {
            continue;
        }
        main.push_str(&format!(
            "<section class=\"sec\"><h2>{}</h2>",
            esc(section.title())
        ));
        match section {
            Section::Summary => {
                if let Some(person) = &data.personal {
                    main.push_str(&format!("<p>{}</p>", esc(person.summary.trim())));
                }
            }
            Section::Experience => {
                for entry in &data.experience {
                    main.push_str(&entry_html(
                        &entry.position,
                        &meta_line(&[&entry.company_name, &entry.location], " · "),
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
            Section::Projects => {
                for entry in &data.projects {
                    let mut extra = String::new();
                    if !entry.description.trim().is_empty() {
                        extra.push_str(&format!("<p>{}</p>", esc(entry.description.trim())));
                    }
                    if let Some(outcome) = entry.display_outcome() {
                        extra.push_str(&format!("<p>{}</p>", esc(outcome)));
                    }
                    if !entry.technologies.is_empty() {
                        extra.push_str(&format!(
                            "<div class=\"chips\">{}</div>",
                            tag_list(&entry.technologies, "chip")
                        ));
                    }
                    main.push_str(&entry_html(
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
            Section::Volunteer => {
                for entry in &data.volunteer {
                    main.push_str(&entry_html(
                        &entry.role,
                        &meta_line(&[&entry.organization, &entry.location], " · "),
                        &format_range(
                            Some(&entry.start_date),
                            Some(&entry.end_date),
                            entry.present,
                            dates,
                        ),
                        &bullet_list(&entry.contributions, "bullets"),
                    ));
                }
            }
            Section::Education => {
                for entry in &data.education {
                    main.push_str(&entry_html(
                        &entry.degree,
                        &meta_line(&[&entry.school_name, &entry.location], " · "),
                        &format_range(
                            Some(&entry.start_date),
                            Some(&entry.end_date),
                            entry.present,
                            dates,
                        ),
                        &bullet_list(&entry.details, "bullets"),
                    ));
                }
            }
            Section::Certifications => {
                for entry in &data.certifications {
                    main.push_str(&entry_html(
                        &entry.name,
                        &esc(entry.organization.trim()),
                        &crate::dates::format_date(Some(&entry.date), dates),
                        "",
                    ));
                }
            }
            _ => {}
        }
        main.push_str("</section>");
    }

    main
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
        ".tpl-modern {{ font-family: 'Helvetica Neue', Arial, sans-serif; \
         display: grid; grid-template-columns: 64mm 1fr; }}\n\
         .tpl-modern .side {{ background: #f3f4f6; padding: 16mm 7mm; }}\n\
         .tpl-modern .main {{ padding: 16mm 12mm 16mm 9mm; }}\n\
         .tpl-modern .name {{ font-size: 2em; color: {accent}; \
         margin-bottom: 2mm; }}\n\
         .tpl-modern h2 {{ font-size: 0.95em; text-transform: uppercase; \
         letter-spacing: 0.1em; color: {accent}; margin-bottom: 2mm; }}\n\
         .tpl-modern h3 {{ font-size: 0.85em; text-transform: uppercase; \
         letter-spacing: 0.1em; color: {accent}; margin-bottom: 1.5mm; }}\n\
         .tpl-modern .sec {{ margin-top: 4mm; }}\n\
         .tpl-modern .side-sec {{ margin-bottom: 5mm; }}\n\
         .tpl-modern .side .row {{ font-size: 0.88em; margin-bottom: 1mm; \
         overflow-wrap: anywhere; }}\n\
         .tpl-modern .lvl {{ color: #6b7280; font-size: 0.9em; }}\n\
         .tpl-modern .entry {{ margin-bottom: 2.6mm; }}\n\
         .tpl-modern .entry-head {{ display: flex; \
         justify-content: space-between; align-items: baseline; }}\n\
         .tpl-modern .entry-role {{ font-weight: 600; }}\n\
         .tpl-modern .entry-date {{ font-size: 0.85em; color: #6b7280; \
         white-space: nowrap; }}\n\
         .tpl-modern .entry-org {{ color: #4b5563; font-size: 0.9em; \
         margin-bottom: 0.8mm; }}\n\
         .tpl-modern .bullets {{ margin-left: 4.5mm; margin-top: 0.8mm; }}\n\
         .tpl-modern .chips {{ display: flex; flex-wrap: wrap; gap: 1.2mm; \
         margin-top: 1mm; }}\n\
         .tpl-modern .chip {{ background: {accent}; color: #ffffff; \
         border-radius: 1mm; padding: 0.5mm 1.8mm; font-size: 0.82em; }}"
    )
}
