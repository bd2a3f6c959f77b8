//! Creative template — banner header and custom-property driven theming.
//!
//! The accent is set once as a CSS custom property and referenced everywhere
//! else through `var(--accent)`, so a theme change touches a single
//! declaration. Languages render as six-point dot rows; interests get a full
//! section rather than a footnote.

use crate::dates::format_range;
use crate::models::snapshot::ResumeData;
use crate::render::markup::{bullet_list, esc, meta_line, tag_list};
use crate::render::page::PageMetrics;
use crate::render::sections::Section;
use crate::render::{TemplateId, Theme};

/// Width of the proficiency dot row.
const DOT_SCALE: u8 = 6;

pub(super) fn render(data: &ResumeData, theme: &Theme) -> (PageMetrics, String, String) {
    // Banner bleeds to the page edges; the content block pads itself.
    let metrics = PageMetrics::uniform(0.0, 10.0, 1.45);
    let dates = TemplateId::Creative.date_pattern();
    let mut body = String::new();

    body.push_str(&banner_html(data));
    body.push_str("<div class=\"content\">");

    for section in [
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Languages,
        Section::Hobbies,
        Section::Education,
        Section::Volunteer,
        Section::Certifications,
    ] {
        if !section.has_content(data) {
            continue;
        }
        let title = match section {
            Section::Hobbies => "Interests",
            other => other.title(),
        };
        body.push_str(&format!("<section class=\"sec\"><h2>{}</h2>", esc(title)));
        match section {
            Section::Summary => {
                if let Some(person) = &data.personal {
                    body.push_str(&format!("<p>{}</p>", esc(person.summary.trim())));
                }
            }
            Section::Skills => {
                body.push_str(&format!(
                    "<div class=\"chips\">{}</div>",
                    tag_list(&data.skills, "chip")
                ));
            }
            Section::Experience => {
                for entry in &data.experience {
                    body.push_str(&entry_html(
                        &entry.position,
                        &meta_line(&[&entry.company_name, &entry.location], " — "),
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
            Section::Languages => body.push_str(&languages_html(data)),
            Section::Hobbies => {
                body.push_str(&format!(
                    "<div class=\"chips\">{}</div>",
                    tag_list(&data.hobbies, "chip chip-soft")
                ));
            }
            Section::Education => {
                for entry in &data.education {
                    body.push_str(&entry_html(
                        &entry.degree,
                        &meta_line(&[&entry.school_name, &entry.location], " — "),
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
            Section::Volunteer => {
                for entry in &data.volunteer {
                    body.push_str(&entry_html(
                        &entry.role,
                        &meta_line(&[&entry.organization, &entry.location], " — "),
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
            Section::Certifications => {
                for entry in &data.certifications {
                    body.push_str(&entry_html(
                        &entry.name,
                        &esc(entry.organization.trim()),
                        &crate::dates::format_date(Some(&entry.date), dates),
                        "",
                    ));
                }
            }
        }
        body.push_str("</section>");
    }

    body.push_str("</div>");
    (metrics, body, css(theme))
}

fn banner_html(data: &ResumeData) -> String {
    let Some(person) = &data.personal else {
        return String::from("<header class=\"banner\"></header>");
    };
    let mut banner = String::from("<header class=\"banner\">");
    let name = person.full_name();
    if !name.is_empty() {
        banner.push_str(&format!("<h1 class=\"name\">{}</h1>", esc(&name)));
    }
    let contact = meta_line(
        &person
            .contact_parts()
            .into_iter()
            .chain(person.link_parts())
            .collect::<Vec<_>>(),
        "  ·  ",
    );
    if !contact.is_empty() {
        banner.push_str(&format!("<div class=\"contact\">{contact}</div>"));
    }
    banner.push_str("</header>");
    banner
}

/// One row per language: name, then a six-dot proficiency gauge.
fn languages_html(data: &ResumeData) -> String {
    data.languages
        .iter()
        .filter(|entry| !entry.name.trim().is_empty())
        .map(|entry| {
            let filled = entry.proficiency.dots();
            let dots: String = (1..=DOT_SCALE)
                .map(|dot| {
                    if dot <= filled {
                        "<span class=\"dot on\"></span>"
                    } else {
                        "<span class=\"dot\"></span>"
                    }
                })
                .collect();
            format!(
                "<div class=\"lang\"><span class=\"lang-name\">{}</span>\
                 <span class=\"dots\" title=\"{}\">{dots}</span></div>",
                esc(entry.name.trim()),
                esc(entry.proficiency.label())
            )
        })
        .collect()
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
        ".tpl-creative {{ --accent: {accent}; \
         font-family: 'Helvetica Neue', Arial, sans-serif; }}\n\
         .tpl-creative .banner {{ background: var(--accent); color: #ffffff; \
         padding: 14mm 16mm 10mm; }}\n\
         .tpl-creative .name {{ font-size: 2.3em; letter-spacing: 0.03em; }}\n\
         .tpl-creative .banner .contact {{ font-size: 0.88em; \
         opacity: 0.92; margin-top: 1.5mm; }}\n\
         .tpl-creative .content {{ padding: 8mm 16mm 14mm; }}\n\
         .tpl-creative .sec {{ margin-top: 5mm; }}\n\
         .tpl-creative h2 {{ font-size: 0.95em; text-transform: uppercase; \
         letter-spacing: 0.14em; color: var(--accent); \
         margin-bottom: 2mm; }}\n\
         .tpl-creative .entry {{ margin-bottom: 2.8mm; }}\n\
         .tpl-creative .entry-head {{ display: flex; \
         justify-content: space-between; align-items: baseline; }}\n\
         .tpl-creative .entry-role {{ font-weight: 600; }}\n\
         .tpl-creative .entry-date {{ font-size: 0.85em; color: #6b7280; \
         white-space: nowrap; }}\n\
         .tpl-creative .entry-org {{ color: #4b5563; font-size: 0.9em; \
         margin-bottom: 0.8mm; }}\n\
         .tpl-creative .bullets {{ margin-left: 4.5mm; margin-top: 0.8mm; }}\n\
         .tpl-creative .chips {{ display: flex; flex-wrap: wrap; \
         gap: 1.4mm; }}\n\
         .tpl-creative .chip {{ border: 0.3mm solid var(--accent); \
         color: var(--accent); border-radius: 3mm; padding: 0.6mm 2.4mm; \
         font-size: 0.85em; }}\n\
         .tpl-creative .chip-soft {{ border-style: dashed; }}\n\
         .tpl-creative .lang {{ display: flex; align-items: center; \
         gap: 3mm; margin-bottom: 1.2mm; }}\n\
         .tpl-creative .lang-name {{ width: 34mm; }}\n\
         .tpl-creative .dots {{ display: inline-flex; gap: 1mm; }}\n\
         .tpl-creative .dot {{ width: 2.4mm; height: 2.4mm; \
         border-radius: 50%; border: 0.3mm solid var(--accent); }}\n\
         .tpl-creative .dot.on {{ background: var(--accent); }}"
    )
}
