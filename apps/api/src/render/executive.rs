//! Executive template — formal serif layout for conservative industries.
//!
//! The only variant that renders the extended personal particulars
//! (nationality, date of birth, passport) and a closing declaration, and the
//! only one on the day-month-year date style. When no explicit languages are
//! stored it synthesizes a "Language Skills" block from certification names,
//! a convention carried over from paper CVs where language credentials are
//! filed as certificates.

use crate::dates::{format_date, format_range};
use crate::models::snapshot::ResumeData;
use crate::render::markup::{bullet_list, esc, meta_line};
use crate::render::page::PageMetrics;
use crate::render::sections::Section;
use crate::render::{TemplateId, Theme};

pub(super) fn render(data: &ResumeData, theme: &Theme) -> (PageMetrics, String, String) {
    let metrics = PageMetrics::uniform(20.0, 10.5, 1.5);
    let dates = TemplateId::Executive.date_pattern();
    let mut body = String::new();

    if let Some(person) = &data.personal {
        let name = person.full_name();
        if !name.is_empty() {
            body.push_str(&format!("<h1 class=\"name\">{}</h1>", esc(&name)));
        }
        let contact = meta_line(&person.contact_parts(), "  |  ");
        if !contact.is_empty() {
            body.push_str(&format!("<div class=\"contact\">{contact}</div>"));
        }
        body.push_str(&particulars_html(data, dates));
    }

    for section in [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Volunteer,
    ] {
        if !section.has_content(data) {
            continue;
        }
        body.push_str(&format!(
            "<section class=\"sec\"><h2>{}</h2>",
            esc(section.title())
        ));
        body.push_str(&section_html(data, section, dates));
        body.push_str("</section>");
    }

    body.push_str(&language_skills_html(data));

    if let Some(person) = &data.personal {
        let declaration = person.declaration.trim();
        if !declaration.is_empty() {
            body.push_str(&format!(
                "<section class=\"sec\"><h2>Declaration</h2>\
                 <p class=\"declaration\">{}</p></section>",
                esc(declaration)
            ));
        }
    }

    (metrics, body, css(theme))
}

/// Labelled rows for the extended personal fields. Absent fields leave no row.
fn particulars_html(data: &ResumeData, dates: crate::dates::DatePattern) -> String {
    let Some(person) = &data.personal else {
        return String::new();
    };
    let mut rows = String::new();
    let mut push_row = |label: &str, value: &str| {
        let value = value.trim();
        if !value.is_empty() {
            rows.push_str(&format!(
                "<div class=\"row\"><span class=\"label\">{}</span>{}</div>",
                esc(label),
                esc(value)
            ));
        }
    };
    push_row("Nationality", &person.nationality);
    push_row(
        "Date of Birth",
        &format_date(Some(&person.date_of_birth), dates),
    );
    push_row("Passport No.", &person.passport_number);
    if rows.is_empty() {
        String::new()
    } else {
        format!("<div class=\"particulars\">{rows}</div>")
    }
}

/// Explicit languages when stored; otherwise certification names stand in as
/// language credentials. Both empty means no block at all.
fn language_skills_html(data: &ResumeData) -> String {
    let names: Vec<String> = if !data.languages.is_empty() {
        data.languages
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(|entry| format!("{} ({})", entry.name.trim(), entry.proficiency.label()))
            .collect()
    } else {
        data.certifications
            .iter()
            .map(|entry| entry.name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    };
    if names.is_empty() {
        return String::new();
    }
    format!(
        "<section class=\"sec\"><h2>Language Skills</h2><p>{}</p></section>",
        meta_line(&names.iter().map(String::as_str).collect::<Vec<_>>(), ", ")
    )
}

fn section_html(data: &ResumeData, section: Section, dates: crate::dates::DatePattern) -> String {
    match section {
        Section::Summary => data
            .personal
            .as_ref()
            .map(|person| format!("<p>{}</p>", esc(person.summary.trim())))
            .unwrap_or_default(),
        Section::Experience => data
            .experience
            .iter()
            .map(|entry| {
                entry_html(
                    &entry.position,
                    &meta_line(&[&entry.company_name, &entry.location], ", "),
                    &format_range(
                        Some(&entry.start_date),
                        Some(&entry.end_date),
                        entry.present,
                        dates,
                    ),
                    &bullet_list(&entry.responsibilities, "bullets"),
                )
            })
            .collect(),
        Section::Education => data
            .education
            .iter()
            .map(|entry| {
                entry_html(
                    &entry.degree,
                    &meta_line(&[&entry.school_name, &entry.location], ", "),
                    &format_range(
                        Some(&entry.start_date),
                        Some(&entry.end_date),
                        entry.present,
                        dates,
                    ),
                    &bullet_list(&entry.details, "bullets"),
                )
            })
            .collect(),
        Section::Skills => format!(
            "<p>{}</p>",
            meta_line(
                &data.skills.iter().map(String::as_str).collect::<Vec<_>>(),
                ", "
            )
        ),
        Section::Projects => data
            .projects
            .iter()
            .map(|entry| {
                let mut extra = String::new();
                if !entry.description.trim().is_empty() {
                    extra.push_str(&format!("<p>{}</p>", esc(entry.description.trim())));
                }
                if let Some(outcome) = entry.display_outcome() {
                    extra.push_str(&format!("<p>{}</p>", esc(outcome)));
                }
                entry_html(
                    entry.display_name().unwrap_or("Project"),
                    entry.display_role().unwrap_or_default(),
                    &format_range(
                        Some(&entry.start_date),
                        Some(&entry.end_date),
                        entry.present,
                        dates,
                    ),
                    &extra,
                )
            })
            .collect(),
        Section::Certifications => data
            .certifications
            .iter()
            .map(|entry| {
                entry_html(
                    &entry.name,
                    &esc(entry.organization.trim()),
                    &format_date(Some(&entry.date), dates),
                    "",
                )
            })
            .collect(),
        Section::Volunteer => data
            .volunteer
            .iter()
            .map(|entry| {
                entry_html(
                    &entry.role,
                    &meta_line(&[&entry.organization, &entry.location], ", "),
                    &format_range(
                        Some(&entry.start_date),
                        Some(&entry.end_date),
                        entry.present,
                        dates,
                    ),
                    &bullet_list(&entry.contributions, "bullets"),
                )
            })
            .collect(),
        _ => String::new(),
    }
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
        ".tpl-executive {{ font-family: 'Garamond', Georgia, serif; }}\n\
         .tpl-executive .name {{ font-size: 2em; text-align: center; \
         letter-spacing: 0.08em; text-transform: uppercase; \
         color: {accent}; }}\n\
         .tpl-executive .contact {{ text-align: center; font-size: 0.9em; \
         color: #4b5563; margin-bottom: 2mm; }}\n\
         .tpl-executive .particulars {{ margin: 2mm auto 0; width: 120mm; \
         font-size: 0.9em; }}\n\
         .tpl-executive .particulars .row {{ display: flex; \
         margin-bottom: 0.6mm; }}\n\
         .tpl-executive .label {{ width: 36mm; font-weight: bold; }}\n\
         .tpl-executive .sec {{ margin-top: 5mm; }}\n\
         .tpl-executive h2 {{ font-size: 1em; font-variant: small-caps; \
         letter-spacing: 0.06em; color: {accent}; \
         border-bottom: 0.3mm double {accent}; margin-bottom: 2mm; }}\n\
         .tpl-executive .entry {{ margin-bottom: 2.8mm; }}\n\
         .tpl-executive .entry-head {{ display: flex; \
         justify-content: space-between; align-items: baseline; }}\n\
         .tpl-executive .entry-role {{ font-weight: bold; }}\n\
         .tpl-executive .entry-date {{ font-size: 0.88em; color: #6b7280; \
         white-space: nowrap; }}\n\
         .tpl-executive .entry-org {{ font-style: italic; color: #4b5563; \
         margin-bottom: 0.8mm; }}\n\
         .tpl-executive .bullets {{ margin-left: 5mm; }}\n\
         .tpl-executive .declaration {{ font-style: italic; }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::records::{
        CertificationEntry, ExperienceEntry, LanguageEntry, PersonalInfo, Proficiency,
    };

    fn make_theme() -> Theme {
        Theme {
            accent: "#5b3a29".to_string(),
            font_scale: 1.0,
        }
    }

    #[test]
    fn test_extended_particulars_render_when_present() {
        let data = ResumeData {
            personal: Some(PersonalInfo {
                first_name: "Ada".into(),
                nationality: "British".into(),
                date_of_birth: "1815-12-10".into(),
                passport_number: "AB123456".into(),
                declaration: "I hereby declare the above to be true.".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(body.contains("Nationality"));
        assert!(body.contains("British"));
        assert!(body.contains("10 Dec 1815"), "birth date uses the day-month-year style");
        assert!(body.contains("AB123456"));
        assert!(body.contains("Declaration"));
        assert!(body.contains("I hereby declare the above to be true."));
    }

    #[test]
    fn test_particulars_omitted_when_blank() {
        let data = ResumeData {
            personal: Some(PersonalInfo {
                first_name: "Ada".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(!body.contains("Nationality"));
        assert!(!body.contains("Declaration"));
    }

    #[test]
    fn test_day_month_year_dates() {
        let data = ResumeData {
            experience: vec![ExperienceEntry {
                position: "Director".into(),
                start_date: "2020-03-02".into(),
                end_date: "2022-06-30".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(body.contains("2 Mar 2020 - 30 Jun 2022"));
    }

    #[test]
    fn test_language_skills_prefer_stored_languages() {
        let data = ResumeData {
            languages: vec![LanguageEntry {
                name: "French".into(),
                proficiency: Proficiency::Native,
            }],
            certifications: vec![CertificationEntry {
                name: "Cambridge English C2".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        let block = body
            .split("Language Skills</h2>")
            .nth(1)
            .expect("language block must render");
        let block = &block[..block.find("</section>").unwrap_or(block.len())];
        assert!(block.contains("French (Native)"));
        assert!(
            !block.contains("Cambridge"),
            "stored languages win over the synthesized block"
        );
    }

    #[test]
    fn test_language_skills_synthesized_from_certifications() {
        let data = ResumeData {
            certifications: vec![CertificationEntry {
                name: "Cambridge English C2".into(),
                organization: "Cambridge".into(),
                date: "2021-05-01".into(),
            }],
            ..Default::default()
        };
        let (_, body, _) = render(&data, &make_theme());
        assert!(
            body.contains("Language Skills"),
            "certifications stand in when no languages are stored"
        );
        assert!(body.contains("Cambridge English C2"));
    }

    #[test]
    fn test_no_language_block_without_sources() {
        let (_, body, _) = render(&ResumeData::default(), &make_theme());
        assert!(!body.contains("Language Skills"));
    }
}
