//! Plain listing view — every category, with explicit empty-state text.
//!
//! This is the management view, not a document: it always shows all nine
//! categories and prints "No <category> found" where the template composer
//! would omit the section. The two renderers intentionally disagree on
//! empty-state policy and must not be unified; see the divergence test below.

use crate::dates::{format_range, DatePattern};
use crate::models::snapshot::{Category, ResumeData};
use crate::render::markup::esc;

const LISTING_DATES: DatePattern = DatePattern::MonthYear;

/// Renders the full listing page.
pub fn render_listing(data: &ResumeData) -> String {
    let mut body = String::new();
    for category in Category::ALL {
        body.push_str(&format!(
            "<section class=\"cat\"><h2>{}</h2>",
            esc(category.display_name())
        ));
        let items = category_items(data, category);
        if items.is_empty() {
            body.push_str(&format!(
                "<p class=\"empty\">{}</p>",
                esc(&placeholder(category))
            ));
        } else {
            body.push_str("<ul>");
            for item in items {
                body.push_str(&format!("<li>{}</li>", esc(&item)));
            }
            body.push_str("</ul>");
        }
        body.push_str("</section>");
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Resume data</title>\n\
         <style>\n\
         body {{ font-family: Arial, sans-serif; max-width: 720px; \
         margin: 24px auto; color: #1f2328; }}\n\
         h2 {{ font-size: 1em; border-bottom: 1px solid #d1d5db; \
         padding-bottom: 4px; }}\n\
         .empty {{ color: #9ca3af; font-style: italic; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Resume data</h1>\n\
         {body}\n\
         </body>\n\
         </html>"
    )
}

/// Empty-state text, always rendered for an empty category.
fn placeholder(category: Category) -> String {
    format!("No {} found", category.display_name().to_lowercase())
}

fn category_items(data: &ResumeData, category: Category) -> Vec<String> {
    match category {
        Category::Personal => data
            .personal
            .as_ref()
            .map(|person| {
                let mut parts = vec![person.full_name()];
                parts.extend(person.contact_parts().iter().map(ToString::to_string));
                vec![parts.join(" — ")]
            })
            .unwrap_or_default(),
        Category::Education => data
            .education
            .iter()
            .map(|entry| {
                entry_line(
                    &entry.degree,
                    &entry.school_name,
                    &entry.start_date,
                    &entry.end_date,
                    entry.present,
                )
            })
            .collect(),
        Category::Experience => data
            .experience
            .iter()
            .map(|entry| {
                entry_line(
                    &entry.position,
                    &entry.company_name,
                    &entry.start_date,
                    &entry.end_date,
                    entry.present,
                )
            })
            .collect(),
        Category::Volunteer => data
            .volunteer
            .iter()
            .map(|entry| {
                entry_line(
                    &entry.role,
                    &entry.organization,
                    &entry.start_date,
                    &entry.end_date,
                    entry.present,
                )
            })
            .collect(),
        Category::Project => data
            .projects
            .iter()
            .map(|entry| {
                entry_line(
                    entry.display_name().unwrap_or("Untitled project"),
                    entry.display_role().unwrap_or_default(),
                    &entry.start_date,
                    &entry.end_date,
                    entry.present,
                )
            })
            .collect(),
        Category::Skills => data.skills.clone(),
        Category::Hobbies => data.hobbies.clone(),
        Category::Certifications => data
            .certifications
            .iter()
            .map(|entry| meta_line_plain(&[&entry.name, &entry.organization]))
            .collect(),
        Category::Languages => data
            .languages
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(|entry| format!("{} ({})", entry.name.trim(), entry.proficiency.label()))
            .collect(),
    }
}

fn entry_line(title: &str, organization: &str, start: &str, end: &str, present: bool) -> String {
    let range = format_range(Some(start), Some(end), present, LISTING_DATES);
    let mut parts: Vec<&str> = Vec::new();
    if !title.trim().is_empty() {
        parts.push(title.trim());
    }
    if !organization.trim().is_empty() {
        parts.push(organization.trim());
    }
    if !range.is_empty() {
        parts.push(&range);
    }
    parts.join(" — ")
}

fn meta_line_plain(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" — ")
}
