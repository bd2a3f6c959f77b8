//! A4 page geometry and the outer HTML shells.
//!
//! Everything on the sheet is measured in millimeters so the print route maps
//! 1:1 onto physical A4. The on-screen preview wraps the same sheet in a
//! scaled desk; scaling never changes the sheet's own geometry.

use crate::render::markup::esc;
use crate::render::RenderedDocument;

/// ISO 216 A4.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Shrink factor applied to the preview desk. Print output is always 1:1.
pub const PREVIEW_SCALE: f32 = 0.72;

/// Per-template page geometry and base typography.
#[derive(Debug, Clone, Copy)]
pub struct PageMetrics {
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    pub margin_bottom_mm: f32,
    pub margin_left_mm: f32,
    pub base_font_pt: f32,
    pub line_height: f32,
}

impl PageMetrics {
    pub fn uniform(margin_mm: f32, base_font_pt: f32, line_height: f32) -> PageMetrics {
        PageMetrics {
            margin_top_mm: margin_mm,
            margin_right_mm: margin_mm,
            margin_bottom_mm: margin_mm,
            margin_left_mm: margin_mm,
            base_font_pt,
            line_height,
        }
    }

    /// Width left for content between the side margins.
    pub fn content_width_mm(&self) -> f32 {
        PAGE_WIDTH_MM - self.margin_left_mm - self.margin_right_mm
    }
}

/// Stylesheet shared by every template: the `@page` rule and the sheet box.
/// The template's own CSS is appended after this block.
pub fn page_css(metrics: &PageMetrics, font_scale: f32) -> String {
    let font_pt = metrics.base_font_pt * font_scale;
    format!(
        "@page {{ size: A4; margin: 0; }}\n\
         * {{ margin: 0; padding: 0; box-sizing: border-box; }}\n\
         .sheet {{ width: {PAGE_WIDTH_MM}mm; min-height: {PAGE_HEIGHT_MM}mm; \
         padding: {top}mm {right}mm {bottom}mm {left}mm; \
         background: #ffffff; color: #1f2328; \
         font-size: {font_pt:.2}pt; line-height: {line_height}; \
         overflow-wrap: break-word; }}",
        top = metrics.margin_top_mm,
        right = metrics.margin_right_mm,
        bottom = metrics.margin_bottom_mm,
        left = metrics.margin_left_mm,
        line_height = metrics.line_height,
    )
}

/// Full HTML document for the on-screen preview: the sheet, scaled by
/// `PREVIEW_SCALE`, on a gray desk. Reloads itself every `refresh_secs`
/// seconds to pick up the latest composed frame.
pub fn preview_shell(document: &RenderedDocument, refresh_secs: u64) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta http-equiv=\"refresh\" content=\"{refresh_secs}\">\n\
         <title>{title}</title>\n\
         <style>\n\
         {css}\n\
         body {{ background: #e6e8eb; padding: 10mm 0; }}\n\
         .preview-desk {{ width: {PAGE_WIDTH_MM}mm; margin: 0 auto; \
         transform: scale({PREVIEW_SCALE}); transform-origin: top center; }}\n\
         .preview-desk .sheet {{ box-shadow: 0 2px 14px rgba(15, 23, 42, 0.25); }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <div class=\"preview-desk\">{page}</div>\n\
         </body>\n\
         </html>",
        title = esc(&document.title),
        css = document.css,
        page = document.page_html,
    )
}

/// Full HTML document for printing: the unscaled sheet and nothing else.
pub fn print_shell(document: &RenderedDocument) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         {css}\n\
         body {{ background: #ffffff; }}\n\
         @media print {{ .sheet {{ box-shadow: none; }} }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {page}\n\
         </body>\n\
         </html>",
        title = esc(&document.title),
        css = document.css,
        page = document.page_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TemplateId;

    fn make_document() -> RenderedDocument {
        RenderedDocument {
            template: TemplateId::Classic,
            title: "Ada Lovelace - Resume".to_string(),
            page_html: "<div class=\"sheet\">body</div>".to_string(),
            css: ".sheet { color: #000; }".to_string(),
        }
    }

    #[test]
    fn test_page_css_uses_millimeter_geometry() {
        let css = page_css(&PageMetrics::uniform(18.0, 10.0, 1.4), 1.0);
        assert!(css.contains("size: A4"));
        assert!(css.contains("width: 210mm"));
        assert!(css.contains("min-height: 297mm"));
        assert!(css.contains("padding: 18mm 18mm 18mm 18mm"));
    }

    #[test]
    fn test_page_css_applies_font_scale() {
        let metrics = PageMetrics::uniform(18.0, 10.0, 1.4);
        assert!(page_css(&metrics, 1.0).contains("font-size: 10.00pt"));
        assert!(
            page_css(&metrics, 1.2).contains("font-size: 12.00pt"),
            "font scale multiplies the template's base size"
        );
    }

    #[test]
    fn test_content_width() {
        let metrics = PageMetrics {
            margin_left_mm: 20.0,
            margin_right_mm: 15.0,
            ..PageMetrics::uniform(10.0, 10.0, 1.4)
        };
        assert!((metrics.content_width_mm() - 175.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_preview_shell_scales_and_refreshes() {
        let html = preview_shell(&make_document(), 2);
        assert!(html.contains("scale(0.72)"));
        assert!(html.contains("http-equiv=\"refresh\" content=\"2\""));
        assert!(html.contains("<div class=\"sheet\">body</div>"));
    }

    #[test]
    fn test_print_shell_is_unscaled() {
        let html = print_shell(&make_document());
        assert!(!html.contains("scale("), "print output must stay 1:1");
        assert!(!html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("Ada Lovelace - Resume"));
    }
}
