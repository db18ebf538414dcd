//! SVG snapshot of a recorded canvas.
//!
//! Turns the visible [`DrawOp`]s of a [`RecordingSurface`] into a standalone
//! SVG document: letterbox fills as rects, images as `<image>` elements,
//! captions as outlined `<text>`. Useful for eyeballing layouts in tests and
//! docs without a browser.
//!
//! # Example
//!
//! ```
//! use memecanvas::{Captions, GeneratorConfig, ImageRef, MemeGenerator};
//! use memecanvas::svg::render_surface_svg;
//!
//! let mut page = MemeGenerator::headless(GeneratorConfig::default(), Vec::new());
//! let token = page.image_selected(ImageRef::new("cat.png"));
//! page.image_loaded(token, 400, 800).unwrap();
//! page.submit(Captions::new("I CAN HAS", "CHEEZBURGER")).unwrap();
//!
//! let svg = render_surface_svg(page.surface());
//! assert!(svg.contains(r#"href="cat.png""#));
//! assert!(svg.contains("CHEEZBURGER"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::fit::Extent;
use crate::surface::{DrawOp, RecordingSurface, TextAlign};

/// Caption outline width as a fraction of the font size.
const OUTLINE_RATIO: f64 = 0.05;

/// Render what is currently visible on `surface`.
pub fn render_surface_svg(surface: &RecordingSurface) -> String {
    use crate::surface::DrawingSurface;
    render_ops_svg(surface.size(), surface.visible_ops())
}

/// Render `ops` onto a canvas of `size`.
///
/// Clears that only cover part of the canvas have no SVG equivalent and are
/// skipped.
pub fn render_ops_svg(size: Extent, ops: &[DrawOp]) -> String {
    let mut svg = String::with_capacity(1024);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        size.width, size.height, size.width, size.height
    ));
    svg.push('\n');

    for op in ops {
        match op {
            DrawOp::Clear(_) => {}
            DrawOp::Fill { rect, color } => {
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    color.to_css()
                ));
                svg.push('\n');
            }
            DrawOp::Image { source, dest } => {
                svg.push_str(&format!(
                    r#"<image href="{}" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" preserveAspectRatio="none"/>"#,
                    escape_xml(source.as_str()),
                    dest.x,
                    dest.y,
                    dest.width,
                    dest.height
                ));
                svg.push('\n');
            }
            DrawOp::Text {
                text,
                x,
                y,
                font,
                align,
                color,
            } => {
                let weight = if font.bold { "bold" } else { "normal" };
                svg.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" text-anchor="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}" stroke="black" stroke-width="{:.1}">{}</text>"#,
                    x,
                    y,
                    text_anchor(*align),
                    escape_xml(&font.family),
                    font.size_px,
                    weight,
                    color.to_css(),
                    font.size_px * OUTLINE_RATIO,
                    escape_xml(text)
                ));
                svg.push('\n');
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

/// Escape special characters for XML text content and attributes.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
