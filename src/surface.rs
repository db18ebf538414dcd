//! Drawing surface contract and a recording implementation for headless hosts.
//!
//! The surface is a fixed-size 2D raster target. The generator only ever
//! issues the calls on [`DrawingSurface`]; a browser host forwards them to a
//! canvas context, tests and the SVG renderer read them back from a
//! [`RecordingSurface`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::color::CanvasColor;
use crate::fit::{Extent, Rect};
use crate::image::ImageRef;

/// Horizontal text anchoring for [`DrawingSurface::fill_text`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Caption font in CSS shorthand terms: weight, pixel size, family.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub bold: bool,
    pub size_px: f64,
    pub family: String,
}

impl Font {
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self {
            bold: false,
            size_px,
            family: family.into(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(40.0, "Impact").bold()
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

/// The 2D raster target the generator draws on.
pub trait DrawingSurface {
    /// Fixed surface dimensions.
    fn size(&self) -> Extent;

    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: CanvasColor);

    /// Draw `image` scaled into `dest`.
    fn draw_image(&mut self, image: &ImageRef, dest: Rect);

    fn set_font(&mut self, font: &Font);

    fn set_text_align(&mut self, align: TextAlign);

    fn set_fill_color(&mut self, color: CanvasColor);

    /// Draw `text` anchored at `(x, y)` with the current font, alignment and fill.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Clear the whole surface.
    fn clear(&mut self) {
        let full = Rect::from_extent(self.size());
        self.clear_rect(full);
    }
}

/// One recorded drawing call, with text state resolved at call time.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    Fill {
        rect: Rect,
        color: CanvasColor,
    },
    Image {
        source: ImageRef,
        dest: Rect,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font: Font,
        align: TextAlign,
        color: CanvasColor,
    },
}

/// A [`DrawingSurface`] that records every call.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Extent,
    font: Font,
    align: TextAlign,
    fill: CanvasColor,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Create a surface of the given size. Canvas defaults: `10px sans-serif`,
    /// left alignment, black fill.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Extent::new(width, height),
            font: Font::new(10.0, "sans-serif"),
            align: TextAlign::Left,
            fill: CanvasColor::black(),
            ops: Vec::new(),
        }
    }

    /// Every call since creation.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Calls since the last clear that covered the whole surface, i.e. what is
    /// currently visible.
    pub fn visible_ops(&self) -> &[DrawOp] {
        let full = Rect::from_extent(self.size);
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(r) if covers(r, &full)))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// Whether nothing is currently visible.
    pub fn is_blank(&self) -> bool {
        self.visible_ops().is_empty()
    }

    /// Text strings currently visible, in draw order.
    pub fn visible_text(&self) -> Vec<&str> {
        self.visible_ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn text_align(&self) -> TextAlign {
        self.align
    }
}

fn covers(outer: &Rect, inner: &Rect) -> bool {
    outer.x <= inner.x
        && outer.y <= inner.y
        && outer.right() >= inner.right()
        && outer.bottom() >= inner.bottom()
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Extent {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: CanvasColor) {
        self.ops.push(DrawOp::Fill { rect, color });
    }

    fn draw_image(&mut self, image: &ImageRef, dest: Rect) {
        self.ops.push(DrawOp::Image {
            source: image.clone(),
            dest,
        });
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn set_fill_color(&mut self, color: CanvasColor) {
        self.fill = color;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font: self.font.clone(),
            align: self.align,
            color: self.fill,
        });
    }
}
