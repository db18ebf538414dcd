//! Top and bottom caption text, speech text, and placement on the canvas.

use alloc::string::String;

use crate::color::CanvasColor;
use crate::fit::Extent;
use crate::surface::{DrawingSurface, Font, TextAlign};

/// The two caption inputs of the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Captions {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    /// Text to read aloud: the top caption followed directly by the bottom
    /// one, with no separator.
    pub fn speech_text(&self) -> String {
        let mut text = String::with_capacity(self.top.len() + self.bottom.len());
        text.push_str(&self.top);
        text.push_str(&self.bottom);
        text
    }

    pub fn clear(&mut self) {
        self.top.clear();
        self.bottom.clear();
    }
}

/// How captions are drawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptionStyle {
    pub font: Font,
    pub color: CanvasColor,
    /// Gap between the bottom caption's baseline and the canvas edge.
    pub margin: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: CanvasColor::white(),
            margin: 10.0,
        }
    }
}

impl CaptionStyle {
    /// Baseline anchors `(top, bottom)` for a canvas of `size`, both centered
    /// horizontally.
    pub fn anchors(&self, size: Extent) -> ((f64, f64), (f64, f64)) {
        let x = size.width / 2.0;
        ((x, self.font.size_px), (x, size.height - self.margin))
    }

    /// Draw the non-empty captions onto `surface`.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S, captions: &Captions) {
        let (top, bottom) = self.anchors(surface.size());
        surface.set_font(&self.font);
        surface.set_text_align(TextAlign::Center);
        surface.set_fill_color(self.color);
        if !captions.top.is_empty() {
            surface.fill_text(&captions.top, top.0, top.1);
        }
        if !captions.bottom.is_empty() {
            surface.fill_text(&captions.bottom, bottom.0, bottom.1);
        }
    }
}
