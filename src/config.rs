//! Generator configuration.

use alloc::string::String;

use crate::captions::CaptionStyle;
use crate::color::CanvasColor;
use crate::fit::Extent;
use crate::surface::Font;

/// Default canvas edge length in pixels.
pub const DEFAULT_CANVAS_SIZE: f64 = 400.0;

/// Default directory holding the `volume-level-N.svg` icons.
pub const DEFAULT_ICON_DIR: &str = "./icons";

/// Settings for a [`MemeGenerator`](crate::generator::MemeGenerator).
///
/// # Example
///
/// ```
/// use memecanvas::{CanvasColor, GeneratorConfig};
///
/// let config = GeneratorConfig::new()
///     .letterbox(CanvasColor::white())
///     .caption_margin(16.0)
///     .icon_dir("/static/icons");
///
/// assert_eq!(config.canvas.width, 400.0);
/// assert_eq!(config.caption.margin, 16.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Expected surface size. The surface's own size wins at draw time.
    pub canvas: Extent,
    /// Fill behind the image where it does not cover the canvas.
    pub letterbox: CanvasColor,
    pub caption: CaptionStyle,
    pub icon_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canvas: Extent::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE),
            letterbox: CanvasColor::black(),
            caption: CaptionStyle::default(),
            icon_dir: String::from(DEFAULT_ICON_DIR),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected canvas size.
    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Extent::new(width, height);
        self
    }

    /// Set the letterbox fill color.
    pub fn letterbox(mut self, color: CanvasColor) -> Self {
        self.letterbox = color;
        self
    }

    pub fn caption_font(mut self, font: Font) -> Self {
        self.caption.font = font;
        self
    }

    pub fn caption_color(mut self, color: CanvasColor) -> Self {
        self.caption.color = color;
        self
    }

    pub fn caption_margin(mut self, margin: f64) -> Self {
        self.caption.margin = margin;
        self
    }

    /// Set the directory volume icons are served from.
    pub fn icon_dir(mut self, dir: impl Into<String>) -> Self {
        self.icon_dir = dir.into();
        self
    }
}
