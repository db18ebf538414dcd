//! Fill colors for the letterbox and the captions.

#[cfg(feature = "alloc")]
use alloc::{format, string::String};

/// 8-bit sRGB color with alpha.
///
/// The default is transparent black.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Default caption fill.
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Default letterbox fill.
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// CSS color for canvas fill styles and SVG attributes: `rgb(..)` when
    /// opaque, `rgba(..)` otherwise.
    #[cfg(feature = "alloc")]
    pub fn to_css(self) -> String {
        let Self { r, g, b, a } = self;
        if self.is_opaque() {
            format!("rgb({r},{g},{b})")
        } else {
            format!("rgba({r},{g},{b},{:.3})", f32::from(a) / 255.0)
        }
    }
}
