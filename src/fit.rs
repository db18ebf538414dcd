//! Aspect-ratio fitting of content into a fixed container.
//!
//! Pure geometry over any [`Float`] type. No allocation, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use memecanvas::fit::{Extent, fit};
//!
//! let placed = fit(Extent::new(400.0, 400.0), Extent::new(800.0, 400.0)).unwrap();
//!
//! // Wide content spans the canvas width and is centered vertically.
//! assert_eq!((placed.width, placed.height), (400.0, 200.0));
//! assert_eq!((placed.start_x, placed.start_y), (0.0, 100.0));
//! ```

use num_traits::Float;

/// Width × height pair in caller units (pixels for a canvas).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent<T = f64> {
    pub width: T,
    pub height: T,
}

impl<T: Float> Extent<T> {
    /// Create a new extent.
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> T {
        self.width / self.height
    }

    fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    fn is_positive(&self) -> bool {
        self.width > T::zero() && self.height > T::zero()
    }
}

/// Axis-aligned rectangle in caller units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Float> Rect<T> {
    /// Create a new rect.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin covering the whole extent.
    pub fn from_extent(extent: Extent<T>) -> Self {
        Self::new(T::zero(), T::zero(), extent.width, extent.height)
    }

    pub fn right(&self) -> T {
        self.x + self.width
    }

    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// Whether this rect lies inside `(0, 0, extent)`, allowing `epsilon` of
    /// overshoot on the far edges.
    pub fn is_within(&self, extent: Extent<T>, epsilon: T) -> bool {
        self.x >= T::zero()
            && self.y >= T::zero()
            && self.right() <= extent.width + epsilon
            && self.bottom() <= extent.height + epsilon
    }
}

/// Placement of scaled content inside a container.
///
/// Produced by [`fit`] and [`fit_within`]. Computed fresh for every load and
/// consumed by a single draw call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult<T = f64> {
    /// Scaled content width.
    pub width: T,
    /// Scaled content height.
    pub height: T,
    /// Left offset of the content within the container.
    pub start_x: T,
    /// Top offset of the content within the container.
    pub start_y: T,
}

impl<T: Float> FitResult<T> {
    /// Destination rectangle for a draw call.
    pub fn rect(&self) -> Rect<T> {
        Rect::new(self.start_x, self.start_y, self.width, self.height)
    }

    /// Scaled content size.
    pub fn extent(&self) -> Extent<T> {
        Extent::new(self.width, self.height)
    }

    /// Whether the placed content needs letterbox bars in `container`.
    pub fn is_letterboxed(&self, container: Extent<T>) -> bool {
        self.width < container.width || self.height < container.height
    }
}

/// Fit computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Container has zero or negative width or height.
    NonPositiveContainer,
    /// Content has zero or negative width or height.
    NonPositiveContent,
    /// A dimension is NaN or infinite.
    NonFiniteDimension,
}

impl core::fmt::Display for FitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonPositiveContainer => {
                f.write_str("container width and height must be positive")
            }
            Self::NonPositiveContent => {
                f.write_str("content width and height must be positive")
            }
            Self::NonFiniteDimension => f.write_str("dimensions must be finite"),
        }
    }
}

impl core::error::Error for FitError {}

fn validate<T: Float>(container: Extent<T>, content: Extent<T>) -> Result<(), FitError> {
    if !container.is_finite() || !content.is_finite() {
        return Err(FitError::NonFiniteDimension);
    }
    if !container.is_positive() {
        return Err(FitError::NonPositiveContainer);
    }
    if !content.is_positive() {
        return Err(FitError::NonPositiveContent);
    }
    Ok(())
}

/// Scale `content` uniformly into `container` and center it on the slack axis.
///
/// The branch is chosen from the content aspect ratio alone: content taller
/// than wide takes the full container height, anything else (square included)
/// takes the full container width. For a square container this is the
/// largest fit. For other containers use [`fit_within`], which also compares
/// against the container ratio.
pub fn fit<T: Float>(container: Extent<T>, content: Extent<T>) -> Result<FitResult<T>, FitError> {
    validate(container, content)?;

    let aspect_ratio = content.aspect_ratio();
    if aspect_ratio < T::one() {
        Ok(height_bound(container, aspect_ratio))
    } else {
        Ok(width_bound(container, aspect_ratio))
    }
}

/// Like [`fit`], but picks the binding axis by comparing the content ratio
/// with the container ratio, so the result stays inside any container.
///
/// Equal ratios take the width-bound branch.
pub fn fit_within<T: Float>(
    container: Extent<T>,
    content: Extent<T>,
) -> Result<FitResult<T>, FitError> {
    validate(container, content)?;

    let aspect_ratio = content.aspect_ratio();
    if aspect_ratio < container.aspect_ratio() {
        Ok(height_bound(container, aspect_ratio))
    } else {
        Ok(width_bound(container, aspect_ratio))
    }
}

/// Full container height; width from ratio; centered horizontally.
fn height_bound<T: Float>(container: Extent<T>, aspect_ratio: T) -> FitResult<T> {
    let height = container.height;
    let width = container.height * aspect_ratio;
    FitResult {
        width,
        height,
        start_x: half(container.width - width),
        start_y: T::zero(),
    }
}

/// Full container width; height from ratio; centered vertically.
fn width_bound<T: Float>(container: Extent<T>, aspect_ratio: T) -> FitResult<T> {
    let width = container.width;
    let height = container.width / aspect_ratio;
    FitResult {
        width,
        height,
        start_x: T::zero(),
        start_y: half(container.height - height),
    }
}

fn half<T: Float>(v: T) -> T {
    v / (T::one() + T::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Extent<f64> {
        Extent::new(400.0, 400.0)
    }

    // ── fit ─────────────────────────────────────────────────────────────

    #[test]
    fn wide_content_spans_width() {
        let r = fit(square(), Extent::new(800.0, 400.0)).unwrap();
        assert_eq!(
            r,
            FitResult {
                width: 400.0,
                height: 200.0,
                start_x: 0.0,
                start_y: 100.0
            }
        );
    }

    #[test]
    fn tall_content_spans_height() {
        let r = fit(square(), Extent::new(400.0, 800.0)).unwrap();
        assert_eq!(
            r,
            FitResult {
                width: 200.0,
                height: 400.0,
                start_x: 100.0,
                start_y: 0.0
            }
        );
    }

    #[test]
    fn square_content_fills_square_container() {
        let r = fit(square(), Extent::new(400.0, 400.0)).unwrap();
        assert_eq!(r.rect(), Rect::new(0.0, 0.0, 400.0, 400.0));
        assert!(!r.is_letterboxed(square()));
    }

    #[test]
    fn square_content_takes_width_branch() {
        // Width-bound branch: height derived from width even for a tall container.
        let r = fit(Extent::new(300.0, 600.0), Extent::new(50.0, 50.0)).unwrap();
        assert_eq!((r.width, r.height), (300.0, 300.0));
        assert_eq!((r.start_x, r.start_y), (0.0, 150.0));
    }

    #[test]
    fn content_ratio_alone_chooses_branch() {
        // 2:1 content into a 4:1 container: width-bound, overflows vertically.
        let container = Extent::new(400.0, 100.0);
        let r = fit(container, Extent::new(200.0, 100.0)).unwrap();
        assert_eq!((r.width, r.height), (400.0, 200.0));
        assert_eq!(r.start_y, -50.0);
        assert!(!r.rect().is_within(container, 1e-9));
    }

    #[test]
    fn upscales_small_content() {
        let r = fit(square(), Extent::new(40.0, 20.0)).unwrap();
        assert_eq!((r.width, r.height), (400.0, 200.0));
    }

    #[test]
    fn works_for_f32() {
        let r = fit(Extent::new(400.0f32, 400.0), Extent::new(400.0f32, 800.0)).unwrap();
        assert_eq!(r.start_x, 100.0f32);
    }

    // ── fit_within ──────────────────────────────────────────────────────

    #[test]
    fn fit_within_wide_container() {
        let container = Extent::new(400.0, 100.0);
        let r = fit_within(container, Extent::new(200.0, 100.0)).unwrap();
        assert_eq!((r.width, r.height), (200.0, 100.0));
        assert_eq!((r.start_x, r.start_y), (100.0, 0.0));
        assert!(r.rect().is_within(container, 1e-9));
    }

    #[test]
    fn fit_within_matches_fit_for_square_container() {
        for content in [
            Extent::new(800.0, 400.0),
            Extent::new(400.0, 800.0),
            Extent::new(123.0, 123.0),
        ] {
            assert_eq!(fit(square(), content), fit_within(square(), content));
        }
    }

    // ── errors ──────────────────────────────────────────────────────────

    #[test]
    fn zero_container_rejected() {
        assert_eq!(
            fit(Extent::new(0.0, 400.0), Extent::new(10.0, 10.0)),
            Err(FitError::NonPositiveContainer)
        );
    }

    #[test]
    fn negative_content_rejected() {
        assert_eq!(
            fit(square(), Extent::new(10.0, -1.0)),
            Err(FitError::NonPositiveContent)
        );
        assert_eq!(
            fit_within(square(), Extent::new(0.0, 10.0)),
            Err(FitError::NonPositiveContent)
        );
    }

    #[test]
    fn nan_and_infinity_rejected() {
        assert_eq!(
            fit(square(), Extent::new(f64::NAN, 10.0)),
            Err(FitError::NonFiniteDimension)
        );
        assert_eq!(
            fit(Extent::new(f64::INFINITY, 10.0), Extent::new(1.0, 1.0)),
            Err(FitError::NonFiniteDimension)
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", FitError::NonPositiveContent),
            "content width and height must be positive"
        );
    }
}
