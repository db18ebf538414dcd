//! Image selection, asynchronous decode tracking, and the loader contract.
//!
//! Selecting an image hands an [`ImageRef`] to the host's [`ImageLoader`]
//! together with a fresh [`LoadToken`]. The host reports completion later
//! with that token. A newer selection supersedes any in-flight decode: its
//! completion carries an old token and is dropped by [`LoadTracker`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Reference to user-selected image bytes (an object URL in a browser).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one image selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadToken(u64);

impl LoadToken {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A decoded image with its natural dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoadedImage {
    pub source: ImageRef,
    pub width: u32,
    pub height: u32,
}

/// Host image decoding service.
pub trait ImageLoader {
    /// Start decoding `source`. Completion is reported back as
    /// [`Event::ImageLoaded`](crate::event::Event::ImageLoaded) with `token`.
    fn load(&mut self, source: &ImageRef, token: LoadToken);

    /// Reset the file input so the same file can be selected again.
    fn reset(&mut self);
}

/// Tracks the in-flight selection and the last decoded image.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    issued: u64,
    pending: Option<(LoadToken, ImageRef)>,
    current: Option<LoadedImage>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new selection, superseding any pending one.
    pub fn begin(&mut self, source: ImageRef) -> LoadToken {
        self.issued += 1;
        let token = LoadToken(self.issued);
        self.pending = Some((token, source));
        token
    }

    /// Resolve a completion. Returns `None` for stale or unknown tokens.
    pub fn complete(&mut self, token: LoadToken, width: u32, height: u32) -> Option<&LoadedImage> {
        match self.pending.take() {
            Some((pending, source)) if pending == token => {
                self.current = Some(LoadedImage {
                    source,
                    width,
                    height,
                });
                self.current.as_ref()
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Token of the selection still waiting for decode.
    pub fn pending(&self) -> Option<LoadToken> {
        self.pending.as_ref().map(|(t, _)| *t)
    }

    /// Most recently decoded image.
    pub fn current(&self) -> Option<&LoadedImage> {
        self.current.as_ref()
    }

    /// Forget both the pending selection and the decoded image.
    pub fn clear(&mut self) {
        self.pending = None;
        self.current = None;
    }
}

/// An [`ImageLoader`] that records requests; the host (or test) reports
/// completions itself.
#[derive(Clone, Debug, Default)]
pub struct RecordingLoader {
    pub requests: Vec<(ImageRef, LoadToken)>,
    pub resets: usize,
}

impl RecordingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the most recent request.
    pub fn last_token(&self) -> Option<LoadToken> {
        self.requests.last().map(|(_, t)| *t)
    }
}

impl ImageLoader for RecordingLoader {
    fn load(&mut self, source: &ImageRef, token: LoadToken) {
        self.requests.push((source.clone(), token));
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}
