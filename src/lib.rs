//! Headless meme canvas: fit an image onto a fixed canvas, overlay captions,
//! read them aloud.
//!
//! The aspect-ratio fit is pure geometry (no allocation, `no_std`
//! compatible). Everything a browser page would do with the DOM goes through
//! host traits ([`DrawingSurface`], [`ImageLoader`], [`SpeechSynthesizer`])
//! injected into a [`MemeGenerator`], so the page runs the same under a
//! canvas binding or in tests.
//!
//! # Modules
//!
//! - [`fit`](mod@fit) — Aspect-ratio fit and letterbox placement
//! - [`volume`] — Volume slider levels and icons
//! - [`color`] — Fill colors
//! - [`surface`] — Drawing surface contract and recording surface
//! - [`image`] — Image selection, decode tracking, loader contract
//! - [`speech`] — Voices, utterances, synthesizer contract
//! - [`captions`] — Caption text and placement
//! - [`controls`] — Two-state button group
//! - [`event`] — Page events and queue
//! - [`generator`] — The page controller
//! - [`config`] — Generator settings
//! - `svg` — SVG snapshot of a recorded canvas (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod color;
pub mod fit;
pub mod volume;

#[cfg(feature = "alloc")]
pub mod captions;
#[cfg(feature = "alloc")]
pub mod config;
#[cfg(feature = "alloc")]
pub mod controls;
#[cfg(feature = "alloc")]
pub mod event;
#[cfg(feature = "alloc")]
pub mod generator;
#[cfg(feature = "alloc")]
pub mod image;
#[cfg(feature = "alloc")]
pub mod speech;
#[cfg(feature = "alloc")]
pub mod surface;
#[cfg(feature = "svg")]
pub mod svg;

pub use color::CanvasColor;
pub use fit::{Extent, FitError, FitResult, Rect, fit, fit_within};
pub use volume::{Volume, VolumeLevel};

#[cfg(feature = "alloc")]
pub use captions::{CaptionStyle, Captions};
#[cfg(feature = "alloc")]
pub use config::GeneratorConfig;
#[cfg(feature = "alloc")]
pub use controls::{Button, ButtonGroup, FormPhase};
#[cfg(feature = "alloc")]
pub use event::{Event, EventQueue};
#[cfg(feature = "alloc")]
pub use generator::{GeneratorError, MemeGenerator, VolumeChange};
#[cfg(feature = "alloc")]
pub use image::{ImageLoader, ImageRef, LoadToken, LoadedImage};
#[cfg(feature = "alloc")]
pub use speech::{SpeechSynthesizer, Utterance, Voice};
#[cfg(feature = "alloc")]
pub use surface::{DrawingSurface, Font, TextAlign};
