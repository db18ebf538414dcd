//! The meme page controller.
//!
//! [`MemeGenerator`] owns the page state (loaded image, captions, button
//! phase, voice selection, volume) and the three host collaborators it was
//! constructed with. Every user action arrives as an [`Event`] through
//! [`MemeGenerator::handle`], or as a direct method call.
//!
//! # Example
//!
//! ```
//! use memecanvas::{Captions, Event, GeneratorConfig, ImageRef, MemeGenerator};
//!
//! let mut page = MemeGenerator::headless(GeneratorConfig::default(), Vec::new());
//!
//! page.handle(Event::ImageSelected(ImageRef::new("blob:cat"))).unwrap();
//! let token = page.loader().last_token().unwrap();
//! page.handle(Event::ImageLoaded { token, width: 800, height: 400 }).unwrap();
//! page.handle(Event::Submit(Captions::new("top", "bottom"))).unwrap();
//!
//! assert_eq!(page.surface().visible_text(), ["top", "bottom"]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::captions::Captions;
use crate::config::GeneratorConfig;
use crate::controls::{Button, ButtonGroup};
use crate::event::{Event, EventQueue};
use crate::fit::{Extent, FitError, FitResult, Rect, fit, fit_within};
use crate::image::{ImageLoader, ImageRef, LoadToken, LoadTracker, LoadedImage, RecordingLoader};
use crate::speech::{ScriptedSpeech, SpeechSynthesizer, Voice, VoiceList, utterance};
use crate::surface::{DrawingSurface, RecordingSurface};
use crate::volume::{Volume, VolumeLevel};

/// Generator error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// The decoded image or the surface has unusable dimensions.
    Fit(FitError),
    /// Captions were submitted before any image finished loading.
    NoImage,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit(e) => write!(f, "cannot place image: {e}"),
            Self::NoImage => f.write_str("no image has been loaded"),
        }
    }
}

impl core::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Fit(e) => Some(e),
            Self::NoImage => None,
        }
    }
}

impl From<FitError> for GeneratorError {
    fn from(e: FitError) -> Self {
        Self::Fit(e)
    }
}

/// Result of moving the volume slider.
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeChange {
    pub volume: Volume,
    pub level: VolumeLevel,
    /// Icon asset to show next to the slider.
    pub icon_path: String,
}

/// Meme page controller over a drawing surface `S`, an image loader `L`
/// and a speech synthesizer `V`.
#[derive(Debug)]
pub struct MemeGenerator<S, L, V> {
    surface: S,
    loader: L,
    speech: V,
    config: GeneratorConfig,
    loads: LoadTracker,
    captions: Captions,
    buttons: ButtonGroup,
    voices: VoiceList,
    volume: Volume,
    volume_icon: String,
}

impl MemeGenerator<RecordingSurface, RecordingLoader, ScriptedSpeech> {
    /// A generator over recording collaborators, with a surface sized from
    /// `config.canvas` and a fixed voice list.
    pub fn headless(config: GeneratorConfig, voices: Vec<Voice>) -> Self {
        let surface = RecordingSurface::new(config.canvas.width, config.canvas.height);
        Self::new(surface, RecordingLoader::new(), ScriptedSpeech::new(voices), config)
    }
}

impl<S, L, V> MemeGenerator<S, L, V>
where
    S: DrawingSurface,
    L: ImageLoader,
    V: SpeechSynthesizer,
{
    /// Wire up the page. Queries the voice list once; hosts that enumerate
    /// voices lazily follow up with [`Event::VoicesChanged`].
    pub fn new(surface: S, loader: L, speech: V, config: GeneratorConfig) -> Self {
        let volume = Volume::default();
        let volume_icon = volume.level().icon_path(&config.icon_dir);
        let mut generator = Self {
            surface,
            loader,
            speech,
            config,
            loads: LoadTracker::new(),
            captions: Captions::default(),
            buttons: ButtonGroup::new(),
            voices: VoiceList::new(),
            volume,
            volume_icon,
        };
        generator.voices_changed();
        generator
    }

    /// Dispatch one event.
    ///
    /// Clicks on buttons that are currently disabled are dropped, as a
    /// disabled DOM button never fires.
    pub fn handle(&mut self, event: Event) -> Result<(), GeneratorError> {
        match event {
            Event::ImageSelected(source) => {
                self.image_selected(source);
            }
            Event::ImageLoaded {
                token,
                width,
                height,
            } => {
                self.image_loaded(token, width, height)?;
            }
            Event::Submit(captions) => {
                if self.buttons.is_enabled(Button::Submit) {
                    self.submit(captions)?;
                } else {
                    self.ignore_disabled(Button::Submit);
                }
            }
            Event::ClearClicked => {
                if self.buttons.is_enabled(Button::Clear) {
                    self.clear();
                } else {
                    self.ignore_disabled(Button::Clear);
                }
            }
            Event::SpeakClicked => {
                if self.buttons.is_enabled(Button::Speak) {
                    self.speak();
                } else {
                    self.ignore_disabled(Button::Speak);
                }
            }
            Event::VolumeInput(value) => {
                self.volume_input(value);
            }
            Event::VoiceSelected(name) => {
                self.select_voice(&name);
            }
            Event::VoicesChanged => self.voices_changed(),
        }
        Ok(())
    }

    /// Handle queued events in order.
    ///
    /// Stops at the first error; events after the failing one stay queued.
    pub fn drain(&mut self, queue: &mut EventQueue) -> Result<(), GeneratorError> {
        while let Some(event) = queue.pop() {
            self.handle(event)?;
        }
        Ok(())
    }

    /// Start loading a newly chosen file.
    pub fn image_selected(&mut self, source: ImageRef) -> LoadToken {
        let token = self.loads.begin(source.clone());
        #[cfg(feature = "tracing")]
        tracing::debug!(source = %source, token = token.get(), "image selected");
        self.loader.load(&source, token);
        token
    }

    /// Draw a decoded image letterboxed onto the surface and reset the form
    /// for it.
    ///
    /// Returns `Ok(None)` for a superseded or unknown `token`.
    pub fn image_loaded(
        &mut self,
        token: LoadToken,
        width: u32,
        height: u32,
    ) -> Result<Option<FitResult>, GeneratorError> {
        if self.loads.pending() != Some(token) {
            #[cfg(feature = "tracing")]
            tracing::debug!(token = token.get(), "ignoring stale image load");
            return Ok(None);
        }

        let size = self.surface.size();
        let placed = place(size, Extent::new(f64::from(width), f64::from(height)))?;
        let Some(image) = self.loads.complete(token, width, height) else {
            return Ok(None);
        };
        let source = image.source.clone();

        self.surface.clear();
        self.surface.fill_rect(Rect::from_extent(size), self.config.letterbox);
        self.surface.draw_image(&source, placed.rect());
        self.captions.clear();
        self.buttons.reset();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width,
            height,
            x = placed.start_x,
            y = placed.start_y,
            w = placed.width,
            h = placed.height,
            "image drawn"
        );
        Ok(Some(placed))
    }

    /// Draw the captions over the current image.
    pub fn submit(&mut self, captions: Captions) -> Result<(), GeneratorError> {
        if self.loads.current().is_none() {
            return Err(GeneratorError::NoImage);
        }
        self.config.caption.draw(&mut self.surface, &captions);
        self.captions = captions;
        self.buttons.submit();
        #[cfg(feature = "tracing")]
        tracing::debug!("captions submitted");
        Ok(())
    }

    /// Wipe the canvas, the captions and the file input.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.captions.clear();
        self.loader.reset();
        self.loads.clear();
        self.buttons.reset();
        #[cfg(feature = "tracing")]
        tracing::debug!("page cleared");
    }

    /// Read the captions aloud. Returns `false` when there is nothing to say.
    pub fn speak(&mut self) -> bool {
        let text = self.captions.speech_text();
        let voice = self.voices.resolve(&self.speech.voices());
        match utterance(text, voice, self.volume) {
            Some(u) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    voice = u.voice.as_ref().map(|v| v.name.as_str()),
                    volume = u.volume,
                    "speaking"
                );
                self.speech.speak(u);
                true
            }
            None => false,
        }
    }

    /// Apply a volume slider value.
    pub fn volume_input(&mut self, value: f64) -> VolumeChange {
        self.volume = Volume::new(value);
        let level = self.volume.level();
        self.volume_icon = level.icon_path(&self.config.icon_dir);
        VolumeChange {
            volume: self.volume,
            level,
            icon_path: self.volume_icon.clone(),
        }
    }

    /// Pick a voice by name. Unknown names leave the selection unchanged.
    pub fn select_voice(&mut self, name: &str) -> bool {
        self.voices.select(name)
    }

    /// Rebuild the voice selector from the speech service.
    pub fn voices_changed(&mut self) {
        let voices = self.speech.voices();
        self.voices.populate(&voices);
        #[cfg(feature = "tracing")]
        tracing::debug!(count = voices.len(), "voice list populated");
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn speech(&self) -> &V {
        &self.speech
    }

    pub fn speech_mut(&mut self) -> &mut V {
        &mut self.speech
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    pub fn buttons(&self) -> &ButtonGroup {
        &self.buttons
    }

    pub fn voices(&self) -> &VoiceList {
        &self.voices
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn volume_icon(&self) -> &str {
        &self.volume_icon
    }

    pub fn current_image(&self) -> Option<&LoadedImage> {
        self.loads.current()
    }

    /// Give the collaborators back.
    pub fn into_parts(self) -> (S, L, V) {
        (self.surface, self.loader, self.speech)
    }

    fn ignore_disabled(&self, _button: Button) {
        #[cfg(feature = "tracing")]
        tracing::trace!(button = ?_button, "click on disabled button ignored");
    }
}

/// Square canvases use the content-ratio fit; others need the
/// container-aware variant to stay inside the surface.
fn place(size: Extent, content: Extent) -> Result<FitResult, FitError> {
    if size.width == size.height {
        fit(size, content)
    } else {
        fit_within(size, content)
    }
}
