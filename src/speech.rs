//! Speech synthesis contract, voice list population, and utterances.
//!
//! Hosts enumerate voices asynchronously: the first query may come back
//! empty and the full list arrives with a voices-changed notification. The
//! [`VoiceList`] is rebuilt from scratch on every such notification.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::volume::Volume;

/// A platform voice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `en-US`.
    pub lang: String,
    /// Platform default voice.
    pub is_default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }

    pub fn default_voice(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// A unit of text submitted for playback.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// `None` plays through the platform default voice.
    pub voice: Option<Voice>,
    /// Gain in `0.0..=1.0`.
    pub volume: f32,
}

/// Host speech synthesis service.
pub trait SpeechSynthesizer {
    /// Currently available voices. May be empty before the host has
    /// finished enumerating.
    fn voices(&self) -> Vec<Voice>;

    /// Queue `utterance` for playback. Fire and forget.
    fn speak(&mut self, utterance: Utterance);
}

/// One entry of the voice selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceOption {
    /// Display text, e.g. `Alex (en-US) -- DEFAULT`.
    pub label: String,
    pub name: String,
    pub lang: String,
}

impl From<&Voice> for VoiceOption {
    fn from(voice: &Voice) -> Self {
        let mut label = format!("{} ({})", voice.name, voice.lang);
        if voice.is_default {
            label.push_str(" -- DEFAULT");
        }
        Self {
            label,
            name: voice.name.clone(),
            lang: voice.lang.clone(),
        }
    }
}

/// Options of the voice selector and the current selection.
#[derive(Clone, Debug, Default)]
pub struct VoiceList {
    options: Vec<VoiceOption>,
    selected: Option<String>,
}

impl VoiceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the options from `voices`.
    ///
    /// The selection survives when a voice with the same name is still
    /// present. Otherwise the first option is selected, matching a freshly
    /// populated `<select>`.
    pub fn populate(&mut self, voices: &[Voice]) {
        self.options = voices.iter().map(VoiceOption::from).collect();
        let keep = self
            .selected
            .as_deref()
            .is_some_and(|name| self.options.iter().any(|o| o.name == name));
        if !keep {
            self.selected = self.options.first().map(|o| o.name.clone());
        }
    }

    pub fn options(&self) -> &[VoiceOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether the selector should accept input.
    pub fn is_enabled(&self) -> bool {
        !self.is_empty()
    }

    /// Select the option named `name`. Returns `false` (and leaves the
    /// selection unchanged) if no such option exists.
    pub fn select(&mut self, name: &str) -> bool {
        if self.options.iter().any(|o| o.name == name) {
            self.selected = Some(name.into());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection against the voices the host reports right now.
    /// `None` falls back to the platform default.
    pub fn resolve(&self, voices: &[Voice]) -> Option<Voice> {
        let name = self.selected.as_deref()?;
        voices.iter().find(|v| v.name == name).cloned()
    }
}

/// Build the utterance for `text`, or `None` when there is nothing to say.
pub fn utterance(text: String, voice: Option<Voice>, volume: Volume) -> Option<Utterance> {
    if text.is_empty() {
        return None;
    }
    Some(Utterance {
        text,
        voice,
        volume: volume.gain(),
    })
}

/// A [`SpeechSynthesizer`] with a fixed voice list that records utterances.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSpeech {
    pub voices: Vec<Voice>,
    pub spoken: Vec<Utterance>,
}

impl ScriptedSpeech {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            spoken: Vec::new(),
        }
    }
}

impl SpeechSynthesizer for ScriptedSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&mut self, utterance: Utterance) {
        self.spoken.push(utterance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn voices() -> Vec<Voice> {
        vec![
            Voice::new("Alex", "en-US").default_voice(),
            Voice::new("Amelie", "fr-CA"),
        ]
    }

    #[test]
    fn option_labels() {
        let mut list = VoiceList::new();
        list.populate(&voices());
        let labels: Vec<_> = list.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Alex (en-US) -- DEFAULT", "Amelie (fr-CA)"]);
    }

    #[test]
    fn empty_list_is_disabled() {
        let mut list = VoiceList::new();
        list.populate(&[]);
        assert!(!list.is_enabled());
        assert_eq!(list.selected(), None);
        assert_eq!(list.resolve(&voices()), None);
    }

    #[test]
    fn late_voices_select_first() {
        let mut list = VoiceList::new();
        list.populate(&[]);
        list.populate(&voices());
        assert!(list.is_enabled());
        assert_eq!(list.selected(), Some("Alex"));
    }

    #[test]
    fn selection_survives_repopulate() {
        let mut list = VoiceList::new();
        list.populate(&voices());
        assert!(list.select("Amelie"));
        list.populate(&voices());
        assert_eq!(list.selected(), Some("Amelie"));
    }

    #[test]
    fn vanished_selection_falls_back_to_first() {
        let mut list = VoiceList::new();
        list.populate(&voices());
        list.select("Amelie");
        list.populate(&[Voice::new("Bruno", "pt-BR")]);
        assert_eq!(list.selected(), Some("Bruno"));
    }

    #[test]
    fn unknown_select_is_rejected() {
        let mut list = VoiceList::new();
        list.populate(&voices());
        assert!(!list.select("Nobody"));
        assert_eq!(list.selected(), Some("Alex"));
    }

    #[test]
    fn resolve_missing_voice_is_default() {
        let mut list = VoiceList::new();
        list.populate(&voices());
        list.select("Amelie");
        assert_eq!(list.resolve(&[Voice::new("Alex", "en-US")]), None);
        assert_eq!(list.resolve(&voices()).map(|v| v.name), Some(String::from("Amelie")));
    }

    #[test]
    fn empty_text_is_silent() {
        assert_eq!(utterance(String::new(), None, Volume::FULL), None);
        let u = utterance("hi".into(), None, Volume::new(25.0)).unwrap();
        assert_eq!(u.volume, 0.25);
    }
}
