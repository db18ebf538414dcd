//! Volume slider value, level classification, and icon selection.

#[cfg(feature = "alloc")]
use alloc::{format, string::String};

/// Upper bound of the volume slider.
pub const MAX_VOLUME: f64 = 100.0;

/// Volume slider value, clamped to `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume(f64);

impl Volume {
    /// Full volume, the slider's initial position.
    pub const FULL: Self = Self(MAX_VOLUME);

    /// Clamp `value` into the slider range. NaN is treated as silence.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_VOLUME))
    }

    /// Raw slider value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Playback gain in `0.0..=1.0`.
    pub fn gain(self) -> f32 {
        (self.0 / MAX_VOLUME) as f32
    }

    /// Icon bucket for this value.
    pub fn level(self) -> VolumeLevel {
        VolumeLevel::from_value(self.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}

/// One of the four volume icons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeLevel {
    /// Exactly zero.
    Muted,
    /// Below 33.
    Low,
    /// Below 66.
    Medium,
    /// 66 and above.
    High,
}

impl VolumeLevel {
    /// Classify a slider value.
    ///
    /// Thresholds: `0` → [`Muted`](Self::Muted), `< 33` → [`Low`](Self::Low),
    /// `< 66` → [`Medium`](Self::Medium), else [`High`](Self::High).
    pub fn from_value(value: f64) -> Self {
        if value == 0.0 {
            Self::Muted
        } else if value < 33.0 {
            Self::Low
        } else if value < 66.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Icon index, `0..=3`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Muted => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Icon asset stem, e.g. `volume-level-2`.
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Muted => "volume-level-0",
            Self::Low => "volume-level-1",
            Self::Medium => "volume-level-2",
            Self::High => "volume-level-3",
        }
    }

    /// Icon asset path under `icon_dir`, e.g. `./icons/volume-level-2.svg`.
    #[cfg(feature = "alloc")]
    pub fn icon_path(self, icon_dir: &str) -> String {
        let dir = icon_dir.trim_end_matches('/');
        format!("{dir}/{}.svg", self.icon_name())
    }
}
