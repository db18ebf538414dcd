//! Enabled/disabled state of the form's action buttons.

/// An action button on the meme form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// "Generate": draws the captions.
    Submit,
    /// "Clear": wipes canvas and form.
    Clear,
    /// "Read Text": speaks the captions.
    Speak,
}

/// Which half of the two-state flow the form is in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormPhase {
    /// Waiting for captions. Only submit is enabled.
    #[default]
    Editing,
    /// Captions drawn. Clear and speak are enabled.
    Submitted,
}

/// Snapshot of every button's enabled flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ButtonStates {
    pub submit: bool,
    pub clear: bool,
    pub speak: bool,
}

/// Two-state button group.
///
/// ```
/// use memecanvas::controls::{Button, ButtonGroup};
///
/// let mut group = ButtonGroup::new();
/// assert!(group.is_enabled(Button::Submit));
/// group.submit();
/// assert!(!group.is_enabled(Button::Submit));
/// assert!(group.is_enabled(Button::Clear));
/// group.reset();
/// assert!(!group.is_enabled(Button::Speak));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonGroup {
    phase: FormPhase,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_enabled(&self, button: Button) -> bool {
        match (self.phase, button) {
            (FormPhase::Editing, Button::Submit) => true,
            (FormPhase::Editing, Button::Clear | Button::Speak) => false,
            (FormPhase::Submitted, Button::Submit) => false,
            (FormPhase::Submitted, Button::Clear | Button::Speak) => true,
        }
    }

    pub fn states(&self) -> ButtonStates {
        ButtonStates {
            submit: self.is_enabled(Button::Submit),
            clear: self.is_enabled(Button::Clear),
            speak: self.is_enabled(Button::Speak),
        }
    }

    /// Move to [`FormPhase::Submitted`].
    pub fn submit(&mut self) {
        self.phase = FormPhase::Submitted;
    }

    /// Back to [`FormPhase::Editing`].
    pub fn reset(&mut self) {
        self.phase = FormPhase::Editing;
    }
}
