//! Page events and the host-driven queue that carries them.
//!
//! The host translates DOM callbacks into [`Event`] values and pushes them;
//! the generator drains the queue, running each handler to completion
//! before the next one starts.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::captions::Captions;
use crate::image::{ImageRef, LoadToken};

/// Something the user or the host did.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A file was chosen in the image input.
    ImageSelected(ImageRef),
    /// The host finished decoding the image requested with `token`.
    ImageLoaded {
        token: LoadToken,
        width: u32,
        height: u32,
    },
    /// The caption form was submitted. Default navigation is already
    /// suppressed by the host.
    Submit(Captions),
    ClearClicked,
    SpeakClicked,
    /// The volume slider moved.
    VolumeInput(f64),
    /// A voice was picked in the selector.
    VoiceSelected(String),
    /// The speech service reported a new voice list.
    VoicesChanged,
}

/// FIFO of pending events.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}
