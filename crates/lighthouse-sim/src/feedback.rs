//! Per-tick buffer of gameplay events and on-screen messages.

use lighthouse_core::events::{GameEvent, TextEvent};

/// Collected during a tick and drained into the frame snapshot.
#[derive(Debug, Default)]
pub struct Feedback {
    pub events: Vec<GameEvent>,
    pub messages: Vec<TextEvent>,
}

impl Feedback {
    pub fn event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn message(&mut self, text: impl Into<String>, duration_secs: f64) {
        self.messages.push(TextEvent::new(text, duration_secs));
    }

    /// Take everything collected so far, leaving the buffer empty.
    pub fn drain(&mut self) -> (Vec<GameEvent>, Vec<TextEvent>) {
        (
            std::mem::take(&mut self.events),
            std::mem::take(&mut self.messages),
        )
    }
}
