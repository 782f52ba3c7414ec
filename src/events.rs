//! The frame-scoped event queue.
//!
//! Events are pushed during a scene's update and drained once by the
//! top-level driver at the end of the frame. The driver acts only on
//! [`Event::ChangeScene`]; anything else is carried into the next frame's
//! queue untouched.

use std::collections::VecDeque;

use crate::scene::SceneKind;

/// Messages a scene can post to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Replace the active scene at the end of this frame.
    ChangeScene(SceneKind),
    /// Carries no payload; used to exercise the passthrough path.
    Noop,
}

/// A FIFO of pending events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Takes every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> VecDeque<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_in_order() {
        let mut queue = EventQueue::default();
        queue.push(Event::Noop);
        queue.push(Event::ChangeScene(SceneKind::Title));

        let drained: Vec<Event> = queue.drain().into_iter().collect();
        assert_eq!(drained, vec![Event::Noop, Event::ChangeScene(SceneKind::Title)]);
        assert!(queue.is_empty());
    }
}
