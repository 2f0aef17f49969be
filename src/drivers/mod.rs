pub mod keyboard;
pub mod pointer;

use std::collections::VecDeque;

use keyboard::KeyPress;
use pointer::PointerEvent;

/// Discrete input delivered by the host UI runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyPress),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<KeyPress> for InputEvent {
    fn from(key: KeyPress) -> Self {
        InputEvent::Key(key)
    }
}

pub trait InputDriver {
    /// Next pending event, or `None` once the source is exhausted.
    fn next_event(&mut self) -> Option<InputEvent>;
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn next_event(&mut self) -> Option<InputEvent> {
        (**self).next_event()
    }
}

/// Plays back a fixed sequence of events.
#[derive(Debug, Clone, Default)]
pub struct ReplayDriver {
    queue: VecDeque<InputEvent>,
}

impl ReplayDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: impl Into<InputEvent>) {
        self.queue.push_back(event.into());
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<E: Into<InputEvent>> FromIterator<E> for ReplayDriver {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputDriver for ReplayDriver {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}
