//! Rank assignment for the front-to-back window order.
//!
//! Ranks are plain values owned by each window. Raising a window never
//! touches the other windows: it only computes a fresh rank above every rank
//! handed out so far. The high-water mark travels with the window set that
//! owns it, so there is no process-wide counter.

/// Ordering state for one window set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ranks {
    top: u64,
}

impl Ranks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest rank handed out so far (0 when none has been).
    pub fn top(&self) -> u64 {
        self.top
    }

    /// Rank for a newly created window.
    pub fn next(self) -> (Self, u64) {
        let rank = self.top.saturating_add(1);
        (Self { top: rank }, rank)
    }

    /// Rank for `current` after bringing it to the front.
    ///
    /// Returns `current` unchanged when it already holds the top rank.
    pub fn raise(self, current: u64) -> (Self, u64) {
        if current == self.top {
            (self, current)
        } else {
            self.next()
        }
    }
}

/// Pick the front-most item among those eligible for activity.
pub fn front_most<T, I>(items: I) -> Option<T>
where
    I: IntoIterator<Item = (T, u64, bool)>,
{
    items
        .into_iter()
        .filter(|(_, _, eligible)| *eligible)
        .max_by_key(|(_, rank, _)| *rank)
        .map(|(item, _, _)| item)
}
