use std::fmt;

use crate::drivers::keyboard::KeyPress;
use crate::window::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CloseActive,
    HideActive,
    QuitAll,
}

impl Action {
    /// Map a keyboard shortcut to an action. Hide only answers to the meta
    /// key because Ctrl+H is commonly claimed by the browser.
    pub fn from_shortcut(key: KeyPress) -> Option<Action> {
        if !(key.meta || key.ctrl) {
            return None;
        }
        match key.key.to_ascii_lowercase() {
            'w' => Some(Action::CloseActive),
            'q' => Some(Action::QuitAll),
            'h' if key.meta => Some(Action::HideActive),
            _ => None,
        }
    }

    /// Apply the action. Returns whether any window changed.
    pub fn apply(self, wm: &mut WindowManager) -> bool {
        match self {
            Action::CloseActive => wm
                .active_id()
                .is_some_and(|id| wm.close(id).is_ok()),
            Action::HideActive => wm
                .active_id()
                .is_some_and(|id| wm.minimize(id).is_ok()),
            Action::QuitAll => wm.close_all() > 0,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::CloseActive => "Close active window (Cmd+W)",
            Action::HideActive => "Hide active window (Cmd+H)",
            Action::QuitAll => "Quit all windows (Cmd+Q)",
        };
        write!(f, "{}", s)
    }
}
