//! Read-only projection of window state for the rendering layer.

use std::fmt;

use crate::window::{Bounds, Window, WindowId, WindowManager};

/// State classes the renderer maps onto window chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateClasses {
    pub active: bool,
    pub maximized: bool,
    pub minimized: bool,
}

impl StateClasses {
    pub fn of(window: &Window, active: bool) -> Self {
        Self {
            active,
            maximized: window.is_maximized(),
            minimized: window.is_minimized(),
        }
    }
}

impl fmt::Display for StateClasses {
    /// Space separated class list, always led by `window`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("window")?;
        if self.active {
            f.write_str(" active")?;
        }
        if self.maximized {
            f.write_str(" maximized")?;
        }
        if self.minimized {
            f.write_str(" minimized")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub bounds: Bounds,
    pub z_index: u64,
    pub classes: StateClasses,
}

impl fmt::Display for WindowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} {:<18} {:<22} z={:<4} {}",
            self.id.to_string(),
            self.title,
            self.bounds.to_string(),
            self.z_index,
            self.classes
        )
    }
}

impl WindowManager {
    /// Everything the renderer needs, back to front.
    pub fn render_plan(&self) -> Vec<WindowView> {
        let active = self.active_id();
        self.windows()
            .into_iter()
            .map(|window| WindowView {
                id: window.id(),
                title: window.title().to_string(),
                bounds: window.bounds(),
                z_index: window.z_order(),
                classes: StateClasses::of(window, active == Some(window.id())),
            })
            .collect()
    }
}
