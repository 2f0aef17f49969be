pub mod stacking;

mod window_manager;

use std::fmt;

use crate::constants::{MIN_HEIGHT, MIN_WIDTH};

pub use window_manager::{Gesture, WindowManager, WmError};

/// Signed window rectangle in desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// Grow undersized dimensions to the window minimums, keeping the origin.
    pub fn clamped_to_minimum(self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
            ..self
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Stable per-instance window identifier. Ids are never reused within a
/// manager, so a handle to a closed window stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a window.
///
/// Restore geometry lives inside the state so a `Normal` window can never
/// carry stale pre-maximize bounds. A window minimized while maximized keeps
/// its restore bounds and returns to `Maximized` when un-minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Maximized { restore: Bounds },
    Minimized { restore: Option<Bounds> },
}

impl WindowState {
    pub fn is_minimized(&self) -> bool {
        matches!(self, WindowState::Minimized { .. })
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self, WindowState::Maximized { .. })
    }

    pub fn restore_bounds(&self) -> Option<Bounds> {
        match *self {
            WindowState::Normal => None,
            WindowState::Maximized { restore } => Some(restore),
            WindowState::Minimized { restore } => restore,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WindowState::Normal => "normal",
            WindowState::Maximized { .. } => "maximized",
            WindowState::Minimized { .. } => "minimized",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One on-screen application surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: WindowId,
    title: String,
    bounds: Bounds,
    z_order: u64,
    state: WindowState,
}

impl Window {
    fn new(id: WindowId, title: String, bounds: Bounds, z_order: u64) -> Self {
        Self {
            id,
            title,
            bounds: bounds.clamped_to_minimum(),
            z_order,
            state: WindowState::Normal,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn z_order(&self) -> u64 {
        self.z_order
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn restore_bounds(&self) -> Option<Bounds> {
        self.state.restore_bounds()
    }

    pub fn is_minimized(&self) -> bool {
        self.state.is_minimized()
    }

    pub fn is_maximized(&self) -> bool {
        self.state.is_maximized()
    }
}
