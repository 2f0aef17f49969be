use std::collections::BTreeMap;

use thiserror::Error;

use super::stacking::{Ranks, front_most};
use super::{Bounds, Window, WindowId, WindowState};
use crate::layout::floating::{ResizeEdge, apply_move_drag, apply_resize_drag};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WmError {
    #[error("window {0} not found")]
    NotFound(WindowId),
    #[error("cannot {op} window {id} while it is {state}")]
    InvalidState {
        id: WindowId,
        op: &'static str,
        state: &'static str,
    },
}

/// Pointer gesture in progress.
///
/// Every pointer move recomputes the window geometry from the bounds and
/// pointer position captured at `begin`, never from the previous frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Move {
        id: WindowId,
        start_pointer: (i32, i32),
        start_bounds: Bounds,
    },
    Resize {
        id: WindowId,
        edge: ResizeEdge,
        start_pointer: (i32, i32),
        start_bounds: Bounds,
    },
}

impl Gesture {
    pub fn window(&self) -> Option<WindowId> {
        match *self {
            Gesture::Idle => None,
            Gesture::Move { id, .. } | Gesture::Resize { id, .. } => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// Owns every open window, their stacking order, and the single pointer
/// gesture that may be in flight.
#[derive(Debug, Clone)]
pub struct WindowManager {
    windows: BTreeMap<WindowId, Window>,
    ranks: Ranks,
    next_id: u64,
    area: Bounds,
    gesture: Gesture,
}

impl WindowManager {
    /// Create an empty manager whose maximized windows fill `area`.
    pub fn new(area: Bounds) -> Self {
        Self {
            windows: BTreeMap::new(),
            ranks: Ranks::new(),
            next_id: 1,
            area,
            gesture: Gesture::Idle,
        }
    }

    /// Available desktop area used for maximized windows.
    pub fn area(&self) -> Bounds {
        self.area
    }

    /// Change the available area. Maximized windows, including ones that were
    /// minimized from the maximized state, follow the new area.
    pub fn set_area(&mut self, area: Bounds) {
        self.area = area;
        for window in self.windows.values_mut() {
            if window.state.restore_bounds().is_some() {
                window.bounds = area;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Create a new `Normal` window in front of every other window.
    pub fn open(&mut self, title: impl Into<String>, bounds: Bounds) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let (ranks, rank) = self.ranks.next();
        self.ranks = ranks;
        let window = Window::new(id, title.into(), bounds, rank);
        tracing::debug!(window_id = %id, title = window.title(), bounds = %window.bounds(), z = rank, "opened window");
        self.windows.insert(id, window);
        id
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// All windows, back to front.
    pub fn windows(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Front-most window whose title matches exactly, minimized or not.
    pub fn find_by_title(&self, title: &str) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| w.title == title)
            .max_by_key(|w| w.z_order)
    }

    pub fn active_window(&self) -> Option<&Window> {
        front_most(
            self.windows
                .values()
                .map(|w| (w, w.z_order, !w.is_minimized())),
        )
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.active_window().map(Window::id)
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.active_id() == Some(id)
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Topmost non-minimized window containing the point.
    pub fn window_at(&self, x: i32, y: i32) -> Option<WindowId> {
        front_most(self.windows.values().map(|w| {
            (
                w.id,
                w.z_order,
                !w.is_minimized() && w.bounds.contains(x, y),
            )
        }))
    }

    /// Minimized windows in the order they would appear in a dock.
    pub fn minimized_windows(&self) -> Vec<&Window> {
        self.windows.values().filter(|w| w.is_minimized()).collect()
    }

    /// Sorted, de-duplicated titles of every open window.
    pub fn running_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.windows.values().map(|w| w.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        titles
    }

    fn get(&self, id: WindowId) -> Result<&Window, WmError> {
        self.windows.get(&id).ok_or(WmError::NotFound(id))
    }

    fn get_mut(&mut self, id: WindowId) -> Result<&mut Window, WmError> {
        self.windows.get_mut(&id).ok_or(WmError::NotFound(id))
    }

    fn ensure_geometry_editable(&self, id: WindowId, op: &'static str) -> Result<(), WmError> {
        let window = self.get(id)?;
        if matches!(window.state, WindowState::Normal) {
            Ok(())
        } else {
            Err(WmError::InvalidState {
                id,
                op,
                state: window.state.name(),
            })
        }
    }

    /// Give the window the highest rank, making it the active window.
    pub fn bring_to_front(&mut self, id: WindowId) -> Result<(), WmError> {
        let window = self.get(id)?;
        if window.is_minimized() {
            return Err(WmError::InvalidState {
                id,
                op: "raise",
                state: window.state.name(),
            });
        }
        self.raise(id);
        Ok(())
    }

    fn raise(&mut self, id: WindowId) {
        let ranks = self.ranks;
        if let Some(window) = self.windows.get_mut(&id) {
            let (ranks, rank) = ranks.raise(window.z_order);
            if rank != window.z_order {
                tracing::debug!(window_id = %id, from = window.z_order, to = rank, "raised window");
                window.z_order = rank;
            }
            self.ranks = ranks;
        }
    }

    /// Start moving a window with the pointer at `(x, y)`. Finalizes any
    /// gesture already in progress and raises the window.
    pub fn begin_move(&mut self, id: WindowId, x: i32, y: i32) -> Result<(), WmError> {
        self.end_gesture();
        self.ensure_geometry_editable(id, "move")?;
        self.raise(id);
        let start_bounds = self.get(id)?.bounds;
        self.gesture = Gesture::Move {
            id,
            start_pointer: (x, y),
            start_bounds,
        };
        tracing::debug!(window_id = %id, x, y, "move gesture started");
        Ok(())
    }

    /// Start resizing a window from `edge` with the pointer at `(x, y)`.
    pub fn begin_resize(
        &mut self,
        id: WindowId,
        edge: ResizeEdge,
        x: i32,
        y: i32,
    ) -> Result<(), WmError> {
        self.end_gesture();
        self.ensure_geometry_editable(id, "resize")?;
        self.raise(id);
        let start_bounds = self.get(id)?.bounds;
        self.gesture = Gesture::Resize {
            id,
            edge,
            start_pointer: (x, y),
            start_bounds,
        };
        tracing::debug!(window_id = %id, %edge, x, y, "resize gesture started");
        Ok(())
    }

    /// Apply the pointer position to the gesture in progress.
    ///
    /// Returns the window that changed, or `None` when no gesture is active.
    /// A gesture whose window was closed or left the `Normal` state is
    /// dropped and the error reported.
    pub fn update_gesture(&mut self, x: i32, y: i32) -> Result<Option<WindowId>, WmError> {
        let Some(id) = self.gesture.window() else {
            return Ok(None);
        };
        if let Err(err) = self.ensure_geometry_editable(id, "update gesture on") {
            self.gesture = Gesture::Idle;
            return Err(err);
        }
        let next = match self.gesture {
            Gesture::Idle => return Ok(None),
            Gesture::Move {
                start_pointer,
                start_bounds,
                ..
            } => apply_move_drag(
                start_bounds,
                x.saturating_sub(start_pointer.0),
                y.saturating_sub(start_pointer.1),
            ),
            Gesture::Resize {
                edge,
                start_pointer,
                start_bounds,
                ..
            } => apply_resize_drag(
                start_bounds,
                edge,
                x.saturating_sub(start_pointer.0),
                y.saturating_sub(start_pointer.1),
            ),
        };
        self.get_mut(id)?.bounds = next;
        Ok(Some(id))
    }

    /// Finish the gesture in progress, keeping the last computed geometry.
    pub fn end_gesture(&mut self) -> Option<WindowId> {
        let id = std::mem::take(&mut self.gesture).window()?;
        if let Some(window) = self.windows.get(&id) {
            tracing::debug!(window_id = %id, bounds = %window.bounds, "gesture ended");
        }
        Some(id)
    }

    fn drop_gesture_for(&mut self, id: WindowId) {
        if self.gesture.window() == Some(id) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Move a window by `(dx, dy)` as one complete gesture.
    pub fn drag_window(&mut self, id: WindowId, dx: i32, dy: i32) -> Result<Bounds, WmError> {
        self.begin_move(id, 0, 0)?;
        let updated = self.update_gesture(dx, dy);
        self.end_gesture();
        updated?;
        Ok(self.get(id)?.bounds)
    }

    /// Resize a window from `edge` by `(dx, dy)` as one complete gesture.
    pub fn resize_window(
        &mut self,
        id: WindowId,
        edge: ResizeEdge,
        dx: i32,
        dy: i32,
    ) -> Result<Bounds, WmError> {
        self.begin_resize(id, edge, 0, 0)?;
        let updated = self.update_gesture(dx, dy);
        self.end_gesture();
        updated?;
        Ok(self.get(id)?.bounds)
    }

    /// Minimize a window. Activity passes to the next window down.
    pub fn minimize(&mut self, id: WindowId) -> Result<(), WmError> {
        let window = self.get_mut(id)?;
        let next = match window.state {
            WindowState::Minimized { .. } => return Ok(()),
            WindowState::Normal => WindowState::Minimized { restore: None },
            WindowState::Maximized { restore } => WindowState::Minimized {
                restore: Some(restore),
            },
        };
        window.state = next;
        tracing::debug!(window_id = %id, "minimized window");
        self.drop_gesture_for(id);
        Ok(())
    }

    /// Toggle between `Normal` and `Maximized`. Restoring puts back the exact
    /// bounds saved when the window was maximized.
    pub fn maximize_toggle(&mut self, id: WindowId) -> Result<(), WmError> {
        let area = self.area;
        let window = self.get_mut(id)?;
        match window.state {
            WindowState::Normal => {
                window.state = WindowState::Maximized {
                    restore: window.bounds,
                };
                window.bounds = area;
                tracing::debug!(window_id = %id, "maximized window");
                self.drop_gesture_for(id);
                self.raise(id);
            }
            WindowState::Maximized { restore } => {
                window.bounds = restore;
                window.state = WindowState::Normal;
                tracing::debug!(window_id = %id, bounds = %restore, "unmaximized window");
            }
            WindowState::Minimized { .. } => {
                return Err(WmError::InvalidState {
                    id,
                    op: "maximize",
                    state: window.state.name(),
                });
            }
        }
        Ok(())
    }

    /// Un-minimize a window back to the state it was minimized from and
    /// raise it. Raises windows that are not minimized.
    pub fn restore(&mut self, id: WindowId) -> Result<(), WmError> {
        let area = self.area;
        let window = self.get_mut(id)?;
        if let WindowState::Minimized { restore } = window.state {
            window.state = match restore {
                Some(restore) => {
                    window.bounds = area;
                    WindowState::Maximized { restore }
                }
                None => WindowState::Normal,
            };
            tracing::debug!(window_id = %id, state = %window.state, "restored window");
        }
        self.raise(id);
        Ok(())
    }

    /// Remove a window entirely.
    pub fn close(&mut self, id: WindowId) -> Result<Window, WmError> {
        let window = self.windows.remove(&id).ok_or(WmError::NotFound(id))?;
        tracing::debug!(window_id = %id, title = window.title(), "closing window");
        self.drop_gesture_for(id);
        Ok(window)
    }

    /// Close every window.
    pub fn close_all(&mut self) -> usize {
        let count = self.windows.len();
        self.windows.clear();
        self.gesture = Gesture::Idle;
        tracing::debug!(count, "closed all windows");
        count
    }
}
