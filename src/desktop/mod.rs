//! Host-side input routing: turns raw pointer and key events into window
//! manager calls, or into the marquee selection when nothing is hit.

pub mod selection;

use crate::actions::Action;
use crate::config::DesktopConfig;
use crate::drivers::keyboard::KeyPress;
use crate::drivers::pointer::{PointerEvent, PointerKind};
use crate::drivers::{InputDriver, InputEvent};
use crate::layout::floating::{TrafficLight, traffic_light_rect};
use crate::layout::{ChromeHit, hit_chrome};
use crate::window::{WindowId, WindowManager, WmError};
use selection::Selection;

/// What the pointer grabbed on its last press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Capture {
    #[default]
    None,
    Gesture,
    Selection,
    Button(WindowId, TrafficLight),
}

#[derive(Debug, Clone)]
pub struct Desktop {
    config: DesktopConfig,
    windows: WindowManager,
    selection: Selection,
    capture: Capture,
}

impl Desktop {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            config,
            windows: WindowManager::new(config.available_area()),
            selection: Selection::new(),
            capture: Capture::None,
        }
    }

    pub fn config(&self) -> DesktopConfig {
        self.config
    }

    /// Apply a new viewport; maximized windows follow the available area.
    pub fn set_config(&mut self, config: DesktopConfig) {
        self.config = config;
        self.windows.set_area(config.available_area());
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drain `driver`, dispatching every event. Returns how many events were
    /// consumed by the desktop.
    pub fn run<D: InputDriver>(&mut self, mut driver: D) -> usize {
        let mut handled = 0;
        while let Some(event) = driver.next_event() {
            if self.handle_event(&event) {
                handled += 1;
            }
        }
        handled
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
            InputEvent::Key(key) => self.handle_key(key),
        }
    }

    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        let Some(action) = Action::from_shortcut(key) else {
            return false;
        };
        tracing::debug!(%key, %action, "shortcut");
        self.cancel_capture();
        action.apply(&mut self.windows)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.x, event.y),
            PointerKind::Move => self.pointer_move(event.x, event.y),
            PointerKind::Up => self.pointer_up(event.x, event.y),
        }
    }

    fn cancel_capture(&mut self) {
        match std::mem::take(&mut self.capture) {
            Capture::Gesture => {
                self.windows.end_gesture();
            }
            Capture::Selection => {
                self.selection.end();
            }
            Capture::Button(..) | Capture::None => {}
        }
    }

    fn pointer_down(&mut self, x: i32, y: i32) -> bool {
        // A press without a matching release still ends the old interaction.
        self.cancel_capture();

        let Some(id) = self.windows.window_at(x, y) else {
            self.selection.start(x, y);
            self.capture = Capture::Selection;
            return true;
        };
        let Some(window) = self.windows.window(id) else {
            return false;
        };
        let bounds = window.bounds();
        let maximized = window.is_maximized();

        let result = match hit_chrome(bounds, !maximized, x, y) {
            Some(ChromeHit::Resize(edge)) => self
                .windows
                .begin_resize(id, edge, x, y)
                .map(|()| self.capture = Capture::Gesture),
            Some(ChromeHit::TitleBar) if !maximized => self
                .windows
                .begin_move(id, x, y)
                .map(|()| self.capture = Capture::Gesture),
            Some(ChromeHit::TrafficLight(light)) => {
                self.capture = Capture::Button(id, light);
                self.windows.bring_to_front(id)
            }
            Some(ChromeHit::TitleBar) | Some(ChromeHit::Body) | None => {
                self.windows.bring_to_front(id)
            }
        };
        log_rejected(result);
        true
    }

    fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        match self.capture {
            Capture::Gesture => match self.windows.update_gesture(x, y) {
                Ok(changed) => changed.is_some(),
                Err(err) => {
                    tracing::debug!(error = %err, "gesture dropped");
                    self.capture = Capture::None;
                    false
                }
            },
            Capture::Selection => self.selection.update(x, y),
            Capture::Button(..) | Capture::None => false,
        }
    }

    fn pointer_up(&mut self, x: i32, y: i32) -> bool {
        match std::mem::take(&mut self.capture) {
            Capture::Gesture => self.windows.end_gesture().is_some(),
            Capture::Selection => self.selection.end(),
            Capture::Button(id, light) => {
                // Releasing outside the button cancels the click.
                let still_over = self
                    .windows
                    .window(id)
                    .is_some_and(|w| traffic_light_rect(w.bounds(), light).contains(x, y));
                if !still_over {
                    return false;
                }
                let result = match light {
                    TrafficLight::Close => self.windows.close(id).map(drop),
                    TrafficLight::Minimize => self.windows.minimize(id),
                    TrafficLight::Maximize => self.windows.maximize_toggle(id),
                };
                log_rejected(result);
                true
            }
            Capture::None => false,
        }
    }
}

fn log_rejected(result: Result<(), WmError>) {
    if let Err(err) = result {
        tracing::debug!(error = %err, "ignored rejected window operation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ReplayDriver;
    use crate::drivers::pointer::drag_sequence;
    use crate::window::Bounds;

    fn desktop_with_two() -> (Desktop, WindowId, WindowId) {
        let mut desk = Desktop::new(DesktopConfig::default());
        let a = desk.windows_mut().open("Finder", Bounds::new(100, 100, 400, 300));
        let b = desk.windows_mut().open("Notes", Bounds::new(600, 100, 400, 300));
        (desk, a, b)
    }

    fn press(desk: &mut Desktop, from: (i32, i32), to: (i32, i32)) {
        let driver: ReplayDriver = drag_sequence(from, to).into_iter().collect();
        desk.run(driver);
    }

    #[test]
    fn title_bar_drag_moves_and_raises() {
        let (mut desk, a, _) = desktop_with_two();
        press(&mut desk, (300, 110), (400, 160));
        let w = desk.windows().window(a).unwrap();
        assert_eq!(w.bounds(), Bounds::new(200, 150, 400, 300));
        assert_eq!(desk.windows().active_id(), Some(a));
    }

    #[test]
    fn body_click_raises_without_moving() {
        let (mut desk, a, _) = desktop_with_two();
        press(&mut desk, (300, 250), (350, 300));
        assert_eq!(desk.windows().window(a).unwrap().bounds(), Bounds::new(100, 100, 400, 300));
        assert_eq!(desk.windows().active_id(), Some(a));
    }

    #[test]
    fn east_handle_resizes() {
        let (mut desk, a, _) = desktop_with_two();
        press(&mut desk, (498, 250), (548, 250));
        assert_eq!(desk.windows().window(a).unwrap().bounds().width, 450);
    }

    #[test]
    fn traffic_lights_fire_on_release() {
        let (mut desk, a, b) = desktop_with_two();
        let bounds = desk.windows().window(b).unwrap().bounds();
        let min = traffic_light_rect(bounds, TrafficLight::Minimize);
        // released elsewhere: no click
        press(&mut desk, (min.x + 2, min.y + 2), (min.x + 200, min.y + 2));
        assert!(!desk.windows().window(b).unwrap().is_minimized());
        press(&mut desk, (min.x + 2, min.y + 2), (min.x + 3, min.y + 3));
        assert!(desk.windows().window(b).unwrap().is_minimized());

        let close = traffic_light_rect(bounds, TrafficLight::Close);
        // b is minimized and no longer hit-testable
        press(&mut desk, (close.x + 2, close.y + 2), (close.x + 2, close.y + 2));
        assert!(desk.windows().contains(b));

        let bounds = desk.windows().window(a).unwrap().bounds();
        let max = traffic_light_rect(bounds, TrafficLight::Maximize);
        press(&mut desk, (max.x + 2, max.y + 2), (max.x + 2, max.y + 2));
        assert!(desk.windows().window(a).unwrap().is_maximized());

        let close = traffic_light_rect(desk.windows().area(), TrafficLight::Close);
        press(&mut desk, (close.x + 2, close.y + 2), (close.x + 2, close.y + 2));
        assert!(!desk.windows().contains(a));
    }

    #[test]
    fn maximized_title_bar_does_not_drag() {
        let (mut desk, a, _) = desktop_with_two();
        desk.windows_mut().maximize_toggle(a).unwrap();
        let area = desk.windows().area();
        press(&mut desk, (700, area.y + 10), (800, area.y + 100));
        assert_eq!(desk.windows().window(a).unwrap().bounds(), area);
    }

    #[test]
    fn empty_desktop_starts_selection_without_touching_windows() {
        let (mut desk, _, b) = desktop_with_two();
        let before = desk.windows().render_plan();
        desk.handle_pointer(PointerEvent::down(50, 600));
        desk.handle_pointer(PointerEvent::moved(150, 700));
        assert_eq!(desk.selection().rect(), Some(Bounds::new(50, 600, 100, 100)));
        desk.handle_pointer(PointerEvent::up(150, 700));
        assert!(!desk.selection().is_active());
        assert_eq!(desk.windows().render_plan(), before);
        assert_eq!(desk.windows().active_id(), Some(b));
    }

    #[test]
    fn shortcut_closes_active_window() {
        let (mut desk, a, b) = desktop_with_two();
        assert!(desk.handle_key(KeyPress::meta('w')));
        assert!(!desk.windows().contains(b));
        assert_eq!(desk.windows().active_id(), Some(a));
        assert!(!desk.handle_key(KeyPress::plain('w')));
    }

    #[test]
    fn press_on_window_dragged_to_coordinate_limit() {
        let (mut desk, a, _) = desktop_with_two();
        let b = desk.windows_mut().drag_window(a, i32::MAX - 120, 0).unwrap();
        assert_eq!(b, Bounds::new(2_147_483_627, 100, 400, 300));
        assert!(desk.handle_pointer(PointerEvent::down(b.x + 8, b.y + 150)));
        desk.handle_pointer(PointerEvent::up(b.x + 8, b.y + 150));
        // close button, below the corner handle; released elsewhere
        assert!(desk.handle_pointer(PointerEvent::down(b.x + 13, b.y + 13)));
        assert!(!desk.handle_pointer(PointerEvent::up(b.x - 300, b.y + 13)));
        assert!(desk.windows().contains(a));
        assert_eq!(desk.windows().active_id(), Some(a));
    }

    #[test]
    fn set_config_refits_maximized() {
        let (mut desk, a, _) = desktop_with_two();
        desk.windows_mut().maximize_toggle(a).unwrap();
        let cfg = DesktopConfig::new(1024, 768, 25).unwrap();
        desk.set_config(cfg);
        assert_eq!(desk.windows().window(a).unwrap().bounds(), cfg.available_area());
    }
}
