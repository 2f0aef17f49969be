use desk_wm::config::DesktopConfig;
use desk_wm::desktop::Desktop;
use desk_wm::drivers::ReplayDriver;
use desk_wm::drivers::keyboard::KeyPress;
use desk_wm::drivers::pointer::PointerEvent;
use desk_wm::window::{Bounds, Gesture};

fn desktop() -> Desktop {
    Desktop::new(DesktopConfig::default())
}

#[test]
fn many_small_moves_land_on_cumulative_delta() {
    let mut desk = desktop();
    let id = desk.windows_mut().open("W", Bounds::new(100, 100, 400, 300));

    let mut driver = ReplayDriver::new();
    driver.push(PointerEvent::down(300, 110));
    for step in 1..=40 {
        driver.push(PointerEvent::moved(300 + step * 3, 110 - step));
    }
    driver.push(PointerEvent::up(420, 70));
    desk.run(&mut driver);
    assert!(driver.is_empty());

    assert_eq!(desk.windows().window(id).unwrap().bounds(), Bounds::new(220, 60, 400, 300));
    assert!(desk.windows().gesture().is_idle());
}

#[test]
fn gesture_recomputes_from_start_not_last_frame() {
    let mut desk = desktop();
    let id = desk.windows_mut().open("W", Bounds::new(100, 100, 400, 300));

    desk.handle_pointer(PointerEvent::down(499, 399));
    assert!(matches!(desk.windows().gesture(), Gesture::Resize { .. }));
    // shrink far past the minimum, then come back
    desk.handle_pointer(PointerEvent::moved(-500, -500));
    assert_eq!(desk.windows().window(id).unwrap().bounds(), Bounds::new(100, 100, 200, 100));
    desk.handle_pointer(PointerEvent::moved(549, 409));
    desk.handle_pointer(PointerEvent::up(549, 409));
    assert_eq!(desk.windows().window(id).unwrap().bounds(), Bounds::new(100, 100, 450, 310));
}

#[test]
fn north_west_corner_keeps_opposite_corner_fixed() {
    let mut desk = desktop();
    let id = desk.windows_mut().open("W", Bounds::new(100, 100, 400, 300));
    let driver: ReplayDriver = [
        PointerEvent::down(101, 101),
        PointerEvent::moved(900, 900),
        PointerEvent::up(900, 900),
    ]
    .into_iter()
    .collect();
    desk.run(driver);
    let b = desk.windows().window(id).unwrap().bounds();
    assert_eq!((b.width, b.height), (200, 100));
    assert_eq!((b.right(), b.bottom()), (500, 400));
}

#[test]
fn pressing_a_back_window_raises_it() {
    let mut desk = desktop();
    let back = desk.windows_mut().open("Back", Bounds::new(100, 100, 400, 300));
    let front = desk.windows_mut().open("Front", Bounds::new(300, 200, 400, 300));

    // overlapping point goes to the front window
    desk.handle_pointer(PointerEvent::down(350, 250));
    desk.handle_pointer(PointerEvent::up(350, 250));
    assert_eq!(desk.windows().active_id(), Some(front));

    desk.handle_pointer(PointerEvent::down(150, 250));
    desk.handle_pointer(PointerEvent::up(150, 250));
    assert_eq!(desk.windows().active_id(), Some(back));
    assert_eq!(desk.windows().window_at(350, 250), Some(back));
}

#[test]
fn closing_mid_drag_drops_the_gesture() {
    let mut desk = desktop();
    let a = desk.windows_mut().open("A", Bounds::new(100, 100, 400, 300));
    let b = desk.windows_mut().open("B", Bounds::new(600, 100, 400, 300));

    desk.handle_pointer(PointerEvent::down(800, 110));
    desk.handle_pointer(PointerEvent::moved(820, 120));
    assert!(desk.handle_key(KeyPress::meta('w')));
    assert!(!desk.windows().contains(b));
    assert!(desk.windows().gesture().is_idle());

    // the rest of the drag goes nowhere
    assert!(!desk.handle_pointer(PointerEvent::moved(900, 300)));
    desk.handle_pointer(PointerEvent::up(900, 300));
    assert_eq!(desk.windows().window(a).unwrap().bounds(), Bounds::new(100, 100, 400, 300));
    assert_eq!(desk.windows().active_id(), Some(a));
}

#[test]
fn marquee_selection_leaves_stacking_alone() {
    let mut desk = desktop();
    let a = desk.windows_mut().open("A", Bounds::new(100, 100, 400, 300));
    let b = desk.windows_mut().open("B", Bounds::new(600, 100, 400, 300));
    let ranks = |desk: &Desktop| {
        [a, b].map(|id| desk.windows().window(id).unwrap().z_order())
    };
    let before = ranks(&desk);

    desk.handle_pointer(PointerEvent::down(1200, 800));
    desk.handle_pointer(PointerEvent::moved(200, 500));
    assert_eq!(desk.selection().rect(), Some(Bounds::new(200, 500, 1000, 300)));
    desk.handle_pointer(PointerEvent::up(200, 500));

    assert_eq!(ranks(&desk), before);
    assert_eq!(desk.selection().rect(), None);
}
