use desk_wm::layout::floating::ResizeEdge;
use desk_wm::window::{Bounds, WindowManager, WmError};

fn manager() -> WindowManager {
    WindowManager::new(Bounds::new(0, 25, 1440, 875))
}

#[test]
fn drag_moves_by_delta_and_activates() {
    let mut wm = manager();
    let w = wm.open("W", Bounds::new(100, 100, 400, 300));
    let other = wm.open("Other", Bounds::new(700, 100, 400, 300));
    assert_eq!(wm.active_id(), Some(other));

    let bounds = wm.drag_window(w, 100, 50).unwrap();
    assert_eq!(bounds, Bounds::new(200, 150, 400, 300));
    assert_eq!(wm.active_id(), Some(w));
}

#[test]
fn bring_to_front_outranks_previous_top() {
    let mut wm = manager();
    let a = wm.open("A", Bounds::new(0, 30, 300, 200));
    let b = wm.open("B", Bounds::new(50, 60, 300, 200));
    assert!(wm.window(b).unwrap().z_order() > wm.window(a).unwrap().z_order());

    wm.bring_to_front(a).unwrap();
    assert_eq!(wm.active_id(), Some(a));
    assert!(wm.window(a).unwrap().z_order() > wm.window(b).unwrap().z_order());
}

#[test]
fn west_resize_past_minimum_keeps_east_edge() {
    let mut wm = manager();
    let id = wm.open("W", Bounds::new(100, 100, 400, 300));
    let bounds = wm.resize_window(id, ResizeEdge::West, 500, 0).unwrap();
    assert_eq!(bounds.width, 200);
    assert_eq!(bounds.x, 300);
    assert_eq!(bounds.right(), 500);
}

#[test]
fn resize_never_goes_below_minimum() {
    let mut wm = manager();
    let id = wm.open("W", Bounds::new(100, 100, 600, 400));
    for edge in ResizeEdge::ALL {
        let bounds = wm.resize_window(id, edge, -1000, -1000).unwrap();
        assert!(bounds.width >= 200, "{edge}: {bounds}");
        assert!(bounds.height >= 100, "{edge}: {bounds}");
        let bounds = wm.resize_window(id, edge, 1000, 1000).unwrap();
        assert!(bounds.width >= 200, "{edge}: {bounds}");
        assert!(bounds.height >= 100, "{edge}: {bounds}");
    }
    let id = wm.open("E", Bounds::new(100, 100, 600, 400));
    assert_eq!(wm.resize_window(id, ResizeEdge::East, -1000, 0).unwrap().width, 200);
}

#[test]
fn minimize_then_close_hands_activity_down() {
    let mut wm = manager();
    let a = wm.open("A", Bounds::new(0, 30, 300, 200));
    let b = wm.open("B", Bounds::new(0, 30, 300, 200));
    let c = wm.open("C", Bounds::new(0, 30, 300, 200));

    wm.minimize(c).unwrap();
    assert_eq!(wm.active_id(), Some(b));
    wm.close(c).unwrap();
    assert!(!wm.contains(c));
    assert_eq!(wm.active_id(), Some(b));

    wm.close(b).unwrap();
    assert_eq!(wm.active_id(), Some(a));
}

#[test]
fn maximize_toggle_round_trips_exactly() {
    let mut wm = manager();
    let id = wm.open("W", Bounds::new(123, 77, 456, 321));
    wm.maximize_toggle(id).unwrap();
    assert_eq!(wm.window(id).unwrap().bounds(), wm.area());
    assert_eq!(
        wm.window(id).unwrap().restore_bounds(),
        Some(Bounds::new(123, 77, 456, 321))
    );
    wm.maximize_toggle(id).unwrap();
    let w = wm.window(id).unwrap();
    assert_eq!(w.bounds(), Bounds::new(123, 77, 456, 321));
    assert_eq!(w.restore_bounds(), None);
}

#[test]
fn sequential_drags_add_up() {
    let mut split = manager();
    let mut whole = manager();
    let a = split.open("W", Bounds::new(100, 100, 400, 300));
    let b = whole.open("W", Bounds::new(100, 100, 400, 300));

    split.drag_window(a, 37, -12).unwrap();
    split.drag_window(a, -80, 250).unwrap();
    whole.drag_window(b, 37 - 80, -12 + 250).unwrap();
    assert_eq!(split.window(a).unwrap().bounds(), whole.window(b).unwrap().bounds());
}

#[test]
fn exactly_one_active_window_across_raises() {
    let mut wm = manager();
    let ids: Vec<_> = (0..6)
        .map(|i| wm.open(format!("W{i}"), Bounds::new(i * 20, 30 + i * 20, 300, 200)))
        .collect();
    wm.minimize(ids[4]).unwrap();
    for &id in ids.iter().cycle().skip(3).take(25) {
        let _ = wm.bring_to_front(id);
        let active: Vec<_> = wm
            .windows()
            .into_iter()
            .filter(|w| wm.is_active(w.id()))
            .map(|w| w.id())
            .collect();
        assert_eq!(active.len(), 1);
        let top = wm
            .windows()
            .into_iter()
            .filter(|w| !w.is_minimized())
            .max_by_key(|w| w.z_order())
            .map(|w| w.id());
        assert_eq!(wm.active_id(), top);
    }
    let mut ranks: Vec<_> = wm.windows().into_iter().map(|w| w.z_order()).collect();
    ranks.dedup();
    assert_eq!(ranks.len(), ids.len());
}

#[test]
fn stale_and_illegal_operations_are_rejected() {
    let mut wm = manager();
    let id = wm.open("W", Bounds::new(100, 100, 400, 300));
    wm.maximize_toggle(id).unwrap();
    assert!(matches!(
        wm.drag_window(id, 1, 1),
        Err(WmError::InvalidState { .. })
    ));
    assert!(matches!(
        wm.resize_window(id, ResizeEdge::SouthEast, 1, 1),
        Err(WmError::InvalidState { .. })
    ));

    wm.minimize(id).unwrap();
    assert!(matches!(
        wm.maximize_toggle(id),
        Err(WmError::InvalidState { .. })
    ));

    wm.close(id).unwrap();
    assert_eq!(wm.close(id).unwrap_err(), WmError::NotFound(id));
    assert_eq!(wm.bring_to_front(id), Err(WmError::NotFound(id)));
    assert_eq!(wm.active_id(), None);
}
