pub mod floating;

use crate::window::Bounds;
use floating::{
    ResizeEdge, TrafficLight, resize_handles_for, title_bar_for, traffic_light_rect,
};

/// Which part of a window's chrome a point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Resize(ResizeEdge),
    TrafficLight(TrafficLight),
    TitleBar,
    Body,
}

/// Classify a point inside `bounds`. Resize handles win over the title bar
/// controls; maximized windows expose no resize handles.
pub fn hit_chrome(bounds: Bounds, resizable: bool, x: i32, y: i32) -> Option<ChromeHit> {
    if !bounds.contains(x, y) {
        return None;
    }
    if resizable
        && let Some(handle) = resize_handles_for(bounds)
            .into_iter()
            .find(|handle| handle.rect.contains(x, y))
    {
        return Some(ChromeHit::Resize(handle.edge));
    }
    if let Some(light) = TrafficLight::ALL
        .into_iter()
        .find(|light| traffic_light_rect(bounds, *light).contains(x, y))
    {
        return Some(ChromeHit::TrafficLight(light));
    }
    if title_bar_for(bounds).contains(x, y) {
        return Some(ChromeHit::TitleBar);
    }
    Some(ChromeHit::Body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: Bounds = Bounds::new(100, 100, 400, 300);

    #[test]
    fn outside_is_none() {
        assert_eq!(hit_chrome(W, true, 0, 0), None);
    }

    #[test]
    fn corner_beats_edges() {
        assert_eq!(
            hit_chrome(W, true, 499, 399),
            Some(ChromeHit::Resize(ResizeEdge::SouthEast))
        );
        assert_eq!(
            hit_chrome(W, true, 300, 399),
            Some(ChromeHit::Resize(ResizeEdge::South))
        );
    }

    #[test]
    fn title_bar_and_body() {
        assert_eq!(hit_chrome(W, true, 300, 115), Some(ChromeHit::TitleBar));
        assert_eq!(hit_chrome(W, true, 300, 250), Some(ChromeHit::Body));
    }

    #[test]
    fn traffic_lights_resolve() {
        let close = traffic_light_rect(W, TrafficLight::Close);
        assert_eq!(
            hit_chrome(W, true, close.x + 1, close.y + 1),
            Some(ChromeHit::TrafficLight(TrafficLight::Close))
        );
    }

    #[test]
    fn not_resizable_has_no_handles() {
        assert_eq!(hit_chrome(W, false, 300, 399), Some(ChromeHit::Body));
        assert_eq!(hit_chrome(W, false, 101, 101), Some(ChromeHit::TitleBar));
    }
}
