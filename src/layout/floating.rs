use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{
    MIN_HEIGHT, MIN_WIDTH, RESIZE_HANDLE_SIZE, TITLE_BAR_HEIGHT, TRAFFIC_LIGHT_GAP,
    TRAFFIC_LIGHT_INSET, TRAFFIC_LIGHT_SIZE,
};
use crate::window::Bounds;

/// Which window edge or corner a resize gesture grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    /// Short compass name, also the handle's CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeEdge::North => "n",
            ResizeEdge::South => "s",
            ResizeEdge::East => "e",
            ResizeEdge::West => "w",
            ResizeEdge::NorthEast => "ne",
            ResizeEdge::NorthWest => "nw",
            ResizeEdge::SouthEast => "se",
            ResizeEdge::SouthWest => "sw",
        }
    }

    fn moves_west(&self) -> bool {
        matches!(
            self,
            ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
        )
    }

    fn moves_east(&self) -> bool {
        matches!(
            self,
            ResizeEdge::East | ResizeEdge::NorthEast | ResizeEdge::SouthEast
        )
    }

    fn moves_north(&self) -> bool {
        matches!(
            self,
            ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest
        )
    }

    fn moves_south(&self) -> bool {
        matches!(
            self,
            ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest
        )
    }
}

impl fmt::Display for ResizeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize handle `{0}`")]
pub struct UnknownEdge(pub String);

impl FromStr for ResizeEdge {
    type Err = UnknownEdge;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeEdge::ALL
            .into_iter()
            .find(|edge| edge.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEdge(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub edge: ResizeEdge,
    pub rect: Bounds,
}

/// The three title bar buttons, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficLight {
    Close,
    Minimize,
    Maximize,
}

impl TrafficLight {
    pub const ALL: [TrafficLight; 3] = [
        TrafficLight::Close,
        TrafficLight::Minimize,
        TrafficLight::Maximize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLight::Close => "close",
            TrafficLight::Minimize => "minimize",
            TrafficLight::Maximize => "maximize",
        }
    }
}

/// Geometry of an in-progress resize, recomputed from the gesture start on
/// every pointer move.
///
/// The edges in `edge` follow the pointer; the opposite edges stay fixed. When
/// the requested delta would shrink past the minimum size, the size is pinned
/// to the minimum and a moving west/north edge is pinned with it so the
/// window never inverts.
pub fn apply_resize_drag(start: Bounds, edge: ResizeEdge, dx: i32, dy: i32) -> Bounds {
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width;
    let mut height = start.height;

    if edge.moves_west() {
        x = x.saturating_add(dx);
        width = width.saturating_sub(dx);
    } else if edge.moves_east() {
        width = width.saturating_add(dx);
    }
    if edge.moves_north() {
        y = y.saturating_add(dy);
        height = height.saturating_sub(dy);
    } else if edge.moves_south() {
        height = height.saturating_add(dy);
    }

    if width < MIN_WIDTH {
        if edge.moves_west() {
            x = x.saturating_sub(MIN_WIDTH - width);
        }
        width = MIN_WIDTH;
    }
    if height < MIN_HEIGHT {
        if edge.moves_north() {
            y = y.saturating_sub(MIN_HEIGHT - height);
        }
        height = MIN_HEIGHT;
    }

    Bounds {
        x,
        y,
        width,
        height,
    }
}

/// Geometry of an in-progress move. Moves are not clamped to the desktop.
pub fn apply_move_drag(start: Bounds, dx: i32, dy: i32) -> Bounds {
    start.translated(dx, dy)
}

pub fn title_bar_for(bounds: Bounds) -> Bounds {
    Bounds {
        x: bounds.x,
        y: bounds.y,
        width: bounds.width,
        height: TITLE_BAR_HEIGHT.min(bounds.height),
    }
}

pub fn traffic_light_rect(bounds: Bounds, light: TrafficLight) -> Bounds {
    let index = match light {
        TrafficLight::Close => 0,
        TrafficLight::Minimize => 1,
        TrafficLight::Maximize => 2,
    };
    Bounds {
        x: bounds
            .x
            .saturating_add(TRAFFIC_LIGHT_INSET + index * (TRAFFIC_LIGHT_SIZE + TRAFFIC_LIGHT_GAP)),
        y: bounds
            .y
            .saturating_add((TITLE_BAR_HEIGHT - TRAFFIC_LIGHT_SIZE) / 2),
        width: TRAFFIC_LIGHT_SIZE,
        height: TRAFFIC_LIGHT_SIZE,
    }
}

/// All eight resize handles of a window, corners first so a hit test that
/// walks the list in order prefers corners over the edge bands they overlap.
pub fn resize_handles_for(bounds: Bounds) -> Vec<ResizeHandle> {
    let band = RESIZE_HANDLE_SIZE;
    let corner = RESIZE_HANDLE_SIZE * 2;
    let right = bounds.right();
    let bottom = bounds.bottom();
    let square = |x: i32, y: i32| Bounds::new(x, y, corner, corner);

    vec![
        ResizeHandle {
            edge: ResizeEdge::NorthWest,
            rect: square(bounds.x, bounds.y),
        },
        ResizeHandle {
            edge: ResizeEdge::NorthEast,
            rect: square(right - corner, bounds.y),
        },
        ResizeHandle {
            edge: ResizeEdge::SouthWest,
            rect: square(bounds.x, bottom - corner),
        },
        ResizeHandle {
            edge: ResizeEdge::SouthEast,
            rect: square(right - corner, bottom - corner),
        },
        ResizeHandle {
            edge: ResizeEdge::North,
            rect: Bounds::new(bounds.x, bounds.y, bounds.width, band),
        },
        ResizeHandle {
            edge: ResizeEdge::South,
            rect: Bounds::new(bounds.x, bottom - band, bounds.width, band),
        },
        ResizeHandle {
            edge: ResizeEdge::West,
            rect: Bounds::new(bounds.x, bounds.y, band, bounds.height),
        },
        ResizeHandle {
            edge: ResizeEdge::East,
            rect: Bounds::new(right - band, bounds.y, band, bounds.height),
        },
    ]
}
