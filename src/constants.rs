//! Shared crate-wide constants.

/// Smallest width, in pixels, any window may have. Resizing and creation both
/// clamp to this value.
pub const MIN_WIDTH: i32 = 200;

/// Smallest height, in pixels, any window may have.
pub const MIN_HEIGHT: i32 = 100;

/// Height of the menu bar strip that sits above the available desktop area.
pub const MENU_BAR_HEIGHT: i32 = 25;

/// Default viewport used when no explicit desktop size is configured.
pub const DEFAULT_DESKTOP_WIDTH: i32 = 1440;
pub const DEFAULT_DESKTOP_HEIGHT: i32 = 900;

/// Height of the draggable title bar at the top of every window.
pub const TITLE_BAR_HEIGHT: i32 = 28;

/// Diameter of a traffic light button.
pub const TRAFFIC_LIGHT_SIZE: i32 = 12;

/// Horizontal gap between two traffic light buttons.
pub const TRAFFIC_LIGHT_GAP: i32 = 8;

/// Inset of the first traffic light from the left window edge.
pub const TRAFFIC_LIGHT_INSET: i32 = 12;

/// Thickness of the edge resize bands. Corner handles are twice this size
/// on each side.
pub const RESIZE_HANDLE_SIZE: i32 = 6;
