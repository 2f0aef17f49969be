//! Desktop dimensions and the available area derived from them.

use thiserror::Error;

use crate::constants::{
    DEFAULT_DESKTOP_HEIGHT, DEFAULT_DESKTOP_WIDTH, MENU_BAR_HEIGHT, MIN_HEIGHT, MIN_WIDTH,
};
use crate::window::Bounds;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("desktop width must be between {min} and {max} pixels, got {got}")]
    Width { min: i32, max: i32, got: i32 },
    #[error("desktop height must be between {min} and {max} pixels, got {got}")]
    Height { min: i32, max: i32, got: i32 },
    #[error("menu bar height must be between 0 and {max} pixels, got {got}")]
    MenuBar { max: i32, got: i32 },
}

const MAX_DIMENSION: i32 = 16_384;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopConfig {
    width: i32,
    height: i32,
    menu_bar_height: i32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DESKTOP_WIDTH,
            height: DEFAULT_DESKTOP_HEIGHT,
            menu_bar_height: MENU_BAR_HEIGHT,
        }
    }
}

impl DesktopConfig {
    /// Validate a viewport. The area left under the menu bar must still fit
    /// a minimum-size window.
    pub fn new(width: i32, height: i32, menu_bar_height: i32) -> Result<Self, ConfigError> {
        if !(MIN_WIDTH..=MAX_DIMENSION).contains(&width) {
            return Err(ConfigError::Width {
                min: MIN_WIDTH,
                max: MAX_DIMENSION,
                got: width,
            });
        }
        if !(MIN_HEIGHT..=MAX_DIMENSION).contains(&height) {
            return Err(ConfigError::Height {
                min: MIN_HEIGHT,
                max: MAX_DIMENSION,
                got: height,
            });
        }
        let max_bar = height - MIN_HEIGHT;
        if !(0..=max_bar).contains(&menu_bar_height) {
            return Err(ConfigError::MenuBar {
                max: max_bar,
                got: menu_bar_height,
            });
        }
        Ok(Self {
            width,
            height,
            menu_bar_height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn menu_bar_height(&self) -> i32 {
        self.menu_bar_height
    }

    /// The rectangle below the menu bar that maximized windows fill.
    pub fn available_area(&self) -> Bounds {
        Bounds::new(
            0,
            self.menu_bar_height,
            self.width,
            self.height - self.menu_bar_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_area_sits_under_menu_bar() {
        let cfg = DesktopConfig::default();
        assert_eq!(cfg.available_area(), Bounds::new(0, 25, 1440, 875));
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert!(matches!(
            DesktopConfig::new(50, 800, 25),
            Err(ConfigError::Width { got: 50, .. })
        ));
        assert!(matches!(
            DesktopConfig::new(800, 20_000, 25),
            Err(ConfigError::Height { .. })
        ));
        assert!(matches!(
            DesktopConfig::new(800, 120, 25),
            Err(ConfigError::MenuBar { max: 20, got: 25 })
        ));
        assert!(DesktopConfig::new(800, 600, 0).is_ok());
    }
}
