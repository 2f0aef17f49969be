//! Stacking window manager core for a simulated desktop.
//!
//! [`window::WindowManager`] owns the window set, the stacking order and the
//! pointer gesture in progress. [`desktop::Desktop`] routes raw pointer and
//! key input to it the way a host shell would.

pub mod actions;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod launcher;
pub mod layout;
pub mod script;
pub mod tracing_sub;
pub mod view;
pub mod window;

pub use config::DesktopConfig;
pub use desktop::Desktop;
pub use window::{Bounds, Gesture, Window, WindowId, WindowManager, WindowState, WmError};
