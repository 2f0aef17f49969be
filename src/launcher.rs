//! Dock-side collaborator: launches apps with their default geometry and
//! brings running ones back.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::window::{Bounds, WindowId, WindowManager, WmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKind {
    Finder,
    Calculator,
    Terminal,
    TextEdit,
    Notes,
    SystemSettings,
}

impl AppKind {
    pub const ALL: [AppKind; 6] = [
        AppKind::Finder,
        AppKind::Calculator,
        AppKind::Terminal,
        AppKind::TextEdit,
        AppKind::Notes,
        AppKind::SystemSettings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AppKind::Finder => "Finder",
            AppKind::Calculator => "Calculator",
            AppKind::Terminal => "Terminal",
            AppKind::TextEdit => "TextEdit",
            AppKind::Notes => "Notes",
            AppKind::SystemSettings => "System Settings",
        }
    }

    /// Geometry of a freshly launched window.
    pub fn default_bounds(&self) -> Bounds {
        match self {
            AppKind::Finder => Bounds::new(100, 80, 600, 400),
            AppKind::Calculator => Bounds::new(200, 150, 280, 540),
            AppKind::Terminal => Bounds::new(300, 120, 600, 400),
            AppKind::TextEdit => Bounds::new(350, 200, 500, 400),
            AppKind::Notes => Bounds::new(450, 220, 700, 500),
            AppKind::SystemSettings => Bounds::new(150, 100, 680, 500),
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown app `{0}`")]
pub struct UnknownApp(pub String);

impl FromStr for AppKind {
    type Err = UnknownApp;

    /// Accepts the window title, ignoring case and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        AppKind::ALL
            .into_iter()
            .find(|app| {
                let title: String = app.title().chars().filter(|c| !c.is_whitespace()).collect();
                title.eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| UnknownApp(s.to_string()))
    }
}

/// Open `app`, or if a window with its title already exists, restore and
/// raise that window instead.
pub fn launch(wm: &mut WindowManager, app: AppKind) -> Result<WindowId, WmError> {
    if let Some(id) = wm.find_by_title(app.title()).map(|w| w.id()) {
        wm.restore(id)?;
        tracing::debug!(window_id = %id, %app, "reactivated running app");
        return Ok(id);
    }
    Ok(wm.open(app.title(), app.default_bounds()))
}

pub fn is_running(wm: &WindowManager, app: AppKind) -> bool {
    wm.find_by_title(app.title()).is_some()
}

/// The windows a fresh desktop starts with, back to front.
pub fn default_session(wm: &mut WindowManager) -> Vec<WindowId> {
    [
        (AppKind::Finder, Bounds::new(100, 80, 600, 400)),
        (AppKind::Terminal, Bounds::new(255, 165, 600, 400)),
        (AppKind::TextEdit, Bounds::new(1200, 150, 500, 400)),
        (AppKind::Calculator, Bounds::new(900, 100, 280, 540)),
        (AppKind::Notes, AppKind::Notes.default_bounds()),
    ]
    .into_iter()
    .map(|(app, bounds)| wm.open(app.title(), bounds))
    .collect()
}
