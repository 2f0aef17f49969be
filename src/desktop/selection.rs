use crate::window::Bounds;

/// Marquee selection drawn by dragging across empty desktop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    anchor: (i32, i32),
    current: (i32, i32),
    active: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: i32, y: i32) {
        self.anchor = (x, y);
        self.current = (x, y);
        self.active = true;
    }

    /// Track the pointer. Ignored unless a selection is in progress.
    pub fn update(&mut self, x: i32, y: i32) -> bool {
        if !self.active {
            return false;
        }
        self.current = (x, y);
        true
    }

    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Normalized outline while a selection is in progress.
    pub fn rect(&self) -> Option<Bounds> {
        if !self.active {
            return None;
        }
        let (ax, ay) = self.anchor;
        let (cx, cy) = self.current;
        Some(Bounds::new(
            ax.min(cx),
            ay.min(cy),
            span(ax, cx),
            span(ay, cy),
        ))
    }
}

fn span(a: i32, b: i32) -> i32 {
    i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX)
}
