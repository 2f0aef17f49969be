/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Primary-button pointer event in desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub fn down(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }
}

/// Press at `from`, move to `to`, release at `to`.
pub fn drag_sequence(from: (i32, i32), to: (i32, i32)) -> [PointerEvent; 3] {
    [
        PointerEvent::down(from.0, from.1),
        PointerEvent::moved(to.0, to.1),
        PointerEvent::up(to.0, to.1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_sequence_is_down_move_up() {
        let seq = drag_sequence((1, 2), (3, 4));
        assert_eq!(seq[0], PointerEvent::down(1, 2));
        assert_eq!(seq[1].kind, PointerKind::Move);
        assert_eq!(seq[2], PointerEvent::up(3, 4));
    }
}
