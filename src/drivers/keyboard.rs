use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A key pressed together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: char,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: char) -> Self {
        Self {
            key,
            meta: false,
            ctrl: false,
        }
    }

    pub fn meta(key: char) -> Self {
        Self {
            meta: true,
            ..Self::plain(key)
        }
    }

    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meta {
            f.write_str("cmd+")?;
        }
        if self.ctrl {
            f.write_str("ctrl+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key combo `{0}`")]
pub struct InvalidKeyCombo(pub String);

impl FromStr for KeyPress {
    type Err = InvalidKeyCombo;

    /// Parses combos such as `cmd+w`, `ctrl+q` or `meta+h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidKeyCombo(s.to_string());
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key_part = parts.pop().ok_or_else(invalid)?;
        let mut chars = key_part.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_lowercase(),
            _ => return Err(invalid()),
        };
        let mut press = KeyPress::plain(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "cmd" | "meta" | "super" => press.meta = true,
                "ctrl" | "control" => press.ctrl = true,
                _ => return Err(invalid()),
            }
        }
        Ok(press)
    }
}
