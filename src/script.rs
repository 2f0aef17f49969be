//! Line-oriented command scripts for driving a desktop without a host UI.
//!
//! One command per line; `#` starts a comment. Windows are addressed by id
//! (`3` or `#3`) or by title (`Finder`, `System Settings`):
//!
//! ```text
//! session
//! launch Calculator
//! open Scratch 10 40 320 240
//! drag Finder 100 50
//! resize #2 se 40 40
//! front Finder
//! minimize Notes
//! maximize Finder
//! restore Notes
//! close Calculator
//! key cmd+w
//! down 300 110
//! move 400 160
//! up 400 160
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::desktop::Desktop;
use crate::drivers::keyboard::KeyPress;
use crate::drivers::pointer::PointerEvent;
use crate::launcher::{self, AppKind};
use crate::layout::floating::ResizeEdge;
use crate::window::{Bounds, WindowId, WmError};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: no window matches `{target}`")]
    UnknownTarget { line: usize, target: String },
    #[error("line {line}: {source}")]
    Window {
        line: usize,
        #[source]
        source: WmError,
    },
    #[error("failed to read script: {0}")]
    Io(#[from] io::Error),
}

impl ScriptError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::Parse { line, .. }
            | ScriptError::UnknownTarget { line, .. }
            | ScriptError::Window { line, .. } => Some(*line),
            ScriptError::Io(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Id(WindowId),
    Title(String),
}

impl Target {
    fn parse(words: &[&str]) -> Option<Target> {
        let joined = words.join(" ");
        if joined.is_empty() {
            return None;
        }
        let digits = joined.strip_prefix('#').unwrap_or(&joined);
        match digits.parse::<u64>() {
            Ok(n) => Some(Target::Id(WindowId(n))),
            Err(_) => Some(Target::Title(joined)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Session,
    Launch(AppKind),
    Open { title: String, bounds: Bounds },
    Front(Target),
    Drag { target: Target, dx: i32, dy: i32 },
    Resize {
        target: Target,
        edge: ResizeEdge,
        dx: i32,
        dy: i32,
    },
    Minimize(Target),
    Maximize(Target),
    Restore(Target),
    Close(Target),
    Key(KeyPress),
    Pointer(PointerEvent),
}

/// A parsed command with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub command: Command,
}

/// Whether a rejected window operation stops the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    #[default]
    Stop,
    Continue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub applied: usize,
    pub rejected: usize,
}

fn int(word: &str, line: usize) -> Result<i32, ScriptError> {
    word.parse().map_err(|_| ScriptError::Parse {
        line,
        message: format!("expected an integer, got `{word}`"),
    })
}

/// Split `args` into a target and `n` trailing integers.
fn target_and_ints(
    args: &[&str],
    n: usize,
    line: usize,
    usage: &str,
) -> Result<(Target, Vec<i32>), ScriptError> {
    let usage_err = || ScriptError::Parse {
        line,
        message: format!("usage: {usage}"),
    };
    if args.len() <= n {
        return Err(usage_err());
    }
    let split = args.len() - n;
    let target = Target::parse(&args[..split]).ok_or_else(usage_err)?;
    let nums = args[split..]
        .iter()
        .map(|w| int(w, line))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((target, nums))
}

// `#` followed by a digit is a window id, not a comment.
fn strip_comment(text: &str) -> &str {
    let mut prev_space = true;
    for (idx, ch) in text.char_indices() {
        if ch == '#' && prev_space {
            let rest = &text[idx + 1..];
            if !rest.starts_with(|c: char| c.is_ascii_digit()) {
                return &text[..idx];
            }
        }
        prev_space = ch.is_whitespace();
    }
    text
}

fn parse_command(text: &str, line: usize) -> Result<Option<Command>, ScriptError> {
    let words: Vec<&str> = strip_comment(text).split_whitespace().collect();
    let Some((verb, args)) = words.split_first() else {
        return Ok(None);
    };
    let parse_err = |message: String| ScriptError::Parse { line, message };
    let single_target = |usage: &str| {
        Target::parse(args).ok_or_else(|| ScriptError::Parse {
            line,
            message: format!("usage: {usage}"),
        })
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "session" => Command::Session,
        "launch" => {
            let app = args
                .join(" ")
                .parse::<AppKind>()
                .map_err(|e| parse_err(e.to_string()))?;
            Command::Launch(app)
        }
        "open" => {
            let (target, nums) = target_and_ints(args, 4, line, "open <title> <x> <y> <w> <h>")?;
            let title = match target {
                Target::Title(title) => title,
                Target::Id(id) => id.0.to_string(),
            };
            Command::Open {
                title,
                bounds: Bounds::new(nums[0], nums[1], nums[2], nums[3]),
            }
        }
        "front" => Command::Front(single_target("front <window>")?),
        "drag" => {
            let (target, nums) = target_and_ints(args, 2, line, "drag <window> <dx> <dy>")?;
            Command::Drag {
                target,
                dx: nums[0],
                dy: nums[1],
            }
        }
        "resize" => {
            let usage = "resize <window> <handle> <dx> <dy>";
            if args.len() < 4 {
                return Err(parse_err(format!("usage: {usage}")));
            }
            let edge_at = args.len() - 3;
            let edge = args[edge_at]
                .parse::<ResizeEdge>()
                .map_err(|e| parse_err(e.to_string()))?;
            let target = Target::parse(&args[..edge_at])
                .ok_or_else(|| parse_err(format!("usage: {usage}")))?;
            Command::Resize {
                target,
                edge,
                dx: int(args[edge_at + 1], line)?,
                dy: int(args[edge_at + 2], line)?,
            }
        }
        "minimize" => Command::Minimize(single_target("minimize <window>")?),
        "maximize" => Command::Maximize(single_target("maximize <window>")?),
        "restore" => Command::Restore(single_target("restore <window>")?),
        "close" => Command::Close(single_target("close <window>")?),
        "key" => {
            let combo = args
                .first()
                .ok_or_else(|| parse_err("usage: key <combo>".to_string()))?;
            Command::Key(
                combo
                    .parse::<KeyPress>()
                    .map_err(|e| parse_err(e.to_string()))?,
            )
        }
        "down" | "move" | "up" => {
            let [x, y] = args else {
                return Err(parse_err(format!("usage: {verb} <x> <y>")));
            };
            let (x, y) = (int(x, line)?, int(y, line)?);
            Command::Pointer(match verb.to_ascii_lowercase().as_str() {
                "down" => PointerEvent::down(x, y),
                "move" => PointerEvent::moved(x, y),
                _ => PointerEvent::up(x, y),
            })
        }
        other => return Err(parse_err(format!("unknown command `{other}`"))),
    };
    Ok(Some(command))
}

/// Parse a whole script, failing on the first malformed line.
pub fn parse(script: &str) -> Result<Vec<Line>, ScriptError> {
    let mut lines = Vec::new();
    for (idx, text) in script.lines().enumerate() {
        let number = idx + 1;
        if let Some(command) = parse_command(text, number)? {
            lines.push(Line { number, command });
        }
    }
    Ok(lines)
}

/// Read a script from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String, ScriptError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn resolve(desk: &Desktop, target: &Target, line: usize) -> Result<WindowId, ScriptError> {
    match target {
        Target::Id(id) => Ok(*id),
        Target::Title(title) => desk
            .windows()
            .find_by_title(title)
            .map(|w| w.id())
            .ok_or_else(|| ScriptError::UnknownTarget {
                line,
                target: title.clone(),
            }),
    }
}

impl Line {
    /// Apply this command to `desk`.
    pub fn apply(&self, desk: &mut Desktop) -> Result<(), ScriptError> {
        let line = self.number;
        let wm_err = |source: WmError| ScriptError::Window { line, source };
        match &self.command {
            Command::Session => {
                launcher::default_session(desk.windows_mut());
            }
            Command::Launch(app) => {
                launcher::launch(desk.windows_mut(), *app).map_err(wm_err)?;
            }
            Command::Open { title, bounds } => {
                desk.windows_mut().open(title.clone(), *bounds);
            }
            Command::Front(target) => {
                let id = resolve(desk, target, line)?;
                desk.windows_mut().bring_to_front(id).map_err(wm_err)?;
            }
            Command::Drag { target, dx, dy } => {
                let id = resolve(desk, target, line)?;
                desk.windows_mut()
                    .drag_window(id, *dx, *dy)
                    .map_err(wm_err)?;
            }
            Command::Resize {
                target,
                edge,
                dx,
                dy,
            } => {
                let id = resolve(desk, target, line)?;
                desk.windows_mut()
                    .resize_window(id, *edge, *dx, *dy)
                    .map_err(wm_err)?;
            }
            Command::Minimize(target) => {
                let id = resolve(desk, target, line)?;
                desk.windows_mut().minimize(id).map_err(wm_err)?;
            }
            Command::Maximize(target) => {
                let id = resolve(desk, target, line)?;
                desk.windows_mut().maximize_toggle(id).map_err(wm_err)?;
            }
            Command::Restore(target) => {
                let id = resolve(desk, target, line)?;
                desk.windows_mut().restore(id).map_err(wm_err)?;
            }
            Command::Close(target) => {
                let id = resolve(desk, target, line)?;
                desk.windows_mut().close(id).map_err(wm_err)?;
            }
            Command::Key(key) => {
                desk.handle_key(*key);
            }
            Command::Pointer(event) => {
                desk.handle_pointer(*event);
            }
        }
        Ok(())
    }
}

/// Run parsed lines against `desk`.
///
/// With [`OnError::Continue`], rejected window operations are logged and
/// counted instead of aborting the run.
pub fn execute(desk: &mut Desktop, lines: &[Line], on_error: OnError) -> Result<Report, ScriptError> {
    let mut report = Report::default();
    for line in lines {
        match line.apply(desk) {
            Ok(()) => report.applied += 1,
            Err(err) if on_error == OnError::Continue => {
                tracing::warn!(line = line.number, error = %err, "command rejected");
                report.rejected += 1;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(report)
}
