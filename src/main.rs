use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use desk_wm::config::{ConfigError, DesktopConfig};
use desk_wm::constants::{DEFAULT_DESKTOP_HEIGHT, DEFAULT_DESKTOP_WIDTH, MENU_BAR_HEIGHT};
use desk_wm::desktop::Desktop;
use desk_wm::launcher;
use desk_wm::script::{self, OnError};
use desk_wm::tracing_sub;

#[derive(Parser, Debug)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replay a window command script against a simulated desktop and print the result"
)]
struct Cli {
    /// Script to run. Reads stdin when omitted or `-`.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    #[arg(long, value_name = "PX", default_value_t = DEFAULT_DESKTOP_WIDTH)]
    width: i32,

    #[arg(long, value_name = "PX", default_value_t = DEFAULT_DESKTOP_HEIGHT)]
    height: i32,

    #[arg(long = "menu-bar-height", value_name = "PX", default_value_t = MENU_BAR_HEIGHT)]
    menu_bar_height: i32,

    /// Start from the stock Finder/Terminal/TextEdit/Calculator/Notes session.
    #[arg(long = "default-session")]
    default_session: bool,

    /// Log rejected commands and keep going instead of stopping.
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl TryFrom<&Cli> for DesktopConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        DesktopConfig::new(cli.width, cli.height, cli.menu_bar_height)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = DesktopConfig::try_from(cli)?;
    let mut desk = Desktop::new(config);
    if cli.default_session {
        launcher::default_session(desk.windows_mut());
    }

    let source = script::read_source(cli.script.as_deref())?;
    let lines = script::parse(&source)?;
    let on_error = if cli.keep_going {
        OnError::Continue
    } else {
        OnError::Stop
    };
    let report = script::execute(&mut desk, &lines, on_error)?;
    tracing::info!(
        applied = report.applied,
        rejected = report.rejected,
        "script finished"
    );

    let mut out = io::stdout().lock();
    for view in desk.windows().render_plan() {
        writeln!(out, "{view}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_sub::init_default(tracing_sub::level_for_verbosity(cli.verbose));
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("desk-wm: {err}");
            ExitCode::FAILURE
        }
    }
}
