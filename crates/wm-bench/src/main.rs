use std::process::ExitCode;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use desk_wm::config::DesktopConfig;
use desk_wm::desktop::Desktop;
use desk_wm::drivers::ReplayDriver;
use desk_wm::drivers::pointer::PointerEvent;
use desk_wm::launcher::AppKind;
use desk_wm::layout::floating::{TrafficLight, traffic_light_rect};
use desk_wm::tracing_sub;
use desk_wm::window::Bounds;

#[derive(Parser, Debug)]
#[command(
    name = "wm-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Gesture-heavy benchmark for the window manager core"
)]
struct BenchCli {
    /// Windows open on the desktop while gestures run.
    #[arg(short = 'w', long = "windows", value_name = "COUNT", default_value_t = 12)]
    windows: usize,

    /// Pointer gestures to replay.
    #[arg(short = 'g', long = "gestures", value_name = "COUNT", default_value_t = 20_000)]
    gestures: usize,

    /// Pointer moves per gesture between press and release.
    #[arg(short = 's', long = "steps", value_name = "COUNT", default_value_t = 16)]
    steps: usize,

    /// Seed for the gesture generator. Defaults to the clock.
    #[arg(long = "seed")]
    seed: Option<u64>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct BenchConfig {
    windows: usize,
    gestures: usize,
    steps: usize,
    seed: u64,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=256).contains(&cli.windows) {
            return Err("windows must be between 1 and 256".to_string());
        }
        if !(1..=10_000_000).contains(&cli.gestures) {
            return Err("gestures must be between 1 and 10000000".to_string());
        }
        if !(1..=1_000).contains(&cli.steps) {
            return Err("steps must be between 1 and 1000".to_string());
        }
        Ok(Self {
            windows: cli.windows,
            gestures: cli.gestures,
            steps: cli.steps,
            seed: cli.seed.unwrap_or_else(clock_seed),
        })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
        ^ 0xA5A5_A5A5_1234_5678
}

fn main() -> ExitCode {
    let args = BenchCli::parse();
    tracing_sub::init_default(tracing_sub::level_for_verbosity(args.verbose));
    let config = match BenchConfig::try_from(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("wm-bench: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    ExitCode::SUCCESS
}

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let mut desk = Desktop::new(DesktopConfig::default());
    let mut rng = Lcg::new(config.seed);
    let area = desk.windows().area();
    for i in 0..config.windows {
        let app = AppKind::ALL[i % AppKind::ALL.len()];
        let bounds = app.default_bounds();
        let offset = (i as i32 % 16) * 24;
        desk.windows_mut()
            .open(format!("{app} {i}"), bounds.translated(offset, offset));
    }

    let mut stats = BenchStats::new();
    for round in 0..config.gestures {
        let driver = plan_gesture(&desk, &mut rng, area, config.steps);
        let events = driver.len() as u64;
        let started = Instant::now();
        let handled = desk.run(driver) as u64;
        stats.record_gesture(events, handled, started.elapsed());
        if round % 1_000 == 0 {
            tracing::debug!(round, windows = desk.windows().len(), "bench progress");
        }
    }
    stats.mark_completed();
    stats
}

/// Build one press-move-release sequence aimed at a random visible window.
fn plan_gesture(desk: &Desktop, rng: &mut Lcg, area: Bounds, steps: usize) -> ReplayDriver {
    let visible: Vec<Bounds> = desk
        .windows()
        .windows()
        .into_iter()
        .filter(|w| !w.is_minimized())
        .map(|w| w.bounds())
        .collect();
    let mut driver = ReplayDriver::new();
    let Some(&bounds) = visible.get(rng.below(visible.len().max(1))) else {
        return driver;
    };

    let (x, y) = match rng.below(8) {
        0 => {
            let light = traffic_light_rect(bounds, TrafficLight::Maximize);
            driver.push(PointerEvent::down(light.x + 2, light.y + 2));
            driver.push(PointerEvent::up(light.x + 2, light.y + 2));
            return driver;
        }
        1 | 2 => (bounds.right() - 2, bounds.bottom() - 2),
        3 => (bounds.x + 2, bounds.y + bounds.height / 2),
        4 => (bounds.x + bounds.width / 2, bounds.y + bounds.height / 2),
        _ => (bounds.x + bounds.width / 2, bounds.y + 14),
    };

    driver.push(PointerEvent::down(x, y));
    let (mut px, mut py) = (x, y);
    for _ in 0..steps {
        px = (px + rng.between(-40, 40)).clamp(area.x, area.right() - 1);
        py = (py + rng.between(-40, 40)).clamp(area.y, area.bottom() - 1);
        driver.push(PointerEvent::moved(px, py));
    }
    driver.push(PointerEvent::up(px, py));
    driver
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.next() as usize % n
    }

    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        lo + self.below((hi - lo + 1) as usize) as i32
    }
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    gesture_count: u64,
    event_count: u64,
    handled_count: u64,
    total_dispatch_time: Duration,
    slowest_gesture: Duration,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            gesture_count: 0,
            event_count: 0,
            handled_count: 0,
            total_dispatch_time: Duration::ZERO,
            slowest_gesture: Duration::ZERO,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn record_gesture(&mut self, events: u64, handled: u64, dispatch: Duration) {
        self.gesture_count = self.gesture_count.saturating_add(1);
        self.event_count = self.event_count.saturating_add(events);
        self.handled_count = self.handled_count.saturating_add(handled);
        self.total_dispatch_time += dispatch;
        if dispatch > self.slowest_gesture {
            self.slowest_gesture = dispatch;
        }
    }

    fn average_gesture_us(&self) -> f64 {
        if self.gesture_count == 0 {
            return 0.0;
        }
        (self.total_dispatch_time.as_secs_f64() / self.gesture_count as f64) * 1_000_000.0
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let dispatch = self.total_dispatch_time.as_secs_f64();
        let events_per_second = if dispatch > 0.0 {
            self.event_count as f64 / dispatch
        } else {
            0.0
        };

        indoc::formatdoc!(
            r#"
            Gesture bench completed (seed {seed:#x}).
            Wall time: {elapsed:.2}s | Dispatch time: {dispatch:.3}s
            Windows: {windows} | Gestures: {gestures} x {steps} moves
            Events: {events} total, {handled} handled (~{eps:.0}/s)
            Avg gesture: {avg:.2} us | Worst: {worst:.2} us
            "#,
            seed = config.seed,
            elapsed = self.elapsed().as_secs_f64(),
            dispatch = dispatch,
            windows = config.windows,
            gestures = self.gesture_count,
            steps = config.steps,
            events = self.event_count,
            handled = self.handled_count,
            eps = events_per_second,
            avg = self.average_gesture_us(),
            worst = self.slowest_gesture.as_secs_f64() * 1_000_000.0,
        )
    }
}
