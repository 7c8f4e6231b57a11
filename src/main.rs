mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use rand::rngs::StdRng;
use rand::SeedableRng;

use asteroid_shooter::compute::{init_state, tick};
use asteroid_shooter::config::SimConfig;
use asteroid_shooter::entities::GameState;
use asteroid_shooter::input::{Clock, SystemClock, TickInput};
use asteroid_shooter::keyboard::{is_quit, KeyTracker};
use asteroid_shooter::terminal::TerminalGuard;

/// How long a key stays "held" after its last press/repeat event.
const HOLD_WINDOW: Duration = Duration::from_millis(133);

#[derive(Debug, Parser)]
#[command(name = "asteroid_shooter", about = "Shoot the falling asteroids before they pass you")]
struct Cli {
    /// JSON file overriding the simulation constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for obstacle spawning (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Write log records here.  The terminal is in raw mode while playing, so
    /// logging is disabled unless a file is given.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("failed to initialise logger")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed loading config {}", path.display())),
        None => Ok(SimConfig::default()),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame drains every pending terminal event into the key tracker,
/// samples the held controls once, reads the clock once, advances the
/// simulation by one tick and redraws.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    fps: u32,
) -> std::io::Result<()> {
    let frame = Duration::from_secs_f64(1.0 / fps as f64);
    let hold_frames = (HOLD_WINDOW.as_secs_f64() * fps as f64).ceil() as u64;
    let mut keys = KeyTracker::new(hold_frames.max(1));
    let clock = SystemClock::new();

    loop {
        let frame_start = Instant::now();
        keys.advance();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                if is_quit(&key) {
                    log::info!("quit at frame {} with score {}", state.frame, state.score);
                    return Ok(());
                }
                keys.record(&key);
            }
        }

        let input = TickInput::sample(&keys);
        *state = tick(state, &input, clock.now(), rng);

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = load_config(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {seed} at {} fps", cli.fps);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = init_state(config);

    // Restores whatever was set up when it goes out of scope, including on
    // an early return from the setup below.
    let mut term = TerminalGuard::new(BufWriter::new(stdout()));
    term.enter().context("failed to set up the terminal")?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::warn!("terminal event read failed: {err}");
                break;
            }
        }
    });

    let result = game_loop(term.out(), &mut state, &rx, &mut rng, cli.fps);
    drop(term);

    result.context("game loop failed")?;
    println!("Final score: {}", state.score);
    Ok(())
}
