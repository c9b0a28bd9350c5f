//! Binary entry point.
//!
//! Parses the command line, loads and validates the configuration, builds
//! the world and schedule and runs the fixed-tick loop. With `--ticks N`
//! the game runs headless (no terminal UI) for N ticks, which is what the
//! integration smoke runs use.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use bevy_ecs::world::Mut;
use clap::Parser;
use crossterm::{cursor, execute, terminal};
use log::info;

use birdy::game::{build_schedule, build_world};
use birdy::resources::gameconfig::GameConfig;
use birdy::resources::input::InputState;
use birdy::resources::worldsignals::WorldSignals;
use birdy::resources::worldtime::WorldTime;
use birdy::systems::input::{poll_terminal, QUIT_FLAG};
use birdy::systems::render::{draw_frame, PixelBuf};

#[derive(Parser, Debug)]
#[command(name = "birdy", about = "A state-machine driven terminal bird game")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run headless for this many ticks, then exit
    #[arg(long)]
    ticks: Option<u64>,
}

/// Restores the terminal on drop, also when the loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("birdy: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut cfg = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if cfg.config_path.exists() {
        cfg.load_from_file()?;
    } else if cli.config.is_some() {
        return Err(format!("config file {:?} not found", cfg.config_path));
    }
    cfg.validate()?;

    let tick = Duration::from_secs_f32(1.0 / cfg.tick_rate as f32);
    let mut world = build_world(cfg.clone(), cli.seed);
    let mut schedule = build_schedule();

    if let Some(ticks) = cli.ticks {
        for _ in 0..ticks {
            schedule.run(&mut world);
        }
        let time = world.resource::<WorldTime>();
        info!(
            "Headless run finished: {} ticks, {:.2}s simulated",
            time.frame_count, time.elapsed
        );
        return Ok(());
    }

    let _terminal = TerminalGuard::enter().map_err(|e| e.to_string())?;
    let mut buf = PixelBuf::for_world(&cfg);
    let mut stdout = io::stdout();

    loop {
        let frame_start = Instant::now();

        world
            .resource_scope(|world, mut input: Mut<InputState>| {
                let mut signals = world.resource_mut::<WorldSignals>();
                poll_terminal(&mut input, &mut signals)
            })
            .map_err(|e| e.to_string())?;
        if world.resource::<WorldSignals>().has_flag(QUIT_FLAG) {
            break;
        }

        schedule.run(&mut world);
        draw_frame(&mut world, &mut buf, &mut stdout).map_err(|e| e.to_string())?;

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            std::thread::sleep(tick - elapsed);
        }
    }

    info!("Goodbye");
    Ok(())
}
