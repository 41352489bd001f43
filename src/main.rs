//! Headless demo binary pacing the simulation at a fixed tick rate.
//!
//! Input and rendering collaborators are stubbed: a fixed directional intent
//! stands in for the keyboard, and the draw list is left for inspection by
//! whatever embeds the app.
use std::path::PathBuf;
use std::time::Duration;

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::prelude::*;
use clap::{Parser, ValueEnum};
use paddock::{init_logging, DirectionIntent, HerdingPlugin, SimConfig};

/// A realtime herding simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a JSON simulation config; defaults to the built-in scenario
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks instead of running until interrupted
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Fixed directional intent fed to the herder every tick
    #[arg(long, value_enum, default_value_t = Drive::Right)]
    drive: Drive,
}

/// Command line spelling of [`DirectionIntent`].
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Drive {
    /// No movement; the herder idles in place.
    Hold,
    /// Step up the screen each tick.
    Up,
    /// Step down the screen each tick.
    Down,
    /// Step screen-left each tick.
    Left,
    /// Step screen-right each tick.
    Right,
}

impl From<Drive> for DirectionIntent {
    fn from(drive: Drive) -> Self {
        match drive {
            Drive::Hold => Self::None,
            Drive::Up => Self::Up,
            Drive::Down => Self::Down,
            Drive::Left => Self::Left,
            Drive::Right => Self::Right,
        }
    }
}

/// Remaining ticks for a bounded demo run.
#[derive(Resource)]
struct TickBudget(u64);

/// Requests a clean exit once the budget runs out.
///
/// The exit is honoured after the running tick completes, so no behaviour
/// system is interrupted mid-update.
fn tick_budget_system(mut budget: ResMut<TickBudget>, mut exit: MessageWriter<AppExit>) {
    budget.0 = budget.0.saturating_sub(1);
    if budget.0 == 0 {
        exit.write(AppExit::Success);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let period = Duration::from_secs_f64(1.0 / f64::from(config.ticks_per_second));

    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(period)))
        .add_plugins(HerdingPlugin::new(config)?)
        .insert_resource(DirectionIntent::from(args.drive));

    if let Some(limit) = args.ticks {
        app.insert_resource(TickBudget(limit));
        app.add_systems(Update, tick_budget_system);
    }

    app.run();
    Ok(())
}
