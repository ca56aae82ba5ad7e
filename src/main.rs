//! Rumble Arena - headless demo runner
//!
//! Spawns AI-controlled actors in the stock arena and runs the match for a
//! fixed number of frames, printing a status line at regular intervals.
//! Useful for watching the planner make decisions without a renderer.

use std::path::PathBuf;

use clap::Parser;

use rumble_arena::actions::{loader, MovementCatalog};
use rumble_arena::ai::{AiController, Planner, PlannerBudget};
use rumble_arena::arena::{GameState, Level};
use rumble_arena::core::config::ArenaConfig;
use rumble_arena::core::error::{ArenaError, Result};

/// Frames per simulated second in the live loop
const FRAME_RATE: f32 = 60.0;

#[derive(Parser, Debug)]
#[command(name = "rumble-arena", about = "Headless AI match runner")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Planner lookahead depth
    #[arg(long, default_value_t = 1)]
    depth: u32,

    /// AI skill level (1 = blunt, 5 = sharp)
    #[arg(long, default_value_t = 3)]
    skill: usize,

    /// Number of AI actors
    #[arg(long, default_value_t = 2)]
    actors: usize,

    /// Seed for the replan jitter RNG
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Optional sequences resource overriding the built-in catalog
    #[arg(long)]
    sequences: Option<PathBuf>,

    /// Dump the final match state as JSON to stdout
    #[arg(long)]
    dump_state: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rumble_arena=info")),
        )
        .init();

    let args = Args::parse();

    let cfg = ArenaConfig::default();
    cfg.validate().map_err(ArenaError::InvalidConfig)?;

    let catalog = match &args.sequences {
        Some(path) => loader::load_from_file(path)?,
        None => MovementCatalog::default_catalog(),
    };
    let planner = Planner::new(&cfg, &catalog);

    let mut state = GameState::new(Level::default_arena());
    for i in 0..args.actors.max(2) {
        state.spawn_actor(format!("bot-{i}"));
    }
    let actor_count = state.actors.len();

    let mut controller =
        AiController::with_seed(PlannerBudget::new(args.depth, args.skill), args.seed);

    tracing::info!(
        actors = actor_count,
        frames = args.frames,
        depth = args.depth,
        skill = args.skill,
        "match starting"
    );

    let dt = 1.0 / FRAME_RATE;
    for frame in 0..args.frames {
        for actor in 0..actor_count {
            if state.actors[actor].alive() {
                controller.update(&planner, &mut state, actor);
            }
        }
        state.update(&cfg, dt);

        if frame % (FRAME_RATE as u32) == 0 {
            print_status(&state);
        }

        if state.survivors() <= 1 {
            break;
        }
    }

    match state
        .actors
        .iter()
        .find(|a| a.alive() && state.survivors() == 1)
    {
        Some(winner) => println!("winner: {} after {:.1}s", winner.name, state.clock),
        None => println!("time up after {:.1}s", state.clock),
    }

    if args.dump_state {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    Ok(())
}

fn print_status(state: &GameState) {
    let line: Vec<String> = state
        .actors
        .iter()
        .map(|a| {
            format!(
                "{}[{} lives, {:.0}% @ ({:.0},{:.0})]",
                a.name, a.lives, a.percents, a.position.x, a.position.y
            )
        })
        .collect();
    println!("t={:6.2}s  {}", state.clock, line.join("  "));
}
