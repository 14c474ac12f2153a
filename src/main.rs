/// Entry point and turn loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use config::GameConfig;
use sim::event::TurnEvent;
use sim::level;
use sim::step;
use sim::world::{Phase, WorldState};
use ui::input::{self, Command};
use ui::renderer::Renderer;

fn main() -> ExitCode {
    let config = GameConfig::load();

    let (grid, player) = match load_session_level(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("delver: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut world = WorldState::new(grid, player, config.rules);

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return ExitCode::FAILURE;
    }

    let result = turn_loop(&mut world, &mut renderer);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }
    if let Err(e) = result {
        eprintln!("Game error: {e}");
        return ExitCode::FAILURE;
    }

    println!();
    match world.phase {
        Phase::Escaped => println!("Escaped with {} treasure in {} turns.", world.player.treasure, world.turns),
        Phase::Captured => println!("Caught after {} turns.", world.turns),
        Phase::Playing => println!("Left the dungeon mid-delve."),
    }
    ExitCode::SUCCESS
}

/// Level source priority: CLI argument, then the configured path,
/// then the built-in level.
fn load_session_level(config: &GameConfig) -> Result<(domain::grid::Grid, domain::entity::Player), level::LoadError> {
    if let Some(arg) = std::env::args().nth(1) {
        return level::load_file(&PathBuf::from(arg));
    }
    if config.level_path.is_file() {
        return level::load_file(&config.level_path);
    }
    level::load_str(level::embedded_level())
}

fn turn_loop(world: &mut WorldState, renderer: &mut Renderer) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        renderer.render(world)?;

        if world.phase != Phase::Playing {
            input::wait_any_key()?;
            return Ok(());
        }

        let events = match input::read_command()? {
            Command::Quit => return Ok(()),
            Command::Noop => {
                world.set_message("w/a/s/d to move");
                continue;
            }
            Command::Grow => step::grow_now(world),
            Command::Move(dir) => step::take_turn(world, dir),
        };

        world.message.clear();
        for event in &events {
            world.set_message(describe(event));
        }
    }
}

fn describe(event: &TurnEvent) -> &'static str {
    match event {
        TurnEvent::Blocked => "Blocked.",
        TurnEvent::TreasureCollected { .. } => "Treasure!",
        TurnEvent::AmuletFound => "You found the amulet.",
        TurnEvent::DoorPassed => "You slip through the door.",
        TurnEvent::Escaped => "",
        TurnEvent::Captured => "",
        TurnEvent::GridGrown { .. } => "The dungeon grows around you...",
    }
}
