/// The turn function: advances the session by one player turn.
///
/// Processing order:
///   1. Player move resolution (rules::apply_move)
///   2. Monster pursuit — skipped when the move escaped the dungeon
///   3. Auto-grow when the player ends the turn near an edge
///
/// The caller sequences turns strictly; nothing here overlaps.

use crate::domain::entity::Direction;
use crate::domain::pursuit;
use crate::domain::rules::{self, MoveOutcome};

use super::event::TurnEvent;
use super::world::{Phase, WorldState};

pub fn take_turn(world: &mut WorldState, dir: Direction) -> Vec<TurnEvent> {
    if world.phase != Phase::Playing {
        return vec![];
    }

    let mut events: Vec<TurnEvent> = Vec::new();
    world.turns += 1;

    let (dr, dc) = dir.delta();
    let next_row = world.player.row as i64 + dr;
    let next_col = world.player.col as i64 + dc;

    match rules::apply_move(&mut world.grid, &mut world.player, next_row, next_col) {
        MoveOutcome::Blocked => events.push(TurnEvent::Blocked),
        MoveOutcome::Moved => {}
        MoveOutcome::CollectedTreasure => {
            events.push(TurnEvent::TreasureCollected { total: world.player.treasure });
        }
        MoveOutcome::FoundAmulet => events.push(TurnEvent::AmuletFound),
        MoveOutcome::PassedDoor => events.push(TurnEvent::DoorPassed),
        MoveOutcome::Escaped => {
            world.phase = Phase::Escaped;
            events.push(TurnEvent::Escaped);
            return events;
        }
    }

    if pursuit::advance_monsters(&mut world.grid, &world.player) {
        world.phase = Phase::Captured;
        events.push(TurnEvent::Captured);
        return events;
    }

    if world.rules.auto_grow && world.player_near_edge(world.rules.grow_margin) {
        // Doubling an in-play grid cannot fail: dimensions are nonzero
        if world.grow().is_ok() {
            events.push(TurnEvent::GridGrown {
                rows: world.grid.rows(),
                cols: world.grid.cols(),
            });
        }
    }

    events
}

/// Force a grid doubling outside the move/pursuit cycle (the `g` key).
pub fn grow_now(world: &mut WorldState) -> Vec<TurnEvent> {
    if world.phase != Phase::Playing {
        return vec![];
    }
    match world.grow() {
        Ok(()) => vec![TurnEvent::GridGrown {
            rows: world.grid.rows(),
            cols: world.grid.cols(),
        }],
        Err(_) => vec![],
    }
}
