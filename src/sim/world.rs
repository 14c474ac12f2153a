/// WorldState: the complete snapshot of a running session.
///
/// The grid has exactly one owner — this state. The loader hands it over
/// on session start and `grow()` replaces it wholesale; the old storage
/// is released by the assignment.

use crate::config::RulesConfig;
use crate::domain::entity::Player;
use crate::domain::grid::{Grid, ResizeError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    /// Player reached the exit carrying treasure.
    Escaped,
    /// A monster reached the player.
    Captured,
}

pub struct WorldState {
    pub grid: Grid,
    pub player: Player,
    pub phase: Phase,
    pub turns: u64,
    pub rules: RulesConfig,

    // ── UI ──
    pub message: String,
}

impl WorldState {
    pub fn new(grid: Grid, player: Player, rules: RulesConfig) -> Self {
        WorldState {
            grid,
            player,
            phase: Phase::Playing,
            turns: 0,
            rules,
            message: String::new(),
        }
    }

    /// Replace the grid with its doubled form. Player coordinates are
    /// unchanged: the original quadrant keeps its layout.
    pub fn grow(&mut self) -> Result<(), ResizeError> {
        self.grid = self.grid.doubled()?;
        Ok(())
    }

    /// Is the player within `margin` cells of any grid edge?
    pub fn player_near_edge(&self, margin: usize) -> bool {
        let (r, c) = (self.player.row, self.player.col);
        r < margin
            || c < margin
            || r + margin + 1 > self.grid.rows()
            || c + margin + 1 > self.grid.cols()
    }

    pub fn set_message(&mut self, msg: &str) {
        self.message = msg.to_string();
    }
}
