/// Monster pursuit — straight-line sight along the four cardinal rays.
///
/// Each turn, every ray out of the player's cell is scanned cell by cell,
/// always in the order up, down, right, left. A Pillar ends a ray (no
/// sight beyond it). The first Monster on a ray steps one cell toward the
/// player and ends that ray — one monster, one step, per ray per call.
/// The player's own cell is skipped outright: while playing it holds the
/// Player marker, and after a capture earlier in the same call it holds
/// the capturing Monster, which must not be bounced back off the cell.
///
/// All four rays run even after a capture, so the grid state after a call
/// is the same whichever ray captured; the return value only says whether
/// any monster landed on the player this call.

use super::entity::Player;
use super::grid::Grid;
use super::tile::Tile;

/// Advance monsters with line of sight one step toward the player.
/// Returns true if a monster reached the player's cell.
pub fn advance_monsters(grid: &mut Grid, player: &Player) -> bool {
    let (prow, pcol) = (player.row, player.col);
    let mut captured = false;

    // Up: scan from the player's row toward row 0
    for r in (0..=prow).rev() {
        // The player's own cell never blocks or matches; after a capture
        // this call it holds a Monster, which must stay put.
        if r == prow {
            continue;
        }
        match grid.tile_at(r, pcol) {
            t if t.blocks_sight() => break,
            Tile::Monster => {
                grid.set_tile(r, pcol, Tile::Open);
                grid.set_tile(r + 1, pcol, Tile::Monster);
                if r + 1 == prow {
                    captured = true;
                }
                break;
            }
            _ => {}
        }
    }

    // Down: scan from the player's row toward the last row
    for r in prow..grid.rows() {
        if r == prow {
            continue;
        }
        match grid.tile_at(r, pcol) {
            t if t.blocks_sight() => break,
            Tile::Monster => {
                grid.set_tile(r, pcol, Tile::Open);
                grid.set_tile(r - 1, pcol, Tile::Monster);
                if r - 1 == prow {
                    captured = true;
                }
                break;
            }
            _ => {}
        }
    }

    // Right: scan from the player's column toward the last column
    for c in pcol..grid.cols() {
        if c == pcol {
            continue;
        }
        match grid.tile_at(prow, c) {
            t if t.blocks_sight() => break,
            Tile::Monster => {
                grid.set_tile(prow, c, Tile::Open);
                grid.set_tile(prow, c - 1, Tile::Monster);
                if c - 1 == pcol {
                    captured = true;
                }
                break;
            }
            _ => {}
        }
    }

    // Left: scan from the player's column toward column 0
    for c in (0..=pcol).rev() {
        if c == pcol {
            continue;
        }
        match grid.tile_at(prow, c) {
            t if t.blocks_sight() => break,
            Tile::Monster => {
                grid.set_tile(prow, c, Tile::Open);
                grid.set_tile(prow, c + 1, Tile::Monster);
                if c + 1 == pcol {
                    captured = true;
                }
                break;
            }
            _ => {}
        }
    }

    captured
}
