/// Movement rules: validate and apply a single player step.
///
/// ## Move Truth Table
///
/// Conditions are checked top to bottom; the first match decides.
/// ┌────────────────────────────┬─────────────────────┐
/// │ Condition                   │ Outcome             │
/// ├────────────────────────────┼─────────────────────┤
/// │ target outside [0, dim)     │ Blocked             │
/// │ target is Pillar or Monster │ Blocked             │
/// │ target is Open              │ Moved               │
/// │ target is Treasure          │ CollectedTreasure   │
/// │ target is Amulet            │ FoundAmulet         │
/// │ target is Door              │ PassedDoor          │
/// │ target is Exit, treasure>0  │ Escaped             │
/// │ target is Exit, treasure=0  │ Blocked             │
/// └────────────────────────────┴─────────────────────┘
///
/// Every non-Blocked outcome performs the same grid update: the player's
/// old cell becomes Open, the target cell becomes Player, and the player
/// record moves — all before returning, so the caller never sees a
/// half-applied step.

use super::entity::Player;
use super::grid::Grid;
use super::tile::Tile;

/// What a single step did. Closed set; callers match exhaustively.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Blocked,
    Moved,
    CollectedTreasure,
    FoundAmulet,
    PassedDoor,
    Escaped,
}

/// Apply one step toward (next_row, next_col).
///
/// Coordinates are signed so a step off the top or left edge arrives here
/// as -1 and is refused by the bounds check rather than wrapping.
pub fn apply_move(grid: &mut Grid, player: &mut Player, next_row: i64, next_col: i64) -> MoveOutcome {
    if !grid.in_bounds(next_row, next_col) {
        return MoveOutcome::Blocked;
    }
    let (nr, nc) = (next_row as usize, next_col as usize);

    let outcome = match grid.tile_at(nr, nc) {
        Tile::Pillar | Tile::Monster => return MoveOutcome::Blocked,
        Tile::Open => MoveOutcome::Moved,
        Tile::Treasure => MoveOutcome::CollectedTreasure,
        Tile::Amulet => MoveOutcome::FoundAmulet,
        Tile::Door => MoveOutcome::PassedDoor,
        Tile::Exit => {
            if player.treasure == 0 {
                return MoveOutcome::Blocked;
            }
            MoveOutcome::Escaped
        }
        // Stepping onto the player's own marker can only mean a zero
        // delta; treat it as a refused move.
        Tile::Player => return MoveOutcome::Blocked,
    };

    if outcome == MoveOutcome::CollectedTreasure {
        player.treasure += 1;
    }

    grid.set_tile(player.row, player.col, Tile::Open);
    player.row = nr;
    player.col = nc;
    grid.set_tile(nr, nc, Tile::Player);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a grid from a string diagram (level legend + 'o'),
    /// returning the player positioned on the 'o' cell.
    fn world_from(rows: &[&str]) -> (Grid, Player) {
        let mut g = Grid::new(rows.len(), rows[0].len());
        let mut player = Player::new(0, 0);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let tile = if ch == 'o' {
                    player = Player::new(r, c);
                    Tile::Player
                } else {
                    Tile::from_token(ch).expect("bad diagram char")
                };
                g.set_tile(r, c, tile);
            }
        }
        (g, player)
    }

    fn step(g: &mut Grid, p: &mut Player, dr: i64, dc: i64) -> MoveOutcome {
        apply_move(g, p, p.row as i64 + dr, p.col as i64 + dc)
    }

    #[test]
    fn open_step_moves_both_cells() {
        let (mut g, mut p) = world_from(&[
            "o-",
            "--",
        ]);
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::Moved);
        assert_eq!((p.row, p.col), (0, 1));
        assert_eq!(g.tile_at(0, 0), Tile::Open);
        assert_eq!(g.tile_at(0, 1), Tile::Player);
        assert_eq!(g.player_cells(), 1);
    }

    #[test]
    fn edge_step_blocked_without_mutation() {
        let (mut g, mut p) = world_from(&[
            "o-",
            "--",
        ]);
        assert_eq!(step(&mut g, &mut p, -1, 0), MoveOutcome::Blocked);
        assert_eq!(step(&mut g, &mut p, 0, -1), MoveOutcome::Blocked);
        assert_eq!((p.row, p.col), (0, 0));
        assert_eq!(g.tile_at(0, 0), Tile::Player);
    }

    #[test]
    fn index_equal_to_dimension_is_out_of_bounds() {
        // 2x2 grid: row/col 2 is refused, not treated as a border cell
        let (mut g, mut p) = world_from(&[
            "--",
            "-o",
        ]);
        assert_eq!(step(&mut g, &mut p, 1, 0), MoveOutcome::Blocked);
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::Blocked);
    }

    #[test]
    fn pillar_and_monster_block() {
        let (mut g, mut p) = world_from(&[
            "+oM",
        ]);
        assert_eq!(step(&mut g, &mut p, 0, -1), MoveOutcome::Blocked);
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::Blocked);
        assert_eq!((p.row, p.col), (0, 1));
    }

    #[test]
    fn treasure_increments_and_clears_cell() {
        let (mut g, mut p) = world_from(&[
            "o$",
        ]);
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::CollectedTreasure);
        assert_eq!(p.treasure, 1);
        assert_eq!(g.tile_at(0, 0), Tile::Open);
        assert_eq!(g.tile_at(0, 1), Tile::Player);
    }

    #[test]
    fn amulet_moves_without_other_state_change() {
        let (mut g, mut p) = world_from(&[
            "o@",
        ]);
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::FoundAmulet);
        assert_eq!(p.treasure, 0);
        assert_eq!((p.row, p.col), (0, 1));
    }

    #[test]
    fn door_is_passable() {
        let (mut g, mut p) = world_from(&[
            "o?",
        ]);
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::PassedDoor);
        assert_eq!((p.row, p.col), (0, 1));
    }

    #[test]
    fn exit_gated_on_treasure() {
        let (mut g, mut p) = world_from(&[
            "o$!",
        ]);
        // Empty-handed: the exit refuses
        assert_eq!(apply_move(&mut g, &mut p, 0, 2), MoveOutcome::Blocked);
        assert_eq!((p.row, p.col), (0, 0));
        // Grab the treasure, then the exit opens
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::CollectedTreasure);
        assert_eq!(step(&mut g, &mut p, 0, 1), MoveOutcome::Escaped);
        assert_eq!((p.row, p.col), (0, 2));
        assert_eq!(g.tile_at(0, 2), Tile::Player);
    }
}
