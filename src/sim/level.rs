/// Level loader.
///
/// ## Level format (`.txt`):
///   Line 1: `rows cols`           (grid dimensions, both > 0)
///   Line 2: `startRow startCol`   (player start, inside the grid)
///   Then:   rows*cols whitespace-separated single-character tile tokens
///           in row-major order, from the legend in `domain/tile.rs`.
///
/// An `o` token in the body is remapped to Open — the player marker is
/// stamped from the start position, never taken from the data. A level
/// must contain a door or an exit, exactly one of the two kinds.
///
/// The source is scanned twice: a counting pre-pass that checks the body
/// token count against rows*cols, then the authoritative parse. No grid
/// escapes a failed load.

use std::path::Path;

use thiserror::Error;

use crate::domain::entity::Player;
use crate::domain::grid::Grid;
use crate::domain::tile::Tile;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed level header (dimensions or start position)")]
    MalformedHeader,
    #[error("level body has {found} tiles, expected {expected}")]
    TileCountMismatch { expected: usize, found: usize },
    #[error("invalid tile token '{token}' at row {row}, col {col}")]
    InvalidTile { token: String, row: usize, col: usize },
    #[error("level needs exactly one door or one exit, not both or neither")]
    DoorExitInvariantViolated,
}

/// Load a level from a file on disk.
pub fn load_file(path: &Path) -> Result<(Grid, Player), LoadError> {
    let source = std::fs::read_to_string(path)?;
    load_str(&source)
}

/// Load a level from its text source.
pub fn load_str(source: &str) -> Result<(Grid, Player), LoadError> {
    let (rows, cols, start_row, start_col) = parse_header(source)?;

    // Pre-pass: body token count must match the declared dimensions
    let expected = rows * cols;
    let found = source.split_whitespace().skip(4).count();
    if found != expected {
        return Err(LoadError::TileCountMismatch { expected, found });
    }

    // Authoritative pass: parse tokens row-major
    let mut grid = Grid::new(rows, cols);
    let mut saw_door = false;
    let mut saw_exit = false;

    let mut body = source.split_whitespace().skip(4);
    for r in 0..rows {
        for c in 0..cols {
            // Count was verified above, so the iterator cannot run dry
            let token = body.next().unwrap_or("");
            let tile = parse_token(token).ok_or_else(|| LoadError::InvalidTile {
                token: token.to_string(),
                row: r,
                col: c,
            })?;
            match tile {
                Tile::Door => saw_door = true,
                Tile::Exit => saw_exit = true,
                _ => {}
            }
            grid.set_tile(r, c, tile);
        }
    }

    if saw_door == saw_exit {
        return Err(LoadError::DoorExitInvariantViolated);
    }

    grid.set_tile(start_row, start_col, Tile::Player);
    Ok((grid, Player::new(start_row, start_col)))
}

/// Parse the four header integers and validate them.
/// Start position is checked against the exclusive bound `[0, dim)`.
fn parse_header(source: &str) -> Result<(usize, usize, usize, usize), LoadError> {
    let mut it = source.split_whitespace();
    let mut next_int = || -> Result<i64, LoadError> {
        it.next()
            .and_then(|t| t.parse::<i64>().ok())
            .ok_or(LoadError::MalformedHeader)
    };

    let rows = next_int()?;
    let cols = next_int()?;
    let start_row = next_int()?;
    let start_col = next_int()?;

    if rows <= 0 || cols <= 0 {
        return Err(LoadError::MalformedHeader);
    }
    if start_row < 0 || start_row >= rows || start_col < 0 || start_col >= cols {
        return Err(LoadError::MalformedHeader);
    }

    Ok((rows as usize, cols as usize, start_row as usize, start_col as usize))
}

/// A body token: one character from the tile alphabet, with the player
/// marker `o` read as Open floor.
fn parse_token(token: &str) -> Option<Tile> {
    let mut chars = token.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c == 'o' {
        return Some(Tile::Open);
    }
    Tile::from_token(c)
}

/// Built-in fallback level, used when no level file is available.
pub fn embedded_level() -> &'static str {
    "\
8 12
6 1
+ + + + + + + + + + + +
+ - - - $ - - M - - ? +
+ - + + - + + - + + - +
+ - + @ - - M - - + - +
+ - + - + + + + - + - +
+ - - - $ - - - - - - +
+ o + - + + M + - $ - +
+ + + + + + + + + + + +
"
}
