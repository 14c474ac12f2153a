/// The dungeon grid: an owned rows × cols array of tiles.
///
/// The grid has a single owner at any time (loader → session → resize),
/// so mutation never needs coordination. `doubled()` produces a
/// replacement grid; assigning it over the old one releases the old
/// storage — there is no manual deallocation path.

use thiserror::Error;

use super::tile::Tile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResizeError {
    #[error("cannot resize an empty grid")]
    EmptyGrid,
}

#[derive(Clone, Debug)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// A rows × cols grid of Open tiles.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            tiles: vec![vec![Tile::Open; cols]; rows],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Tile at (row, col). Out of bounds reads as Pillar: the world edge
    /// behaves like a wall for every rule that asks.
    #[inline]
    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        if row < self.rows && col < self.cols {
            self.tiles[row][col]
        } else {
            Tile::Pillar
        }
    }

    #[inline]
    pub fn set_tile(&mut self, row: usize, col: usize, tile: Tile) {
        debug_assert!(
            row < self.rows && col < self.cols,
            "set_tile out of bounds: ({row}, {col}) on {}x{}",
            self.rows,
            self.cols,
        );
        if row < self.rows && col < self.cols {
            self.tiles[row][col] = tile;
        }
    }

    /// Row slices for rendering.
    pub fn row_tiles(&self, row: usize) -> &[Tile] {
        &self.tiles[row]
    }

    /// Number of cells currently holding the player marker.
    /// The session invariant is that this is exactly 1 while playing.
    #[allow(dead_code)]
    pub fn player_cells(&self) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|&&t| t == Tile::Player)
            .count()
    }

    /// Produce a grid with both dimensions doubled, the old content tiled
    /// 2×2 into it: new (r, c) copies old (r % rows, c % cols). The player
    /// marker is kept only in the top-left quadrant occurrence; the three
    /// tiled copies of its cell become Open, so exactly one marker survives
    /// at its original coordinates.
    pub fn doubled(&self) -> Result<Grid, ResizeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ResizeError::EmptyGrid);
        }

        let new_rows = self.rows * 2;
        let new_cols = self.cols * 2;
        let mut out = Grid::new(new_rows, new_cols);

        for r in 0..new_rows {
            for c in 0..new_cols {
                let src = self.tiles[r % self.rows][c % self.cols];
                let tiled_copy = r >= self.rows || c >= self.cols;
                out.tiles[r][c] = if tiled_copy && src == Tile::Player {
                    Tile::Open
                } else {
                    src
                };
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a Grid from a string diagram using the level legend,
    /// plus 'o' for the player marker.
    fn grid_from(rows: &[&str]) -> Grid {
        let mut g = Grid::new(rows.len(), rows[0].len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let tile = if ch == 'o' {
                    Tile::Player
                } else {
                    Tile::from_token(ch).expect("bad diagram char")
                };
                g.set_tile(r, c, tile);
            }
        }
        g
    }

    #[test]
    #[should_panic(expected = "set_tile out of bounds")]
    fn out_of_bounds_write_asserts_in_debug() {
        let mut g = Grid::new(2, 2);
        g.set_tile(2, 0, Tile::Open);
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let g = Grid::new(2, 3);
        assert_eq!(g.tile_at(0, 0), Tile::Open);
        assert_eq!(g.tile_at(2, 0), Tile::Pillar);
        assert_eq!(g.tile_at(0, 3), Tile::Pillar);
    }

    #[test]
    fn doubled_tiles_content_2x2() {
        let g = grid_from(&[
            "o$",
            "+?",
        ]);
        let big = g.doubled().unwrap();
        assert_eq!(big.rows(), 4);
        assert_eq!(big.cols(), 4);
        // Each quadrant mirrors the source, modulo the player dedup
        assert_eq!(big.tile_at(3, 3), g.tile_at(1, 1));
        assert_eq!(big.tile_at(1, 2), Tile::Pillar);
        assert_eq!(big.tile_at(0, 3), Tile::Treasure);
        assert_eq!(big.tile_at(2, 1), Tile::Treasure);
    }

    #[test]
    fn doubled_keeps_one_player() {
        let g = grid_from(&[
            "-o",
            "--",
        ]);
        let big = g.doubled().unwrap();
        assert_eq!(big.player_cells(), 1);
        // Original coordinates preserved; tiled copies opened up
        assert_eq!(big.tile_at(0, 1), Tile::Player);
        assert_eq!(big.tile_at(0, 3), Tile::Open);
        assert_eq!(big.tile_at(2, 1), Tile::Open);
        assert_eq!(big.tile_at(2, 3), Tile::Open);
    }

    #[test]
    fn doubled_rejects_empty() {
        let g = Grid::new(0, 0);
        assert_eq!(g.doubled().unwrap_err(), ResizeError::EmptyGrid);
    }

    #[test]
    fn doubled_twice_is_4x() {
        let g = grid_from(&["o-", "-$"]);
        let big = g.doubled().unwrap().doubled().unwrap();
        assert_eq!(big.rows(), 8);
        assert_eq!(big.cols(), 8);
        assert_eq!(big.player_cells(), 1);
        // Treasure tiles replicate into every copy
        let treasures = (0..8)
            .flat_map(|r| (0..8).map(move |c| (r, c)))
            .filter(|&(r, c)| big.tile_at(r, c) == Tile::Treasure)
            .count();
        assert_eq!(treasures, 16);
    }
}
