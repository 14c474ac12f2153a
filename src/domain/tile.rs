/// Tile types and their properties.
/// Properties are queried via methods, not stored as flags,
/// so tile semantics are centralized here.
///
/// ## Tile legend (level files):
///   '-' = Open floor            '+' = Pillar (blocks movement and sight)
///   '$' = Treasure              '@' = Amulet
///   'M' = Monster               '?' = Door
///   '!' = Exit                  'o' = Player marker

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Open,
    Pillar,
    Treasure,
    Amulet,
    Monster,
    Door,
    Exit,
    Player,
}

impl Tile {
    /// Decode a level-file token. `o` is not accepted here: the loader
    /// remaps it to Open and stamps the real player marker itself.
    pub fn from_token(c: char) -> Option<Tile> {
        match c {
            '-' => Some(Tile::Open),
            '+' => Some(Tile::Pillar),
            '$' => Some(Tile::Treasure),
            '@' => Some(Tile::Amulet),
            'M' => Some(Tile::Monster),
            '?' => Some(Tile::Door),
            '!' => Some(Tile::Exit),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Tile::Open => '-',
            Tile::Pillar => '+',
            Tile::Treasure => '$',
            Tile::Amulet => '@',
            Tile::Monster => 'M',
            Tile::Door => '?',
            Tile::Exit => '!',
            Tile::Player => 'o',
        }
    }

    /// Does this tile refuse the player entry outright?
    /// (Exit blocks conditionally on treasure; that lives in the move rules.)
    #[allow(dead_code)]
    pub fn is_blocking(self) -> bool {
        matches!(self, Tile::Pillar | Tile::Monster)
    }

    /// Does this tile end a monster's line of sight?
    pub fn blocks_sight(self) -> bool {
        matches!(self, Tile::Pillar)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        for c in ['-', '+', '$', '@', 'M', '?', '!'] {
            assert_eq!(Tile::from_token(c).unwrap().as_char(), c);
        }
    }

    #[test]
    fn player_marker_not_a_token() {
        // 'o' is load-time sugar, never parsed as a tile
        assert_eq!(Tile::from_token('o'), None);
        assert_eq!(Tile::from_token('x'), None);
    }

    #[test]
    fn blocking_tiles() {
        assert!(Tile::Pillar.is_blocking());
        assert!(Tile::Monster.is_blocking());
        assert!(!Tile::Exit.is_blocking()); // conditional, handled by rules
        assert!(!Tile::Open.is_blocking());
    }
}
