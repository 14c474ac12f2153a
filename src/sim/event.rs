/// Events emitted by a turn. The presentation layer consumes these
/// for messages and end-of-session screens.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    Blocked,
    TreasureCollected { total: u32 },
    AmuletFound,
    DoorPassed,
    Escaped,
    Captured,
    /// The grid was doubled; new dimensions attached.
    GridGrown { rows: usize, cols: usize },
}
