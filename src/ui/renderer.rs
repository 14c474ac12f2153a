/// Presentation layer: alt-screen terminal renderer.
///
/// One full frame per turn — the game only changes on a keystroke, so
/// there is no tick loop to flicker against. All commands are batched
/// with `queue!` into a buffered writer and flushed once per frame.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::domain::tile::Tile;
use crate::sim::world::{Phase, WorldState};

// Each game cell renders as the tile char plus a spacer column.
const HUD_ROW: u16 = 0;
const MAP_ROW: u16 = 2;

pub struct Renderer {
    out: BufWriter<Stdout>,
    active: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            out: BufWriter::new(io::stdout()),
            active: false,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide)?;
        self.active = true;
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, world: &WorldState) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        self.draw_hud(world)?;
        self.draw_map(world)?;
        self.draw_footer(world)?;

        self.out.flush()
    }

    fn draw_hud(&mut self, world: &WorldState) -> io::Result<()> {
        let hud = format!(
            " DELVER   treasure {}   turn {}   grid {}x{}",
            world.player.treasure,
            world.turns,
            world.grid.rows(),
            world.grid.cols(),
        );
        queue!(
            self.out,
            MoveTo(0, HUD_ROW),
            SetForegroundColor(Color::White),
            Print(hud),
            ResetColor,
        )
    }

    fn draw_map(&mut self, world: &WorldState) -> io::Result<()> {
        for r in 0..world.grid.rows() {
            queue!(self.out, MoveTo(1, MAP_ROW + r as u16))?;
            for &tile in world.grid.row_tiles(r) {
                queue!(
                    self.out,
                    SetForegroundColor(tile_color(tile)),
                    Print(tile.as_char()),
                    Print(' '),
                )?;
            }
        }
        queue!(self.out, ResetColor)
    }

    fn draw_footer(&mut self, world: &WorldState) -> io::Result<()> {
        let msg_row = MAP_ROW + world.grid.rows() as u16 + 1;

        let (banner, color) = match world.phase {
            Phase::Playing => (world.message.as_str(), Color::Yellow),
            Phase::Escaped => ("You escaped the dungeon!  (any key)", Color::Green),
            Phase::Captured => ("A monster caught you.  (any key)", Color::Red),
        };
        if !banner.is_empty() {
            queue!(
                self.out,
                MoveTo(1, msg_row),
                SetForegroundColor(color),
                Print(banner),
                ResetColor,
            )?;
        }

        queue!(
            self.out,
            MoveTo(1, msg_row + 2),
            SetForegroundColor(Color::DarkGrey),
            Print("[wasd/arrows] move   [g] grow grid   [q] quit"),
            ResetColor,
        )
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Never leave the terminal in raw/alt-screen mode
        let _ = self.cleanup();
    }
}

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Open => Color::DarkGrey,
        Tile::Pillar => Color::Grey,
        Tile::Treasure => Color::Yellow,
        Tile::Amulet => Color::Magenta,
        Tile::Monster => Color::Red,
        Tile::Door => Color::Cyan,
        Tile::Exit => Color::Green,
        Tile::Player => Color::White,
    }
}
