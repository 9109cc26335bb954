//! Terminal renderer - draws the session state with crossterm.
//!
//! Full redraw per frame. A 10x20 board is small enough that diffing would
//! not pay for itself; each board cell renders two columns wide to
//! compensate for the terminal glyph aspect ratio.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::core::{GameSession, SessionState};
use crate::types::PieceColor;

/// Top-left corner of the board frame in terminal cells.
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 1;

/// Terminal columns per board cell.
const CELL_W: u16 = 2;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole frame: border, locked cells, active piece, score
    /// line, and the state banner.
    pub fn draw(&mut self, session: &GameSession) -> Result<()> {
        let board = session.board();
        let width = board.width() as u16;
        let height = board.height() as u16;
        let inner = (width * CELL_W) as usize;

        self.stdout.queue(terminal::Clear(ClearType::All))?;

        // Border.
        self.stdout.queue(SetForegroundColor(Color::Grey))?;
        self.stdout.queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y))?;
        self.stdout
            .queue(Print(format!("┌{}┐", "─".repeat(inner))))?;
        for y in 0..height {
            self.stdout
                .queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y + 1 + y))?;
            self.stdout.queue(Print("│"))?;
            self.stdout
                .queue(cursor::MoveTo(ORIGIN_X + 1 + width * CELL_W, ORIGIN_Y + 1 + y))?;
            self.stdout.queue(Print("│"))?;
        }
        self.stdout
            .queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y + 1 + height))?;
        self.stdout
            .queue(Print(format!("└{}┘", "─".repeat(inner))))?;

        // Locked cells.
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if let Some(Some(color)) = board.get(x, y) {
                    self.draw_cell(x as u16, y as u16, color)?;
                }
            }
        }

        // Active piece; rows above the grid stay invisible.
        if let Some(piece) = session.active() {
            for (x, y) in piece.cells() {
                if y >= 0 {
                    self.draw_cell(x as u16, y as u16, piece.color())?;
                }
            }
        }

        // Score line and state banner.
        self.stdout.queue(ResetColor)?;
        self.stdout
            .queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y + height + 2))?;
        self.stdout
            .queue(Print(format!("Score: {}", session.score())))?;
        self.stdout
            .queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y + height + 3))?;
        let banner = match session.state() {
            SessionState::Ready => String::from("Press Enter to start"),
            SessionState::Running => {
                String::from("arrows move/rotate, space hard drop, q quits")
            }
            SessionState::Over => format!(
                "Game over! Score: {}. Press r to play again",
                session.score()
            ),
        };
        self.stdout.queue(Print(banner))?;

        self.stdout.flush()?;
        Ok(())
    }

    fn draw_cell(&mut self, x: u16, y: u16, color: PieceColor) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(
            ORIGIN_X + 1 + x * CELL_W,
            ORIGIN_Y + 1 + y,
        ))?;
        self.stdout.queue(SetForegroundColor(cell_color(color)))?;
        self.stdout.queue(Print("██"))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal color for each piece color, matching the reference palette.
fn cell_color(color: PieceColor) -> Color {
    let (r, g, b) = match color {
        PieceColor::Purple => (128, 0, 128),
        PieceColor::Yellow => (255, 255, 0),
        PieceColor::Cyan => (0, 255, 255),
        PieceColor::Blue => (0, 0, 255),
        PieceColor::Orange => (255, 165, 0),
        PieceColor::Green => (0, 128, 0),
        PieceColor::Red => (255, 0, 0),
    };
    Color::Rgb { r, g, b }
}
