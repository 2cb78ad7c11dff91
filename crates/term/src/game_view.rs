//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: column numbers, the bordered board, a blank line,
//! then the status line, the info message and the key hints.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Outcome, Player, Position};

/// Rows below the board frame: blank, status, info, hints.
const STATUS_ROWS: u16 = 4;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const WIN_BG: Rgb = Rgb::new(70, 70, 20);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the board game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps the grid roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the game and an info message into an existing framebuffer.
    pub fn render_into(&self, state: &GameState, info: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let board = state.board();
        let board_px_w = u16::from(board.width()) * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = u16::from(board.height()) + 2;
        let total_h = 1 + frame_h + STATUS_ROWS;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = start_y + 1;

        self.draw_column_numbers(fb, start_x, start_y, board.width());

        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        fb.fill_rect(
            start_x + 1,
            frame_y + 1,
            board_px_w,
            u16::from(board.height()),
            ' ',
            CellStyle::default().on(BOARD_BG),
        );
        draw_border(fb, start_x, frame_y, frame_w, frame_h, border);

        let winning = state.winning_line();
        for (y, row) in board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let highlight = winning.contains(&Position::new(x as i8, y as i8));
                let (ch, style) = cell_glyph(*cell, highlight);
                let px = start_x + 1 + (x as u16) * self.cell_w + self.cell_w / 2;
                fb.put_char(px, frame_y + 1 + y as u16, ch, style);
            }
        }

        self.draw_status(fb, state, info, viewport, frame_y + frame_h + 1);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, info: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, info, viewport, &mut fb);
        fb
    }

    fn draw_column_numbers(&self, fb: &mut FrameBuffer, start_x: u16, y: u16, columns: u8) {
        let style = CellStyle::fg(Rgb::new(150, 150, 160));
        for x in 0..u16::from(columns) {
            let label = char::from_digit(u32::from((x + 1) % 10), 10).unwrap_or('?');
            fb.put_char(start_x + 1 + x * self.cell_w + self.cell_w / 2, y, label, style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, state: &GameState, info: &str, viewport: Viewport, y: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let hint = CellStyle::default().dim();

        let (status, status_style) = match state.outcome() {
            Outcome::InProgress => (format!("{} to move", state.to_move()), value),
            Outcome::Win(player) => (
                format!("{player} wins!"),
                CellStyle::fg(stone_color(player)).bold(),
            ),
            Outcome::Draw => ("draw - the board is full".to_string(), label),
        };
        put_centered(fb, viewport, y, &status, status_style);
        put_centered(fb, viewport, y + 1, info, value);

        let hints = if state.is_over() {
            "r: play again   q: quit".to_string()
        } else {
            format!("1-{}: drop a stone   q: quit", state.config().width())
        };
        put_centered(fb, viewport, y + 2, &hints, hint);
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn stone_color(player: Player) -> Rgb {
    match player {
        Player::Player1 => Rgb::new(240, 220, 80),
        Player::Player2 => Rgb::new(220, 80, 80),
    }
}

fn cell_glyph(cell: Cell, highlight: bool) -> (char, CellStyle) {
    match cell.player() {
        Some(player) => {
            let style = CellStyle::fg(stone_color(player)).on(BOARD_BG);
            if highlight {
                (player.stone(), style.on(WIN_BG).bold())
            } else {
                (player.stone(), style)
            }
        }
        None => ('·', CellStyle::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim()),
    }
}
