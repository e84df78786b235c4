/// Rendering layer: all terminal I/O lives here.
///
/// `TerminalSurface` rasterizes the simulation's circles into a grid of
/// coloured cells; `render` writes that grid plus the HUD and overlay to the
/// terminal. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color as TermColor, Print},
    QueueableCommand,
};
use glam::Vec2;

use radial_shooter::surface::{Color, Surface};
use radial_shooter::SetupError;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: TermColor = TermColor::Yellow;
const C_HINT: TermColor = TermColor::DarkGrey;
const C_TITLE: TermColor = TermColor::Cyan;
const C_OVERLAY: TermColor = TermColor::White;
const C_BUTTON: TermColor = TermColor::Green;

const CELL_GLYPH: &str = "█";

/// Smallest terminal the game will start in.
pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 8;

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb { r: c.r, g: c.g, b: c.b }
}

// ── Terminal surface ──────────────────────────────────────────────────────────

/// A cell grid standing in for a pixel canvas.
///
/// Row 0 of the terminal is the HUD; the canvas starts at row 1. Each cell
/// covers `cell_w × cell_h` world units.
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    cell_w: f32,
    cell_h: f32,
    background: Color,
    cells: Vec<Color>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16, cell_w: f32, cell_h: f32) -> Result<Self, SetupError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(SetupError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }
        let play_rows = rows - 1;
        Ok(Self {
            cols,
            rows: play_rows,
            cell_w,
            cell_h,
            background: Color::BLACK,
            cells: vec![Color::BLACK; cols as usize * play_rows as usize],
        })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total terminal rows, HUD included.
    pub fn term_rows(&self) -> u16 {
        self.rows + 1
    }

    /// World position of the centre of terminal cell `(col, row)`, or `None`
    /// for the HUD row and anything off the grid.
    pub fn to_world(&self, col: u16, row: u16) -> Option<Vec2> {
        if row == 0 || col >= self.cols || row > self.rows {
            return None;
        }
        let play_row = row - 1;
        Some(Vec2::new(
            (col as f32 + 0.5) * self.cell_w,
            (play_row as f32 + 0.5) * self.cell_h,
        ))
    }

    fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new((col as f32 + 0.5) * self.cell_w, (row as f32 + 0.5) * self.cell_h)
    }

    fn set(&mut self, col: i64, row: i64, color: Color) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let index = row as usize * self.cols as usize + col as usize;
        self.cells[index] = color;
    }
}

impl Surface for TerminalSurface {
    fn width(&self) -> f32 {
        self.cols as f32 * self.cell_w
    }

    fn height(&self) -> f32 {
        self.rows as f32 * self.cell_h
    }

    fn clear(&mut self, color: Color) {
        self.background = color;
        self.cells.fill(color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        let shade = color.faded(alpha, self.background);

        let min_col = ((center.x - radius) / self.cell_w).floor().max(0.0) as i64;
        let max_col = ((center.x + radius) / self.cell_w).floor() as i64;
        let min_row = ((center.y - radius) / self.cell_h).floor().max(0.0) as i64;
        let max_row = ((center.y + radius) / self.cell_h).floor() as i64;

        let mut painted = false;
        for row in min_row..=max_row.min(self.rows as i64 - 1) {
            for col in min_col..=max_col.min(self.cols as i64 - 1) {
                let cell = self.cell_center(col as u16, row as u16);
                if cell.distance(center) <= radius {
                    self.set(col, row, shade);
                    painted = true;
                }
            }
        }

        // Circles smaller than a cell still show up
        if !painted {
            let col = (center.x / self.cell_w).floor() as i64;
            let row = (center.y / self.cell_h).floor() as i64;
            self.set(col, row, shade);
        }
    }
}

// ── HUD & overlay state ───────────────────────────────────────────────────────

/// What the UI shows besides the canvas, fed by session events.
pub struct Hud {
    /// In-game counter
    pub score_text: String,
    /// Summary shown on the overlay
    pub overlay_score_text: String,
    pub overlay_visible: bool,
    pub games_played: u32,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            score_text: "0".to_string(),
            overlay_score_text: "0".to_string(),
            overlay_visible: true,
            games_played: 0,
        }
    }

    pub fn set_score(&mut self, score: u64) {
        self.score_text = score.to_string();
        self.overlay_score_text = score.to_string();
    }
}

/// Layout of the start overlay, shared by drawing and click hit-testing.
pub struct OverlayLayout {
    pub top: u16,
    pub left: u16,
    pub width: u16,
    pub button_row: u16,
    pub button_left: u16,
    pub button_width: u16,
}

const BUTTON_LABEL: &str = "[ Start Game ]";

impl OverlayLayout {
    pub fn new(cols: u16, term_rows: u16) -> Self {
        let width = 30.min(cols.saturating_sub(2));
        let left = (cols - width) / 2;
        let top = (term_rows / 2).saturating_sub(3).max(1);
        let button_width = BUTTON_LABEL.chars().count() as u16;
        Self {
            top,
            left,
            width,
            button_row: top + 4,
            button_left: (cols / 2).saturating_sub(button_width / 2),
            button_width,
        }
    }

    pub fn button_contains(&self, col: u16, row: u16) -> bool {
        row == self.button_row && col >= self.button_left && col < self.button_left + self.button_width
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, surface: &TerminalSurface, hud: &Hud) -> std::io::Result<()> {
    draw_canvas(out, surface)?;
    draw_hud(out, surface, hud)?;

    if hud.overlay_visible {
        draw_overlay(out, surface, hud)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Canvas ────────────────────────────────────────────────────────────────────

fn draw_canvas<W: Write>(out: &mut W, surface: &TerminalSurface) -> std::io::Result<()> {
    let cols = surface.cols as usize;
    let mut current: Option<Color> = None;

    for row in 0..surface.rows {
        out.queue(cursor::MoveTo(0, row + 1))?;
        let start = row as usize * cols;
        for &cell in &surface.cells[start..start + cols] {
            if cell == surface.background {
                out.queue(Print(" "))?;
                continue;
            }
            if current != Some(cell) {
                out.queue(style::SetForegroundColor(term_color(cell)))?;
                current = Some(cell);
            }
            out.queue(Print(CELL_GLYPH))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, surface: &TerminalSurface, hud: &Hud) -> std::io::Result<()> {
    let cols = surface.cols as usize;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(" ".repeat(cols)))?;

    let score = format!(" Score: {}", hud.score_text);
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score))?;

    let hint = "CLICK : Fire   Q : Quit ";
    let hint_len = hint.chars().count();
    if cols > score.chars().count() + hint_len {
        out.queue(cursor::MoveTo((cols - hint_len) as u16, 0))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(hint))?;
    }
    Ok(())
}

// ── Start / game-over overlay ─────────────────────────────────────────────────

fn draw_overlay<W: Write>(out: &mut W, surface: &TerminalSurface, hud: &Hud) -> std::io::Result<()> {
    let layout = OverlayLayout::new(surface.cols, surface.term_rows());
    let inner = layout.width.saturating_sub(2) as usize;

    let title = if hud.games_played == 0 { "RADIAL SHOOTER" } else { "GAME OVER" };
    let points = format!("{} Points", hud.overlay_score_text);
    let hint = "ENTER or click to start";

    let centered = |text: &str| {
        let text: String = text.chars().take(inner).collect();
        let len = text.chars().count();
        let pad = (inner - len) / 2;
        format!("│{}{}{}│", " ".repeat(pad), text, " ".repeat(inner - len - pad))
    };

    let lines: [(String, TermColor); 7] = [
        (format!("┌{}┐", "─".repeat(inner)), C_OVERLAY),
        (centered(title), C_TITLE),
        (centered(""), C_OVERLAY),
        (centered(&points), C_HUD_SCORE),
        (centered(""), C_OVERLAY),
        (centered(hint), C_HINT),
        (format!("└{}┘", "─".repeat(inner)), C_OVERLAY),
    ];

    for (i, (line, color)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(layout.left, layout.top + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(line))?;
    }

    out.queue(cursor::MoveTo(layout.button_left, layout.button_row))?;
    out.queue(style::SetForegroundColor(C_BUTTON))?;
    out.queue(Print(BUTTON_LABEL))?;

    Ok(())
}
