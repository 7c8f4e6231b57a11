/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// viewport rectangles into terminal cells.

use std::io::Write;

use asteroid_shooter::entities::{GameState, Rect};
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Glyph and colour per obstacle variant; variants past the end wrap around.
const OBSTACLE_LOOKS: &[(char, Color)] = &[
    ('@', Color::Grey),
    ('#', Color::DarkYellow),
    ('%', Color::Red),
    ('&', Color::Magenta),
];

// ── Layout ────────────────────────────────────────────────────────────────────

/// Maps viewport units onto the terminal cells inside the border.
struct Layout {
    /// Terminal size.
    cols: u16,
    rows: u16,
    /// Viewport units per cell.
    sx: f64,
    sy: f64,
}

/// The play area spans rows 2 .. rows-3 and columns 1 .. cols-2.
const TOP: u16 = 2;
const LEFT: u16 = 1;

impl Layout {
    fn new(cols: u16, rows: u16, state: &GameState) -> Self {
        let inner_cols = cols.saturating_sub(2).max(1) as f64;
        let inner_rows = rows.saturating_sub(4).max(1) as f64;
        Self {
            cols,
            rows,
            sx: state.viewport_width() / inner_cols,
            sy: state.viewport_height() / inner_rows,
        }
    }

    fn inner_cols(&self) -> u16 {
        self.cols.saturating_sub(2).max(1)
    }

    fn inner_rows(&self) -> u16 {
        self.rows.saturating_sub(4).max(1)
    }

    /// Cell span `(col, row, width, height)` covered by `rect`, clipped to the
    /// play area.  Always at least one cell so small things stay visible.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = (rect.x / self.sx).floor();
        let r0 = (rect.y / self.sy).floor();
        let c1 = ((rect.x + rect.w) / self.sx).ceil().max(c0 + 1.0);
        let r1 = ((rect.y + rect.h) / self.sy).ceil().max(r0 + 1.0);

        let c0 = c0.max(0.0);
        let r0 = r0.max(0.0);
        let c1 = c1.min(self.inner_cols() as f64);
        let r1 = r1.min(self.inner_rows() as f64);
        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some((
            LEFT + c0 as u16,
            TOP + r0 as u16,
            (c1 - c0) as u16,
            (r1 - r0) as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let layout = Layout::new(cols, rows, state);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &layout)?;
    draw_hud(out, state, &layout)?;

    for obstacle in &state.obstacles {
        let (glyph, color) = OBSTACLE_LOOKS[obstacle.variant as usize % OBSTACLE_LOOKS.len()];
        fill(out, &layout, &obstacle.bounds(), glyph, color)?;
    }
    for projectile in &state.projectiles {
        fill(out, &layout, &projectile.bounds(), '║', C_PROJECTILE)?;
    }

    draw_player(out, state, &layout)?;
    draw_controls_hint(out, &layout)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let w = layout.cols as usize;
    let h = layout.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in TOP..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(layout.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, layout: &Layout) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;

    let title = "[ ASTEROIDS ]";
    let tx = (layout.cols / 2).saturating_sub(title.len() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Paint every cell covered by `rect` with `glyph`.
fn fill<W: Write>(
    out: &mut W,
    layout: &Layout,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row, w, h)) = layout.cells(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph).take(w as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for r in row..row + h {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, layout: &Layout) -> std::io::Result<()> {
    // Sprite, stretched to the ship's cell span:
    //   ▲       ← top row      (tip, centred)
    //  /███\    ← other rows   (wings + fuselage)
    let Some((col, row, w, h)) = layout.cells(&state.player.bounds()) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(col + w / 2, row))?;
    out.queue(Print("▲"))?;

    let body = if w >= 3 {
        format!("/{}\\", "█".repeat(w as usize - 2))
    } else {
        "█".repeat(w as usize)
    };
    for r in row + 1..row + h {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&body))?;
    }

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, layout.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}
