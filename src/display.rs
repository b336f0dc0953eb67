/// Rendering layer.  All terminal drawing lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; world rectangles are projected
/// through the `Viewport` and clipped to the terminal.

use std::io::{self, Write};

use alien_invasion::entities::{Enemy, GameState, Projectile, Rect, Ship};
use alien_invasion::menu::DifficultyButton;
use alien_invasion::settings::Difficulty;
use alien_invasion::starfield::Starfield;
use alien_invasion::viewport::Viewport;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_SCORE: Color = Color::Yellow;
const C_HIGH_SCORE: Color = Color::Magenta;
const C_LEVEL: Color = Color::Cyan;
const C_LIVES: Color = Color::Red;
const C_BUTTON_TEXT: Color = Color::Black;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    viewport: &Viewport,
    starfield: &Starfield,
) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_starfield(out, viewport, starfield)?;
    draw_ship(out, viewport, &state.ship)?;
    for projectile in &state.projectiles {
        draw_projectile(out, viewport, projectile)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, viewport, enemy)?;
    }
    draw_scoreboard(out, viewport, state)?;

    if !state.in_run() {
        for button in &state.buttons {
            draw_button(out, viewport, button)?;
        }
        draw_controls_hint(out, viewport)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Clipped text ──────────────────────────────────────────────────────────────

/// Print `text` starting at a possibly off-screen cell, dropping whatever
/// falls outside the terminal.
fn put_clipped<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    column: i32,
    row: i32,
    text: &str,
) -> io::Result<()> {
    if row < 0 || row >= viewport.rows as i32 {
        return Ok(());
    }
    let start = column.max(0);
    if start >= viewport.columns as i32 {
        return Ok(());
    }
    let skip = (start - column) as usize;
    let room = (viewport.columns as i32 - start) as usize;
    let visible: String = text.chars().skip(skip).take(room).collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(start as u16, row as u16))?;
    out.queue(Print(visible))?;
    Ok(())
}

/// A row `left + fill × (width − 2) + right`, or just `fill` when too narrow.
fn framed_row(width: usize, left: char, fill: char, right: char) -> String {
    if width < 2 {
        return fill.to_string();
    }
    let mut row = String::with_capacity(width * 3);
    row.push(left);
    row.extend(std::iter::repeat(fill).take(width - 2));
    row.push(right);
    row
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_starfield<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    starfield: &Starfield,
) -> io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for star in &starfield.stars {
        if let Some((column, row)) = viewport.to_cell(star.x, star.y) {
            out.queue(cursor::MoveTo(column, row))?;
            out.queue(Print(star.glyph))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, viewport: &Viewport, ship: &Ship) -> io::Result<()> {
    // Sprite, stretched to the ship's footprint:
    //    ▲      ← nose, centred
    //  /███\    ← hull, one row per remaining cell row
    let (column, row) = viewport.cell_origin(ship.render_x() as f32, ship.y);
    let (width, height) = viewport.cell_span(ship.width, ship.height);
    let width = width as usize;

    out.queue(style::SetForegroundColor(C_SHIP))?;
    if height > 1 {
        put_clipped(out, viewport, column + width as i32 / 2, row, "▲")?;
    }
    let hull = framed_row(width, '/', '█', '\\');
    let first_hull_row = if height > 1 { 1 } else { 0 };
    for dy in first_hull_row..height as i32 {
        put_clipped(out, viewport, column, row + dy, &hull)?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    projectile: &Projectile,
) -> io::Result<()> {
    let rect = projectile.rect();
    let (column, row) = viewport.cell_origin(rect.center_x(), rect.top());
    let (_, height) = viewport.cell_span(rect.width, rect.height);

    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    for dy in 0..height as i32 {
        put_clipped(out, viewport, column, row + dy, "║")?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, viewport: &Viewport, enemy: &Enemy) -> io::Result<()> {
    // Sprite:
    //   «▼▼▼▼»    ← swept-back wings
    //   ╚════╝    ← engine block
    let (column, row) = viewport.cell_origin(enemy.x, enemy.y);
    let (width, height) = viewport.cell_span(enemy.width, enemy.height);
    let width = width as usize;

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    put_clipped(out, viewport, column, row, &framed_row(width, '«', '▼', '»'))?;
    let engine = framed_row(width, '╚', '═', '╝');
    for dy in 1..height as i32 {
        put_clipped(out, viewport, column, row + dy, &engine)?;
    }
    Ok(())
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

/// `1234567` → `"1,234,567"`.
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn draw_scoreboard<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    state: &GameState,
) -> io::Result<()> {
    let columns = viewport.columns as i32;
    let stats = &state.stats;

    // Score top right, level just below it
    let score = group_thousands(stats.score);
    out.queue(style::SetForegroundColor(C_SCORE))?;
    put_clipped(out, viewport, columns - score.chars().count() as i32 - 1, 0, &score)?;

    let level = format!("Lv {}", stats.level);
    out.queue(style::SetForegroundColor(C_LEVEL))?;
    put_clipped(out, viewport, columns - level.chars().count() as i32 - 1, 1, &level)?;

    // High score, top centre
    let high = format!("Best {}", group_thousands(stats.high_score));
    out.queue(style::SetForegroundColor(C_HIGH_SCORE))?;
    put_clipped(out, viewport, (columns - high.chars().count() as i32) / 2, 0, &high)?;

    // Ships left, top left
    let ships: String = "▲ ".repeat(stats.ships_left as usize);
    out.queue(style::SetForegroundColor(C_LIVES))?;
    put_clipped(out, viewport, 1, 0, &ships)?;

    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn button_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn draw_button<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    button: &DifficultyButton,
) -> io::Result<()> {
    let Rect { x, y, width, height } = button.rect;
    let (column, row) = viewport.cell_origin(x, y);
    let (span_w, span_h) = viewport.cell_span(width, height);
    let span_w = span_w as usize;

    let label = button.difficulty.label();
    let label_len = label.chars().count().min(span_w);
    let pad_left = (span_w - label_len) / 2;
    let label_row = span_h as i32 / 2;

    out.queue(style::SetBackgroundColor(button_color(button.difficulty)))?;
    out.queue(style::SetForegroundColor(C_BUTTON_TEXT))?;
    for dy in 0..span_h as i32 {
        let line = if dy == label_row {
            let text: String = label.chars().take(label_len).collect();
            format!(
                "{}{}{}",
                " ".repeat(pad_left),
                text,
                " ".repeat(span_w - pad_left - label_len)
            )
        } else {
            " ".repeat(span_w)
        };
        put_clipped(out, viewport, column, row + dy, &line)?;
    }
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> io::Result<()> {
    out.queue(style::SetForegroundColor(C_HINT))?;
    put_clipped(
        out,
        viewport,
        1,
        viewport.rows as i32 - 1,
        "Click a difficulty (or 1/2/3)   ← → Move   SPACE Shoot   P Restart   Q Quit",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn framed_row_handles_narrow_widths() {
        assert_eq!(framed_row(1, '/', '█', '\\'), "█");
        assert_eq!(framed_row(2, '/', '█', '\\'), "/\\");
        assert_eq!(framed_row(4, '/', '█', '\\'), "/██\\");
    }

    #[test]
    fn clipped_text_outside_the_terminal_writes_nothing() {
        let viewport = Viewport::new(10, 5, 100.0, 50.0);
        let mut buf: Vec<u8> = Vec::new();
        put_clipped(&mut buf, &viewport, 20, 0, "hello").unwrap();
        put_clipped(&mut buf, &viewport, 0, 9, "hello").unwrap();
        put_clipped(&mut buf, &viewport, -5, 0, "hello").unwrap();
        assert!(buf.is_empty());
    }
}
