use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::core::board::{Board, Terrain};
use crate::core::collision::HITBOX_HALF_WIDTH;
use crate::core::entity::Position;
use crate::core::render::{RenderTarget, Sprite};
use crate::core::state::Phase;

/// One buffered draw call from the engine's render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DrawOp {
    Cell {
        col: usize,
        row: usize,
        terrain: Terrain,
    },
    Sprite {
        sprite: Sprite,
        pos: Position,
    },
}

/// Terminal render surface. The engine draws into it during a tick; the
/// runner then presents the buffered frame into ratatui, mapping grid cells
/// to character rectangles and sprite identifiers to glyphs.
pub struct TerminalCanvas {
    board: Board,
    debug_hitboxes: bool,
    ops: Vec<DrawOp>,
}

impl TerminalCanvas {
    pub fn new(board: Board, debug_hitboxes: bool) -> Self {
        Self {
            board,
            debug_hitboxes,
            ops: Vec::new(),
        }
    }

    pub fn present(&self, frame: &mut Frame, phase: Phase) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cols = self.board.cols() as u16;
        let rows = self.board.rows() as u16;
        // one line at the bottom stays reserved for the key hints; a
        // terminal without even one character per cell gets the hints alone
        if area.width < cols || area.height < rows + 1 {
            self.hints(frame, area, phase);
            return;
        }

        let cell_w = area.width / cols;
        let cell_h = (area.height - 1) / rows;
        let grid_w = cell_w * cols;
        let grid_h = cell_h * rows;
        let x0 = area.x + (area.width - grid_w) / 2;
        let y0 = area.y + (area.height - 1 - grid_h) / 2;

        for op in &self.ops {
            match *op {
                DrawOp::Cell { col, row, terrain } => {
                    let rect = Rect::new(
                        x0 + col as u16 * cell_w,
                        y0 + row as u16 * cell_h,
                        cell_w,
                        cell_h,
                    );
                    let style = Style::default().bg(terrain_color(terrain));
                    frame.render_widget(Block::default().style(style), rect);
                }
                DrawOp::Sprite { sprite, pos } => {
                    let (glyph, color) = sprite_face(sprite);
                    self.draw_glyph(frame, glyph, color, pos, x0, y0, cell_w, cell_h);
                    if self.debug_hitboxes {
                        let left = Position::new(pos.x - HITBOX_HALF_WIDTH, pos.y);
                        let right = Position::new(pos.x + HITBOX_HALF_WIDTH, pos.y);
                        self.draw_glyph(frame, "[", Color::DarkGray, left, x0, y0, cell_w, cell_h);
                        self.draw_glyph(frame, "]", Color::DarkGray, right, x0, y0, cell_w, cell_h);
                    }
                }
            }
        }

        self.hints(frame, area, phase);
        self.banner(frame, area, phase);
    }

    /// Places a glyph at a fractional grid position, centered within its
    /// cell; anything that falls outside the grid is clipped whole.
    #[allow(clippy::too_many_arguments)]
    fn draw_glyph(
        &self,
        frame: &mut Frame,
        glyph: &str,
        color: Color,
        pos: Position,
        x0: u16,
        y0: u16,
        cell_w: u16,
        cell_h: u16,
    ) {
        let width = glyph.chars().count() as i64;
        let px = (f64::from(x0) + pos.x * f64::from(cell_w) + (f64::from(cell_w) - width as f64) / 2.0)
            .round() as i64;
        let py = (f64::from(y0) + pos.y * f64::from(cell_h) + (f64::from(cell_h) - 1.0) / 2.0)
            .round() as i64;

        let cols = self.board.cols() as i64;
        let rows = self.board.rows() as i64;
        let in_x = px >= i64::from(x0) && px + width <= i64::from(x0) + cols * i64::from(cell_w);
        let in_y = py >= i64::from(y0) && py < i64::from(y0) + rows * i64::from(cell_h);
        if !in_x || !in_y {
            return;
        }

        let rect = Rect::new(px as u16, py as u16, width as u16, 1);
        frame.render_widget(
            Paragraph::new(glyph).style(Style::default().fg(color)),
            rect,
        );
    }

    fn hints(&self, frame: &mut Frame, area: Rect, phase: Phase) {
        let text = match phase {
            Phase::Playing => "←↑↓→ move · Esc/Enter pause · r restart · q quit",
            _ => "Enter start/resume · ←/→ pick a character · r restart · q quit",
        };
        let rect = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            rect,
        );
    }

    /// State-visibility overlay: which banner (if any) to show is the only
    /// UI the game has beyond the field itself.
    fn banner(&self, frame: &mut Frame, area: Rect, phase: Phase) {
        let Some((title, body)) = banner_text(phase) else {
            return;
        };

        let height: u16 = 4;
        let width = 46.min(area.width);
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height.min(area.height),
        );

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title)),
            rect,
        );
    }
}

impl RenderTarget for TerminalCanvas {
    fn clear(&mut self) {
        self.ops.clear();
    }

    fn draw_cell(&mut self, col: usize, row: usize, terrain: Terrain) {
        self.ops.push(DrawOp::Cell { col, row, terrain });
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Position) {
        self.ops.push(DrawOp::Sprite { sprite, pos });
    }
}

fn terrain_color(terrain: Terrain) -> Color {
    match terrain {
        Terrain::Water => Color::Blue,
        Terrain::Stone => Color::DarkGray,
        Terrain::Grass => Color::Green,
    }
}

/// Maps a logical sprite identifier to a drawable glyph and color — the
/// terminal's idea of asset resolution.
fn sprite_face(sprite: Sprite) -> (&'static str, Color) {
    match sprite.0 {
        "enemy-bug" => ("<oo>", Color::Red),
        "char-boy" => ("@", Color::Cyan),
        "char-cat-girl" => ("@", Color::Yellow),
        "char-horn-girl" => ("@", Color::Magenta),
        "char-pink-girl" => ("@", Color::LightMagenta),
        "char-princess-girl" => ("@", Color::White),
        _ => ("?", Color::Gray),
    }
}

fn banner_text(phase: Phase) -> Option<(&'static str, &'static str)> {
    match phase {
        Phase::Playing => None,
        Phase::NotStarted => Some((
            " gridrush ",
            "Cross the traffic, reach the water.\nEnter to start · ←/→ to pick a character",
        )),
        Phase::Paused => Some((" paused ", "\nEnter to resume")),
        Phase::Won => Some((" you made it ", "\nPress r for another run")),
        Phase::Lost => Some((" game over ", "\nPress r to try again")),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn full_frame(canvas: &mut TerminalCanvas) {
        for row in 0..Board::CLASSIC.rows() {
            for col in 0..Board::CLASSIC.cols() {
                canvas.draw_cell(col, row, Board::CLASSIC.terrain(row));
            }
        }
        canvas.draw_sprite(Sprite("char-boy"), Board::CLASSIC.spawn());
    }

    #[test]
    fn undersized_terminals_render_without_panicking() {
        let mut canvas = TerminalCanvas::new(Board::CLASSIC, true);
        full_frame(&mut canvas);
        // narrower than the field, shorter than the field, and degenerate
        for (width, height) in [(3, 10), (80, 3), (1, 1), (0, 0)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| canvas.present(frame, Phase::Playing))
                .unwrap();
        }
    }

    #[test]
    fn hitbox_overlay_brackets_both_sides_of_the_sprite() {
        let mut canvas = TerminalCanvas::new(Board::CLASSIC, true);
        canvas.draw_sprite(Sprite("char-boy"), Position::new(2.0, 2.0));
        let mut terminal = Terminal::new(TestBackend::new(50, 31)).unwrap();
        terminal
            .draw(|frame| canvas.present(frame, Phase::Playing))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let find = |wanted: &str| {
            let width = buffer.area.width as usize;
            buffer
                .content()
                .iter()
                .position(|cell| cell.symbol() == wanted)
                .map(|i| ((i % width) as u16, (i / width) as u16))
                .unwrap()
        };
        let (left, left_row) = find("[");
        let (mid, _) = find("@");
        let (right, right_row) = find("]");
        assert_eq!(left_row, right_row);
        assert!(left < mid && mid < right);
        // contact reaches equally far either side of the player's x
        assert_eq!(mid - left, right - mid);
    }

    #[test]
    fn clear_drops_the_previous_frame() {
        let mut canvas = TerminalCanvas::new(Board::CLASSIC, false);
        canvas.draw_cell(0, 0, Terrain::Water);
        canvas.draw_sprite(Sprite("enemy-bug"), Position::new(1.0, 2.0));
        assert_eq!(canvas.ops.len(), 2);

        canvas.clear();
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn every_known_sprite_has_a_face() {
        for id in [
            "enemy-bug",
            "char-boy",
            "char-cat-girl",
            "char-horn-girl",
            "char-pink-girl",
            "char-princess-girl",
        ] {
            let (glyph, _) = sprite_face(Sprite(id));
            assert_ne!(glyph, "?");
        }
        assert_eq!(sprite_face(Sprite("mystery")).0, "?");
    }

    #[test]
    fn only_playing_goes_bannerless() {
        assert!(banner_text(Phase::Playing).is_none());
        for phase in [Phase::NotStarted, Phase::Paused, Phase::Won, Phase::Lost] {
            assert!(banner_text(phase).is_some());
        }
    }
}
