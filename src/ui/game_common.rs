//! Shared UI pieces: the cell buffer, world/cell mapping and the status bar.

use crate::assets::Sprite;
use crate::heist::{Hitbox, Viewport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the status bar under the playfield.
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Split the whole terminal into playfield (top) and status bar (bottom).
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Maps world units onto the cells of a playfield `Rect` and back.
///
/// Rendering and click hit-testing both go through this, so a click lands
/// where the icon was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldMapping {
    pub area: Rect,
    pub viewport: Viewport,
}

impl WorldMapping {
    pub fn new(area: Rect, viewport: Viewport) -> Self {
        Self { area, viewport }
    }

    /// Playfield mapping for a full terminal of `terminal_area`.
    pub fn for_terminal(terminal_area: Rect, viewport: Viewport) -> Self {
        Self::new(split_screen(terminal_area).0, viewport)
    }

    fn x_scale(&self) -> f64 {
        self.area.width as f64 / self.viewport.width
    }

    fn y_scale(&self) -> f64 {
        self.area.height as f64 / self.viewport.height
    }

    /// Column offset inside the playfield (may be negative or past the edge).
    pub fn col(&self, x: f64) -> i32 {
        (x * self.x_scale()).floor() as i32
    }

    /// Row offset inside the playfield.
    pub fn row(&self, y: f64) -> i32 {
        (y * self.y_scale()).floor() as i32
    }

    /// Cell rectangle covered by a world box, as (col, row, width, height).
    /// Never narrower or shorter than one cell.
    pub fn cell_box(&self, b: &Hitbox) -> (i32, i32, usize, usize) {
        let col = self.col(b.x);
        let row = self.row(b.y);
        let w = (b.width * self.x_scale()).round().max(1.0) as usize;
        let h = (b.height * self.y_scale()).round().max(1.0) as usize;
        (col, row, w, h)
    }

    /// Cells whose centres lie inside a world box, as (col, row, width, height).
    ///
    /// Used for click targets: every cell drawn this way resolves back into
    /// `b` through `to_world`. Width or height is 0 if no centre fits.
    pub fn inner_cell_box(&self, b: &Hitbox) -> (i32, i32, usize, usize) {
        let (col, w) = inner_span(b.x, b.width, self.x_scale());
        let (row, h) = inner_span(b.y, b.height, self.y_scale());
        (col, row, w, h)
    }

    /// World position of the centre of an absolute terminal cell.
    /// `None` if the cell is outside the playfield.
    pub fn to_world(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let a = self.area;
        if column < a.x || column >= a.x + a.width || row < a.y || row >= a.y + a.height {
            return None;
        }
        let x = (column - a.x) as f64 + 0.5;
        let y = (row - a.y) as f64 + 0.5;
        Some((x / self.x_scale(), y / self.y_scale()))
    }
}

/// First cell and count of cells along one axis whose centres fall in
/// `[start, start + len]`.
fn inner_span(start: f64, len: f64, scale: f64) -> (i32, usize) {
    let centre = |i: i32| (i as f64 + 0.5) / scale;
    let end = start + len;

    let mut first = (start * scale - 0.5).ceil() as i32;
    if centre(first) < start {
        first += 1;
    } else if centre(first - 1) >= start {
        first -= 1;
    }
    let mut last = (end * scale - 0.5).floor() as i32;
    if centre(last) > end {
        last -= 1;
    } else if centre(last + 1) <= end {
        last += 1;
    }

    (first, (last - first + 1).max(0) as usize)
}

/// Cell in the render buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::empty(),
        }
    }
}

/// Off-screen character grid, stamped row by row into the frame.
pub struct CellBuffer {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as usize,
            height: height as usize,
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Write a cell if it is inside the buffer.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 {
            return;
        }
        if let Some(slot) = self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *slot = cell;
        }
    }

    /// Paint every cell with a background color.
    pub fn fill(&mut self, bg: Color) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }

    /// Fill whole rows `[from, to)` with one character.
    pub fn fill_rows(&mut self, from: i32, to: i32, ch: char, fg: Color, bg: Color) {
        for row in from.max(0)..to.min(self.height as i32) {
            for col in 0..self.width as i32 {
                self.set(
                    col,
                    row,
                    Cell {
                        ch,
                        fg,
                        bg,
                        modifier: Modifier::empty(),
                    },
                );
            }
        }
    }

    /// Stretch `sprite` over a `w` x `h` cell box at (`col`, `row`).
    /// Spaces are transparent and keep the cell's background.
    pub fn stamp_sprite(&mut self, sprite: &Sprite, col: i32, row: i32, w: usize, h: usize, fg: Color) {
        for dy in 0..h {
            for dx in 0..w {
                let ch = sprite.sample(dx, dy, w, h);
                if ch == ' ' {
                    continue;
                }
                let (c, r) = (col + dx as i32, row + dy as i32);
                let bg = self.background_at(c, r);
                self.set(
                    c,
                    r,
                    Cell {
                        ch,
                        fg,
                        bg,
                        modifier: Modifier::empty(),
                    },
                );
            }
        }
    }

    /// Solid block, used when a sprite is unavailable.
    pub fn stamp_block(&mut self, col: i32, row: i32, w: usize, h: usize, fg: Color) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                let bg = self.background_at(col + dx, row + dy);
                self.set(
                    col + dx,
                    row + dy,
                    Cell {
                        ch: '\u{2588}',
                        fg,
                        bg,
                        modifier: Modifier::empty(),
                    },
                );
            }
        }
    }

    /// Write text starting at (`col`, `row`), clipped to the buffer.
    pub fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color, modifier: Modifier) {
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i32;
            let bg = self.background_at(c, row);
            self.set(c, row, Cell { ch, fg, bg, modifier });
        }
    }

    /// Write text horizontally centred on `row`.
    pub fn put_centered(&mut self, row: i32, text: &str, fg: Color, modifier: Modifier) {
        let len = text.chars().count() as i32;
        let col = (self.width as i32 - len) / 2;
        self.put_str(col.max(0), row, text, fg, modifier);
    }

    fn background_at(&self, col: i32, row: i32) -> Color {
        if col < 0 || row < 0 {
            return Color::Reset;
        }
        self.get(col as usize, row as usize)
            .map_or(Color::Reset, |c| c.bg)
    }

    /// Render the buffer into `area`, merging runs of equal style into spans.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.iter().enumerate().take(area.height as usize) {
            let mut spans: Vec<Span> = Vec::new();
            let mut current = Style::default();
            let mut current_text = String::new();

            for cell in row_data.iter().take(area.width as usize) {
                let style = Style::default()
                    .fg(cell.fg)
                    .bg(cell.bg)
                    .add_modifier(cell.modifier);
                if style != current && !current_text.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current_text), current));
                }
                current = style;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current));
            }

            let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

/// Render a two-line status bar: status message, then key hints.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Esc]", "Quit")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}
