//! Stateless board rendering.
//!
//! The board is painted onto a character canvas mirroring the grid at
//! four columns by two rows per cell, then handed to ratatui as styled
//! lines. Layer order matters: segment glyphs go down first and the
//! points over them, so crossings stay readable.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{DisplayMode, GRID_SIZE, GameSession, Grid, Point, Segment};

use super::app::{App, Message, MessageKind};

const CELL_W: i32 = 4;
const CELL_H: i32 = 2;

/// Character columns of the board canvas.
const CANVAS_W: usize = (CELL_W * GRID_SIZE + 2) as usize;
/// Character rows of the board canvas.
const CANVAS_H: usize = (CELL_H * GRID_SIZE) as usize;

/// Width of the whole panel, sized by the bordered board.
const PANEL_W: u16 = CANVAS_W as u16 + 2;
/// Width of the title bar, slightly narrower than the panel.
const TITLE_W: usize = CANVAS_W;

/// Renders the title bar, board and message bar.
pub fn draw(frame: &mut Frame, app: &App) {
    let column = center_column(frame.area(), PANEL_W);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                    // Breathing room
            Constraint::Length(2),                    // Title
            Constraint::Length(CANVAS_H as u16 + 2),  // Board
            Constraint::Length(3),                    // Message bar
            Constraint::Min(0),
        ])
        .split(column);

    draw_title(frame, chunks[1], app.session());
    draw_board(frame, chunks[2], app.session());
    draw_message(frame, chunks[3], app.message());
}

fn center_column(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area)[1]
}

// ─────────────────────────────────────────────────────────────
//  Title bar
// ─────────────────────────────────────────────────────────────

fn draw_title(frame: &mut Frame, area: Rect, session: &GameSession) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let yellow = Style::default().fg(Color::Yellow);
    let blue = Style::default().fg(Color::Blue);

    let greeting = if !session.segments().is_empty()
        && let Some(path) = session.save_path()
    {
        vec![Span::styled(format!("save: {}", path.display()), blue)]
    } else {
        vec![
            Span::styled("Hello, ", yellow),
            Span::styled(
                session.nickname().unwrap_or("anonymous").to_string(),
                yellow.add_modifier(Modifier::BOLD),
            ),
        ]
    };
    let mode = session.mode();
    let mode_span = Span::styled(
        mode.label(),
        if mode == DisplayMode::Sober { yellow } else { blue },
    );
    let top = three_column(
        vec![
            Span::raw(" lines: "),
            Span::styled(session.segments().len().to_string(), bold),
        ],
        greeting,
        vec![mode_span],
    );

    let evaluation = if mode == DisplayMode::Visual
        && let Some(evaluation) = session.last_evaluation()
    {
        vec![
            Span::raw("Last play was "),
            Span::styled(evaluation.label(), bold),
        ]
    } else {
        Vec::new()
    };
    let bottom = three_column(
        vec![
            Span::raw(" score: "),
            Span::styled(session.score().to_string(), bold),
        ],
        Vec::new(),
        evaluation,
    );

    frame.render_widget(Paragraph::new(vec![top, bottom]), area);
}

/// Lays three span groups on one line: left-aligned, centered over the
/// full width, and right-aligned.
fn three_column(
    left: Vec<Span<'static>>,
    center: Vec<Span<'static>>,
    right: Vec<Span<'static>>,
) -> Line<'static> {
    let width = |spans: &[Span]| spans.iter().map(Span::width).sum::<usize>();
    let (left_w, center_w, right_w) = (width(&left), width(&center), width(&right));

    let pad_left = (TITLE_W.saturating_sub(center_w) / 2).saturating_sub(left_w);
    let pad_right = TITLE_W
        .saturating_sub(left_w + pad_left + center_w + right_w);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad_left)));
    spans.extend(center);
    spans.push(Span::raw(" ".repeat(pad_right)));
    spans.extend(right);
    Line::from(spans)
}

// ─────────────────────────────────────────────────────────────
//  Board
// ─────────────────────────────────────────────────────────────

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession) {
    let board = Paragraph::new(render_board(session).into_lines())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

/// Paints the board layers in the order the terminal should show them.
fn render_board(session: &GameSession) -> Canvas {
    let mut canvas = Canvas::new();
    let grid = session.grid();
    let cursor = grid.cursor();
    let select = grid.select();
    let hints = session.mode().shows_hints();

    let white = Style::default().fg(Color::White);
    let yellow = Style::default().fg(Color::Yellow);
    let blue = Style::default().fg(Color::Blue);

    // With nothing selected the hint lines sit under the points; with a
    // selection they come back on top further down.
    if hints && select.is_none() {
        draw_segments(&mut canvas, session.possibilities(), blue);
    }

    draw_segments(&mut canvas, session.segments(), yellow);

    let occupied: Vec<Point> = grid_points().filter(|p| grid.is_occupied(*p)).collect();
    draw_points(&mut canvas, &occupied, cursor, select, 'o', yellow);

    if Some(cursor) != select && !grid.is_occupied(cursor) {
        canvas.put_point(cursor, ' ', white.add_modifier(Modifier::REVERSED));
    }
    if let Some(point) = select
        && !grid.is_occupied(point)
    {
        canvas.put_point(point, ' ', Style::default().fg(Color::Blue).bg(Color::Green));
    }

    // The starting cross keeps its own color over played cells.
    let cross: Vec<Point> = grid_points().filter(|p| Grid::in_frame(*p)).collect();
    draw_points(&mut canvas, &cross, cursor, select, 'o', white);

    if hints {
        if select.is_some() {
            draw_segments(&mut canvas, session.possibilities(), blue);
        }

        let open = open_points(session.possibilities(), grid);
        draw_points(&mut canvas, &open, cursor, select, '*', blue);

        if let Some(point) = select {
            let anchored: Vec<Segment> = session
                .possibilities()
                .iter()
                .filter(|segment| segment.has_endpoint(point))
                .copied()
                .collect();
            let bold_blue = blue.add_modifier(Modifier::BOLD);
            draw_segments(&mut canvas, &anchored, bold_blue);
            let open = open_points(&anchored, grid);
            draw_points(&mut canvas, &open, cursor, select, '*', bold_blue);
        }
    }

    canvas
}

/// Unoccupied points covered by the given segments, deduplicated.
fn open_points(segments: &[Segment], grid: &Grid) -> Vec<Point> {
    let mut points = Vec::new();
    for segment in segments {
        for point in segment.points() {
            if !grid.is_occupied(*point) && !points.contains(point) {
                points.push(*point);
            }
        }
    }
    points
}

fn grid_points() -> impl Iterator<Item = Point> {
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
}

fn draw_points(
    canvas: &mut Canvas,
    points: &[Point],
    cursor: Point,
    select: Option<Point>,
    glyph: char,
    style: Style,
) {
    for point in points {
        let mut style = if Some(*point) == select { style.fg(Color::Green) } else { style };
        if *point == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        canvas.put_point(*point, glyph, style);
    }
}

/// Draws the joints between each segment's consecutive points. Diagonal
/// joints crossing an opposite diagonal in the same set become an `X`.
fn draw_segments(canvas: &mut Canvas, segments: &[Segment], style: Style) {
    for segment in segments {
        for pair in segment.points().windows(2) {
            let (a, b) = (graphic(pair[0]), graphic(pair[1]));
            let (mx, my) = ((a.0 + b.0) / 2, (a.1 + b.1) / 2);
            if a.0 == b.0 {
                canvas.put(mx, my, ':', style);
            } else if a.1 == b.1 {
                canvas.put_str(mx - 1, my, "---", style);
            } else {
                let glyph = if crosses_reverse_diagonal(segments, pair[0], pair[1]) {
                    'X'
                } else if (a.1 < b.1) == (a.0 < b.0) {
                    '\\'
                } else {
                    '/'
                };
                canvas.put(mx, my, glyph, style);
            }
        }
    }
}

/// Whether some segment in the set runs through the diagonal opposite
/// the step from `a` to `b`.
fn crosses_reverse_diagonal(segments: &[Segment], a: Point, b: Point) -> bool {
    let (mut a, mut b) = (a, b);
    if a.x < b.x {
        a.x += 1;
        b.x -= 1;
    } else {
        a.x -= 1;
        b.x += 1;
    }
    segments.iter().any(|segment| segment.contains(a) && segment.contains(b))
}

/// Canvas position of a grid point, row 0 at the top of the board.
fn graphic(point: Point) -> (usize, usize) {
    let x = 3 + CELL_W * point.x;
    let y = 1 + CELL_H * (GRID_SIZE - point.y - 1);
    (x as usize, y as usize)
}

// ─────────────────────────────────────────────────────────────
//  Message bar
// ─────────────────────────────────────────────────────────────

fn draw_message(frame: &mut Frame, area: Rect, message: &Message) {
    let style = match message.kind() {
        MessageKind::Info => Style::default().fg(Color::White),
        MessageKind::Success => Style::default().fg(Color::Green),
        MessageKind::Error => Style::default().fg(Color::Red),
    };
    let bar = Paragraph::new(message.text())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

// ─────────────────────────────────────────────────────────────
//  Character canvas
// ─────────────────────────────────────────────────────────────

/// A fixed grid of styled characters the board is painted onto.
struct Canvas {
    cells: Vec<Vec<(char, Style)>>,
}

impl Canvas {
    fn new() -> Self {
        Self {
            cells: vec![vec![(' ', Style::default()); CANVAS_W]; CANVAS_H],
        }
    }

    fn put(&mut self, x: usize, y: usize, glyph: char, style: Style) {
        if y < CANVAS_H && x < CANVAS_W {
            self.cells[y][x] = (glyph, style);
        }
    }

    fn put_str(&mut self, x: usize, y: usize, text: &str, style: Style) {
        for (i, glyph) in text.chars().enumerate() {
            self.put(x + i, y, glyph, style);
        }
    }

    fn put_point(&mut self, point: Point, glyph: char, style: Style) {
        let (x, y) = graphic(point);
        self.put(x, y, glyph, style);
    }

    /// Collapses each row into spans, grouping runs of equal style.
    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let mut spans = Vec::new();
                let mut style = row.first().map(|cell| cell.1).unwrap_or_default();
                let mut text = String::new();
                for (glyph, cell_style) in row {
                    if cell_style != style {
                        spans.push(Span::styled(std::mem::take(&mut text), style));
                        style = cell_style;
                    }
                    text.push(glyph);
                }
                if !text.is_empty() {
                    spans.push(Span::styled(text, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}
