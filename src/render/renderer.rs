use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::game::{Grid, Position};
use crate::modes::{MenuItem, Overlay, Scene, SpeedLevel};
use crate::metrics::RunMetrics;

pub const ALIVE_GLYPH: char = 'O';
pub const DEAD_GLYPH: char = '.';
pub const CURSOR_GLYPH: char = 'X';

/// Plain-text board: `-` top and bottom, `|` on the sides, `O` alive, `.` dead
///
/// When `cursor` is given that cell is drawn as `X`.
pub fn board_lines(grid: &Grid, cursor: Option<Position>) -> Vec<String> {
    let border = "-".repeat(grid.width() + 2);
    let mut lines = Vec::with_capacity(grid.height() + 2);
    lines.push(border.clone());

    for (row, cells) in grid.rows().enumerate() {
        let mut line = String::with_capacity(grid.width() + 2);
        line.push('|');
        for (col, cell) in cells.iter().enumerate() {
            let glyph = match cursor {
                Some(pos) if pos == Position::new(row, col) => CURSOR_GLYPH,
                _ if cell.is_alive() => ALIVE_GLYPH,
                _ => DEAD_GLYPH,
            };
            line.push(glyph);
        }
        line.push('|');
        lines.push(line);
    }

    lines.push(border);
    lines
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene<'_>) {
        let board_height = u16::try_from(scene.grid.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),            // Header
                Constraint::Length(board_height), // Board
                Constraint::Min(0),               // Mode panel
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(scene), chunks[0]);
        frame.render_widget(self.render_board(scene), chunks[1]);
        frame.render_widget(self.render_panel(scene), chunks[2]);
    }

    fn render_board(&self, scene: &Scene<'_>) -> Paragraph<'static> {
        let cursor = match scene.overlay {
            Overlay::Editor { cursor } => Some(cursor),
            _ => None,
        };

        let alive = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let dead = Style::default().fg(Color::DarkGray);
        let border = Style::default().fg(Color::White);
        let marker = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);

        let lines: Vec<Line> = board_lines(scene.grid, cursor)
            .into_iter()
            .map(|text| {
                let spans: Vec<Span> = text
                    .chars()
                    .map(|c| {
                        let style = match c {
                            ALIVE_GLYPH => alive,
                            DEAD_GLYPH => dead,
                            CURSOR_GLYPH => marker,
                            _ => border,
                        };
                        Span::styled(c.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
    }

    fn render_header(&self, scene: &Scene<'_>) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(
            format!(" {} ", mode_title(&scene.overlay)),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];

        match scene.overlay {
            Overlay::Simulation { speed, metrics, .. } => {
                spans.extend(simulation_stats(speed, metrics, label, value));
            }
            Overlay::Editor { cursor } => {
                spans.push(Span::raw("    "));
                spans.push(Span::styled("Cursor: ", label));
                spans.push(Span::styled(format!("{}, {}", cursor.row, cursor.col), value));
            }
            _ => {}
        }

        spans.push(Span::raw("    "));
        spans.push(Span::styled("Population: ", label));
        spans.push(Span::styled(scene.grid.population().to_string(), value));

        Paragraph::new(vec![Line::from(spans)])
    }

    fn render_panel(&self, scene: &Scene<'_>) -> Paragraph<'static> {
        let hint = Style::default().fg(Color::Gray);
        let key = Style::default().fg(Color::Cyan);

        let lines = match scene.overlay {
            Overlay::Menu { selected, status } => {
                let mut lines: Vec<Line> = MenuItem::ALL
                    .iter()
                    .map(|&item| menu_line(item, item == selected))
                    .collect();
                lines.push(Line::from(""));
                if let Some(status) = status {
                    lines.push(Line::from(Span::styled(
                        status.to_string(),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                lines.push(Line::from(vec![
                    Span::styled("↑↓", key),
                    Span::styled(" select | ", hint),
                    Span::styled("Enter", key),
                    Span::styled(" confirm", hint),
                ]));
                lines
            }
            Overlay::Simulation {
                finished: Some(message),
                ..
            } => vec![
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled("press any key to continue", hint)),
            ],
            Overlay::Simulation { .. } => vec![Line::from(vec![
                Span::styled("←→", key),
                Span::styled(" speed (← to 0 pauses) | ", hint),
                Span::styled("q", key),
                Span::styled(" back to menu", hint),
            ])],
            Overlay::Editor { .. } => vec![
                Line::from(vec![Span::styled("arrow keys", key), Span::styled(" move cursor", hint)]),
                Line::from(vec![Span::styled("spacebar", key), Span::styled(" change cell", hint)]),
                Line::from(vec![Span::styled("q", key), Span::styled(" exit", hint)]),
            ],
            Overlay::Prompt { input, error } => match error {
                Some(error) => vec![
                    Line::from(Span::styled(
                        error.to_string(),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled("press any key to continue", hint)),
                ],
                None => vec![
                    Line::from(vec![
                        Span::raw("Enter file name: "),
                        Span::styled(
                            format!("{input}_"),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("Enter", key),
                        Span::styled(" load | ", hint),
                        Span::styled("Esc", key),
                        Span::styled(" cancel", hint),
                    ]),
                ],
            },
        };

        Paragraph::new(lines).alignment(Alignment::Left)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_title(overlay: &Overlay<'_>) -> &'static str {
    match overlay {
        Overlay::Menu { .. } => "MENU",
        Overlay::Simulation {
            finished: Some(_), ..
        } => "ENDED",
        Overlay::Simulation { speed, .. } if speed.is_paused() => "PAUSED",
        Overlay::Simulation { .. } => "SIMULATING",
        Overlay::Editor { .. } => "EDIT",
        Overlay::Prompt { .. } => "UPLOAD",
    }
}

fn menu_line(item: MenuItem, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {}", item.label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}", item.label()),
            Style::default().fg(Color::White),
        ))
    }
}

fn simulation_stats(
    speed: SpeedLevel,
    metrics: &RunMetrics,
    label: Style,
    value: Style,
) -> Vec<Span<'static>> {
    vec![
        Span::raw("    "),
        Span::styled("Speed: ", label),
        Span::styled(speed.to_string(), value),
        Span::raw("    "),
        Span::styled("Generation: ", label),
        Span::styled(metrics.generation.to_string(), value),
        Span::raw("    "),
        Span::styled("Peak: ", label),
        Span::styled(metrics.peak_population.to_string(), value),
        Span::raw("    "),
        Span::styled("Time: ", label),
        Span::styled(metrics.format_time(), value),
    ]
}
