use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use super::layout::{BoardSize, CONTROLS_HEIGHT, HEADER_HEIGHT, centered};
use crate::game::{GameState, Point};

const FOOD: Color = Color::Rgb(0xcc, 0x3b, 0x3b);
const SNAKE: Color = Color::Rgb(0x1e, 0x8f, 0x54);
const SNAKE_HEAD: Color = Color::Rgb(0x34, 0xd1, 0x7c);
const PANEL: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
const BORDER: Color = Color::Rgb(0x4a, 0x4a, 0x4a);
const BORDER_ALERT: Color = Color::Rgb(0xd1, 0x78, 0x34);
const KEY: Color = Color::Rgb(0xf2, 0xf2, 0xf2);
const HINT: Color = Color::Rgb(0x8b, 0x90, 0x9a);

const DIALOG_WIDTH: u16 = 42;
const DIALOG_HEIGHT: u16 = 7;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Food,
    Head,
    Body,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame. Before the first start a welcome dialog covers the board.
    pub fn render(&self, frame: &mut Frame, state: &GameState, has_started: bool) {
        let board = BoardSize::new(state.width, state.height);
        let area = frame.area();
        let group = centered(
            area,
            area.width,
            HEADER_HEIGHT
                .saturating_add(board.pixel_height())
                .saturating_add(CONTROLS_HEIGHT),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(board.pixel_height()),
                Constraint::Length(CONTROLS_HEIGHT),
            ])
            .split(group);

        frame.render_widget(self.render_header(state), chunks[0]);
        let board_area = centered(chunks[1], board.pixel_width(), board.pixel_height());
        frame.render_widget(self.render_board(state), board_area);
        frame.render_widget(self.render_controls(), chunks[2]);

        if let Some(dialog) = self.render_dialog(state, has_started) {
            let dialog_area = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
            frame.render_widget(Clear, dialog_area);
            frame.render_widget(dialog, dialog_area);
        }
    }

    fn render_header(&self, state: &GameState) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("score ", Style::default().fg(HINT)),
                Span::styled(
                    state.score.to_string(),
                    Style::default().fg(KEY).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'static> {
        let mut grid = vec![vec![Cell::Empty; state.width]; state.height];
        let mut paint = |point: Point, cell: Cell| {
            if state.is_in_bounds(point) {
                grid[point.y as usize][point.x as usize] = cell;
            }
        };

        if let Some(food) = state.food {
            paint(food, Cell::Food);
        }
        for (index, segment) in state.snake.iter().enumerate() {
            paint(*segment, if index == 0 { Cell::Head } else { Cell::Body });
        }

        let lines: Vec<Line> = grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Cell::Empty => Span::raw("  "),
                        Cell::Food => Span::styled("  ", Style::default().bg(FOOD)),
                        Cell::Head => Span::styled("  ", Style::default().bg(SNAKE_HEAD)),
                        Cell::Body => Span::styled("  ", Style::default().bg(SNAKE)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let border = if state.game_over { BORDER_ALERT } else { BORDER };
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let key = Style::default().fg(KEY);
        let hint = Style::default().fg(HINT);
        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Arrows/WASD", key),
                Span::styled(" move   ", hint),
                Span::styled("P/Space", key),
                Span::styled(" pause   ", hint),
                Span::styled("R", key),
                Span::styled(" restart   ", hint),
                Span::styled("Q", key),
                Span::styled(" quit", hint),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_dialog(&self, state: &GameState, has_started: bool) -> Option<Paragraph<'static>> {
        let text = if !has_started {
            vec![
                Line::from("Welcome to Snake"),
                Line::from(""),
                Line::from("Press Space or an arrow key to start"),
            ]
        } else if state.game_over {
            let headline = if state.won { "You Win!" } else { "Game Over" };
            vec![
                Line::from(Span::styled(
                    headline,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("Score: {}", state.score)),
                Line::from("Press R to restart"),
            ]
        } else {
            return None;
        };

        Some(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_ALERT))
                    .style(Style::default().bg(PANEL))
                    .padding(Padding::horizontal(1)),
            ),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction as Heading;
    use ratatui::{Terminal, backend::TestBackend};

    fn state(game_over: bool, won: bool) -> GameState {
        GameState {
            width: 12,
            height: 8,
            snake: vec![Point::new(6, 4), Point::new(5, 4), Point::new(4, 4)],
            direction: Heading::Right,
            next_direction: Heading::Right,
            food: if won { None } else { Some(Point::new(1, 1)) },
            score: 7,
            game_over,
            paused: false,
            won,
        }
    }

    fn draw(state: &GameState, has_started: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, state, has_started))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_score() {
        let screen = draw(&state(false, false), true);
        assert!(screen.contains("score 7"));
        assert!(screen.contains("restart"));
        assert!(!screen.contains("Game Over"));
    }

    #[test]
    fn test_welcome_dialog_before_start() {
        let screen = draw(&state(false, false), false);
        assert!(screen.contains("Welcome to Snake"));
    }

    #[test]
    fn test_game_over_dialog() {
        let screen = draw(&state(true, false), true);
        assert!(screen.contains("Game Over"));
        assert!(screen.contains("Score: 7"));
    }

    #[test]
    fn test_win_dialog() {
        let screen = draw(&state(true, true), true);
        assert!(screen.contains("You Win!"));
    }

    #[test]
    fn test_board_paints_snake_and_food() {
        let game = state(false, false);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &game, true))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let backgrounds: Vec<Color> = buffer.content.iter().map(|cell| cell.bg).collect();
        assert!(backgrounds.contains(&SNAKE_HEAD));
        assert!(backgrounds.contains(&SNAKE));
        assert!(backgrounds.contains(&FOOD));
    }
}
