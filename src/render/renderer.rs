use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{CollisionKind, Control, GameMode, Match, Phase, Player, Position, Round};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &Match, stats: &SessionStats) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        let header = self.render_stats(session, stats);
        frame.render_widget(header, chunks[0]);

        // Center the playfield horizontally
        let game_area = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(chunks[1])[1];

        match session.phase() {
            Phase::SelectingMode => {
                frame.render_widget(self.render_menu(), game_area);
            }
            Phase::Running => {
                if let Some(round) = session.round() {
                    frame.render_widget(self.render_grid(round), game_area);
                }
            }
            Phase::GameOver => {
                frame.render_widget(self.render_game_over(session), game_area);
            }
        }

        let footer = self.render_controls(session.phase());
        frame.render_widget(footer, chunks[2]);
    }

    fn render_menu(&self) -> Paragraph<'_> {
        let entry = |key: &'static str, label: &'static str| {
            Line::from(vec![
                Span::styled(key, Style::default().fg(Color::Yellow)),
                Span::raw(label),
            ])
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SELECT GAME MODE",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            entry("1", ". Human play"),
            entry("2", ". Human vs computer"),
            entry("3", ". Computer play"),
            Line::from(""),
            entry("Q", ". Quit"),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Snake "),
        )
    }

    fn render_grid(&self, round: &Round) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..round.grid.height {
            let mut spans = Vec::new();

            for x in 0..round.grid.width {
                let pos = Position::new(x as i32, y as i32);
                spans.push(self.cell_span(round, pos));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn cell_span(&self, round: &Round, pos: Position) -> Span<'static> {
        for player in &round.players {
            let (head_color, body_color) = match player.control {
                Control::Human => (Color::Cyan, Color::Green),
                Control::Auto => (Color::LightBlue, Color::Blue),
            };

            if pos == player.snake.head() {
                return Span::styled(
                    "■ ",
                    Style::default()
                        .fg(head_color)
                        .add_modifier(Modifier::BOLD),
                );
            }
            if player.snake.occupies(pos) {
                return Span::styled("□ ", Style::default().fg(body_color));
            }
        }

        if pos == round.food {
            return Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
        }

        Span::styled(". ", Style::default().fg(Color::DarkGray))
    }

    fn render_stats(&self, session: &Match, stats: &SessionStats) -> Paragraph<'_> {
        let mut spans = Vec::new();

        if let Some(round) = session.round() {
            for (i, player) in round.players.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("    "));
                }
                spans.push(Span::styled(
                    format!("{}: ", player_label(player)),
                    Style::default().fg(Color::Yellow),
                ));
                spans.push(Span::styled(
                    player.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            spans.push(Span::raw("    "));
        }

        spans.push(Span::styled("Time: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            stats.format_time(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("    "));
        spans.push(Span::styled("Best: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            stats.best_score.to_string(),
            Style::default().fg(Color::White),
        ));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(&self, session: &Match) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(round) = session.round() {
            if let Some(loss) = session.loss() {
                let cause = match loss.kind {
                    CollisionKind::Boundary => "hit the wall",
                    CollisionKind::SelfCollision => "ran into itself",
                };
                text.push(Line::from(Span::styled(
                    format!("{} {}", player_label(&round.players[loss.player]), cause),
                    Style::default().fg(Color::Gray),
                )));
                text.push(Line::from(""));
            }

            for player in &round.players {
                text.push(Line::from(vec![
                    Span::styled(
                        format!("{} score: ", player_label(player)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        player.score.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }

            if session.mode() == Some(GameMode::Versus) {
                text.push(Line::from(""));
                text.push(Line::from(Span::styled(
                    winner_line(round),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }

        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" for the menu or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let text = match phase {
            Phase::SelectingMode => Line::from(vec![
                Span::styled("1-3", Style::default().fg(Color::Cyan)),
                Span::raw(" to pick a mode | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::Running => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::GameOver => Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" for the menu | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![text]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn player_label(player: &Player) -> &'static str {
    match player.control {
        Control::Human => "Player",
        Control::Auto => "Computer",
    }
}

/// Winner line for the versus game-over screen; equal scores are a draw
fn winner_line(round: &Round) -> String {
    let best = round.players.iter().map(|p| p.score).max().unwrap_or(0);
    let leaders: Vec<&Player> = round
        .players
        .iter()
        .filter(|p| p.score == best)
        .collect();

    if leaders.len() == 1 {
        format!("Winner: {}", player_label(leaders[0]))
    } else {
        "Draw".to_string()
    }
}
