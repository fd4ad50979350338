use std::collections::VecDeque;

use rand::rngs::ThreadRng;

use super::action::Direction;
use super::config::GameConfig;
use super::engine::{Collision, Control, Player, Round};
use super::state::{Grid, Position, Snake};
use crate::ai;

/// The three ways a match can be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One keyboard-controlled snake
    Human,
    /// Keyboard-controlled snake against the pathfinding snake
    Versus,
    /// The pathfinding snake on its own
    Auto,
}

/// Events the presentation layer feeds into the match.
///
/// Events are queued and drained once per tick; several direction intents
/// in the same tick resolve as last-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchInput {
    Turn(Direction),
    Select(GameMode),
    Restart,
}

/// Match lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SelectingMode,
    Running,
    GameOver,
}

/// One match: the phase machine plus the state of the running round.
///
/// The match owns all game state. The caller owns the clock and calls
/// [`Match::tick`] at the fixed game rate; every call performs exactly one
/// state transition.
pub struct Match {
    config: GameConfig,
    phase: Phase,
    mode: Option<GameMode>,
    round: Option<Round>,
    loss: Option<Collision>,
    queue: VecDeque<MatchInput>,
    rng: ThreadRng,
}

impl Match {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::SelectingMode,
            mode: None,
            round: None,
            loss: None,
            queue: VecDeque::new(),
            rng: rand::thread_rng(),
        }
    }

    /// Begin a round in the given mode
    pub fn start(&mut self, mode: GameMode) {
        let grid = Grid::new(self.config.grid_width, self.config.grid_height);
        let length = self.config.initial_snake_length;

        let players = match mode {
            GameMode::Human => vec![Player::new(
                Snake::new(grid.center(), Direction::Right, length),
                Control::Human,
            )],
            GameMode::Auto => vec![Player::new(
                Snake::new(grid.center(), Direction::Right, length),
                Control::Auto,
            )],
            GameMode::Versus => {
                // Spawn the two snakes on separate rows so neither starts
                // on top of the other
                let x = (grid.width / 2) as i32;
                let upper = Position::new(x, (grid.height / 3) as i32);
                let lower = Position::new(x, (2 * grid.height / 3) as i32);
                vec![
                    Player::new(Snake::new(upper, Direction::Right, length), Control::Human),
                    Player::new(Snake::new(lower, Direction::Right, length), Control::Auto),
                ]
            }
        };

        self.round = Some(Round::new(grid, players, &mut self.rng));
        self.mode = Some(mode);
        self.loss = None;
        self.phase = Phase::Running;
    }

    /// Queue an input event for the next tick
    pub fn handle_input(&mut self, input: MatchInput) {
        self.queue.push_back(input);
    }

    /// Return to mode selection after a finished round
    pub fn restart(&mut self) {
        if self.phase == Phase::GameOver {
            self.phase = Phase::SelectingMode;
            self.mode = None;
            self.round = None;
            self.loss = None;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The collision that ended the last round
    pub fn loss(&self) -> Option<Collision> {
        self.loss
    }

    /// Run one state transition: drain the input queue, then advance the
    /// phase machine
    pub fn tick(&mut self) {
        match self.phase {
            Phase::SelectingMode => {
                let mut selected = None;
                for input in self.queue.drain(..) {
                    if let MatchInput::Select(mode) = input {
                        selected = Some(mode);
                    }
                }
                if let Some(mode) = selected {
                    self.start(mode);
                }
            }
            Phase::Running => self.tick_round(),
            Phase::GameOver => {
                let restart = self.queue.drain(..).any(|i| i == MatchInput::Restart);
                if restart {
                    self.restart();
                }
            }
        }
    }

    fn tick_round(&mut self) {
        // Last direction intent wins, before the no-reverse rule applies
        let mut turn = None;
        for input in self.queue.drain(..) {
            if let MatchInput::Turn(dir) = input {
                turn = Some(dir);
            }
        }

        let Some(round) = self.round.as_mut() else {
            return;
        };

        let grid = round.grid;
        let food = round.food;
        let rng = &mut self.rng;

        let directions: Vec<Direction> = round
            .players
            .iter()
            .map(|player| match player.control {
                Control::Human => resolve_turn(player.snake.direction, turn),
                Control::Auto => ai::decide(grid, &player.snake, food, &mut *rng),
            })
            .collect();

        let report = round.advance(&directions, rng);

        if let Some(collision) = report.collision {
            self.loss = Some(collision);
            self.phase = Phase::GameOver;
        }
    }
}

/// Apply a turn intent to the current heading. A reversal into the neck is
/// rejected and the previous heading kept.
fn resolve_turn(current: Direction, turn: Option<Direction>) -> Direction {
    match turn {
        Some(dir) if !current.is_opposite(dir) => dir,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::CollisionKind;

    fn new_match() -> Match {
        Match::new(GameConfig::new(12, 12))
    }

    #[test]
    fn test_starts_in_mode_selection() {
        let m = new_match();
        assert_eq!(m.phase(), Phase::SelectingMode);
        assert!(m.round().is_none());
        assert!(!m.is_game_over());
    }

    #[test]
    fn test_selection_event_starts_a_round() {
        let mut m = new_match();
        m.handle_input(MatchInput::Select(GameMode::Human));
        m.tick();

        assert_eq!(m.phase(), Phase::Running);
        assert_eq!(m.mode(), Some(GameMode::Human));
        let round = m.round().expect("round should exist");
        assert_eq!(round.players.len(), 1);
        assert_eq!(round.players[0].snake.len(), 3);
    }

    #[test]
    fn test_versus_mode_fields_two_snakes() {
        let mut m = new_match();
        m.start(GameMode::Versus);

        let round = m.round().expect("round should exist");
        assert_eq!(round.players.len(), 2);
        assert_eq!(round.players[0].control, Control::Human);
        assert_eq!(round.players[1].control, Control::Auto);
        assert_ne!(round.players[0].snake.head(), round.players[1].snake.head());
    }

    #[test]
    fn test_spawns_fit_on_the_smallest_valid_grid() {
        use crate::game::config::MIN_GRID_SIZE;

        let config = GameConfig::new(MIN_GRID_SIZE, MIN_GRID_SIZE);
        assert!(config.validate().is_ok());

        for mode in [GameMode::Human, GameMode::Versus, GameMode::Auto] {
            let mut m = Match::new(config.clone());
            m.start(mode);

            let round = m.round().expect("round should exist");
            for player in &round.players {
                for &cell in &player.snake.body {
                    assert!(round.grid.contains(cell), "{:?} spawned at {:?}", mode, cell);
                }
            }
        }
    }

    #[test]
    fn test_direction_events_last_wins() {
        let mut m = new_match();
        m.start(GameMode::Human);
        let head = m.round().unwrap().players[0].snake.head();

        m.handle_input(MatchInput::Turn(Direction::Up));
        m.handle_input(MatchInput::Turn(Direction::Down));
        m.tick();

        let snake = &m.round().unwrap().players[0].snake;
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head(), head.step(Direction::Down));
    }

    #[test]
    fn test_reverse_intent_keeps_heading() {
        let mut m = new_match();
        m.start(GameMode::Human);
        let head = m.round().unwrap().players[0].snake.head();

        // Spawned heading Right; a Left intent must be rejected
        m.handle_input(MatchInput::Turn(Direction::Left));
        m.tick();

        let snake = &m.round().unwrap().players[0].snake;
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.head(), head.step(Direction::Right));
    }

    #[test]
    fn test_wall_ends_the_match() {
        let mut m = new_match();
        m.start(GameMode::Human);

        // Heading Right from the center of a 12-wide grid, the wall is a
        // handful of ticks away
        for _ in 0..12 {
            m.tick();
            if m.is_game_over() {
                break;
            }
        }

        assert!(m.is_game_over());
        let loss = m.loss().expect("loss should be recorded");
        assert_eq!(loss.kind, CollisionKind::Boundary);
        assert_eq!(loss.player, 0);
        // Final board state stays visible after the round ends
        assert!(m.round().is_some());
    }

    #[test]
    fn test_restart_returns_to_mode_selection() {
        let mut m = new_match();
        m.start(GameMode::Human);
        for _ in 0..12 {
            m.tick();
        }
        assert!(m.is_game_over());

        m.handle_input(MatchInput::Restart);
        m.tick();

        assert_eq!(m.phase(), Phase::SelectingMode);
        assert!(m.round().is_none());
        assert!(m.loss().is_none());
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut m = new_match();
        m.start(GameMode::Human);
        m.handle_input(MatchInput::Restart);
        m.tick();
        assert_eq!(m.phase(), Phase::Running);
    }

    #[test]
    fn test_auto_round_runs_without_input() {
        let mut m = new_match();
        m.start(GameMode::Auto);

        // The controller steers toward food every tick; the round either
        // keeps running or ends in a recorded loss, with no input at all
        for _ in 0..200 {
            m.tick();
            if m.is_game_over() {
                break;
            }
        }

        if m.is_game_over() {
            assert!(m.loss().is_some());
        } else {
            assert_eq!(m.phase(), Phase::Running);
        }
    }
}
