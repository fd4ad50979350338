use super::action::Direction;
use super::state::{CollisionKind, Grid, Position, Snake};
use rand::Rng;

/// Who drives a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keyboard input
    Human,
    /// Pathfinding controller
    Auto,
}

/// One competing side: a snake plus its score
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub snake: Snake,
    pub score: u32,
    pub control: Control,
}

impl Player {
    pub fn new(snake: Snake, control: Control) -> Self {
        Self {
            snake,
            score: 0,
            control,
        }
    }
}

/// A fatal collision, attributed to the player that moved into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub player: usize,
    pub kind: CollisionKind,
}

/// What happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// First fatal collision found, if any; ends the whole round
    pub collision: Option<Collision>,
    /// Indices of players whose head landed on the food this tick
    pub ate: Vec<usize>,
}

/// Running-phase state: the grid, every active snake, and the food.
///
/// The round applies already-resolved directions; it does not know or care
/// whether a direction came from the keyboard or the pathfinder.
#[derive(Debug, Clone)]
pub struct Round {
    pub grid: Grid,
    pub players: Vec<Player>,
    pub food: Position,
}

impl Round {
    /// Start a round with the given players and a freshly sampled food cell
    pub fn new(grid: Grid, players: Vec<Player>, rng: &mut impl Rng) -> Self {
        let food = sample_food(grid, &players, rng);
        Self {
            grid,
            players,
            food,
        }
    }

    /// Check whether any snake occupies the given cell
    pub fn occupied(&self, pos: Position) -> bool {
        self.players.iter().any(|p| p.snake.occupies(pos))
    }

    /// Advance every snake one cell and evaluate the rules.
    ///
    /// Growth is decided before moving: a snake grows exactly when its new
    /// head will land on the current food. Collisions are checked after
    /// moving, in player order; the first one found ends the round and
    /// skips food scoring. When several heads reach the food on the same
    /// tick, every one of them is credited and the food relocates once.
    pub fn advance(&mut self, directions: &[Direction], rng: &mut impl Rng) -> TickReport {
        assert_eq!(
            directions.len(),
            self.players.len(),
            "one direction per player"
        );

        let grow: Vec<bool> = self
            .players
            .iter()
            .zip(directions)
            .map(|(p, dir)| p.snake.head().step(*dir) == self.food)
            .collect();

        for ((player, dir), grow) in self.players.iter_mut().zip(directions).zip(&grow) {
            player.snake.advance(*dir, *grow);
        }

        for (i, player) in self.players.iter().enumerate() {
            if !self.grid.contains(player.snake.head()) {
                return TickReport {
                    collision: Some(Collision {
                        player: i,
                        kind: CollisionKind::Boundary,
                    }),
                    ate: Vec::new(),
                };
            }
            if player.snake.self_collided() {
                return TickReport {
                    collision: Some(Collision {
                        player: i,
                        kind: CollisionKind::SelfCollision,
                    }),
                    ate: Vec::new(),
                };
            }
        }

        let ate: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.snake.head() == self.food)
            .map(|(i, _)| i)
            .collect();

        if !ate.is_empty() {
            for &i in &ate {
                self.players[i].score += 1;
            }
            self.food = sample_food(self.grid, &self.players, rng);
        }

        TickReport {
            collision: None,
            ate,
        }
    }
}

/// Sample a food cell uniformly from the cells no snake occupies,
/// by rejection
fn sample_food(grid: Grid, players: &[Player], rng: &mut impl Rng) -> Position {
    loop {
        let pos = Position::new(
            rng.gen_range(0..grid.width) as i32,
            rng.gen_range(0..grid.height) as i32,
        );

        if !players.iter().any(|p| p.snake.occupies(pos)) {
            return pos;
        }
    }
}
