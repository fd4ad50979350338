//! Greedy autonomous controller: re-plan a shortest path to the food every
//! tick and take its first step.

use std::collections::HashSet;

use rand::Rng;

use super::pathfinder::shortest_path;
use crate::game::{Direction, Grid, Position, Snake};

/// Choose the direction for one tick of an autonomous snake.
///
/// The snake's own body, head included, is the obstacle set. When no path
/// to the food exists the controller falls back to a uniformly random
/// direction, which may well be fatal; a trapped snake has no good move
/// anyway and dies moving rather than stalling the round.
pub fn decide(grid: Grid, snake: &Snake, food: Position, rng: &mut impl Rng) -> Direction {
    let obstacles: HashSet<Position> = snake.body.iter().copied().collect();
    let head = snake.head();

    let path = shortest_path(grid, head, food, &obstacles);

    if let Some(&next) = path.first() {
        // Path cells are grid-adjacent, so the delta is always a unit
        // offset
        if let Some(dir) = Direction::from_delta(next.x - head.x, next.y - head.y) {
            return dir;
        }
    }

    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_heads_straight_for_the_food() {
        let grid = Grid::new(40, 30);
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        let dir = decide(grid, &snake, Position::new(8, 5), &mut rng());

        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn test_first_step_follows_the_shortest_path() {
        let grid = Grid::new(20, 20);
        // Body trails to the right of the head, so the straight-line route
        // is blocked and the path must leave through an open side
        let snake = Snake::new(Position::new(5, 5), Direction::Left, 4);

        let dir = decide(grid, &snake, Position::new(9, 5), &mut rng());

        // Either vertical detour is a legal first step of a shortest path;
        // Left walks away and Right bites the neck
        assert!(dir == Direction::Up || dir == Direction::Down);
    }

    #[test]
    fn test_trapped_snake_still_picks_a_cardinal_direction() {
        let grid = Grid::new(10, 10);
        // Head in the corner, walled off by its own body
        let mut snake = Snake::new(Position::new(0, 0), Direction::Left, 4);
        snake.body = vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(0, 1),
        ];

        let dir = decide(grid, &snake, Position::new(8, 8), &mut rng());

        assert!(Direction::ALL.contains(&dir));
    }

    #[test]
    fn test_never_reverses_when_a_path_exists() {
        let grid = Grid::new(20, 20);
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 3);
        let mut r = rng();

        // The neck at (9, 10) is an obstacle, so no reachable food can
        // produce a Left move
        for food in [
            Position::new(3, 10),
            Position::new(10, 3),
            Position::new(10, 17),
            Position::new(17, 10),
        ] {
            let dir = decide(grid, &snake, food, &mut r);
            assert_ne!(dir, Direction::Left);
        }
    }
}
