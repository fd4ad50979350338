//! Best-first shortest-path search over the game grid.
//!
//! Plain A* on the 4-connected grid with unit edge costs and the Manhattan
//! distance heuristic, which is admissible and consistent here, so the
//! first time the goal is popped the path is optimal. Ties between equal
//! f-scores break FIFO via a discovery sequence number, making the chosen
//! path deterministic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::game::{Direction, Grid, Position};

/// Manhattan distance between two cells
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Frontier entry, ordered so the heap pops the lowest f-score first and
/// the earliest-discovered cell among equal f-scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    f: u32,
    g: u32,
    seq: u64,
    cell: Position,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest path from `start` to `goal`, avoiding `obstacles` and
/// cells outside the grid.
///
/// The returned path excludes `start` and ends with `goal`; it is empty
/// when the goal is unreachable. The goal cell itself must not be in the
/// obstacle set.
pub fn shortest_path(
    grid: Grid,
    start: Position,
    goal: Position,
    obstacles: &HashSet<Position>,
) -> Vec<Position> {
    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_score: HashMap<Position, u32> = HashMap::new();
    let mut seq = 0u64;

    g_score.insert(start, 0);
    open.push(Frontier {
        f: manhattan(start, goal),
        g: 0,
        seq,
        cell: start,
    });

    while let Some(Frontier { g, cell, .. }) = open.pop() {
        if cell == goal {
            return reconstruct(&came_from, start, goal);
        }

        // Stale entry: this cell was already reached more cheaply
        if g > g_score.get(&cell).copied().unwrap_or(u32::MAX) {
            continue;
        }

        for dir in Direction::ALL {
            let neighbor = cell.step(dir);

            if !grid.contains(neighbor) || obstacles.contains(&neighbor) {
                continue;
            }

            let tentative_g = g + 1;
            if tentative_g < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                came_from.insert(neighbor, cell);
                g_score.insert(neighbor, tentative_g);
                seq += 1;
                open.push(Frontier {
                    f: tentative_g + manhattan(neighbor, goal),
                    g: tentative_g,
                    seq,
                    cell: neighbor,
                });
            }
        }
    }

    Vec::new()
}

/// Walk predecessor links back from the goal and reverse
fn reconstruct(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = goal;

    while current != start {
        path.push(current);
        match came_from.get(&current) {
            Some(&prev) => current = prev,
            None => break,
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn cells(coords: &[(i32, i32)]) -> HashSet<Position> {
        coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    /// Brute-force shortest-path distance for cross-checking
    fn bfs_distance(
        grid: Grid,
        start: Position,
        goal: Position,
        obstacles: &HashSet<Position>,
    ) -> Option<usize> {
        let mut queue = VecDeque::from([(start, 0)]);
        let mut seen = HashSet::from([start]);

        while let Some((cell, dist)) = queue.pop_front() {
            if cell == goal {
                return Some(dist);
            }
            for dir in Direction::ALL {
                let next = cell.step(dir);
                if grid.contains(next) && !obstacles.contains(&next) && seen.insert(next) {
                    queue.push_back((next, dist + 1));
                }
            }
        }

        None
    }

    #[test]
    fn test_straight_line_path() {
        let grid = Grid::new(40, 30);
        let body = cells(&[(5, 5), (4, 5), (3, 5)]);

        let path = shortest_path(grid, Position::new(5, 5), Position::new(8, 5), &body);

        assert_eq!(
            path,
            vec![
                Position::new(6, 5),
                Position::new(7, 5),
                Position::new(8, 5)
            ]
        );
    }

    #[test]
    fn test_path_routes_around_obstacles() {
        let grid = Grid::new(10, 10);
        // A vertical wall with a single gap at (5, 8)
        let wall: HashSet<Position> = (0..8).map(|y| Position::new(5, y)).collect();

        let start = Position::new(2, 2);
        let goal = Position::new(8, 2);
        let path = shortest_path(grid, start, goal, &wall);

        assert!(!path.is_empty());
        assert_eq!(*path.last().unwrap(), goal);
        assert_eq!(
            path.len(),
            bfs_distance(grid, start, goal, &wall).unwrap()
        );
        assert!(path.iter().all(|c| !wall.contains(c)));
    }

    #[test]
    fn test_path_steps_are_grid_adjacent() {
        let grid = Grid::new(10, 10);
        let wall = cells(&[(3, 3), (3, 4), (3, 5), (4, 3), (5, 3)]);
        let start = Position::new(2, 4);

        let path = shortest_path(grid, start, Position::new(7, 7), &wall);

        let mut prev = start;
        for &cell in &path {
            assert_eq!(manhattan(prev, cell), 1);
            prev = cell;
        }
    }

    #[test]
    fn test_unreachable_goal_returns_empty() {
        let grid = Grid::new(10, 10);
        // Box in the start cell completely
        let walls = cells(&[(4, 5), (6, 5), (5, 4), (5, 6)]);

        let path = shortest_path(grid, Position::new(5, 5), Position::new(9, 9), &walls);

        assert!(path.is_empty());
    }

    #[test]
    fn test_matches_bfs_on_every_reachable_goal() {
        let grid = Grid::new(7, 7);
        let walls = cells(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (1, 4), (2, 4)]);
        let start = Position::new(0, 0);

        for x in 0..7 {
            for y in 0..7 {
                let goal = Position::new(x, y);
                if goal == start || walls.contains(&goal) {
                    continue;
                }

                let path = shortest_path(grid, start, goal, &walls);
                match bfs_distance(grid, start, goal, &walls) {
                    Some(dist) => assert_eq!(path.len(), dist, "goal {:?}", goal),
                    None => assert!(path.is_empty(), "goal {:?}", goal),
                }
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let grid = Grid::new(9, 9);
        let walls = cells(&[(4, 4), (4, 5), (5, 4)]);
        let start = Position::new(0, 0);
        let goal = Position::new(8, 8);

        let first = shortest_path(grid, start, goal, &walls);
        let second = shortest_path(grid, start, goal, &walls);

        assert_eq!(first, second);
    }
}
