use super::action::Direction;

/// A cell coordinate on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by a raw delta
    pub fn offset_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell one step in the given direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset_by(dx, dy)
    }
}

/// Grid dimensions, with cells addressed from (0, 0) to
/// (width - 1, height - 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// The center cell, used as the default spawn point
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// One snake: an ordered list of occupied cells, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Heading applied on the most recent move
    pub direction: Direction,
}

impl Snake {
    /// Create a straight snake of the given length, trailing away from
    /// the head opposite to its heading
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| head.offset_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body segments excluding the head
    pub fn segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check whether a cell is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// True once the head has re-entered the rest of the body
    pub fn self_collided(&self) -> bool {
        self.segments().contains(&self.head())
    }

    /// Advance one cell in `direction`: prepend the new head and drop the
    /// tail unless growing. The whole next state is a function of the
    /// current body, the direction, and the grow flag.
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = self.head().step(direction);
        self.body.insert(0, new_head);
        self.direction = direction;

        if !grow {
            self.body.pop();
        }
    }
}

/// How a snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the grid
    Boundary,
    /// Head re-entered the snake's own body
    SelfCollision,
}
