/// One tag per play-field coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Grass,
    Apple,
    /// Hazard food: shrinks the snake and costs a point.
    Chocolate,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// Sentinel for food that has not been placed yet.
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned unit movement vector: one axis zero, the other ±1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading {
    pub dx: i32,
    pub dy: i32,
}

impl Heading {
    pub const UP: Heading = Heading { dx: 0, dy: -1 };
    pub const DOWN: Heading = Heading { dx: 0, dy: 1 };
    pub const LEFT: Heading = Heading { dx: -1, dy: 0 };
    pub const RIGHT: Heading = Heading { dx: 1, dy: 0 };

    pub fn is_opposite(&self, other: &Heading) -> bool {
        self.dx == -other.dx && self.dy == -other.dy
    }
}

/// Directional input intent from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn heading(self) -> Heading {
        match self {
            Direction::Up => Heading::UP,
            Direction::Down => Heading::DOWN,
            Direction::Left => Heading::LEFT,
            Direction::Right => Heading::RIGHT,
        }
    }
}

/// A snake body position in continuous grid units. The occupied cell is the
/// truncation of both coordinates, matching the integer casts the movement
/// code uses everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x: f32,
    pub y: f32,
}

impl Segment {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn cell(&self) -> GridPos {
        GridPos::new(self.x as i32, self.y as i32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodKind {
    Apple,
    Chocolate,
}

impl FoodKind {
    pub fn cell_kind(self) -> CellKind {
        match self {
            FoodKind::Apple => CellKind::Apple,
            FoodKind::Chocolate => CellKind::Chocolate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    Quit,
    Restart,
}

/// Why the last round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartReason {
    OutOfBounds,
    WallCollision,
    SelfCollision,
    Starved,
}

/// Per-frame input intents consumed from the presentation layer. Pointer
/// clicks arrive already translated into grid coordinates by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Direction),
    TogglePause,
    PaintWall(GridPos),
    EraseWall(GridPos),
    ClearWalls,
    Quit,
}
