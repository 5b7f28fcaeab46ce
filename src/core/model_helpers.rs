use std::collections::HashSet;
use std::fmt;

use crate::core::{BoundedGrid, Cell, Direction, Level, MoveResult, Position};

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub fn offset(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset in grid coordinates; y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl Level {
    pub(crate) fn new(
        grid: BoundedGrid<Cell>,
        player: Position,
        boxes: HashSet<Position>,
        targets: HashSet<Position>,
    ) -> Level {
        Level {
            grid,
            boxes,
            targets,
            player,
        }
    }

    pub fn width(&self) -> i32 {
        self.grid.size().width
    }

    pub fn height(&self) -> i32 {
        self.grid.size().height
    }

    pub fn player_position(&self) -> Position {
        self.player
    }

    pub fn is_inside(&self, position: Position) -> bool {
        self.grid.contains(&position)
    }

    /// Static tile type at `position`. Querying outside the grid is a caller
    /// contract violation and panics.
    pub fn cell(&self, position: Position) -> Cell {
        assert!(
            self.is_inside(position),
            "cell query outside the grid: {position}"
        );
        self.grid[&position]
    }

    pub fn has_box(&self, position: Position) -> bool {
        self.boxes.contains(&position)
    }

    pub fn is_target(&self, position: Position) -> bool {
        self.targets.contains(&position)
    }

    pub fn has_box_on_target(&self, position: Position) -> bool {
        self.has_box(position) && self.is_target(position)
    }

    /// True once the box set equals the target set. Box count matches target
    /// count from construction onward, so this is "every target is covered".
    pub fn is_completed(&self) -> bool {
        self.boxes == self.targets
    }

    pub fn count_boxes_on_targets(&self) -> usize {
        self.targets.iter().filter(|t| self.boxes.contains(t)).count()
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn boxes(&self) -> impl Iterator<Item = Position> + '_ {
        self.boxes.iter().copied()
    }

    pub fn targets(&self) -> impl Iterator<Item = Position> + '_ {
        self.targets.iter().copied()
    }
}

impl MoveResult {
    pub fn changed_state(self) -> bool {
        self != MoveResult::None
    }
}

// Renders the level back to the text format it was parsed from, with the
// player and boxes overlaid on the static grid.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let pos = Position { x, y };
                let has_player = pos == self.player;
                let has_box = self.boxes.contains(&pos);
                let ch = match self.grid[&pos] {
                    Cell::Wall => '#',
                    Cell::Empty => {
                        if has_player {
                            '@'
                        } else if has_box {
                            '$'
                        } else {
                            ' '
                        }
                    }
                    Cell::Target => {
                        if has_player {
                            '+'
                        } else if has_box {
                            '*'
                        } else {
                            '.'
                        }
                    }
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
