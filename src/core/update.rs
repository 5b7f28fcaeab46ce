use crate::core::{Cell, Direction, Level, MoveResult};

impl Level {
    /// Attempts to move the player one cell in `direction`, pushing a box if
    /// one occupies the destination. A rejected move or push leaves the level
    /// untouched; a push never leaves the player behind.
    pub fn try_move(&mut self, direction: Direction) -> MoveResult {
        let destination = self.player.offset(direction);

        if !self.is_inside(destination) {
            return MoveResult::None;
        }

        if self.cell(destination) == Cell::Wall {
            return MoveResult::None;
        }

        if self.has_box(destination) {
            let beyond = destination.offset(direction);

            if !self.is_inside(beyond)
                || self.cell(beyond) == Cell::Wall
                || self.has_box(beyond)
            {
                return MoveResult::None;
            }

            self.boxes.remove(&destination);
            self.boxes.insert(beyond);

            self.player = destination;
            return MoveResult::PushedBox;
        }

        self.player = destination;
        MoveResult::Moved
    }
}
