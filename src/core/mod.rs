mod bounded_grid;
mod bounds;
mod loader;
mod model_helpers;
mod models;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::GridBounds;
pub use loader::{LevelError, load_from_file, load_from_lines, load_from_str};
pub use models::{Cell, Direction, Level, MoveResult, Position};
