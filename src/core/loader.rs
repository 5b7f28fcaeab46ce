use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::{BoundedGrid, Cell, Level, Position};

/// Fatal level-format errors. A failed parse never yields a partial level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level text is empty")]
    Empty,
    #[error("player start not found")]
    PlayerNotFound,
    #[error("more than one player start: {first} and {second}")]
    MultiplePlayers { first: Position, second: Position },
    #[error("level has no boxes")]
    NoBoxes,
    #[error("box count {boxes} does not match target count {targets}")]
    CountMismatch { boxes: usize, targets: usize },
    #[error("failed to read level file: {0}")]
    Io(#[from] io::Error),
}

/// Parses a level from row-oriented text lines, top to bottom.
///
/// Grid width is the longest line; shorter lines are padded with floor on the
/// right, so ragged input is fine. Cell typing and player/box/target
/// bookkeeping are independent per-character effects (`*` marks a target cell
/// AND records a box there), and validation runs only after the full scan.
pub fn load_from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Level, LevelError> {
    if lines.is_empty() {
        return Err(LevelError::Empty);
    }

    let height = lines.len();
    let width = lines.iter().map(|line| line.as_ref().len()).max().unwrap_or(0);

    let mut grid = BoundedGrid::new_with_size(width as i32, height as i32, Cell::Empty);
    let mut boxes: Vec<Position> = Vec::new();
    let mut targets: Vec<Position> = Vec::new();
    let mut player: Option<Position> = None;

    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.as_ref().chars().enumerate() {
            let position = Position::new(x as i32, y as i32);
            let cell = match ch {
                '#' => Cell::Wall,
                '.' => {
                    targets.push(position);
                    Cell::Target
                }
                '$' => {
                    boxes.push(position);
                    Cell::Empty
                }
                '*' => {
                    targets.push(position);
                    boxes.push(position);
                    Cell::Target
                }
                '@' => {
                    record_player(&mut player, position)?;
                    Cell::Empty
                }
                '+' => {
                    record_player(&mut player, position)?;
                    targets.push(position);
                    Cell::Target
                }
                _ => Cell::Empty,
            };
            grid[&position] = cell;
        }
    }

    let player = player.ok_or(LevelError::PlayerNotFound)?;

    if boxes.is_empty() {
        return Err(LevelError::NoBoxes);
    }

    if boxes.len() != targets.len() {
        return Err(LevelError::CountMismatch {
            boxes: boxes.len(),
            targets: targets.len(),
        });
    }

    debug!(
        width,
        height,
        boxes = boxes.len(),
        "parsed level"
    );

    let boxes: HashSet<Position> = boxes.into_iter().collect();
    let targets: HashSet<Position> = targets.into_iter().collect();

    Ok(Level::new(grid, player, boxes, targets))
}

/// Parses a level from a single block of text. Leading and trailing blank
/// lines are dropped so raw-string literals can be used directly; interior
/// blank lines still count as rows of floor.
pub fn load_from_str(text: &str) -> Result<Level, LevelError> {
    let mut lines: Vec<&str> = text.lines().collect();

    while lines.first().is_some_and(|line| line.trim().is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    load_from_lines(&lines)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();
    load_from_lines(&lines)
}

fn record_player(player: &mut Option<Position>, position: Position) -> Result<(), LevelError> {
    if let Some(first) = *player {
        return Err(LevelError::MultiplePlayers {
            first,
            second: position,
        });
    }
    *player = Some(position);
    Ok(())
}
