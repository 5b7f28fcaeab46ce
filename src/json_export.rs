//! JSON snapshot of a level for external collaborators (renderers, solvers).
//! The engine only writes this format; nothing here is read back.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Level, Position};

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    width: i32,
    height: i32,
    rows: Vec<String>,
    player: JsonPosition,
    boxes: Vec<JsonPosition>,
    targets: Vec<JsonPosition>,
    completed: bool,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonPosition {
    x: i32,
    y: i32,
}

impl From<Position> for JsonPosition {
    fn from(pos: Position) -> Self {
        JsonPosition { x: pos.x, y: pos.y }
    }
}

pub fn get_json_data(level: &Level) -> String {
    // Static grid only; the dynamic player/box state is carried separately.
    let rows: Vec<String> = (0..level.height())
        .map(|y| {
            (0..level.width())
                .map(|x| match level.cell(Position::new(x, y)) {
                    Cell::Wall => '#',
                    Cell::Target => '.',
                    Cell::Empty => ' ',
                })
                .collect()
        })
        .collect();

    let mut boxes: Vec<Position> = level.boxes().collect();
    boxes.sort_unstable();
    let mut targets: Vec<Position> = level.targets().collect();
    targets.sort_unstable();

    let json_data = JsonData {
        width: level.width(),
        height: level.height(),
        rows,
        player: level.player_position().into(),
        boxes: boxes.into_iter().map(JsonPosition::from).collect(),
        targets: targets.into_iter().map(JsonPosition::from).collect(),
        completed: level.is_completed(),
    };

    serde_json::to_string_pretty(&json_data).unwrap()
}
