// Sokoban rules engine: level state, movement rules, and the text level format.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

pub mod core;
pub mod json_export;
pub mod levels;
