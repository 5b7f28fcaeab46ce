//! Property-based tests for the movement rules.
//!
//! Random move sequences over a table of levels, checking the invariants the
//! engine promises: box count is conserved, rejected moves change nothing,
//! and a push displaces exactly one box by one cell.

use std::collections::HashSet;

use proptest::prelude::*;

use SokobanEngine::core::{Cell, Direction, MoveResult, Position, load_from_lines, load_from_str};

const LEVELS: &[&str] = &[
    "
#####
#@$.#
#####
",
    "
######
#@$  #
# $. #
# .  #
######
",
    "
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
",
    "
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
",
];

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Moves only relocate boxes, never create or destroy them.
    #[test]
    fn prop_box_count_conserved(
        level_idx in 0usize..LEVELS.len(),
        moves in prop::collection::vec(direction_strategy(), 0..64)
    ) {
        let mut level = load_from_str(LEVELS[level_idx]).unwrap();
        let initial_boxes = level.box_count();
        let target_count = level.targets().count();

        for dir in moves {
            level.try_move(dir);
            prop_assert_eq!(level.box_count(), initial_boxes);
            prop_assert_eq!(level.targets().count(), target_count);
        }
    }

    /// A rejected move is a full no-op.
    #[test]
    fn prop_rejected_move_changes_nothing(
        level_idx in 0usize..LEVELS.len(),
        moves in prop::collection::vec(direction_strategy(), 1..64)
    ) {
        let mut level = load_from_str(LEVELS[level_idx]).unwrap();

        for dir in moves {
            let before = level.clone();
            let result = level.try_move(dir);
            if result == MoveResult::None {
                prop_assert!(level == before, "rejected move mutated the level");
            }
        }
    }

    /// A push moves exactly one box by one cell and the player takes its place;
    /// a plain move leaves every box where it was.
    #[test]
    fn prop_push_displaces_one_box_by_one_cell(
        level_idx in 0usize..LEVELS.len(),
        moves in prop::collection::vec(direction_strategy(), 1..64)
    ) {
        let mut level = load_from_str(LEVELS[level_idx]).unwrap();

        for dir in moves {
            let player_before = level.player_position();
            let boxes_before: HashSet<Position> = level.boxes().collect();
            let result = level.try_move(dir);
            let boxes_after: HashSet<Position> = level.boxes().collect();

            match result {
                MoveResult::None => {}
                MoveResult::Moved => {
                    prop_assert_eq!(level.player_position(), player_before.offset(dir));
                    prop_assert_eq!(&boxes_after, &boxes_before);
                }
                MoveResult::PushedBox => {
                    let gone: Vec<Position> =
                        boxes_before.difference(&boxes_after).copied().collect();
                    let appeared: Vec<Position> =
                        boxes_after.difference(&boxes_before).copied().collect();
                    prop_assert_eq!(gone.len(), 1);
                    prop_assert_eq!(appeared.len(), 1);
                    prop_assert_eq!(gone[0], player_before.offset(dir));
                    prop_assert_eq!(appeared[0], gone[0].offset(dir));
                    prop_assert_eq!(level.player_position(), gone[0]);
                }
            }
        }
    }

    /// After any walk: player and boxes stay inside the grid and off walls,
    /// and completion means exactly "every target holds a box".
    #[test]
    fn prop_invariants_hold_after_random_walk(
        level_idx in 0usize..LEVELS.len(),
        moves in prop::collection::vec(direction_strategy(), 0..64)
    ) {
        let mut level = load_from_str(LEVELS[level_idx]).unwrap();

        for dir in moves {
            level.try_move(dir);
        }

        prop_assert!(level.is_inside(level.player_position()));
        prop_assert!(level.cell(level.player_position()) != Cell::Wall);
        for box_pos in level.boxes().collect::<Vec<_>>() {
            prop_assert!(level.is_inside(box_pos));
            prop_assert!(level.cell(box_pos) != Cell::Wall);
        }

        let every_target_covered = level.targets().all(|t| level.has_box(t));
        prop_assert_eq!(level.is_completed(), every_target_covered);
        prop_assert_eq!(
            level.is_completed(),
            level.count_boxes_on_targets() == level.targets().count()
        );
    }

    /// The loader never panics on arbitrary grid-ish text; it either builds a
    /// valid level or reports a format error.
    #[test]
    fn prop_loader_never_panics(
        lines in prop::collection::vec("[ #.$*@+ab]{0,12}", 0..8)
    ) {
        if let Ok(level) = load_from_lines(&lines) {
            prop_assert_eq!(level.box_count(), level.targets().count());
            prop_assert!(level.is_inside(level.player_position()));
        }
    }
}
