//! Property tests for seating, scoring and turn logic (pure domain, no DB).

use proptest::prelude::*;
use time::macros::datetime;

use crate::domain::color::{color_for_seat_count, Color, ColorAssignment, Seats};
use crate::domain::player::Player;
use crate::domain::scoring::{compute_score, Cell};
use crate::domain::turn::{decide_next_turn, opponent_for_move, resolve_turn_holder, TurnState};

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::Black), Just(Cell::White)]
}

fn grid() -> impl Strategy<Value = Vec<Vec<Cell>>> {
    (1usize..=10, 1usize..=10).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(cell(), cols), rows)
    })
}

proptest! {
    /// Property: sequential joins never hand out a color twice.
    #[test]
    fn prop_joins_never_duplicate_colors(joins in 0usize..=5) {
        let mut players: Vec<Player> = Vec::new();
        for i in 0..joins {
            match color_for_seat_count(1, players.len()) {
                Ok(color) => players.push(Player::joined(
                    1,
                    i as i64,
                    color,
                    datetime!(2025-01-01 0:00 UTC),
                )),
                Err(_) => {
                    prop_assert_eq!(players.len(), 2);
                }
            }
        }
        let blacks = players.iter().filter(|p| p.color == Color::Black).count();
        let whites = players.iter().filter(|p| p.color == Color::White).count();
        prop_assert!(blacks <= 1);
        prop_assert!(whites <= 1);
        prop_assert!(ColorAssignment::from_players(1, &players).is_ok());
    }

    /// Property: scores never exceed the board and repeat exactly.
    #[test]
    fn prop_score_bounded_and_idempotent(g in grid()) {
        let first = compute_score(&g).unwrap();
        let second = compute_score(&g).unwrap();
        prop_assert_eq!(first, second);

        let cells: usize = g.iter().map(Vec::len).sum();
        prop_assert!((first.black_score + first.white_score) as usize <= cells);

        let blacks = g.iter().flatten().filter(|c| **c == Cell::Black).count();
        prop_assert_eq!(first.black_score as usize, blacks);
    }

    /// Property: the next turn is always one of the two seated players.
    #[test]
    fn prop_next_turn_is_seated(
        black in 1i64..1_000,
        offset in 1i64..1_000,
        black_holds in any::<bool>(),
        assigned in any::<bool>(),
        opponent_has_moves in any::<bool>(),
    ) {
        let seats = Seats { black, white: black + offset };
        let stored = if black_holds { seats.black } else { seats.white };
        let state = if assigned { TurnState::TurnOf(stored) } else { TurnState::NoTurnAssigned };

        let holder = resolve_turn_holder(1, &seats, state).unwrap();
        prop_assert!(seats.contains(holder));

        let opponent = opponent_for_move(1, &seats, holder, holder).unwrap();
        let advance = decide_next_turn(holder, opponent, opponent_has_moves);
        prop_assert!(seats.contains(advance.next));
        prop_assert_eq!(advance.passed, advance.next == holder);
    }
}
