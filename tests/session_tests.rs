//! Session tests - the full tap pipeline over generated stages

use tilepop::core::generator::{ObstaclePlacement, StageSpec};
use tilepop::core::session::StageSession;
use tilepop::types::{TileVariant, BOARD_HEIGHT, BOARD_WIDTH};

fn first_tappable(session: &StageSession) -> Option<(i8, i8)> {
    (0..BOARD_HEIGHT as i8)
        .flat_map(|y| (0..BOARD_WIDTH as i8).map(move |x| (x, y)))
        .find(|&(x, y)| session.can_tap(x, y))
}

fn assert_packed(session: &StageSession) {
    let board = session.board();
    for x in 0..BOARD_WIDTH as i8 {
        let mut seen_tile = false;
        for y in 0..BOARD_HEIGHT as i8 {
            match board.tile_at(x, y) {
                Some(_) => seen_tile = true,
                None => assert!(!seen_tile, "gap below a filled cell in column {}", x),
            }
        }
    }
}

#[test]
fn test_opening_board_always_has_a_tap() {
    for seed in [1, 2, 3, 1000, 424_242] {
        let session = StageSession::new(StageSpec::plain(4, 800), seed);
        assert!(
            first_tappable(&session).is_some(),
            "seed {} opened without a removable group",
            seed
        );
    }
}

#[test]
fn test_tap_advances_board_and_score() {
    let mut session = StageSession::new(StageSpec::plain(3, 800), 7);
    let before = session.board().tile_count();
    let (x, y) = first_tappable(&session).unwrap();

    let outcome = session.tap(x, y, false).unwrap();
    let n = outcome.removal.removed.len();

    assert!(n >= 2);
    assert_eq!(session.board().tile_count(), before - n);
    assert_eq!(session.score(), outcome.removal.score.final_score);
    assert_eq!(session.taps(), 1);
    assert_packed(&session);
}

#[test]
fn test_rejected_tap_changes_nothing() {
    let mut session = StageSession::new(StageSpec::plain(4, 800), 19);
    let before = session.board().clone();

    assert!(session.tap(-3, 2, false).is_none(), "out of bounds");
    assert_eq!(session.board(), &before);
    assert_eq!(session.score(), 0);
    assert_eq!(session.taps(), 0);
}

#[test]
fn test_score_accumulates_across_taps() {
    let mut session = StageSession::new(StageSpec::plain(3, 50), 99);
    let mut expected = 0;

    for _ in 0..5 {
        let Some((x, y)) = first_tappable(&session) else {
            break;
        };
        let outcome = session.tap(x, y, false).unwrap();
        expected += outcome.removal.score.final_score;
        assert_packed(&session);
    }

    assert_eq!(session.score(), expected);
    assert!(session.taps() >= 1);
}

#[test]
fn test_target_reached_tracks_the_spec() {
    // Target 1 is reached by the first accepted tap (minimum score is 4)
    let mut session = StageSession::new(StageSpec::plain(3, 1), 5);
    assert!(!session.target_reached());

    let (x, y) = first_tappable(&session).unwrap();
    session.tap(x, y, false).unwrap();
    assert!(session.target_reached());
}

#[test]
fn test_counter_taps_are_gated_by_the_probe() {
    // A full random board with one high-value counter: its connected count
    // can never reach 99, so tapping it is always rejected.
    let spec = StageSpec {
        palette_size: 3,
        target_score: 800,
        obstacles: vec![ObstaclePlacement {
            variant: TileVariant::Counter,
            x: 5,
            y: 5,
            counter_value: Some(99),
            color: None,
        }],
    };
    let mut session = StageSession::new(spec, 13);

    assert_eq!(
        session.board().tile_at(5, 5).unwrap().variant,
        TileVariant::Counter
    );
    assert!(!session.can_tap(5, 5));
    assert!(session.tap(5, 5, false).is_none());
    assert_eq!(session.score(), 0);
}

#[test]
fn test_booster_flag_flows_into_the_breakdown() {
    let mut session = StageSession::new(StageSpec::plain(4, 800), 55);
    let (x, y) = first_tappable(&session).unwrap();

    let outcome = session.tap(x, y, true).unwrap();
    assert!(outcome.removal.score.booster);
    let n = outcome.removal.removed.len() as u32;
    if !outcome.removal.score.all_clear {
        // round(n^2 * 1.5) with a single rounding step
        assert_eq!(
            outcome.removal.score.final_score,
            (n * n * 3 + 1) / 2
        );
    }
}

#[test]
fn test_movements_in_outcome_are_falls_within_columns() {
    let mut session = StageSession::new(StageSpec::plain(3, 800), 31);
    let (x, y) = first_tappable(&session).unwrap();
    let outcome = session.tap(x, y, false).unwrap();

    for movement in &outcome.movements {
        assert_eq!(movement.from.0, movement.to.0);
        assert!(movement.to.1 > movement.from.1);
    }
}
