//! Board movement properties and config-driven layouts.

mod common;

use astro_pictionary::{Board, Roster, SessionBuilder, SessionConfig, TEAM_PALETTE};
use proptest::prelude::*;

fn roster_with(names: &[&str]) -> Roster {
    let mut roster = Roster::new(8, TEAM_PALETTE.iter().map(|c| (*c).to_string()).collect());
    for name in names {
        roster.add_team(name).unwrap();
    }
    roster
}

#[test]
fn test_toml_config_shapes_the_game() {
    common::init_logging();
    let config = SessionConfig::from_toml_str(
        r#"
            timer_seconds = 45
            board_length = 12
            special_spaces = [4, 8]
            points_per_success = 5
            seed = 3
        "#,
    )
    .unwrap();

    let mut session = SessionBuilder::new().config(config).build().unwrap();
    session.add_team("Alpha").unwrap();
    assert_eq!(session.board().length(), 12);
    assert_eq!(session.timer().remaining(), 45);

    for _ in 0..12 {
        session.draw_card().unwrap();
        session.card_success().unwrap();
    }
    assert_eq!(session.teams()[0].score, 60);
    assert!(session.winner().is_some());
}

#[test]
fn test_bad_toml_is_a_configuration_error() {
    let err = SessionConfig::from_toml_str("board_length = 10\nspecial_spaces = [12]").unwrap_err();
    assert!(matches!(err, astro_pictionary::GameError::Configuration(_)));
}

proptest! {
    /// Positions never pass the finish and never move backwards.
    #[test]
    fn prop_moves_are_monotone_and_clamped(steps in prop::collection::vec(0u32..10, 0..60)) {
        let board = Board::standard();
        let mut roster = roster_with(&["Alpha"]);
        let team = roster.teams()[0].id;

        let mut last = 0;
        for spaces in steps {
            let landing = board.move_team(&mut roster, team, spaces).unwrap();
            prop_assert_eq!(landing.from, last);
            prop_assert!(landing.to >= landing.from);
            prop_assert!(landing.to <= board.length());
            prop_assert_eq!(landing.won, landing.to == board.length());
            prop_assert!(!(landing.won && landing.special));
            last = landing.to;
        }
    }
}
