use crate::domain::roster::{join, leave};
use crate::domain::state::{Phase, Session};
use crate::domain::test_state_helpers::{idle_session, parse_cards, playing_session};
use crate::domain::Suit;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[test]
fn join_seats_players_in_order() {
    let mut session = Session::default();
    join(&mut session, "alice".to_string()).unwrap();
    join(&mut session, "bob".to_string()).unwrap();
    let names: Vec<&str> = session.seats.iter().map(|s| s.player.as_str()).collect();
    assert_eq!(names, ["alice", "bob"]);
    assert!(session.seats.iter().all(|s| s.tricks_won == 0 && s.wins == 0));
}

#[test]
fn join_rejects_duplicates() {
    let mut session = idle_session(&["alice"]);
    let err = join(&mut session, "alice".to_string()).unwrap_err();
    assert_eq!(
        err,
        DomainError::conflict(ConflictKind::AlreadyJoined, "You're already in the game")
    );
}

#[test]
fn join_rejects_a_fifth_player() {
    let mut session = idle_session(&["a", "b", "c", "d"]);
    let err = join(&mut session, "e".to_string()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::TableFull, _)
    ));
}

#[test]
fn join_rejects_while_in_progress() {
    let mut session = playing_session(&[("alice", &["AS"]), ("bob", &["KD"])]);
    let err = join(&mut session, "carol".to_string()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::AlreadyInProgress, _)
    ));
}

#[test]
fn leave_requires_membership() {
    let mut session = idle_session(&["alice"]);
    let err = leave(&mut session, "bob").unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::NotInRoster, _)
    ));
}

#[test]
fn leave_of_turn_holder_passes_turn_to_next_seat() {
    let mut session = playing_session(&[
        ("alice", &["AS", "2C"]),
        ("bob", &["KD", "3C"]),
        ("carol", &["QH", "4C"]),
    ]);
    session.turn = Some(1);
    let outcome = leave(&mut session, "bob").unwrap();
    // Carol, who followed bob in seating order, now acts.
    assert_eq!(outcome.next_turn.as_deref(), Some("carol"));
    assert_eq!(session.current_player().map(String::as_str), Some("carol"));
}

#[test]
fn leave_of_turn_holder_wraps_to_first_seat() {
    let mut session = playing_session(&[("alice", &["AS", "2C"]), ("bob", &["KD", "3C"])]);
    session.turn = Some(1);
    let outcome = leave(&mut session, "bob").unwrap();
    assert_eq!(outcome.next_turn.as_deref(), Some("alice"));
}

#[test]
fn leave_of_earlier_seat_keeps_turn_on_same_player() {
    let mut session = playing_session(&[
        ("alice", &["AS", "2C"]),
        ("bob", &["KD", "3C"]),
        ("carol", &["QH", "4C"]),
    ]);
    session.turn = Some(2);
    leave(&mut session, "alice").unwrap();
    assert_eq!(session.current_player().map(String::as_str), Some("carol"));
}

#[test]
fn leave_removes_trick_contribution_and_recomputes_lead() {
    let mut session = playing_session(&[
        ("alice", &["2C"]),
        ("bob", &["3C"]),
        ("carol", &["QH", "4C"]),
    ]);
    session.current_trick = vec![
        ("alice".to_string(), parse_cards(&["7H"])[0]),
        ("bob".to_string(), parse_cards(&["KD"])[0]),
    ];
    session.lead_suit = Some(Suit::Hearts);
    session.turn = Some(2);

    leave(&mut session, "alice").unwrap();
    assert_eq!(session.current_trick.len(), 1);
    assert_eq!(session.lead_suit, Some(Suit::Diamonds));
}

#[test]
fn leave_can_complete_the_trick() {
    // Three seated; alice and bob already played, carol leaves without
    // playing. The two remaining plays make a full trick.
    let mut session = playing_session(&[
        ("alice", &["2C"]),
        ("bob", &["3C"]),
        ("carol", &["QH", "4C"]),
    ]);
    session.current_trick = vec![
        ("alice".to_string(), parse_cards(&["7H"])[0]),
        ("bob".to_string(), parse_cards(&["9H"])[0]),
    ];
    session.lead_suit = Some(Suit::Hearts);
    session.turn = Some(2);

    let outcome = leave(&mut session, "carol").unwrap();
    let trick = outcome.resolved_trick.expect("trick should resolve");
    assert_eq!(trick.winner, "bob");
    assert!(session.current_trick.is_empty());
    assert_eq!(session.seat("bob").unwrap().tricks_won, 1);
}

#[test]
fn leave_can_complete_bidding() {
    // Three bidders, carol still outstanding when she leaves.
    let mut session = crate::domain::test_state_helpers::bidding_session(&[
        ("alice", &["AS"]),
        ("bob", &["KD"]),
        ("carol", &["QH"]),
    ]);
    session.seats[0].bid = Some(1);
    session.seats[1].bid = Some(0);

    leave(&mut session, "carol").unwrap();
    assert_eq!(session.phase, Phase::Playing);
    assert_eq!(session.current_player().map(String::as_str), Some("alice"));
}

#[test]
fn leave_emptying_the_table_resets_the_session() {
    let mut session = playing_session(&[("alice", &["AS"])]);
    session.round = 3;
    let outcome = leave(&mut session, "alice").unwrap();
    assert!(outcome.roster_emptied);
    assert_eq!(session.phase, Phase::Idle);
    assert!(session.seats.is_empty());
    assert_eq!(session.round, 4);
}
