use crate::domain::scoring::{finish_round, round_report};
use crate::domain::state::{reset_round, Phase};
use crate::domain::test_state_helpers::playing_session;

#[test]
fn report_marks_exact_bids_as_success() {
    let mut session = playing_session(&[("alice", &[]), ("bob", &[]), ("carol", &[])]);
    session.seats[0].bid = Some(2);
    session.seats[0].tricks_won = 2;
    session.seats[1].bid = Some(3);
    session.seats[1].tricks_won = 1;
    session.seats[2].bid = Some(0);
    session.seats[2].tricks_won = 0;

    let report = round_report(&session);
    assert_eq!(report.winners, vec!["alice".to_string(), "carol".to_string()]);
    let bob = report.lines.iter().find(|l| l.player == "bob").unwrap();
    assert!(!bob.success);
    assert_eq!(bob.bid, Some(3));
    assert_eq!(bob.tricks_won, 1);
}

#[test]
fn zero_winners_is_a_valid_outcome() {
    let mut session = playing_session(&[("alice", &[]), ("bob", &[])]);
    session.seats[0].bid = Some(5);
    session.seats[1].bid = Some(5);
    session.seats[0].tricks_won = 1;
    session.seats[1].tricks_won = 1;

    let report = round_report(&session);
    assert!(report.winners.is_empty());
}

#[test]
fn finish_round_tallies_wins_and_resets() {
    let mut session = playing_session(&[("alice", &[]), ("bob", &[])]);
    session.phase = Phase::Finished;
    session.seats[0].bid = Some(1);
    session.seats[0].tricks_won = 1;
    session.seats[1].bid = Some(4);
    session.seats[1].tricks_won = 0;
    session.round = 7;

    let report = finish_round(&mut session);
    assert_eq!(report.round, 7);
    assert_eq!(report.winners, vec!["alice".to_string()]);

    assert_eq!(session.seat("alice").unwrap().wins, 1);
    assert_eq!(session.seat("bob").unwrap().wins, 0);
    assert_eq!(session.phase, Phase::Idle);
    assert_eq!(session.round, 8);
    assert!(session.seats.iter().all(|s| s.bid.is_none() && s.tricks_won == 0));
}

#[test]
fn reset_clears_round_data_but_keeps_the_roster() {
    let mut session = playing_session(&[("alice", &["AS"]), ("bob", &["KD"])]);
    session.seats[0].wins = 2;
    reset_round(&mut session);

    assert_eq!(session.phase, Phase::Idle);
    assert_eq!(session.seats.len(), 2);
    assert_eq!(session.seats[0].wins, 2);
    assert!(session.seats.iter().all(|s| s.hand.is_empty()));
    assert!(session.turn.is_none());
}

#[test]
fn reset_is_idempotent() {
    let mut session = playing_session(&[("alice", &["AS"]), ("bob", &["KD"])]);
    reset_round(&mut session);
    let after_first = session.clone();
    reset_round(&mut session);
    assert_eq!(session, after_first);

    // The round counter moved once, for the round that was actually started.
    assert_eq!(session.round, 2);
}
