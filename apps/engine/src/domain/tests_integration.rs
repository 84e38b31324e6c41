//! Whole-round flows driven through the public domain operations only.

use crate::domain::bidding::place_bid;
use crate::domain::dealing::start_round;
use crate::domain::roster::join;
use crate::domain::state::{Phase, Session};
use crate::domain::tricks::{legal_moves, play_card};

/// Play a full two-player round with every play forced through the
/// legality ladder, and check the bookkeeping at the end.
#[test]
fn two_player_round_yields_26_tricks() {
    let mut session = Session::default();
    join(&mut session, "alice".to_string()).unwrap();
    join(&mut session, "bob".to_string()).unwrap();
    start_round(&mut session, 424242).unwrap();
    assert!(session.seats.iter().all(|s| s.hand.len() == 26));

    place_bid(&mut session, "alice", 13).unwrap();
    let outcome = place_bid(&mut session, "bob", 13).unwrap();
    assert!(outcome.bidding_complete);

    let mut tricks_resolved = 0;
    let mut tricks_by_player = [0u32; 2];
    let mut plays = 0;
    let report = loop {
        plays += 1;
        assert!(plays <= 52, "round did not terminate");

        let who = session.current_player().cloned().expect("someone must act");
        let legal = legal_moves(&session, &who);
        assert!(!legal.is_empty(), "turn holder always has a legal card");
        let outcome = play_card(&mut session, &who, legal[0]).unwrap();

        if let Some(trick) = &outcome.trick {
            tricks_resolved += 1;
            let idx = if trick.winner == "alice" { 0 } else { 1 };
            tricks_by_player[idx] += 1;
        }
        if let Some(report) = outcome.round_over {
            break report;
        }
    };

    assert_eq!(plays, 52);
    assert_eq!(tricks_resolved, 26);
    assert_eq!(tricks_by_player[0] + tricks_by_player[1], 26);
    for line in &report.lines {
        let idx = if line.player == "alice" { 0 } else { 1 };
        assert_eq!(u32::from(line.tricks_won), tricks_by_player[idx]);
    }

    // Implicit reset: back to Idle, same roster, next round.
    assert_eq!(session.phase, Phase::Idle);
    assert_eq!(session.round, 2);
    assert_eq!(session.seats.len(), 2);
    assert!(session.all_hands_empty());
}

/// Three players: one card sits out every round and the deck invariant
/// still holds through an entire game.
#[test]
fn three_player_round_keeps_the_deck_conserved() {
    let mut session = Session::default();
    for name in ["alice", "bob", "carol"] {
        join(&mut session, name.to_string()).unwrap();
    }
    start_round(&mut session, 7).unwrap();
    assert_eq!(session.leftover.len(), 1);

    for name in ["alice", "bob", "carol"] {
        place_bid(&mut session, name, 5).unwrap();
    }

    // Cards either sit in a hand, wait undealt, or have been played (to the
    // table or into a resolved trick); the total never drifts from 52.
    let mut played = 0usize;
    loop {
        let in_hands: usize = session.seats.iter().map(|s| s.hand.len()).sum();
        assert_eq!(
            in_hands + session.leftover.len() + played,
            52,
            "deck must be conserved at every step"
        );

        let who = session.current_player().cloned().unwrap();
        let legal = legal_moves(&session, &who);
        let outcome = play_card(&mut session, &who, legal[0]).unwrap();
        played += 1;
        if outcome.round_over.is_some() {
            break;
        }
    }
    assert_eq!(played, 51);
}
