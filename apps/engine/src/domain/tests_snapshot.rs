use crate::domain::snapshot::public_snapshot;
use crate::domain::state::{Phase, Session};
use crate::domain::test_state_helpers::{parse_cards, playing_session};
use crate::domain::tricks::play_card;

fn mid_trick_session() -> Session {
    let mut session = playing_session(&[("alice", &["7H", "2C"]), ("bob", &["9H", "3C"])]);
    play_card(&mut session, "alice", parse_cards(&["7H"])[0]).unwrap();
    session
}

#[test]
fn session_roundtrips_through_json() {
    let session = mid_trick_session();
    let json = serde_json::to_string_pretty(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn default_session_roundtrips_through_json() {
    let session = Session::default();
    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn public_snapshot_redacts_hands_to_counts() {
    let session = mid_trick_session();
    let view = public_snapshot(&session);

    assert_eq!(view.phase, Phase::Playing);
    assert_eq!(view.seats.len(), 2);
    let alice = &view.seats[0];
    assert_eq!(alice.player, "alice");
    assert_eq!(alice.cards_left, 1);
    assert_eq!(view.current_trick.len(), 1);
    assert_eq!(view.to_act.as_deref(), Some("bob"));

    // No card data beyond the public trick leaks into the serialized view.
    let json = serde_json::to_string(&view).unwrap();
    assert!(!json.contains("\"2C\""));
    assert!(!json.contains("\"9H\""));
    assert!(json.contains("\"7H\""));
}
