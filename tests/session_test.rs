//! Tests for session play, scoring, undo and replay.

use morpion::{
    DisplayMode, GameError, GameSession, NEW_POINT_POINTS, PlayEvaluation, Point, Scoring,
    Segment, playable_segments,
};

fn segment(ax: i32, ay: i32, bx: i32, by: i32) -> Segment {
    Segment::between(Point::new(ax, ay), Point::new(bx, by)).expect("straight segment")
}

#[test]
fn test_fresh_session_defaults() {
    let session = GameSession::new(Scoring::default());
    assert_eq!(session.score(), 0);
    assert!(session.segments().is_empty());
    assert_eq!(session.possibilities().len(), 24);
    assert_eq!(session.remaining_moves(), 24);
    assert_eq!(session.mode(), DisplayMode::Sober);
    assert_eq!(session.last_play(), None);
    assert_eq!(session.last_evaluation(), None);
    assert_eq!(session.cursor(), Point::new(9, 9));
    assert_eq!(session.select(), None);
    assert!(!session.is_finished());
}

#[test]
fn test_first_play_claims_a_point() {
    let mut session = GameSession::new(Scoring::default());
    let played = segment(7, 3, 7, 8);
    let outcome = session.play(played).expect("Play failed");
    assert_eq!(*outcome.points(), NEW_POINT_POINTS);
    assert!(!*outcome.full_line());
    assert!(played.points().iter().all(|p| session.grid().is_occupied(*p)));
    assert_eq!(session.score(), NEW_POINT_POINTS);
    assert_eq!(session.segments().len(), 1);
    assert_eq!(session.last_play(), Some(Point::new(7, 8)));
    // Only the played segment ran through (7, 8), so no follow-up remains.
    assert_eq!(session.last_evaluation(), Some(PlayEvaluation::Bad));
    assert!(!session.is_finished());
}

#[test]
fn test_custom_scoring_applies() {
    let mut session = GameSession::new(Scoring::new(50, 7));
    let outcome = session.play(segment(7, 3, 7, 8)).expect("Play failed");
    assert_eq!(*outcome.points(), 7);
    assert_eq!(session.score(), 7);
}

#[test]
fn test_rejected_play_leaves_state_unchanged() {
    let mut session = GameSession::new(Scoring::default());
    let before = session.clone();
    let result = session.play(segment(0, 0, 5, 0));
    assert!(matches!(result, Err(GameError::InvalidMove(_))));
    assert_eq!(session, before);
}

#[test]
fn test_overlapping_play_is_rejected() {
    let mut session = GameSession::new(Scoring::default());
    session.play(segment(6, 3, 11, 3)).expect("Play failed");
    let result = session.play(segment(7, 3, 12, 3));
    assert!(result.is_err(), "Five shared points should be rejected");
    assert_eq!(session.segments().len(), 1);
}

#[test]
fn test_score_accumulates_over_plays() {
    let mut session = GameSession::new(Scoring::default());
    session.play(segment(6, 3, 11, 3)).expect("Play failed");
    session.play(segment(11, 3, 11, 8)).expect("Play failed");
    assert_eq!(session.score(), 2 * NEW_POINT_POINTS);
    assert_eq!(session.segments().len(), 2);
}

#[test]
fn test_claimed_point_opens_no_new_play_here() {
    let mut session = GameSession::new(Scoring::default());
    session.play(segment(6, 3, 11, 3)).expect("Play failed");
    // The played row and its one-step shift drop out; claiming (6, 3)
    // completes no other window, so nothing replaces them.
    assert_eq!(session.remaining_moves(), 22);
    let live = playable_segments(session.grid(), session.segments());
    assert!(!live.contains(&segment(6, 3, 11, 3)));
    assert!(!live.contains(&segment(7, 3, 12, 3)));
}

#[test]
fn test_undo_restores_prior_state() {
    let mut session = GameSession::new(Scoring::default());
    session.play(segment(6, 3, 11, 3)).expect("Play failed");
    let before = session.clone();
    session.play(segment(11, 3, 11, 8)).expect("Play failed");

    let undone = session.undo();
    assert_eq!(undone, Some(segment(11, 3, 11, 8)));
    assert_eq!(session, before);
}

#[test]
fn test_undo_to_fresh_session() {
    let mut session = GameSession::new(Scoring::default());
    let before = session.clone();
    session.play(segment(7, 3, 7, 8)).expect("Play failed");
    session.undo();
    assert_eq!(session, before);
}

#[test]
fn test_undo_on_fresh_session_is_none() {
    let mut session = GameSession::new(Scoring::default());
    assert_eq!(session.undo(), None);
}

#[test]
fn test_from_history_replays_a_game() {
    let mut session = GameSession::new(Scoring::default());
    session.play(segment(6, 3, 11, 3)).expect("Play failed");
    session.play(segment(11, 3, 11, 8)).expect("Play failed");

    let restored = GameSession::from_history(Scoring::default(), session.segments().to_vec())
        .expect("Replay failed");
    assert_eq!(restored, session);
}

#[test]
fn test_from_history_rejects_illegal_sequence() {
    let history = vec![segment(6, 3, 11, 3), segment(7, 3, 12, 3)];
    let result = GameSession::from_history(Scoring::default(), history);
    assert!(matches!(result, Err(GameError::InvalidMove(_))));
}

#[test]
fn test_recompute_is_idempotent() {
    let mut session = GameSession::new(Scoring::default());
    session.play(segment(7, 3, 7, 8)).expect("Play failed");
    let before = session.clone();
    session.recompute();
    assert_eq!(session, before);
}

#[test]
fn test_toggle_mode_cycles() {
    let mut session = GameSession::new(Scoring::default());
    assert_eq!(session.toggle_mode(), DisplayMode::Visual);
    assert_eq!(session.toggle_mode(), DisplayMode::Help);
    assert_eq!(session.toggle_mode(), DisplayMode::Sober);
}

#[test]
fn test_selection_round_trip() {
    let mut session = GameSession::new(Scoring::default());
    session.set_select(Point::new(7, 3));
    assert_eq!(session.select(), Some(Point::new(7, 3)));
    session.clear_select();
    assert_eq!(session.select(), None);
}
