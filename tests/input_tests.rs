//! Input tests - key mapping and gesture classification through the
//! facade crate.

use blockfall::input::{classify_swipe, handle_key_event, should_quit, SwipeTracker};
use blockfall::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[test]
fn arrow_keys_and_space_map_to_commands() {
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Left)),
        Some(Command::MoveLeft)
    );
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Right)),
        Some(Command::MoveRight)
    );
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Down)),
        Some(Command::SoftDrop)
    );
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
        Some(Command::Rotate)
    );
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
}

#[test]
fn quit_is_q_or_ctrl_c() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}

#[test]
fn swipe_classification_follows_the_dominant_axis() {
    assert_eq!(classify_swipe(50, 10), Command::MoveRight);
    assert_eq!(classify_swipe(-50, 10), Command::MoveLeft);
    assert_eq!(classify_swipe(10, 50), Command::SoftDrop);
    assert_eq!(classify_swipe(10, -50), Command::Rotate);
}

#[test]
fn swipe_ties_go_horizontal() {
    assert_eq!(classify_swipe(25, 25), Command::MoveRight);
    assert_eq!(classify_swipe(-25, -25), Command::MoveLeft);
}

#[test]
fn tracker_classifies_a_drag_end_to_end() {
    let mut tracker = SwipeTracker::new();
    tracker.begin(5, 5);
    assert_eq!(tracker.finish(5, 40), Some(Command::SoftDrop));
    assert_eq!(tracker.finish(5, 40), None);
}
