// Integration tests for directional navigation through a full session.
// These complement the unit tests in src/selector.rs and src/session/mod.rs
// by driving the public API end to end with the mock collaborators.

use std::sync::Arc;

use panehop::adapters::mock::{MockProvider, MockTarget, MockTrigger};
use panehop::{Direction, Rect, SwitchSession, TargetId};

fn target(id: &str, x: i32, y: i32, w: i32, h: i32) -> Arc<MockTarget> {
    MockTarget::new(id, Rect::new(x, y, w, h))
}

/// The reference layout: A at the origin, B directly below, C to the right.
fn abc_provider() -> (MockProvider, Arc<MockTarget>, Arc<MockTarget>, Arc<MockTarget>) {
    let a = target("a", 0, 0, 10, 10);
    let b = target("b", 0, 20, 10, 10);
    let c = target("c", 20, 0, 10, 10);
    let provider =
        MockProvider::new(vec![a.clone(), b.clone(), c.clone()]).with_current(&a);
    (provider, a, b, c)
}

#[test]
fn test_down_then_commit_activates_target_below() {
    let (provider, a, b, c) = abc_provider();
    let trigger = MockTrigger::new();

    let mut session = SwitchSession::open(&provider, trigger);
    session.navigate(Direction::Down);
    assert_eq!(session.current_selection(), Some(&TargetId::new("b")));

    session.commit().expect("activation succeeds");
    assert_eq!(b.activations(), 1);
    assert_eq!(a.activations(), 0);
    assert_eq!(c.activations(), 0);
}

#[test]
fn test_right_selects_target_beside() {
    let (provider, _a, _b, _c) = abc_provider();
    let trigger = MockTrigger::new();

    let mut session = SwitchSession::open(&provider, trigger);
    session.navigate(Direction::Right);
    assert_eq!(session.current_selection(), Some(&TargetId::new("c")));
}

#[test]
fn test_navigation_never_leaves_the_target_set() {
    let (provider, _a, _b, _c) = abc_provider();
    let trigger = MockTrigger::new();
    let members = [TargetId::new("a"), TargetId::new("b"), TargetId::new("c")];

    let mut session = SwitchSession::open(&provider, trigger);
    for dir in [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ] {
        session.navigate(dir);
        let selection = session.current_selection().expect("selection always set");
        assert!(members.contains(selection));
    }
}

#[test]
fn test_layout_shift_between_commands_changes_outcome() {
    let a = target("a", 0, 0, 10, 10);
    let b = target("b", 0, 20, 10, 10);
    let c = target("c", 0, 60, 10, 10);
    let provider = MockProvider::new(vec![a.clone(), b.clone(), c]).with_current(&a);
    let trigger = MockTrigger::new();

    let mut session = SwitchSession::open(&provider, trigger);

    // First query sees "b" as the nearest target below.
    session.navigate(Direction::Down);
    assert_eq!(session.current_selection(), Some(&TargetId::new("b")));

    // The host relays out and "a" ends up below "b".
    a.set_rect(Rect::new(0, 40, 10, 10));
    session.navigate(Direction::Down);
    assert_eq!(session.current_selection(), Some(&TargetId::new("a")));
}

#[test]
fn test_overlapping_targets_do_not_break_navigation() {
    let front = target("front", 0, 0, 10, 10);
    let back = target("back", 0, 0, 10, 10);
    let other = target("other", 30, 0, 10, 10);
    let provider =
        MockProvider::new(vec![front.clone(), back, other]).with_current(&front);
    let trigger = MockTrigger::new();

    let mut session = SwitchSession::open(&provider, trigger);
    session.navigate(Direction::Right);

    let selection = session.current_selection().expect("selection always set");
    assert_ne!(selection, &TargetId::new("front"));
}

#[test]
fn test_visual_states_expose_exactly_one_selected() {
    let (provider, _a, _b, _c) = abc_provider();
    let trigger = MockTrigger::new();

    let mut session = SwitchSession::open(&provider, trigger);
    for dir in [Direction::Down, Direction::Right, Direction::Up] {
        session.navigate(dir);
        let selected: Vec<_> = session
            .visual_states()
            .iter()
            .filter(|s| s.selected)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(Some(&selected[0].id), session.current_selection());
    }
}
