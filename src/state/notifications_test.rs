use super::*;

fn notification(id: i64) -> Notification {
    Notification {
        id,
        message: format!("mensagem {id}"),
        read: false,
        link: None,
        created_at: "2026-08-07T12:00:00".to_owned(),
    }
}

#[test]
fn record_increments_and_tracks_latest() {
    let mut state = NotificationsState::default();
    state.record(notification(1));
    state.record(notification(2));
    assert_eq!(state.unread_count, 2);
    assert_eq!(state.latest.as_ref().map(|n| n.id), Some(2));
}

#[test]
fn decrement_floors_at_zero() {
    let mut state = NotificationsState::default();
    state.decrement();
    assert_eq!(state.unread_count, 0);
    state.set_unread(1);
    state.decrement();
    state.decrement();
    assert_eq!(state.unread_count, 0);
}

#[test]
fn set_unread_clamps_negative_seeds() {
    let mut state = NotificationsState::default();
    state.set_unread(-5);
    assert_eq!(state.unread_count, 0);
}

#[test]
fn mark_all_read_resets_badge_only() {
    let mut state = NotificationsState::default();
    state.record(notification(1));
    state.mark_all_read();
    assert_eq!(state.unread_count, 0);
    assert!(state.latest.is_some());
}
