use bakery_ui::config::Config;
use bakery_ui::notification::{Kind, Position};
use bakery_ui::ui::{handle_key, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

fn press(app: &mut App, c: char) -> bool {
    handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), app)
}

#[test]
fn test_show_uses_configured_defaults() {
    let mut config = Config::default();
    config.toast.position = Position::BottomLeft;
    let mut app = App::new(&config);

    app.show(Kind::Info);
    let toasts = app.visible_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].position(), Position::BottomLeft);
    assert_eq!(toasts[0].duration_ms(), 5_000);
}

#[tokio::test(start_paused = true)]
async fn test_expired_toasts_are_evicted() {
    let mut app = App::new(&Config::default());
    app.show(Kind::Info);
    app.show(Kind::Error);

    tokio::time::advance(Duration::from_millis(5_000)).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }

    // The info toast expired; the persistent error toast stays
    assert_eq!(app.process_signals(), 1);
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts[0].kind(), Kind::Error);

    assert_eq!(app.dismiss_all(), 1);
    app.process_signals();
    assert!(app.toasts.is_empty());
}

#[test]
fn test_error_toasts_are_persistent() {
    let mut app = App::new(&Config::default());
    app.show(Kind::Error);
    assert!(app.visible_toasts()[0].is_persistent());
}

#[test]
fn test_closed_toasts_are_evicted_after_signal() {
    let mut app = App::new(&Config::default());
    app.show(Kind::Info);
    app.show(Kind::Warning);

    assert!(app.close_newest());
    assert_eq!(app.toasts.len(), 2);
    assert_eq!(app.visible_toasts().len(), 1);

    assert_eq!(app.process_signals(), 1);
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts[0].kind(), Kind::Info);
}

#[test]
fn test_action_is_reported() {
    let mut app = App::new(&Config::default());
    app.show(Kind::Success);

    assert!(app.act_on_newest());
    app.process_signals();

    assert_eq!(app.last_event.as_deref(), Some("Action 'View' invoked"));
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn test_dismiss_all() {
    let mut app = App::new(&Config::default());
    for kind in Kind::ALL {
        app.show(kind);
    }

    assert_eq!(app.dismiss_all(), 4);
    assert_eq!(app.dismiss_all(), 0);
    app.process_signals();
    assert!(app.toasts.is_empty());
}

#[test]
fn test_key_bindings() {
    let mut app = App::new(&Config::default());

    assert!(press(&mut app, '4'));
    assert_eq!(app.toasts.len(), 1);

    assert!(press(&mut app, 'p'));
    assert_eq!(app.next_position, Position::BottomLeft);

    // Info toasts have no action
    assert!(press(&mut app, 'a'));
    assert_eq!(app.last_event.as_deref(), Some("Newest toast has no action"));

    assert!(press(&mut app, 'x'));
    app.process_signals();
    assert!(app.toasts.is_empty());

    assert!(!press(&mut app, 'z'));
    assert!(press(&mut app, 'q'));
    assert!(app.should_quit);
}
