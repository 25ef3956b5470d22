use bakery_ui::icons::{IconService, IconTheme};
use bakery_ui::notification::{Kind, Notification, NotificationOptions, Position};
use bakery_ui::ui::components::toast::{accent_color, message_style, Toast};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use std::collections::HashSet;

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_accent_colors_are_distinct() {
    let colors: HashSet<Color> = Kind::ALL.iter().map(|kind| accent_color(*kind)).collect();
    assert_eq!(colors.len(), Kind::ALL.len());
}

#[test]
fn test_message_is_muted_under_title() {
    assert_ne!(message_style(true), message_style(false));
}

#[test]
fn test_height_counts_borders_and_lines() {
    let icons = IconService::new(IconTheme::Ascii);

    let plain = Notification::new(Kind::Info, "Fresh bread", NotificationOptions::default());
    assert_eq!(Toast::new(&plain, &icons).height(40), 3);

    let titled = Notification::new(Kind::Success, "Saved", NotificationOptions::new().title("Order"));
    assert_eq!(Toast::new(&titled, &icons).height(40), 4);

    let with_action = Notification::new(
        Kind::Success,
        "Saved",
        NotificationOptions::new().title("Order").action_label("View"),
    );
    assert_eq!(Toast::new(&with_action, &icons).height(40), 5);
}

#[test]
fn test_height_grows_with_long_messages() {
    let icons = IconService::default();
    let message = "a".repeat(100);
    let notification = Notification::new(Kind::Info, message, NotificationOptions::default());
    let toast = Toast::new(&notification, &icons);
    assert!(toast.height(22) > toast.height(80));
}

#[test]
fn test_area_follows_position() {
    let icons = IconService::default();
    let screen = Rect::new(0, 0, 80, 24);

    let top_left = Notification::new(Kind::Info, "hi", NotificationOptions::new().position(Position::TopLeft));
    let area = Toast::new(&top_left, &icons).area(screen, 30);
    assert_eq!((area.x, area.y, area.width), (1, 1, 30));

    let bottom_right = Notification::new(Kind::Info, "hi", NotificationOptions::new().position(Position::BottomRight));
    let area = Toast::new(&bottom_right, &icons).area(screen, 30);
    assert_eq!(area.right(), 79);
    assert_eq!(area.bottom(), 23);
}

#[test]
fn test_render_shows_content_and_affordances() {
    let icons = IconService::new(IconTheme::Ascii);
    let notification = Notification::new(
        Kind::Warning,
        "Only rye left",
        NotificationOptions::new().title("Low on flour").action_label("Restock"),
    );

    let area = Rect::new(0, 0, 40, 5);
    let mut buf = Buffer::empty(area);
    Toast::new(&notification, &icons).render(area, &mut buf);
    let text = buffer_text(&buf);

    assert!(text.contains("! Low on flour"));
    assert!(text.contains("Only rye left"));
    assert!(text.contains("> Restock"));
    assert!(text.contains("x close"));
}

#[test]
fn test_render_omits_close_hint_when_not_closable() {
    let icons = IconService::new(IconTheme::Ascii);
    let notification = Notification::new(Kind::Info, "Syncing", NotificationOptions::new().closable(false));

    let area = Rect::new(0, 0, 30, 3);
    let mut buf = Buffer::empty(area);
    Toast::new(&notification, &icons).render(area, &mut buf);

    assert!(!buffer_text(&buf).contains("close"));
}
