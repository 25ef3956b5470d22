//! Toast widget
//!
//! Renders one notification as a bordered box: kind icon and title, the
//! message, an optional action hint and a close hint in the border. Colours
//! and emphasis are derived from the notification kind only.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::constants::{CLOSE_HINT, TOAST_EDGE_MARGIN};
use crate::icons::IconService;
use crate::notification::{Kind, Notification};
use crate::positioning;

/// Accent colour of a notification kind (border, icon, action)
#[must_use]
pub fn accent_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => Color::Green,
        Kind::Error => Color::Red,
        Kind::Warning => Color::Yellow,
        Kind::Info => Color::Blue,
    }
}

/// Message emphasis: muted under a title, primary text when it stands alone
#[must_use]
pub fn message_style(has_title: bool) -> Style {
    if has_title {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Toast widget for a single notification
pub struct Toast<'a> {
    notification: &'a Notification,
    icons: &'a IconService,
}

impl<'a> Toast<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification, icons: &'a IconService) -> Self {
        Self { notification, icons }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let kind = self.notification.kind();
        let accent = accent_color(kind);
        let icon = Span::styled(
            format!("{} ", self.icons.kind(kind)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        );

        let mut lines = Vec::new();
        match self.notification.title() {
            Some(title) => {
                lines.push(Line::from(vec![
                    icon,
                    Span::styled(title.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                ]));
                lines.push(Line::from(Span::styled(
                    self.notification.message().to_string(),
                    message_style(true),
                )));
            }
            None => {
                lines.push(Line::from(vec![
                    icon,
                    Span::styled(self.notification.message().to_string(), message_style(false)),
                ]));
            }
        }

        if let Some(label) = self.notification.action_label() {
            lines.push(Line::from(Span::styled(
                format!("{} {}", self.icons.action(), label),
                Style::default().fg(accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
        }

        lines
    }

    /// Rows needed to show the whole toast at `width` columns, borders included.
    ///
    /// Wrapping is estimated per character, so word wrapping may need a row more.
    #[must_use]
    pub fn height(&self, width: u16) -> u16 {
        let inner_width = usize::from(width.saturating_sub(2).max(1));
        let rows: usize = self
            .lines()
            .iter()
            .map(|line| line.width().div_ceil(inner_width).max(1))
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }

    /// Screen rectangle for this toast inside `screen`, following its position
    #[must_use]
    pub fn area(&self, screen: Rect, width: u16) -> Rect {
        let anchor = positioning::anchor(self.notification.position());
        positioning::place(screen, width, self.height(width), anchor, TOAST_EDGE_MARGIN)
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.notification.kind());
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent));

        if self.notification.is_closable() {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" {} {} ", self.icons.close(), CLOSE_HINT),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );
        }

        Clear.render(area, buf);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
