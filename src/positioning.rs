//! Positioning policy for toasts.
//!
//! Maps a logical [`Position`] to the screen edges a toast is anchored to,
//! and computes the toast's bounding box inside a terminal area. Placement
//! of one toast never looks at any other toast.

use crate::notification::Position;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    Left,
    Center,
    Right,
}

/// The pair of edges a toast box is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalEdge,
}

/// Anchor for a logical position
#[must_use]
pub const fn anchor(position: Position) -> Anchor {
    let (vertical, horizontal) = match position {
        Position::TopLeft => (VerticalEdge::Top, HorizontalEdge::Left),
        Position::TopRight => (VerticalEdge::Top, HorizontalEdge::Right),
        Position::BottomLeft => (VerticalEdge::Bottom, HorizontalEdge::Left),
        Position::BottomRight => (VerticalEdge::Bottom, HorizontalEdge::Right),
        Position::TopCenter => (VerticalEdge::Top, HorizontalEdge::Center),
        Position::BottomCenter => (VerticalEdge::Bottom, HorizontalEdge::Center),
    };
    Anchor { vertical, horizontal }
}

/// Bounding box of a `width` x `height` toast anchored inside `area`.
///
/// The box keeps `margin` cells from each anchored edge; centred toasts only
/// keep the vertical margin. Boxes larger than the area are shrunk to fit.
#[must_use]
pub fn place(area: Rect, width: u16, height: u16, anchor: Anchor, margin: u16) -> Rect {
    let margin_x = margin.min(area.width / 2);
    let margin_y = margin.min(area.height / 2);

    let width = width.min(area.width - margin_x * 2);
    let height = height.min(area.height - margin_y * 2);

    let x = match anchor.horizontal {
        HorizontalEdge::Left => area.x + margin_x,
        HorizontalEdge::Right => area.x + area.width - margin_x - width,
        HorizontalEdge::Center => area.x + (area.width - width) / 2,
    };
    let y = match anchor.vertical {
        VerticalEdge::Top => area.y + margin_y,
        VerticalEdge::Bottom => area.y + area.height - margin_y - height,
    };

    Rect::new(x, y, width, height)
}
