//! Layout management and calculations

use ratatui::layout::Rect;

/// Manages layout calculations for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the toast canvas and a one-line status bar below it
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let top_height = area.height.saturating_sub(1);
        let canvas = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));

        (canvas, status_area)
    }
}
