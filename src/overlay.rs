//! Highlight overlay for rendering targets on a ratatui host.
//!
//! The session core only reports selected/not-selected per target; this
//! module is the rendering collaborator that turns that into visible frames.
//! Every target gets a thin border, the selected one a thick border, both in
//! the highlight color. Hosts with their own drawing style can ignore this
//! module entirely and read
//! [`SwitchSession::visual_states`](crate::session::SwitchSession::visual_states)
//! directly.

use ratatui::{
    buffer::Buffer,
    layout::Rect as TermRect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::geometry::Rect;

/// Default highlight border color.
pub const HIGHLIGHT_COLOR: Color = Color::Red;

/// Widget drawing the highlight frame for one target.
pub struct TargetHighlight {
    rect: Rect,
    selected: bool,
}

impl TargetHighlight {
    pub fn new(rect: Rect, selected: bool) -> Self {
        Self { rect, selected }
    }

    fn border_type(&self) -> BorderType {
        if self.selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        }
    }
}

impl Widget for TargetHighlight {
    fn render(self, area: TermRect, buf: &mut Buffer) {
        // Targets may sit partially or fully outside the drawable area;
        // anything that clamps to nothing is skipped.
        let Some(frame) = clamp_to_area(self.rect, area) else {
            return;
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(self.border_type())
            .border_style(Style::default().fg(HIGHLIGHT_COLOR))
            .render(frame, buf);
    }
}

/// Intersect a host-surface rectangle with the drawable area.
fn clamp_to_area(rect: Rect, area: TermRect) -> Option<TermRect> {
    if rect.width <= 0 || rect.height <= 0 {
        return None;
    }
    let x1 = rect.x.max(i32::from(area.x));
    let y1 = rect.y.max(i32::from(area.y));
    let x2 = (rect.x + rect.width).min(i32::from(area.x) + i32::from(area.width));
    let y2 = (rect.y + rect.height).min(i32::from(area.y) + i32::from(area.height));
    if x1 >= x2 || y1 >= y2 {
        return None;
    }
    Some(TermRect::new(
        x1 as u16,
        y1 as u16,
        (x2 - x1) as u16,
        (y2 - y1) as u16,
    ))
}
