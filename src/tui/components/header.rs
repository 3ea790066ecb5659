//! # Header Component
//!
//! Fixed bar above the shop content. Always rendered, whatever the content
//! area shows, so back navigation keeps working during loading and errors.
//!
//! ```text
//! ← Back                 Shop                ada@example.com
//! ──────────────────────────────────────────────────────────
//! ```
//!
//! The back control is clickable; [`Header::back_area`] gives its hit box.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::screen::{BACK_LABEL, HEADER_TITLE};
use crate::tui::component::Component;

/// Rows taken by the header: one line of text plus the bottom rule.
pub const HEADER_HEIGHT: u16 = 2;

pub struct Header<'a> {
    /// Shown on the right; comes from the session.
    pub user: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(user: &'a str) -> Self {
        Self { user }
    }

    /// Screen cells covered by the back control within a header at `area`.
    pub fn back_area(area: Rect) -> Rect {
        let width = (BACK_LABEL.width() as u16).min(area.width);
        Rect::new(area.x, area.y, width, area.height.min(1))
    }
}

impl<'a> Component for Header<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let back = Paragraph::new(Line::from(Span::styled(
            BACK_LABEL,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        let title = Paragraph::new(Line::from(Span::styled(
            HEADER_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        let user = Paragraph::new(Line::from(Span::styled(
            self.user,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);

        // Title first so the back control and user label win on narrow terminals
        frame.render_widget(title, inner);
        frame.render_widget(user, inner);
        frame.render_widget(back, Header::back_area(inner));
    }
}
