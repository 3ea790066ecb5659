//! # Footer Component
//!
//! One-line key hints for the visible route, with the transient status
//! message (e.g. "Reloading...") and the store name on the right.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::navigation::Route;
use crate::tui::component::Component;

pub struct Footer<'a> {
    pub route: Route,
    pub status_message: &'a str,
    pub store_name: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(route: Route, status_message: &'a str, store_name: &'a str) -> Self {
        Self {
            route,
            status_message,
            store_name,
        }
    }

    fn hints(&self) -> &'static str {
        match self.route {
            Route::ShopList => " Esc Back  r Reload  ↑↓ Scroll  q Quit ",
            Route::Home => " Enter Shop  q Quit ",
        }
    }
}

impl<'a> Component for Footer<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(self.hints(), dim))), area);

        let right = if self.status_message.is_empty() {
            format!("{} ", self.store_name)
        } else {
            format!("{} | {} ", self.status_message, self.store_name)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(right, dim))).alignment(Alignment::Right),
            area,
        );
    }
}
