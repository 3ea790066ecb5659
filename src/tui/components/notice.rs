//! Centered single-message views for the content area: the loading spinner,
//! the error message and the empty-state message.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::screen::EMPTY_MESSAGE;
use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const LOADING_TEXT: &str = "Loading shop items...";

/// Indeterminate progress indicator.
pub struct LoadingIndicator {
    frame_index: usize,
}

impl LoadingIndicator {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()]
    }
}

impl Component for LoadingIndicator {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.glyph(), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray)),
        ]);
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}

/// A wrapped, centered message.
pub struct Notice<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> Notice<'a> {
    /// Failure message in warning color.
    pub fn error(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    pub fn empty() -> Notice<'static> {
        Notice {
            text: EMPTY_MESSAGE,
            style: Style::default().fg(Color::DarkGray),
        }
    }

    fn wrapped_height(&self, width: u16) -> u16 {
        if width == 0 {
            return 1;
        }
        let options = textwrap::Options::new(width as usize).break_words(true);
        (textwrap::wrap(self.text, options).len() as u16).max(1)
    }
}

impl<'a> Component for Notice<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [column] = Layout::horizontal([Constraint::Percentage(90)])
            .flex(Flex::Center)
            .areas(area);
        let height = self.wrapped_height(column.width).min(column.height);
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);

        let paragraph = Paragraph::new(self.text)
            .style(self.style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, row);
    }
}
