use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::store::Item;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

const NO_DESCRIPTION: &str = "No description";

/// A stateless component that renders one item as a bordered card.
///
/// ```text
/// ╭ Apple ───────────────── $0.50 ╮
/// │ Crisp and sweet.              │
/// │ image: https://img/apple.png  │
/// ╰───────────────────────────────╯
/// ```
///
/// Like the other list rows, `ItemCard` is created fresh each frame. Its
/// height is predicted with [`calculate_height`](Self::calculate_height) so
/// the parent list can size its scroll canvas before rendering.
#[derive(Clone, Copy)]
pub struct ItemCard<'a> {
    pub item: &'a Item,
}

impl<'a> ItemCard<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self { item }
    }

    /// Calculate the height required for this card given a width.
    ///
    /// The wrapping options must match Ratatui's `Paragraph` wrapping so the
    /// predicted and rendered heights agree.
    pub fn calculate_height(item: &Item, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let wrapped = |text: &str| {
            u16::try_from(textwrap::wrap(text, &options).len()).unwrap_or(u16::MAX)
        };

        let mut lines = 0u16;
        if let Some(description) = non_blank(item.description.as_deref()) {
            lines = lines.saturating_add(wrapped(description));
        }
        if let Some(image) = non_blank(item.image_url.as_deref()) {
            lines = lines.saturating_add(wrapped(&image_line(image)));
        }
        lines.max(1).saturating_add(VERTICAL_OVERHEAD)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn image_line(url: &str) -> String {
    format!("image: {url}")
}

/// Cut `s` to at most `max_width` display cells, ending in "..." when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

impl<'a> Widget for ItemCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let price = self.item.price_label();
        // Corners, spaces around each title and the price itself
        let name_budget = (area.width as usize).saturating_sub(price.width() + 6);
        let name = truncate_to_width(self.item.name.trim(), name_budget);

        let border_style = Style::default().fg(Color::Blue);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_top(Line::from(Span::styled(
                format!(" {name} "),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .title_top(
                Line::from(Span::styled(
                    format!(" {price} "),
                    Style::default().fg(Color::Green),
                ))
                .right_aligned(),
            )
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        if let Some(description) = non_blank(self.item.description.as_deref()) {
            lines.extend(description.lines().map(|l| Line::from(l.to_string())));
        }
        if let Some(image) = non_blank(self.item.image_url.as_deref()) {
            lines.push(Line::from(Span::styled(
                image_line(image),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                NO_DESCRIPTION,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

/// `ItemCard` is stateless; this delegates to the [`Widget`] impl.
impl<'a> Component for ItemCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
