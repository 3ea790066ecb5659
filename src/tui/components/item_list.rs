//! # ItemList Component
//!
//! Scrollable column of item cards, in the order the store returned them.
//!
//! `ItemList` is a transient component (created each frame) that wraps
//! `&'a mut ItemListState` (persistent scroll state) and the item slice (props).

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::store::Item;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::item_card::ItemCard;
use crate::tui::event::TuiEvent;

/// Scroll state for the item list.
/// Must be persisted in the parent TuiState and reset on every mount.
#[derive(Default)]
pub struct ItemListState {
    pub scroll_state: ScrollViewState,
    /// Card heights from the last render, in item order
    pub heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas height, capped at `u16::MAX` rows.
    fn total_height(&self) -> u16 {
        let total: u32 = self.heights.iter().map(|&h| u32::from(h)).sum();
        u16::try_from(total).unwrap_or(u16::MAX)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ItemListState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct ItemList<'a> {
    pub state: &'a mut ItemListState,
    pub items: &'a [Item],
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a mut ItemListState, items: &'a [Item]) -> Self {
        Self { state, items }
    }
}

impl<'a> Component for ItemList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        self.state.heights = self
            .items
            .iter()
            .map(|item| ItemCard::calculate_height(item, content_width))
            .collect();
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let total_height = self.state.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // Cards that would end past the canvas are not laid out
        let mut y_offset: u16 = 0;
        for (item, &height) in self.items.iter().zip(&self.state.heights) {
            let Some(next_offset) = y_offset.checked_add(height) else {
                break;
            };
            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(ItemCard::new(item), card_rect);
            y_offset = next_offset;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
