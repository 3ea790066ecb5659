use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Shop views are rebuilt every frame from borrowed app data. Those that
/// need state across frames borrow it mutably: `ItemList` records the card
/// heights it measured and the viewport size into `ItemListState`, so the
/// next scroll event can be clamped without re-measuring.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Consumes terminal input and may report something back to the caller.
pub trait EventHandler {
    /// What the handler reports. `()` for handlers that only mutate themselves.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
