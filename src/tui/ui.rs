use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::navigation::Route;
use crate::core::screen::ShopView;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Footer, HEADER_HEIGHT, Header, HomePage, ItemList, LoadingIndicator, Notice,
};

/// Splits the frame into the route body and the one-line footer.
fn frame_layout(area: Rect) -> [Rect; 2] {
    use Constraint::{Length, Min};
    Layout::vertical([Min(0), Length(1)]).areas(area)
}

/// Splits the shop body into the fixed header and the content area.
fn shop_layout(area: Rect) -> [Rect; 2] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(HEADER_HEIGHT), Min(0)]).areas(area)
}

/// Renders the whole frame from the current state snapshot.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let route = app.current_route();
    let [body, footer_area] = frame_layout(frame.area());

    match route {
        Route::ShopList => draw_shop(frame, body, app, tui),
        Route::Home => HomePage::new(app.session.display_name()).render(frame, body),
    }

    Footer::new(route, &app.status_message, app.store.name()).render(frame, footer_area);
}

/// Header always; below it exactly one of loading, error, empty or the list.
fn draw_shop(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [header_area, content_area] = shop_layout(area);

    Header::new(app.shop.session().display_name()).render(frame, header_area);

    match app.shop.view() {
        ShopView::Loading => LoadingIndicator::new(tui.spinner_frame).render(frame, content_area),
        ShopView::Error(message) => Notice::error(message).render(frame, content_area),
        ShopView::Empty => Notice::empty().render(frame, content_area),
        ShopView::List(items) => ItemList::new(&mut tui.item_list, items).render(frame, content_area),
    }
}

/// Hit test: is the screen cell at (column, row) on the header's back control?
pub fn hit_test_back(column: u16, row: u16, frame_area: Rect) -> bool {
    let [body, _footer] = frame_layout(frame_area);
    let [header_area, _content] = shop_layout(body);
    Header::back_area(header_area).contains(Position { x: column, y: row })
}
