//! # Actions
//!
//! Everything that can happen in shoplist becomes an `Action`.
//! User presses Esc on the shop? That's `Action::Back`.
//! Store responds? That's `Action::ItemsLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::navigation::Route;
use crate::core::state::App;
use crate::store::{FetchError, Item};

#[derive(Debug)]
pub enum Action {
    /// First frame: mount whatever route is on top.
    Start,
    /// Home → shop.
    OpenShop,
    /// Header back control.
    Back,
    /// Unmount and remount the shop, which fetches again.
    Reload,
    /// A fetch finished for the given mount.
    ItemsLoaded {
        mount: u64,
        result: Result<Vec<Item>, FetchError>,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run `ItemStore::fetch_purchasable_items` and report back with this mount id.
    FetchItems { mount: u64 },
    /// Drop any in-flight fetch; its result would be discarded anyway.
    CancelFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => mount_current(app),
        Action::OpenShop => {
            if app.current_route() == Route::ShopList {
                return Effect::None;
            }
            app.nav.push(Route::ShopList);
            mount_current(app)
        }
        Action::Back => {
            let was_shop = app.current_route() == Route::ShopList;
            app.nav.pop();
            if was_shop && app.current_route() != Route::ShopList {
                app.shop.on_disappear();
                // Its result will never be applied now
                app.status_message.clear();
                return Effect::CancelFetch;
            }
            Effect::None
        }
        Action::Reload => {
            if app.current_route() != Route::ShopList {
                return Effect::None;
            }
            app.shop.on_disappear();
            app.status_message = "Reloading...".to_string();
            mount_current(app)
        }
        Action::ItemsLoaded { mount, result } => {
            if app.shop.apply_fetch(mount, result) {
                app.status_message.clear();
            } else {
                debug!("Ignored stale ItemsLoaded for mount {}", mount);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn mount_current(app: &mut App) -> Effect {
    match app.current_route() {
        Route::ShopList => Effect::FetchItems {
            mount: app.shop.on_appear(),
        },
        Route::Home => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::{ShopView, EMPTY_MESSAGE};
    use crate::test_support::{apple_and_bread, test_app};

    #[test]
    fn start_mounts_shop_and_requests_fetch() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Start), Effect::FetchItems { mount: 1 });
        assert_eq!(app.shop.view(), ShopView::Loading);
    }

    #[test]
    fn items_loaded_applies_to_current_mount() {
        let mut app = test_app();
        let Effect::FetchItems { mount } = update(&mut app, Action::Start) else {
            panic!("expected fetch");
        };
        let effect = update(
            &mut app,
            Action::ItemsLoaded {
                mount,
                result: Ok(apple_and_bread()),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(matches!(app.shop.view(), ShopView::List(items) if items.len() == 2));
    }

    #[test]
    fn back_with_two_entries_leaves_one() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        assert_eq!(app.nav.len(), 2);
        assert_eq!(update(&mut app, Action::Back), Effect::CancelFetch);
        assert_eq!(app.nav.len(), 1);
        assert_eq!(app.current_route(), Route::Home);
        assert!(!app.shop.is_mounted());
    }

    #[test]
    fn back_on_empty_stack_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::Back);
        update(&mut app, Action::Back);
        assert!(app.nav.is_empty());
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert!(app.nav.is_empty());
    }

    #[test]
    fn late_result_after_back_is_discarded() {
        let mut app = test_app();
        let Effect::FetchItems { mount } = update(&mut app, Action::Start) else {
            panic!("expected fetch");
        };
        update(&mut app, Action::Back);
        update(
            &mut app,
            Action::ItemsLoaded {
                mount,
                result: Ok(apple_and_bread()),
            },
        );
        assert!(!app.shop.is_mounted());
        assert_eq!(app.shop.view(), ShopView::Loading);
    }

    #[test]
    fn reopening_shop_remounts_and_fetches_again() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::Back);
        assert_eq!(update(&mut app, Action::OpenShop), Effect::FetchItems { mount: 2 });
        assert_eq!(app.current_route(), Route::ShopList);
        assert_eq!(app.nav.len(), 2);
    }

    #[test]
    fn open_shop_while_on_shop_does_nothing() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        assert_eq!(update(&mut app, Action::OpenShop), Effect::None);
        assert_eq!(app.nav.len(), 2);
    }

    #[test]
    fn reload_discards_previous_mount() {
        let mut app = test_app();
        let Effect::FetchItems { mount: first } = update(&mut app, Action::Start) else {
            panic!("expected fetch");
        };
        let Effect::FetchItems { mount: second } = update(&mut app, Action::Reload) else {
            panic!("expected fetch");
        };
        assert_ne!(first, second);

        update(
            &mut app,
            Action::ItemsLoaded {
                mount: first,
                result: Ok(apple_and_bread()),
            },
        );
        assert_eq!(app.shop.view(), ShopView::Loading);

        update(
            &mut app,
            Action::ItemsLoaded {
                mount: second,
                result: Ok(vec![]),
            },
        );
        assert_eq!(app.shop.view(), ShopView::Empty);
        assert!(app.status_message.is_empty());
        assert_eq!(EMPTY_MESSAGE, "No shop items available");
    }

    #[test]
    fn back_during_reload_clears_status() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::Reload);
        assert_eq!(app.status_message, "Reloading...");

        assert_eq!(update(&mut app, Action::Back), Effect::CancelFetch);
        assert_eq!(app.current_route(), Route::Home);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn reload_on_home_does_nothing() {
        let mut app = test_app();
        update(&mut app, Action::Back);
        assert_eq!(update(&mut app, Action::Reload), Effect::None);
    }

    #[test]
    fn quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
