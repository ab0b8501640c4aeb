//! DOM Helpers
//!
//! Typed element lookup for the id patterns the views render
//! (`game_<id>` status targets, `my-game_<id>` wishlist rows), plus the
//! fade-out used when a row leaves the wishlist.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::models::GameId;

const FADE_STEPS: u32 = 10;
const FADE_STEP_MS: u32 = 40;

/// DOM id of the catalog status element for a game.
pub fn catalog_status_id(id: GameId) -> String {
    format!("game_{id}")
}

/// DOM id of the wishlist row for a game.
pub fn wishlist_row_id(id: GameId) -> String {
    format!("my-game_{id}")
}

/// Status element on the catalog card, if it is mounted.
pub fn catalog_status(id: GameId) -> Option<Element> {
    lookup(&catalog_status_id(id))
}

/// Wishlist row element, if it is mounted.
pub fn wishlist_row(id: GameId) -> Option<Element> {
    lookup(&wishlist_row_id(id))
}

fn lookup(dom_id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(dom_id)
}

/// Fade an element to fully transparent with a stepped opacity transition.
///
/// The element is left in the document; removal is the caller's business.
pub async fn fade_out(element: &Element) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    for step in (0..FADE_STEPS).rev() {
        let opacity = f64::from(step) / f64::from(FADE_STEPS);
        let _ = element.style().set_property("opacity", &format!("{opacity:.2}"));
        TimeoutFuture::new(FADE_STEP_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_status_id() {
        assert_eq!(catalog_status_id(GameId(42)), "game_42");
    }

    #[test]
    fn test_wishlist_row_id() {
        assert_eq!(wishlist_row_id(GameId(7)), "my-game_7");
    }
}
