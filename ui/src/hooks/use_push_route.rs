use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Returns a callback that navigates to a menu link and scrolls to top.
/// Links that match no route land on the not-found page.
#[hook]
pub fn use_push_route() -> Callback<AttrValue> {
    let navigator =
        use_navigator().expect("use_push_route must be used within a router");
    Callback::from(move |href: AttrValue| {
        let route = Route::recognize(&href).unwrap_or(Route::NotFound);
        navigator.push(&route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
