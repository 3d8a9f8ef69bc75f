use sidebar::{RouteSubscription, Router, SidebarController};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{browser::HistoryRouter, state::MenuStore};

/// Open the menu section owning the current route, now and after every
/// navigation, until the component unmounts.
#[hook]
pub fn use_route_expansion(controller: &SidebarController) {
    let (_, dispatch) = use_store::<MenuStore>();
    let controller = controller.clone();

    use_effect_with((), move |_| {
        let router = HistoryRouter::default();

        let expand = move |url: &str| {
            dispatch.reduce_mut(|store| {
                controller.on_navigation_end(url, &mut store.menu);
            });
        };

        expand(&router.current_url());
        let mut subscription = RouteSubscription::subscribe(&router, expand);

        move || subscription.release()
    });
}
