//! Window, location and history bindings for the sidebar's collaborators.

use sidebar::{Location, Router, RouterEvent};
use std::any::Any;
use yew_router::history::{
    BrowserHistory, History, Location as HistoryLocation,
};

/// Inner width of the window in logical pixels.
pub fn viewport_width(window: &web_sys::Window) -> Option<u32> {
    let width = window.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

/// Full page loads through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn redirect(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("no window to redirect to {href}");
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            tracing::error!("redirect to {href} failed: {e:?}");
        }
    }
}

fn url_of(location: &HistoryLocation) -> String {
    format!("{}{}", location.path(), location.query_str())
}

/// The browser history shared with the app's `BrowserRouter`. History only
/// reports settled location changes, so every notification is a finished
/// navigation.
#[derive(Clone, Default)]
pub struct HistoryRouter {
    history: BrowserHistory,
}

/// Keeps a history listener registered until dropped.
pub struct HistoryListenerGuard {
    _listener: Box<dyn Any>,
}

impl Router for HistoryRouter {
    type Listener = HistoryListenerGuard;

    fn current_url(&self) -> String {
        url_of(&self.history.location())
    }

    fn listen(
        &self,
        callback: Box<dyn Fn(&RouterEvent)>,
    ) -> HistoryListenerGuard {
        let history = self.history.clone();
        let listener = self.history.listen(move || {
            callback(&RouterEvent::NavigationEnd {
                url: url_of(&history.location()),
            });
        });
        HistoryListenerGuard {
            _listener: Box::new(listener),
        }
    }
}
