use crate::{Router, RouterEvent};

/// Holds the sidebar's router listener between mount and unmount.
///
/// Releasing drops the listener. It is fine to release more than once, or
/// without ever subscribing.
#[derive(Debug)]
pub struct RouteSubscription<L> {
    listener: Option<L>,
}

impl<L> Default for RouteSubscription<L> {
    fn default() -> Self {
        Self { listener: None }
    }
}

impl<L> RouteSubscription<L> {
    /// Listen for finished navigations only.
    pub fn subscribe<R>(
        router: &R,
        on_navigation_end: impl Fn(&str) + 'static,
    ) -> Self
    where
        R: Router<Listener = L>,
    {
        let listener =
            router.listen(Box::new(move |event: &RouterEvent| {
                if let Some(url) = event.finished_url() {
                    on_navigation_end(url);
                }
            }));
        Self {
            listener: Some(listener),
        }
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    pub fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            tracing::debug!("releasing route subscription");
            drop(listener);
        }
    }
}

impl<L> Drop for RouteSubscription<L> {
    fn drop(&mut self) {
        self.release();
    }
}
