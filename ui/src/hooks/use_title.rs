use yew::prelude::*;

const SITE_NAME: &str = "Admin Dashboard";

/// Sets the document title to "<page> · Admin Dashboard". Pages set their own
/// title on mount, so there is no cleanup.
#[hook]
pub fn use_title(page: &str) {
    let title = format!("{page} · {SITE_NAME}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
