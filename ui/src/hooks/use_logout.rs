use sidebar::PromptRequest;
use yew::prelude::*;

use crate::{
    browser::BrowserLocation, contexts::use_confirm,
    storage::BrowserSessionStore,
};

/// Confirm, then clear stored session data and reload at `/`.
#[hook]
pub fn use_logout(prompt: &PromptRequest) -> Callback<MouseEvent> {
    let confirm = use_confirm();
    let prompt = prompt.clone();

    Callback::from(move |_| {
        let confirm = confirm.clone();
        let prompt = prompt.clone();

        yew::platform::spawn_local(async move {
            sidebar::logout(
                &prompt,
                &confirm,
                &BrowserSessionStore,
                &BrowserLocation,
            )
            .await;
        });
    })
}
