use sidebar::{PromptKind, PromptRequest};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub request: PromptRequest,
    /// Called once with the user's answer. Backdrop clicks answer no.
    pub on_answer: Callback<bool>,
}

fn kind_icon(kind: PromptKind) -> &'static str {
    match kind {
        PromptKind::Question => "❓",
        PromptKind::Warning => "⚠️",
        PromptKind::Info => "ℹ️",
    }
}

#[function_component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_answer = props.on_answer.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_answer.emit(false);
            }
        })
    };

    let on_confirm_click = props.on_answer.reform(|_: MouseEvent| true);
    let on_cancel_click = props.on_answer.reform(|_: MouseEvent| false);

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 bg-neutral-900 bg-opacity-50 z-50 \
                   flex items-center justify-center p-4"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                        max-w-sm w-full p-6 text-center">
                <div class="text-4xl mb-3" aria-hidden="true">
                    {kind_icon(props.request.kind)}
                </div>
                <h3 class="text-lg font-semibold text-neutral-900 \
                           dark:text-neutral-100 mb-2">
                    {&props.request.title}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&props.request.message}
                </p>

                <div class="flex justify-center gap-3 mt-6">
                    <button
                        onclick={on_cancel_click}
                        class="px-4 py-2 text-sm font-medium \
                               text-neutral-700 dark:text-neutral-300 \
                               bg-white dark:bg-neutral-700 \
                               border border-neutral-300 dark:border-neutral-600 \
                               rounded-md hover:bg-neutral-50 \
                               dark:hover:bg-neutral-600 \
                               transition-colors"
                    >
                        {"No"}
                    </button>
                    <button
                        onclick={on_confirm_click}
                        class="px-4 py-2 text-sm font-medium text-white \
                               bg-neutral-900 hover:bg-neutral-800 \
                               dark:bg-neutral-100 dark:text-neutral-900 \
                               dark:hover:bg-neutral-200 \
                               rounded-md transition-colors"
                    >
                        {"Yes"}
                    </button>
                </div>
            </div>
        </div>
    }
}
