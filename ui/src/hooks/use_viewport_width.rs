use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::browser::viewport_width;

/// Report the window width once on mount and again on every resize.
#[hook]
pub fn use_viewport_width(on_width: Callback<u32>) {
    use_effect_with((), move |_| {
        let registration = web_sys::window().map(|window| {
            if let Some(width) = viewport_width(&window) {
                on_width.emit(width);
            }

            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(width) =
                    web_sys::window().as_ref().and_then(viewport_width)
                {
                    on_width.emit(width);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Err(e) = window.add_event_listener_with_callback(
                "resize",
                closure.as_ref().unchecked_ref(),
            ) {
                tracing::warn!("could not listen for resize: {e:?}");
            }
            (window, closure)
        });

        // Rust owns the closure; JS only holds a pointer until removal.
        move || {
            if let Some((window, closure)) = registration {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    closure.as_ref().unchecked_ref(),
                );
                drop(closure);
            }
        }
    });
}
