use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::controllers::scroll_header::{
    offset_from_scroll_y, HeaderThresholds, ScrollHeaderController, ScrollState,
};

/// Subscribes to window scroll events for as long as the calling component
/// is mounted and returns the latest header state.
#[hook]
pub fn use_scroll_header(thresholds: HeaderThresholds) -> ScrollState {
    let controller = use_mut_ref(|| ScrollHeaderController::with_thresholds(thresholds));
    let state = use_state(ScrollState::default);

    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().and_then(|window| {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = offset_from_scroll_y(window_clone.scroll_y().unwrap_or(0.0));
                        let mut controller = controller.borrow_mut();
                        let before = controller.state();
                        let next = controller.on_scroll_sample(offset);
                        // Skip re-rendering when nothing the header shows has changed.
                        if next.is_scrolled != before.is_scrolled || next.is_visible != before.is_visible {
                            state.set(next);
                        }
                    }) as Box<dyn FnMut()>);

                    match window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some(scroll_callback),
                        Err(err) => {
                            warn!("Could not subscribe to scroll events: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not remove scroll listener: {:?}", err);
                        }
                    }
                }
            },
            (),
        );
    }

    *state
}
