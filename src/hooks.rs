//! Browser-facing hooks: the header's scroll flag and the one-shot reveal
//! flag behind every entrance animation.
//!
//! Both register a JS closure with the DOM inside an effect and detach it in the
//! effect's teardown. When the browser API is missing they log and fall back to
//! a static state instead of panicking.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// True once the page has moved strictly past `threshold` pixels.
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the window has been scrolled past `threshold`.
///
/// Only flips of the flag cause a re-render.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let threshold = *threshold;
                let listener = match window() {
                    Some(window) => {
                        let target = window.clone();
                        let update = scrolled.clone();
                        let scroll_callback = Closure::wrap(Box::new(move || {
                            let offset = target.scroll_y().unwrap_or(0.0);
                            update.set(past_threshold(offset, threshold));
                        }) as Box<dyn FnMut()>);

                        match window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => {
                                // Initial check, the page may be restored mid-scroll
                                let offset = window.scroll_y().unwrap_or(0.0);
                                scrolled.set(past_threshold(offset, threshold));
                                Some((window, scroll_callback))
                            }
                            Err(err) => {
                                warn!("could not listen for scroll events: {:?}", err);
                                None
                            }
                        }
                    }
                    None => {
                        warn!("no window available, header stays in its top-of-page state");
                        None
                    }
                };

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            threshold,
        );
    }

    *scrolled
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(element: &Element, on_visible: impl Fn() + 'static) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if intersecting {
            on_visible();
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Returns true from the first time `node` enters the viewport onwards.
///
/// The observer disconnects after the first hit, so scrolling the element out
/// and back in does not replay the animation.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observation = match node.cast::<Element>() {
                    Some(element) => {
                        let reveal = visible.clone();
                        match observe_once(&element, move || reveal.set(true)) {
                            Ok(observation) => Some(observation),
                            Err(err) => {
                                warn!("IntersectionObserver unavailable ({:?}), showing content immediately", err);
                                visible.set(true);
                                None
                            }
                        }
                    }
                    None => {
                        debug!("reveal target not mounted, showing content immediately");
                        visible.set(true);
                        None
                    }
                };

                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

/// Classes for an element animated by [`use_reveal`].
pub fn reveal_classes(visible: bool) -> Classes {
    classes!("reveal", visible.then_some("is-visible"))
}

/// Inline `transition-delay` for staggered reveals; `None` when there is no delay.
pub fn reveal_delay(delay: Option<f64>) -> Option<String> {
    delay
        .filter(|seconds| *seconds > 0.0)
        .map(|seconds| format!("transition-delay: {seconds}s"))
}
