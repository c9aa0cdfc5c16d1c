//! Scroll-triggered reveal of page sections.
//!
//! Elements carrying [`MARKER_CLASS`] get [`VISIBLE_CLASS`] once they scroll
//! into view. The class is never removed. Every marked element is also
//! revealed [`FORCE_REVEAL_MS`] after install so above-the-fold content shows
//! up even where `IntersectionObserver` is unavailable.

pub const MARKER_CLASS: &str = "animate-on-scroll";
pub const VISIBLE_CLASS: &str = "visible";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FORCE_REVEAL_MS: u32 = 500;

/// Start observing marked elements and schedule the forced reveal.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        observe_marked();
        gloo_timers::callback::Timeout::new(FORCE_REVEAL_MS, reveal_all).forget();
    }
}

#[cfg(feature = "hydrate")]
fn marked_elements() -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(&format!(".{MARKER_CLASS}")) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

#[cfg(feature = "hydrate")]
fn observe_marked() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for element in marked_elements() {
                observer.observe(&element);
            }
            // The observer lives for the whole page.
            callback.forget();
        }
        Err(err) => log::warn!("scroll reveal unavailable: {err:?}"),
    }
}

#[cfg(feature = "hydrate")]
fn reveal_all() {
    for element in marked_elements() {
        let _ = element.class_list().add_1(VISIBLE_CLASS);
    }
}
