//! Small browser-side utilities shared by the page components: the toast used
//! for user feedback and the per-session cache of the school directory.

use common::model::school::DrivingSchool;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Session-storage key for the fetched school list. The cache lives for one
/// browsing session and is never invalidated; staleness is tolerated.
const SCHOOL_CACHE_KEY: &str = "driving_schools_cache";

/// Returns the school list cached earlier in this browsing session, if any.
pub fn cached_schools() -> Option<Vec<DrivingSchool>> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let raw = storage.get_item(SCHOOL_CACHE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn cache_schools(schools: &[DrivingSchool]) {
    let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
    if let (Some(storage), Ok(raw)) = (storage, serde_json::to_string(schools)) {
        let _ = storage.set_item(SCHOOL_CACHE_KEY, &raw);
    }
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Injects a styled `div` into the DOM for non-blocking feedback and removes
/// it again after a few seconds. Messages may contain backend-provided text,
/// so the content is set as text, never as markup.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
