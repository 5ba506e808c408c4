//! Small view-side helpers shared by the screens.

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

/// Format a pixel length for an inline style.
pub fn px(value: f64) -> String {
    format!("{value:.2}px")
}

/// Current horizontal scroll offset of the event's target element.
pub fn scroll_offset(e: &Event) -> f64 {
    let element: Element = e.target_unchecked_into();
    element.scroll_left() as f64
}

/// Create a debounced callback that cancels any previous pending call.
///
/// Scroll surfaces emit events continuously; a carousel is treated as
/// settled once no event has arrived for `delay_ms`.
pub fn debounce_callback<T: 'static>(
    timer_handle: &UseStateHandle<Option<Timeout>>,
    callback: Callback<T>,
    value: T,
    delay_ms: u32,
) {
    // Cancel any existing timer by replacing it
    timer_handle.set(None);

    let timer_handle_clone = timer_handle.clone();
    let handle = Timeout::new(delay_ms, move || {
        callback.emit(value);
        // Clear the handle after execution
        timer_handle_clone.set(None);
    });
    timer_handle.set(Some(handle));
}
