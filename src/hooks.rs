//! Custom hooks shared by the screens.

use yew::prelude::*;

use wayfare::signal::DragSignal;

/// Observe a drag signal for the lifetime of the calling component.
///
/// The subscription guard is dropped in the effect's cleanup, so the
/// listener is deregistered on every unmount path — normal teardown,
/// error teardown and re-render teardown alike.
#[hook]
pub fn use_drag_listener(signal: DragSignal, on_value: Callback<f64>) {
    use_effect_with(signal, move |signal| {
        let subscription = signal.subscribe(move |value| on_value.emit(value));
        move || drop(subscription)
    });
}
