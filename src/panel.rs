//! Gesture-driven sliding panel.
//!
//! The in-process rendition of the panel collaborator: it owns the drag
//! mechanics and feeds the shared drag signal; screens only observe the
//! signal and the discrete bottom-reached event.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use wayfare::signal::DragSignal;

use crate::utils::px;

/// Snap animation tick length.
const SNAP_TICK_MS: u32 = 16;
/// Distance from the snap target below which the animation lands.
const SNAP_EPSILON_PX: f64 = 1.0;
/// Release speed (px/ms, upward positive) that overrides the
/// nearest-bound choice.
const RELEASE_VELOCITY_PX_MS: f64 = 0.3;

/// Handle for driving the panel: the drag range, the shared signal and
/// the imperative show/hide surface.
#[derive(Clone)]
pub struct PanelDriver {
    signal: DragSignal,
    bottom: f64,
    top: f64,
    friction: f64,
    animation: Rc<RefCell<Option<Interval>>>,
    on_bottom_reached: Callback<()>,
}

impl PanelDriver {
    pub fn new(
        signal: DragSignal,
        bottom: f64,
        top: f64,
        friction: f64,
        on_bottom_reached: Callback<()>,
    ) -> Self {
        Self {
            signal,
            bottom,
            top,
            friction,
            animation: Rc::new(RefCell::new(None)),
            on_bottom_reached,
        }
    }

    pub fn signal(&self) -> &DragSignal {
        &self.signal
    }

    pub fn value(&self) -> f64 {
        self.signal.get()
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.bottom, self.top)
    }

    /// Reveal the panel fully.
    pub fn show(&self) {
        self.animate_to(self.top);
    }

    /// Collapse the panel back to its header.
    pub fn hide(&self) {
        self.animate_to(self.bottom);
    }

    /// Whether the panel currently rests at its bottom bound.
    pub fn is_collapsed(&self) -> bool {
        (self.signal.get() - self.bottom).abs() <= SNAP_EPSILON_PX
    }

    pub fn cancel_animation(&self) {
        *self.animation.borrow_mut() = None;
    }

    /// Pick a snap target from the release velocity and animate to it.
    pub fn snap_release(&self, velocity_up: f64) {
        let value = self.signal.get();
        let target = if velocity_up > RELEASE_VELOCITY_PX_MS {
            self.top
        } else if velocity_up < -RELEASE_VELOCITY_PX_MS {
            self.bottom
        } else if value >= (self.top + self.bottom) / 2.0 {
            self.top
        } else {
            self.bottom
        };
        self.animate_to(target);
    }

    /// Friction-scaled exponential approach toward `target`; emits the
    /// bottom-reached event exactly when the bottom bound is landed on.
    fn animate_to(&self, target: f64) {
        self.cancel_animation();
        let signal = self.signal.clone();
        let friction = self.friction;
        let slot = self.animation.clone();
        let on_bottom_reached = self.on_bottom_reached.clone();
        let bottom = self.bottom;
        let interval = Interval::new(SNAP_TICK_MS, move || {
            let current = signal.get();
            let remaining = target - current;
            if remaining.abs() <= SNAP_EPSILON_PX {
                signal.set(target);
                *slot.borrow_mut() = None;
                if (target - bottom).abs() < f64::EPSILON {
                    on_bottom_reached.emit(());
                }
                return;
            }
            signal.set(current + remaining * (1.0 - friction));
        });
        *self.animation.borrow_mut() = Some(interval);
    }
}

impl PartialEq for PanelDriver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.animation, &other.animation)
    }
}

struct ActiveDrag {
    start_y: f64,
    start_value: f64,
    last_y: f64,
    last_time_ms: f64,
    velocity_up: f64,
}

#[derive(Properties, PartialEq)]
pub struct SlidingPanelProps {
    pub driver: PanelDriver,
    pub allow_dragging: bool,
    /// Full panel height; the drag range top.
    pub height: f64,
    pub children: Children,
}

/// Overlay surface whose vertical reveal follows the drag signal.
#[function_component(SlidingPanel)]
pub fn sliding_panel(props: &SlidingPanelProps) -> Html {
    let value = use_state(|| props.driver.value());

    // re-render whenever the signal moves, dragging or animating
    {
        let value = value.clone();
        use_effect_with(props.driver.clone(), move |driver| {
            let subscription = driver.signal().subscribe(move |v| value.set(v));
            move || drop(subscription)
        });
    }

    let drag = use_mut_ref(|| None::<ActiveDrag>);

    let onpointerdown = {
        let drag = drag.clone();
        let driver = props.driver.clone();
        let allow_dragging = props.allow_dragging;
        Callback::from(move |e: PointerEvent| {
            if !allow_dragging {
                return;
            }
            let element: Element = e.target_unchecked_into();
            let _ = element.set_pointer_capture(e.pointer_id());
            driver.cancel_animation();
            let y = e.client_y() as f64;
            *drag.borrow_mut() = Some(ActiveDrag {
                start_y: y,
                start_value: driver.value(),
                last_y: y,
                last_time_ms: js_sys::Date::now(),
                velocity_up: 0.0,
            });
        })
    };

    let onpointermove = {
        let drag = drag.clone();
        let driver = props.driver.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(active) = drag.borrow_mut().as_mut() {
                let y = e.client_y() as f64;
                let now = js_sys::Date::now();
                let value = driver.clamp(active.start_value + (active.start_y - y));
                driver.signal().set(value);

                let dt = now - active.last_time_ms;
                if dt > 0.0 {
                    active.velocity_up = (active.last_y - y) / dt;
                }
                active.last_y = y;
                active.last_time_ms = now;
            }
        })
    };

    let onpointerup = {
        let drag = drag.clone();
        let driver = props.driver.clone();
        Callback::from(move |_: PointerEvent| {
            if let Some(active) = drag.borrow_mut().take() {
                driver.snap_release(active.velocity_up);
            }
        })
    };

    let onpointercancel = {
        let drag = drag.clone();
        let driver = props.driver.clone();
        Callback::from(move |_: PointerEvent| {
            if drag.borrow_mut().take().is_some() {
                driver.snap_release(0.0);
            }
        })
    };

    html! {
        <div class="sliding-panel"
            style={format!("height: {}; transform: translateY(-{});", px(props.height), px(*value))}
            {onpointerdown}
            {onpointermove}
            {onpointerup}
            {onpointercancel}>
            { props.children.clone() }
        </div>
    }
}
