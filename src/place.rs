//! Place detail screen: hero view beneath the sliding map panel, with
//! hotel-marker selection.

use std::rc::Rc;

use yew::prelude::*;

use wayfare::signal::DragSignal;
use wayfare::{DragGate, Place};

use crate::components::{HeaderBar, Rating, TextButton, TextIconButton};
use crate::config::*;
use crate::hooks::use_drag_listener;
use crate::map;
use crate::panel::{PanelDriver, SlidingPanel};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PlaceScreenProps {
    pub place: Rc<Place>,
    pub navigate: Callback<Route>,
}

#[function_component(PlaceScreen)]
pub fn place_screen(props: &PlaceScreenProps) -> Html {
    let layout = *use_memo((), |_| LayoutProfile::detect());

    let selected_hotel = use_state(|| None::<u32>);
    let allow_dragging = use_state(|| true);
    let gate = use_mut_ref(|| DragGate::new(layout.outer_gate_threshold));

    let signal = (*use_memo((), {
        let bottom = layout.panel_bottom;
        move |_| DragSignal::new(bottom)
    }))
    .clone();

    let on_bottom_reached = {
        let allow_dragging = allow_dragging.clone();
        let gate = gate.clone();
        Callback::from(move |_: ()| {
            gate.borrow_mut().on_bottom_reached();
            allow_dragging.set(true);
        })
    };

    let driver = (*use_memo((), {
        let signal = signal.clone();
        let on_bottom_reached = on_bottom_reached.clone();
        let (bottom, top) = (layout.panel_bottom, layout.panel_top);
        move |_| PanelDriver::new(signal, bottom, top, PANEL_FRICTION, on_bottom_reached)
    }))
    .clone();

    // Cut panel dragging once the overlay fully covers the hero, so the
    // map underneath can take the gestures; released only by the
    // explicit bottom-reached event above.
    {
        let allow_dragging = allow_dragging.clone();
        let gate = gate.clone();
        use_drag_listener(
            signal.clone(),
            Callback::from(move |value: f64| {
                let was_allowed = gate.borrow().outer_allowed();
                let now_allowed = gate.borrow_mut().on_drag(value);
                if was_allowed != now_allowed {
                    allow_dragging.set(now_allowed);
                }
            }),
        );
    }

    // Map lifecycle follows the screen: init on mount, torn down on
    // every unmount path.
    {
        let place = props.place.clone();
        use_effect_with(props.place.id, move |_| {
            map::show_region(&place.map_initial_region);
            move || map::teardown()
        });
    }

    // Markers re-render whenever the selection changes.
    {
        let place = props.place.clone();
        let on_press = {
            let selected_hotel = selected_hotel.clone();
            Callback::from(move |id: u32| selected_hotel.set(Some(id)))
        };
        use_effect_with((props.place.id, *selected_hotel), move |&(_, selected)| {
            map::show_markers(&place.hotels, selected, on_press);
        });
    }

    let on_back = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Dashboard))
    };
    let on_hide_panel = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.hide())
    };
    let on_header_tap = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if driver.is_collapsed() {
                driver.show();
            }
        })
    };
    let on_book = Callback::from(|_: MouseEvent| log::info!("book a flight"));
    let on_details = Callback::from(|_: MouseEvent| log::info!("hotel details"));

    let hero = html! {
        <div class="place-hero"
            style={format!("background-image: url('{}');", props.place.image)}>
            <HeaderBar on_left={on_back} />
            <div class="place-hero-body">
                <div class="place-name">{ &props.place.name }</div>
                <div class="place-rate-row">
                    <span class="place-rate">{ format!("{:.1}", props.place.rate) }</span>
                    <img class="rating-star" src="assets/icons/star.svg" alt="rating" />
                </div>
                <div class="place-description">{ &props.place.description }</div>
                <TextIconButton label="Book a flight"
                    icon="assets/icons/aeroplane.svg" onclick={on_book} />
            </div>
        </div>
    };

    let hotel_card = (*selected_hotel)
        .and_then(|id| props.place.hotels.iter().find(|hotel| hotel.id == id))
        .map(|hotel| {
            html! {
                <div class="hotel-detail">
                    <div class="hotel-detail-title">
                        { format!("Hotels in {}", props.place.name) }
                    </div>
                    <div class="hotel-detail-card">
                        <img class="hotel-image" src={hotel.image.clone()} alt={hotel.name.clone()} />
                        <div class="hotel-detail-body">
                            <div class="hotel-name">{ &hotel.name }</div>
                            <Rating rate={hotel.rate} />
                            <div class="hotel-detail-footer">
                                <TextButton label="Details" onclick={on_details.clone()} />
                                <div class="hotel-price">
                                    { format!("from ${} / night", hotel.price) }
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .unwrap_or_default();

    html! {
        <div class="screen place-screen">
            { hero }
            <SlidingPanel driver={driver} allow_dragging={*allow_dragging} height={layout.panel_top}>
                <div class="panel-header" onclick={on_header_tap}>
                    <img src="assets/icons/up_arrow.svg" alt="" />
                    <div class="panel-header-label">{ "SWIPE FOR DETAILS" }</div>
                </div>
                <div class="panel-detail">
                    <div id="place-map" class="place-map"></div>
                    <HeaderBar class={classes!("panel-map-header")}
                        title={props.place.name.clone()}
                        on_left={on_hide_panel}
                        right={true} />
                    { hotel_card }
                </div>
            </SlidingPanel>
        </div>
    }
}
