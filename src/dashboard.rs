//! Dashboard screen: the country carousel, the place carousel it
//! drives, and the scroll-driven focus lens over both.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use wayfare::{lens_metric, lens_opacity, settle_index, Country, PaddedList, TrackEntry};

use crate::components::TextButton;
use crate::config::*;
use crate::utils::{debounce_callback, px, scroll_offset};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub countries: Rc<Vec<Country>>,
    pub navigate: Callback<Route>,
}

fn render_header() -> Html {
    html! {
        <div class="dashboard-header">
            <button class="drawer-button">
                <img src="assets/icons/side_drawer.svg" alt="menu" />
            </button>
            <div class="dashboard-header-title">{ "ASIA" }</div>
            <button class="profile-button">
                <img class="profile-avatar" src="assets/icons/profile.svg" alt="profile" />
            </button>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let layout = *use_memo((), |_| LayoutProfile::detect());

    // Single source of truth for the cross-carousel dependency: the
    // places track below is a pure projection of this index.
    let selected_country_idx = use_state(|| 0usize);

    let country_scroll_x = use_state(|| 0.0f64);
    let places_scroll_x = use_state(|| 0.0f64);
    // Leaf state: consumed by the explore action, replaces nothing.
    let places_settled_idx = use_state(|| 0usize);

    let country_settle_timer = use_state(|| None::<Timeout>);
    let places_settle_timer = use_state(|| None::<Timeout>);
    let places_row_ref = use_node_ref();

    let country_track = use_memo(props.countries.clone(), |countries| {
        PaddedList::new((**countries).clone())
    });

    let places_track = use_memo(
        (props.countries.clone(), *selected_country_idx),
        |(countries, idx)| {
            let places = countries
                .get(*idx)
                .map(|country| country.places.clone())
                .unwrap_or_default();
            PaddedList::new(places)
        },
    );

    // A country change rebuilds the places track; reset its visual
    // scroll state and the recorded settle index alongside.
    {
        let places_row_ref = places_row_ref.clone();
        let places_scroll_x = places_scroll_x.clone();
        let places_settled_idx = places_settled_idx.clone();
        use_effect_with(*selected_country_idx, move |_| {
            if let Some(row) = places_row_ref.cast::<Element>() {
                row.set_scroll_left(0);
            }
            places_scroll_x.set(0.0);
            places_settled_idx.set(0);
        });
    }

    let on_country_settle = {
        let selected_country_idx = selected_country_idx.clone();
        let len = props.countries.len();
        let item_size = layout.country_item_size;
        Callback::from(move |offset: f64| {
            if let Some(index) = settle_index(offset, item_size, len) {
                selected_country_idx.set(index);
            }
        })
    };

    let on_country_scroll = {
        let country_scroll_x = country_scroll_x.clone();
        let country_settle_timer = country_settle_timer.clone();
        let on_country_settle = on_country_settle.clone();
        Callback::from(move |e: Event| {
            let offset = scroll_offset(&e);
            country_scroll_x.set(offset);
            debounce_callback(
                &country_settle_timer,
                on_country_settle.clone(),
                offset,
                SETTLE_DEBOUNCE_MS,
            );
        })
    };

    let on_places_settle = {
        let places_settled_idx = places_settled_idx.clone();
        let len = places_track.real_len();
        let item_size = layout.places_item_size;
        Callback::from(move |offset: f64| {
            if let Some(index) = settle_index(offset, item_size, len) {
                places_settled_idx.set(index);
            }
        })
    };

    let on_places_scroll = {
        let places_scroll_x = places_scroll_x.clone();
        let places_settle_timer = places_settle_timer.clone();
        let on_places_settle = on_places_settle.clone();
        Callback::from(move |e: Event| {
            let offset = scroll_offset(&e);
            places_scroll_x.set(offset);
            debounce_callback(
                &places_settle_timer,
                on_places_settle.clone(),
                offset,
                SETTLE_DEBOUNCE_MS,
            );
        })
    };

    let on_explore = {
        let places_track = places_track.clone();
        let places_settled_idx = places_settled_idx.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| {
            match places_track.resolve_settled(*places_settled_idx) {
                Ok(place) => navigate.emit(Route::Place(Rc::new(place.clone()))),
                Err(e) => log::warn!("explore pressed with no place available: {}", e),
            }
        })
    };

    let country_items = country_track
        .entries()
        .map(|entry| match entry {
            TrackEntry::Spacer => html! {
                <div class="carousel-spacer"
                    style={format!("width: {};", px(layout.country_item_size))}></div>
            },
            TrackEntry::Item { index, value } => {
                let opacity = lens_opacity(*country_scroll_x, index, layout.country_item_size);
                let icon_size = lens_metric(
                    *country_scroll_x,
                    index,
                    layout.country_item_size,
                    COUNTRY_ICON_REST,
                    layout.country_icon_focus,
                );
                let font_size = lens_metric(
                    *country_scroll_x,
                    index,
                    layout.country_item_size,
                    COUNTRY_FONT_REST,
                    COUNTRY_FONT_FOCUS,
                );
                html! {
                    <div key={value.id.to_string()} class="country-item"
                        style={format!(
                            "width: {}; height: {}; opacity: {:.3};",
                            px(layout.country_item_size),
                            px(COUNTRY_ROW_HEIGHT),
                            opacity,
                        )}>
                        <img class="country-icon" src={value.image.clone()} alt={value.name.clone()}
                            style={format!("width: {0}; height: {0};", px(icon_size))} />
                        <div class="country-name"
                            style={format!("font-size: {};", px(font_size))}>
                            { &value.name }
                        </div>
                    </div>
                }
            }
        })
        .collect::<Html>();

    let place_cards = places_track
        .entries()
        .map(|entry| match entry {
            TrackEntry::Spacer => html! {
                <div class="carousel-spacer"
                    style={format!("width: {};", px(layout.empty_item_size))}></div>
            },
            TrackEntry::Item { index, value } => {
                let opacity = lens_opacity(*places_scroll_x, index, layout.places_item_size);
                let height = lens_metric(
                    *places_scroll_x,
                    index,
                    layout.places_item_size,
                    layout.card_rest_height,
                    layout.card_active_height,
                );
                html! {
                    <div key={value.id.to_string()} class="place-card"
                        style={format!(
                            "width: {}; height: {}; opacity: {:.3}; background-image: url('{}');",
                            px(layout.places_item_size),
                            px(height),
                            opacity,
                            value.image,
                        )}>
                        <div class="place-card-body">
                            <div class="place-card-name">{ &value.name }</div>
                            <div class="place-card-description">{ &value.description }</div>
                        </div>
                        <TextButton label="Explore"
                            class={classes!("explore-button")}
                            onclick={on_explore.clone()} />
                    </div>
                }
            }
        })
        .collect::<Html>();

    html! {
        <div class="screen dashboard-screen">
            { render_header() }
            <div class="dashboard-scroll">
                <div class="carousel-row countries-row" onscroll={on_country_scroll}>
                    { country_items }
                </div>
                <div class="carousel-row places-row" ref={places_row_ref}
                    onscroll={on_places_scroll}
                    style={format!("height: {};", px(layout.card_active_height + 60.0))}>
                    { place_cards }
                </div>
            </div>
        </div>
    }
}
