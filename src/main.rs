//! Main module for the Wayfare travel browser using Yew.
//! Wires the screens together and owns the navigation state.

use std::rc::Rc;

use yew::prelude::*;

use wayfare::{read_countries_from_json_str, Country, Place};

mod components;
mod config;
mod dashboard;
mod hooks;
mod map;
mod panel;
mod place;
mod utils;

use dashboard::Dashboard;
use place::PlaceScreen;

/// Target screens handed to the navigation collaborator.
#[derive(Clone, PartialEq)]
pub enum Route {
    Dashboard,
    Place(Rc<Place>),
}

/// Primary application component: catalogue state plus the current
/// screen.
#[function_component(App)]
pub fn app() -> Html {
    let catalogue_json = include_str!("data.json");
    let countries = use_state(|| Rc::new(Vec::<Country>::new()));
    let route = use_state(|| Route::Dashboard);

    // Load the embedded catalogue on mount
    {
        let countries = countries.clone();
        use_effect_with((), move |_| {
            match read_countries_from_json_str(catalogue_json) {
                Ok(loaded) => countries.set(Rc::new(loaded)),
                Err(e) => log::warn!("failed to load travel catalogue: {}", e),
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    match &*route {
        Route::Dashboard => html! {
            <Dashboard countries={(*countries).clone()} navigate={navigate} />
        },
        Route::Place(selected) => html! {
            <PlaceScreen place={selected.clone()} navigate={navigate} />
        },
    }
}

/// Entry point: installs logging and mounts the app component.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
