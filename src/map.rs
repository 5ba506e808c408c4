//! JavaScript interop for the map collaborator.
//! Provides Rust bindings to the viewport/marker helpers defined in
//! map_helpers.js; the place screen treats this boundary as an
//! external mapping component.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::Callback;

use wayfare::{Hotel, Region};

#[wasm_bindgen(module = "/map_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = initPlaceMap)]
    fn init_place_map(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64);

    #[wasm_bindgen(js_name = setMapMarkers)]
    fn set_map_markers(markers: JsValue, on_press: &js_sys::Function);

    #[wasm_bindgen(js_name = clearPlaceMap)]
    fn clear_place_map();
}

/// Marker descriptor handed across the JS boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDescriptor {
    pub id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub selected: bool,
}

thread_local! {
    /// Keeps the marker-press closure alive while the map is mounted.
    static MARKER_PRESS: RefCell<Option<Closure<dyn Fn(u32)>>> = RefCell::new(None);
}

/// Build marker descriptors, flagging at most one marker as selected.
pub fn marker_descriptors(hotels: &[Hotel], selected: Option<u32>) -> Vec<MarkerDescriptor> {
    hotels
        .iter()
        .map(|hotel| MarkerDescriptor {
            id: hotel.id,
            latitude: hotel.latlng.latitude,
            longitude: hotel.latlng.longitude,
            selected: selected == Some(hotel.id),
        })
        .collect()
}

/// Hand the initial viewport to the map collaborator.
pub fn show_region(region: &Region) {
    init_place_map(
        region.latitude,
        region.longitude,
        region.latitude_delta,
        region.longitude_delta,
    );
}

/// Replace the marker set; presses are reported back by hotel id.
pub fn show_markers(hotels: &[Hotel], selected: Option<u32>, on_press: Callback<u32>) {
    let descriptors = marker_descriptors(hotels, selected);
    let markers = match serde_wasm_bindgen::to_value(&descriptors) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("failed to serialize map markers: {}", e);
            return;
        }
    };
    let closure = Closure::wrap(Box::new(move |id: u32| on_press.emit(id)) as Box<dyn Fn(u32)>);
    set_map_markers(markers, closure.as_ref().unchecked_ref());
    MARKER_PRESS.with(|slot| *slot.borrow_mut() = Some(closure));
}

/// Tear the map down when the place screen unmounts.
pub fn teardown() {
    clear_place_map();
    MARKER_PRESS.with(|slot| *slot.borrow_mut() = None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare::LatLng;

    fn hotel(id: u32) -> Hotel {
        Hotel {
            id,
            name: format!("Hotel {}", id),
            image: String::new(),
            rate: 4.0,
            price: 100,
            latlng: LatLng {
                latitude: 35.0 + id as f64 * 0.01,
                longitude: 139.0,
            },
        }
    }

    #[test]
    fn selecting_another_hotel_replaces_the_selection() {
        let hotels = vec![hotel(1), hotel(2), hotel(3)];

        let first = marker_descriptors(&hotels, Some(1));
        assert_eq!(first.iter().filter(|m| m.selected).count(), 1);
        assert!(first[0].selected);

        let second = marker_descriptors(&hotels, Some(2));
        assert_eq!(second.iter().filter(|m| m.selected).count(), 1);
        assert!(second[1].selected);
        assert!(!second[0].selected);
    }

    #[test]
    fn no_selection_flags_no_marker() {
        let hotels = vec![hotel(1), hotel(2)];
        let markers = marker_descriptors(&hotels, None);
        assert!(markers.iter().all(|m| !m.selected));
        assert_eq!(markers.len(), 2);
    }
}
