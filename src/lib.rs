//! Core catalogue and carousel geometry for the Wayfare travel browser.
//!
//! Everything in this crate root is pure and host-testable: the travel
//! catalogue types, the padded carousel track, settle-index derivation
//! and the focus-lens interpolation that the screens sample every
//! scroll frame. DOM concerns live in the binary.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod signal;

/// Geographic coordinate used for hotel markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Initial viewport handed to the map collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub rate: f64,
    pub price: u32,
    pub latlng: LatLng,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub rate: f64,
    pub description: String,
    pub map_initial_region: Region,
    pub hotels: Vec<Hotel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub places: Vec<Place>,
}

/// Errors raised while loading the embedded travel catalogue.
#[derive(Debug)]
pub enum CatalogueError {
    Malformed(serde_json::Error),
    NoCountries,
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::Malformed(e) => write!(f, "malformed catalogue: {}", e),
            CatalogueError::NoCountries => write!(f, "catalogue contains no countries"),
        }
    }
}

impl std::error::Error for CatalogueError {}

/// Parse the travel catalogue from its embedded JSON representation.
pub fn read_countries_from_json_str(raw: &str) -> Result<Vec<Country>, CatalogueError> {
    let countries: Vec<Country> = serde_json::from_str(raw).map_err(CatalogueError::Malformed)?;
    if countries.is_empty() {
        return Err(CatalogueError::NoCountries);
    }
    Ok(countries)
}

// ──────────────────────────────────────────────────────────────────────────────
// Padded carousel track

/// An ordered carousel track bounded by one leading and one trailing
/// sentinel spacer, so the first and last real items can center during
/// paging. Sentinels never carry data and never enter the settle or
/// interpolation math.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedList<T> {
    items: Vec<T>,
}

/// A single renderable slot in a padded track.
#[derive(Debug, PartialEq)]
pub enum TrackEntry<'a, T> {
    /// Edge sentinel; renders as an empty fixed-width slot.
    Spacer,
    /// A real item, with `index` in real-item space.
    Item { index: usize, value: &'a T },
}

#[derive(Debug, PartialEq, Eq)]
pub enum TrackError {
    EmptyTrack,
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::EmptyTrack => write!(f, "carousel track has no items"),
        }
    }
}

impl std::error::Error for TrackError {}

impl<T> PaddedList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn real_len(&self) -> usize {
        self.items.len()
    }

    /// Slot count including both sentinels.
    pub fn total_len(&self) -> usize {
        self.items.len() + 2
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate renderable slots: leading sentinel, real items, trailing
    /// sentinel.
    pub fn entries(&self) -> impl Iterator<Item = TrackEntry<'_, T>> {
        std::iter::once(TrackEntry::Spacer)
            .chain(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| TrackEntry::Item { index, value }),
            )
            .chain(std::iter::once(TrackEntry::Spacer))
    }

    /// Resolve the item for a previously recorded settled index.
    ///
    /// A settled index can go stale when the track is replaced between
    /// the settle event and the lookup, so an out-of-range index is
    /// clamped into range instead of trusted blindly.
    pub fn resolve_settled(&self, settled: usize) -> Result<&T, TrackError> {
        if self.items.is_empty() {
            return Err(TrackError::EmptyTrack);
        }
        let last = self.items.len() - 1;
        if settled > last {
            warn!(
                "settled index {} is stale for a track of {} items, clamping",
                settled,
                self.items.len()
            );
            return Ok(&self.items[last]);
        }
        Ok(&self.items[settled])
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Settle and focus-lens interpolation

/// Derive the settled item index from a carousel's final scroll offset.
///
/// `round(offset / item_width)`, clamped into `[0, len - 1]`: rapid or
/// interrupted gestures can leave the final offset outside the snap
/// grid, so the rounded result is never trusted as-is.
pub fn settle_index(offset: f64, item_width: f64, len: usize) -> Option<usize> {
    if len == 0 || item_width <= 0.0 {
        return None;
    }
    let raw = (offset / item_width).round().max(0.0) as usize;
    Some(raw.min(len - 1))
}

/// Piecewise-linear interpolation over three control points, clamping
/// to the boundary outputs outside the domain (no extrapolation).
pub fn interpolate(x: f64, input: [f64; 3], output: [f64; 3]) -> f64 {
    if x <= input[0] {
        return output[0];
    }
    if x >= input[2] {
        return output[2];
    }
    let (lo, hi, from, to) = if x < input[1] {
        (input[0], input[1], output[0], output[1])
    } else {
        (input[1], input[2], output[1], output[2])
    };
    if hi <= lo {
        return to;
    }
    from + (to - from) * ((x - lo) / (hi - lo))
}

/// Control points for the focus-lens effect, in real-item space: the
/// item at real index `i` is exactly centered at offset `i * w`.
pub fn focus_points(index: usize, item_width: f64) -> [f64; 3] {
    let i = index as f64;
    [
        (i - 1.0) * item_width,
        i * item_width,
        (i + 1.0) * item_width,
    ]
}

pub const FADED_OPACITY: f64 = 0.3;
pub const FOCUSED_OPACITY: f64 = 1.0;

/// Opacity of the item at `index` for the current scroll offset: fully
/// opaque when centered, fading one full item width away either side.
pub fn lens_opacity(offset: f64, index: usize, item_width: f64) -> f64 {
    interpolate(
        offset,
        focus_points(index, item_width),
        [FADED_OPACITY, FOCUSED_OPACITY, FADED_OPACITY],
    )
}

/// Size metric (icon size, font size or card height) of the item at
/// `index`: `focus` when centered, easing back to `rest` one full item
/// width away in either direction.
pub fn lens_metric(offset: f64, index: usize, item_width: f64, rest: f64, focus: f64) -> f64 {
    interpolate(offset, focus_points(index, item_width), [rest, focus, rest])
}

// ──────────────────────────────────────────────────────────────────────────────
// Outer-interaction gate

/// Gate for the detail screen's outer interactions while the panel
/// overlay covers the hero view.
///
/// Outer interaction is cut once the drag signal passes the threshold
/// and restored only by the panel's explicit bottom-reached event; the
/// value merely dropping back below the threshold is not enough.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGate {
    threshold: f64,
    outer_allowed: bool,
}

impl DragGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            outer_allowed: true,
        }
    }

    /// Feed a new drag-signal value; returns the resulting state.
    pub fn on_drag(&mut self, value: f64) -> bool {
        if value > self.threshold {
            self.outer_allowed = false;
        }
        self.outer_allowed
    }

    /// The panel collaborator reported full collapse.
    pub fn on_bottom_reached(&mut self) {
        self.outer_allowed = true;
    }

    pub fn outer_allowed(&self) -> bool {
        self.outer_allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: u32, name: &str) -> Place {
        Place {
            id,
            name: name.to_string(),
            image: format!("assets/images/{}.jpg", name.to_lowercase()),
            rate: 4.5,
            description: String::new(),
            map_initial_region: Region {
                latitude: 0.0,
                longitude: 0.0,
                latitude_delta: 0.1,
                longitude_delta: 0.1,
            },
            hotels: Vec::new(),
        }
    }

    #[test]
    fn opacity_is_exact_at_control_points() {
        let w = 300.0;
        for index in 0..5 {
            let center = index as f64 * w;
            assert_eq!(lens_opacity(center, index, w), FOCUSED_OPACITY);
            assert_eq!(lens_opacity(center + w, index, w), FADED_OPACITY);
            assert_eq!(lens_opacity(center - w, index, w), FADED_OPACITY);
        }
    }

    #[test]
    fn opacity_clamps_beyond_the_lens() {
        let w = 300.0;
        assert_eq!(lens_opacity(10.0 * w, 2, w), FADED_OPACITY);
        assert_eq!(lens_opacity(-10.0 * w, 2, w), FADED_OPACITY);
    }

    #[test]
    fn opacity_is_linear_between_control_points() {
        let w = 300.0;
        let halfway = lens_opacity(2.5 * w, 2, w);
        assert!((halfway - 0.65).abs() < 1e-12);
    }

    #[test]
    fn metric_peaks_at_center() {
        let w = 200.0;
        assert_eq!(lens_metric(3.0 * w, 3, w, 25.0, 80.0), 80.0);
        assert_eq!(lens_metric(2.0 * w, 3, w, 25.0, 80.0), 25.0);
        assert_eq!(lens_metric(4.0 * w, 3, w, 25.0, 80.0), 25.0);
    }

    #[test]
    fn settle_index_rounds_and_clamps() {
        assert_eq!(settle_index(0.0, 300.0, 4), Some(0));
        assert_eq!(settle_index(449.0, 300.0, 4), Some(1));
        assert_eq!(settle_index(450.0, 300.0, 4), Some(2));
        // off-grid offsets from interrupted gestures clamp into range
        assert_eq!(settle_index(-80.0, 300.0, 4), Some(0));
        assert_eq!(settle_index(9_000.0, 300.0, 4), Some(3));
        assert_eq!(settle_index(100.0, 300.0, 0), None);
        assert_eq!(settle_index(100.0, 0.0, 4), None);
    }

    #[test]
    fn padded_track_keeps_sentinels_at_both_ends() {
        let track = PaddedList::new(vec![place(1, "A"), place(2, "B"), place(3, "C")]);
        assert_eq!(track.total_len(), track.real_len() + 2);

        let entries: Vec<_> = track.entries().collect();
        assert_eq!(entries.len(), track.total_len());
        assert_eq!(entries[0], TrackEntry::Spacer);
        assert_eq!(entries[entries.len() - 1], TrackEntry::Spacer);
        for (expected, entry) in entries[1..entries.len() - 1].iter().enumerate() {
            match entry {
                TrackEntry::Item { index, .. } => assert_eq!(*index, expected),
                TrackEntry::Spacer => panic!("sentinel inside the real range"),
            }
        }
    }

    #[test]
    fn settled_explore_returns_the_centered_item() {
        // itemWidth=300, items [pad, X, Y, pad]: settling at offset 300
        // selects index 1 and explore resolves Y unchanged.
        let track = PaddedList::new(vec![place(10, "X"), place(11, "Y")]);
        let settled = settle_index(300.0, 300.0, track.real_len()).unwrap();
        assert_eq!(settled, 1);
        let resolved = track.resolve_settled(settled).unwrap();
        assert_eq!(resolved.id, 11);
    }

    #[test]
    fn stale_settled_index_clamps_instead_of_failing() {
        let track = PaddedList::new(vec![place(1, "A"), place(2, "B")]);
        assert_eq!(track.resolve_settled(7).unwrap().id, 2);

        let empty: PaddedList<Place> = PaddedList::new(Vec::new());
        assert_eq!(empty.resolve_settled(0), Err(TrackError::EmptyTrack));
    }

    #[test]
    fn drag_gate_reopens_only_on_bottom_reached() {
        let mut gate = DragGate::new(800.0);
        assert!(gate.outer_allowed());
        assert!(gate.on_drag(400.0));
        assert!(!gate.on_drag(801.0));
        // dropping back below the threshold is not enough
        assert!(!gate.on_drag(100.0));
        gate.on_bottom_reached();
        assert!(gate.outer_allowed());
        assert!(gate.on_drag(400.0));
    }

    #[test]
    fn catalogue_parses_the_payload_shape() {
        let raw = r#"[{
            "id": 1,
            "name": "Japan",
            "image": "assets/icons/japan.svg",
            "places": [{
                "id": 10,
                "name": "Tokyo",
                "image": "assets/images/tokyo.jpg",
                "rate": 4.6,
                "description": "Neon and shrines.",
                "mapInitialRegion": {
                    "latitude": 35.68,
                    "longitude": 139.76,
                    "latitudeDelta": 0.2,
                    "longitudeDelta": 0.2
                },
                "hotels": [{
                    "id": 100,
                    "name": "Palace Hotel",
                    "image": "assets/images/palace.jpg",
                    "rate": 4.8,
                    "price": 320,
                    "latlng": { "latitude": 35.69, "longitude": 139.76 }
                }]
            }]
        }]"#;
        let countries = read_countries_from_json_str(raw).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].places[0].hotels[0].price, 320);

        assert!(matches!(
            read_countries_from_json_str("[]"),
            Err(CatalogueError::NoCountries)
        ));
        assert!(matches!(
            read_countries_from_json_str("not json"),
            Err(CatalogueError::Malformed(_))
        ));
    }
}
