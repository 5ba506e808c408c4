//! Application-level configuration constants and the viewport lookup.

// UI Behavior
/// Quiet window after the last scroll event before a carousel counts
/// as settled.
pub const SETTLE_DEBOUNCE_MS: u32 = 120;

// Country carousel rest sizes
pub const COUNTRY_ICON_REST: f64 = 25.0;
pub const COUNTRY_FONT_REST: f64 = 15.0;
pub const COUNTRY_FONT_FOCUS: f64 = 25.0;
pub const COUNTRY_ROW_HEIGHT: f64 = 130.0;

// Sliding panel
pub const PANEL_HEADER_HEIGHT: f64 = 120.0;
pub const PANEL_FRICTION: f64 = 0.7;

/// Viewport height above which the tall layout profile applies.
pub const TALL_VIEWPORT_MIN_HEIGHT: f64 = 800.0;

// Used when the browser refuses to report a viewport size.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 390.0;
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 844.0;

/// Viewport form factor, the web rendition of the original app's
/// per-platform size tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFactor {
    Compact,
    Tall,
}

impl FormFactor {
    pub fn from_height(height: f64) -> Self {
        if height > TALL_VIEWPORT_MIN_HEIGHT {
            FormFactor::Tall
        } else {
            FormFactor::Compact
        }
    }
}

/// Sizes that depend on the viewport, resolved once when a screen is
/// composed rather than inlined at every use site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutProfile {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub form_factor: FormFactor,
    pub country_item_size: f64,
    pub places_item_size: f64,
    pub empty_item_size: f64,
    pub country_icon_focus: f64,
    pub card_rest_height: f64,
    pub card_active_height: f64,
    pub panel_bottom: f64,
    pub panel_top: f64,
    /// Drag-signal value past which the overlay covers the hero and
    /// outer interaction is cut.
    pub outer_gate_threshold: f64,
}

impl LayoutProfile {
    pub fn from_viewport(width: f64, height: f64) -> Self {
        let form_factor = FormFactor::from_height(height);
        let places_item_size = match form_factor {
            FormFactor::Tall => width / 1.25,
            FormFactor::Compact => width / 1.2,
        };
        let card_active_height = match form_factor {
            FormFactor::Tall => height / 2.0,
            FormFactor::Compact => height / 1.65,
        };
        let country_icon_focus = match form_factor {
            FormFactor::Tall => 80.0,
            FormFactor::Compact => 60.0,
        };
        Self {
            viewport_width: width,
            viewport_height: height,
            form_factor,
            country_item_size: width / 3.0,
            places_item_size,
            empty_item_size: (width - places_item_size) / 2.0,
            country_icon_focus,
            card_rest_height: height / 2.25,
            card_active_height,
            panel_bottom: PANEL_HEADER_HEIGHT,
            panel_top: height + PANEL_HEADER_HEIGHT,
            outer_gate_threshold: height,
        }
    }

    /// Resolve the profile from the browser window.
    pub fn detect() -> Self {
        let window = gloo_utils::window();
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
        Self::from_viewport(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_and_compact_profiles_diverge_at_the_height_split() {
        let compact = LayoutProfile::from_viewport(360.0, 740.0);
        assert_eq!(compact.form_factor, FormFactor::Compact);
        assert_eq!(compact.country_icon_focus, 60.0);
        assert_eq!(compact.places_item_size, 360.0 / 1.2);

        let tall = LayoutProfile::from_viewport(390.0, 844.0);
        assert_eq!(tall.form_factor, FormFactor::Tall);
        assert_eq!(tall.country_icon_focus, 80.0);
        assert_eq!(tall.card_active_height, 844.0 / 2.0);
    }

    #[test]
    fn spacers_center_the_edge_cards() {
        let layout = LayoutProfile::from_viewport(390.0, 844.0);
        let spanned = layout.places_item_size + 2.0 * layout.empty_item_size;
        assert!((spanned - layout.viewport_width).abs() < 1e-9);
    }

    #[test]
    fn panel_range_tracks_the_viewport() {
        let layout = LayoutProfile::from_viewport(390.0, 844.0);
        assert_eq!(layout.panel_bottom, PANEL_HEADER_HEIGHT);
        assert_eq!(layout.panel_top, 844.0 + PANEL_HEADER_HEIGHT);
        assert_eq!(layout.outer_gate_threshold, 844.0);
    }
}
