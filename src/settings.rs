//! Carousel settings and preferences
//!
//! Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::carousel::LayoutTuning;
use crate::carousel::layout::check_positive;
use crate::consts::{DEFAULT_RADIUS, DRAG_SENSITIVITY, TRANSITION_MS};
use crate::error::CarouselError;

/// Carousel settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Ring ===
    /// Ring radius (CSS px)
    pub radius: f32,
    /// Angular step override (degrees); `None` spaces items evenly
    pub step_deg: Option<f32>,
    /// Drag sensitivity (degrees per pixel, scaled by step/100)
    pub drag_sensitivity: f32,
    /// Scale/fade/hide thresholds
    pub tuning: LayoutTuning,

    // === Presentation ===
    /// Tilt the focused card toward the pointer
    pub card_tilt: bool,
    /// Show the "Use ← → or drag" hint under the controls
    pub show_controls_hint: bool,

    // === Accessibility ===
    /// Reduced motion (no panel transitions, no tilt)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            step_deg: None,
            drag_sensitivity: DRAG_SENSITIVITY,
            tuning: LayoutTuning::default(),

            card_tilt: true,
            show_controls_hint: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective tilt (respects reduced_motion)
    pub fn effective_card_tilt(&self) -> bool {
        self.card_tilt && !self.reduced_motion
    }

    /// Panel transition duration in milliseconds
    pub fn transition_ms(&self) -> u32 {
        if self.reduced_motion { 0 } else { TRANSITION_MS }
    }

    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        serde_json::from_str(json).map_err(CarouselError::Settings)
    }

    pub fn to_json(&self) -> Result<String, CarouselError> {
        serde_json::to_string(self).map_err(CarouselError::Settings)
    }

    /// Reject geometry no ring could be built from, whatever the item count
    pub fn validate(&self) -> Result<(), CarouselError> {
        check_positive("radius", self.radius)?;
        if let Some(step) = self.step_deg {
            check_positive("angular step", step)?;
        }
        check_positive("drag sensitivity", self.drag_sensitivity)
    }

    /// Settings from a stored JSON blob. Anything unparseable or invalid
    /// falls back to the defaults so the page still mounts.
    pub fn from_stored(json: &str) -> Self {
        match Self::from_json(json).and_then(|s| s.validate().map(|()| s)) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Same settings with reduced motion switched on or off
    pub fn with_reduced_motion(self, enabled: bool) -> Self {
        Self {
            reduced_motion: enabled,
            ..self
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "ring_showcase_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_stored(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::error!("Failed to write settings: {:?}", e),
                },
                Err(e) => log::error!("Failed to save settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"radius": 280.0, "tuning": {"hide_threshold_deg": 100.0}}"#).unwrap();
        assert_eq!(settings.radius, 280.0);
        assert_eq!(settings.step_deg, None);
        assert_eq!(settings.drag_sensitivity, DRAG_SENSITIVITY);
        assert_eq!(settings.tuning.hide_threshold_deg, 100.0);
        assert_eq!(settings.tuning.min_scale, 0.82);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            step_deg: Some(45.0),
            reduced_motion: true,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{radius:").unwrap_err();
        assert!(matches!(err, CarouselError::Settings(_)));
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        assert!(Settings::default().validate().is_ok());

        let bad_radius = Settings {
            radius: -5.0,
            ..Settings::default()
        };
        assert!(matches!(
            bad_radius.validate(),
            Err(CarouselError::InvalidConfiguration(_))
        ));

        let bad_step = Settings {
            step_deg: Some(0.0),
            ..Settings::default()
        };
        assert!(bad_step.validate().is_err());

        let bad_sensitivity = Settings {
            drag_sensitivity: f32::NAN,
            ..Settings::default()
        };
        assert!(bad_sensitivity.validate().is_err());
    }

    #[test]
    fn test_invalid_stored_settings_fall_back_to_defaults() {
        assert_eq!(Settings::from_stored(r#"{"radius": -5.0}"#), Settings::default());
        assert_eq!(Settings::from_stored(r#"{"step_deg": 0}"#), Settings::default());
        assert_eq!(Settings::from_stored("{radius:"), Settings::default());

        let stored = Settings::from_stored(r#"{"radius": 280.0, "step_deg": 45.0}"#);
        assert_eq!(stored.radius, 280.0);
        assert_eq!(stored.step_deg, Some(45.0));
    }

    #[test]
    fn test_stored_settings_always_build_a_carousel() {
        use crate::{Carousel, showcase};

        let stored = Settings::from_stored(r#"{"radius": -5.0, "step_deg": 0}"#);
        assert!(Carousel::new(showcase::default_items(), &stored).is_ok());
    }

    #[test]
    fn test_reduced_motion_toggle_persists() {
        let settings = Settings {
            radius: 300.0,
            ..Settings::default()
        }
        .with_reduced_motion(true);
        assert!(settings.reduced_motion);
        assert_eq!(settings.radius, 300.0);

        let stored = Settings::from_stored(&settings.to_json().unwrap());
        assert!(stored.reduced_motion);
        assert!(!stored.with_reduced_motion(false).reduced_motion);
    }

    #[test]
    fn test_reduced_motion() {
        let mut settings = Settings::default();
        assert!(settings.effective_card_tilt());
        assert_eq!(settings.transition_ms(), 500);

        settings.reduced_motion = true;
        assert!(!settings.effective_card_tilt());
        assert_eq!(settings.transition_ms(), 0);
    }
}
