//! Render hint -> CSS panel style
//!
//! The presentation layer makes no decisions of its own: everything here is
//! a direct mapping of a [`RenderHint`] to CSS values.

use crate::carousel::{CardTilt, RenderHint};
use crate::settings::Settings;

pub const PANEL_CLASS_CENTER: &str = "panel panel--center";
pub const PANEL_CLASS_SIDE: &str = "panel panel--side";

/// CSS values for one visible panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    pub transform: String,
    pub opacity: f32,
    pub z_index: i32,
    pub filter: &'static str,
    pub class_name: &'static str,
    pub transition: String,
    /// Hidden from assistive tech (every panel except the centered one)
    pub aria_hidden: bool,
}

impl PanelStyle {
    /// Style for a hint, or `None` if the panel should not be drawn
    pub fn from_hint(hint: &RenderHint, settings: &Settings) -> Option<Self> {
        if hint.is_hidden {
            return None;
        }

        let ms = settings.transition_ms();
        Some(Self {
            transform: format!(
                "translateZ({:.2}px) translateX({:.2}px) scale({:.4})",
                hint.depth_z, hint.planar_x, hint.scale
            ),
            opacity: if hint.is_centered { 1.0 } else { hint.opacity },
            z_index: hint.stack_order,
            filter: if hint.is_centered { "none" } else { "blur(0.5px)" },
            class_name: if hint.is_centered {
                PANEL_CLASS_CENTER
            } else {
                PANEL_CLASS_SIDE
            },
            transition: format!("transform {ms}ms, opacity {ms}ms, filter {ms}ms"),
            aria_hidden: !hint.is_centered,
        })
    }
}

/// CSS transform for a tilted card
pub fn tilt_transform(tilt: &CardTilt) -> String {
    format!(
        "rotateX({:.2}deg) rotateY({:.2}deg)",
        tilt.rotate_x, tilt.rotate_y
    )
}
