//! Ring Showcase - an interactive 3D ring carousel
//!
//! Core modules:
//! - `carousel`: Ring layout engine and interaction controller (pure, no platform deps)
//! - `renderer`: Maps render hints to CSS panel styles (DOM output on wasm)
//! - `platform`: Keyboard mapping and scoped browser event listeners
//! - `settings`: Persisted carousel tuning and preferences
//! - `showcase`: Default showcase content

pub mod carousel;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod showcase;

pub use carousel::{Carousel, Item, RenderHint, RingController, RingLayout};
pub use error::CarouselError;
pub use settings::Settings;

use glam::Vec2;

/// Carousel configuration constants
pub mod consts {
    /// Ring radius in CSS pixels
    pub const DEFAULT_RADIUS: f32 = 360.0;
    /// Degrees of rotation per pixel-of-drag, before scaling by step/100
    pub const DRAG_SENSITIVITY: f32 = 0.4;

    /// Smallest scale, reached at `SCALE_RANGE_DEG` from center
    pub const MIN_SCALE: f32 = 0.82;
    pub const SCALE_RANGE_DEG: f32 = 90.0;

    /// Floor opacity, reached at `FADE_RANGE_DEG` from center
    pub const MIN_OPACITY: f32 = 0.18;
    pub const FADE_RANGE_DEG: f32 = 140.0;

    /// Items further than this from center are not drawn at all
    pub const HIDE_THRESHOLD_DEG: f32 = 140.0;

    /// Base stacking order; keeps z-index positive for typical radii
    pub const STACK_BASE: f32 = 1000.0;

    /// CSS perspective of the scene (px)
    pub const SCENE_PERSPECTIVE: f32 = 1200.0;
    /// Panel transition duration (ms); 0 with reduced motion
    pub const TRANSITION_MS: u32 = 500;

    /// Card tilt per unit of pointer offset (degrees)
    pub const TILT_X_DEG: f32 = -8.0;
    pub const TILT_Y_DEG: f32 = 10.0;
}

/// Fold an angle in degrees into [-180, 180]
#[inline]
pub fn fold_degrees(angle: f32) -> f32 {
    ((angle + 180.0) % 360.0 + 360.0) % 360.0 - 180.0
}

/// Floored modulo, always in [0, m) for m > 0
#[inline]
pub fn wrap_index(n: i64, m: usize) -> usize {
    n.rem_euclid(m as i64) as usize
}

/// Round half toward +inf (matches browser `Math.round`)
#[inline]
pub fn round_half_up(x: f32) -> f32 {
    (x + 0.5).floor()
}

/// Project a ring angle (degrees) to (planar x, depth z) on a circle of radius `r`.
///
/// 0° faces the viewer: x = 0, z = r.
#[inline]
pub fn ring_to_planar(r: f32, degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(r * rad.sin(), r * rad.cos())
}
