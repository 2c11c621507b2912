//! Pointer-follow tilt for the focused card

use crate::consts::{TILT_X_DEG, TILT_Y_DEG};

/// Card rotation in degrees around the X and Y axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl CardTilt {
    /// Tilt for a pointer at (`x`, `y`) over a card whose rect starts at
    /// (`left`, `top`) with the given size. A degenerate rect gives no tilt.
    pub fn from_pointer(x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let px = (x - left) / width - 0.5;
        let py = (y - top) / height - 0.5;
        Self {
            rotate_x: py * TILT_X_DEG,
            rotate_y: px * TILT_Y_DEG,
        }
    }

    /// Tilt after the pointer leaves the card
    pub fn rest() -> Self {
        Self::default()
    }
}
