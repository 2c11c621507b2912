//! Ring layout engine
//!
//! Maps the ring angle to per-item render hints. Items sit on a circle of
//! `radius`, `step` degrees apart; item `k` is at `k * step - angle`, so the
//! item whose absolute angle folds to 0° faces the viewer.
//!
//! Everything here is pure: the same inputs always give the same hints, so
//! the whole ring is simply recomputed on every state change.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::CarouselError;
use crate::{fold_degrees, ring_to_planar, round_half_up};

/// Visual thresholds for the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    /// Scale at and beyond `scale_range_deg` from center
    pub min_scale: f32,
    pub scale_range_deg: f32,
    /// Opacity at and beyond `fade_range_deg` from center
    pub min_opacity: f32,
    pub fade_range_deg: f32,
    /// Items further than this from center are hidden
    pub hide_threshold_deg: f32,
    pub stack_base: f32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            scale_range_deg: SCALE_RANGE_DEG,
            min_opacity: MIN_OPACITY,
            fade_range_deg: FADE_RANGE_DEG,
            hide_threshold_deg: HIDE_THRESHOLD_DEG,
            stack_base: STACK_BASE,
        }
    }
}

/// Derived visual descriptor for one item at one ring angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderHint {
    /// Absolute angle around the ring (degrees, unwrapped)
    pub angle: f32,
    /// Signed offset from the viewer-facing center, in [-180, 180]
    pub offset: f32,
    pub planar_x: f32,
    /// Depth toward the viewer; larger is closer
    pub depth_z: f32,
    pub scale: f32,
    pub opacity: f32,
    pub is_centered: bool,
    pub is_hidden: bool,
    pub stack_order: i32,
}

/// Resolve the angular step for `count` items, rejecting degenerate rings
pub fn resolve_step(count: usize, step_override: Option<f32>) -> Result<f32, CarouselError> {
    if count == 0 {
        return Err(CarouselError::invalid("carousel needs at least one item"));
    }
    let step = step_override.unwrap_or(360.0 / count as f32);
    check_positive("angular step", step)?;
    Ok(step)
}

/// Reject non-finite or non-positive geometry values
pub fn check_positive(name: &str, value: f32) -> Result<(), CarouselError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CarouselError::invalid(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}

/// Ring geometry for a fixed number of items
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    count: usize,
    step: f32,
    radius: f32,
    tuning: LayoutTuning,
}

impl RingLayout {
    pub fn new(
        count: usize,
        step_override: Option<f32>,
        radius: f32,
        tuning: LayoutTuning,
    ) -> Result<Self, CarouselError> {
        let step = resolve_step(count, step_override)?;
        check_positive("radius", radius)?;
        Ok(Self {
            count,
            step,
            radius,
            tuning,
        })
    }

    /// Layout with default radius, step and tuning
    pub fn uniform(count: usize) -> Result<Self, CarouselError> {
        Self::new(count, None, DEFAULT_RADIUS, LayoutTuning::default())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Render hint for item `index` with the ring rotated to `ring_angle`
    pub fn hint(&self, index: usize, ring_angle: f32) -> RenderHint {
        let t = &self.tuning;
        let angle = index as f32 * self.step - ring_angle;
        let offset = fold_degrees(angle);
        let distance = offset.abs();

        let pos = ring_to_planar(self.radius, angle);

        // 1 at center, 0 at the end of each range
        let near_scale = 1.0 - (distance / t.scale_range_deg).min(1.0);
        let near_fade = 1.0 - (distance / t.fade_range_deg).min(1.0);

        let scale = t.min_scale + (1.0 - t.min_scale) * near_scale;
        let opacity = (t.min_opacity + (1.0 - t.min_opacity) * near_fade).clamp(0.0, 1.0);

        RenderHint {
            angle,
            offset,
            planar_x: pos.x,
            depth_z: pos.y,
            scale,
            opacity,
            is_centered: distance < self.step / 2.0,
            is_hidden: distance > t.hide_threshold_deg,
            stack_order: round_half_up(t.stack_base + pos.y) as i32,
        }
    }

    /// Render hints for every item, in item order
    pub fn hints(&self, ring_angle: f32) -> Vec<RenderHint> {
        (0..self.count).map(|k| self.hint(k, ring_angle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn six() -> RingLayout {
        RingLayout::uniform(6).unwrap()
    }

    #[test]
    fn test_zero_items_rejected() {
        let err = RingLayout::uniform(0).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_bad_step_and_radius_rejected() {
        let tuning = LayoutTuning::default();
        assert!(RingLayout::new(4, Some(0.0), 360.0, tuning).is_err());
        assert!(RingLayout::new(4, Some(f32::NAN), 360.0, tuning).is_err());
        assert!(RingLayout::new(4, None, -1.0, tuning).is_err());
        assert!(RingLayout::new(4, Some(45.0), 200.0, tuning).is_ok());
    }

    #[test]
    fn test_default_step() {
        assert_eq!(six().step(), 60.0);
        assert_eq!(RingLayout::uniform(1).unwrap().step(), 360.0);
    }

    #[test]
    fn test_front_item() {
        let hint = six().hint(0, 0.0);
        assert_eq!(hint.offset, 0.0);
        assert!(hint.planar_x.abs() < 0.001);
        assert!((hint.depth_z - 360.0).abs() < 0.001);
        assert_eq!(hint.scale, 1.0);
        assert_eq!(hint.opacity, 1.0);
        assert!(hint.is_centered);
        assert!(!hint.is_hidden);
        assert_eq!(hint.stack_order, 1360);
    }

    #[test]
    fn test_side_and_back_items() {
        let layout = six();
        // 60° away: partly scaled down and faded
        let side = layout.hint(1, 0.0);
        assert_eq!(side.offset, 60.0);
        assert!((side.scale - (0.82 + 0.18 / 3.0)).abs() < 0.0001);
        assert!((side.opacity - (0.18 + 0.82 * (1.0 - 60.0 / 140.0))).abs() < 0.0001);
        assert!(!side.is_centered);
        assert!(!side.is_hidden);

        // Directly behind: hidden, smallest, lowest in the stack
        let back = layout.hint(3, 0.0);
        assert_eq!(back.offset.abs(), 180.0);
        assert!(back.is_hidden);
        assert!((back.scale - 0.82).abs() < 0.0001);
        assert!((back.opacity - 0.18).abs() < 0.0001);
        assert_eq!(back.stack_order, 640);
    }

    #[test]
    fn test_rotation_moves_center() {
        let hints = six().hints(120.0);
        let centered: Vec<usize> = hints
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_centered)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(centered, vec![2]);
        // Wrapped angle: item 0 at -120° is visible but not centered
        assert!((hints[0].offset + 120.0).abs() < 0.001);
        assert!(!hints[0].is_hidden);
    }

    #[test]
    fn test_hide_threshold_is_strict() {
        let layout = RingLayout::new(36, None, 360.0, LayoutTuning::default()).unwrap();
        // Item 14 sits at exactly 140°
        let edge = layout.hint(14, 0.0);
        assert!((edge.offset - 140.0).abs() < 0.001);
        assert!(!edge.is_hidden);
        assert!(layout.hint(15, 0.0).is_hidden);
    }

    #[test]
    fn test_stack_order_rounds_half_up() {
        // Item 3 sits directly behind at depth -1000.5: 1000 - 1000.5 = -0.5 -> 0
        let layout = RingLayout::new(6, None, 1000.5, LayoutTuning::default()).unwrap();
        let back = layout.hint(3, 0.0);
        assert!((back.depth_z + 1000.5).abs() < 0.001);
        assert_eq!(back.stack_order, 0);
    }

    #[test]
    fn test_custom_tuning() {
        let tuning = LayoutTuning {
            hide_threshold_deg: 50.0,
            ..LayoutTuning::default()
        };
        let layout = RingLayout::new(6, None, 360.0, tuning).unwrap();
        assert!(layout.hint(1, 0.0).is_hidden);
        assert!(!layout.hint(0, 0.0).is_hidden);
    }

    proptest! {
        #[test]
        fn offset_is_folded(count in 1usize..32, index in 0usize..32, angle in -10_000.0f32..10_000.0) {
            let layout = RingLayout::uniform(count).unwrap();
            let hint = layout.hint(index % count, angle);
            prop_assert!(hint.offset >= -180.0 && hint.offset <= 180.0);
            prop_assert!(hint.scale >= 0.82 - 1e-6 && hint.scale <= 1.0 + 1e-6);
            prop_assert!(hint.opacity >= 0.0 && hint.opacity <= 1.0);
        }

        #[test]
        fn at_most_one_centered(count in 1usize..24, turns in -50i32..50, frac in -0.45f32..0.45) {
            let layout = RingLayout::uniform(count).unwrap();
            let angle = (turns as f32 + frac) * layout.step();
            let centered = layout.hints(angle).iter().filter(|h| h.is_centered).count();
            prop_assert_eq!(centered, 1);
        }

        #[test]
        fn layout_is_idempotent(count in 1usize..16, angle in -720.0f32..720.0) {
            let layout = RingLayout::uniform(count).unwrap();
            prop_assert_eq!(layout.hints(angle), layout.hints(angle));
        }
    }
}
