//! Interaction controller
//!
//! Owns the ring angle and selection. Pointer drags rotate the ring freely;
//! releasing snaps to the nearest item. Keyboard and button steps move the
//! selection one item at a time.

use crate::consts::DRAG_SENSITIVITY;
use crate::error::CarouselError;
use crate::{round_half_up, wrap_index};

use super::layout::{RingLayout, check_positive, resolve_step};

/// Drag phase of the ring
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is held; angle follows the pointer relative to the anchor
    Dragging { anchor_x: f32, anchor_angle: f32 },
}

/// Which way a discrete step moves the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Prev,
    Next,
}

impl StepDirection {
    fn delta(self) -> i64 {
        match self {
            StepDirection::Prev => -1,
            StepDirection::Next => 1,
        }
    }
}

/// A single input event for the ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingInput {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    /// Handled exactly like `PointerUp`
    PointerCancel,
    Step(StepDirection),
}

/// Ring state, owned by one controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingState {
    pub selected_index: usize,
    /// Free (unwrapped) ring angle in degrees
    pub current_angle: f32,
    pub drag: DragPhase,
}

impl RingState {
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }
}

#[derive(Debug, Clone)]
pub struct RingController {
    count: usize,
    step: f32,
    sensitivity: f32,
    state: RingState,
}

impl RingController {
    pub fn new(
        count: usize,
        step_override: Option<f32>,
        sensitivity: f32,
    ) -> Result<Self, CarouselError> {
        let step = resolve_step(count, step_override)?;
        check_positive("drag sensitivity", sensitivity)?;
        Ok(Self {
            count,
            step,
            sensitivity,
            state: RingState::default(),
        })
    }

    /// Controller sharing a layout's item count and step
    pub fn for_layout(layout: &RingLayout, sensitivity: f32) -> Result<Self, CarouselError> {
        Self::new(layout.count(), Some(layout.step()), sensitivity)
    }

    /// Controller with default step and sensitivity
    pub fn uniform(count: usize) -> Result<Self, CarouselError> {
        Self::new(count, None, DRAG_SENSITIVITY)
    }

    pub fn state(&self) -> &RingState {
        &self.state
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    pub fn current_angle(&self) -> f32 {
        self.state.current_angle
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Apply one input event. Returns true if the ring state changed.
    pub fn apply(&mut self, input: RingInput) -> bool {
        match input {
            RingInput::PointerDown { x } => self.pointer_down(x),
            RingInput::PointerMove { x } => self.pointer_move(x),
            RingInput::PointerUp => self.pointer_up(),
            RingInput::PointerCancel => self.pointer_cancel(),
            RingInput::Step(dir) => self.step_by(dir),
        }
    }

    pub fn pointer_down(&mut self, x: f32) -> bool {
        self.state.drag = DragPhase::Dragging {
            anchor_x: x,
            anchor_angle: self.state.current_angle,
        };
        true
    }

    pub fn pointer_move(&mut self, x: f32) -> bool {
        let DragPhase::Dragging {
            anchor_x,
            anchor_angle,
        } = self.state.drag
        else {
            return false;
        };
        let angle = anchor_angle - (x - anchor_x) * self.sensitivity * (self.step / 100.0);
        let changed = angle != self.state.current_angle;
        self.state.current_angle = angle;
        changed
    }

    /// End a drag and snap to the nearest item
    pub fn pointer_up(&mut self) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        self.state.drag = DragPhase::Idle;

        let snapped = round_half_up(self.state.current_angle / self.step) as i64;
        self.select(wrap_index(snapped, self.count));
        log::debug!(
            "[carousel] drag released, snapped to item {}",
            self.state.selected_index
        );
        true
    }

    /// A cancelled pointer snaps exactly like a release
    pub fn pointer_cancel(&mut self) -> bool {
        if self.state.is_dragging() {
            log::debug!("[carousel] pointer cancelled mid-drag");
        }
        self.pointer_up()
    }

    pub fn next(&mut self) -> bool {
        self.step_by(StepDirection::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.step_by(StepDirection::Prev)
    }

    /// Move the selection one item. An active drag is abandoned first.
    pub fn step_by(&mut self, dir: StepDirection) -> bool {
        let before = self.state;
        self.state.drag = DragPhase::Idle;

        let target = wrap_index(self.state.selected_index as i64 + dir.delta(), self.count);
        self.select(target);
        self.state != before
    }

    fn select(&mut self, index: usize) {
        debug_assert!(index < self.count, "selected index {index} out of range");
        self.state.selected_index = index;
        self.state.current_angle = index as f32 * self.step;
    }
}
