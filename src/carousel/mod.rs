//! Carousel core
//!
//! Pure and platform-independent:
//! - `layout`: ring angle -> per-item render hints
//! - `controller`: drag / step state machine over the ring angle
//! - `tilt`: pointer-follow tilt for the focused card
//!
//! [`Carousel`] ties them together: every state change recomputes the full
//! hint list and republishes it to subscribers.

pub mod controller;
pub mod item;
pub mod layout;
pub mod tilt;

pub use controller::{DragPhase, RingController, RingInput, RingState, StepDirection};
pub use item::Item;
pub use layout::{LayoutTuning, RenderHint, RingLayout};
pub use tilt::CardTilt;

use crate::error::CarouselError;
use crate::settings::Settings;

/// Handle returned by [`Carousel::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u32);

type HintListener = Box<dyn FnMut(&[RenderHint])>;

/// A ring of items with its interaction state and published hints
pub struct Carousel {
    items: Vec<Item>,
    layout: RingLayout,
    controller: RingController,
    hints: Vec<RenderHint>,
    listeners: Vec<(SubscriberId, HintListener)>,
    next_listener: u32,
}

impl Carousel {
    pub fn new(items: Vec<Item>, settings: &Settings) -> Result<Self, CarouselError> {
        let layout = RingLayout::new(
            items.len(),
            settings.step_deg,
            settings.radius,
            settings.tuning,
        )?;
        let controller = RingController::for_layout(&layout, settings.drag_sensitivity)?;
        let hints = layout.hints(controller.current_angle());

        log::info!(
            "Carousel ready: {} items, step {:.1}°, radius {:.0}",
            layout.count(),
            layout.step(),
            layout.radius()
        );

        Ok(Self {
            items,
            layout,
            controller,
            hints,
            listeners: Vec::new(),
            next_listener: 1,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> &RingState {
        self.controller.state()
    }

    pub fn selected_index(&self) -> usize {
        self.controller.selected_index()
    }

    pub fn selected_item(&self) -> &Item {
        &self.items[self.controller.selected_index()]
    }

    /// Hints for the current state, in item order
    pub fn hints(&self) -> &[RenderHint] {
        &self.hints
    }

    /// Apply an input event; republishes hints if the state changed.
    pub fn handle(&mut self, input: RingInput) -> bool {
        let changed = self.controller.apply(input);
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn next(&mut self) -> bool {
        self.handle(RingInput::Step(StepDirection::Next))
    }

    pub fn prev(&mut self) -> bool {
        self.handle(RingInput::Step(StepDirection::Prev))
    }

    /// Activate the selected item (Enter/Space on the focused card)
    pub fn activate(&self) -> &Item {
        let item = self.selected_item();
        log::info!("[carousel] activated '{}'", item.title);
        item
    }

    /// Register a listener called with the full hint list after every change
    pub fn subscribe(&mut self, listener: impl FnMut(&[RenderHint]) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn refresh(&mut self) {
        self.hints = self.layout.hints(self.controller.current_angle());
        for (_, listener) in &mut self.listeners {
            listener(&self.hints);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn items(n: usize) -> Vec<Item> {
        (0..n).map(|i| Item::new(format!("Item {i}"))).collect()
    }

    #[test]
    fn test_empty_carousel_rejected() {
        let result = Carousel::new(Vec::new(), &Settings::default());
        assert!(matches!(
            result,
            Err(CarouselError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_initial_hints() {
        let carousel = Carousel::new(items(6), &Settings::default()).unwrap();
        assert_eq!(carousel.hints().len(), 6);
        assert!(carousel.hints()[0].is_centered);
        assert_eq!(carousel.selected_item().title, "Item 0");
    }

    #[test]
    fn test_listeners_see_every_change() {
        let mut carousel = Carousel::new(items(6), &Settings::default()).unwrap();
        let published: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        carousel.subscribe(move |hints| {
            let centered = hints.iter().position(|h| h.is_centered).unwrap();
            sink.borrow_mut().push(centered);
        });

        carousel.next();
        carousel.next();
        carousel.prev();
        // Moving without a drag changes nothing and publishes nothing
        carousel.handle(RingInput::PointerMove { x: 10.0 });

        assert_eq!(*published.borrow(), vec![1, 2, 1]);
        assert!(carousel.hints()[1].is_centered);
    }

    #[test]
    fn test_drag_publishes_intermediate_hints() {
        let mut carousel = Carousel::new(items(6), &Settings::default()).unwrap();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        carousel.subscribe(move |_| *sink.borrow_mut() += 1);

        carousel.handle(RingInput::PointerDown { x: 0.0 });
        carousel.handle(RingInput::PointerMove { x: -100.0 });
        assert!((carousel.state().current_angle - 24.0).abs() < 0.001);
        carousel.handle(RingInput::PointerUp);

        assert_eq!(*count.borrow(), 3);
        assert_eq!(carousel.selected_index(), 0);
        assert_eq!(carousel.state().current_angle, 0.0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut carousel = Carousel::new(items(3), &Settings::default()).unwrap();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = carousel.subscribe(move |_| *sink.borrow_mut() += 1);

        carousel.next();
        assert!(carousel.unsubscribe(id));
        assert!(!carousel.unsubscribe(id));
        carousel.next();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_activate_returns_selected() {
        let mut carousel = Carousel::new(items(4), &Settings::default()).unwrap();
        carousel.prev();
        assert_eq!(carousel.activate().title, "Item 3");
    }
}
