//! Presentation layer
//!
//! Maps render hints straight to CSS; the DOM half only exists on wasm.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
pub use style::{PanelStyle, tilt_transform};
