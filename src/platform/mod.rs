//! Platform layer
//!
//! - `input`: browser key names -> carousel commands (pure)
//! - `listener`: DOM event listeners scoped to a carousel's lifetime (wasm only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod listener;

pub use input::{Command, card_command_for_key, command_for_key};
#[cfg(target_arch = "wasm32")]
pub use listener::ScopedListener;
