//! Page bootstrap for the start-game button.
//!
//! Browsers will not start audio without a user gesture, so the game is
//! started from a click: the handler resumes audio, hides the overlay
//! screens and calls the game module's init function.
//!
//! The document, audio constructor and init function are injected through
//! [`Host`] so the sequence can run against fakes. On `wasm32` the
//! [`web`] module supplies the real browser host.

pub mod host;
mod sequence;
mod types;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use host::{AudioContext, AudioState, Element, Host};
pub use sequence::{Installed, PageBootstrap};
pub use types::{BootstrapError, BootstrapOptions, DEFAULT_SCREEN_CLASS, DEFAULT_TRIGGER_ID};
