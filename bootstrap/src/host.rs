//! Capabilities the bootstrap needs from its environment.
//!
//! The browser implementation lives in [`crate::web`]; tests substitute
//! in-memory fakes. Everything here is single-threaded: handlers and spawned
//! tasks run on the host's event loop.

use crate::BootstrapError;
use futures_util::future::LocalBoxFuture;

/// Playback state reported by an audio context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioState {
    Suspended,
    Running,
    Closed,
}

/// An audio-output context.
pub trait AudioContext {
    fn state(&self) -> AudioState;

    /// Ask the platform to resume playback. The returned future is
    /// independent of `self` so it can be spawned.
    fn resume(&self) -> LocalBoxFuture<'static, Result<(), BootstrapError>>;
}

/// A handle to a document element.
pub trait Element {
    /// Set the element's display style to `none`.
    fn hide(&self);

    /// Replace the element's click handler.
    fn on_click(&self, handler: Box<dyn FnMut()>);
}

/// Document, audio and scheduling capabilities of the embedding page.
pub trait Host {
    type Element: Element;
    type Audio: AudioContext;

    /// Suppress the default context menu for the whole document.
    fn suppress_context_menu(&self);

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn elements_by_class_name(&self, class_name: &str) -> Vec<Self::Element>;

    /// Construct (or reuse) an audio-output context.
    fn audio_context(&self) -> Result<Self::Audio, BootstrapError>;

    /// Run `task` on the host's event loop without waiting for it.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}
