//! Install-time wiring and the per-click start sequence.

use crate::host::{AudioContext, AudioState, Element, Host};
use crate::types::{BootstrapError, BootstrapOptions};
use std::cell::Cell;
use std::rc::Rc;

/// Wires a start button to unlock audio, hide overlay screens and call the
/// module's init function.
pub struct PageBootstrap;

impl PageBootstrap {
    /// Register context-menu suppression, look up the trigger and the
    /// hide-set once, and attach the click handler.
    ///
    /// The hide-set is fixed here; elements added to the document later are
    /// not hidden by subsequent clicks.
    pub fn install<H, F>(
        host: Rc<H>,
        options: &BootstrapOptions,
        init: F,
    ) -> Result<Installed, BootstrapError>
    where
        H: Host + 'static,
        F: Fn() + 'static,
    {
        host.suppress_context_menu();

        let trigger = host
            .element_by_id(&options.trigger_id)
            .ok_or_else(|| BootstrapError::MissingTrigger {
                id: options.trigger_id.clone(),
            })?;
        let screens = host.elements_by_class_name(&options.screen_class);
        tracing::debug!(
            trigger = %options.trigger_id,
            screens = screens.len(),
            "Installing start handler"
        );

        let clicks = Rc::new(Cell::new(0));
        let sequence = StartSequence {
            host,
            screens,
            init: Box::new(init),
            clicks: Rc::clone(&clicks),
        };
        trigger.on_click(Box::new(move || {
            if let Err(e) = sequence.run() {
                tracing::error!(error = %e, "Start sequence aborted");
            }
        }));

        Ok(Installed { clicks })
    }
}

/// Handle returned by [`PageBootstrap::install`].
#[derive(Debug, Clone)]
pub struct Installed {
    clicks: Rc<Cell<u32>>,
}

impl Installed {
    /// How many times the start sequence has run.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }
}

struct StartSequence<H: Host> {
    host: Rc<H>,
    screens: Vec<H::Element>,
    init: Box<dyn Fn()>,
    clicks: Rc<Cell<u32>>,
}

impl<H: Host> StartSequence<H> {
    fn run(&self) -> Result<(), BootstrapError> {
        self.clicks.set(self.clicks.get() + 1);

        self.unlock_audio()?;

        for screen in &self.screens {
            screen.hide();
        }

        // No borrow may be live here; a JS exception out of init skips destructors.
        (self.init)();
        Ok(())
    }

    /// Browsers refuse to start audio without a user gesture; resuming from
    /// inside the click handler is what unlocks it.
    fn unlock_audio(&self) -> Result<(), BootstrapError> {
        let audio = self.host.audio_context()?;
        if audio.state() == AudioState::Suspended {
            let resume = audio.resume();
            self.host.spawn_local(Box::pin(async move {
                if resume.await.is_ok() {
                    tracing::info!("AudioContext resumed successfully.");
                }
            }));
        }
        Ok(())
    }
}
