//! Browser host backed by `web-sys`.
//!
//! The page loads this module, then calls `startGame(init)` with the game
//! module's init function. Everything after that is driven by the click on
//! the trigger element.
use crate::host::{AudioContext, AudioState, Element, Host};
use crate::{BootstrapError, BootstrapOptions, PageBootstrap};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::{JsValue, wasm_bindgen};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContextState, Document, HtmlElement, Window};

/// Route Rust panics and log lines to the browser console.
///
/// `tracing` events fall through to `log` while no subscriber is installed,
/// so an embedding game that sets its own subscriber takes over cleanly.
pub fn install_hooks() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&JsValue::from_str("launchpad: a logger is already set"));
        }
    });
}

/// Install the start handler on the current page using default element names.
///
/// An exception thrown by `init` is logged and then re-raised as an unhandled
/// promise rejection, outside the Rust stack.
#[wasm_bindgen(js_name = startGame)]
pub fn start_game(init: js_sys::Function) -> Result<(), JsValue> {
    install_hooks();
    let host = WebHost::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    PageBootstrap::install(Rc::new(host), &BootstrapOptions::default(), move || {
        if let Err(err) = init.call0(&JsValue::NULL) {
            report_init_failure(err);
        }
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(())
}

fn report_init_failure(err: JsValue) {
    tracing::error!(error = %js_err(err.clone()), "Game init threw");
    // Never awaited, so the browser reports it as uncaught.
    let _ = js_sys::Promise::reject(&err);
}

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn from_window() -> Result<Self, BootstrapError> {
        let window =
            web_sys::window().ok_or_else(|| BootstrapError::Host("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| BootstrapError::Host("no document".to_string()))?;
        Ok(Self { window, document })
    }

    /// `AudioContext`, falling back to the vendor-prefixed constructor.
    fn construct_audio_context(&self) -> Result<web_sys::AudioContext, BootstrapError> {
        if let Ok(ctx) = web_sys::AudioContext::new() {
            return Ok(ctx);
        }

        let ctor = js_sys::Reflect::get(&self.window, &JsValue::from_str("webkitAudioContext"))
            .map_err(|e| BootstrapError::AudioUnavailable(js_err(e)))?;
        let ctor: js_sys::Function = ctor.dyn_into().map_err(|_| {
            BootstrapError::AudioUnavailable("no AudioContext constructor".to_string())
        })?;
        let ctx = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
            .map_err(|e| BootstrapError::AudioUnavailable(js_err(e)))?;
        Ok(ctx.unchecked_into())
    }
}

impl Host for WebHost {
    type Element = WebElement;
    type Audio = WebAudio;

    fn suppress_context_menu(&self) {
        let closure = Closure::wrap(
            Box::new(|event: web_sys::Event| event.prevent_default()) as Box<dyn FnMut(_)>
        );
        if let Err(e) = self
            .document
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %js_err(e), "Failed to register contextmenu listener");
        }
        closure.forget();
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(WebElement)
    }

    fn elements_by_class_name(&self, class_name: &str) -> Vec<WebElement> {
        let collection = self.document.get_elements_by_class_name(class_name);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(WebElement)
            .collect()
    }

    fn audio_context(&self) -> Result<WebAudio, BootstrapError> {
        self.construct_audio_context().map(WebAudio)
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

pub struct WebElement(HtmlElement);

impl Element for WebElement {
    fn hide(&self) {
        if let Err(e) = self.0.style().set_property("display", "none") {
            tracing::warn!(error = %js_err(e), "Failed to hide element");
        }
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) {
        let closure = Closure::wrap(handler);
        self.0.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }
}

pub struct WebAudio(web_sys::AudioContext);

impl AudioContext for WebAudio {
    fn state(&self) -> AudioState {
        match self.0.state() {
            AudioContextState::Suspended => AudioState::Suspended,
            AudioContextState::Running => AudioState::Running,
            _ => AudioState::Closed,
        }
    }

    fn resume(&self) -> LocalBoxFuture<'static, Result<(), BootstrapError>> {
        let promise = self.0.resume();
        Box::pin(async move {
            let promise = promise.map_err(|e| BootstrapError::AudioResume(js_err(e)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| BootstrapError::AudioResume(js_err(e)))
        })
    }
}

fn js_err(err: JsValue) -> String {
    match err.dyn_into::<js_sys::Error>() {
        Ok(err) => err.to_string().into(),
        Err(err) => match err.as_string() {
            Some(msg) => msg,
            None => "Unrecognized JS Error type".to_owned(),
        },
    }
}
