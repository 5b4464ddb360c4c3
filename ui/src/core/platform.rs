//! Host environment glue: viewport width, window listeners and external links.
//!
//! Only the browser build talks to the host. Native builds (tests, tooling) report no
//! viewport and refuse external links, which callers already treat as non-fatal.

use super::error::SiteError;

#[cfg(target_arch = "wasm32")]
mod host {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::core::error::SiteError;

    pub fn viewport_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    /// Live listener on `window`. Dropping it removes the listener.
    pub struct WindowListener {
        window: web_sys::Window,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Drop for WindowListener {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }

    fn listen(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<WindowListener> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            tracing::warn!(event, ?err, "failed to attach window listener");
            return None;
        }
        Some(WindowListener { window, event, callback })
    }

    pub fn subscribe_resize(mut on_width: impl FnMut(f64) + 'static) -> Option<WindowListener> {
        listen("resize", move |_event| {
            if let Some(width) = viewport_width() {
                on_width(width);
            }
        })
    }

    pub fn subscribe_escape(mut on_escape: impl FnMut() + 'static) -> Option<WindowListener> {
        listen("keydown", move |event| {
            let pressed = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|key_event| super::is_escape_key(&key_event.key()));
            if pressed {
                on_escape();
            }
        })
    }

    pub fn open_external(url: &str) -> Result<(), SiteError> {
        let unavailable = |reason: String| SiteError::ExternalLinkUnavailable {
            url: url.to_string(),
            reason,
        };
        let window = web_sys::window().ok_or_else(|| unavailable("no window".into()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(unavailable("popup blocked".into())),
            Err(err) => Err(unavailable(format!("{err:?}"))),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use crate::core::error::SiteError;

    pub fn viewport_width() -> Option<f64> {
        None
    }

    pub struct WindowListener;

    pub fn subscribe_resize(_on_width: impl FnMut(f64) + 'static) -> Option<WindowListener> {
        None
    }

    pub fn subscribe_escape(_on_escape: impl FnMut() + 'static) -> Option<WindowListener> {
        None
    }

    pub fn open_external(url: &str) -> Result<(), SiteError> {
        Err(SiteError::ExternalLinkUnavailable {
            url: url.to_string(),
            reason: "no browser context".into(),
        })
    }
}

pub use host::{subscribe_escape, subscribe_resize, viewport_width, WindowListener};

/// `KeyboardEvent.key` values that mean Escape; older engines report `"Esc"`.
pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Open `url` in a new browsing context. Failures are logged and returned, never panicked on.
pub fn open_external(url: &str) -> Result<(), SiteError> {
    host::open_external(url).inspect_err(|err| tracing::warn!(%err, "external link not opened"))
}
