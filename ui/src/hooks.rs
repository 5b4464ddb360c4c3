//! Scope-bound hooks around the timers and the window listeners.
//!
//! Each hook owns what it starts: the timers run in `use_future` tasks and the window
//! listeners sit in hook slots, so all of them are released with the component.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::breakpoint::is_wide;
use crate::core::platform;
use crate::core::timing::{run_reveal, run_rotation};

/// `false` at mount, `true` once `delay_ms` has elapsed. Never reverts.
pub fn use_reveal(delay_ms: u64) -> Signal<bool> {
    let mut revealed = use_signal(|| false);
    use_future(move || run_reveal(delay_ms, move || revealed.set(true)));
    revealed
}

/// Index of the banner message to show; advances every `interval_ms`, modulo `len`.
pub fn use_rotation(len: usize, interval_ms: u64) -> Signal<usize> {
    let mut index = use_signal(|| 0usize);
    use_future(move || run_rotation(interval_ms, len, move |next| index.set(next)));
    index
}

/// Whether the viewport is at least `threshold` wide, tracked across resizes.
pub fn use_is_wide_viewport(threshold: f64) -> Signal<bool> {
    let mut wide = use_signal(|| {
        platform::viewport_width()
            .map(|width| is_wide(width, threshold))
            .unwrap_or(false)
    });

    // Resize callbacks arrive from the host event loop; hand widths over to a
    // coroutine so the signal is written from inside the runtime.
    let widths = use_coroutine(move |mut rx: UnboundedReceiver<f64>| async move {
        while let Some(width) = rx.next().await {
            let next = is_wide(width, threshold);
            if *wide.peek() != next {
                wide.set(next);
            }
        }
    });

    use_hook(move || {
        let tx = widths.tx();
        let subscription = platform::subscribe_resize(move |width| {
            let _ = tx.unbounded_send(width);
        });
        Rc::new(subscription)
    });

    wide
}

/// Calls `on_escape` whenever Escape is pressed anywhere in the window, wherever focus is.
pub fn use_escape_key(on_escape: Callback<()>) {
    let presses = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            on_escape.call(());
        }
    });

    use_hook(move || {
        let tx = presses.tx();
        let subscription = platform::subscribe_escape(move || {
            let _ = tx.unbounded_send(());
        });
        Rc::new(subscription)
    });
}
