//! Viewport width tracking.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use super::platform;

/// Current `window.innerWidth`, kept fresh by a resize listener that lives
/// as long as the calling component. Outside a browser it stays at 0.
pub fn use_viewport_width() -> Signal<u32> {
    let width = use_signal(platform::viewport_width);

    let resized = use_coroutine(move |mut rx: UnboundedReceiver<u32>| {
        let mut width = width;
        async move {
            while let Some(next) = rx.next().await {
                if *width.peek() != next {
                    width.set(next);
                }
            }
        }
    });

    let guard = use_hook(move || {
        let tx = resized.tx();
        let listener = platform::on_window_event("resize", move || {
            let _ = tx.unbounded_send(platform::viewport_width());
        });
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        // Dropping the guard removes the listener.
        guard.borrow_mut().take();
    });

    width
}
