//! Thin reading-progress bar pinned under the header.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::platform::{self, ScrollMetrics};

/// Fraction of the scrollable distance already covered, clamped to `0..=1`.
/// Pages that fit in the viewport report 0.
pub fn progress_ratio(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (metrics.scroll_y / scrollable).clamp(0.0, 1.0)
}

#[component]
pub fn ScrollProgress() -> Element {
    let progress = use_signal(|| progress_ratio(platform::scroll_metrics()));

    let updates = use_coroutine(move |mut rx: UnboundedReceiver<f64>| {
        let mut progress = progress;
        async move {
            while let Some(next) = rx.next().await {
                progress.set(next);
            }
        }
    });

    let guard = use_hook(move || {
        let tx = updates.tx();
        let listener = platform::on_window_event("scroll", move || {
            let _ = tx.unbounded_send(progress_ratio(platform::scroll_metrics()));
        });
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        guard.borrow_mut().take();
    });

    let percent = progress() * 100.0;

    rsx! {
        div { class: "scroll-progress", aria_hidden: "true",
            div { class: "scroll-progress__bar", style: "width: {percent:.2}%" }
        }
    }
}
