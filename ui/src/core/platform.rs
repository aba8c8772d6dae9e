//! Browser glue. Every helper has a native fallback that behaves like an
//! empty page, so the components also render (inertly) off the web.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::anchor_nav::SectionOffset;

/// A window event listener that is removed when the guard is dropped.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct ListenerGuard {
    #[cfg(target_arch = "wasm32")]
    window: web_sys::Window,
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    callback: Closure<dyn FnMut()>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = self
                .window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
            tracing::debug!(event = self.event, "window listener removed");
        }
    }
}

/// Register `handler` for `event` on `window`. Returns `None` when there is
/// no window (native builds, SSR) or registration fails.
pub fn on_window_event(
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> Option<ListenerGuard> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to register {event} listener: {err:?}");
            return None;
        }
        tracing::debug!(event, "window listener registered");
        Some(ListenerGuard {
            window,
            event,
            callback,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, handler);
        None
    }
}

/// A pending `requestAnimationFrame` callback; cancelled on drop.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct FrameHandle {
    #[cfg(target_arch = "wasm32")]
    id: i32,
    #[cfg(target_arch = "wasm32")]
    _callback: Closure<dyn FnMut()>,
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                // Cancelling an id that already fired is a no-op.
                let _ = window.cancel_animation_frame(self.id);
            }
        }
    }
}

/// Run `callback` before the next repaint. Without a browser it runs
/// immediately and no handle is returned.
pub fn request_frame(mut callback: impl FnMut() + 'static) -> Option<FrameHandle> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            callback();
            return None;
        };
        let closure = Closure::<dyn FnMut()>::new(callback);
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle {
                id,
                _callback: closure,
            }),
            Err(err) => {
                tracing::warn!("requestAnimationFrame failed: {err:?}");
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        callback();
        None
    }
}

/// `window.innerWidth` in CSS pixels, or 0 outside a browser.
pub fn viewport_width() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(|w| w.max(0.0) as u32)
            .unwrap_or(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

// Off the web there is no body; the last written value is kept per thread
// so callers observe the same round trip.
#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static BODY_OVERFLOW: std::cell::RefCell<String> = const { std::cell::RefCell::new(String::new()) };
}

/// Write `document.body.style.overflow`.
pub fn set_body_overflow(value: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or("document body unavailable")?;
        body.style()
            .set_property("overflow", value)
            .map_err(|err| format!("unable to set overflow: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        BODY_OVERFLOW.with(|overflow| *overflow.borrow_mut() = value.to_string());
        Ok(())
    }
}

/// Last value written by [`set_body_overflow`] on this thread.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn body_overflow() -> String {
    BODY_OVERFLOW.with(|overflow| overflow.borrow().clone())
}

/// Page scroll state used by the reading-progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

pub fn scroll_metrics() -> ScrollMetrics {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        ScrollMetrics {
            scroll_y: window.scroll_y().unwrap_or(0.0),
            document_height,
            viewport_height: window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ScrollMetrics::default()
    }
}

/// Section headings matched by a selector, captured once per mount.
#[derive(Default)]
pub struct SectionProbe {
    #[cfg(target_arch = "wasm32")]
    elements: Vec<web_sys::Element>,
}

impl SectionProbe {
    pub fn query(selector: &str) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let elements = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector_all(selector).ok())
                .map(|list| {
                    (0..list.length())
                        .filter_map(|i| list.item(i))
                        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            tracing::debug!(selector, count = elements.len(), "section probe captured");
            Self { elements }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = selector;
            Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.elements.is_empty()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            true
        }
    }

    /// Current distance of each heading from the viewport top, in document order.
    pub fn offsets(&self) -> Vec<SectionOffset> {
        #[cfg(target_arch = "wasm32")]
        {
            self.elements
                .iter()
                .map(|el| SectionOffset::new(el.id(), el.get_bounding_client_rect().y()))
                .collect()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }
}

/// Read a `localStorage` entry (theme choice, cached session).
pub fn local_storage_item(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

pub fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
