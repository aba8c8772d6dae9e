use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::config::use_site_config;
use crate::core::platform::{self, FrameHandle, ListenerGuard, SectionProbe};
use crate::core::session::{AuthState, UserSession};

use super::days::AnchorLink;
use super::engine::{
    is_link_active, link_target, FrameGate, ScrollSpy, ANCHOR_CLASS, HIGHLIGHT_CLASS,
};

type TrackerSlot = Rc<RefCell<Option<ScrollTracker>>>;

/// Everything the scroll listener needs, owned for the lifetime of one mount.
/// Dropping it removes the listener and cancels any queued frame.
struct ScrollTracker {
    probe: SectionProbe,
    spy: ScrollSpy,
    gate: FrameGate,
    _frame: Option<FrameHandle>,
    _listener: Option<ListenerGuard>,
    updates: UnboundedSender<Option<String>>,
}

impl ScrollTracker {
    fn evaluate(&mut self) {
        if self.probe.is_empty() {
            return;
        }
        if self.spy.observe(&self.probe.offsets()) {
            let _ = self
                .updates
                .unbounded_send(self.spy.active().map(str::to_string));
        }
    }
}

/// Sticky bar of in-page links for the event page. The link whose section
/// most recently scrolled past the offset line is highlighted.
#[component]
pub fn StickyAnchorNav() -> Element {
    crate::i18n::use_language_refresh();
    let config = use_site_config();
    let threshold = config.anchor_offset_px;
    let auth = try_use_context::<Signal<AuthState>>();
    let active_id = use_signal(|| Option::<String>::None);

    let updates = use_coroutine(move |mut rx: UnboundedReceiver<Option<String>>| {
        let mut active_id = active_id;
        async move {
            while let Some(next) = rx.next().await {
                active_id.set(next);
            }
        }
    });

    let tracker: TrackerSlot = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let tracker = tracker.clone();
        use_effect(move || {
            let probe = SectionProbe::query(&format!(".{ANCHOR_CLASS}"));
            if probe.is_empty() {
                tracing::debug!("sticky nav: no section anchors on page");
                return;
            }

            let mut state = ScrollTracker {
                probe,
                spy: ScrollSpy::new(threshold),
                gate: FrameGate::default(),
                _frame: None,
                _listener: None,
                updates: updates.tx(),
            };
            state.evaluate();
            tracker.borrow_mut().replace(state);

            let listener = platform::on_window_event("scroll", {
                let tracker = tracker.clone();
                move || schedule_evaluation(&tracker)
            });
            if let Some(state) = tracker.borrow_mut().as_mut() {
                state._listener = listener;
            }
        });
    }

    {
        let tracker = tracker.clone();
        use_drop(move || {
            tracker.borrow_mut().take();
        });
    }

    let active = active_id();
    let session = auth
        .map(|state| state())
        .and_then(|state| state.session().cloned())
        .filter(UserSession::has_ticket);

    let (leading, trailing): (Vec<AnchorLink>, Vec<AnchorLink>) = config
        .trailing_anchors
        .iter()
        .cloned()
        .partition(|anchor| !anchor.align_end);

    rsx! {
        div { class: "sticky-nav",
            nav { class: "sticky-nav__bar", aria_label: "Event sections",
                ul { class: "sticky-nav__list",
                    for day in config.days.iter().cloned() {
                        li { key: "{day.id}",
                            a {
                                href: day.href(),
                                class: link_class(
                                    &day.href(),
                                    active.as_deref(),
                                    day.is_current_day.then_some("sticky-nav__link--today"),
                                ),
                                "{day.label}"
                                if day.is_current_day {
                                    span { class: "sticky-nav__live", title: crate::t!("sticky-nav-live") }
                                }
                            }
                        }
                    }
                    for anchor in leading {
                        {render_anchor(anchor, active.as_deref(), session.as_ref())}
                    }
                    div { class: "sticky-nav__end",
                        for anchor in trailing {
                            {render_anchor(anchor, active.as_deref(), session.as_ref())}
                        }
                    }
                }
            }
        }
    }
}

fn schedule_evaluation(tracker: &TrackerSlot) {
    let should_schedule = tracker
        .borrow_mut()
        .as_mut()
        .map(|state| state.gate.request())
        .unwrap_or(false);
    if !should_schedule {
        return;
    }

    // The borrow is released first: off the web the frame runs synchronously.
    let frame = platform::request_frame({
        let tracker = tracker.clone();
        move || {
            if let Some(state) = tracker.borrow_mut().as_mut() {
                state.gate.release();
                state.evaluate();
            }
        }
    });

    if let Some(state) = tracker.borrow_mut().as_mut() {
        if frame.is_none() {
            state.gate.release();
        }
        state._frame = frame;
    }
}

fn render_anchor(anchor: AnchorLink, active: Option<&str>, ticket: Option<&UserSession>) -> Element {
    let is_ticket = link_target(&anchor.href) == "ticket";
    let icon = ticket.filter(|_| is_ticket).and_then(UserSession::ticket_icon);
    let label = match ticket.filter(|_| is_ticket).and_then(UserSession::first_name) {
        Some(name) => crate::t!("sticky-nav-ticket-owner", name = name),
        None => anchor.label.clone(),
    };
    let item_class = if anchor.wide_only {
        "sticky-nav__item sticky-nav__item--wide"
    } else {
        "sticky-nav__item"
    };

    rsx! {
        li { key: "{anchor.href}", class: item_class,
            a { href: "{anchor.href}", class: link_class(&anchor.href, active, None),
                if let Some(src) = icon {
                    img {
                        class: "sticky-nav__ticket-icon",
                        src: "{src}",
                        alt: "",
                        width: "20",
                        height: "20",
                    }
                }
                "{label}"
            }
        }
    }
}

/// Class list for one link; only the link matching `active` gets the highlight.
pub(crate) fn link_class(href: &str, active: Option<&str>, modifier: Option<&str>) -> String {
    let mut class = String::from("sticky-nav__link");
    if let Some(modifier) = modifier {
        class.push(' ');
        class.push_str(modifier);
    }
    if is_link_active(href, active) {
        class.push(' ');
        class.push_str(HIGHLIGHT_CLASS);
    }
    class
}
