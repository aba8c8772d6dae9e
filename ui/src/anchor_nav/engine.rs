//! Scroll-spy rules for the sticky anchor nav.
//!
//! A section is "passed" once its heading top sits above the threshold line
//! (`offset - threshold < 0`). Sections are visited in document order and
//! the last passed one is active, so at most one id is ever selected.

/// Marker class carried by every section heading the nav tracks.
pub const ANCHOR_CLASS: &str = "nav-anchor";

/// Modifier applied to the highlighted link.
pub const HIGHLIGHT_CLASS: &str = "sticky-nav__link--active";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    /// Heading top relative to the viewport top (CSS px, negative when above).
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the last section (document order) whose top has crossed `threshold`.
pub fn active_section(offsets: &[SectionOffset], threshold: f64) -> Option<String> {
    let mut active = None;
    for section in offsets {
        if section.top - threshold < 0.0 {
            active = Some(section.id.as_str());
        }
    }
    active.map(str::to_string)
}

/// Bytes a URI decode leaves escaped, so `%23` never becomes a fragment
/// separator.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// The fragment an anchor href points at: the decoded text after the last
/// `#`, or the whole decoded href when there is none.
pub fn link_target(href: &str) -> String {
    let decoded = decode_uri(href);
    match decoded.rsplit_once('#') {
        Some((_, fragment)) => fragment.to_string(),
        None => decoded,
    }
}

/// Percent-decode everything except escapes of reserved characters. A run
/// that does not decode to UTF-8 is kept as written.
fn decode_uri(href: &str) -> String {
    let bytes = href.as_bytes();
    let mut out = String::with_capacity(href.len());
    let mut run_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let reserved = bytes[i] == b'%'
            && i + 2 < bytes.len()
            && hex_byte(bytes[i + 1], bytes[i + 2]).is_some_and(|b| RESERVED.contains(&b));
        if reserved {
            out.push_str(&decode_run(&href[run_start..i]));
            out.push_str(&href[i..i + 3]);
            i += 3;
            run_start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&decode_run(&href[run_start..]));
    out
}

fn decode_run(run: &str) -> String {
    urlencoding::decode(run)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| run.to_string())
}

fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    let hi = char::from(hi).to_digit(16)?;
    let lo = char::from(lo).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    active.is_some_and(|id| link_target(href) == id)
}

/// Remembers the active section between scroll evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    threshold: f64,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute from fresh offsets. Returns `true` when the active id changed.
    pub fn observe(&mut self, offsets: &[SectionOffset]) -> bool {
        let next = active_section(offsets, self.threshold);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }
}

/// Collapses a burst of scroll events into one evaluation per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// `true` if the caller should schedule a frame; `false` if one is queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn release(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(raw: &[(&str, f64)]) -> Vec<SectionOffset> {
        raw.iter()
            .map(|(id, top)| SectionOffset::new(*id, *top))
            .collect()
    }

    #[test]
    fn last_passed_section_wins() {
        let sections = offsets(&[("day-1", -120.0), ("day-2", 40.0), ("day-3", 300.0)]);
        // -120 - 66 < 0 and 40 - 66 < 0; 300 - 66 is not.
        assert_eq!(active_section(&sections, 66.0).as_deref(), Some("day-2"));
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let sections = offsets(&[("day-1", 66.0), ("day-2", 400.0)]);
        assert_eq!(active_section(&sections, 66.0), None);

        let sections = offsets(&[("day-1", 65.9), ("day-2", 400.0)]);
        assert_eq!(active_section(&sections, 66.0).as_deref(), Some("day-1"));
    }

    #[test]
    fn top_of_page_has_no_active_section() {
        let sections = offsets(&[("day-1", 180.0), ("day-2", 900.0)]);
        assert_eq!(active_section(&sections, 66.0), None);
        assert_eq!(active_section(&[], 66.0), None);
    }

    #[test]
    fn link_target_strips_everything_before_last_hash() {
        assert_eq!(link_target("#day-1"), "day-1");
        assert_eq!(link_target("/launch-week#build-stage"), "build-stage");
        assert_eq!(link_target("/a#b#meetups"), "meetups");
        assert_eq!(link_target("ticket"), "ticket");
        assert_eq!(link_target("#caf%C3%A9"), "café");
    }

    #[test]
    fn reserved_escapes_stay_encoded() {
        assert_eq!(link_target("#a%23b"), "a%23b");
        assert_eq!(link_target("/lw%2Fx#day%2D2"), "day-2");
        assert_eq!(link_target("#q%3Fx%20y"), "q%3Fx y");
        assert_eq!(link_target("/page%3Ax"), "/page%3Ax");
        // Malformed runs survive untouched.
        assert_eq!(link_target("#bad%FF"), "bad%FF");
        assert_eq!(link_target("#trailing%2"), "trailing%2");
    }

    #[test]
    fn at_most_one_link_is_active() {
        let links = ["#day-1", "#day-2", "#day-3", "#build-stage", "#meetups"];
        let scroll_positions = [
            offsets(&[("day-1", 200.0), ("day-2", 900.0), ("day-3", 1600.0)]),
            offsets(&[("day-1", -10.0), ("day-2", 690.0), ("day-3", 1390.0)]),
            offsets(&[("day-1", -800.0), ("day-2", -100.0), ("day-3", 600.0)]),
            offsets(&[("day-1", -2000.0), ("day-2", -1300.0), ("day-3", -600.0)]),
        ];
        let expected = [None, Some("day-1"), Some("day-2"), Some("day-3")];

        for (sections, expected) in scroll_positions.iter().zip(expected) {
            let active = active_section(sections, 66.0);
            let highlighted: Vec<_> = links
                .iter()
                .filter(|href| is_link_active(href, active.as_deref()))
                .collect();
            assert!(highlighted.len() <= 1);
            assert_eq!(active.as_deref(), expected);
            if let Some(id) = expected {
                assert_eq!(highlighted.len(), 1);
                assert_eq!(link_target(highlighted[0]), id);
            }
        }
    }

    #[test]
    fn no_active_id_highlights_nothing() {
        assert!(!is_link_active("#day-1", None));
        assert!(!is_link_active("", None));
    }

    #[test]
    fn scroll_spy_reports_changes_only() {
        let mut spy = ScrollSpy::new(66.0);
        assert!(!spy.observe(&offsets(&[("day-1", 100.0)])));
        assert!(spy.observe(&offsets(&[("day-1", 10.0)])));
        assert_eq!(spy.active(), Some("day-1"));
        assert!(!spy.observe(&offsets(&[("day-1", -50.0)])));
        assert!(spy.observe(&offsets(&[("day-1", 100.0)])));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.release();
        assert!(gate.request());
    }
}
