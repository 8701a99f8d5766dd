use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::SPY_LOOKAHEAD;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section the nav should highlight at `scroll_y`. When sections overlap,
/// the last one in document order wins. `None` leaves the current highlight as is.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let position = scroll_y + SPY_LOOKAHEAD;
    sections
        .iter()
        .filter(|section| section.contains(position))
        .last()
        .map(|section| section.id.as_str())
}

/// Reads the layout box of every `section[id]` on the page.
pub fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

/// Coalesces bursts of scroll events into one recomputation per animation frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    scheduled: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the frame callback once the work ran.
    pub fn finish(&mut self) {
        self.scheduled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page() -> Vec<SectionBounds> {
        vec![
            section("home", 0.0, 600.0),
            section("services", 600.0, 800.0),
            section("about", 1400.0, 500.0),
        ]
    }

    #[test]
    fn lookahead_is_applied() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0), Some("services"));
    }

    #[test]
    fn section_end_is_exclusive() {
        let sections = page();
        assert_eq!(active_section(&sections, 1299.0), Some("services"));
        assert_eq!(active_section(&sections, 1300.0), Some("about"));
    }

    #[test]
    fn past_last_section_matches_nothing() {
        assert_eq!(active_section(&page(), 5000.0), None);
    }

    #[test]
    fn overlapping_sections_pick_the_last() {
        let sections = vec![section("hero", 0.0, 1000.0), section("intro", 200.0, 300.0)];
        assert_eq!(active_section(&sections, 150.0), Some("intro"));
        assert_eq!(active_section(&sections, 450.0), Some("hero"));
    }

    #[test]
    fn throttle_allows_one_frame_at_a_time() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        throttle.finish();
        assert!(throttle.request());
    }
}
