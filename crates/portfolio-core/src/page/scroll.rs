//! Scroll-driven rules: anchor jumps, active menu item, scroll-to-top
//! visibility and the auto-hiding header.

use serde::Deserialize;

/// Height kept clear for the fixed header when jumping to a section
pub const HEADER_OFFSET: f64 = 80.0;

/// A section counts as current slightly before its top reaches the viewport
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Scroll position after which the scroll-to-top button shows up
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Below this position the header is always shown
pub const HEADER_HIDE_THRESHOLD: f64 = 100.0;

/// Section id targeted by an in-page link, if any.
///
/// `"#"` alone and links that are not anchors yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document scroll position that puts a section just below the header
pub fn anchor_scroll_top(element_top_in_viewport: f64, page_y: f64) -> f64 {
    element_top_in_viewport + page_y - HEADER_OFFSET
}

/// Geometry of one page section, as measured by the webview
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    #[serde(rename = "offsetTop")]
    pub offset_top: f64,
    #[serde(rename = "offsetHeight")]
    pub height: f64,
}

/// Section whose nav link should be active at `scroll_y`.
///
/// When several sections match, the last one wins. `None` means no change:
/// the previously active link stays active.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.offset_top - ACTIVE_SECTION_OFFSET;
            scroll_y > top && scroll_y <= top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

pub fn scroll_top_visible(page_y: f64) -> bool {
    page_y > SCROLL_TOP_THRESHOLD
}

/// Header placement
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeaderPosition {
    #[default]
    Shown,
    Hidden,
}

impl HeaderPosition {
    /// CSS transform for the header element
    pub fn transform(&self) -> &'static str {
        match self {
            HeaderPosition::Shown => "translateY(0)",
            HeaderPosition::Hidden => "translateY(-100%)",
        }
    }
}

/// Hides the header while scrolling down, shows it while scrolling up
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HeaderAutoHide {
    last_scroll: f64,
}

impl HeaderAutoHide {
    pub fn on_scroll(&mut self, current: f64) -> HeaderPosition {
        let position = if current > HEADER_HIDE_THRESHOLD && current > self.last_scroll {
            HeaderPosition::Hidden
        } else {
            HeaderPosition::Shown
        };
        self.last_scroll = current;
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, offset_top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }

    #[test]
    fn anchor_scroll_subtracts_header() {
        assert_eq!(anchor_scroll_top(500.0, 200.0), 620.0);
    }

    #[test]
    fn active_section_window() {
        let sections = [section("home", 0.0, 600.0), section("about", 600.0, 800.0)];

        // "home" spans (-100, 500]
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(500.0, &sections), Some("home"));
        // "about" spans (500, 1300]
        assert_eq!(active_section(500.5, &sections), Some("about"));
        assert_eq!(active_section(1300.0, &sections), Some("about"));
        assert_eq!(active_section(1400.0, &sections), None);
    }

    #[test]
    fn overlapping_sections_prefer_last() {
        let sections = [section("a", 0.0, 1000.0), section("b", 200.0, 500.0)];
        assert_eq!(active_section(300.0, &sections), Some("b"));
    }

    #[test]
    fn section_bounds_from_webview_json() {
        let json = r#"[{"id":"skills","offsetTop":1200,"offsetHeight":640}]"#;
        let sections: Vec<SectionBounds> = serde_json::from_str(json).unwrap();
        assert_eq!(sections, vec![section("skills", 1200.0, 640.0)]);
    }

    #[test]
    fn scroll_top_threshold() {
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
    }

    #[test]
    fn header_hides_on_down_and_shows_on_up() {
        let mut header = HeaderAutoHide::default();
        assert_eq!(header.on_scroll(50.0), HeaderPosition::Shown);
        assert_eq!(header.on_scroll(150.0), HeaderPosition::Hidden);
        assert_eq!(header.on_scroll(400.0), HeaderPosition::Hidden);
        assert_eq!(header.on_scroll(350.0), HeaderPosition::Shown);
        assert_eq!(header.on_scroll(360.0), HeaderPosition::Hidden);
    }

    #[test]
    fn header_always_shown_near_top() {
        let mut header = HeaderAutoHide::default();
        header.on_scroll(500.0);
        // Jumping back to the top while "scrolling down" from 0 to 80 still shows it
        assert_eq!(header.on_scroll(40.0), HeaderPosition::Shown);
        assert_eq!(header.on_scroll(80.0), HeaderPosition::Shown);
        assert_eq!(HeaderPosition::Hidden.transform(), "translateY(-100%)");
    }
}
