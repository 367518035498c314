//! Scroll-position rules for the navbar, the scroll-to-top control and
//! section highlighting, plus fragment-link targets.

pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn navbar_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Picks the section the reader is in.
///
/// A section counts once `offset` reaches `lead` pixels above its top. Every
/// section is checked, so the last qualifying one in document order wins.
pub fn current_section<'a, I>(offset: f64, sections: I, lead: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut current = None;

    for (id, top) in sections {
        if offset >= top - lead {
            current = Some(id);
        }
    }

    current
}

/// Scroll position that leaves `top` just below the fixed header.
pub fn scroll_target(top: f64, header_offset: f64) -> f64 {
    top - header_offset
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// `href="#"`: swallowed without scrolling.
    Bare,
    Id(&'a str),
    /// Not an in-page link; left to the browser.
    External,
}

impl<'a> Fragment<'a> {
    pub fn parse(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            Some("") => Self::Bare,
            Some(id) => Self::Id(id),
            None => Self::External,
        }
    }
}

/// What a click on a link should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FragmentClick<'a> {
    /// Let the browser follow the link.
    PassThrough,
    /// Prevent the default action and do nothing else.
    Swallow,
    ScrollTo { id: &'a str, top: f64 },
}

/// Resolves a link click, looking the fragment's element up through `locate`,
/// which returns the element's document offset.
pub fn resolve_fragment_click<'a, F>(href: &'a str, locate: F, header_offset: f64) -> FragmentClick<'a>
where
    F: FnOnce(&str) -> Option<f64>,
{
    match Fragment::parse(href) {
        Fragment::External => FragmentClick::PassThrough,
        Fragment::Bare => FragmentClick::Swallow,
        Fragment::Id(id) => match locate(id) {
            Some(top) => FragmentClick::ScrollTo {
                id,
                top: scroll_target(top, header_offset),
            },
            None => FragmentClick::Swallow,
        },
    }
}

pub fn is_active_link(href: &str, current: Option<&str>) -> bool {
    match (Fragment::parse(href), current) {
        (Fragment::Id(id), Some(current)) => id == current,
        _ => false,
    }
}

/// Offset-derived UI flags for one scroll event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_top_visible: bool,
    pub navbar_scrolled: bool,
    pub current_section: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub scroll_top: f64,
    pub navbar: f64,
    pub section_lead: f64,
}

impl ScrollSnapshot {
    pub fn evaluate<'a, I>(offset: f64, sections: I, thresholds: ScrollThresholds) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        Self {
            scroll_top_visible: scroll_top_visible(offset, thresholds.scroll_top),
            navbar_scrolled: navbar_scrolled(offset, thresholds.navbar),
            current_section: current_section(offset, sections, thresholds.section_lead)
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: ScrollThresholds = ScrollThresholds {
        scroll_top: 300.0,
        navbar: 50.0,
        section_lead: 200.0,
    };

    #[test]
    fn scroll_top_button_shows_only_past_threshold() {
        let cases = [
            (0.0, false),
            (299.0, false),
            (300.0, false),
            (301.0, true),
            (10_000.0, true),
        ];

        for (offset, expected) in cases {
            assert_eq!(scroll_top_visible(offset, 300.0), expected, "offset {offset}");
        }
    }

    #[test]
    fn navbar_is_scrolled_past_fifty_pixels() {
        assert!(!navbar_scrolled(0.0, 50.0));
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(51.0, 50.0));
    }

    #[test]
    fn later_qualifying_section_wins() {
        let sections = [("home", 0.0), ("about", 500.0), ("contact", 1200.0)];

        assert_eq!(current_section(650.0, sections, 200.0), Some("about"));
        assert_eq!(current_section(1000.0, sections, 200.0), Some("contact"));
        assert_eq!(current_section(0.0, sections, 200.0), Some("home"));
    }

    #[test]
    fn section_boundary_is_inclusive() {
        let sections = [("home", 0.0), ("about", 500.0)];

        assert_eq!(current_section(299.0, sections, 200.0), Some("home"));
        assert_eq!(current_section(300.0, sections, 200.0), Some("about"));
    }

    #[test]
    fn out_of_order_sections_still_use_last_match() {
        let sections = [("late", 900.0), ("early", 100.0)];

        assert_eq!(current_section(800.0, sections, 200.0), Some("early"));
    }

    #[test]
    fn no_section_before_first_threshold() {
        let sections = [("about", 500.0)];

        assert_eq!(current_section(100.0, sections, 200.0), None);
    }

    #[test]
    fn fragment_target_sits_below_header() {
        assert_eq!(scroll_target(2000.0, 70.0), 1930.0);
        assert_eq!(scroll_target(0.0, 70.0), -70.0);
    }

    #[test]
    fn fragment_hrefs_are_classified() {
        assert_eq!(Fragment::parse("#"), Fragment::Bare);
        assert_eq!(Fragment::parse("#contact"), Fragment::Id("contact"));
        assert_eq!(Fragment::parse("skill-details.html"), Fragment::External);
        assert_eq!(Fragment::parse("https://github.com/#readme"), Fragment::External);
    }

    #[test]
    fn clicking_fragment_scrolls_below_header() {
        let locate = |id: &str| (id == "contact").then_some(2000.0);

        assert_eq!(
            resolve_fragment_click("#contact", locate, 70.0),
            FragmentClick::ScrollTo {
                id: "contact",
                top: 1930.0,
            }
        );
    }

    #[test]
    fn bare_and_missing_fragments_are_swallowed() {
        let locate = |_: &str| None;

        assert_eq!(resolve_fragment_click("#", locate, 70.0), FragmentClick::Swallow);
        assert_eq!(resolve_fragment_click("#missing", locate, 70.0), FragmentClick::Swallow);
        assert_eq!(
            resolve_fragment_click("skill-details.html", locate, 70.0),
            FragmentClick::PassThrough
        );
    }

    #[test]
    fn bare_fragment_never_looks_up_an_element() {
        let locate = |_: &str| -> Option<f64> { panic!("no lookup for a bare fragment") };

        assert_eq!(resolve_fragment_click("#", locate, 70.0), FragmentClick::Swallow);
    }

    #[test]
    fn only_the_current_link_is_active() {
        let links = ["#home", "#about", "#contact"];

        let active: Vec<&str> = links
            .into_iter()
            .filter(|href| is_active_link(href, Some("contact")))
            .collect();
        assert_eq!(active, vec!["#contact"]);

        assert!(links.iter().all(|href| !is_active_link(href, None)));
        assert!(!is_active_link("#", Some("")));
    }

    #[test]
    fn snapshot_combines_all_three_rules() {
        let sections = [("home", 0.0), ("about", 500.0), ("contact", 1200.0)];

        let snapshot = ScrollSnapshot::evaluate(650.0, sections, THRESHOLDS);
        assert_eq!(
            snapshot,
            ScrollSnapshot {
                scroll_top_visible: true,
                navbar_scrolled: true,
                current_section: Some("about".to_string()),
            }
        );

        let top = ScrollSnapshot::evaluate(0.0, sections, THRESHOLDS);
        assert!(!top.scroll_top_visible);
        assert!(!top.navbar_scrolled);
        assert_eq!(top.current_section.as_deref(), Some("home"));
    }
}
