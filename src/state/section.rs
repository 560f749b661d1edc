//! Page sections and the scroll-position tracker.
//!
//! DESIGN
//! ======
//! `Section` is the closed set of page anchors in display order. The
//! tracker maps a scroll offset to the section under the navigation bar;
//! layout geometry comes in through a lookup closure so the selection
//! logic runs in plain unit tests with fabricated bounds.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Offset added to the raw scroll position before testing section bounds.
/// Compensates for the fixed navigation bar covering the top of the page.
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;

/// Page sections in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl Section {
    /// All sections in display order. Scroll tracking iterates this list
    /// and stops at the first hit, so declaration order is the tie-break.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// DOM element id of the section's anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Look up a section by its anchor id.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Navigation state shared via Leptos context.
///
/// `active` starts at `Home` and is written from two places: the scroll
/// tracker and explicit nav clicks. Last write wins; a click also starts a
/// smooth scroll whose events re-derive the same section moments later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
}

/// Vertical extent of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Whether `point` falls within `[top, top + height)`.
    pub fn contains(&self, point: f64) -> bool {
        point >= self.top && point < self.top + self.height
    }
}

/// Find the section whose bounds contain the probe point for
/// `scroll_offset`.
///
/// Sections are tested in display order and the first hit wins, so if
/// bounds ever overlap the earlier section takes precedence. Sections with
/// no bounds (not mounted yet) are skipped. Returns `None` when the probe
/// point falls outside every section.
pub fn section_at<F>(scroll_offset: f64, bounds_of: F) -> Option<Section>
where
    F: Fn(Section) -> Option<SectionBounds>,
{
    let probe = scroll_offset + SCROLL_PROBE_OFFSET;
    Section::ALL
        .into_iter()
        .find(|&section| bounds_of(section).is_some_and(|b| b.contains(probe)))
}

/// Like [`section_at`], but keeps `current` when no section contains the
/// probe point (above the first section before layout settles, or past the
/// end of the page).
pub fn next_active<F>(current: Section, scroll_offset: f64, bounds_of: F) -> Section
where
    F: Fn(Section) -> Option<SectionBounds>,
{
    section_at(scroll_offset, bounds_of).unwrap_or(current)
}
