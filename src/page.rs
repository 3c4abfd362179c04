//! Navigation and scroll state of the portfolio page

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Fraction of the page scrolled past, in [0, 1].
/// A page that fits the viewport reports 0.
pub fn scroll_progress(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let max_scroll = content_height - viewport_height;
    if max_scroll <= 0.0 || !max_scroll.is_finite() {
        return 0.0;
    }
    (offset / max_scroll).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct PageState {
    active: Section,
    pending_scroll: Option<Section>,
    scroll_progress: f32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            pending_scroll: None,
            scroll_progress: 0.0,
        }
    }
}

impl PageState {
    /// Mark `section` active and request a scroll to it on the next frame.
    pub fn navigate(&mut self, section: Section) {
        self.active = section;
        self.pending_scroll = Some(section);
    }

    /// True exactly once after `navigate(section)`.
    pub fn take_scroll_request(&mut self, section: Section) -> bool {
        if self.pending_scroll == Some(section) {
            self.pending_scroll = None;
            true
        } else {
            false
        }
    }

    pub fn update_scroll(&mut self, offset: f32, content_height: f32, viewport_height: f32) {
        self.scroll_progress = scroll_progress(offset, content_height, viewport_height);
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }
}
