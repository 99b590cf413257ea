use super::{PageState, Section};

/// Distance in pixels within which a region counts as aligned with the viewport top.
pub const ALIGN_TOLERANCE: f64 = 1.0;

/// Access to the scrollable document.
pub trait Viewport: Send + Sync {
    /// Document offset of the top edge of the region with element id `id`.
    fn region_top(&self, id: &str) -> Option<f64>;
    fn scroll_top(&self) -> f64;
    /// Starts a smooth scroll and returns without waiting for it to finish.
    fn scroll_to(&self, top: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Scrolled,
    AlreadyAligned,
    Missing,
}

pub struct SectionNavigator {
    viewport: Box<dyn Viewport>,
}

impl SectionNavigator {
    pub fn new(viewport: Box<dyn Viewport>) -> Self {
        Self { viewport }
    }

    /// Scrolls the region named `section_id` to the top of the viewport.
    ///
    /// The mobile menu is closed whether or not the region exists. An unknown
    /// id scrolls nothing and is not an error.
    pub fn navigate_to(&self, section_id: &str, state: &mut PageState) -> Navigation {
        state.set_menu_open(false);

        let Some(top) = self.viewport.region_top(section_id) else {
            return Navigation::Missing;
        };
        if (self.viewport.scroll_top() - top).abs() <= ALIGN_TOLERANCE {
            return Navigation::AlreadyAligned;
        }
        self.viewport.scroll_to(top);
        Navigation::Scrolled
    }

    pub fn navigate(&self, section: Section, state: &mut PageState) -> Navigation {
        self.navigate_to(section.id(), state)
    }
}
