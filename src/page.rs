mod modal;
mod navigator;
mod section;
mod state;
#[cfg(test)]
pub(crate) mod testing;

pub use modal::{ModalError, ResourceOpener, ResumeModal};
pub use navigator::{Navigation, SectionNavigator, Viewport, ALIGN_TOLERANCE};
pub use section::{Section, SectionError};
pub use state::{PageState, StateChange};

use crate::content::ResumeResource;

/// Owns the page toggles and drives navigation and the resume dialog.
pub struct PageController {
    state: PageState,
    navigator: SectionNavigator,
    resume: ResumeModal,
}

impl PageController {
    pub fn new(
        viewport: Box<dyn Viewport>,
        opener: Box<dyn ResourceOpener>,
        resume: ResumeResource,
    ) -> Self {
        Self {
            state: PageState::new(),
            navigator: SectionNavigator::new(viewport),
            resume: ResumeModal::new(opener, resume),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(StateChange) + Send + Sync + 'static) {
        self.state.subscribe(listener);
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open()
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.state.set_menu_open(open);
    }

    pub fn toggle_menu(&mut self) {
        let open = !self.state.menu_open();
        self.state.set_menu_open(open);
    }

    pub fn navigate_to(&mut self, section_id: &str) -> Navigation {
        self.navigator.navigate_to(section_id, &mut self.state)
    }

    pub fn navigate(&mut self, section: Section) -> Navigation {
        self.navigator.navigate(section, &mut self.state)
    }

    pub fn resume(&self) -> &ResumeResource {
        self.resume.resource()
    }

    pub fn resume_modal_open(&self) -> bool {
        self.resume.is_open(&self.state)
    }

    pub fn open_resume(&mut self) {
        self.resume.open(&mut self.state);
    }

    pub fn close_resume(&mut self) {
        self.resume.close(&mut self.state);
    }

    pub fn download_resume(&mut self) -> Result<(), ModalError> {
        self.resume.download(&mut self.state)
    }

    pub fn view_resume_online(&mut self) -> Result<(), ModalError> {
        self.resume.view_online(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeOpener, FakeViewport, Opened};
    use super::*;
    use crate::content::portfolio;
    use std::sync::{Arc, Mutex};

    fn controller() -> (PageController, FakeViewport, FakeOpener) {
        let viewport = FakeViewport::new(&[("projects", 2500.0), ("contact", 4200.0)], 4800.0);
        let opener = FakeOpener::default();
        let resume = portfolio().unwrap().resume.clone();
        let controller = PageController::new(
            Box::new(viewport.clone()),
            Box::new(opener.clone()),
            resume,
        );
        (controller, viewport, opener)
    }

    #[test]
    fn test_mobile_menu_flow() {
        let (mut page, viewport, _) = controller();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        page.subscribe(move |change| sink.lock().unwrap().push(change));

        page.toggle_menu();
        assert!(page.menu_open());
        assert_eq!(page.navigate_to("contact"), Navigation::Scrolled);

        assert!(!page.menu_open());
        assert_eq!(viewport.scroll_top(), 4200.0);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![StateChange::Menu(true), StateChange::Menu(false)]
        );
    }

    #[test]
    fn test_toggle_menu_twice() {
        let (mut page, _, _) = controller();
        page.toggle_menu();
        page.toggle_menu();
        assert!(!page.menu_open());
    }

    #[test]
    fn test_resume_download_uses_configured_resource() {
        let (mut page, _, opener) = controller();
        assert!(!page.resume_modal_open());

        page.open_resume();
        page.download_resume().unwrap();

        assert!(!page.resume_modal_open());
        let calls = opener.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            Opened::Download {
                url: page.resume().url.clone(),
                file_name: "Bilal_Iftikhar_Resume.pdf".to_string(),
            }
        );
    }

    #[test]
    fn test_resume_view_online() {
        let (mut page, _, opener) = controller();
        page.open_resume();
        page.view_resume_online().unwrap();
        assert!(!page.resume_modal_open());
        assert_eq!(
            opener.calls(),
            vec![Opened::External {
                url: page.resume().url.clone()
            }]
        );
    }

    #[test]
    fn test_menu_and_resume_can_both_be_open() {
        let (mut page, _, _) = controller();
        page.set_menu_open(true);
        page.open_resume();
        assert!(page.state().menu_open());
        assert!(page.state().resume_modal_open());

        page.close_resume();
        assert!(page.menu_open());
    }
}
