use thiserror::Error;

use super::PageState;
use crate::content::ResumeResource;

/// Opens remote resources in the browsing environment.
///
/// Both calls are fire-and-forget; failures surface only in the browser's own UI.
pub trait ResourceOpener: Send + Sync {
    fn download(&self, url: &str, file_name: &str);
    fn open_external(&self, url: &str);
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalError {
    #[error("resume dialog is not open")]
    NotOpen,
}

pub struct ResumeModal {
    opener: Box<dyn ResourceOpener>,
    resource: ResumeResource,
}

impl ResumeModal {
    pub fn new(opener: Box<dyn ResourceOpener>, resource: ResumeResource) -> Self {
        Self { opener, resource }
    }

    pub fn resource(&self) -> &ResumeResource {
        &self.resource
    }

    pub fn is_open(&self, state: &PageState) -> bool {
        state.resume_modal_open()
    }

    pub fn open(&self, state: &mut PageState) {
        state.set_resume_modal_open(true);
    }

    pub fn close(&self, state: &mut PageState) {
        state.set_resume_modal_open(false);
    }

    /// Downloads the resume under its configured file name, then closes.
    pub fn download(&self, state: &mut PageState) -> Result<(), ModalError> {
        self.ensure_open(state)?;
        log::debug!("downloading resume as {}", self.resource.file_name);
        self.opener
            .download(&self.resource.url, &self.resource.file_name);
        self.close(state);
        Ok(())
    }

    /// Opens the resume in a new browsing context, then closes.
    pub fn view_online(&self, state: &mut PageState) -> Result<(), ModalError> {
        self.ensure_open(state)?;
        log::debug!("opening resume at {}", self.resource.url);
        self.opener.open_external(&self.resource.url);
        self.close(state);
        Ok(())
    }

    fn ensure_open(&self, state: &PageState) -> Result<(), ModalError> {
        if self.is_open(state) {
            Ok(())
        } else {
            Err(ModalError::NotOpen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::{FakeOpener, Opened};

    const RESUME_URL: &str = "https://files.example.com/cv/resume.pdf";

    fn modal() -> (ResumeModal, FakeOpener) {
        let opener = FakeOpener::default();
        let resource = ResumeResource {
            url: RESUME_URL.to_string(),
            file_name: "Bilal_Iftikhar_Resume.pdf".to_string(),
        };
        (ResumeModal::new(Box::new(opener.clone()), resource), opener)
    }

    #[test]
    fn test_open_close_round_trip() {
        let (modal, _) = modal();
        let mut state = PageState::new();

        let before = modal.is_open(&state);
        modal.open(&mut state);
        assert!(modal.is_open(&state));
        modal.close(&mut state);
        assert_eq!(modal.is_open(&state), before);
    }

    #[test]
    fn test_download() {
        let (modal, opener) = modal();
        let mut state = PageState::new();

        modal.open(&mut state);
        modal.download(&mut state).unwrap();

        assert!(!modal.is_open(&state));
        assert_eq!(
            opener.calls(),
            vec![Opened::Download {
                url: RESUME_URL.to_string(),
                file_name: "Bilal_Iftikhar_Resume.pdf".to_string(),
            }]
        );
    }

    #[test]
    fn test_view_online() {
        let (modal, opener) = modal();
        let mut state = PageState::new();

        modal.open(&mut state);
        modal.view_online(&mut state).unwrap();

        assert!(!modal.is_open(&state));
        assert_eq!(
            opener.calls(),
            vec![Opened::External {
                url: RESUME_URL.to_string()
            }]
        );
    }

    #[test]
    fn test_actions_require_open_dialog() {
        let (modal, opener) = modal();
        let mut state = PageState::new();

        assert_eq!(modal.download(&mut state), Err(ModalError::NotOpen));
        assert_eq!(modal.view_online(&mut state), Err(ModalError::NotOpen));
        assert!(opener.calls().is_empty());
        assert!(!modal.is_open(&state));
    }

    #[test]
    fn test_actions_leave_menu_alone() {
        let (modal, _) = modal();
        let mut state = PageState::new();
        state.set_menu_open(true);

        modal.open(&mut state);
        modal.download(&mut state).unwrap();

        assert!(state.menu_open());
    }
}
