use leptos::prelude::*;

use super::browser::{BrowserOpener, BrowserViewport};
use crate::content::ResumeResource;
use crate::page::{PageController, Section, StateChange};

/// Handle to the page controller, shared through context.
///
/// Controller state changes are mirrored into signals so the view re-renders.
#[derive(Clone, Copy)]
pub struct PageControls {
    controller: StoredValue<PageController>,
    menu_open: ReadSignal<bool>,
    resume_open: ReadSignal<bool>,
}

impl PageControls {
    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn resume_open(&self) -> bool {
        self.resume_open.get()
    }

    pub fn navigate(&self, section: Section) {
        self.controller.update_value(|c| {
            c.navigate(section);
        });
    }

    pub fn toggle_menu(&self) {
        self.controller.update_value(PageController::toggle_menu);
    }

    pub fn open_resume(&self) {
        self.controller.update_value(PageController::open_resume);
    }

    pub fn close_resume(&self) {
        self.controller.update_value(PageController::close_resume);
    }

    pub fn download_resume(&self) {
        self.controller.update_value(|c| {
            if let Err(e) = c.download_resume() {
                log::warn!("resume download ignored: {e}");
            }
        });
    }

    pub fn view_resume_online(&self) {
        self.controller.update_value(|c| {
            if let Err(e) = c.view_resume_online() {
                log::warn!("resume view ignored: {e}");
            }
        });
    }
}

pub fn provide_page_controls(resume: ResumeResource) -> PageControls {
    let (menu_open, set_menu_open) = signal(false);
    let (resume_open, set_resume_open) = signal(false);

    let mut controller =
        PageController::new(Box::new(BrowserViewport), Box::new(BrowserOpener), resume);
    controller.subscribe(move |change| match change {
        StateChange::Menu(open) => set_menu_open.set(open),
        StateChange::ResumeModal(open) => set_resume_open.set(open),
    });

    let controls = PageControls {
        controller: StoredValue::new(controller),
        menu_open,
        resume_open,
    };
    provide_context(controls);
    controls
}

pub fn use_page_controls() -> PageControls {
    expect_context::<PageControls>()
}
