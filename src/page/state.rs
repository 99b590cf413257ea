use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Menu(bool),
    ResumeModal(bool),
}

type Listener = Box<dyn Fn(StateChange) + Send + Sync>;

/// The two page-level toggles.
///
/// Nothing keeps the mobile menu and the resume dialog mutually exclusive;
/// both may be open at once.
#[derive(Default)]
pub struct PageState {
    menu_open: bool,
    resume_modal_open: bool,
    listeners: Vec<Listener>,
}

impl fmt::Debug for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageState")
            .field("menu_open", &self.menu_open)
            .field("resume_modal_open", &self.resume_modal_open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener called after every change to either toggle.
    pub fn subscribe(&mut self, listener: impl Fn(StateChange) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_menu_open(&mut self, open: bool) {
        if self.menu_open != open {
            self.menu_open = open;
            self.notify(StateChange::Menu(open));
        }
    }

    pub fn resume_modal_open(&self) -> bool {
        self.resume_modal_open
    }

    pub fn set_resume_modal_open(&mut self, open: bool) {
        if self.resume_modal_open != open {
            self.resume_modal_open = open;
            self.notify(StateChange::ResumeModal(open));
        }
    }

    fn notify(&self, change: StateChange) {
        for listener in &self.listeners {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording(state: &mut PageState) -> Arc<Mutex<Vec<StateChange>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        state.subscribe(move |change| sink.lock().unwrap().push(change));
        seen
    }

    #[test]
    fn test_starts_closed() {
        let state = PageState::new();
        assert!(!state.menu_open());
        assert!(!state.resume_modal_open());
    }

    #[test]
    fn test_notifies_only_on_change() {
        let mut state = PageState::new();
        let seen = recording(&mut state);

        state.set_menu_open(false);
        state.set_menu_open(true);
        state.set_menu_open(true);
        state.set_resume_modal_open(true);
        state.set_menu_open(false);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                StateChange::Menu(true),
                StateChange::ResumeModal(true),
                StateChange::Menu(false),
            ]
        );
    }

    #[test]
    fn test_every_listener_is_notified() {
        let mut state = PageState::new();
        let first = recording(&mut state);
        let second = recording(&mut state);
        state.set_resume_modal_open(true);
        assert_eq!(first.lock().unwrap().len(), 1);
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut state = PageState::new();
        state.set_menu_open(true);
        state.set_resume_modal_open(true);
        assert!(state.menu_open());
        assert!(state.resume_modal_open());
    }
}
