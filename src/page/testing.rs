//! Recording stand-ins for the browser capabilities.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use super::{ResourceOpener, Viewport};

#[derive(Debug, Default)]
pub struct Document {
    pub regions: HashMap<String, f64>,
    pub scroll_top: f64,
    pub max_scroll: f64,
    pub scroll_calls: Vec<f64>,
}

/// A document whose smooth scrolls land instantly.
#[derive(Debug, Clone, Default)]
pub struct FakeViewport(Arc<Mutex<Document>>);

impl FakeViewport {
    pub fn new(regions: &[(&str, f64)], max_scroll: f64) -> Self {
        let doc = Document {
            regions: regions
                .iter()
                .map(|(id, top)| (id.to_string(), *top))
                .collect(),
            max_scroll,
            ..Default::default()
        };
        Self(Arc::new(Mutex::new(doc)))
    }

    pub fn doc(&self) -> MutexGuard<'_, Document> {
        self.0.lock().unwrap()
    }
}

impl Viewport for FakeViewport {
    fn region_top(&self, id: &str) -> Option<f64> {
        self.doc().regions.get(id).copied()
    }

    fn scroll_top(&self) -> f64 {
        self.doc().scroll_top
    }

    fn scroll_to(&self, top: f64) {
        let mut doc = self.doc();
        doc.scroll_calls.push(top);
        doc.scroll_top = top.clamp(0.0, doc.max_scroll);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    Download { url: String, file_name: String },
    External { url: String },
}

#[derive(Debug, Clone, Default)]
pub struct FakeOpener(Arc<Mutex<Vec<Opened>>>);

impl FakeOpener {
    pub fn calls(&self) -> Vec<Opened> {
        self.0.lock().unwrap().clone()
    }
}

impl ResourceOpener for FakeOpener {
    fn download(&self, url: &str, file_name: &str) {
        self.0.lock().unwrap().push(Opened::Download {
            url: url.to_string(),
            file_name: file_name.to_string(),
        });
    }

    fn open_external(&self, url: &str) {
        self.0.lock().unwrap().push(Opened::External {
            url: url.to_string(),
        });
    }
}
