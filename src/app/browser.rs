use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, ScrollBehavior, ScrollToOptions};

use crate::page::{ResourceOpener, Viewport};

/// The window's own scrolling document.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn region_top(&self, id: &str) -> Option<f64> {
        let el = document().get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top() + self.scroll_top())
    }

    fn scroll_top(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

pub struct BrowserOpener;

impl ResourceOpener for BrowserOpener {
    fn download(&self, url: &str, file_name: &str) {
        let document = document();
        let Some(body) = document.body() else {
            log::warn!("no document body to attach download link to");
            return;
        };
        let link = match document
            .create_element("a")
            .map(|el| el.dyn_into::<HtmlAnchorElement>())
        {
            Ok(Ok(link)) => link,
            _ => {
                log::warn!("couldn't create download link");
                return;
            }
        };
        link.set_href(url);
        link.set_download(file_name);
        if body.append_child(&link).is_err() {
            log::warn!("couldn't attach download link");
            return;
        }
        link.click();
        let _ = body.remove_child(&link);
    }

    fn open_external(&self, url: &str) {
        if window().open_with_url_and_target(url, "_blank").is_err() {
            log::warn!("couldn't open {url}");
        }
    }
}

/// Largest vertical scroll offset the document currently allows.
pub fn max_scroll_offset() -> f64 {
    document()
        .document_element()
        .map(|el| f64::from(el.scroll_height() - el.client_height()))
        .unwrap_or_default()
}
