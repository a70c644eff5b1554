use crate::constants::{LOADING_SCREEN_ID, TITLE_SELECTOR};
use crate::dom;
use earth_core::PageSurface;
use web_sys as web;

/// Loading overlay and title element, looked up once at startup. Either may
/// be missing from the page.
pub struct DomSurface {
    loading_screen: Option<web::HtmlElement>,
    title: Option<web::HtmlElement>,
}

impl DomSurface {
    pub fn new(document: &web::Document) -> Self {
        let loading_screen = dom::html_by_id(document, LOADING_SCREEN_ID);
        let title = dom::query_html(document, TITLE_SELECTOR);
        if title.is_none() {
            log::warn!("[dom] no {} element; intro title fade skipped", TITLE_SELECTOR);
        }
        Self {
            loading_screen,
            title,
        }
    }
}

impl PageSurface for DomSurface {
    fn hide_loading_overlay(&mut self) {
        if let Some(el) = &self.loading_screen {
            dom::set_style(el, "display", "none");
        }
    }

    fn set_title_opacity(&mut self, opacity: f32) {
        if let Some(el) = &self.title {
            dom::set_style(el, "opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
        }
    }
}
