// Shared test doubles for the page elements driven by the controller.

#![allow(dead_code)]

use earth_core::PageSurface;

#[derive(Default, Debug)]
pub struct FakePage {
    pub overlay_display: String,
    pub overlay_hides: usize,
    pub title_opacity: Option<f32>,
}

impl PageSurface for FakePage {
    fn hide_loading_overlay(&mut self) {
        self.overlay_display = "none".to_string();
        self.overlay_hides += 1;
    }

    fn set_title_opacity(&mut self, opacity: f32) {
        self.title_opacity = Some(opacity);
    }
}
