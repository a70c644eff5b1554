use earth_core::{CanvasRect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Current window size and device pixel ratio.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Size the canvas backing store in device pixels and its CSS box in
/// viewport pixels.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) -> (u32, u32) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_style(canvas, "width", &format!("{}px", viewport.width));
    set_style(canvas, "height", &format!("{}px", viewport.height));
    (w_px, h_px)
}
