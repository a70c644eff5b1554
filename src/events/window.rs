use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            ctx.borrow_mut().resize(dom::window_viewport(&w));
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

pub fn wire_unload(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let unload_closure = Closure::wrap(Box::new(move || {
        log::info!("[unload] releasing scene");
        ctx.borrow_mut().dispose();
    }) as Box<dyn FnMut()>);
    _ = window
        .add_event_listener_with_callback("beforeunload", unload_closure.as_ref().unchecked_ref());
    unload_closure.forget();
}
