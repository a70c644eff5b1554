use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, frame_ctx: &Rc<RefCell<FrameContext>>) {
    dom::set_style(canvas, "pointer-events", "auto");
    wire_pointermove(canvas, frame_ctx);
    wire_pointerleave(canvas, frame_ctx);
    wire_pointerdown(canvas, frame_ctx);
    wire_pointerup(canvas, frame_ctx);
}

fn add_pointer_listener(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let canvas_move = canvas.clone();
    add_pointer_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
        let rect = dom::canvas_rect(&canvas_move);
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let mut c = ctx.borrow_mut();
        c.scene.on_pointer_move(x, y, rect);
        c.scene.on_pointer_drag(ev.pointer_id(), x, y, canvas_move.client_height() as f64);
    });
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    add_pointer_listener(canvas, "pointerleave", move |_ev: web::PointerEvent| {
        ctx.borrow_mut().scene.on_pointer_leave();
    });
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let canvas_down = canvas.clone();
    add_pointer_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ctx.borrow_mut().scene.on_pointer_down(
            ev.pointer_id(),
            ev.client_x() as f64,
            ev.client_y() as f64,
        );
        _ = canvas_down.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, frame_ctx: &Rc<RefCell<FrameContext>>) {
    for event in ["pointerup", "pointercancel"] {
        let ctx = frame_ctx.clone();
        let canvas_up = canvas.clone();
        add_pointer_listener(canvas, event, move |ev: web::PointerEvent| {
            ctx.borrow_mut().scene.on_pointer_up(ev.pointer_id());
            _ = canvas_up.release_pointer_capture(ev.pointer_id());
        });
    }
}
