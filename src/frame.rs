use crate::overlay::DomSurface;
use crate::render::GpuState;
use earth_core::{EarthScene, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: EarthScene,
    pub surface: DomSurface,
    pub gpu: Option<GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Update then render one frame. Returns `false` once the page has been
    /// torn down and the loop should stop.
    pub fn frame(&mut self) -> bool {
        if self.scene.is_disposed() {
            return false;
        }
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.scene.tick(dt_sec, &mut self.surface);

        if let Some(g) = &mut self.gpu {
            match g.render(&self.scene.scene, &self.scene.camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        let (w, h) = self.scene.on_resize(viewport);
        crate::dom::apply_canvas_size(&self.canvas, &viewport);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }
        log::debug!(
            "[resize] {}x{} css, {}x{} px (ratio {:.2})",
            viewport.width,
            viewport.height,
            w,
            h,
            viewport.pixel_ratio()
        );
    }

    /// Release GPU resources and stop the loop.
    pub fn dispose(&mut self) {
        self.scene.dispose();
        if let Some(g) = self.gpu.take() {
            g.dispose();
        }
    }
}

/// requestAnimationFrame driver. The closure owns a handle to itself, so the
/// loop stays alive until `FrameContext::frame` reports the scene is gone;
/// at that point the closure is taken out and the cycle breaks.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let keep_going = frame_ctx.borrow_mut().frame();
        if keep_going {
            request_frame(&tick_clone.borrow());
            return;
        }
        log::info!("[frame] loop stopped");
        // a closure must not be dropped while it runs
        let stopped = tick_clone.borrow_mut().take();
        wasm_bindgen_futures::spawn_local(async move { drop(stopped) });
    }) as Box<dyn FnMut()>));
    request_frame(&tick.borrow());
}

fn request_frame(tick: &Option<Closure<dyn FnMut()>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
