#![cfg(target_arch = "wasm32")]
use earth_core::{seeded_starfield, EarthScene, SceneConfig, STAR_CUBE_SIDE};
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod textures;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("earth-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector(constants::CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", constants::CANVAS_SELECTOR))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::window_viewport(&window);
    dom::apply_canvas_size(&canvas, &viewport);

    let config = SceneConfig {
        star_seed: rand::thread_rng().gen(),
        ..SceneConfig::default()
    };
    let star_points = seeded_starfield(config.star_seed, config.star_count, STAR_CUBE_SIDE);
    let lighting = config.lighting.clone();
    let tone_mapping = config.tone_mapping;

    let mut scene = EarthScene::new(config, viewport);
    let mut surface = overlay::DomSurface::new(&document);
    scene.prime_intro(&mut surface);

    let gpu = match render::GpuState::new(&canvas, &scene.scene, &star_points, lighting, tone_mapping)
        .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        surface,
        gpu,
        canvas: canvas.clone(),
        last_instant: Instant::now(),
    }));

    events::wire_resize(&window, &frame_ctx);
    events::wire_pointer_handlers(&canvas, &frame_ctx);
    events::wire_unload(&window, &frame_ctx);

    frame::start_loop(frame_ctx.clone());
    textures::load_textures(&frame_ctx);
    Ok(())
}
