use crate::constants::{CLOUDS_TEXTURE_URL, PLANET_TEXTURE_URL};
use crate::frame::FrameContext;
use earth_core::{decode_texture, TextureImage, TextureSlot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub const TEXTURES: [(TextureSlot, &str); 2] = [
    (TextureSlot::Planet, PLANET_TEXTURE_URL),
    (TextureSlot::Clouds, CLOUDS_TEXTURE_URL),
];

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into::<web::Response>()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} for {}", resp.status(), url);
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn fetch_texture(url: &str) -> anyhow::Result<TextureImage> {
    let bytes = fetch_bytes(url).await?;
    Ok(decode_texture(url, &bytes)?)
}

/// Register every texture with the scene's loading coordinator, then fetch
/// them concurrently, one local task per URL. The coordinator fires its
/// completion event (hide overlay, start intro) when the last one ends,
/// whichever order they finish in.
pub fn load_textures(frame_ctx: &Rc<RefCell<FrameContext>>) {
    {
        let mut guard = frame_ctx.borrow_mut();
        let ctx = &mut *guard;
        for (_, url) in TEXTURES {
            let events = ctx.scene.loading.item_start(url);
            ctx.scene.handle_load_events(events, &mut ctx.surface);
        }
    }

    for (slot, url) in TEXTURES {
        spawn_local(load_texture(frame_ctx.clone(), slot, url));
    }
}

async fn load_texture(
    frame_ctx: Rc<RefCell<FrameContext>>,
    slot: TextureSlot,
    url: &'static str,
) {
    let result = fetch_texture(url).await;

    let mut guard = frame_ctx.borrow_mut();
    let ctx = &mut *guard;
    let events = match result {
        Ok(image) => {
            if let Some(g) = &mut ctx.gpu {
                g.set_texture(slot, &image);
            }
            ctx.scene.loading.item_end(url)
        }
        Err(e) => {
            log::warn!("[load] {}: {:#}", url, e);
            ctx.scene.loading.item_error(url)
        }
    };
    ctx.scene.handle_load_events(events, &mut ctx.surface);
}
