// Host-side checks for swapchain format selection.
// The main crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod surface_format {
    include!("../src/render/surface_format.rs");
}

use surface_format::*;
use wgpu::TextureFormat;

#[test]
fn linear_canvas_formats_render_through_srgb_view() {
    // what a WebGPU canvas reports
    let caps = [
        TextureFormat::Bgra8Unorm,
        TextureFormat::Rgba8Unorm,
        TextureFormat::Rgba16Float,
    ];
    let f = choose_surface_formats(&caps).unwrap();
    assert_eq!(f.surface, TextureFormat::Bgra8Unorm);
    assert_eq!(f.view, TextureFormat::Bgra8UnormSrgb);
    assert!(f.view.is_srgb());
    assert_eq!(f.view_formats(), vec![TextureFormat::Bgra8UnormSrgb]);
}

#[test]
fn srgb_capable_format_wins_over_float() {
    let caps = [TextureFormat::Rgba16Float, TextureFormat::Rgba8Unorm];
    let f = choose_surface_formats(&caps).unwrap();
    assert_eq!(f.surface, TextureFormat::Rgba8Unorm);
    assert_eq!(f.view, TextureFormat::Rgba8UnormSrgb);
}

#[test]
fn native_srgb_surface_needs_no_extra_view() {
    let caps = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
    let f = choose_surface_formats(&caps).unwrap();
    assert_eq!(f.surface, TextureFormat::Bgra8UnormSrgb);
    assert_eq!(f.view, f.surface);
    assert!(f.view_formats().is_empty());
}

#[test]
fn falls_back_to_first_format_or_none() {
    let f = choose_surface_formats(&[TextureFormat::Rgba16Float]).unwrap();
    assert_eq!(f.view, TextureFormat::Rgba16Float);
    assert!(choose_surface_formats(&[]).is_none());
}
