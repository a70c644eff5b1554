// Resize handling: camera aspect and capped pixel ratio.

use earth_core::*;

#[test]
fn resize_sets_exact_aspect() {
    let mut s = EarthScene::new(SceneConfig::default(), Viewport::new(800.0, 600.0, 1.0));
    for (w, h) in [(1280.0, 720.0), (375.0, 812.0), (1920.0, 1080.0), (333.0, 777.0)] {
        s.on_resize(Viewport::new(w, h, 1.0));
        assert_eq!(s.camera.aspect, (w / h) as f32);
        assert_eq!(s.viewport.width, w);
        assert_eq!(s.viewport.height, h);
    }
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(capped_pixel_ratio(3.0), 2.0);
    assert_eq!(capped_pixel_ratio(2.0), 2.0);
    assert_eq!(capped_pixel_ratio(1.5), 1.5);
    assert_eq!(capped_pixel_ratio(1.0), 1.0);
    for i in 1..=40 {
        let dpr = i as f64 * 0.25;
        assert!(capped_pixel_ratio(dpr) <= MAX_PIXEL_RATIO);
    }
}

#[test]
fn bogus_pixel_ratio_falls_back_to_one() {
    assert_eq!(capped_pixel_ratio(0.0), 1.0);
    assert_eq!(capped_pixel_ratio(-2.0), 1.0);
    assert_eq!(capped_pixel_ratio(f64::NAN), 1.0);
}

#[test]
fn resize_returns_capped_backing_size() {
    let mut s = EarthScene::new(SceneConfig::default(), Viewport::new(800.0, 600.0, 1.0));
    let size = s.on_resize(Viewport::new(1280.0, 720.0, 3.0));
    assert_eq!(size, (2560, 1440));
    assert_eq!(s.viewport.pixel_ratio(), 2.0);
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(Viewport::new(0.0, 0.0, 2.0).backing_size(), (1, 1));
}

#[test]
fn degenerate_resize_keeps_previous_aspect() {
    let mut cam = Camera::new(1.5);
    cam.set_aspect(0.0, 600.0);
    assert_eq!(cam.aspect, 1.5);
    cam.set_aspect(800.0, 0.0);
    assert_eq!(cam.aspect, 1.5);
}

#[test]
fn camera_uses_configured_projection() {
    let cam = Camera::new(16.0 / 9.0);
    assert!((cam.fovy_radians - CAMERA_FOV_DEG.to_radians()).abs() < 1e-6);
    assert_eq!(cam.znear, CAMERA_NEAR);
    assert_eq!(cam.zfar, CAMERA_FAR);
    // the origin projects to the center of the screen
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}
