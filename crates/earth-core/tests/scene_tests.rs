// End-to-end controller flow: load, intro, interaction, teardown.

mod common;

use common::FakePage;
use earth_core::*;

const DT: f32 = 1.0 / 60.0;

fn scene_with(config: SceneConfig) -> EarthScene {
    EarthScene::new(config, Viewport::new(1280.0, 720.0, 1.0))
}

fn load_all(s: &mut EarthScene, page: &mut FakePage, fail_clouds: bool) {
    for url in ["./8k_earth_daymap.jpg", "./Earth-clouds.png"] {
        let ev = s.loading.item_start(url);
        s.handle_load_events(ev, page);
    }
    let ev = s.loading.item_end("./8k_earth_daymap.jpg");
    s.handle_load_events(ev, page);
    let ev = if fail_clouds {
        s.loading.item_error("./Earth-clouds.png")
    } else {
        s.loading.item_end("./Earth-clouds.png")
    };
    s.handle_load_events(ev, page);
}

#[test]
fn new_scene_waits_at_intro_start() {
    let mut s = scene_with(SceneConfig::default());
    let mut page = FakePage::default();
    assert_eq!(s.camera.eye.z, INTRO_CAMERA_FROM_Z);
    assert_eq!(s.intro.state(), PlayState::Paused);
    s.prime_intro(&mut page);
    assert_eq!(page.title_opacity, Some(0.0));
    assert_eq!(page.overlay_hides, 0);
}

#[test]
fn ticks_before_load_do_not_start_intro() {
    let mut s = scene_with(SceneConfig::default());
    let mut page = FakePage::default();
    for _ in 0..120 {
        s.tick(DT, &mut page);
    }
    assert_eq!(s.intro.progress(), 0.0);
    assert!(page.title_opacity.is_none());
    // auto-rotation orbits without changing distance
    assert!((s.camera.eye.length() - INTRO_CAMERA_FROM_Z).abs() < 1e-2);
    assert!(s.camera.eye.x.abs() > 0.0);
}

#[test]
fn completion_hides_overlay_and_plays_intro() {
    let mut s = scene_with(SceneConfig::default());
    let mut page = FakePage::default();
    load_all(&mut s, &mut page, false);
    assert_eq!(page.overlay_display, "none");
    assert_eq!(page.overlay_hides, 1);
    assert!(s.intro.is_playing());
    assert_eq!(s.loading.phase(), LoadPhase::Complete);
}

#[test]
fn failed_texture_still_starts_intro() {
    let mut s = scene_with(SceneConfig::default());
    let mut page = FakePage::default();
    load_all(&mut s, &mut page, true);
    assert_eq!(page.overlay_hides, 1);
    assert!(s.intro.is_playing());
    assert_eq!(s.loading.failed_count(), 1);
}

#[test]
fn intro_pulls_camera_in_and_fades_title() {
    let config = SceneConfig {
        orbit: OrbitConfig {
            auto_rotate: false,
            ..OrbitConfig::default()
        },
        ..SceneConfig::default()
    };
    let mut s = scene_with(config);
    let mut page = FakePage::default();
    s.prime_intro(&mut page);
    load_all(&mut s, &mut page, false);

    let mut prev = s.camera.eye.z;
    let mut frames = 0;
    while s.intro.is_playing() {
        s.tick(DT, &mut page);
        assert!(s.camera.eye.z <= prev, "camera moved out at frame {}", frames);
        if prev > INTRO_CAMERA_REST_Z + 1e-3 {
            assert!(s.camera.eye.z < prev, "camera stalled at frame {}", frames);
        }
        prev = s.camera.eye.z;
        frames += 1;
        assert!(frames < 1000);
    }
    assert_eq!(frames, 180);
    assert!((s.camera.eye.z - INTRO_CAMERA_REST_Z).abs() < 1e-3);
    assert_eq!(page.title_opacity, Some(1.0));
    assert_eq!(s.camera.target, s.scene.planet.position);

    // the finished intro leaves the camera alone
    for _ in 0..60 {
        s.tick(DT, &mut page);
    }
    assert!((s.camera.eye.z - INTRO_CAMERA_REST_Z).abs() < 1e-3);
}

#[test]
fn late_load_events_do_not_replay_intro() {
    let mut s = scene_with(SceneConfig::default());
    let mut page = FakePage::default();
    load_all(&mut s, &mut page, false);
    s.tick(10.0, &mut page);
    assert_eq!(s.intro.state(), PlayState::Finished);
    let ev = s.loading.item_end("./Earth-clouds.png");
    s.handle_load_events(ev, &mut page);
    assert_eq!(page.overlay_hides, 1);
    assert_eq!(s.intro.state(), PlayState::Finished);
}

#[test]
fn drag_feeds_orbit_until_released() {
    let config = SceneConfig {
        orbit: OrbitConfig {
            auto_rotate: false,
            ..OrbitConfig::default()
        },
        ..SceneConfig::default()
    };
    let mut s = scene_with(config);
    s.on_pointer_down(7, 100.0, 100.0);
    s.on_pointer_drag(7, 172.0, 100.0, 720.0);
    assert!(s.orbit.pending().theta < 0.0);

    // other pointers are ignored
    let before = s.orbit.pending();
    s.on_pointer_drag(8, 500.0, 500.0, 720.0);
    assert_eq!(s.orbit.pending(), before);

    s.on_pointer_up(7);
    assert!(!s.drag.active);
    s.on_pointer_drag(7, 300.0, 100.0, 720.0);
    assert_eq!(s.orbit.pending(), before);
}

#[test]
fn pointer_move_and_leave_drive_parallax() {
    let mut s = scene_with(SceneConfig::default());
    let mut page = FakePage::default();
    let rect = CanvasRect {
        left: 0.0,
        top: 0.0,
        width: 1280.0,
        height: 720.0,
    };
    s.on_pointer_move(1280.0, 0.0, rect);
    assert_eq!(s.pointer, PointerState { x: 1.0, y: 1.0 });
    s.tick(DT, &mut page);
    assert!(s.scene.planet.orientation.x > 0.0);

    s.on_pointer_leave();
    let pitch = s.scene.planet.orientation.x;
    s.tick(DT, &mut page);
    assert_eq!(s.scene.planet.orientation.x, pitch);
}

#[test]
fn dispose_freezes_everything() {
    let mut s = scene_with(SceneConfig::default());
    let mut page = FakePage::default();
    load_all(&mut s, &mut page, false);
    s.tick(DT, &mut page);
    s.dispose();
    assert!(s.is_disposed());
    let eye = s.camera.eye;
    let time = s.intro.time();
    let frames = s.frames();
    s.tick(DT, &mut page);
    assert_eq!(s.camera.eye, eye);
    assert_eq!(s.intro.time(), time);
    assert_eq!(s.frames(), frames);
}
