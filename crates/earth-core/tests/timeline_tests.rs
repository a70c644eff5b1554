// Intro timeline: easing, play state and camera sweep.

use earth_core::*;

fn intro() -> Timeline {
    build_intro(&SceneConfig::default())
}

fn value(samples: &Samples, target: TweenTarget) -> Option<f32> {
    samples.iter().find(|(t, _)| *t == target).map(|(_, v)| *v)
}

#[test]
fn eases_hit_their_endpoints() {
    for ease in [Ease::Linear, Ease::Power1In, Ease::Power1Out, Ease::Power1InOut] {
        assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        assert_eq!(ease.apply(-1.0), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(2.0), 1.0, "{:?}", ease);
    }
    assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!(Ease::Power1In.apply(0.25) < 0.25);
    assert!(Ease::Power1Out.apply(0.25) > 0.25);
}

#[test]
fn eases_are_monotonic() {
    for ease in [Ease::Linear, Ease::Power1In, Ease::Power1Out, Ease::Power1InOut] {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v > prev, "{:?} not increasing at {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn starts_paused_at_zero_progress() {
    let mut tl = intro();
    assert_eq!(tl.state(), PlayState::Paused);
    assert_eq!(tl.progress(), 0.0);
    assert!(tl.advance(1.0).is_empty());
    assert!(tl.advance(10.0).is_empty());
    assert_eq!(tl.progress(), 0.0);
    assert_eq!(tl.time(), 0.0);
}

#[test]
fn reports_from_values_before_playing() {
    let tl = intro();
    let s = tl.sample();
    assert_eq!(value(&s, TweenTarget::CameraZ), Some(INTRO_CAMERA_FROM_Z));
    assert_eq!(value(&s, TweenTarget::TitleOpacity), Some(0.0));
}

#[test]
fn camera_z_strictly_decreases_while_playing() {
    let mut tl = intro();
    tl.play();
    assert!(tl.is_playing());
    let mut prev = INTRO_CAMERA_FROM_Z;
    let dt = 1.0 / 60.0;
    let mut frames = 0;
    while tl.is_playing() {
        let s = tl.advance(dt);
        let z = value(&s, TweenTarget::CameraZ).unwrap();
        if tl.time() < INTRO_CAMERA_DURATION {
            assert!(z < prev, "z {} not below {} at t={}", z, prev, tl.time());
        }
        assert!(z >= INTRO_CAMERA_REST_Z);
        prev = z;
        frames += 1;
        assert!(frames < 1000, "timeline never finished");
    }
    assert_eq!(tl.state(), PlayState::Finished);
    assert_eq!(value(&tl.sample(), TweenTarget::CameraZ), Some(INTRO_CAMERA_REST_Z));
}

#[test]
fn title_fades_in_alongside_camera() {
    let mut tl = intro();
    tl.play();
    let s = tl.advance(0.5);
    let opacity = value(&s, TweenTarget::TitleOpacity).unwrap();
    assert!(opacity > 0.0 && opacity < 1.0);
    let s = tl.advance(0.6);
    assert_eq!(value(&s, TweenTarget::TitleOpacity), Some(1.0));
    assert!(tl.is_playing());
}

#[test]
fn finishes_after_duration_and_never_replays() {
    let mut tl = intro();
    assert!((tl.duration() - INTRO_CAMERA_DURATION).abs() < 1e-6);
    tl.play();
    tl.advance(10.0);
    assert_eq!(tl.state(), PlayState::Finished);
    assert_eq!(tl.progress(), 1.0);
    tl.play();
    assert_eq!(tl.state(), PlayState::Finished);
    assert!(tl.advance(1.0).is_empty());
}

#[test]
fn append_sequences_after_current_end() {
    let mut tl = Timeline::paused();
    tl.append(TweenTarget::CameraZ, 100.0, 45.0, 3.0, Ease::Power1InOut)
        .append(TweenTarget::TitleOpacity, 0.0, 1.0, 1.0, Ease::Power1Out);
    assert!((tl.duration() - 4.0).abs() < 1e-6);
    tl.play();
    let s = tl.advance(2.0);
    assert_eq!(value(&s, TweenTarget::TitleOpacity), Some(0.0));
    let s = tl.advance(1.5);
    let o = value(&s, TweenTarget::TitleOpacity).unwrap();
    assert!(o > 0.0 && o < 1.0);
}

#[test]
fn sixty_fps_finishes_on_the_last_frame() {
    let mut tl = intro();
    tl.play();
    let last = (0..180)
        .map(|_| tl.advance(1.0 / 60.0))
        .last()
        .unwrap();
    assert_eq!(tl.state(), PlayState::Finished);
    assert_eq!(tl.time(), tl.duration());
    assert_eq!(value(&last, TweenTarget::CameraZ), Some(INTRO_CAMERA_REST_Z));
    assert!(tl.advance(1.0 / 60.0).is_empty());
}
