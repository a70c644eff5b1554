// Pointer normalization and reset behavior.

use earth_core::{normalize_client, CanvasRect, EarthScene, PointerState, SceneConfig, Viewport};

fn rect() -> CanvasRect {
    CanvasRect {
        left: 10.0,
        top: 20.0,
        width: 800.0,
        height: 600.0,
    }
}

#[test]
fn center_maps_to_origin() {
    let (x, y) = normalize_client(410.0, 320.0, rect()).unwrap();
    assert!(x.abs() < 1e-6);
    assert!(y.abs() < 1e-6);
}

#[test]
fn y_axis_points_up() {
    let (x, y) = normalize_client(10.0, 20.0, rect()).unwrap();
    assert_eq!(x, -1.0);
    assert_eq!(y, 1.0);
    let (x, y) = normalize_client(810.0, 620.0, rect()).unwrap();
    assert_eq!(x, 1.0);
    assert_eq!(y, -1.0);
}

#[test]
fn positions_inside_canvas_stay_in_range() {
    let r = rect();
    for i in 0..=40 {
        for j in 0..=30 {
            let cx = r.left + r.width * i as f64 / 40.0;
            let cy = r.top + r.height * j as f64 / 30.0;
            let (x, y) = normalize_client(cx, cy, r).unwrap();
            assert!((-1.0..=1.0).contains(&x), "x={} out of range", x);
            assert!((-1.0..=1.0).contains(&y), "y={} out of range", y);
        }
    }
}

#[test]
fn positions_outside_canvas_are_clamped() {
    let mut p = PointerState::default();
    p.set_from_client(-5000.0, 9000.0, rect());
    assert_eq!(p, PointerState { x: -1.0, y: -1.0 });
    p.set_from_client(5000.0, -9000.0, rect());
    assert_eq!(p, PointerState { x: 1.0, y: 1.0 });
}

#[test]
fn zero_area_rect_keeps_previous_state() {
    let mut p = PointerState { x: 0.25, y: -0.5 };
    p.set_from_client(100.0, 100.0, CanvasRect::default());
    assert_eq!(p, PointerState { x: 0.25, y: -0.5 });
}

#[test]
fn leave_resets_to_exact_zero() {
    let mut scene = EarthScene::new(SceneConfig::default(), Viewport::new(800.0, 600.0, 1.0));
    for (cx, cy) in [(10.0, 20.0), (700.0, 33.3), (5000.0, -40.0)] {
        scene.on_pointer_move(cx, cy, rect());
        assert!(scene.pointer != PointerState::default());
        scene.on_pointer_leave();
        assert_eq!(scene.pointer.x, 0.0);
        assert_eq!(scene.pointer.y, 0.0);
    }
}
