//! Top-level scene controller.
//!
//! `EarthScene` owns every piece of mutable state the page needs: scene
//! nodes, camera, orbit helper, pointer, viewport, intro timeline and the
//! loading coordinator. Event handlers and the frame loop receive it by
//! `&mut` and never share state any other way.

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::loading::{LoadEvent, LoadingManager};
use crate::orbit::OrbitControls;
use crate::pointer::{CanvasRect, DragState, PointerState};
use crate::scene::Scene;
use crate::timeline::{Samples, Timeline, TweenTarget};
use crate::viewport::Viewport;

/// Page elements the controller drives outside the canvas.
pub trait PageSurface {
    fn hide_loading_overlay(&mut self);
    fn set_title_opacity(&mut self, opacity: f32);
}

pub struct EarthScene {
    pub config: SceneConfig,
    pub scene: Scene,
    pub camera: Camera,
    pub orbit: OrbitControls,
    pub pointer: PointerState,
    pub drag: DragState,
    pub viewport: Viewport,
    pub intro: Timeline,
    pub loading: LoadingManager,
    frames: u64,
    disposed: bool,
}

pub fn build_intro(config: &SceneConfig) -> Timeline {
    let intro = &config.intro;
    let mut tl = Timeline::paused();
    tl.insert(
        0.0,
        TweenTarget::CameraZ,
        intro.camera_from_z,
        intro.camera_rest_z,
        intro.camera_duration,
        intro.camera_ease,
    )
    .insert(
        intro.title_offset,
        TweenTarget::TitleOpacity,
        0.0,
        1.0,
        intro.title_duration,
        intro.title_ease,
    );
    tl
}

impl EarthScene {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Self {
        let camera = Camera::new(viewport.aspect() as f32);
        let scene = Scene::new(config.star_count);
        let orbit = OrbitControls::new(config.orbit.clone());
        let intro = build_intro(&config);

        let mut this = Self {
            config,
            scene,
            camera,
            orbit,
            pointer: PointerState::default(),
            drag: DragState::default(),
            viewport,
            intro,
            loading: LoadingManager::new(),
            frames: 0,
            disposed: false,
        };
        // fromTo tweens render their start values immediately
        let initial = this.intro.sample();
        this.apply_camera_samples(&initial);
        this
    }

    /// Push the timeline's start values to page elements (title hidden).
    pub fn prime_intro(&mut self, surface: &mut impl PageSurface) {
        let initial = self.intro.sample();
        self.apply_samples(&initial, surface);
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, rect: CanvasRect) {
        self.pointer.set_from_client(client_x, client_y, rect);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.reset();
    }

    pub fn on_pointer_down(&mut self, pointer_id: i32, client_x: f64, client_y: f64) {
        self.drag.begin(pointer_id, client_x, client_y);
        self.orbit.set_dragging(true);
    }

    pub fn on_pointer_drag(&mut self, pointer_id: i32, client_x: f64, client_y: f64, client_height: f64) {
        if let Some((dx, dy)) = self.drag.step(pointer_id, client_x, client_y) {
            self.orbit.drag(dx, dy, client_height);
        }
    }

    pub fn on_pointer_up(&mut self, pointer_id: i32) {
        self.drag.end(pointer_id);
        if !self.drag.active {
            self.orbit.set_dragging(false);
        }
    }

    /// Record the new viewport and update the camera projection. Returns the
    /// render target size in device pixels.
    pub fn on_resize(&mut self, viewport: Viewport) -> (u32, u32) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.width, viewport.height);
        viewport.backing_size()
    }

    /// React to loading-coordinator events.
    pub fn handle_load_events(
        &mut self,
        events: impl IntoIterator<Item = LoadEvent>,
        surface: &mut impl PageSurface,
    ) {
        for ev in events {
            match ev {
                LoadEvent::Started { url, loaded, total } => {
                    log::info!("[load] Loading started: {} ({}/{})", url, loaded, total);
                }
                LoadEvent::Progress { url, loaded, total } => {
                    log::debug!("[load] {} ({}/{})", url, loaded, total);
                }
                LoadEvent::Error { url } => {
                    log::warn!("[load] failed to load {}", url);
                }
                LoadEvent::Completed => self.on_assets_loaded(surface),
            }
        }
    }

    /// Hide the loading overlay and start the intro.
    pub fn on_assets_loaded(&mut self, surface: &mut impl PageSurface) {
        surface.hide_loading_overlay();
        self.intro.play();
        log::info!("[intro] playing ({:.1}s)", self.intro.duration());
    }

    /// One frame of state update. Rendering happens afterwards in the caller.
    pub fn tick(&mut self, dt_sec: f32, surface: &mut impl PageSurface) {
        if self.disposed {
            return;
        }
        let samples = self.intro.advance(dt_sec);
        self.apply_samples(&samples, surface);

        self.orbit.update(&mut self.camera);
        self.scene.step(self.pointer);
        self.frames += 1;
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    fn apply_samples(&mut self, samples: &Samples, surface: &mut impl PageSurface) {
        self.apply_camera_samples(samples);
        for (target, value) in samples {
            if *target == TweenTarget::TitleOpacity {
                surface.set_title_opacity(*value);
            }
        }
    }

    fn apply_camera_samples(&mut self, samples: &Samples) {
        for (target, value) in samples {
            if *target == TweenTarget::CameraZ {
                self.camera.eye.z = *value;
                self.camera.look_at(self.scene.planet.position);
            }
        }
    }
}
