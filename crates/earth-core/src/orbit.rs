//! Orbit-interaction helper: rotates the camera around a target with
//! damping and optional auto-rotation. Zoom and pan are not supported.

use crate::camera::Camera;
use crate::config::OrbitConfig;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const PHI_EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from +Y.
    pub phi: f32,
    /// Azimuth around +Y, measured from +Z towards +X.
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub config: OrbitConfig,
    delta: Spherical,
    dragging: bool,
}

impl OrbitControls {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            delta: Spherical::default(),
            dragging: false,
        }
    }

    /// Per-frame auto-rotation angle (one full turn per 60 s at speed 1,
    /// assuming 60 fps).
    #[inline]
    pub fn auto_rotation_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.config.auto_rotate_speed
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Feed a drag delta in client pixels, scaled by the element height.
    pub fn drag(&mut self, dx: f64, dy: f64, client_height: f64) {
        if client_height <= 0.0 {
            return;
        }
        let speed = self.config.rotate_speed as f64;
        self.rotate_left((TAU as f64 * dx / client_height * speed) as f32);
        self.rotate_up((TAU as f64 * dy / client_height * speed) as f32);
    }

    /// Pending angular velocity; approaches zero as damping settles.
    pub fn pending(&self) -> Spherical {
        self.delta
    }

    /// Apply pending rotation to `camera` and re-aim it at the target.
    pub fn update(&mut self, camera: &mut Camera) {
        let target = self.config.target;
        let mut spherical = Spherical::from_offset(camera.eye - target);

        if self.config.auto_rotate && !self.dragging {
            let angle = self.auto_rotation_angle();
            self.rotate_left(angle);
        }

        let damping = self.config.damping_factor;
        if damping > 0.0 {
            spherical.theta += self.delta.theta * damping;
            spherical.phi += self.delta.phi * damping;
        } else {
            spherical.theta += self.delta.theta;
            spherical.phi += self.delta.phi;
        }
        spherical.phi = spherical.phi.clamp(PHI_EPS, PI - PHI_EPS);

        camera.eye = target + spherical.to_offset();
        camera.look_at(target);

        if damping > 0.0 {
            self.delta.theta *= 1.0 - damping;
            self.delta.phi *= 1.0 - damping;
        } else {
            self.delta = Spherical::default();
        }
    }
}
