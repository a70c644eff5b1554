//! Scene nodes and the per-frame rotation update.

use crate::constants::*;
use crate::pointer::PointerState;
use glam::{EulerRot, Mat4, Vec3};
use std::f64::consts::TAU;

/// Euler rotation in radians, applied in XYZ order.
///
/// Angles accumulate without wrapping, so they are kept in `f64`; per-frame
/// steps of 1e-4 rad stay exact long after an `f32` would stall.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Orientation {
    pub fn matrix(&self) -> Mat4 {
        let wrap = |a: f64| a.rem_euclid(TAU) as f32;
        Mat4::from_euler(EulerRot::XYZ, wrap(self.x), wrap(self.y), wrap(self.z))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Points {
        count: usize,
        size: f32,
        size_attenuation: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Opaque,
    Alpha,
    Additive,
}

/// Which loaded texture a material samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Planet,
    Clouds,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB.
    pub color: [f32; 3],
    pub texture: Option<TextureSlot>,
    pub opacity: f32,
    pub blend: Blend,
    pub depth_write: bool,
    pub lit: bool,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn standard(texture: TextureSlot, roughness: f32, metalness: f32) -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            texture: Some(texture),
            opacity: 1.0,
            blend: Blend::Opaque,
            depth_write: true,
            lit: true,
            roughness,
            metalness,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: &'static str,
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
    pub orientation: Orientation,
}

impl SceneNode {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * self.orientation.matrix()
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub planet: SceneNode,
    pub clouds: SceneNode,
    pub atmosphere: SceneNode,
    pub stars: SceneNode,
}

impl Scene {
    pub fn new(star_count: usize) -> Self {
        let tilt = Orientation {
            z: AXIAL_TILT_DEG.to_radians(),
            ..Default::default()
        };
        let sphere = |radius| Geometry::Sphere {
            radius,
            width_segments: SPHERE_SEGMENTS,
            height_segments: SPHERE_SEGMENTS,
        };

        let planet = SceneNode {
            name: "planet",
            geometry: sphere(PLANET_RADIUS),
            material: Material::standard(TextureSlot::Planet, PLANET_ROUGHNESS, PLANET_METALNESS),
            position: Vec3::ZERO,
            orientation: tilt,
        };
        let clouds = SceneNode {
            name: "clouds",
            geometry: sphere(CLOUD_RADIUS),
            material: Material {
                opacity: CLOUD_OPACITY,
                blend: Blend::Alpha,
                depth_write: false,
                ..Material::standard(TextureSlot::Clouds, 1.0, 0.0)
            },
            position: Vec3::ZERO,
            orientation: tilt,
        };
        let atmosphere = SceneNode {
            name: "atmosphere",
            geometry: sphere(ATMOSPHERE_RADIUS),
            material: Material {
                color: hex_to_linear_rgb(ATMOSPHERE_COLOR),
                texture: None,
                opacity: ATMOSPHERE_OPACITY,
                blend: Blend::Additive,
                depth_write: false,
                lit: false,
                roughness: 1.0,
                metalness: 0.0,
            },
            position: Vec3::ZERO,
            orientation: tilt,
        };
        let stars = SceneNode {
            name: "stars",
            geometry: Geometry::Points {
                count: star_count,
                size: STAR_SIZE,
                size_attenuation: true,
            },
            material: Material {
                color: [1.0, 1.0, 1.0],
                texture: None,
                opacity: STAR_OPACITY,
                blend: Blend::Alpha,
                depth_write: true,
                lit: false,
                roughness: 1.0,
                metalness: 0.0,
            },
            position: Vec3::ZERO,
            orientation: Orientation::default(),
        };

        Self {
            planet,
            clouds,
            atmosphere,
            stars,
        }
    }

    /// Base spin plus pointer parallax for one frame; the atmosphere then
    /// copies the planet so the glow tracks it exactly.
    pub fn step(&mut self, pointer: PointerState) {
        let p = pointer.clamped();
        let (px, py) = (p.x as f64, p.y as f64);

        self.planet.orientation.y += PLANET_YAW_PER_FRAME;
        self.clouds.orientation.y += CLOUD_YAW_PER_FRAME;

        self.planet.orientation.y += px * PLANET_POINTER_YAW;
        self.planet.orientation.x += py * PLANET_POINTER_PITCH;

        // clouds move further than the planet for depth
        self.clouds.orientation.y += px * CLOUD_POINTER_YAW;
        self.clouds.orientation.x += py * CLOUD_POINTER_PITCH;

        self.atmosphere.orientation = self.planet.orientation;
    }

    /// Shells in draw order: opaque first, then blended.
    pub fn shells(&self) -> [&SceneNode; 3] {
        [&self.planet, &self.clouds, &self.atmosphere]
    }
}
