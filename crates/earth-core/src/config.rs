//! Scene configuration.
//!
//! One consolidated set of lighting, tone-mapping and intro parameters. The
//! `Default` impls are the configuration the app ships with; everything else
//! reads from here rather than repeating literals.

use crate::constants::*;
use crate::timeline::Ease;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToneMapping {
    None,
    AcesFilmic { exposure: f32 },
}

impl ToneMapping {
    /// Shader-side encoding: `(enabled, exposure)`.
    pub fn as_uniform(self) -> [f32; 2] {
        match self {
            ToneMapping::None => [0.0, 1.0],
            ToneMapping::AcesFilmic { exposure } => [1.0, exposure],
        }
    }
}

#[derive(Clone, Debug)]
pub struct LightingConfig {
    pub directional_color: u32,
    pub directional_intensity: f32,
    pub directional_position: Vec3,
    pub ambient_color: u32,
    pub ambient_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            directional_color: 0xffffff,
            directional_intensity: 15.0,
            directional_position: Vec3::new(5.0, 3.0, 5.0),
            ambient_color: 0x333333,
            ambient_intensity: 10.0,
        }
    }
}

impl LightingConfig {
    /// Linear radiance of the directional light.
    pub fn directional_radiance(&self) -> Vec3 {
        Vec3::from(hex_to_linear_rgb(self.directional_color)) * self.directional_intensity
    }

    pub fn ambient_radiance(&self) -> Vec3 {
        Vec3::from(hex_to_linear_rgb(self.ambient_color)) * self.ambient_intensity
    }

    /// Unit vector pointing from the scene towards the light.
    pub fn direction_to_light(&self) -> Vec3 {
        self.directional_position.normalize_or_zero()
    }
}

#[derive(Clone, Debug)]
pub struct IntroConfig {
    pub camera_from_z: f32,
    pub camera_rest_z: f32,
    pub camera_duration: f32,
    pub camera_ease: Ease,
    pub title_duration: f32,
    pub title_ease: Ease,
    /// Start of the title fade relative to the start of the camera move.
    pub title_offset: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            camera_from_z: INTRO_CAMERA_FROM_Z,
            camera_rest_z: INTRO_CAMERA_REST_Z,
            camera_duration: INTRO_CAMERA_DURATION,
            camera_ease: Ease::Power1InOut,
            title_duration: INTRO_TITLE_DURATION,
            title_ease: Ease::Power1Out,
            title_offset: 0.0,
        }
    }
}

/// Rotate-only orbit: the distance to `target` and the target itself never
/// change.
#[derive(Clone, Debug)]
pub struct OrbitConfig {
    pub damping_factor: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub target: Vec3,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping_factor: ORBIT_DAMPING_FACTOR,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_speed: ORBIT_ROTATE_SPEED,
            target: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub lighting: LightingConfig,
    pub tone_mapping: ToneMapping,
    pub intro: IntroConfig,
    pub orbit: OrbitConfig,
    pub star_count: usize,
    pub star_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            lighting: LightingConfig::default(),
            tone_mapping: ToneMapping::AcesFilmic { exposure: 1.0 },
            intro: IntroConfig::default(),
            orbit: OrbitConfig::default(),
            star_count: STAR_COUNT,
            star_seed: 42,
        }
    }
}
