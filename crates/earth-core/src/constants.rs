// Shared scene tuning constants used by the core and the web frontend.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 300.0;
pub const CAMERA_START_Z: f32 = 45.0;

// Planet and shells
pub const PLANET_RADIUS: f32 = 15.0;
pub const CLOUD_RADIUS: f32 = 15.05;
pub const ATMOSPHERE_RADIUS: f32 = 15.2;
pub const SPHERE_SEGMENTS: u32 = 64;
pub const AXIAL_TILT_DEG: f64 = 23.4;

pub const PLANET_ROUGHNESS: f32 = 0.5;
pub const PLANET_METALNESS: f32 = 0.3;
pub const CLOUD_OPACITY: f32 = 0.3;
pub const ATMOSPHERE_COLOR: u32 = 0x66ccff;
pub const ATMOSPHERE_OPACITY: f32 = 0.12;

// Starfield
pub const STAR_COUNT: usize = 5000;
pub const STAR_CUBE_SIDE: f32 = 500.0;
pub const STAR_SIZE: f32 = 0.25;
pub const STAR_OPACITY: f32 = 0.85;

// Per-frame rotation (radians per frame)
pub const PLANET_YAW_PER_FRAME: f64 = 0.0001;
pub const CLOUD_YAW_PER_FRAME: f64 = 0.00012;

// Pointer parallax gains (radians per frame at full deflection)
pub const PLANET_POINTER_YAW: f64 = 0.00035;
pub const PLANET_POINTER_PITCH: f64 = 0.0002;
pub const CLOUD_POINTER_YAW: f64 = 0.00055;
pub const CLOUD_POINTER_PITCH: f64 = 0.0003;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLES: u32 = 4;

// Orbit helper
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 2.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;

// Intro timeline (seconds)
pub const INTRO_CAMERA_FROM_Z: f32 = 100.0;
pub const INTRO_CAMERA_REST_Z: f32 = 45.0;
pub const INTRO_CAMERA_DURATION: f32 = 3.0;
pub const INTRO_TITLE_DURATION: f32 = 1.0;

/// Convert a `0xRRGGBB` color in sRGB to linear RGB.
pub fn hex_to_linear_rgb(hex: u32) -> [f32; 3] {
    let c = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [c(16), c(8), c(0)]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
