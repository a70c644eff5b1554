pub mod asset;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod loading;
pub mod mesh;
pub mod orbit;
pub mod pointer;
pub mod scene;
pub mod stars;
pub mod timeline;
pub mod viewport;

pub use asset::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use loading::*;
pub use mesh::*;
pub use orbit::*;
pub use pointer::*;
pub use scene::*;
pub use stars::*;
pub use timeline::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
