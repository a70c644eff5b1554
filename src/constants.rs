// Page wiring constants: element selectors and asset locations.

pub const CANVAS_SELECTOR: &str = ".webgl";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const TITLE_SELECTOR: &str = ".title";

pub const PLANET_TEXTURE_URL: &str = "./8k_earth_daymap.jpg";
pub const CLOUDS_TEXTURE_URL: &str = "./Earth-clouds.png";
