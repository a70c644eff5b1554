// Host-side checks for page wiring constants.
// The main crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use earth_core::{decode_texture, SceneConfig, ToneMapping};

#[test]
fn selectors_have_expected_shape() {
    assert!(CANVAS_SELECTOR.starts_with('.'));
    assert!(TITLE_SELECTOR.starts_with('.'));
    // looked up with getElementById, so no leading '#'
    assert!(!LOADING_SCREEN_ID.starts_with('#'));
    assert!(!LOADING_SCREEN_ID.is_empty());
}

#[test]
fn texture_urls_are_relative_and_decodable_formats() {
    for url in [PLANET_TEXTURE_URL, CLOUDS_TEXTURE_URL] {
        assert!(url.starts_with("./"), "{}", url);
        let ext = url.rsplit('.').next().unwrap_or_default();
        assert!(matches!(ext, "jpg" | "png"), "{}", url);
    }
    assert_ne!(PLANET_TEXTURE_URL, CLOUDS_TEXTURE_URL);
}

#[test]
fn bad_payload_is_reported_with_its_url() {
    let err = decode_texture(PLANET_TEXTURE_URL, b"not an image").unwrap_err();
    assert!(format!("{}", err).contains(PLANET_TEXTURE_URL));
}

#[test]
fn default_scene_uses_filmic_tone_mapping() {
    let config = SceneConfig::default();
    assert_eq!(config.tone_mapping, ToneMapping::AcesFilmic { exposure: 1.0 });
    assert_eq!(config.tone_mapping.as_uniform(), [1.0, 1.0]);
}
