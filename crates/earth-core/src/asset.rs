//! Texture payload decoding.

/// Decoded RGBA8 image ready for upload.
#[derive(Clone, Debug)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Single opaque white texel, used until the real texture arrives.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255, 255, 255, 255],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("empty payload for {0}")]
    Empty(String),
    #[error("failed to decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

/// Decode a PNG or JPEG payload into RGBA8.
pub fn decode_texture(url: &str, bytes: &[u8]) -> Result<TextureImage, AssetError> {
    if bytes.is_empty() {
        return Err(AssetError::Empty(url.to_string()));
    }
    let img = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
        url: url.to_string(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(TextureImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
