use crate::constants::MAX_PIXEL_RATIO;

/// Window size in CSS pixels plus the reported device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Pixel ratio actually applied to the render target.
    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        capped_pixel_ratio(self.device_pixel_ratio)
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Backing-store size in device pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let pr = self.pixel_ratio();
        let w = (self.width * pr).floor().max(1.0) as u32;
        let h = (self.height * pr).floor().max(1.0) as u32;
        (w, h)
    }
}

#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}
