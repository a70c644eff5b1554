// Swapchain format selection.

/// Format the surface is configured with, and the sRGB view of it the scene
/// pass renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceFormats {
    pub surface: wgpu::TextureFormat,
    pub view: wgpu::TextureFormat,
}

impl SurfaceFormats {
    /// Extra formats to list in `SurfaceConfiguration::view_formats`.
    pub fn view_formats(&self) -> Vec<wgpu::TextureFormat> {
        if self.view == self.surface {
            vec![]
        } else {
            vec![self.view]
        }
    }
}

/// Prefer a format with an sRGB variant. WebGPU canvases only report linear
/// formats, so encoding goes through an sRGB view of the swapchain texture.
pub fn choose_surface_formats(formats: &[wgpu::TextureFormat]) -> Option<SurfaceFormats> {
    let surface = formats
        .iter()
        .copied()
        .find(|f| f.add_srgb_suffix().is_srgb())
        .or_else(|| formats.first().copied())?;
    Some(SurfaceFormats {
        surface,
        view: surface.add_srgb_suffix(),
    })
}
