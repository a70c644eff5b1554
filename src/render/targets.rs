use super::helpers;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Offscreen attachments for the scene pass.
///
/// - `msaa_*` is the multisampled color target resolved into the swapchain.
/// - `depth_*` matches the MSAA sample count.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            sample_count,
            color_format,
        );
        let (depth_tex, depth_view) =
            helpers::create_render_texture(device, "depth", width, height, sample_count, DEPTH_FORMAT);
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.destroy();
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }

    pub(crate) fn destroy(&self) {
        self.msaa_tex.destroy();
        self.depth_tex.destroy();
    }
}
