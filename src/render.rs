use earth_core::{
    Camera, Geometry, LightingConfig, Scene, SceneNode, StarPoint, TextureImage, TextureSlot,
    ToneMapping, MSAA_SAMPLES,
};
use glam::Mat4;
use web_sys as web;

mod globe;
mod helpers;
mod stars;
mod surface_format;
mod targets;
use globe::GlobeResources;
use stars::StarsResources;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    ambient_color: [f32; 4],
    tone_viewport: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct NodeUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl NodeUniforms {
    pub(crate) fn from_node(node: &SceneNode) -> Self {
        let m = &node.material;
        let params = match node.geometry {
            Geometry::Sphere { .. } => [
                m.roughness,
                m.metalness,
                if m.lit { 1.0 } else { 0.0 },
                if m.texture.is_some() { 1.0 } else { 0.0 },
            ],
            Geometry::Points {
                size,
                size_attenuation,
                ..
            } => [size, if size_attenuation { 1.0 } else { 0.0 }, 0.0, 0.0],
        };
        Self {
            model: node.model_matrix().to_cols_array_2d(),
            color: [m.color[0], m.color[1], m.color[2], m.opacity],
            params,
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    targets: RenderTargets,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    globe: GlobeResources,
    stars: StarsResources,
    lighting: LightingConfig,
    tone_mapping: ToneMapping,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        scene: &Scene,
        star_points: &[StarPoint],
        lighting: LightingConfig,
        tone_mapping: ToneMapping,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let formats = surface_format::choose_surface_formats(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let format = formats.view;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: formats.surface,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: formats.view_formats(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} {:?} (view {:?})",
            width,
            height,
            formats.surface,
            format
        );

        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLES);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let globals_buffer = helpers::uniform_buffer::<GlobalUniforms>(&device, "globals");
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let globe = GlobeResources::new(&device, &queue, &globals_bgl, format, MSAA_SAMPLES, scene);
        let stars = StarsResources::new(&device, &globals_bgl, format, MSAA_SAMPLES, star_points);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format: format,
            targets,
            globals_buffer,
            globals_bg,
            globe,
            stars,
            lighting,
            tone_mapping,
            clear_color: wgpu::Color::BLACK,
            width,
            height,
        })
    }

    pub fn set_texture(&mut self, slot: TextureSlot, image: &TextureImage) {
        self.globe.set_texture(&self.device, &self.queue, slot, image);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            log::info!("[gpu] resized to {}x{}", width, height);
        }
    }

    /// Configure the surface again at its current size, after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn write_globals(&self, camera: &Camera) {
        let view = camera.view_matrix();
        let view_proj: Mat4 = camera.projection_matrix() * view;
        let l = self.lighting.direction_to_light();
        let lc = self.lighting.directional_radiance();
        let ac = self.lighting.ambient_radiance();
        let [tone_on, exposure] = self.tone_mapping.as_uniform();
        let g = GlobalUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            light_dir: l.extend(0.0).to_array(),
            light_color: lc.extend(1.0).to_array(),
            ambient_color: ac.extend(1.0).to_array(),
            tone_viewport: [tone_on, exposure, self.width as f32, self.height as f32],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.write_globals(camera);
        self.globe.write_uniforms(&self.queue, scene);
        self.stars.write_uniforms(&self.queue, &scene.stars);

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            // opaque planet, then stars, then the blended shells
            self.globe.draw_opaque(&mut rpass);
            self.stars.draw(&mut rpass);
            self.globe.draw_blended(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release every GPU resource and the device itself.
    pub fn dispose(self) {
        self.globe.destroy();
        self.stars.destroy();
        self.targets.destroy();
        self.globals_buffer.destroy();
        self.device.destroy();
        log::info!("[unload] GPU resources released");
    }
}
