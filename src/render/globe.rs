use super::helpers::{self, PipelineSpec, ADDITIVE_BLEND};
use super::NodeUniforms;
use earth_core::{uv_sphere, Blend, Geometry, MeshVertex, Scene, SceneNode, TextureImage, TextureSlot};
use wgpu::util::DeviceExt;

const MESH_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

fn mesh_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_ATTRS,
    }
}

/// One sphere shell (planet, clouds or atmosphere) with its own buffers.
struct Shell {
    name: &'static str,
    blend: Blend,
    slot: Option<TextureSlot>,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct LoadedTexture {
    slot: TextureSlot,
    tex: wgpu::Texture,
    view: wgpu::TextureView,
}

pub(crate) struct GlobeResources {
    node_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    placeholder_tex: wgpu::Texture,
    placeholder_view: wgpu::TextureView,
    textures: Vec<LoadedTexture>,
    shells: Vec<Shell>,
    opaque_pipeline: wgpu::RenderPipeline,
    alpha_pipeline: wgpu::RenderPipeline,
    additive_pipeline: wgpu::RenderPipeline,
}

impl GlobeResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        globals_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        scene: &Scene,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(earth_core::GLOBE_WGSL.into()),
        });
        let node_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globe_node_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("globe_pl"),
            bind_group_layouts: &[globals_bgl, &node_bgl],
            push_constant_ranges: &[],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("globe_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let (placeholder_tex, placeholder_view) =
            helpers::upload_rgba_texture(device, queue, "placeholder", &TextureImage::placeholder());

        let buffers = [mesh_layout()];
        let pipeline = |label: &str, blend: Option<wgpu::BlendState>, depth_write: bool| {
            helpers::make_scene_pipeline(
                device,
                PipelineSpec {
                    label,
                    layout: &layout,
                    shader: &shader,
                    buffers: &buffers,
                    color_format,
                    blend,
                    depth_write,
                    cull_mode: Some(wgpu::Face::Back),
                    sample_count,
                },
            )
        };
        let opaque_pipeline = pipeline("globe_opaque", Some(wgpu::BlendState::REPLACE), true);
        let alpha_pipeline = pipeline("globe_alpha", Some(wgpu::BlendState::ALPHA_BLENDING), false);
        let additive_pipeline = pipeline("globe_additive", Some(ADDITIVE_BLEND), false);

        let mut this = Self {
            node_bgl,
            sampler,
            placeholder_tex,
            placeholder_view,
            textures: Vec::new(),
            shells: Vec::new(),
            opaque_pipeline,
            alpha_pipeline,
            additive_pipeline,
        };
        this.shells = scene
            .shells()
            .iter()
            .filter_map(|node| this.create_shell(device, node))
            .collect();
        this
    }

    fn create_shell(&self, device: &wgpu::Device, node: &SceneNode) -> Option<Shell> {
        let Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } = node.geometry
        else {
            return None;
        };
        let mesh = uv_sphere(radius, width_segments, height_segments);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(node.name),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(node.name),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = helpers::uniform_buffer::<NodeUniforms>(device, node.name);
        let bind_group = self.node_bind_group(device, &uniform_buffer, node.material.texture);
        Some(Shell {
            name: node.name,
            blend: node.material.blend,
            slot: node.material.texture,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
        })
    }

    fn texture_view(&self, slot: Option<TextureSlot>) -> &wgpu::TextureView {
        slot.and_then(|s| self.textures.iter().find(|t| t.slot == s))
            .map(|t| &t.view)
            .unwrap_or(&self.placeholder_view)
    }

    fn node_bind_group(
        &self,
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        slot: Option<TextureSlot>,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globe_node_bg"),
            layout: &self.node_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(self.texture_view(slot)),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }

    /// Replace the placeholder for `slot` and rebind every shell sampling it.
    pub(crate) fn set_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        slot: TextureSlot,
        image: &TextureImage,
    ) {
        let (tex, view) = helpers::upload_rgba_texture(device, queue, &format!("{:?}", slot), image);
        if let Some(pos) = self.textures.iter().position(|t| t.slot == slot) {
            self.textures.swap_remove(pos).tex.destroy();
        }
        self.textures.push(LoadedTexture { slot, tex, view });

        let rebinds: Vec<(usize, wgpu::BindGroup)> = self
            .shells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.slot == Some(slot))
            .map(|(i, s)| (i, self.node_bind_group(device, &s.uniform_buffer, s.slot)))
            .collect();
        for (i, bg) in rebinds {
            log::info!("[gpu] {} texture {}x{}", self.shells[i].name, image.width, image.height);
            self.shells[i].bind_group = bg;
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, scene: &Scene) {
        for (shell, node) in self.shells.iter().zip(scene.shells()) {
            let u = NodeUniforms::from_node(node);
            queue.write_buffer(&shell.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    fn pipeline(&self, blend: Blend) -> &wgpu::RenderPipeline {
        match blend {
            Blend::Opaque => &self.opaque_pipeline,
            Blend::Alpha => &self.alpha_pipeline,
            Blend::Additive => &self.additive_pipeline,
        }
    }

    fn draw_where(&self, rpass: &mut wgpu::RenderPass<'_>, pred: impl Fn(Blend) -> bool) {
        for shell in self.shells.iter().filter(|s| pred(s.blend)) {
            rpass.set_pipeline(self.pipeline(shell.blend));
            rpass.set_bind_group(1, &shell.bind_group, &[]);
            rpass.set_vertex_buffer(0, shell.vertex_buffer.slice(..));
            rpass.set_index_buffer(shell.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..shell.index_count, 0, 0..1);
        }
    }

    pub(crate) fn draw_opaque(&self, rpass: &mut wgpu::RenderPass<'_>) {
        self.draw_where(rpass, |b| b == Blend::Opaque);
    }

    /// Blended shells in scene order (clouds, then atmosphere).
    pub(crate) fn draw_blended(&self, rpass: &mut wgpu::RenderPass<'_>) {
        self.draw_where(rpass, |b| b != Blend::Opaque);
    }

    pub(crate) fn destroy(&self) {
        for shell in &self.shells {
            shell.vertex_buffer.destroy();
            shell.index_buffer.destroy();
            shell.uniform_buffer.destroy();
        }
        for t in &self.textures {
            t.tex.destroy();
        }
        self.placeholder_tex.destroy();
    }
}
