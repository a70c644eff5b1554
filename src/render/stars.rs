use super::helpers::{self, PipelineSpec};
use super::NodeUniforms;
use earth_core::{SceneNode, StarPoint};
use wgpu::util::DeviceExt;

const STAR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) struct StarsResources {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl StarsResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        globals_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        points: &[StarPoint],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(earth_core::STARS_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("stars_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("stars_pl"),
            bind_group_layouts: &[globals_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StarPoint>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &STAR_ATTRS,
        }];
        let pipeline = helpers::make_scene_pipeline(
            device,
            PipelineSpec {
                label: "stars",
                layout: &layout,
                shader: &shader,
                buffers: &buffers,
                color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: true,
                cull_mode: None,
                sample_count,
            },
        );
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars_instances"),
            contents: bytemuck::cast_slice(points),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = helpers::uniform_buffer::<NodeUniforms>(device, "stars_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("stars_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            pipeline,
            instance_buffer,
            instance_count: points.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, node: &SceneNode) {
        let u = NodeUniforms::from_node(node);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
    }

    pub(crate) fn destroy(&self) {
        self.instance_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}
