//! wgpu renderer for a `goal_core::Scene`.
//!
//! The frontends own the window or canvas and hand over a `wgpu::Surface`;
//! everything after that (device, pipelines, per-node uniforms) lives here.

mod error;
mod helpers;
mod mesh;
mod targets;
mod uniforms;

pub use error::RenderError;
pub use mesh::{interleave, Vertex};
pub use uniforms::{FrameUniforms, NodeUniforms, PointLightPacked, MAX_POINT_LIGHTS};

use goal_core::{Camera, Scene, Side};
use mesh::MeshCache;
use targets::DepthTarget;

struct NodeBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    node_layout: wgpu::BindGroupLayout,
    nodes: Vec<NodeBinding>,
    meshes: MeshCache,

    // Front faces only, both faces, and edge lines
    fill_pipeline: wgpu::RenderPipeline,
    double_sided_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);
        if !format.is_srgb() {
            log::warn!("[gpu] no sRGB surface format, colors will look dark ({:?})", format);
        }
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(goal_core::SCENE_WGSL.into()),
        });
        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let node_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("node_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&frame_layout, &node_layout],
            push_constant_ranges: &[],
        });
        let fill_pipeline = helpers::make_mesh_pipeline(
            &device,
            "fill_pipeline",
            &pipeline_layout,
            &shader,
            format,
            helpers::triangles(Some(wgpu::Face::Back)),
        );
        let double_sided_pipeline = helpers::make_mesh_pipeline(
            &device,
            "double_sided_pipeline",
            &pipeline_layout,
            &shader,
            format,
            helpers::triangles(None),
        );
        let wire_pipeline = helpers::make_mesh_pipeline(
            &device,
            "wire_pipeline",
            &pipeline_layout,
            &shader,
            format,
            helpers::lines(),
        );

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            frame_buffer,
            frame_bind_group,
            node_layout,
            nodes: Vec::new(),
            meshes: MeshCache::default(),
            fill_pipeline,
            double_sided_pipeline,
            wire_pipeline,
            width,
            height,
        })
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Configure the surface again at the current size, e.g. after it was
    /// reported lost or outdated.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        if self.depth.size() != (self.width, self.height) {
            self.depth.recreate(&self.device, self.width, self.height);
        }
        log::debug!("[gpu] reconfigured {}x{}", self.width, self.height);
    }

    fn sync_nodes(&mut self, scene: &Scene) {
        while self.nodes.len() < scene.nodes().len() {
            let i = self.nodes.len();
            let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("node{}_uniforms", i)),
                size: std::mem::size_of::<NodeUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("node{}_bg", i)),
                layout: &self.node_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            self.nodes.push(NodeBinding { buffer, bind_group });
        }
        for (node, binding) in scene.nodes().iter().zip(&self.nodes) {
            let u = NodeUniforms::new(node, scene.material(node.material));
            self.queue
                .write_buffer(&binding.buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    /// Draw `scene` as seen from `camera` and present the frame.
    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        self.meshes.sync(&self.device, scene);
        self.sync_nodes(scene);
        let frame_uniforms = FrameUniforms::new(scene, camera);
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame_uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let bg = scene.background;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.r as f64,
                            g: bg.g as f64,
                            b: bg.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            for (node, binding) in scene.nodes().iter().zip(&self.nodes) {
                let Some(mesh) = self.meshes.get(node.geometry) else {
                    continue;
                };
                let material = scene.material(node.material);
                let pipeline = if material.wireframe {
                    &self.wire_pipeline
                } else if material.side == Side::Double {
                    &self.double_sided_pipeline
                } else {
                    &self.fill_pipeline
                };
                let (index_buffer, index_count) = mesh.indices(material.wireframe);
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(1, &binding.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
