use gridglow_engine::render::{RenderCtx, RenderTarget};
use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::mesh::{GridMesh, GridVertex, MeshKey};
use crate::state::ShaderState;

use super::uniforms::GridUniforms;

/// GPU side of the grid: line-list pipeline, uniform block and mesh buffer.
///
/// All resources are created lazily on the first `render` and belong to the
/// window that renders them. The mesh buffer is rebuilt only when the
/// viewport size or grid spacing changes.
#[derive(Default)]
pub struct GridRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,

    mesh_key: Option<MeshKey>,
    mesh_vbo: Option<wgpu::Buffer>,
    mesh_vertex_count: u32,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        state: &ShaderState,
        camera: &Camera,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_mesh(ctx, state.mesh_key());

        if self.mesh_key != Some(state.mesh_key()) {
            log::debug!("mesh does not match shader state viewport, skipping draw");
            return;
        }
        if self.mesh_vertex_count == 0 {
            return;
        }

        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&GridUniforms::new(state, camera)));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.mesh_vbo.as_ref() else { return };

        let mut rpass = target.begin_pass("gridglow grid pass", None);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.mesh_vertex_count, 0..1);
    }

    /// Destroys every GPU buffer. The next `render` starts from scratch.
    pub fn release(&mut self) {
        if let Some(vbo) = self.mesh_vbo.take() {
            vbo.destroy();
        }
        if let Some(ubo) = self.uniform_buffer.take() {
            ubo.destroy();
        }
        self.bind_group = None;
        self.bind_group_layout = None;
        self.pipeline = None;
        self.pipeline_format = None;
        self.mesh_key = None;
        self.mesh_vertex_count = 0;
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gridglow grid shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/grid.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("gridglow grid bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(GridUniforms::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("gridglow grid pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("gridglow grid pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GridVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Fragment output is straight alpha.
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("grid pipeline created for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        if let Some(ubo) = self.uniform_buffer.take() {
            ubo.destroy();
        }
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_buffer.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("gridglow grid ubo"),
            size: GridUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("gridglow grid bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.uniform_buffer = Some(uniform_buffer);
        self.bind_group = Some(bind_group);
    }

    fn ensure_mesh(&mut self, ctx: &RenderCtx<'_>, key: MeshKey) {
        if self.mesh_key == Some(key) {
            return;
        }

        if let Some(old) = self.mesh_vbo.take() {
            old.destroy();
        }

        let mesh = GridMesh::build(key.width, key.height, key.spacing);
        log::debug!(
            "grid mesh rebuilt: {}x{} spacing {} -> {} segments",
            key.width,
            key.height,
            key.spacing,
            mesh.segment_count(),
        );

        self.mesh_vertex_count = mesh.vertices().len() as u32;
        if !mesh.is_empty() {
            self.mesh_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("gridglow grid vbo"),
                contents: bytemuck::cast_slice(mesh.vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            }));
        }
        self.mesh_key = Some(mesh.key());
    }
}
