//! wgpu presentation of a recorded scene.
//!
//! The renderer owns the GPU surface and a single flat-color triangle
//! pipeline. Each frame it lowers the scene's [`DrawOp`]s into one vertex
//! batch -- rectangles and wide lines become quads, polygon fills are
//! ear-clipped, polygon outlines become per-edge quads, numeric labels come
//! from the built-in glyph font -- uploads it, and draws over a white clear.
//!
//! Vertex lowering is pure CPU code with no GPU dependency, so it is tested
//! headlessly; only surface presentation needs a device.

use std::sync::Arc;

use wgpu::util::DeviceExt;

use karel_world::world::Color;

use crate::geometry::Point;
use crate::surface::{DisplayList, DrawOp, DrawSurface};

use super::tessellate::triangulate;
use super::text::label_quads;

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// A single vertex with 2D pixel position and RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 4],
}

impl Vertex {
    /// Vertex buffer layout for the shader.
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Vertex buffer capacity. A full redraw of a large world stays well under
/// this; anything beyond it is truncated with a warning.
const MAX_VERTICES: usize = 65536;

/// White clear, matching the canvas background.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

// ---------------------------------------------------------------------------
// Viewport transform
// ---------------------------------------------------------------------------

/// Column-major matrix mapping pixel coordinates (origin top-left, y down)
/// to wgpu clip space.
fn pixel_to_clip_matrix(width: f32, height: f32) -> [f32; 16] {
    let sx = 2.0 / width;
    let sy = -2.0 / height;
    // col0          col1           col2             col3
    [
        sx, 0.0, 0.0, 0.0, //
        0.0, sy, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        -1.0, 1.0, 0.0, 1.0, //
    ]
}

// ---------------------------------------------------------------------------
// Vertex lowering
// ---------------------------------------------------------------------------

fn push_triangle(out: &mut Vec<Vertex>, triangle: [Point; 3], color: Color) {
    for p in triangle {
        out.push(Vertex {
            position: [p.x, p.y],
            color,
        });
    }
}

fn push_quad(out: &mut Vec<Vertex>, min: Point, max: Point, color: Color) {
    let tl = Point::new(min.x, min.y);
    let tr = Point::new(max.x, min.y);
    let br = Point::new(max.x, max.y);
    let bl = Point::new(min.x, max.y);
    push_triangle(out, [tl, tr, br], color);
    push_triangle(out, [tl, br, bl], color);
}

fn push_line(out: &mut Vec<Vertex>, from: Point, to: Point, width: f32, color: Color) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return;
    }
    // Half-width offset along the segment normal.
    let half = width.max(1.0) / 2.0;
    let nx = -dy / len * half;
    let ny = dx / len * half;

    let a = Point::new(from.x + nx, from.y + ny);
    let b = Point::new(to.x + nx, to.y + ny);
    let c = Point::new(to.x - nx, to.y - ny);
    let d = Point::new(from.x - nx, from.y - ny);
    push_triangle(out, [a, b, c], color);
    push_triangle(out, [a, c, d], color);
}

fn push_polygon(
    out: &mut Vec<Vertex>,
    points: &[Point],
    fill: Option<Color>,
    outline: Option<Color>,
    width: f32,
) {
    if let Some(fill) = fill {
        for triangle in triangulate(points) {
            push_triangle(out, triangle, fill);
        }
    }
    if let Some(outline) = outline {
        for i in 0..points.len() {
            let from = points[i];
            let to = points[(i + 1) % points.len()];
            push_line(out, from, to, width, outline);
        }
    }
}

/// Lower a recorded scene into one flat vertex batch, in draw order.
fn scene_vertices(scene: &DisplayList) -> Vec<Vertex> {
    let mut out = Vec::new();
    for op in scene.ops() {
        match op {
            DrawOp::Line {
                from,
                to,
                width,
                color,
                ..
            } => push_line(&mut out, *from, *to, *width, *color),
            DrawOp::Polygon {
                points,
                fill,
                outline,
                width,
                ..
            } => push_polygon(&mut out, points, *fill, *outline, *width),
            DrawOp::Rect { min, max, fill, .. } => push_quad(&mut out, *min, *max, *fill),
            DrawOp::Text {
                at,
                text,
                size,
                color,
                ..
            } => {
                for (min, max) in label_quads(text, *at, *size) {
                    push_quad(&mut out, min, max, *color);
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// WindowRenderer
// ---------------------------------------------------------------------------

/// Presents recorded scenes in a winit window via wgpu.
///
/// The renderer does not own the event loop; the host drives it, calling
/// [`render`](Self::render) with the current scene on each redraw and
/// [`resize`](Self::resize) on window size changes.
pub struct WindowRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    viewport_buffer: wgpu::Buffer,
    viewport_bind_group: wgpu::BindGroup,
    window: Arc<winit::window::Window>,
}

impl WindowRenderer {
    /// Initialize wgpu: surface, device, queue, pipeline.
    ///
    /// Async because wgpu adapter/device selection is asynchronous; call
    /// with `.await` or `pollster::block_on`.
    ///
    /// # Errors
    ///
    /// Returns an error if no suitable GPU adapter or device is available.
    pub async fn new(window: Arc<winit::window::Window>) -> Result<Self, anyhow::Error> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no suitable GPU adapter found"))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("karel_window_renderer"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader_source = include_str!("shaders.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("karel_window_shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let viewport_matrix = pixel_to_clip_matrix(width as f32, height as f32);
        let viewport_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("viewport_uniform"),
            contents: bytemuck::cast_slice(&viewport_matrix),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let viewport_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("viewport_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let viewport_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("viewport_bind_group"),
            layout: &viewport_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("karel_window_pipeline_layout"),
            bind_group_layouts: &[&viewport_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("karel_window_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vertex_buffer"),
            size: (MAX_VERTICES * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            render_pipeline,
            vertex_buffer,
            viewport_buffer,
            viewport_bind_group,
            window,
        })
    }

    /// Present one frame of the recorded scene.
    ///
    /// The viewport transform uses the scene's recorded dimensions, so a
    /// resized window needs [`DisplayList::resize`] plus a redraw before the
    /// next call.
    ///
    /// # Errors
    ///
    /// Returns a [`wgpu::SurfaceError`] if the surface cannot provide an
    /// output texture (window minimized, surface lost).
    pub fn render(&mut self, scene: &DisplayList) -> Result<(), wgpu::SurfaceError> {
        let (scene_width, scene_height) = scene.size();
        let viewport_matrix = pixel_to_clip_matrix(scene_width.max(1.0), scene_height.max(1.0));
        self.queue.write_buffer(
            &self.viewport_buffer,
            0,
            bytemuck::cast_slice(&viewport_matrix),
        );

        let mut vertices = scene_vertices(scene);
        if vertices.len() > MAX_VERTICES {
            tracing::warn!(
                vertices = vertices.len(),
                cap = MAX_VERTICES,
                "scene exceeds the vertex buffer, truncating"
            );
            vertices.truncate(MAX_VERTICES);
        }
        if !vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("karel_window_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("karel_window_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.viewport_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            let vertex_count = vertices.len() as u32;
            if vertex_count > 0 {
                render_pass.draw(0..vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface after a window resize.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// The window this renderer presents into.
    pub fn window(&self) -> &winit::window::Window {
        &self.window
    }
}
