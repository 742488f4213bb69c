//! GPU-side buffers for a particle field.
//!
//! Each parallel attribute array becomes one vertex buffer, laid out
//! exactly as the arrays are stored, so the render pipeline can bind them
//! as per-vertex attributes of a point-sprite draw. Only the select-weight
//! buffer is ever rewritten after creation, and only on frames where the
//! relaxation pass actually mutated the array.
//!
//! The caller owns the `wgpu::Device` and `wgpu::Queue`; this module never
//! initializes the GPU itself.

use wgpu::util::DeviceExt;

use crate::field::ParticleField;

/// One GPU buffer per particle attribute, plus the uniform block.
pub struct AttributeBuffers {
    position: wgpu::Buffer,
    base_color: wgpu::Buffer,
    radial_color: wgpu::Buffer,
    select: wgpu::Buffer,
    direction: wgpu::Buffer,
    speed: wgpu::Buffer,
    radius: wgpu::Buffer,
    phase: wgpu::Buffer,
    uniforms: wgpu::Buffer,
}

fn vertex_buffer(device: &wgpu::Device, label: &str, data: &[f32]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

impl AttributeBuffers {
    /// Create buffers holding the field's current attribute data.
    pub fn new(device: &wgpu::Device, field: &ParticleField) -> Self {
        let attrs = field.attributes();

        let select = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("field select weights"),
            contents: bytemuck::cast_slice(field.select_weights()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let uniforms = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("field uniforms"),
            contents: field.uniforms().as_bytes(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            position: vertex_buffer(device, "field positions", attrs.positions()),
            base_color: vertex_buffer(device, "field base colors", attrs.base_colors()),
            radial_color: vertex_buffer(device, "field radial colors", attrs.radial_colors()),
            select,
            direction: vertex_buffer(device, "field directions", attrs.directions()),
            speed: vertex_buffer(device, "field speeds", attrs.speeds()),
            radius: vertex_buffer(device, "field radii", attrs.radii()),
            phase: vertex_buffer(device, "field phases", attrs.phases()),
            uniforms,
        }
    }

    /// Push this frame's mutable state to the GPU. Call after
    /// [`ParticleField::update`].
    ///
    /// Rewrites the select-weight buffer only when the field reports a
    /// mutation; the uniform block is rewritten every frame.
    pub fn sync(&self, queue: &wgpu::Queue, field: &mut ParticleField) {
        if field.take_needs_upload() {
            queue.write_buffer(&self.select, 0, bytemuck::cast_slice(field.select_weights()));
        }
        queue.write_buffer(&self.uniforms, 0, field.uniforms().as_bytes());
    }

    /// xyz positions, 3 floats per vertex.
    #[inline]
    pub fn position(&self) -> &wgpu::Buffer {
        &self.position
    }

    /// Base rgba colors, 4 floats per vertex.
    #[inline]
    pub fn base_color(&self) -> &wgpu::Buffer {
        &self.base_color
    }

    /// Radial rgba colors, 4 floats per vertex.
    #[inline]
    pub fn radial_color(&self) -> &wgpu::Buffer {
        &self.radial_color
    }

    /// Select weights, 1 float per vertex. The only buffer that changes.
    #[inline]
    pub fn select(&self) -> &wgpu::Buffer {
        &self.select
    }

    /// Direction signs, 1 float per vertex.
    #[inline]
    pub fn direction(&self) -> &wgpu::Buffer {
        &self.direction
    }

    /// Jitter speeds, 1 float per vertex.
    #[inline]
    pub fn speed(&self) -> &wgpu::Buffer {
        &self.speed
    }

    /// Orbit radii, 1 float per vertex.
    #[inline]
    pub fn radius(&self) -> &wgpu::Buffer {
        &self.radius
    }

    /// Phase offsets, 1 float per vertex.
    #[inline]
    pub fn phase(&self) -> &wgpu::Buffer {
        &self.phase
    }

    /// The [`FieldUniforms`](crate::FieldUniforms) block.
    #[inline]
    pub fn uniforms(&self) -> &wgpu::Buffer {
        &self.uniforms
    }
}
