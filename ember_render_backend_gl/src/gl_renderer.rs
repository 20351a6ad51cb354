/// GlRenderer - OpenGL implementation of the Renderer factory trait

use std::sync::Arc;

use ember_render::ember::{
    render::{IndexBuffer, Renderer, VertexArray, VertexBuffer},
    Error, Result,
};
use ember_render::render_debug;
use glow::HasContext;

use crate::gl_buffer::{GlIndexBuffer, GlVertexBuffer};
use crate::gl_vertex_array::GlVertexArray;

/// OpenGL renderer
///
/// Holds the loaded GL function table. All resources created through it
/// keep a shared handle to the same context; the context is the explicit
/// carrier of the pipeline's "currently bound" slots.
pub struct GlRenderer {
    gl: Arc<glow::Context>,
}

impl GlRenderer {
    /// Create a renderer over an already-loaded GL context
    ///
    /// The context must be current on the calling thread and stay current
    /// for every operation on this renderer and its resources.
    pub fn new(gl: Arc<glow::Context>) -> Self {
        Self { gl }
    }

    /// The shared GL context, for callers that issue draw calls directly
    pub fn context(&self) -> &Arc<glow::Context> {
        &self.gl
    }
}

impl Renderer for GlRenderer {
    fn create_vertex_buffer(&self, data: &[u8]) -> Result<Box<dyn VertexBuffer>> {
        let raw = unsafe { self.gl.create_buffer() }
            .map_err(|e| Error::ResourceAllocation(format!("vertex buffer: {}", e)))?;
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(raw));
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW);
        }
        render_debug!("ember::gl", "created vertex buffer ({} bytes)", data.len());
        Ok(Box::new(GlVertexBuffer::new(
            self.gl.clone(),
            raw,
            data.len() as u64,
        )))
    }

    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>> {
        let raw = unsafe { self.gl.create_buffer() }
            .map_err(|e| Error::ResourceAllocation(format!("index buffer: {}", e)))?;
        unsafe {
            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(raw));
            self.gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );
        }
        render_debug!("ember::gl", "created index buffer ({} indices)", indices.len());
        Ok(Box::new(GlIndexBuffer::new(
            self.gl.clone(),
            raw,
            indices.len() as u32,
        )))
    }

    fn create_vertex_array(&self) -> Result<Box<dyn VertexArray>> {
        let raw = unsafe { self.gl.create_vertex_array() }
            .map_err(|e| Error::ResourceAllocation(format!("vertex array: {}", e)))?;
        render_debug!("ember::gl", "created vertex array");
        Ok(Box::new(GlVertexArray::new(self.gl.clone(), raw)))
    }
}
