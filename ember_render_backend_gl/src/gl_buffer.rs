/// GL buffer objects - OpenGL implementations of VertexBuffer / IndexBuffer

use std::sync::Arc;

use ember_render::ember::render::{IndexBuffer, VertexBuffer};
use glow::HasContext;

/// OpenGL vertex buffer (GL_ARRAY_BUFFER)
///
/// The data is uploaded once at creation with GL_STATIC_DRAW and never
/// rewritten. Dropping the wrapper deletes the native buffer; the type is
/// move-only, so the handle is released exactly once.
pub struct GlVertexBuffer {
    gl: Arc<glow::Context>,
    raw: glow::NativeBuffer,
    size: u64,
}

impl GlVertexBuffer {
    pub(crate) fn new(gl: Arc<glow::Context>, raw: glow::NativeBuffer, size: u64) -> Self {
        Self { gl, raw, size }
    }
}

impl VertexBuffer for GlVertexBuffer {
    fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.raw)) };
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, None) };
    }

    fn size_bytes(&self) -> u64 {
        self.size
    }
}

impl Drop for GlVertexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.raw) };
    }
}

/// OpenGL index buffer (GL_ELEMENT_ARRAY_BUFFER)
///
/// Holds 32-bit indices; same upload-once, release-once lifecycle as
/// `GlVertexBuffer`.
pub struct GlIndexBuffer {
    gl: Arc<glow::Context>,
    raw: glow::NativeBuffer,
    count: u32,
}

impl GlIndexBuffer {
    pub(crate) fn new(gl: Arc<glow::Context>, raw: glow::NativeBuffer, count: u32) -> Self {
        Self { gl, raw, count }
    }
}

impl IndexBuffer for GlIndexBuffer {
    fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.raw)) };
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None) };
    }

    fn count(&self) -> u32 {
        self.count
    }
}

impl Drop for GlIndexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.raw) };
    }
}
