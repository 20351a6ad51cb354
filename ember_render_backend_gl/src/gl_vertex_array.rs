/// GlVertexArray - OpenGL implementation of the VertexArray trait

use std::sync::Arc;

use ember_render::ember::{
    render::{AttributeType, VertexArray, VertexBuffer, VertexLayout},
    Result,
};
use ember_render::render_trace;
use glow::HasContext;

/// GL type code for an attribute element type
fn gl_attribute_type(kind: AttributeType) -> u32 {
    match kind {
        AttributeType::Float32 => glow::FLOAT,
        AttributeType::UInt32 => glow::UNSIGNED_INT,
        AttributeType::UInt8 => glow::UNSIGNED_BYTE,
    }
}

/// OpenGL vertex array object
///
/// Records attribute-pointer state derived from a buffer + layout pair. The
/// buffer itself is borrowed only for the duration of `attach`; the caller
/// keeps it alive while draws reference this array.
pub struct GlVertexArray {
    gl: Arc<glow::Context>,
    raw: glow::NativeVertexArray,
    attribute_count: u32,
}

impl GlVertexArray {
    pub(crate) fn new(gl: Arc<glow::Context>, raw: glow::NativeVertexArray) -> Self {
        Self {
            gl,
            raw,
            attribute_count: 0,
        }
    }
}

impl VertexArray for GlVertexArray {
    fn attach(&mut self, buffer: &dyn VertexBuffer, layout: &VertexLayout) -> Result<()> {
        self.bind();
        buffer.bind();

        let stride = layout.stride() as i32;
        let mut slot = 0u32;
        for (element, offset) in layout.iter_with_offsets() {
            unsafe {
                self.gl.enable_vertex_attrib_array(slot);
                self.gl.vertex_attrib_pointer_f32(
                    slot,
                    element.count as i32,
                    gl_attribute_type(element.kind),
                    element.normalized,
                    stride,
                    offset as i32,
                );
            }
            render_trace!(
                "ember::gl",
                "attribute {}: {:?} x{} at offset {} (stride {})",
                slot,
                element.kind,
                element.count,
                offset,
                stride
            );
            slot += 1;
        }

        // Slots enabled by a previous, wider attachment must not survive.
        for stale in slot..self.attribute_count {
            unsafe { self.gl.disable_vertex_attrib_array(stale) };
        }
        self.attribute_count = slot;
        Ok(())
    }

    fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.raw)) };
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_vertex_array(None) };
    }

    fn attribute_count(&self) -> u32 {
        self.attribute_count
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe { self.gl.delete_vertex_array(self.raw) };
    }
}

#[cfg(test)]
#[path = "gl_vertex_array_tests.rs"]
mod tests;
