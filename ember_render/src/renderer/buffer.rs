/// VertexBuffer / IndexBuffer traits

use crate::error::Result;
use crate::renderer::{Renderer, VertexLayout};

/// Vertex-data buffer resource trait
///
/// Implemented by backend-specific buffer types (e.g., GlVertexBuffer).
/// The raw bytes are uploaded once at creation with static usage and are
/// immutable afterwards. The native resource is released exactly once when
/// the wrapper is dropped; wrappers are move-only, so a double release is
/// not reachable through this API.
pub trait VertexBuffer {
    /// Select this buffer as the context's current vertex buffer
    ///
    /// Idempotent; subsequent pipeline operations that reference "the
    /// currently bound vertex buffer" see this buffer until `unbind` or a
    /// different `bind` runs on the same context.
    fn bind(&self);

    /// Clear the context's current-vertex-buffer slot
    fn unbind(&self);

    /// Number of bytes uploaded at creation
    fn size_bytes(&self) -> u64;

    /// Number of whole vertices this buffer holds under `layout`
    ///
    /// Computed as `size_bytes / layout.stride()`; an empty layout yields 0.
    fn vertex_count(&self, layout: &VertexLayout) -> u64 {
        let stride = u64::from(layout.stride());
        if stride == 0 {
            0
        } else {
            self.size_bytes() / stride
        }
    }
}

/// Index buffer resource trait
///
/// Same upload-once, release-once lifecycle as `VertexBuffer`; additionally
/// records how many indices were uploaded.
pub trait IndexBuffer {
    /// Select this buffer as the context's current index buffer
    fn bind(&self);

    /// Clear the context's current-index-buffer slot
    fn unbind(&self);

    /// Number of indices uploaded at creation
    fn count(&self) -> u32;
}

/// Create a vertex buffer from a typed slice of vertex data
///
/// Convenience wrapper over `Renderer::create_vertex_buffer` that casts the
/// vertices to raw bytes.
///
/// # Arguments
///
/// * `renderer` - Factory that allocates the native buffer
/// * `vertices` - Plain-old-data vertex records
pub fn create_vertex_buffer_from<T: bytemuck::Pod>(
    renderer: &dyn Renderer,
    vertices: &[T],
) -> Result<Box<dyn VertexBuffer>> {
    renderer.create_vertex_buffer(bytemuck::cast_slice(vertices))
}
