/// VertexArray trait - composes a vertex buffer with a layout

use crate::error::Result;
use crate::renderer::{VertexBuffer, VertexLayout};

/// Vertex array resource trait
///
/// Owns one native vertex-array handle and records derived attribute-array
/// state. It does NOT own the buffer or the layout it is attached to: only
/// offsets, strides and type codes are registered with the pipeline, so the
/// caller must keep the vertex buffer alive for as long as draws reference
/// this array.
pub trait VertexArray {
    /// Register `layout` against `buffer` with the pipeline
    ///
    /// Binds this array, binds the buffer, then walks the layout in order:
    /// attribute slot `i` is enabled and registered with the i-th element's
    /// component count, element type, normalization flag, the layout stride
    /// and the element's running byte offset. The slot index equals the
    /// element's position in the layout; the consuming shader must declare
    /// matching input locations (this contract is not validated here).
    ///
    /// Attaching an empty layout registers nothing and succeeds. A second
    /// attach replaces the previous registration; slots enabled by a wider
    /// previous layout are disabled so no stale registration survives.
    fn attach(&mut self, buffer: &dyn VertexBuffer, layout: &VertexLayout) -> Result<()>;

    /// Select this array as the context's current vertex array
    fn bind(&self);

    /// Clear the context's current-vertex-array slot
    fn unbind(&self);

    /// Number of attribute slots registered by the last `attach` (0 when
    /// never attached)
    fn attribute_count(&self) -> u32;
}
