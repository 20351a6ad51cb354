/// Renderer trait - buffer resource factory interface

use crate::error::Result;
use crate::renderer::{IndexBuffer, VertexArray, VertexBuffer};

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Application name (window title in the demo driver)
    pub app_name: String,
    /// Enable vertical sync on the presenting context
    pub vsync: bool,
    /// Request a debug context so GL debug output is available
    pub enable_debug: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            app_name: "Ember Render Application".to_string(),
            vsync: true,
            enable_debug: cfg!(debug_assertions),
        }
    }
}

/// Main renderer trait
///
/// This is the central factory interface for creating GPU buffer resources.
/// Implemented by backend-specific renderers (e.g., GlRenderer) and by the
/// mock renderer used in unit tests.
///
/// Every operation is synchronous and must run on the thread owning the
/// underlying graphics context; the context is single-thread-affine, so the
/// traits carry no Send/Sync bounds.
pub trait Renderer {
    /// Create a vertex buffer and upload `data` once with static usage
    ///
    /// # Arguments
    ///
    /// * `data` - Raw vertex bytes, laid out per some `VertexLayout`
    ///
    /// # Errors
    ///
    /// `Error::ResourceAllocation` when the native allocation or upload
    /// fails; fatal, never retried.
    fn create_vertex_buffer(&self, data: &[u8]) -> Result<Box<dyn VertexBuffer>>;

    /// Create an index buffer and upload `indices` once with static usage
    ///
    /// # Arguments
    ///
    /// * `indices` - 32-bit element indices
    ///
    /// # Errors
    ///
    /// `Error::ResourceAllocation` when the native allocation or upload
    /// fails; fatal, never retried.
    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>>;

    /// Create an empty vertex array
    ///
    /// The array registers nothing until `VertexArray::attach` runs.
    ///
    /// # Errors
    ///
    /// `Error::ResourceAllocation` when the native allocation fails.
    fn create_vertex_array(&self) -> Result<Box<dyn VertexArray>>;
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
