/// Renderer module - all rendering-related types and traits

// Module declarations
pub mod buffer;
pub mod layout;
pub mod renderer;
pub mod vertex_array;

// Mock backend for unit tests; all items are #[cfg(test)]-gated
mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use buffer::*;
pub use layout::*;
pub use vertex_array::*;
