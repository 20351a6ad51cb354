/*!
# Ember Render

Core traits and types for the Ember rendering layer.

This crate provides the platform-agnostic API for GPU buffer objects using
trait-based dynamic polymorphism. Backend implementations (OpenGL, and
potentially others) live in separate crates and implement these traits.

## Architecture

- **Renderer**: Factory trait for creating GPU buffer resources
- **VertexBuffer**: Raw per-vertex data uploaded once at creation
- **IndexBuffer**: Element indices uploaded once at creation
- **VertexArray**: Composes a vertex buffer with a `VertexLayout` into
  the pipeline's attribute-array state
- **VertexLayout**: Ordered attribute descriptors plus the packed
  per-vertex byte stride

Backend implementations provide concrete types that implement these traits.
*/

// Internal modules
mod error;
pub mod log;
pub mod renderer;

// Main ember namespace module
pub mod ember {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: render_* macros are exported at the crate root
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }
}

// Re-export math library at crate root
pub use glam;
