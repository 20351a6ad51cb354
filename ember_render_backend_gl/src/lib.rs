/*!
# Ember Render - OpenGL Backend

OpenGL 3.3 implementation of the Ember rendering traits.

This crate provides a GL backend that implements the ember_render traits
using the glow crate for OpenGL bindings. The caller creates the GL context
(e.g., with glutin) and hands the loaded `glow::Context` to `GlRenderer`;
every resource created from it shares that context and must be used on the
thread that owns it.
*/

// OpenGL implementation modules
mod gl_buffer;
mod gl_renderer;
mod gl_shader;
mod gl_vertex_array;

pub use gl_buffer::{GlIndexBuffer, GlVertexBuffer};
pub use gl_renderer::GlRenderer;
pub use gl_shader::GlShaderProgram;
pub use gl_vertex_array::GlVertexArray;
