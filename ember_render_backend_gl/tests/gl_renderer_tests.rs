//! Integration tests for the GlRenderer backend
//!
//! These tests verify that the GL backend correctly implements the renderer
//! traits. All tests need a display and a GL 3.3 core context and are marked
//! with #[ignore].
//!
//! Run with: cargo test --test gl_renderer_tests -- --ignored

use std::sync::Arc;

use ember_render::ember::render::{
    AttributeType, IndexBuffer, Renderer, VertexArray, VertexBuffer, VertexLayout,
};
use ember_render::ember::Error;
use ember_render_backend_gl::{GlRenderer, GlShaderProgram};
use glutin::event_loop::EventLoop;

const VERTEX_SHADER: &str = r"#version 330 core
layout(location = 0) in vec4 position;
void main() { gl_Position = position; }
";

const FRAGMENT_SHADER: &str = r"#version 330 core
layout(location = 0) out vec4 color;
void main() { color = vec4(1.0); }
";

/// Helper to create a headless GL 3.3 core context for tests
fn create_test_renderer() -> (glutin::Context<glutin::PossiblyCurrent>, GlRenderer) {
    let event_loop = EventLoop::new();
    let context = glutin::ContextBuilder::new()
        .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
        .with_gl_profile(glutin::GlProfile::Core)
        .build_headless(&event_loop, glutin::dpi::PhysicalSize::new(1, 1))
        .unwrap();
    let context = unsafe { context.make_current() }.map_err(|(_, e)| e).unwrap();
    let gl = Arc::new(unsafe {
        glow::Context::from_loader_function(|name| context.get_proc_address(name) as *const _)
    });
    (context, GlRenderer::new(gl))
}

// ============================================================================
// BUFFER TESTS
// ============================================================================

#[test]
#[ignore] // Requires a display and GL 3.3
fn test_gl_create_vertex_buffer_records_size() {
    let (_context, renderer) = create_test_renderer();
    let buffer = renderer.create_vertex_buffer(&[0u8; 24]).unwrap();
    assert_eq!(buffer.size_bytes(), 24);
}

#[test]
#[ignore] // Requires a display and GL 3.3
fn test_gl_create_index_buffer_records_count() {
    let (_context, renderer) = create_test_renderer();
    let buffer = renderer.create_index_buffer(&[0, 1, 2]).unwrap();
    assert_eq!(buffer.count(), 3);
}

#[test]
#[ignore] // Requires a display and GL 3.3
fn test_gl_vertex_count_from_size_and_stride() {
    let (_context, renderer) = create_test_renderer();
    let buffer = renderer.create_vertex_buffer(&[0u8; 24]).unwrap();

    let mut layout = VertexLayout::new();
    layout.push(AttributeType::Float32, 2).unwrap();

    assert_eq!(buffer.vertex_count(&layout), 3);
}

// ============================================================================
// VERTEX ARRAY TESTS
// ============================================================================

#[test]
#[ignore] // Requires a display and GL 3.3
fn test_gl_attach_counts_attributes() {
    let (_context, renderer) = create_test_renderer();
    let buffer = renderer.create_vertex_buffer(&[0u8; 40]).unwrap();
    let mut array = renderer.create_vertex_array().unwrap();

    let mut layout = VertexLayout::new();
    layout.push(AttributeType::Float32, 2).unwrap();
    layout.push(AttributeType::Float32, 2).unwrap();
    layout.push(AttributeType::UInt8, 4).unwrap();

    array.attach(buffer.as_ref(), &layout).unwrap();
    assert_eq!(array.attribute_count(), 3);
}

#[test]
#[ignore] // Requires a display and GL 3.3
fn test_gl_reattach_narrows_attribute_count() {
    let (_context, renderer) = create_test_renderer();
    let buffer = renderer.create_vertex_buffer(&[0u8; 40]).unwrap();
    let mut array = renderer.create_vertex_array().unwrap();

    let mut wide = VertexLayout::new();
    wide.push(AttributeType::Float32, 2).unwrap();
    wide.push(AttributeType::Float32, 2).unwrap();
    array.attach(buffer.as_ref(), &wide).unwrap();

    let mut narrow = VertexLayout::new();
    narrow.push(AttributeType::UInt32, 1).unwrap();
    array.attach(buffer.as_ref(), &narrow).unwrap();

    assert_eq!(array.attribute_count(), 1);
}

// ============================================================================
// SHADER TESTS
// ============================================================================

#[test]
#[ignore] // Requires a display and GL 3.3
fn test_gl_shader_program_compiles_and_links() {
    let (_context, renderer) = create_test_renderer();
    let program = GlShaderProgram::new(renderer.context().clone(), VERTEX_SHADER, FRAGMENT_SHADER);
    assert!(program.is_ok());
}

#[test]
#[ignore] // Requires a display and GL 3.3
fn test_gl_shader_compile_failure_is_fatal_and_typed() {
    let (_context, renderer) = create_test_renderer();
    let result = GlShaderProgram::new(
        renderer.context().clone(),
        "#version 330 core\nvoid main() { not_glsl; }",
        FRAGMENT_SHADER,
    );
    assert!(matches!(result, Err(Error::ShaderCompile(_))));
}
