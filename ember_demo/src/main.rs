//! Triangle demo for the Ember rendering layer
//!
//! Creates a window and a GL 3.3 core context with glutin, builds the
//! triangle's vertex buffer, index buffer, layout and vertex array through
//! the ember_render traits, compiles the two demo shaders and runs the
//! draw loop.

use std::sync::Arc;

use ember_render::ember::{
    render::{
        create_vertex_buffer_from, AttributeType, IndexBuffer, Renderer, RendererConfig,
        VertexArray, VertexBuffer, VertexLayout,
    },
    Error, Result,
};
use ember_render::glam::{vec2, Vec2};
use ember_render::{render_error, render_info};
use ember_render_backend_gl::{GlRenderer, GlShaderProgram};
use glow::HasContext;
use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;

/// Input location 0 matches the single attribute slot the layout registers
const VERTEX_SHADER: &str = r"#version 330 core

layout(location = 0) in vec4 position;

void main()
{
    gl_Position = position;
}
";

const FRAGMENT_SHADER: &str = r"#version 330 core

layout(location = 0) out vec4 color;

void main()
{
    color = vec4(1.0, 0.2, 0.1, 1.0);
}
";

fn main() {
    if let Err(error) = run() {
        render_error!("ember::demo", "demo failed: {}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = RendererConfig {
        app_name: "Ember Triangle".to_string(),
        ..RendererConfig::default()
    };

    let event_loop = EventLoop::new();
    let window_builder = WindowBuilder::new()
        .with_title(config.app_name.clone())
        .with_inner_size(glutin::dpi::LogicalSize::new(640.0, 480.0));
    // The shaders are `#version 330 core`; without an explicit core-profile
    // request some platforms hand back a legacy context that cannot compile
    // them.
    let windowed_context = glutin::ContextBuilder::new()
        .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
        .with_gl_profile(glutin::GlProfile::Core)
        .with_gl_debug_flag(config.enable_debug)
        .with_vsync(config.vsync)
        .build_windowed(window_builder, &event_loop)
        .map_err(|e| Error::InitializationFailed(format!("window creation: {}", e)))?;
    let windowed_context = unsafe { windowed_context.make_current() }
        .map_err(|(_, e)| Error::InitializationFailed(format!("context activation: {}", e)))?;

    let gl = Arc::new(unsafe {
        glow::Context::from_loader_function(|name| {
            windowed_context.get_proc_address(name) as *const _
        })
    });
    render_info!("ember::demo", "OpenGL version: {}", unsafe {
        gl.get_parameter_string(glow::VERSION)
    });

    let renderer = GlRenderer::new(gl.clone());

    let positions: [Vec2; 3] = [vec2(-0.5, -0.5), vec2(0.0, 0.5), vec2(0.5, -0.5)];
    let vertex_buffer = create_vertex_buffer_from(&renderer, &positions)?;
    let index_buffer = renderer.create_index_buffer(&[0, 1, 2])?;

    let mut layout = VertexLayout::new();
    layout.push(AttributeType::Float32, 2)?;

    let mut vertex_array = renderer.create_vertex_array()?;
    vertex_array.attach(vertex_buffer.as_ref(), &layout)?;

    let program = GlShaderProgram::new(gl.clone(), VERTEX_SHADER, FRAGMENT_SHADER)?;

    render_info!(
        "ember::demo",
        "drawing {} vertices ({} indices)",
        vertex_buffer.vertex_count(&layout),
        index_buffer.count()
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                windowed_context.resize(size);
                unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) };
            }
            Event::MainEventsCleared => {
                windowed_context.window().request_redraw();
            }
            Event::RedrawRequested(_) => {
                unsafe {
                    gl.clear_color(0.05, 0.05, 0.08, 1.0);
                    gl.clear(glow::COLOR_BUFFER_BIT);
                }

                program.bind();
                vertex_array.bind();
                index_buffer.bind();
                unsafe {
                    gl.draw_elements(
                        glow::TRIANGLES,
                        index_buffer.count() as i32,
                        glow::UNSIGNED_INT,
                        0,
                    );
                }

                if let Err(error) = windowed_context.swap_buffers() {
                    render_error!("ember::demo", "swap_buffers failed: {}", error);
                }
            }
            Event::LoopDestroyed => {
                // The array only borrows the buffer; it stays owned here
                // until the loop tears down.
                render_info!(
                    "ember::demo",
                    "releasing {} bytes of vertex data",
                    vertex_buffer.size_bytes()
                );
            }
            _ => (),
        }
    });
}
