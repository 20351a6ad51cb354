/// GlShaderProgram - compiled and linked GL shader pair
///
/// Shader *management* (caching, reflection, hot reload) is out of scope;
/// this is just enough program plumbing for a caller to drive draws against
/// an attached vertex array. Compile and link failures are fatal: the
/// driver info log is reported and no half-valid program handle escapes.

use std::sync::Arc;

use ember_render::ember::{Error, Result};
use ember_render::render_error;
use glow::HasContext;

/// Compile one shader stage, returning the native handle
fn compile_stage(gl: &glow::Context, stage: u32, source: &str) -> Result<glow::NativeShader> {
    let name = if stage == glow::VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };
    let shader = unsafe { gl.create_shader(stage) }
        .map_err(|e| Error::ResourceAllocation(format!("{} shader: {}", name, e)))?;
    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let info_log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            render_error!("ember::gl", "failed to compile {} shader: {}", name, info_log);
            return Err(Error::ShaderCompile(format!("{} shader: {}", name, info_log)));
        }
    }
    Ok(shader)
}

/// Linked OpenGL shader program
///
/// The attribute slot an array registers under must match the input
/// location the vertex shader declares; that contract is the caller's to
/// uphold.
pub struct GlShaderProgram {
    gl: Arc<glow::Context>,
    program: glow::NativeProgram,
}

impl GlShaderProgram {
    /// Compile both stages and link them into a program
    ///
    /// # Arguments
    ///
    /// * `gl` - Shared GL context
    /// * `vertex_src` - Vertex shader GLSL source
    /// * `fragment_src` - Fragment shader GLSL source
    ///
    /// # Errors
    ///
    /// `Error::ShaderCompile` with the driver info log when compilation or
    /// linking fails.
    pub fn new(gl: Arc<glow::Context>, vertex_src: &str, fragment_src: &str) -> Result<Self> {
        let program = unsafe { gl.create_program() }
            .map_err(|e| Error::ResourceAllocation(format!("shader program: {}", e)))?;

        let vertex = match compile_stage(&gl, glow::VERTEX_SHADER, vertex_src) {
            Ok(shader) => shader,
            Err(error) => {
                unsafe { gl.delete_program(program) };
                return Err(error);
            }
        };
        let fragment = match compile_stage(&gl, glow::FRAGMENT_SHADER, fragment_src) {
            Ok(shader) => shader,
            Err(error) => {
                unsafe {
                    gl.delete_shader(vertex);
                    gl.delete_program(program);
                }
                return Err(error);
            }
        };

        unsafe {
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !linked {
                let info_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                render_error!("ember::gl", "failed to link shader program: {}", info_log);
                return Err(Error::ShaderCompile(format!("program link: {}", info_log)));
            }
        }

        Ok(Self { gl, program })
    }

    /// Select this program for subsequent draws
    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }

    /// Clear the current-program slot
    pub fn unbind(&self) {
        unsafe { self.gl.use_program(None) };
    }
}

impl Drop for GlShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) };
    }
}
