use glow::HasContext;

use crate::{
    data::Vertex,
    error::{AssetError, Error, RenderError},
};

/// GPU-side copy of a mesh: one VAO and one VBO holding the interleaved
/// triangle list. The buffer is uploaded once and never rewritten.
#[derive(Debug)]
pub struct VertexBuffer {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    vertex_count: i32,
}

impl VertexBuffer {
    pub fn new(gl: &glow::Context, vertices: &[Vertex]) -> Result<Self, RenderError> {
        unsafe {
            let vao = gl.create_vertex_array().map_err(RenderError::Gl)?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer().map_err(RenderError::Gl)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                vertex_count: vertices.len() as i32,
            })
        }
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
        }
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Releases both GL objects. The buffer must not be bound again after
    /// this.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.vbo);
            gl.delete_vertex_array(self.vao);
        }
    }
}

/// Reads, compiles and links a vertex/fragment shader pair. The stage
/// objects are deleted once the program holds them.
pub fn create_shader_program(
    gl: &glow::Context,
    vertex_shader_path: &std::path::Path,
    fragment_shader_path: &std::path::Path,
) -> Result<glow::NativeProgram, Error> {
    let vertex_source = read_source(vertex_shader_path)?;
    let fragment_source = read_source(fragment_shader_path)?;

    unsafe {
        let vertex_shader = compile_shader(gl, glow::VERTEX_SHADER, "vertex", &vertex_source)?;
        let fragment_shader =
            compile_shader(gl, glow::FRAGMENT_SHADER, "fragment", &fragment_source)?;

        let program = gl.create_program().map_err(RenderError::Gl)?;
        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);

        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        if !gl.get_program_link_status(program) {
            let info_log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(RenderError::ProgramLink(info_log).into());
        }

        Ok(program)
    }
}

fn read_source(path: &std::path::Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

unsafe fn compile_shader(
    gl: &glow::Context,
    shader_type: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::NativeShader, RenderError> {
    let shader = gl.create_shader(shader_type).map_err(RenderError::Gl)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let info_log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(RenderError::ShaderCompile { stage, info_log });
    }

    Ok(shader)
}
