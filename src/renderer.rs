use std::rc::Rc;

use glow::HasContext;

use crate::{
    assets,
    camera::Camera,
    error::{Error, RenderError},
    mesh::Mesh,
    opengl::{self, VertexBuffer},
    textures::Texture,
};

/// Owns the GPU side of one mesh: the uploaded vertex buffer, the shader
/// program, and the transform applied at draw time. The mesh and the
/// texture themselves are shared with whoever composed us.
pub struct MeshRenderer {
    mesh: Rc<Mesh>,
    texture: Option<Rc<Texture>>,

    buffer: VertexBuffer,
    program: glow::NativeProgram,

    position_location: u32,
    uv_location: u32,
    transform_uniform: Option<glow::NativeUniformLocation>,
    view_uniform: Option<glow::NativeUniformLocation>,
    projection_uniform: Option<glow::NativeUniformLocation>,
    sampler_uniform: Option<glow::NativeUniformLocation>,

    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Vector3<f32>, // degrees per axis
    pub scale: cgmath::Vector3<f32>,
}

impl MeshRenderer {
    /// Compiles the model shader pair, queries its attribute and uniform
    /// locations, and uploads the mesh. An empty mesh uploads an empty
    /// buffer and draws nothing.
    pub fn new(gl: &glow::Context, mesh: Rc<Mesh>) -> Result<Self, Error> {
        let program = opengl::create_shader_program(
            gl,
            &assets::shader_path("model.vert"),
            &assets::shader_path("model.frag"),
        )?;

        let position_location = unsafe {
            gl.get_attrib_location(program, "vertexPos3D")
                .ok_or(RenderError::MissingAttribute("vertexPos3D"))?
        };
        let uv_location = unsafe {
            gl.get_attrib_location(program, "vUV")
                .ok_or(RenderError::MissingAttribute("vUV"))?
        };

        let (transform_uniform, view_uniform, projection_uniform, sampler_uniform) = unsafe {
            (
                gl.get_uniform_location(program, "transform"),
                gl.get_uniform_location(program, "view"),
                gl.get_uniform_location(program, "projection"),
                gl.get_uniform_location(program, "sampler"),
            )
        };

        let buffer = VertexBuffer::new(gl, mesh.vertices())?;

        Ok(Self {
            mesh,
            texture: None,
            buffer,
            program,
            position_location,
            uv_location,
            transform_uniform,
            view_uniform,
            projection_uniform,
            sampler_uniform,
            position: cgmath::vec3(0.0, 0.0, 0.0),
            rotation: cgmath::vec3(0.0, 0.0, 0.0),
            scale: cgmath::vec3(1.0, 1.0, 1.0),
        })
    }

    pub fn set_material(&mut self, texture: Rc<Texture>) {
        self.texture = Some(texture);
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn model_matrix(&self) -> cgmath::Matrix4<f32> {
        compose_transform(self.position, self.rotation, self.scale)
    }

    pub fn draw(&self, gl: &glow::Context, camera: &dyn Camera) {
        let transform = self.model_matrix();
        let transform: &[f32; 16] = transform.as_ref();
        let view: &[f32; 16] = camera.get_view().as_ref();
        let projection: &[f32; 16] = camera.get_projection().as_ref();

        let stride = std::mem::size_of::<crate::data::Vertex>() as i32;

        unsafe {
            gl.enable(glow::CULL_FACE);

            gl.use_program(Some(self.program));

            gl.uniform_matrix_4_f32_slice(self.transform_uniform.as_ref(), false, transform);
            gl.uniform_matrix_4_f32_slice(self.view_uniform.as_ref(), false, view);
            gl.uniform_matrix_4_f32_slice(self.projection_uniform.as_ref(), false, projection);

            self.buffer.bind(gl);

            gl.vertex_attrib_pointer_f32(
                self.position_location,
                3,
                glow::FLOAT,
                false,
                stride,
                0,
            );
            gl.enable_vertex_attrib_array(self.position_location);

            gl.vertex_attrib_pointer_f32(
                self.uv_location,
                2,
                glow::FLOAT,
                false,
                stride,
                (3 * std::mem::size_of::<f32>()) as i32,
            );
            gl.enable_vertex_attrib_array(self.uv_location);

            gl.active_texture(glow::TEXTURE0);
            gl.uniform_1_i32(self.sampler_uniform.as_ref(), 0);
            if let Some(texture) = &self.texture {
                gl.bind_texture(glow::TEXTURE_2D, Some(texture.raw()));
            }

            gl.draw_arrays(glow::TRIANGLES, 0, self.buffer.vertex_count());

            gl.disable_vertex_attrib_array(self.position_location);
            gl.disable_vertex_attrib_array(self.uv_location);

            gl.use_program(None);

            gl.disable(glow::CULL_FACE);
        }
    }

    /// Releases the shader program and the vertex buffer. The renderer must
    /// not draw again after this.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
        self.buffer.destroy(gl);
    }
}

/// translate * rotate_x * rotate_y * rotate_z * scale, angles in degrees.
fn compose_transform(
    position: cgmath::Vector3<f32>,
    rotation: cgmath::Vector3<f32>,
    scale: cgmath::Vector3<f32>,
) -> cgmath::Matrix4<f32> {
    cgmath::Matrix4::from_translation(position)
        * cgmath::Matrix4::from_angle_x(cgmath::Deg(rotation.x))
        * cgmath::Matrix4::from_angle_y(cgmath::Deg(rotation.y))
        * cgmath::Matrix4::from_angle_z(cgmath::Deg(rotation.z))
        * cgmath::Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}
