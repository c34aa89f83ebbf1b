use std::rc::Rc;

use crate::{
    assets,
    camera::Camera,
    error::Error,
    mesh::Mesh,
    renderer::MeshRenderer,
    textures::Texture,
};

/// Composition root for one drawable thing: the mesh, the texture it is
/// shaded with, and the renderer that owns their GPU state.
pub struct Model {
    mesh: Rc<Mesh>,
    texture: Rc<Texture>,
    renderer: MeshRenderer,
}

impl Model {
    /// Builds a model from file names resolved against the fixed asset
    /// directories. A mesh that fails to import is logged and drawn as
    /// empty; a missing texture is a hard error since the shader samples
    /// it unconditionally.
    pub fn new(gl: &glow::Context, model_file: &str, texture_file: &str) -> Result<Self, Error> {
        let mut mesh = Mesh::new();
        let model_path = assets::model_path(model_file);
        if let Err(e) = mesh.load_from_file(&model_path) {
            log::error!("failed to load model {}: {e}", model_path.display());
        }
        let mesh = Rc::new(mesh);

        let texture = Rc::new(Texture::from_file(gl, &assets::texture_path(texture_file))?);

        let mut renderer = MeshRenderer::new(gl, Rc::clone(&mesh))?;
        renderer.set_material(Rc::clone(&texture));

        Ok(Self {
            mesh,
            texture,
            renderer,
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn renderer(&self) -> &MeshRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut MeshRenderer {
        &mut self.renderer
    }

    pub fn draw(&self, gl: &glow::Context, camera: &dyn Camera) {
        self.renderer.draw(gl, camera);
    }

    /// Releases every GPU object the model wired together.
    pub fn destroy(&self, gl: &glow::Context) {
        self.renderer.destroy(gl);
        self.texture.destroy(gl);
    }
}
