//! A small mesh-loading-and-rendering facade: import model geometry with
//! the `gltf` crate, upload it to an OpenGL vertex buffer through `glow`,
//! and draw it with a transform/view/projection shader pipeline.

pub mod assets;
pub mod camera;
pub mod data;
pub mod error;
pub mod loader;
pub mod mesh;
pub mod model;
pub mod opengl;
pub mod renderer;
pub mod textures;

pub use camera::{Camera, PerspectiveCamera};
pub use data::Vertex;
pub use error::{AssetError, Error, RenderError};
pub use mesh::Mesh;
pub use model::Model;
pub use renderer::MeshRenderer;
pub use textures::Texture;
