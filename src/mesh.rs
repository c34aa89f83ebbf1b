use std::path::Path;

use crate::{data::Vertex, error::AssetError, loader};

/// In-memory geometry for one model: a flat triangle list produced by the
/// importer. Filled once by `load_from_file`, read-only afterwards.
#[derive(Debug, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Imports `path` and replaces the vertex list with the flattened
    /// result. On failure the previous vertex state is kept untouched.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), AssetError> {
        let vertices = loader::load_triangle_list(path)?;
        log::info!(
            "loaded {} vertices ({} faces) from {}",
            vertices.len(),
            vertices.len() / 3,
            path.display()
        );
        self.vertices = vertices;
        Ok(())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mesh_is_empty() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn load_failure_leaves_vertices_untouched() {
        let mut mesh = Mesh::new();
        let result = mesh.load_from_file(Path::new("no/such/model.gltf"));
        assert!(result.is_err());
        assert!(mesh.is_empty());
    }
}
