use std::path::Path;

use gltf::{buffer::Source, Gltf};

use crate::{data::Vertex, error::AssetError};

/// Imports a model file and flattens every triangle primitive into one
/// non-indexed triangle list. Only texture-coordinate set 0 is kept.
pub fn load_triangle_list(path: &Path) -> Result<Vec<Vertex>, AssetError> {
    let gltf = Gltf::open(path)?;

    let blob = gltf.blob.as_ref().cloned();
    let mut raw_buffers = Vec::new();

    // Pull in every buffer the file references before touching primitives.
    for buffer in gltf.buffers() {
        let data = match buffer.source() {
            Source::Uri(uri) => {
                let buf_path = path.parent().unwrap_or_else(|| Path::new(".")).join(uri);
                std::fs::read(&buf_path).map_err(|source| AssetError::Io {
                    path: buf_path,
                    source,
                })?
            }
            Source::Bin => blob.clone().ok_or(AssetError::MissingBinaryChunk)?,
        };
        raw_buffers.push(data);
    }

    let mut vertices = Vec::new();

    for mesh in gltf.meshes() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "skipping non-triangle primitive (mode {:?}) in {}",
                    primitive.mode(),
                    path.display()
                );
                continue;
            }

            let reader = primitive.reader(|buffer| {
                raw_buffers.get(buffer.index()).map(|v| v.as_slice())
            });

            let positions: Vec<[f32; 3]> = reader
                .read_positions()
                .ok_or(AssetError::MissingPositions)?
                .collect();

            let uvs: Option<Vec<[f32; 2]>> = reader
                .read_tex_coords(0)
                .map(|set| set.into_f32().collect());

            let indices: Option<Vec<u32>> =
                reader.read_indices().map(|idx| idx.into_u32().collect());

            flatten_triangles(&positions, uvs.as_deref(), indices.as_deref(), &mut vertices);
        }
    }

    Ok(vertices)
}

/// Expands a primitive into `out`, three vertices per face. A primitive
/// without an index list is already a triangle list; any trailing partial
/// face is dropped so the output stays a multiple of three.
fn flatten_triangles(
    positions: &[[f32; 3]],
    uvs: Option<&[[f32; 2]]>,
    indices: Option<&[u32]>,
    out: &mut Vec<Vertex>,
) {
    let uv_at = |i: usize| uvs.and_then(|set| set.get(i).copied()).unwrap_or([0.0, 0.0]);

    match indices {
        Some(indices) => {
            for face in indices.chunks_exact(3) {
                for &index in face {
                    let index = index as usize;
                    out.push(Vertex::new(positions[index], uv_at(index)));
                }
            }
        }
        None => {
            let whole_faces = positions.len() - positions.len() % 3;
            for index in 0..whole_faces {
                out.push(Vertex::new(positions[index], uv_at(index)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [[f32; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ];

    const UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    #[test]
    fn indexed_quad_flattens_to_two_faces() {
        let mut out = Vec::new();
        flatten_triangles(&POSITIONS, Some(&UVS), Some(&[0, 1, 2, 2, 3, 0]), &mut out);

        assert_eq!(out.len(), 6);
        assert_eq!(out.len() % 3, 0);
        assert_eq!(out[0].position, POSITIONS[0]);
        assert_eq!(out[3].position, POSITIONS[2]);
        assert_eq!(out[5].uv, UVS[0]);
    }

    #[test]
    fn partial_face_is_dropped() {
        let mut out = Vec::new();
        flatten_triangles(&POSITIONS, Some(&UVS), Some(&[0, 1, 2, 3]), &mut out);
        assert_eq!(out.len(), 3);

        out.clear();
        flatten_triangles(&POSITIONS, Some(&UVS), None, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn missing_uv_set_yields_zero_uvs() {
        let mut out = Vec::new();
        flatten_triangles(&POSITIONS[..3], None, None, &mut out);

        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|v| v.uv == [0.0, 0.0]));
    }
}
