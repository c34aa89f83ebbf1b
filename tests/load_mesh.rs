use std::fs;
use std::path::{Path, PathBuf};

use ember_engine::Mesh;

const POSITIONS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
];

const UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

const INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Writes a minimal glTF quad (two faces, external buffer) into a scratch
/// directory and returns the path of the .gltf file.
fn write_quad_fixture(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ember_engine_{test_name}"));
    fs::create_dir_all(&dir).expect("failed to create fixture dir");

    // Buffer layout: positions (48 bytes), uvs (32 bytes), indices (12 bytes).
    let mut bin = Vec::new();
    for position in &POSITIONS {
        for component in position {
            bin.extend_from_slice(&component.to_le_bytes());
        }
    }
    for uv in &UVS {
        for component in uv {
            bin.extend_from_slice(&component.to_le_bytes());
        }
    }
    for index in &INDICES {
        bin.extend_from_slice(&index.to_le_bytes());
    }
    assert_eq!(bin.len(), 92);
    fs::write(dir.join("quad.bin"), &bin).expect("failed to write fixture buffer");

    let gltf = r#"{
  "asset": { "version": "2.0" },
  "buffers": [{ "uri": "quad.bin", "byteLength": 92 }],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 48, "target": 34962 },
    { "buffer": 0, "byteOffset": 48, "byteLength": 32, "target": 34962 },
    { "buffer": 0, "byteOffset": 80, "byteLength": 12, "target": 34963 }
  ],
  "accessors": [
    {
      "bufferView": 0,
      "componentType": 5126,
      "count": 4,
      "type": "VEC3",
      "min": [0.0, 0.0, 0.0],
      "max": [1.0, 1.0, 0.0]
    },
    { "bufferView": 1, "componentType": 5126, "count": 4, "type": "VEC2" },
    { "bufferView": 2, "componentType": 5123, "count": 6, "type": "SCALAR" }
  ],
  "meshes": [
    {
      "primitives": [
        { "attributes": { "POSITION": 0, "TEXCOORD_0": 1 }, "indices": 2 }
      ]
    }
  ],
  "nodes": [{ "mesh": 0 }],
  "scenes": [{ "nodes": [0] }],
  "scene": 0
}"#;
    let gltf_path = dir.join("quad.gltf");
    fs::write(&gltf_path, gltf).expect("failed to write fixture gltf");

    gltf_path
}

#[test]
fn valid_asset_loads_whole_faces() {
    let path = write_quad_fixture("valid_asset_loads_whole_faces");

    let mut mesh = Mesh::new();
    mesh.load_from_file(&path).expect("quad should import");

    assert_eq!(mesh.vertex_count() % 3, 0);
    assert_eq!(mesh.vertex_count(), 6);

    // The index list [0, 1, 2, 2, 3, 0] flattened in face order.
    let vertices = mesh.vertices();
    assert_eq!(vertices[0].position, POSITIONS[0]);
    assert_eq!(vertices[1].position, POSITIONS[1]);
    assert_eq!(vertices[2].position, POSITIONS[2]);
    assert_eq!(vertices[3].position, POSITIONS[2]);
    assert_eq!(vertices[4].position, POSITIONS[3]);
    assert_eq!(vertices[5].position, POSITIONS[0]);

    assert_eq!(vertices[1].uv, UVS[1]);
    assert_eq!(vertices[4].uv, UVS[3]);
}

#[test]
fn missing_file_fails_and_mesh_stays_empty() {
    let mut mesh = Mesh::new();
    let result = mesh.load_from_file(Path::new("assets/models/does_not_exist.gltf"));

    assert!(result.is_err());
    assert!(mesh.is_empty());
}

#[test]
fn failed_reload_keeps_previous_vertices() {
    let path = write_quad_fixture("failed_reload_keeps_previous_vertices");

    let mut mesh = Mesh::new();
    mesh.load_from_file(&path).expect("quad should import");
    assert_eq!(mesh.vertex_count(), 6);

    let result = mesh.load_from_file(Path::new("does_not_exist.gltf"));
    assert!(result.is_err());
    assert_eq!(mesh.vertex_count(), 6);
}
