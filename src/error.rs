use std::path::PathBuf;

use thiserror::Error;

/// Failures while getting an asset from disk into memory.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("importer rejected the model file: {0}")]
    Import(#[from] gltf::Error),

    #[error("model references a binary chunk that is not present")]
    MissingBinaryChunk,

    #[error("model primitive has no vertex positions")]
    MissingPositions,

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Failures while turning loaded data into GPU state.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to compile {stage} shader: {info_log}")]
    ShaderCompile {
        stage: &'static str,
        info_log: String,
    },

    #[error("failed to link shader program: {0}")]
    ProgramLink(String),

    #[error("shader has no attribute named `{0}`")]
    MissingAttribute(&'static str),

    #[error("opengl object creation failed: {0}")]
    Gl(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
