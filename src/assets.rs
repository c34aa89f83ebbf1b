use std::path::{Path, PathBuf};

/// Fixed directories the engine resolves bare file names against.
pub const MODEL_DIR: &str = "assets/models";
pub const TEXTURE_DIR: &str = "assets/textures";
pub const SHADER_DIR: &str = "shaders";

pub fn model_path(file: &str) -> PathBuf {
    Path::new(MODEL_DIR).join(file)
}

pub fn texture_path(file: &str) -> PathBuf {
    Path::new(TEXTURE_DIR).join(file)
}

pub fn shader_path(file: &str) -> PathBuf {
    Path::new(SHADER_DIR).join(file)
}
