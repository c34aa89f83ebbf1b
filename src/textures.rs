use std::path::Path;

use glow::HasContext;

use crate::error::{AssetError, Error, RenderError};

/// A decoded image uploaded as a 2D GL texture with mipmaps.
#[derive(Debug)]
pub struct Texture {
    raw: glow::NativeTexture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes `path` with the `image` crate, flips it vertically so the
    /// origin matches GL's, and uploads it as RGBA8.
    pub fn from_file(gl: &glow::Context, path: &Path) -> Result<Self, Error> {
        let img = image::open(path)
            .map_err(AssetError::Image)?
            .flipv()
            .to_rgba8();
        let (width, height) = img.dimensions();
        let data = img.into_raw();

        log::debug!("decoded texture {} ({width}x{height})", path.display());

        unsafe {
            let raw = gl.create_texture().map_err(RenderError::Gl)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(raw));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(&data)),
            );

            gl.generate_mipmap(glow::TEXTURE_2D);

            Ok(Texture { raw, width, height })
        }
    }

    pub fn raw(&self) -> glow::NativeTexture {
        self.raw
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Releases the GL texture. Must not be sampled afterwards.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_texture(self.raw);
        }
    }
}
