/// TextureBuffer - GL texture object usable as a framebuffer attachment
///
/// Supports 2D (optionally multisampled), 2D array, cube and 3D textures.
/// Cube textures attach one face at a time; array and 3D textures attach
/// one layer at a time.

use std::sync::Arc;
use crate::context::gl::{self, GLenum, GLint, GLsizei, GLuint};
use crate::context::GlContext;
use crate::error::Result;
use crate::glrt_bail;
use crate::texture::{Size, Texture, TextureDesc, TextureFormat, TextureType, TextureUsage};

const SOURCE: &str = "glrt::TextureBuffer";

/// GL texture object
pub struct TextureBuffer {
    context: Arc<dyn GlContext>,
    id: GLuint,
    texture_type: TextureType,
    format: TextureFormat,
    size: Size,
    depth: u32,
    num_layers: u32,
    num_samples: u32,
    num_mip_levels: u32,
    usage: TextureUsage,
}

impl TextureBuffer {
    /// Create the texture object and allocate immutable storage
    ///
    /// # Errors
    ///
    /// - `Unsupported` if `desc.usage` is empty
    /// - `ArgumentInvalid` for a zero-sized texture or a format with no GL counterpart
    /// - `Unimplemented` for multisampled non-2D textures
    pub fn create(context: Arc<dyn GlContext>, desc: &TextureDesc) -> Result<Self> {
        if desc.usage.is_empty() {
            glrt_bail!(SOURCE, Unsupported, "invalid usage!");
        }
        if desc.width == 0 || desc.height == 0 {
            glrt_bail!(SOURCE, ArgumentInvalid,
                "Invalid texture size {}x{}", desc.width, desc.height);
        }
        let internal_format = match desc.format.gl_internal_format() {
            Some(format) => format,
            None => glrt_bail!(SOURCE, ArgumentInvalid,
                "Invalid texture format {:?}", desc.format),
        };
        if desc.num_samples > 1 && desc.texture_type != TextureType::TwoD {
            glrt_bail!(SOURCE, Unimplemented,
                "Multisampled {:?} textures are not supported", desc.texture_type);
        }

        let texture = Self {
            id: context.gen_texture(),
            context,
            texture_type: desc.texture_type,
            format: desc.format,
            size: Size::new(desc.width, desc.height),
            depth: desc.depth.max(1),
            num_layers: desc.num_layers.max(1),
            num_samples: desc.num_samples.max(1),
            num_mip_levels: desc.num_mip_levels.max(1),
            usage: desc.usage,
        };

        let target = texture.gl_target();
        let width = desc.width as GLsizei;
        let height = desc.height as GLsizei;
        let levels = texture.num_mip_levels as GLsizei;

        texture.context.bind_texture(target, texture.id);
        match texture.texture_type {
            TextureType::TwoD if texture.num_samples > 1 => texture.context.tex_storage_2d_multisample(
                target, texture.num_samples as GLsizei, internal_format, width, height),
            TextureType::TwoD | TextureType::Cube => texture.context.tex_storage_2d(
                target, levels, internal_format, width, height),
            TextureType::TwoDArray => texture.context.tex_storage_3d(
                target, levels, internal_format, width, height, texture.num_layers as GLsizei),
            TextureType::ThreeD => texture.context.tex_storage_3d(
                target, levels, internal_format, width, height, texture.depth as GLsizei),
        }
        texture.context.bind_texture(target, 0);

        Ok(texture)
    }

    /// GL binding target of this texture
    pub fn gl_target(&self) -> GLenum {
        match self.texture_type {
            TextureType::TwoD if self.num_samples > 1 => gl::TEXTURE_2D_MULTISAMPLE,
            TextureType::TwoD => gl::TEXTURE_2D,
            TextureType::TwoDArray => gl::TEXTURE_2D_ARRAY,
            TextureType::Cube => gl::TEXTURE_CUBE_MAP,
            TextureType::ThreeD => gl::TEXTURE_3D,
        }
    }

    fn attach(&self, attachment: GLenum, texture: GLuint, face: u32, mip_level: u32) {
        let level = mip_level as GLint;
        match self.texture_type {
            TextureType::TwoD => self.context.framebuffer_texture_2d(
                gl::FRAMEBUFFER, attachment, self.gl_target(), texture, level),
            TextureType::Cube => self.context.framebuffer_texture_2d(
                gl::FRAMEBUFFER, attachment, gl::TEXTURE_CUBE_MAP_POSITIVE_X + face, texture, level),
            TextureType::TwoDArray | TextureType::ThreeD => self.context.framebuffer_texture_layer(
                gl::FRAMEBUFFER, attachment, texture, level, face as GLint),
        }
    }
}

impl Texture for TextureBuffer {
    fn texture_type(&self) -> TextureType {
        self.texture_type
    }

    fn format(&self) -> TextureFormat {
        self.format
    }

    fn size(&self) -> Size {
        self.size
    }

    fn samples(&self) -> u32 {
        self.num_samples
    }

    fn num_layers(&self) -> u32 {
        self.num_layers
    }

    fn num_mip_levels(&self) -> u32 {
        self.num_mip_levels
    }

    fn usage(&self) -> TextureUsage {
        self.usage
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn attach_as_color(&self, index: u32, face: u32, mip_level: u32) {
        self.attach(gl::COLOR_ATTACHMENT0 + index, self.id, face, mip_level);
    }

    fn detach_as_color(&self, index: u32, face: u32, mip_level: u32) {
        self.attach(gl::COLOR_ATTACHMENT0 + index, 0, face, mip_level);
    }

    fn attach_as_depth(&self) {
        self.attach(gl::DEPTH_ATTACHMENT, self.id, 0, 0);
    }

    fn attach_as_stencil(&self) {
        self.attach(gl::STENCIL_ATTACHMENT, self.id, 0, 0);
    }

    fn bind(&self) {
        self.context.bind_texture(self.gl_target(), self.id);
    }
}

impl Drop for TextureBuffer {
    fn drop(&mut self) {
        if self.id != 0 {
            self.context.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
#[path = "texture_buffer_tests.rs"]
mod tests;
