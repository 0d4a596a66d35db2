/// TextureTarget - render buffer usable only as a framebuffer attachment
///
/// Render buffers cannot be sampled. When created with
/// `has_storage_already`, the storage belongs to the platform (typically a
/// window surface) and the texture reports implicit storage: a framebuffer
/// whose color attachment 0 is such a texture uses the platform framebuffer
/// instead of allocating its own.

use std::sync::Arc;
use crate::context::gl::{self, GLenum, GLsizei, GLuint};
use crate::context::GlContext;
use crate::error::Result;
use crate::texture::{Size, Texture, TextureDesc, TextureFormat, TextureType, TextureUsage};
use crate::{glrt_bail, glrt_precondition, glrt_violation};

const SOURCE: &str = "glrt::TextureTarget";

/// Render buffer attachment
pub struct TextureTarget {
    context: Arc<dyn GlContext>,
    renderbuffer_id: GLuint,
    internal_format: GLenum,
    format: TextureFormat,
    size: Size,
    num_samples: u32,
    usage: TextureUsage,
    has_storage_already: bool,
}

impl TextureTarget {
    /// Create a render buffer
    ///
    /// # Errors
    ///
    /// - `Unsupported` if `desc.usage` does not contain `ATTACHMENT`
    /// - `Unimplemented` for anything but 2D
    /// - `ArgumentInvalid` if the format has no render buffer counterpart
    pub fn create(context: Arc<dyn GlContext>, desc: &TextureDesc, has_storage_already: bool) -> Result<Self> {
        if !desc.usage.contains(TextureUsage::ATTACHMENT) {
            glrt_bail!(SOURCE, Unsupported, "invalid usage!");
        }
        if desc.texture_type != TextureType::TwoD {
            glrt_bail!(SOURCE, Unimplemented,
                "Non-2D textures are currently unsupported on GL backend.");
        }
        let internal_format = match desc.format.gl_internal_format() {
            Some(format) => format,
            None => glrt_bail!(SOURCE, ArgumentInvalid, "Invalid texture format"),
        };

        let target = Self {
            renderbuffer_id: context.gen_renderbuffer(),
            context,
            internal_format,
            format: desc.format,
            size: Size::new(desc.width, desc.height),
            num_samples: desc.num_samples.max(1),
            usage: desc.usage,
            has_storage_already,
        };

        if !has_storage_already {
            let width = desc.width as GLsizei;
            let height = desc.height as GLsizei;
            target.context.bind_renderbuffer(gl::RENDERBUFFER, target.renderbuffer_id);
            if target.num_samples > 1 {
                target.context.renderbuffer_storage_multisample(
                    gl::RENDERBUFFER, target.num_samples as GLsizei, internal_format, width, height);
            } else {
                target.context.renderbuffer_storage(gl::RENDERBUFFER, internal_format, width, height);
            }
            target.context.bind_renderbuffer(gl::RENDERBUFFER, 0);
        }

        Ok(target)
    }

    /// Sized GL internal format of the render buffer
    pub fn internal_format(&self) -> GLenum {
        self.internal_format
    }

    fn attach(&self, attachment: GLenum) {
        if glrt_precondition!(self.renderbuffer_id != 0, SOURCE, "Render buffer has no GL name") {
            self.context.framebuffer_renderbuffer(
                gl::FRAMEBUFFER, attachment, gl::RENDERBUFFER, self.renderbuffer_id);
        }
    }
}

impl Texture for TextureTarget {
    fn texture_type(&self) -> TextureType {
        TextureType::TwoD
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
        1
    }

    fn num_mip_levels(&self) -> u32 {
        1
    }

    fn usage(&self) -> TextureUsage {
        self.usage
    }

    fn id(&self) -> u32 {
        self.renderbuffer_id
    }

    fn is_implicit_storage(&self) -> bool {
        self.has_storage_already
    }

    fn attach_as_color(&self, index: u32, _face: u32, _mip_level: u32) {
        self.attach(gl::COLOR_ATTACHMENT0 + index);
    }

    fn detach_as_color(&self, _index: u32, _face: u32, _mip_level: u32) {
        // Binding render buffer 0 is undefined on some drivers (iOS)
        glrt_violation!(SOURCE, "detach_as_color is not implemented for render buffers");
    }

    fn attach_as_depth(&self) {
        self.attach(gl::DEPTH_ATTACHMENT);
    }

    fn attach_as_stencil(&self) {
        self.attach(gl::STENCIL_ATTACHMENT);
    }

    fn bind(&self) {
        self.context.bind_renderbuffer(gl::RENDERBUFFER, self.renderbuffer_id);
    }
}

impl Drop for TextureTarget {
    fn drop(&mut self) {
        if self.renderbuffer_id != 0 {
            self.context.delete_renderbuffer(self.renderbuffer_id);
        }
    }
}

#[cfg(test)]
#[path = "texture_target_tests.rs"]
mod tests;
