/// Color attachment readback shared by both framebuffer variants
///
/// Only color attachment 0 can be read: glReadPixels and glCopyTexSubImage2D
/// read from the framebuffer's first color buffer.

use std::sync::Arc;
use crate::context::gl::{self, GLint, GLsizei, GLuint};
use crate::context::{DeviceFeatures, GlContext};
use crate::framebuffer::pass_ops::bind_buffer_for_read;
use crate::framebuffer::status::check_framebuffer_status;
use crate::framebuffer::FramebufferBindingGuard;
use crate::texture::{Texture, TextureFormat, TextureRangeDesc};
use crate::{glrt_error, glrt_precondition, glrt_violation};

const SOURCE: &str = "glrt::Framebuffer";

/// Copy a region of color attachment 0 into `pixels`
///
/// Layered attachments are read through a scratch framebuffer holding only
/// `range.layer`. `bytes_per_row == 0` means tightly packed.
pub(crate) fn copy_bytes_color_attachment(
    context: &dyn GlContext,
    framebuffer_id: GLuint,
    color_attachment: Option<&Arc<dyn Texture>>,
    index: usize,
    pixels: &mut [u8],
    range: &TextureRangeDesc,
    bytes_per_row: usize,
) {
    if !glrt_precondition!(index == 0, SOURCE, "Invalid index: {}", index) {
        return;
    }
    let Some(texture) = color_attachment else {
        glrt_violation!(SOURCE, "No color attachment at index 0");
        return;
    };

    let bytes_per_row = if bytes_per_row == 0 {
        texture.bytes_per_row(range)
    } else {
        bytes_per_row
    };
    let required = bytes_per_row * range.height as usize;
    if !glrt_precondition!(pixels.len() >= required, SOURCE,
        "Pixel buffer too small: {} bytes, {} required", pixels.len(), required)
    {
        return;
    }

    let _guard = FramebufferBindingGuard::new(context);

    let layered = texture.num_layers() > 1;
    let mut scratch_framebuffer: GLuint = 0;
    if layered {
        scratch_framebuffer = context.gen_framebuffer();
        context.bind_framebuffer(gl::READ_FRAMEBUFFER, scratch_framebuffer);
        attach_as_color_layer(context, Some(texture.as_ref()), range.layer);
        if let Err(err) = check_framebuffer_status(context) {
            glrt_error!(SOURCE, "Scratch read framebuffer incomplete: {}", err);
        }
    } else {
        bind_buffer_for_read(context, framebuffer_id);
    }

    context.pixel_store_i(gl::PACK_ALIGNMENT, texture.pack_alignment(bytes_per_row));
    context.flush();

    // GL_RGBA + GL_UNSIGNED_BYTE is the only combination glReadPixels always supports
    let (format, ty) = if texture.format() == TextureFormat::R32G32B32A32_UINT
        && context.features().has_feature(DeviceFeatures::TEXTURE_INTEGER)
    {
        (gl::RGBA_INTEGER, gl::UNSIGNED_INT)
    } else {
        (gl::RGBA, gl::UNSIGNED_BYTE)
    };
    context.read_pixels(
        range.x as GLint,
        range.y as GLint,
        range.width as GLsizei,
        range.height as GLsizei,
        format,
        ty,
        pixels,
    );

    if layered {
        attach_as_color_layer(context, None, 0);
        if let Err(err) = check_framebuffer_status(context) {
            glrt_error!(SOURCE, "Scratch read framebuffer incomplete after detach: {}", err);
        }
        context.delete_framebuffer(scratch_framebuffer);
    }
}

/// Copy a region of color attachment 0 into `dest_texture` (level 0, origin 0,0)
pub(crate) fn copy_texture_color_attachment(
    context: &dyn GlContext,
    framebuffer_id: GLuint,
    color_attachment: Option<&Arc<dyn Texture>>,
    index: usize,
    dest_texture: &dyn Texture,
    range: &TextureRangeDesc,
) {
    if !glrt_precondition!(index == 0 && color_attachment.is_some(), SOURCE,
        "Invalid index: {}", index)
    {
        return;
    }

    let _guard = FramebufferBindingGuard::new(context);

    bind_buffer_for_read(context, framebuffer_id);
    dest_texture.bind();

    context.copy_tex_sub_image_2d(
        gl::TEXTURE_2D,
        0,
        0,
        0,
        range.x as GLint,
        range.y as GLint,
        range.width as GLsizei,
        range.height as GLsizei,
    );
}

/// Attach one layer of `texture` (or nothing) to color 0 of the read framebuffer
fn attach_as_color_layer(context: &dyn GlContext, texture: Option<&dyn Texture>, layer: u32) {
    match texture {
        Some(texture) => context.framebuffer_texture_layer(
            gl::READ_FRAMEBUFFER, gl::COLOR_ATTACHMENT0, texture.id(), 0, layer as GLint),
        None => context.framebuffer_texture_layer(
            gl::READ_FRAMEBUFFER, gl::COLOR_ATTACHMENT0, 0, 0, 0),
    }
}
