/// Per-pass driver operations shared by both framebuffer variants

use crate::context::gl::{self, GLbitfield, GLenum, GLint, GLuint};
use crate::context::{DeviceFeatures, GlContext};
use crate::framebuffer::{LoadAction, RenderPassDesc, StoreAction};
use crate::texture::Texture;

/// Which attachments of a framebuffer actually exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PresentAttachments {
    /// Color attachment 0
    pub color: bool,
    pub depth: bool,
    pub stencil: bool,
}

/// Bind `framebuffer_id` to GL_FRAMEBUFFER (read and draw)
pub(crate) fn bind_buffer(context: &dyn GlContext, framebuffer_id: GLuint) {
    context.bind_framebuffer(gl::FRAMEBUFFER, framebuffer_id);
}

/// Bind `framebuffer_id` as the read framebuffer when the driver has one
pub(crate) fn bind_buffer_for_read(context: &dyn GlContext, framebuffer_id: GLuint) {
    if context.features().has_feature(DeviceFeatures::READ_WRITE_FRAMEBUFFER) {
        context.bind_framebuffer(gl::READ_FRAMEBUFFER, framebuffer_id);
    } else {
        bind_buffer(context, framebuffer_id);
    }
}

/// Enable GL_FRAMEBUFFER_SRGB for sRGB color targets, disable it otherwise
///
/// No-op without the SRGB capability (GLES only needs an sRGB framebuffer).
pub(crate) fn update_srgb(context: &dyn GlContext, texture: Option<&dyn Texture>) {
    if !context.features().has_feature(DeviceFeatures::SRGB) {
        return;
    }
    if texture.is_some_and(|t| t.format().is_srgb()) {
        context.enable(gl::FRAMEBUFFER_SRGB);
    } else {
        context.disable(gl::FRAMEBUFFER_SRGB);
    }
}

/// Issue the clears requested by `render_pass` for the present attachments
///
/// Only color attachment 0 is ever cleared. Clear values and write masks are
/// set right before a single combined glClear. Returns the clear mask.
pub(crate) fn apply_clears(
    context: &dyn GlContext,
    render_pass: &RenderPassDesc,
    present: PresentAttachments,
) -> GLbitfield {
    let mut clear_mask: GLbitfield = 0;

    if present.color {
        if let Some(color) = render_pass.color_attachments.first() {
            if color.load_action == LoadAction::Clear {
                clear_mask |= gl::COLOR_BUFFER_BIT;
                let c = color.clear_color;
                context.color_mask(true, true, true, true);
                context.clear_color(c.x, c.y, c.z, c.w);
            }
        }
    }
    if present.depth && render_pass.depth_attachment.load_action == LoadAction::Clear {
        clear_mask |= gl::DEPTH_BUFFER_BIT;
        context.depth_mask(true);
        context.clear_depth(render_pass.depth_attachment.clear_depth);
    }
    if present.stencil && render_pass.stencil_attachment.load_action == LoadAction::Clear {
        clear_mask |= gl::STENCIL_BUFFER_BIT;
        context.stencil_mask(0xFF);
        context.clear_stencil(render_pass.stencil_attachment.clear_stencil as GLint);
    }

    if clear_mask != 0 {
        context.clear(clear_mask);
    }
    clear_mask
}

/// Attachments whose contents `render_pass` does not need stored
pub(crate) fn discardable_attachments(
    render_pass: &RenderPassDesc,
    present: PresentAttachments,
) -> Vec<GLenum> {
    let mut attachments = Vec::with_capacity(3);

    if present.color
        && render_pass
            .color_attachments
            .first()
            .is_some_and(|color| color.store_action != StoreAction::Store)
    {
        attachments.push(gl::COLOR_ATTACHMENT0);
    }
    if present.depth && render_pass.depth_attachment.store_action != StoreAction::Store {
        attachments.push(gl::DEPTH_ATTACHMENT);
    }
    if present.stencil && render_pass.stencil_attachment.store_action != StoreAction::Store {
        attachments.push(gl::STENCIL_ATTACHMENT);
    }
    attachments
}

/// Hint the driver that `attachments` may be discarded
///
/// Skipped without the INVALIDATE_FRAMEBUFFER capability; the driver then
/// simply keeps the contents.
pub(crate) fn invalidate(context: &dyn GlContext, attachments: &[GLenum]) {
    if attachments.is_empty() {
        return;
    }
    if context.features().has_feature(DeviceFeatures::INVALIDATE_FRAMEBUFFER) {
        context.invalidate_framebuffer(gl::FRAMEBUFFER, attachments);
    }
}
