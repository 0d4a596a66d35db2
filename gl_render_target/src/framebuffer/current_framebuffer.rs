/// CurrentFramebuffer - the framebuffer bound when this object was created
///
/// Wraps a framebuffer owned by someone else (typically the window system's
/// default framebuffer). Its only color attachment is a size-only
/// `DummyTexture` matching the viewport at creation. Never deleted here.

use std::sync::Arc;
use crate::context::gl::{self, GLint, GLuint};
use crate::context::GlContext;
use crate::framebuffer::pass_ops::{apply_clears, bind_buffer, update_srgb, PresentAttachments};
use crate::framebuffer::{readback, RenderPassDesc, Viewport};
use crate::texture::{DummyTexture, Size, Texture, TextureRangeDesc};
use crate::{glrt_bail, glrt_debug, glrt_precondition, glrt_violation};
use crate::error::Result;

const SOURCE: &str = "glrt::CurrentFramebuffer";

/// Externally owned framebuffer
pub struct CurrentFramebuffer {
    context: Arc<dyn GlContext>,
    framebuffer_id: GLuint,
    viewport: Viewport,
    color_attachment: Arc<dyn Texture>,
}

impl CurrentFramebuffer {
    /// Snapshot the current framebuffer binding and viewport
    pub fn new(context: Arc<dyn GlContext>) -> Self {
        let mut framebuffer: [GLint; 1] = [0];
        context.get_integerv(gl::FRAMEBUFFER_BINDING, &mut framebuffer);

        let mut viewport: [GLint; 4] = [0; 4];
        context.get_integerv(gl::VIEWPORT, &mut viewport);

        let color_attachment: Arc<dyn Texture> = Arc::new(DummyTexture::new(Size::new(
            viewport[2].max(0) as u32,
            viewport[3].max(0) as u32,
        )));

        glrt_debug!(SOURCE, "Wrapping framebuffer {} ({}x{})",
            framebuffer[0], viewport[2], viewport[3]);

        Self {
            context,
            framebuffer_id: framebuffer[0] as GLuint,
            viewport: Viewport::new(
                viewport[0] as f32,
                viewport[1] as f32,
                viewport[2] as f32,
                viewport[3] as f32,
            ),
            color_attachment,
        }
    }

    pub fn framebuffer_id(&self) -> GLuint {
        self.framebuffer_id
    }

    /// Always `[0]`
    pub fn color_attachment_indices(&self) -> Vec<usize> {
        vec![0]
    }

    pub fn color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>> {
        if !glrt_precondition!(index == 0, SOURCE, "Invalid index: {}", index) {
            return None;
        }
        Some(Arc::clone(&self.color_attachment))
    }

    /// The platform resolves implicitly: same placeholder as the color attachment
    pub fn resolve_color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>> {
        self.color_attachment(index)
    }

    pub fn depth_attachment(&self) -> Option<Arc<dyn Texture>> {
        None
    }

    pub fn resolve_depth_attachment(&self) -> Option<Arc<dyn Texture>> {
        None
    }

    pub fn stencil_attachment(&self) -> Option<Arc<dyn Texture>> {
        None
    }

    /// Not supported: the attachments belong to the platform
    pub fn update_drawable(&mut self, _surface: Option<Arc<dyn Texture>>) -> Option<Arc<dyn Texture>> {
        glrt_violation!(SOURCE, "update_drawable is not supported on the current framebuffer");
        None
    }

    /// Viewport captured at creation
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Bind for drawing and apply `render_pass` load actions
    ///
    /// Color 0, depth and stencil always exist on a platform framebuffer.
    pub fn bind(&self, render_pass: &RenderPassDesc) {
        bind_buffer(self.context.as_ref(), self.framebuffer_id);
        update_srgb(self.context.as_ref(), Some(self.color_attachment.as_ref()));
        apply_clears(
            self.context.as_ref(),
            render_pass,
            PresentAttachments {
                color: true,
                depth: true,
                stencil: true,
            },
        );
    }

    pub fn unbind(&self) {}

    pub fn copy_bytes_color_attachment(
        &self,
        index: usize,
        pixels: &mut [u8],
        range: &TextureRangeDesc,
        bytes_per_row: usize,
    ) {
        readback::copy_bytes_color_attachment(
            self.context.as_ref(),
            self.framebuffer_id,
            Some(&self.color_attachment),
            index,
            pixels,
            range,
            bytes_per_row,
        );
    }

    /// # Errors
    ///
    /// Always `Unimplemented`.
    pub fn copy_bytes_depth_attachment(
        &self,
        _pixels: &mut [u8],
        _range: &TextureRangeDesc,
        _bytes_per_row: usize,
    ) -> Result<()> {
        glrt_bail!(SOURCE, Unimplemented, "copy_bytes_depth_attachment");
    }

    /// # Errors
    ///
    /// Always `Unimplemented`.
    pub fn copy_bytes_stencil_attachment(
        &self,
        _pixels: &mut [u8],
        _range: &TextureRangeDesc,
        _bytes_per_row: usize,
    ) -> Result<()> {
        glrt_bail!(SOURCE, Unimplemented, "copy_bytes_stencil_attachment");
    }

    pub fn copy_texture_color_attachment(
        &self,
        index: usize,
        dest_texture: &dyn Texture,
        range: &TextureRangeDesc,
    ) {
        readback::copy_texture_color_attachment(
            self.context.as_ref(),
            self.framebuffer_id,
            Some(&self.color_attachment),
            index,
            dest_texture,
            range,
        );
    }
}

#[cfg(test)]
#[path = "current_framebuffer_tests.rs"]
mod tests;
