/// GlContext trait - the native GL entry points issued by the render-target layer
///
/// One method per driver call. Implementations wrap the current GL context of
/// the calling thread; all calls are synchronous and operate on the ambient
/// context state (bindings, masks, clear values).

use crate::context::gl::{GLbitfield, GLenum, GLint, GLsizei, GLuint};
use crate::context::DeviceFeatures;

/// Native GL context
///
/// A context is bound to one thread. The render-target layer never calls it
/// from more than one thread and does no internal locking.
pub trait GlContext {
    /// Capabilities of the driver behind this context
    fn features(&self) -> DeviceFeatures;

    // ===== STATE QUERIES =====

    /// glGetIntegerv
    fn get_integerv(&self, pname: GLenum, data: &mut [GLint]);

    /// glCheckFramebufferStatus
    fn check_framebuffer_status(&self, target: GLenum) -> GLenum;

    // ===== FRAMEBUFFER OBJECTS =====

    /// glGenFramebuffers (single name)
    fn gen_framebuffer(&self) -> GLuint;

    /// glDeleteFramebuffers (single name)
    fn delete_framebuffer(&self, framebuffer: GLuint);

    /// glBindFramebuffer
    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint);

    /// glFramebufferTexture2D
    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    );

    /// glFramebufferTextureLayer
    fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    );

    /// glFramebufferRenderbuffer
    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    );

    /// glFramebufferTextureMultiviewOVR
    fn framebuffer_texture_multiview(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        base_view_index: GLint,
        num_views: GLsizei,
    );

    /// glFramebufferTextureMultisampleMultiviewOVR
    #[allow(clippy::too_many_arguments)]
    fn framebuffer_texture_multisample_multiview(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        samples: GLsizei,
        base_view_index: GLint,
        num_views: GLsizei,
    );

    /// glDrawBuffers
    fn draw_buffers(&self, buffers: &[GLenum]);

    /// glInvalidateFramebuffer
    fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]);

    // ===== RENDER BUFFERS =====

    /// glGenRenderbuffers (single name)
    fn gen_renderbuffer(&self) -> GLuint;

    /// glDeleteRenderbuffers (single name)
    fn delete_renderbuffer(&self, renderbuffer: GLuint);

    /// glBindRenderbuffer
    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint);

    /// glRenderbufferStorage
    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );

    /// glRenderbufferStorageMultisample
    fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );

    // ===== TEXTURES =====

    /// glGenTextures (single name)
    fn gen_texture(&self) -> GLuint;

    /// glDeleteTextures (single name)
    fn delete_texture(&self, texture: GLuint);

    /// glBindTexture
    fn bind_texture(&self, target: GLenum, texture: GLuint);

    /// glTexStorage2D
    fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );

    /// glTexStorage2DMultisample
    fn tex_storage_2d_multisample(
        &self,
        target: GLenum,
        samples: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
    );

    /// glTexStorage3D
    fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internal_format: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    );

    /// glCopyTexSubImage2D
    #[allow(clippy::too_many_arguments)]
    fn copy_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );

    // ===== FIXED-FUNCTION STATE =====

    /// glEnable
    fn enable(&self, cap: GLenum);

    /// glDisable
    fn disable(&self, cap: GLenum);

    /// glColorMask
    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool);

    /// glDepthMask
    fn depth_mask(&self, flag: bool);

    /// glStencilMask
    fn stencil_mask(&self, mask: GLuint);

    /// glClearColor
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);

    /// glClearDepthf
    fn clear_depth(&self, depth: f32);

    /// glClearStencil
    fn clear_stencil(&self, stencil: GLint);

    /// glClear
    fn clear(&self, mask: GLbitfield);

    // ===== PIXEL TRANSFER =====

    /// glPixelStorei
    fn pixel_store_i(&self, pname: GLenum, param: GLint);

    /// glFlush
    fn flush(&self);

    /// glReadPixels into `pixels`
    #[allow(clippy::too_many_arguments)]
    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &mut [u8],
    );
}
