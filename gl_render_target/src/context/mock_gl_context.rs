/// Mock GL context for unit tests (no GPU required)
///
/// Records every native call as a `GlCall` and simulates the small amount of
/// driver state the render-target layer reads back: framebuffer and render
/// buffer bindings, the viewport, the framebuffer status and pixel contents.

use std::sync::Mutex;
use crate::context::gl::{self, GLbitfield, GLenum, GLint, GLsizei, GLuint};
use crate::context::{DeviceFeatures, GlContext};

// ============================================================================
// Recorded calls
// ============================================================================

/// One recorded native call
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    GetIntegerv(GLenum),
    CheckFramebufferStatus(GLenum),
    GenFramebuffer(GLuint),
    DeleteFramebuffer(GLuint),
    BindFramebuffer { target: GLenum, framebuffer: GLuint },
    FramebufferTexture2D { target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint },
    FramebufferTextureLayer { target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint },
    FramebufferRenderbuffer { target: GLenum, attachment: GLenum, renderbuffer: GLuint },
    FramebufferTextureMultiview { target: GLenum, attachment: GLenum, texture: GLuint, num_views: GLsizei },
    FramebufferTextureMultisampleMultiview { target: GLenum, attachment: GLenum, texture: GLuint, samples: GLsizei, num_views: GLsizei },
    DrawBuffers(Vec<GLenum>),
    InvalidateFramebuffer { target: GLenum, attachments: Vec<GLenum> },
    GenRenderbuffer(GLuint),
    DeleteRenderbuffer(GLuint),
    BindRenderbuffer { target: GLenum, renderbuffer: GLuint },
    RenderbufferStorage { internal_format: GLenum, width: GLsizei, height: GLsizei },
    RenderbufferStorageMultisample { samples: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei },
    GenTexture(GLuint),
    DeleteTexture(GLuint),
    BindTexture { target: GLenum, texture: GLuint },
    TexStorage2D { target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei },
    TexStorage2DMultisample { target: GLenum, samples: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei },
    TexStorage3D { target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei },
    CopyTexSubImage2D { target: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei },
    Enable(GLenum),
    Disable(GLenum),
    ColorMask(bool, bool, bool, bool),
    DepthMask(bool),
    StencilMask(GLuint),
    ClearColor([f32; 4]),
    ClearDepth(f32),
    ClearStencil(GLint),
    Clear(GLbitfield),
    PixelStorei { pname: GLenum, param: GLint },
    Flush,
    ReadPixels { x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum },
}

// ============================================================================
// Mock context
// ============================================================================

#[derive(Debug)]
struct MockState {
    calls: Vec<GlCall>,
    next_name: GLuint,
    read_framebuffer: GLuint,
    draw_framebuffer: GLuint,
    renderbuffer: GLuint,
    viewport: [GLint; 4],
    status: GLenum,
    pixel: [u8; 4],
}

/// Mock GL context
#[derive(Debug)]
pub struct MockGlContext {
    features: DeviceFeatures,
    state: Mutex<MockState>,
}

impl MockGlContext {
    pub fn new(features: DeviceFeatures) -> Self {
        Self {
            features,
            state: Mutex::new(MockState {
                calls: Vec::new(),
                next_name: 1,
                read_framebuffer: 0,
                draw_framebuffer: 0,
                renderbuffer: 0,
                viewport: [0, 0, 800, 600],
                status: gl::FRAMEBUFFER_COMPLETE,
                pixel: [0, 0, 0, 0],
            }),
        }
    }

    /// Context reporting every optional capability
    pub fn with_all_features() -> Self {
        Self::new(DeviceFeatures::all())
    }

    // ===== Setup =====

    pub fn set_status(&self, status: GLenum) {
        self.state.lock().unwrap().status = status;
    }

    pub fn set_viewport(&self, viewport: [GLint; 4]) {
        self.state.lock().unwrap().viewport = viewport;
    }

    /// Value written to every pixel by `read_pixels`
    pub fn set_pixel(&self, pixel: [u8; 4]) {
        self.state.lock().unwrap().pixel = pixel;
    }

    /// Simulate bindings made by the caller, without recording calls
    pub fn set_bindings(&self, read_framebuffer: GLuint, draw_framebuffer: GLuint, renderbuffer: GLuint) {
        let mut state = self.state.lock().unwrap();
        state.read_framebuffer = read_framebuffer;
        state.draw_framebuffer = draw_framebuffer;
        state.renderbuffer = renderbuffer;
    }

    // ===== Inspection =====

    pub fn calls(&self) -> Vec<GlCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn count_calls<F: Fn(&GlCall) -> bool>(&self, predicate: F) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| predicate(c)).count()
    }

    pub fn read_framebuffer(&self) -> GLuint {
        self.state.lock().unwrap().read_framebuffer
    }

    pub fn draw_framebuffer(&self) -> GLuint {
        self.state.lock().unwrap().draw_framebuffer
    }

    pub fn renderbuffer(&self) -> GLuint {
        self.state.lock().unwrap().renderbuffer
    }

    fn record(&self, call: GlCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn next_name(&self) -> GLuint {
        let mut state = self.state.lock().unwrap();
        let name = state.next_name;
        state.next_name += 1;
        name
    }
}

impl GlContext for MockGlContext {
    fn features(&self) -> DeviceFeatures {
        self.features
    }

    fn get_integerv(&self, pname: GLenum, data: &mut [GLint]) {
        self.record(GlCall::GetIntegerv(pname));
        let state = self.state.lock().unwrap();
        match pname {
            gl::FRAMEBUFFER_BINDING => data[0] = state.draw_framebuffer as GLint,
            gl::READ_FRAMEBUFFER_BINDING => data[0] = state.read_framebuffer as GLint,
            gl::RENDERBUFFER_BINDING => data[0] = state.renderbuffer as GLint,
            gl::VIEWPORT => data[..4].copy_from_slice(&state.viewport),
            _ => data[0] = 0,
        }
    }

    fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        self.record(GlCall::CheckFramebufferStatus(target));
        self.state.lock().unwrap().status
    }

    fn gen_framebuffer(&self) -> GLuint {
        let name = self.next_name();
        self.record(GlCall::GenFramebuffer(name));
        name
    }

    fn delete_framebuffer(&self, framebuffer: GLuint) {
        self.record(GlCall::DeleteFramebuffer(framebuffer));
    }

    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        self.record(GlCall::BindFramebuffer { target, framebuffer });
        let mut state = self.state.lock().unwrap();
        match target {
            gl::READ_FRAMEBUFFER => state.read_framebuffer = framebuffer,
            gl::DRAW_FRAMEBUFFER => state.draw_framebuffer = framebuffer,
            _ => {
                state.read_framebuffer = framebuffer;
                state.draw_framebuffer = framebuffer;
            }
        }
    }

    fn framebuffer_texture_2d(&self, target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint) {
        self.record(GlCall::FramebufferTexture2D { target, attachment, textarget, texture, level });
    }

    fn framebuffer_texture_layer(&self, target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint) {
        self.record(GlCall::FramebufferTextureLayer { target, attachment, texture, level, layer });
    }

    fn framebuffer_renderbuffer(&self, target: GLenum, attachment: GLenum, _renderbuffer_target: GLenum, renderbuffer: GLuint) {
        self.record(GlCall::FramebufferRenderbuffer { target, attachment, renderbuffer });
    }

    fn framebuffer_texture_multiview(&self, target: GLenum, attachment: GLenum, texture: GLuint, _level: GLint, _base_view_index: GLint, num_views: GLsizei) {
        self.record(GlCall::FramebufferTextureMultiview { target, attachment, texture, num_views });
    }

    fn framebuffer_texture_multisample_multiview(&self, target: GLenum, attachment: GLenum, texture: GLuint, _level: GLint, samples: GLsizei, _base_view_index: GLint, num_views: GLsizei) {
        self.record(GlCall::FramebufferTextureMultisampleMultiview { target, attachment, texture, samples, num_views });
    }

    fn draw_buffers(&self, buffers: &[GLenum]) {
        self.record(GlCall::DrawBuffers(buffers.to_vec()));
    }

    fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) {
        self.record(GlCall::InvalidateFramebuffer { target, attachments: attachments.to_vec() });
    }

    fn gen_renderbuffer(&self) -> GLuint {
        let name = self.next_name();
        self.record(GlCall::GenRenderbuffer(name));
        name
    }

    fn delete_renderbuffer(&self, renderbuffer: GLuint) {
        self.record(GlCall::DeleteRenderbuffer(renderbuffer));
    }

    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        self.record(GlCall::BindRenderbuffer { target, renderbuffer });
        self.state.lock().unwrap().renderbuffer = renderbuffer;
    }

    fn renderbuffer_storage(&self, _target: GLenum, internal_format: GLenum, width: GLsizei, height: GLsizei) {
        self.record(GlCall::RenderbufferStorage { internal_format, width, height });
    }

    fn renderbuffer_storage_multisample(&self, _target: GLenum, samples: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei) {
        self.record(GlCall::RenderbufferStorageMultisample { samples, internal_format, width, height });
    }

    fn gen_texture(&self) -> GLuint {
        let name = self.next_name();
        self.record(GlCall::GenTexture(name));
        name
    }

    fn delete_texture(&self, texture: GLuint) {
        self.record(GlCall::DeleteTexture(texture));
    }

    fn bind_texture(&self, target: GLenum, texture: GLuint) {
        self.record(GlCall::BindTexture { target, texture });
    }

    fn tex_storage_2d(&self, target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei) {
        self.record(GlCall::TexStorage2D { target, levels, internal_format, width, height });
    }

    fn tex_storage_2d_multisample(&self, target: GLenum, samples: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei) {
        self.record(GlCall::TexStorage2DMultisample { target, samples, internal_format, width, height });
    }

    fn tex_storage_3d(&self, target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei) {
        self.record(GlCall::TexStorage3D { target, levels, internal_format, width, height, depth });
    }

    fn copy_tex_sub_image_2d(&self, target: GLenum, _level: GLint, _xoffset: GLint, _yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(GlCall::CopyTexSubImage2D { target, x, y, width, height });
    }

    fn enable(&self, cap: GLenum) {
        self.record(GlCall::Enable(cap));
    }

    fn disable(&self, cap: GLenum) {
        self.record(GlCall::Disable(cap));
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.record(GlCall::ColorMask(red, green, blue, alpha));
    }

    fn depth_mask(&self, flag: bool) {
        self.record(GlCall::DepthMask(flag));
    }

    fn stencil_mask(&self, mask: GLuint) {
        self.record(GlCall::StencilMask(mask));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(GlCall::ClearColor([red, green, blue, alpha]));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(GlCall::ClearDepth(depth));
    }

    fn clear_stencil(&self, stencil: GLint) {
        self.record(GlCall::ClearStencil(stencil));
    }

    fn clear(&self, mask: GLbitfield) {
        self.record(GlCall::Clear(mask));
    }

    fn pixel_store_i(&self, pname: GLenum, param: GLint) {
        self.record(GlCall::PixelStorei { pname, param });
    }

    fn flush(&self) {
        self.record(GlCall::Flush);
    }

    fn read_pixels(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum, pixels: &mut [u8]) {
        self.record(GlCall::ReadPixels { x, y, width, height, format, ty });
        let pixel = self.state.lock().unwrap().pixel;
        for chunk in pixels.chunks_mut(4) {
            let len = chunk.len();
            chunk.copy_from_slice(&pixel[..len]);
        }
    }
}

#[cfg(test)]
#[path = "mock_gl_context_tests.rs"]
mod tests;
