/// Framebuffer binding guard - borrow the ambient GL bindings for one scope
///
/// Captures the render buffer binding and, if the ambient framebuffer is
/// complete, the read/draw (or combined) framebuffer bindings. Everything
/// captured is restored when the guard is dropped, on every exit path.

use crate::context::gl::{self, GLint, GLuint};
use crate::context::{DeviceFeatures, GlContext};
use crate::framebuffer::status::check_framebuffer_status;

/// Framebuffer bindings captured by a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapturedFramebuffer {
    /// Ambient framebuffer was incomplete: nothing to restore
    None,
    /// Combined GL_FRAMEBUFFER binding
    Combined(GLuint),
    /// Separate GL_READ_FRAMEBUFFER / GL_DRAW_FRAMEBUFFER bindings
    ReadDraw { read: GLuint, draw: GLuint },
}

/// Scope guard restoring framebuffer and render buffer bindings on drop
///
/// # Example
///
/// ```ignore
/// {
///     let _guard = FramebufferBindingGuard::new(context);
///     context.bind_framebuffer(gl::FRAMEBUFFER, scratch_id);
///     // ...
/// } // previous bindings restored here
/// ```
pub struct FramebufferBindingGuard<'a> {
    context: &'a dyn GlContext,
    renderbuffer: GLuint,
    framebuffer: CapturedFramebuffer,
}

impl<'a> FramebufferBindingGuard<'a> {
    pub fn new(context: &'a dyn GlContext) -> Self {
        let renderbuffer = get_binding(context, gl::RENDERBUFFER_BINDING);

        // A binding captured from an incomplete framebuffer is meaningless
        let framebuffer = if check_framebuffer_status(context).is_ok() {
            if context.features().has_feature(DeviceFeatures::READ_WRITE_FRAMEBUFFER) {
                CapturedFramebuffer::ReadDraw {
                    read: get_binding(context, gl::READ_FRAMEBUFFER_BINDING),
                    draw: get_binding(context, gl::DRAW_FRAMEBUFFER_BINDING),
                }
            } else {
                CapturedFramebuffer::Combined(get_binding(context, gl::FRAMEBUFFER_BINDING))
            }
        } else {
            CapturedFramebuffer::None
        };

        Self {
            context,
            renderbuffer,
            framebuffer,
        }
    }

    /// True if a framebuffer binding will be restored on drop
    pub fn restores_framebuffer(&self) -> bool {
        self.framebuffer != CapturedFramebuffer::None
    }
}

impl Drop for FramebufferBindingGuard<'_> {
    fn drop(&mut self) {
        match self.framebuffer {
            CapturedFramebuffer::ReadDraw { read, draw } => {
                self.context.bind_framebuffer(gl::READ_FRAMEBUFFER, read);
                self.context.bind_framebuffer(gl::DRAW_FRAMEBUFFER, draw);
            }
            CapturedFramebuffer::Combined(framebuffer) => {
                self.context.bind_framebuffer(gl::FRAMEBUFFER, framebuffer);
            }
            CapturedFramebuffer::None => {}
        }

        self.context.bind_renderbuffer(gl::RENDERBUFFER, self.renderbuffer);
    }
}

fn get_binding(context: &dyn GlContext, pname: u32) -> GLuint {
    let mut value: [GLint; 1] = [0];
    context.get_integerv(pname, &mut value);
    value[0] as GLuint
}

#[cfg(test)]
#[path = "binding_guard_tests.rs"]
mod tests;
