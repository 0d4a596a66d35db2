/// Framebuffer completeness validation

use crate::context::gl::{self, GLenum};
use crate::context::GlContext;
use crate::error::{Error, Result};

/// Symbolic name of a glCheckFramebufferStatus result
pub fn framebuffer_status_name(status: GLenum) -> String {
    match status {
        gl::FRAMEBUFFER_COMPLETE => "GL_FRAMEBUFFER_COMPLETE".to_string(),
        gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => "GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT".to_string(),
        gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
            "GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT".to_string()
        }
        gl::FRAMEBUFFER_INCOMPLETE_DIMENSIONS => "GL_FRAMEBUFFER_INCOMPLETE_DIMENSIONS".to_string(),
        gl::FRAMEBUFFER_UNSUPPORTED => "GL_FRAMEBUFFER_UNSUPPORTED".to_string(),
        other => format!("GL_FRAMEBUFFER unknown error: {}", other),
    }
}

/// Check completeness of the framebuffer bound to GL_FRAMEBUFFER
///
/// # Errors
///
/// `RuntimeError` carrying the symbolic status name if incomplete.
pub fn check_framebuffer_status(context: &dyn GlContext) -> Result<()> {
    let status = context.check_framebuffer_status(gl::FRAMEBUFFER);
    if status == gl::FRAMEBUFFER_COMPLETE {
        Ok(())
    } else {
        Err(Error::RuntimeError(framebuffer_status_name(status)))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
