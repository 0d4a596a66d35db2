//! Unit tests for binding_guard.rs
//!
//! The guard must leave the ambient bindings exactly as it found them.

use crate::context::gl;
use crate::context::mock_gl_context::{GlCall, MockGlContext};
use crate::context::{DeviceFeatures, GlContext};
use crate::framebuffer::FramebufferBindingGuard;

fn is_framebuffer_bind(call: &GlCall) -> bool {
    matches!(call, GlCall::BindFramebuffer { .. })
}

// ============================================================================
// SEPARATE READ/DRAW BINDINGS
// ============================================================================

#[test]
fn test_restores_read_and_draw_bindings() {
    let mock = MockGlContext::new(DeviceFeatures::READ_WRITE_FRAMEBUFFER);
    mock.set_bindings(3, 4, 9);

    {
        let guard = FramebufferBindingGuard::new(&mock);
        assert!(guard.restores_framebuffer());
        mock.bind_framebuffer(gl::FRAMEBUFFER, 7);
        mock.bind_renderbuffer(gl::RENDERBUFFER, 2);
        mock.clear_calls();
    }

    assert_eq!(
        mock.calls(),
        vec![
            GlCall::BindFramebuffer { target: gl::READ_FRAMEBUFFER, framebuffer: 3 },
            GlCall::BindFramebuffer { target: gl::DRAW_FRAMEBUFFER, framebuffer: 4 },
            GlCall::BindRenderbuffer { target: gl::RENDERBUFFER, renderbuffer: 9 },
        ]
    );
    assert_eq!(mock.read_framebuffer(), 3);
    assert_eq!(mock.draw_framebuffer(), 4);
}

#[test]
fn test_captures_read_and_draw_queries() {
    let mock = MockGlContext::new(DeviceFeatures::READ_WRITE_FRAMEBUFFER);
    let _guard = FramebufferBindingGuard::new(&mock);

    assert_eq!(
        mock.calls(),
        vec![
            GlCall::GetIntegerv(gl::RENDERBUFFER_BINDING),
            GlCall::CheckFramebufferStatus(gl::FRAMEBUFFER),
            GlCall::GetIntegerv(gl::READ_FRAMEBUFFER_BINDING),
            GlCall::GetIntegerv(gl::DRAW_FRAMEBUFFER_BINDING),
        ]
    );
}

// ============================================================================
// COMBINED BINDING
// ============================================================================

#[test]
fn test_restores_combined_binding() {
    let mock = MockGlContext::new(DeviceFeatures::empty());
    mock.set_bindings(5, 5, 0);

    {
        let _guard = FramebufferBindingGuard::new(&mock);
        assert!(mock.calls().contains(&GlCall::GetIntegerv(gl::FRAMEBUFFER_BINDING)));
        mock.bind_framebuffer(gl::FRAMEBUFFER, 11);
        mock.clear_calls();
    }

    assert_eq!(
        mock.calls(),
        vec![
            GlCall::BindFramebuffer { target: gl::FRAMEBUFFER, framebuffer: 5 },
            GlCall::BindRenderbuffer { target: gl::RENDERBUFFER, renderbuffer: 0 },
        ]
    );
    assert_eq!(mock.draw_framebuffer(), 5);
}

// ============================================================================
// INCOMPLETE AMBIENT FRAMEBUFFER
// ============================================================================

#[test]
fn test_incomplete_framebuffer_is_not_rebound() {
    let mock = MockGlContext::new(DeviceFeatures::READ_WRITE_FRAMEBUFFER);
    mock.set_bindings(3, 3, 6);
    mock.set_status(gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT);

    {
        let guard = FramebufferBindingGuard::new(&mock);
        assert!(!guard.restores_framebuffer());
        mock.clear_calls();
    }

    assert_eq!(mock.count_calls(is_framebuffer_bind), 0);
    assert_eq!(
        mock.calls(),
        vec![GlCall::BindRenderbuffer { target: gl::RENDERBUFFER, renderbuffer: 6 }]
    );
}

#[test]
fn test_restores_on_early_return() {
    fn scoped_work(context: &dyn GlContext, fail: bool) -> Result<(), ()> {
        let _guard = FramebufferBindingGuard::new(context);
        context.bind_framebuffer(gl::FRAMEBUFFER, 42);
        if fail {
            return Err(());
        }
        Ok(())
    }

    let mock = MockGlContext::new(DeviceFeatures::empty());
    mock.set_bindings(8, 8, 0);

    assert!(scoped_work(&mock, true).is_err());
    assert_eq!(mock.draw_framebuffer(), 8);
}
