/// Render target module - framebuffer objects and their descriptors

// Module declarations
pub mod framebuffer_desc;
pub mod render_pass_desc;
pub mod status;
pub mod binding_guard;
pub mod custom_framebuffer;
pub mod current_framebuffer;
pub mod framebuffer;
pub(crate) mod pass_ops;
pub(crate) mod readback;

// Re-export everything from the descriptor modules
pub use framebuffer_desc::*;
pub use render_pass_desc::*;

// Re-export framebuffer types
pub use status::{check_framebuffer_status, framebuffer_status_name};
pub use binding_guard::FramebufferBindingGuard;
pub use custom_framebuffer::CustomFramebuffer;
pub use current_framebuffer::CurrentFramebuffer;
pub use framebuffer::{Framebuffer, Viewport};
