/*!
# GL Render Target

Render-target (framebuffer) management for the OpenGL backend.

This crate translates a declarative description of color/depth/stencil
attachments and per-pass load/store actions into the native framebuffer
object calls of the active GL driver, while preserving any binding state
owned by the caller.

## Architecture

- **GlContext**: Trait over the native GL entry points used by this crate
- **DeviceFeatures**: Capability flags reported by the context
- **Texture**: Attachable resource trait (textures and render buffers)
- **FramebufferDesc**: Declarative attachment set
- **RenderPassDesc**: Per-pass load/store actions and clear values
- **Framebuffer**: Owned (`CustomFramebuffer`) or implicit (`CurrentFramebuffer`) target
- **FramebufferBindingGuard**: Scope guard restoring ambient bindings on drop
*/

// Internal modules
mod error;
pub mod debug;
pub mod log;
pub mod context;
pub mod texture;
pub mod framebuffer;

// Main glrt namespace module
pub mod glrt {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
    }

    // Debug configuration sub-module
    pub mod debug {
        pub use crate::debug::{Config, ViolationStats, init_debug_config, violation_stats, reset_violation_stats};
    }

    // Native context sub-module
    pub mod context {
        pub use crate::context::*;
    }

    // Attachable resources sub-module
    pub mod texture {
        pub use crate::texture::*;
    }

    // Render target sub-module
    pub mod framebuffer {
        pub use crate::framebuffer::*;
    }
}

// Re-export math library at crate root
pub use glam;

