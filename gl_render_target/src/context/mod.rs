/// Native context module - GL entry points and capability flags

// Module declarations
pub mod gl;
pub mod features;
pub mod gl_context;

// Re-exports
pub use features::*;
pub use gl_context::*;

// Mock GL context for tests (no GPU required)
#[cfg(test)]
pub mod mock_gl_context;
