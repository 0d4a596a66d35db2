/// Attachable resources module - textures and render buffers

// Module declarations
pub mod texture;
pub mod texture_buffer;
pub mod texture_target;
pub mod dummy_texture;

// Re-export everything from texture.rs
pub use texture::*;

// Re-export concrete resources
pub use texture_buffer::TextureBuffer;
pub use texture_target::TextureTarget;
pub use dummy_texture::DummyTexture;
