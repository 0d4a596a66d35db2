//! GL scalar types and enum values used by the render-target layer
//!
//! Only the subset of the GL/GLES enum space this crate actually issues.

pub type GLenum = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLbitfield = u32;

// Framebuffer targets and bindings
pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const READ_FRAMEBUFFER: GLenum = 0x8CA8;
pub const DRAW_FRAMEBUFFER: GLenum = 0x8CA9;
pub const FRAMEBUFFER_BINDING: GLenum = 0x8CA6;
pub const DRAW_FRAMEBUFFER_BINDING: GLenum = 0x8CA6;
pub const READ_FRAMEBUFFER_BINDING: GLenum = 0x8CAA;
pub const RENDERBUFFER: GLenum = 0x8D41;
pub const RENDERBUFFER_BINDING: GLenum = 0x8CA7;
pub const VIEWPORT: GLenum = 0x0BA2;

// Framebuffer status
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;
pub const FRAMEBUFFER_INCOMPLETE_ATTACHMENT: GLenum = 0x8CD6;
pub const FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT: GLenum = 0x8CD7;
pub const FRAMEBUFFER_INCOMPLETE_DIMENSIONS: GLenum = 0x8CD9;
pub const FRAMEBUFFER_UNSUPPORTED: GLenum = 0x8CDD;

// Attachment points
pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const DEPTH_ATTACHMENT: GLenum = 0x8D00;
pub const STENCIL_ATTACHMENT: GLenum = 0x8D20;

// Clear bits
pub const DEPTH_BUFFER_BIT: GLbitfield = 0x0000_0100;
pub const STENCIL_BUFFER_BIT: GLbitfield = 0x0000_0400;
pub const COLOR_BUFFER_BIT: GLbitfield = 0x0000_4000;

// Capabilities
pub const STENCIL_TEST: GLenum = 0x0B90;
pub const FRAMEBUFFER_SRGB: GLenum = 0x8DB9;

// Texture targets
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_2D_MULTISAMPLE: GLenum = 0x9100;
pub const TEXTURE_2D_ARRAY: GLenum = 0x8C1A;
pub const TEXTURE_3D: GLenum = 0x806F;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const TEXTURE_CUBE_MAP_POSITIVE_X: GLenum = 0x8515;

// Pixel transfer
pub const RGBA: GLenum = 0x1908;
pub const RGBA_INTEGER: GLenum = 0x8D99;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const PACK_ALIGNMENT: GLenum = 0x0D05;

// Sized internal formats
pub const RGBA8: GLenum = 0x8058;
pub const BGRA8_EXT: GLenum = 0x93A1;
pub const SRGB8_ALPHA8: GLenum = 0x8C43;
pub const RGBA32UI: GLenum = 0x8D70;
pub const R32UI: GLenum = 0x8236;
pub const DEPTH_COMPONENT16: GLenum = 0x81A5;
pub const DEPTH_COMPONENT24: GLenum = 0x81A6;
pub const DEPTH_COMPONENT32F: GLenum = 0x8CAC;
pub const DEPTH24_STENCIL8: GLenum = 0x88F0;
pub const STENCIL_INDEX8: GLenum = 0x8D48;
