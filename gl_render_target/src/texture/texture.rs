/// Texture trait, texture descriptor, and format properties
///
/// `Texture` is the attachable-resource contract: anything that can be bound
/// to a framebuffer as a color, depth or stencil attachment.

use bitflags::bitflags;
use crate::context::gl::{self, GLenum, GLint};

// ===== TEXTURE FORMAT =====

/// Pixel format of an attachable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// No backing format (placeholder attachments)
    UNDEFINED,

    // Color formats
    R8G8B8A8_UNORM,
    R8G8B8A8_SRGB,
    B8G8R8A8_UNORM,
    R32G32B32A32_UINT,
    R32_UINT,

    // Depth/stencil formats
    D16_UNORM,
    D24_UNORM,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
    S8_UINT,
}

impl TextureFormat {
    /// Size of one pixel in bytes (0 for UNDEFINED)
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            TextureFormat::UNDEFINED => 0,
            TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::R8G8B8A8_SRGB
            | TextureFormat::B8G8R8A8_UNORM => 4,
            TextureFormat::R32G32B32A32_UINT => 16,
            TextureFormat::R32_UINT => 4,
            TextureFormat::D16_UNORM => 2,
            TextureFormat::D24_UNORM => 4,
            TextureFormat::D32_FLOAT => 4,
            TextureFormat::D24_UNORM_S8_UINT => 4,
            TextureFormat::S8_UINT => 1,
        }
    }

    /// True for formats whose color values are sRGB-encoded
    pub fn is_srgb(&self) -> bool {
        matches!(self, TextureFormat::R8G8B8A8_SRGB)
    }

    /// True for depth, stencil and combined depth/stencil formats
    pub fn is_depth_or_stencil(&self) -> bool {
        matches!(
            self,
            TextureFormat::D16_UNORM
                | TextureFormat::D24_UNORM
                | TextureFormat::D32_FLOAT
                | TextureFormat::D24_UNORM_S8_UINT
                | TextureFormat::S8_UINT
        )
    }

    /// Sized GL internal format, or None if the format has no GL counterpart
    pub fn gl_internal_format(&self) -> Option<GLenum> {
        match self {
            TextureFormat::UNDEFINED => None,
            TextureFormat::R8G8B8A8_UNORM => Some(gl::RGBA8),
            TextureFormat::R8G8B8A8_SRGB => Some(gl::SRGB8_ALPHA8),
            TextureFormat::B8G8R8A8_UNORM => Some(gl::BGRA8_EXT),
            TextureFormat::R32G32B32A32_UINT => Some(gl::RGBA32UI),
            TextureFormat::R32_UINT => Some(gl::R32UI),
            TextureFormat::D16_UNORM => Some(gl::DEPTH_COMPONENT16),
            TextureFormat::D24_UNORM => Some(gl::DEPTH_COMPONENT24),
            TextureFormat::D32_FLOAT => Some(gl::DEPTH_COMPONENT32F),
            TextureFormat::D24_UNORM_S8_UINT => Some(gl::DEPTH24_STENCIL8),
            TextureFormat::S8_UINT => Some(gl::STENCIL_INDEX8),
        }
    }
}

// ===== TEXTURE TYPE / USAGE =====

/// Dimensionality of an attachable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    /// Single 2D image (optionally multisampled)
    TwoD,
    /// Array of 2D layers
    TwoDArray,
    /// Six 2D faces
    Cube,
    /// Volume texture
    ThreeD,
}

bitflags! {
    /// Texture usage flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureUsage: u32 {
        /// Texture can be sampled in shaders
        const SAMPLED = 1 << 0;
        /// Texture can be bound as a storage image
        const STORAGE = 1 << 1;
        /// Texture can be attached to a framebuffer
        const ATTACHMENT = 1 << 2;
    }
}

// ===== SIZE / RANGE =====

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A rectangular region of one layer / mip level of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRangeDesc {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Array layer (or cube face)
    pub layer: u32,
    pub num_layers: u32,
    pub mip_level: u32,
}

impl TextureRangeDesc {
    /// Region of layer 0, mip level 0
    pub fn new_2d(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            layer: 0,
            num_layers: 1,
            mip_level: 0,
        }
    }

    /// Same region on another layer
    pub fn at_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }
}

// ===== TEXTURE DESC =====

/// Descriptor for creating an attachable resource
#[derive(Debug, Clone)]
pub struct TextureDesc {
    pub texture_type: TextureType,
    pub format: TextureFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Depth in pixels (3D textures only)
    pub depth: u32,
    /// Number of array layers (1 = simple 2D texture)
    pub num_layers: u32,
    /// Number of samples (1 = no MSAA)
    pub num_samples: u32,
    pub num_mip_levels: u32,
    pub usage: TextureUsage,
}

impl TextureDesc {
    pub fn new_2d(format: TextureFormat, width: u32, height: u32, usage: TextureUsage) -> Self {
        Self {
            texture_type: TextureType::TwoD,
            format,
            width,
            height,
            depth: 1,
            num_layers: 1,
            num_samples: 1,
            num_mip_levels: 1,
            usage,
        }
    }

    pub fn new_2d_array(format: TextureFormat, width: u32, height: u32, num_layers: u32, usage: TextureUsage) -> Self {
        Self {
            texture_type: TextureType::TwoDArray,
            num_layers,
            ..Self::new_2d(format, width, height, usage)
        }
    }

    pub fn new_cube(format: TextureFormat, width: u32, height: u32, usage: TextureUsage) -> Self {
        Self {
            texture_type: TextureType::Cube,
            ..Self::new_2d(format, width, height, usage)
        }
    }

    /// Set the sample count
    pub fn with_samples(mut self, num_samples: u32) -> Self {
        self.num_samples = num_samples;
        self
    }
}

// ===== TEXTURE TRAIT =====

/// Attachable resource trait
///
/// Implemented by GL texture objects (`TextureBuffer`), render buffers
/// (`TextureTarget`) and size-only placeholders (`DummyTexture`).
/// Framebuffers hold these as shared `Arc<dyn Texture>` references and
/// never destroy them.
pub trait Texture {
    fn texture_type(&self) -> TextureType;

    fn format(&self) -> TextureFormat;

    fn size(&self) -> Size;

    /// Number of samples (1 = no MSAA)
    fn samples(&self) -> u32;

    /// Number of array layers
    fn num_layers(&self) -> u32;

    fn num_mip_levels(&self) -> u32;

    fn usage(&self) -> TextureUsage;

    /// Native GL name (texture or render buffer)
    fn id(&self) -> u32;

    /// True if the storage is provided by the platform (e.g. a window surface)
    /// rather than allocated by this layer
    fn is_implicit_storage(&self) -> bool {
        false
    }

    /// Attach to the currently bound framebuffer at GL_COLOR_ATTACHMENT0 + `index`
    ///
    /// `face` is the cube face or array layer; ignored by 2D resources.
    fn attach_as_color(&self, index: u32, face: u32, mip_level: u32);

    /// Detach from GL_COLOR_ATTACHMENT0 + `index` of the currently bound framebuffer
    fn detach_as_color(&self, index: u32, face: u32, mip_level: u32);

    fn attach_as_depth(&self);

    fn attach_as_stencil(&self);

    /// Bind the resource to its GL target (copy destination, render buffer binding)
    fn bind(&self);

    /// Tightly packed row size of `range` in bytes
    fn bytes_per_row(&self, range: &TextureRangeDesc) -> usize {
        range.width as usize * self.format().bytes_per_pixel()
    }

    /// GL_PACK_ALIGNMENT suitable for rows of `bytes_per_row` bytes
    fn pack_alignment(&self, bytes_per_row: usize) -> GLint {
        if bytes_per_row == 0 {
            return 1;
        }
        [8, 4, 2]
            .into_iter()
            .find(|alignment| bytes_per_row % *alignment as usize == 0)
            .unwrap_or(1)
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
