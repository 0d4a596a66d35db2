/// DummyTexture - size-only placeholder attachment
///
/// Stands in for storage the layer does not own or know about (the color
/// buffer of the platform framebuffer). It carries dimensions so viewport
/// and attachment queries stay consistent, and nothing else.

use crate::glrt_violation;
use crate::texture::{Size, Texture, TextureFormat, TextureType, TextureUsage};

const SOURCE: &str = "glrt::DummyTexture";

/// Placeholder texture with no GL storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DummyTexture {
    size: Size,
}

impl DummyTexture {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Texture for DummyTexture {
    fn texture_type(&self) -> TextureType {
        TextureType::TwoD
    }

    fn format(&self) -> TextureFormat {
        TextureFormat::UNDEFINED
    }

    fn size(&self) -> Size {
        self.size
    }

    fn samples(&self) -> u32 {
        1
    }

    fn num_layers(&self) -> u32 {
        1
    }

    fn num_mip_levels(&self) -> u32 {
        1
    }

    fn usage(&self) -> TextureUsage {
        TextureUsage::ATTACHMENT
    }

    fn id(&self) -> u32 {
        0
    }

    fn is_implicit_storage(&self) -> bool {
        true
    }

    fn attach_as_color(&self, _index: u32, _face: u32, _mip_level: u32) {
        glrt_violation!(SOURCE, "A dummy texture cannot be attached");
    }

    fn detach_as_color(&self, _index: u32, _face: u32, _mip_level: u32) {
        glrt_violation!(SOURCE, "A dummy texture cannot be detached");
    }

    fn attach_as_depth(&self) {
        glrt_violation!(SOURCE, "A dummy texture cannot be attached");
    }

    fn attach_as_stencil(&self) {
        glrt_violation!(SOURCE, "A dummy texture cannot be attached");
    }

    fn bind(&self) {
        glrt_violation!(SOURCE, "A dummy texture cannot be bound");
    }
}
