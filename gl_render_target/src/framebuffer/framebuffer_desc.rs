/// Framebuffer descriptor - the declarative attachment set of a render target

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::texture::Texture;

/// How attachments are bound to the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramebufferMode {
    /// One view per attachment
    #[default]
    Mono,
    /// Two views of the same attachment rendered in a single draw (OVR_multiview)
    Stereo,
    /// Arbitrary view count (recognized, not implemented)
    Multiview,
}

/// One attachment slot: the texture rendered into and an optional resolve target
///
/// Both textures are shared references; the framebuffer never destroys them.
#[derive(Clone, Default)]
pub struct AttachmentDesc {
    pub texture: Option<Arc<dyn Texture>>,
    /// Receives the down-sampled contents of a multisampled `texture`
    pub resolve_texture: Option<Arc<dyn Texture>>,
}

impl AttachmentDesc {
    pub fn new(texture: Arc<dyn Texture>) -> Self {
        Self {
            texture: Some(texture),
            resolve_texture: None,
        }
    }

    pub fn with_resolve(texture: Arc<dyn Texture>, resolve_texture: Arc<dyn Texture>) -> Self {
        Self {
            texture: Some(texture),
            resolve_texture: Some(resolve_texture),
        }
    }
}

/// Descriptor for initializing a framebuffer
///
/// Color attachments are sparse: indices need not be contiguous. If any
/// color attachment declares a resolve texture, all of them must.
#[derive(Clone, Default)]
pub struct FramebufferDesc {
    pub color_attachments: FxHashMap<usize, AttachmentDesc>,
    pub depth_attachment: AttachmentDesc,
    pub stencil_attachment: AttachmentDesc,
    pub mode: FramebufferMode,
}

impl FramebufferDesc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the color attachment at `index`
    pub fn with_color(mut self, index: usize, attachment: AttachmentDesc) -> Self {
        self.color_attachments.insert(index, attachment);
        self
    }

    pub fn with_depth(mut self, attachment: AttachmentDesc) -> Self {
        self.depth_attachment = attachment;
        self
    }

    pub fn with_stencil(mut self, attachment: AttachmentDesc) -> Self {
        self.stencil_attachment = attachment;
        self
    }

    pub fn with_mode(mut self, mode: FramebufferMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Reference identity of two shared textures
pub fn same_texture(a: &Arc<dyn Texture>, b: &Arc<dyn Texture>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
