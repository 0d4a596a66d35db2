/// Render pass descriptor - per-pass load/store actions and clear values
///
/// Supplied on every `bind()`; the framebuffer keeps the last one for the
/// matching `unbind()`.

use glam::Vec4;

/// What happens to an attachment's contents at the start of a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadAction {
    /// Keep existing contents
    Load,
    /// Clear to the attachment's clear value
    #[default]
    Clear,
    /// Contents are undefined
    DontCare,
}

/// What happens to an attachment's contents at the end of a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreAction {
    /// Persist the rendered contents
    #[default]
    Store,
    /// The driver may discard the contents
    DontCare,
}

/// Color attachment actions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAttachmentPass {
    pub load_action: LoadAction,
    pub store_action: StoreAction,
    /// RGBA clear value
    pub clear_color: Vec4,
    /// Cube face (or array layer) to render into
    pub layer: u32,
    pub mip_level: u32,
}

impl Default for ColorAttachmentPass {
    fn default() -> Self {
        Self {
            load_action: LoadAction::Clear,
            store_action: StoreAction::Store,
            clear_color: Vec4::ZERO,
            layer: 0,
            mip_level: 0,
        }
    }
}

/// Depth attachment actions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthAttachmentPass {
    pub load_action: LoadAction,
    pub store_action: StoreAction,
    pub clear_depth: f32,
}

impl Default for DepthAttachmentPass {
    fn default() -> Self {
        Self {
            load_action: LoadAction::Clear,
            store_action: StoreAction::Store,
            clear_depth: 1.0,
        }
    }
}

/// Stencil attachment actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StencilAttachmentPass {
    pub load_action: LoadAction,
    pub store_action: StoreAction,
    pub clear_stencil: u32,
}

/// Descriptor for one render pass over a framebuffer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPassDesc {
    /// Per color attachment index
    pub color_attachments: Vec<ColorAttachmentPass>,
    pub depth_attachment: DepthAttachmentPass,
    pub stencil_attachment: StencilAttachmentPass,
}

impl Default for RenderPassDesc {
    fn default() -> Self {
        Self {
            color_attachments: vec![ColorAttachmentPass::default()],
            depth_attachment: DepthAttachmentPass::default(),
            stencil_attachment: StencilAttachmentPass::default(),
        }
    }
}

impl RenderPassDesc {
    /// Same load/store actions on color 0, depth and stencil
    pub fn with_actions(load_action: LoadAction, store_action: StoreAction) -> Self {
        Self {
            color_attachments: vec![ColorAttachmentPass {
                load_action,
                store_action,
                ..Default::default()
            }],
            depth_attachment: DepthAttachmentPass {
                load_action,
                store_action,
                ..Default::default()
            },
            stencil_attachment: StencilAttachmentPass {
                load_action,
                store_action,
                ..Default::default()
            },
        }
    }
}
