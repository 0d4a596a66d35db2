//! Device capability flags
//!
//! The render-target layer only branches on a handful of optional driver
//! behaviours. A missing capability never fails a pass; the optional
//! behaviour is simply skipped. Stereo attachments are the exception: they
//! cannot be emulated, so a missing multiview capability is a precondition
//! violation.

use bitflags::bitflags;

bitflags! {
    /// Optional driver capabilities queried by the framebuffer code
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeviceFeatures: u32 {
        /// Separate GL_READ_FRAMEBUFFER / GL_DRAW_FRAMEBUFFER binding points
        const READ_WRITE_FRAMEBUFFER = 1 << 0;
        /// GL_FRAMEBUFFER_SRGB can be toggled
        const SRGB = 1 << 1;
        /// Integer texture formats can be read back with GL_RGBA_INTEGER
        const TEXTURE_INTEGER = 1 << 2;
        /// glInvalidateFramebuffer is available
        const INVALIDATE_FRAMEBUFFER = 1 << 3;
        /// OVR_multiview (stereo attachments)
        const MULTIVIEW = 1 << 4;
        /// OVR_multiview_multisampled_render_to_texture (multisampled stereo attachments)
        const MULTIVIEW_MULTISAMPLE = 1 << 5;
    }
}

impl DeviceFeatures {
    /// Returns true if every flag in `feature` is reported
    pub fn has_feature(&self, feature: DeviceFeatures) -> bool {
        self.contains(feature)
    }
}
