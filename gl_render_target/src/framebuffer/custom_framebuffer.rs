/// CustomFramebuffer - framebuffer object owned by this layer
///
/// Built from a `FramebufferDesc`: allocates a GL framebuffer, attaches the
/// described textures, validates completeness and builds a nested resolve
/// framebuffer when resolve textures are declared. A descriptor whose color
/// attachment 0 has implicit storage targets the platform framebuffer and
/// allocates nothing.

use std::sync::Arc;
use crate::context::gl::{self, GLenum, GLsizei, GLuint};
use crate::context::{DeviceFeatures, GlContext};
use crate::error::{Error, Result};
use crate::framebuffer::pass_ops::{
    self, apply_clears, bind_buffer, discardable_attachments, update_srgb, PresentAttachments,
};
use crate::framebuffer::readback;
use crate::framebuffer::status::check_framebuffer_status;
use crate::framebuffer::{
    same_texture, AttachmentDesc, FramebufferBindingGuard, FramebufferDesc, FramebufferMode,
    RenderPassDesc, Viewport,
};
use crate::texture::{Texture, TextureRangeDesc, TextureType};
use crate::{glrt_bail, glrt_debug, glrt_error, glrt_precondition, glrt_violation};

const SOURCE: &str = "glrt::CustomFramebuffer";

/// Number of views rendered by a stereo attachment
const STEREO_NUM_VIEWS: GLsizei = 2;

/// Framebuffer object created and destroyed by this layer
pub struct CustomFramebuffer {
    context: Arc<dyn GlContext>,
    /// GL framebuffer name (0 = platform framebuffer / not allocated)
    framebuffer_id: GLuint,
    desc: FramebufferDesc,
    initialized: bool,
    resolve_framebuffer: Option<Box<CustomFramebuffer>>,
    /// Render pass of the last `bind()`, consumed by `unbind()`
    render_pass: RenderPassDesc,
}

impl CustomFramebuffer {
    /// Create an uninitialized framebuffer (no GL calls)
    pub fn new(context: Arc<dyn GlContext>) -> Self {
        Self {
            context,
            framebuffer_id: 0,
            desc: FramebufferDesc::default(),
            initialized: false,
            resolve_framebuffer: None,
            render_pass: RenderPassDesc::default(),
        }
    }

    /// Allocate the framebuffer object and attach `desc`
    ///
    /// Runs under a `FramebufferBindingGuard`: the caller's bindings are
    /// unchanged afterwards, on success and on failure.
    ///
    /// # Errors
    ///
    /// - `AlreadyInitialized` on a second call (even if the first failed)
    /// - `RuntimeError` with the status name if the framebuffer is incomplete
    /// - `ArgumentInvalid` if only some color attachments declare a resolve texture
    /// - any error of the nested resolve framebuffer
    ///
    /// A failure is also reported as a precondition violation, so it asserts
    /// under the default debug-build `Config`.
    pub fn initialize(&mut self, desc: &FramebufferDesc) -> Result<()> {
        let result = self.create(desc);
        if let Err(err) = &result {
            glrt_violation!(SOURCE, "Framebuffer initialization failed: {}", err);
        }
        result
    }

    fn create(&mut self, desc: &FramebufferDesc) -> Result<()> {
        if self.initialized {
            glrt_error!(SOURCE, "Framebuffer already initialized");
            return Err(Error::AlreadyInitialized);
        }
        self.initialized = true;
        self.desc = desc.clone();

        if self.has_implicit_color_attachment() {
            glrt_debug!(SOURCE, "Color attachment 0 has implicit storage, using platform framebuffer");
            return Ok(());
        }

        let context = Arc::clone(&self.context);
        let _guard = FramebufferBindingGuard::new(context.as_ref());

        self.framebuffer_id = context.gen_framebuffer();
        bind_buffer(context.as_ref(), self.framebuffer_id);

        let mut draw_buffers: Vec<GLenum> = Vec::with_capacity(self.desc.color_attachments.len());
        for index in self.color_attachment_indices() {
            if let Some(texture) = self.color_attachment(index) {
                self.attach_as_color(texture.as_ref(), index as u32, 0, 0);
                draw_buffers.push(gl::COLOR_ATTACHMENT0 + index as GLenum);
            }
        }
        // GL defaults to a single draw buffer on COLOR_ATTACHMENT0
        if draw_buffers.len() > 1 {
            context.draw_buffers(&draw_buffers);
        }

        if let Some(depth) = self.depth_attachment() {
            self.attach_as_depth(depth.as_ref());
        }
        if let Some(stencil) = self.stencil_attachment() {
            self.attach_as_stencil(stencil.as_ref());
        }

        if let Err(err) = check_framebuffer_status(context.as_ref()) {
            glrt_error!(SOURCE, "Framebuffer {} incomplete: {}", self.framebuffer_id, err);
            return Err(err);
        }

        self.prepare_resource()?;

        glrt_debug!(SOURCE, "Framebuffer {} created ({} color attachments, mode {:?})",
            self.framebuffer_id, self.desc.color_attachments.len(), self.desc.mode);
        Ok(())
    }

    /// Build the resolve framebuffer out of the declared resolve textures
    fn prepare_resource(&mut self) -> Result<()> {
        let with_resolve = self
            .desc
            .color_attachments
            .values()
            .filter(|attachment| attachment.resolve_texture.is_some())
            .count();

        if with_resolve > 0 && with_resolve != self.desc.color_attachments.len() {
            glrt_bail!(SOURCE, ArgumentInvalid,
                "If resolve texture is specified on a color attachment it must be specified on all of them");
        }

        let depth_resolve = self.desc.depth_attachment.resolve_texture.clone();
        let stencil_resolve = self.desc.stencil_attachment.resolve_texture.clone();
        if with_resolve == 0 && depth_resolve.is_none() && stencil_resolve.is_none() {
            return Ok(());
        }

        // Resolve targets are plain single-view framebuffers
        let mut resolve_desc = FramebufferDesc::new();
        for (&index, attachment) in &self.desc.color_attachments {
            if let Some(resolve_texture) = &attachment.resolve_texture {
                resolve_desc
                    .color_attachments
                    .insert(index, AttachmentDesc::new(Arc::clone(resolve_texture)));
            }
        }
        if let Some(texture) = depth_resolve {
            resolve_desc.depth_attachment = AttachmentDesc::new(texture);
        }
        if let Some(texture) = stencil_resolve {
            resolve_desc.stencil_attachment = AttachmentDesc::new(texture);
        }

        let mut resolve_framebuffer = CustomFramebuffer::new(Arc::clone(&self.context));
        resolve_framebuffer.create(&resolve_desc)?;
        self.resolve_framebuffer = Some(Box::new(resolve_framebuffer));
        Ok(())
    }

    /// True if color attachment 0 is backed by platform storage
    pub fn has_implicit_color_attachment(&self) -> bool {
        if self.framebuffer_id != 0 {
            return false;
        }
        self.color_attachment_ref(0)
            .is_some_and(|texture| texture.is_implicit_storage())
    }

    // ===== ATTACH HELPERS =====

    fn attach_as_color(&self, texture: &dyn Texture, index: u32, face: u32, mip_level: u32) {
        match self.desc.mode {
            FramebufferMode::Mono => texture.attach_as_color(index, face, mip_level),
            FramebufferMode::Stereo => {
                // Multisampled multiview only exists for the first color attachment
                if texture.samples() > 1
                    && !glrt_precondition!(index == 0, SOURCE,
                        "Multisampled stereo color attachment must be at index 0, got {}", index)
                {
                    return;
                }
                self.attach_multiview(texture, gl::COLOR_ATTACHMENT0 + index);
            }
            FramebufferMode::Multiview => {
                glrt_violation!(SOURCE, "Multiview framebuffer mode is not implemented");
            }
        }
    }

    fn attach_as_depth(&self, texture: &dyn Texture) {
        match self.desc.mode {
            FramebufferMode::Mono => texture.attach_as_depth(),
            FramebufferMode::Stereo => self.attach_multiview(texture, gl::DEPTH_ATTACHMENT),
            FramebufferMode::Multiview => {
                glrt_violation!(SOURCE, "Multiview framebuffer mode is not implemented");
            }
        }
    }

    fn attach_as_stencil(&self, texture: &dyn Texture) {
        match self.desc.mode {
            FramebufferMode::Mono => texture.attach_as_stencil(),
            FramebufferMode::Stereo => self.attach_multiview(texture, gl::STENCIL_ATTACHMENT),
            FramebufferMode::Multiview => {
                glrt_violation!(SOURCE, "Multiview framebuffer mode is not implemented");
            }
        }
    }

    /// Attach both layers of a 2-layer texture as left/right views
    fn attach_multiview(&self, texture: &dyn Texture, attachment: GLenum) {
        let feature = if texture.samples() > 1 {
            DeviceFeatures::MULTIVIEW_MULTISAMPLE
        } else {
            DeviceFeatures::MULTIVIEW
        };
        if !glrt_precondition!(self.context.features().has_feature(feature), SOURCE,
            "Stereo attachment requires {:?}", feature)
        {
            return;
        }

        if texture.samples() > 1 {
            self.context.framebuffer_texture_multisample_multiview(
                gl::DRAW_FRAMEBUFFER,
                attachment,
                texture.id(),
                0,
                texture.samples() as GLsizei,
                0,
                STEREO_NUM_VIEWS,
            );
        } else {
            self.context.framebuffer_texture_multiview(
                gl::DRAW_FRAMEBUFFER,
                attachment,
                texture.id(),
                0,
                0,
                STEREO_NUM_VIEWS,
            );
        }
    }

    // ===== ACCESSORS =====

    fn color_attachment_ref(&self, index: usize) -> Option<&Arc<dyn Texture>> {
        self.desc
            .color_attachments
            .get(&index)
            .and_then(|attachment| attachment.texture.as_ref())
    }

    /// Indices of the declared color attachments, ascending
    pub fn color_attachment_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.desc.color_attachments.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    pub fn color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>> {
        self.color_attachment_ref(index).cloned()
    }

    pub fn resolve_color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>> {
        self.desc
            .color_attachments
            .get(&index)
            .and_then(|attachment| attachment.resolve_texture.clone())
    }

    pub fn depth_attachment(&self) -> Option<Arc<dyn Texture>> {
        self.desc.depth_attachment.texture.clone()
    }

    pub fn resolve_depth_attachment(&self) -> Option<Arc<dyn Texture>> {
        self.desc.depth_attachment.resolve_texture.clone()
    }

    pub fn stencil_attachment(&self) -> Option<Arc<dyn Texture>> {
        self.desc.stencil_attachment.texture.clone()
    }

    /// Nested framebuffer holding the resolve textures, if any were declared
    pub fn resolve_framebuffer(&self) -> Option<&CustomFramebuffer> {
        self.resolve_framebuffer.as_deref()
    }

    pub fn framebuffer_id(&self) -> GLuint {
        self.framebuffer_id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn mode(&self) -> FramebufferMode {
        self.desc.mode
    }

    fn present_attachments(&self) -> PresentAttachments {
        PresentAttachments {
            color: self.color_attachment_ref(0).is_some(),
            depth: self.desc.depth_attachment.texture.is_some(),
            stencil: self.desc.stencil_attachment.texture.is_some(),
        }
    }

    // ===== DRAWABLE =====

    /// Swap color attachment 0 (e.g. the next swapchain image)
    ///
    /// `None` detaches the current attachment 0. A texture identical to the
    /// current attachment is a no-op. Returns `surface`.
    pub fn update_drawable(&mut self, surface: Option<Arc<dyn Texture>>) -> Option<Arc<dyn Texture>> {
        let current = self.color_attachment(0);
        let unchanged = match (&surface, &current) {
            (Some(texture), Some(current)) => same_texture(texture, current),
            _ => false,
        };
        if unchanged {
            return surface;
        }

        let context = Arc::clone(&self.context);
        match &surface {
            None => {
                if let Some(current) = current {
                    let _guard = FramebufferBindingGuard::new(context.as_ref());
                    bind_buffer(context.as_ref(), self.framebuffer_id);
                    current.detach_as_color(0, 0, 0);
                    self.desc.color_attachments.remove(&0);
                }
            }
            Some(texture) => {
                let _guard = FramebufferBindingGuard::new(context.as_ref());
                bind_buffer(context.as_ref(), self.framebuffer_id);
                self.attach_as_color(texture.as_ref(), 0, 0, 0);
                self.desc.color_attachments.entry(0).or_default().texture = Some(Arc::clone(texture));
            }
        }

        surface
    }

    /// Full extent of color attachment 0
    pub fn viewport(&self) -> Viewport {
        let Some(texture) = self.color_attachment_ref(0) else {
            glrt_violation!(SOURCE, "No color attachment at index 0");
            return Viewport::default();
        };
        let size = texture.size();
        Viewport::new(0.0, 0.0, size.width as f32, size.height as f32)
    }

    // ===== RENDER PASS =====

    /// Bind for drawing and apply `render_pass` load actions
    pub fn bind(&mut self, render_pass: &RenderPassDesc) {
        self.render_pass = render_pass.clone();
        let context = Arc::clone(&self.context);

        bind_buffer(context.as_ref(), self.framebuffer_id);
        // GL_FRAMEBUFFER_SRGB is a single switch, driven by attachment 0
        update_srgb(context.as_ref(), self.color_attachment_ref(0).map(|t| t.as_ref()));

        for index in self.color_attachment_indices() {
            let Some(texture) = self.color_attachment(index) else {
                continue;
            };

            // Cube maps render into the face selected by the pass
            if texture.texture_type() == TextureType::Cube {
                let Some(pass) = render_pass.color_attachments.get(index) else {
                    glrt_violation!(SOURCE, "Render pass has no color attachment {}", index);
                    continue;
                };
                self.attach_as_color(texture.as_ref(), index as u32, pass.layer, pass.mip_level);
            }
        }

        let present = self.present_attachments();
        if present.stencil {
            context.enable(gl::STENCIL_TEST);
        }
        apply_clears(context.as_ref(), render_pass, present);
    }

    /// End the pass: discard attachments whose store action allows it
    pub fn unbind(&self) {
        let present = self.present_attachments();
        let attachments = discardable_attachments(&self.render_pass, present);

        if present.stencil {
            self.context.disable(gl::STENCIL_TEST);
        }
        pass_ops::invalidate(self.context.as_ref(), &attachments);
    }

    // ===== READBACK =====

    /// Read a region of color attachment `index` (must be 0) into `pixels`
    pub fn copy_bytes_color_attachment(
        &self,
        index: usize,
        pixels: &mut [u8],
        range: &TextureRangeDesc,
        bytes_per_row: usize,
    ) {
        readback::copy_bytes_color_attachment(
            self.context.as_ref(),
            self.framebuffer_id,
            self.color_attachment_ref(0),
            index,
            pixels,
            range,
            bytes_per_row,
        );
    }

    /// # Errors
    ///
    /// Always `Unimplemented`.
    pub fn copy_bytes_depth_attachment(
        &self,
        _pixels: &mut [u8],
        _range: &TextureRangeDesc,
        _bytes_per_row: usize,
    ) -> Result<()> {
        glrt_bail!(SOURCE, Unimplemented, "copy_bytes_depth_attachment");
    }

    /// # Errors
    ///
    /// Always `Unimplemented`.
    pub fn copy_bytes_stencil_attachment(
        &self,
        _pixels: &mut [u8],
        _range: &TextureRangeDesc,
        _bytes_per_row: usize,
    ) -> Result<()> {
        glrt_bail!(SOURCE, Unimplemented, "copy_bytes_stencil_attachment");
    }

    /// Copy a region of color attachment `index` (must be 0) into `dest_texture`
    pub fn copy_texture_color_attachment(
        &self,
        index: usize,
        dest_texture: &dyn Texture,
        range: &TextureRangeDesc,
    ) {
        readback::copy_texture_color_attachment(
            self.context.as_ref(),
            self.framebuffer_id,
            self.color_attachment_ref(0),
            index,
            dest_texture,
            range,
        );
    }
}

impl Drop for CustomFramebuffer {
    fn drop(&mut self) {
        if self.framebuffer_id != 0 {
            self.context.delete_framebuffer(self.framebuffer_id);
            glrt_debug!(SOURCE, "Framebuffer {} deleted", self.framebuffer_id);
        }
    }
}

#[cfg(test)]
#[path = "custom_framebuffer_tests.rs"]
mod tests;
