/// Framebuffer - closed set of render target variants behind one interface

use std::sync::Arc;
use crate::context::gl::GLuint;
use crate::context::GlContext;
use crate::error::Result;
use crate::framebuffer::{CurrentFramebuffer, CustomFramebuffer, FramebufferDesc, RenderPassDesc};
use crate::texture::{Texture, TextureRangeDesc};

/// Rectangle in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// A render target: owned by this layer or wrapping the current binding
pub enum Framebuffer {
    Custom(CustomFramebuffer),
    Current(CurrentFramebuffer),
}

impl Framebuffer {
    /// Create and initialize a framebuffer object from `desc`
    ///
    /// # Errors
    ///
    /// See `CustomFramebuffer::initialize`.
    pub fn create_custom(context: Arc<dyn GlContext>, desc: &FramebufferDesc) -> Result<Self> {
        let mut framebuffer = CustomFramebuffer::new(context);
        framebuffer.initialize(desc)?;
        Ok(Framebuffer::Custom(framebuffer))
    }

    /// Wrap the framebuffer currently bound on `context`
    pub fn current(context: Arc<dyn GlContext>) -> Self {
        Framebuffer::Current(CurrentFramebuffer::new(context))
    }

    pub fn as_custom(&self) -> Option<&CustomFramebuffer> {
        match self {
            Framebuffer::Custom(framebuffer) => Some(framebuffer),
            Framebuffer::Current(_) => None,
        }
    }

    pub fn framebuffer_id(&self) -> GLuint {
        match self {
            Framebuffer::Custom(fb) => fb.framebuffer_id(),
            Framebuffer::Current(fb) => fb.framebuffer_id(),
        }
    }

    pub fn color_attachment_indices(&self) -> Vec<usize> {
        match self {
            Framebuffer::Custom(fb) => fb.color_attachment_indices(),
            Framebuffer::Current(fb) => fb.color_attachment_indices(),
        }
    }

    pub fn color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>> {
        match self {
            Framebuffer::Custom(fb) => fb.color_attachment(index),
            Framebuffer::Current(fb) => fb.color_attachment(index),
        }
    }

    pub fn resolve_color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>> {
        match self {
            Framebuffer::Custom(fb) => fb.resolve_color_attachment(index),
            Framebuffer::Current(fb) => fb.resolve_color_attachment(index),
        }
    }

    pub fn depth_attachment(&self) -> Option<Arc<dyn Texture>> {
        match self {
            Framebuffer::Custom(fb) => fb.depth_attachment(),
            Framebuffer::Current(fb) => fb.depth_attachment(),
        }
    }

    pub fn resolve_depth_attachment(&self) -> Option<Arc<dyn Texture>> {
        match self {
            Framebuffer::Custom(fb) => fb.resolve_depth_attachment(),
            Framebuffer::Current(fb) => fb.resolve_depth_attachment(),
        }
    }

    pub fn stencil_attachment(&self) -> Option<Arc<dyn Texture>> {
        match self {
            Framebuffer::Custom(fb) => fb.stencil_attachment(),
            Framebuffer::Current(fb) => fb.stencil_attachment(),
        }
    }

    pub fn update_drawable(&mut self, surface: Option<Arc<dyn Texture>>) -> Option<Arc<dyn Texture>> {
        match self {
            Framebuffer::Custom(fb) => fb.update_drawable(surface),
            Framebuffer::Current(fb) => fb.update_drawable(surface),
        }
    }

    pub fn viewport(&self) -> Viewport {
        match self {
            Framebuffer::Custom(fb) => fb.viewport(),
            Framebuffer::Current(fb) => fb.viewport(),
        }
    }

    pub fn bind(&mut self, render_pass: &RenderPassDesc) {
        match self {
            Framebuffer::Custom(fb) => fb.bind(render_pass),
            Framebuffer::Current(fb) => fb.bind(render_pass),
        }
    }

    pub fn unbind(&self) {
        match self {
            Framebuffer::Custom(fb) => fb.unbind(),
            Framebuffer::Current(fb) => fb.unbind(),
        }
    }

    pub fn copy_bytes_color_attachment(
        &self,
        index: usize,
        pixels: &mut [u8],
        range: &TextureRangeDesc,
        bytes_per_row: usize,
    ) {
        match self {
            Framebuffer::Custom(fb) => fb.copy_bytes_color_attachment(index, pixels, range, bytes_per_row),
            Framebuffer::Current(fb) => fb.copy_bytes_color_attachment(index, pixels, range, bytes_per_row),
        }
    }

    pub fn copy_bytes_depth_attachment(
        &self,
        pixels: &mut [u8],
        range: &TextureRangeDesc,
        bytes_per_row: usize,
    ) -> Result<()> {
        match self {
            Framebuffer::Custom(fb) => fb.copy_bytes_depth_attachment(pixels, range, bytes_per_row),
            Framebuffer::Current(fb) => fb.copy_bytes_depth_attachment(pixels, range, bytes_per_row),
        }
    }

    pub fn copy_bytes_stencil_attachment(
        &self,
        pixels: &mut [u8],
        range: &TextureRangeDesc,
        bytes_per_row: usize,
    ) -> Result<()> {
        match self {
            Framebuffer::Custom(fb) => fb.copy_bytes_stencil_attachment(pixels, range, bytes_per_row),
            Framebuffer::Current(fb) => fb.copy_bytes_stencil_attachment(pixels, range, bytes_per_row),
        }
    }

    pub fn copy_texture_color_attachment(
        &self,
        index: usize,
        dest_texture: &dyn Texture,
        range: &TextureRangeDesc,
    ) {
        match self {
            Framebuffer::Custom(fb) => fb.copy_texture_color_attachment(index, dest_texture, range),
            Framebuffer::Current(fb) => fb.copy_texture_color_attachment(index, dest_texture, range),
        }
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
