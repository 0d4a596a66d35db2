//! Shared test utilities for integration tests
//!
//! `RecordingContext` is a minimal in-memory GL driver: it hands out names,
//! tracks framebuffer/render buffer bindings and records the name of every
//! entry point called. Unit tests inside the crate use the richer mock.

#![allow(dead_code)]

use gl_render_target::glrt::context::gl::{self, GLbitfield, GLenum, GLint, GLsizei, GLuint};
use gl_render_target::glrt::context::{DeviceFeatures, GlContext};
use std::cell::{Cell, RefCell};

pub struct RecordingContext {
    features: DeviceFeatures,
    calls: RefCell<Vec<&'static str>>,
    next_name: Cell<GLuint>,
    read_framebuffer: Cell<GLuint>,
    draw_framebuffer: Cell<GLuint>,
    renderbuffer: Cell<GLuint>,
    status: Cell<GLenum>,
}

impl RecordingContext {
    pub fn new(features: DeviceFeatures) -> Self {
        Self {
            features,
            calls: RefCell::new(Vec::new()),
            next_name: Cell::new(1),
            read_framebuffer: Cell::new(0),
            draw_framebuffer: Cell::new(0),
            renderbuffer: Cell::new(0),
            status: Cell::new(gl::FRAMEBUFFER_COMPLETE),
        }
    }

    pub fn set_status(&self, status: GLenum) {
        self.status.set(status);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|call| **call == name).count()
    }

    pub fn bindings(&self) -> (GLuint, GLuint, GLuint) {
        (self.read_framebuffer.get(), self.draw_framebuffer.get(), self.renderbuffer.get())
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }

    fn gen(&self, name: &'static str) -> GLuint {
        self.record(name);
        let id = self.next_name.get();
        self.next_name.set(id + 1);
        id
    }
}

impl GlContext for RecordingContext {
    fn features(&self) -> DeviceFeatures {
        self.features
    }

    fn get_integerv(&self, pname: GLenum, data: &mut [GLint]) {
        self.record("get_integerv");
        match pname {
            gl::FRAMEBUFFER_BINDING => data[0] = self.draw_framebuffer.get() as GLint,
            gl::READ_FRAMEBUFFER_BINDING => data[0] = self.read_framebuffer.get() as GLint,
            gl::RENDERBUFFER_BINDING => data[0] = self.renderbuffer.get() as GLint,
            gl::VIEWPORT => data[..4].copy_from_slice(&[0, 0, 1280, 720]),
            _ => data[0] = 0,
        }
    }

    fn check_framebuffer_status(&self, _target: GLenum) -> GLenum {
        self.record("check_framebuffer_status");
        self.status.get()
    }

    fn gen_framebuffer(&self) -> GLuint {
        self.gen("gen_framebuffer")
    }

    fn delete_framebuffer(&self, _framebuffer: GLuint) {
        self.record("delete_framebuffer");
    }

    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        self.record("bind_framebuffer");
        match target {
            gl::READ_FRAMEBUFFER => self.read_framebuffer.set(framebuffer),
            gl::DRAW_FRAMEBUFFER => self.draw_framebuffer.set(framebuffer),
            _ => {
                self.read_framebuffer.set(framebuffer);
                self.draw_framebuffer.set(framebuffer);
            }
        }
    }

    fn framebuffer_texture_2d(&self, _: GLenum, _: GLenum, _: GLenum, _: GLuint, _: GLint) {
        self.record("framebuffer_texture_2d");
    }

    fn framebuffer_texture_layer(&self, _: GLenum, _: GLenum, _: GLuint, _: GLint, _: GLint) {
        self.record("framebuffer_texture_layer");
    }

    fn framebuffer_renderbuffer(&self, _: GLenum, _: GLenum, _: GLenum, _: GLuint) {
        self.record("framebuffer_renderbuffer");
    }

    fn framebuffer_texture_multiview(&self, _: GLenum, _: GLenum, _: GLuint, _: GLint, _: GLint, _: GLsizei) {
        self.record("framebuffer_texture_multiview");
    }

    fn framebuffer_texture_multisample_multiview(
        &self, _: GLenum, _: GLenum, _: GLuint, _: GLint, _: GLsizei, _: GLint, _: GLsizei,
    ) {
        self.record("framebuffer_texture_multisample_multiview");
    }

    fn draw_buffers(&self, _buffers: &[GLenum]) {
        self.record("draw_buffers");
    }

    fn invalidate_framebuffer(&self, _target: GLenum, _attachments: &[GLenum]) {
        self.record("invalidate_framebuffer");
    }

    fn gen_renderbuffer(&self) -> GLuint {
        self.gen("gen_renderbuffer")
    }

    fn delete_renderbuffer(&self, _renderbuffer: GLuint) {
        self.record("delete_renderbuffer");
    }

    fn bind_renderbuffer(&self, _target: GLenum, renderbuffer: GLuint) {
        self.record("bind_renderbuffer");
        self.renderbuffer.set(renderbuffer);
    }

    fn renderbuffer_storage(&self, _: GLenum, _: GLenum, _: GLsizei, _: GLsizei) {
        self.record("renderbuffer_storage");
    }

    fn renderbuffer_storage_multisample(&self, _: GLenum, _: GLsizei, _: GLenum, _: GLsizei, _: GLsizei) {
        self.record("renderbuffer_storage_multisample");
    }

    fn gen_texture(&self) -> GLuint {
        self.gen("gen_texture")
    }

    fn delete_texture(&self, _texture: GLuint) {
        self.record("delete_texture");
    }

    fn bind_texture(&self, _target: GLenum, _texture: GLuint) {
        self.record("bind_texture");
    }

    fn tex_storage_2d(&self, _: GLenum, _: GLsizei, _: GLenum, _: GLsizei, _: GLsizei) {
        self.record("tex_storage_2d");
    }

    fn tex_storage_2d_multisample(&self, _: GLenum, _: GLsizei, _: GLenum, _: GLsizei, _: GLsizei) {
        self.record("tex_storage_2d_multisample");
    }

    fn tex_storage_3d(&self, _: GLenum, _: GLsizei, _: GLenum, _: GLsizei, _: GLsizei, _: GLsizei) {
        self.record("tex_storage_3d");
    }

    fn copy_tex_sub_image_2d(
        &self, _: GLenum, _: GLint, _: GLint, _: GLint, _: GLint, _: GLint, _: GLsizei, _: GLsizei,
    ) {
        self.record("copy_tex_sub_image_2d");
    }

    fn enable(&self, _cap: GLenum) {
        self.record("enable");
    }

    fn disable(&self, _cap: GLenum) {
        self.record("disable");
    }

    fn color_mask(&self, _: bool, _: bool, _: bool, _: bool) {
        self.record("color_mask");
    }

    fn depth_mask(&self, _flag: bool) {
        self.record("depth_mask");
    }

    fn stencil_mask(&self, _mask: GLuint) {
        self.record("stencil_mask");
    }

    fn clear_color(&self, _: f32, _: f32, _: f32, _: f32) {
        self.record("clear_color");
    }

    fn clear_depth(&self, _depth: f32) {
        self.record("clear_depth");
    }

    fn clear_stencil(&self, _stencil: GLint) {
        self.record("clear_stencil");
    }

    fn clear(&self, _mask: GLbitfield) {
        self.record("clear");
    }

    fn pixel_store_i(&self, _pname: GLenum, _param: GLint) {
        self.record("pixel_store_i");
    }

    fn flush(&self) {
        self.record("flush");
    }

    fn read_pixels(&self, _: GLint, _: GLint, _: GLsizei, _: GLsizei, _: GLenum, _: GLenum, pixels: &mut [u8]) {
        self.record("read_pixels");
        pixels.fill(0xAB);
    }
}
