/// Framebuffer - GL framebuffer object
///
/// Textures are attached by name only and stay owned by the caller.
/// Renderbuffers are moved into the framebuffer and released when they are
/// removed, replaced, or when the framebuffer is dropped.

use std::rc::Rc;
use rustc_hash::FxHashMap;

use crate::device::{consts, Device, Name, NULL_NAME};
use crate::error::{Error, Result};
use crate::gls_check;
use super::kinds::FramebufferKind;
use super::object::Object;
use super::renderbuffer::Renderbuffer;
use super::texture::Texture;

/// GL framebuffer object (always bound to FRAMEBUFFER)
pub struct Framebuffer<D: Device> {
    object: Object<FramebufferKind, D>,
    renderbuffers: FxHashMap<u32, Renderbuffer<D>>,
}

impl<D: Device> Framebuffer<D> {
    pub fn new(device: Rc<D>) -> Self {
        Self {
            object: Object::new(device),
            renderbuffers: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.object.name()
    }

    pub fn bind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_framebuffer(consts::FRAMEBUFFER, self.name()));
    }

    pub fn unbind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_framebuffer(consts::FRAMEBUFFER, NULL_NAME));
    }

    /// Attach `level` of a non-cube-map texture
    pub fn attach_texture<const TARGET: u32>(&self, attachment: u32, texture: &Texture<D, TARGET>, level: i32) {
        debug_assert_ne!(TARGET, consts::TEXTURE_CUBE_MAP, "use attach_texture_2d for cube map faces");

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.framebuffer_texture(consts::FRAMEBUFFER, attachment, texture.name(), level)
        );
        self.unbind();
    }

    /// Attach one face (`TEXTURE_CUBE_MAP_POSITIVE_X` ..) of a cube map
    pub fn attach_texture_2d(
        &self,
        attachment: u32,
        face: u32,
        texture: &Texture<D, { consts::TEXTURE_CUBE_MAP }>,
        level: i32,
    ) {
        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.framebuffer_texture_2d(consts::FRAMEBUFFER, attachment, face, texture.name(), level)
        );
        self.unbind();
    }

    /// Attach one layer of an array or 3D texture
    pub fn attach_texture_layer<const TARGET: u32>(
        &self,
        attachment: u32,
        texture: &Texture<D, TARGET>,
        level: i32,
        layer: i32,
    ) {
        debug_assert_ne!(TARGET, consts::TEXTURE_CUBE_MAP, "use attach_texture_2d for cube map faces");

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.framebuffer_texture_layer(consts::FRAMEBUFFER, attachment, texture.name(), level, layer)
        );
        self.unbind();
    }

    pub fn detach_texture(&self, attachment: u32) {
        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.framebuffer_texture(consts::FRAMEBUFFER, attachment, NULL_NAME, 0)
        );
        self.unbind();
    }

    /// Attach `renderbuffer` and take ownership of it
    ///
    /// A renderbuffer previously owned for the same attachment is released.
    pub fn add_renderbuffer(&mut self, attachment: u32, renderbuffer: Renderbuffer<D>) {
        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.framebuffer_renderbuffer(consts::FRAMEBUFFER, attachment, renderbuffer.name())
        );
        self.unbind();
        self.renderbuffers.insert(attachment, renderbuffer);
    }

    /// Detach and release the renderbuffer owned for `attachment`
    pub fn remove_renderbuffer(&mut self, attachment: u32) {
        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.framebuffer_renderbuffer(consts::FRAMEBUFFER, attachment, NULL_NAME)
        );
        self.unbind();
        self.renderbuffers.remove(&attachment);
    }

    /// Renderbuffer owned for `attachment`, if any
    pub fn renderbuffer(&self, attachment: u32) -> Option<&Renderbuffer<D>> {
        self.renderbuffers.get(&attachment)
    }

    /// glCheckFramebufferStatus
    pub fn status(&self) -> u32 {
        let device = self.object.device();
        self.bind();
        let status = gls_check!(device, device.check_framebuffer_status(consts::FRAMEBUFFER));
        self.unbind();
        status
    }

    pub fn is_complete(&self) -> bool {
        self.status() == consts::FRAMEBUFFER_COMPLETE
    }

    /// `Ok` if complete, otherwise `Error::InvalidResource` with the status
    pub fn check_complete(&self) -> Result<()> {
        match self.status() {
            consts::FRAMEBUFFER_COMPLETE => Ok(()),
            status => Err(Error::InvalidResource(format!(
                "framebuffer {} incomplete (status 0x{:04X})",
                self.name(),
                status
            ))),
        }
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
