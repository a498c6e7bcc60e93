/// Renderbuffer - GL renderbuffer object with immutable storage
///
/// Storage is allocated once at construction. Framebuffers take ownership of
/// renderbuffers through `Framebuffer::add_renderbuffer`.

use std::rc::Rc;

use crate::device::{consts, Device, Name, NULL_NAME};
use crate::{gls_check, gls_warn};
use super::kinds::RenderbufferKind;
use super::object::Object;

/// GL renderbuffer object
pub struct Renderbuffer<D: Device> {
    object: Object<RenderbufferKind, D>,
    width: i32,
    height: i32,
}

impl<D: Device> Renderbuffer<D> {
    /// Single-sample storage of `internal_format`
    pub fn new(device: Rc<D>, internal_format: u32, width: i32, height: i32) -> Self {
        Self::new_multisample(device, 0, internal_format, width, height)
    }

    /// Multisample storage with `samples` samples per pixel
    ///
    /// Parameters above MAX_SAMPLES or MAX_RENDERBUFFER_SIZE are passed on
    /// to the driver after a warning.
    pub fn new_multisample(device: Rc<D>, samples: i32, internal_format: u32, width: i32, height: i32) -> Self {
        let max_samples = gls_check!(device, device.get_integer(consts::MAX_SAMPLES));
        let max_size = gls_check!(device, device.get_integer(consts::MAX_RENDERBUFFER_SIZE));
        if samples > max_samples {
            gls_warn!("gls::Renderbuffer", "{} samples requested, MAX_SAMPLES is {}", samples, max_samples);
        }
        if width > max_size || height > max_size {
            gls_warn!(
                "gls::Renderbuffer",
                "{}x{} exceeds MAX_RENDERBUFFER_SIZE {}",
                width,
                height,
                max_size
            );
        }

        let renderbuffer = Self {
            object: Object::new(device),
            width,
            height,
        };

        let device = renderbuffer.object.device();
        renderbuffer.bind();
        gls_check!(
            device,
            device.renderbuffer_storage_multisample(samples, internal_format, width, height)
        );
        renderbuffer.unbind();

        renderbuffer
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.object.name()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_renderbuffer(self.name()));
    }

    pub fn unbind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_renderbuffer(NULL_NAME));
    }
}

#[cfg(test)]
#[path = "renderbuffer_tests.rs"]
mod tests;
