/// Shader - GL shader object of a fixed stage

use std::rc::Rc;

use crate::device::{consts, Device, Name};
use crate::{gls_check, gls_warn};
use super::kinds::ShaderKind;
use super::object::Object;

/// GL shader object of stage `TYPE` (VERTEX_SHADER, FRAGMENT_SHADER, ...)
pub struct Shader<D: Device, const TYPE: u32> {
    object: Object<ShaderKind<TYPE>, D>,
}

pub type VertexShader<D> = Shader<D, { consts::VERTEX_SHADER }>;
pub type FragmentShader<D> = Shader<D, { consts::FRAGMENT_SHADER }>;
pub type GeometryShader<D> = Shader<D, { consts::GEOMETRY_SHADER }>;
pub type ComputeShader<D> = Shader<D, { consts::COMPUTE_SHADER }>;

/// Anything that can be attached to a program for linking
///
/// Lets `Program::link` take shaders of different stages in one slice.
pub trait AttachedShader {
    fn shader_name(&self) -> Name;
}

impl<D: Device, const TYPE: u32> Shader<D, TYPE> {
    pub fn new(device: Rc<D>) -> Self {
        Self {
            object: Object::new(device),
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.object.name()
    }

    /// Upload `source` and compile it
    ///
    /// Returns the compile status. In debug builds a non-empty info log is
    /// echoed as a warning whether or not compilation succeeded.
    pub fn compile(&self, source: &str) -> bool {
        let device = self.object.device();
        gls_check!(device, device.shader_source(self.name(), source));
        gls_check!(device, device.compile_shader(self.name()));
        let status = gls_check!(device, device.shader_compile_status(self.name()));

        if cfg!(debug_assertions) {
            let info_log = self.info_log();
            if !info_log.is_empty() {
                gls_warn!("gls::Shader", "{}", info_log);
            }
        }

        status
    }

    /// Info log of the last compilation (empty if none)
    pub fn info_log(&self) -> String {
        let device = self.object.device();
        gls_check!(device, device.shader_info_log(self.name()))
    }
}

impl<D: Device, const TYPE: u32> AttachedShader for Shader<D, TYPE> {
    fn shader_name(&self) -> Name {
        self.name()
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
