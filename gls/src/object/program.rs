/// Program - GL program object with cached introspection
///
/// After a successful link the active attributes, uniforms and uniform blocks
/// are queried once and kept in hash maps, so lookups by name never touch
/// the driver. Lookups of names the linker did not keep return the GL
/// "absent" values: location -1, type 0, size 0, block index INVALID_INDEX.

use std::rc::Rc;
use rustc_hash::FxHashMap;

use crate::device::{consts, ActiveUniformBlock, ActiveVariable, Device, Name, NULL_NAME};
use crate::{gls_check, gls_warn};
use super::kinds::ProgramKind;
use super::object::Object;
use super::shader::AttachedShader;

/// Value that can be written to a uniform location
///
/// Implemented for `f32`/`i32`/`u32`, their 2-4 element arrays, and the
/// matching glam vector and square matrix types.
pub trait UniformValue {
    fn apply<D: Device + ?Sized>(&self, device: &D, location: i32);
}

macro_rules! impl_uniform_scalar {
    ($ty:ty, $method:ident) => {
        impl UniformValue for $ty {
            fn apply<D: Device + ?Sized>(&self, device: &D, location: i32) {
                device.$method(location, 1, &[*self]);
            }
        }

        impl<const N: usize> UniformValue for [$ty; N] {
            fn apply<D: Device + ?Sized>(&self, device: &D, location: i32) {
                debug_assert!((1..=4).contains(&N));
                device.$method(location, N as u32, self);
            }
        }
    };
}

impl_uniform_scalar!(f32, uniform_f32);
impl_uniform_scalar!(i32, uniform_i32);
impl_uniform_scalar!(u32, uniform_u32);

macro_rules! impl_uniform_glam_vector {
    ($ty:ty, $method:ident, $components:expr) => {
        impl UniformValue for $ty {
            fn apply<D: Device + ?Sized>(&self, device: &D, location: i32) {
                device.$method(location, $components, &self.to_array());
            }
        }
    };
}

impl_uniform_glam_vector!(glam::Vec2, uniform_f32, 2);
impl_uniform_glam_vector!(glam::Vec3, uniform_f32, 3);
impl_uniform_glam_vector!(glam::Vec4, uniform_f32, 4);
impl_uniform_glam_vector!(glam::IVec2, uniform_i32, 2);
impl_uniform_glam_vector!(glam::IVec3, uniform_i32, 3);
impl_uniform_glam_vector!(glam::IVec4, uniform_i32, 4);
impl_uniform_glam_vector!(glam::UVec2, uniform_u32, 2);
impl_uniform_glam_vector!(glam::UVec3, uniform_u32, 3);
impl_uniform_glam_vector!(glam::UVec4, uniform_u32, 4);

macro_rules! impl_uniform_glam_matrix {
    ($ty:ty, $dimension:expr) => {
        impl UniformValue for $ty {
            fn apply<D: Device + ?Sized>(&self, device: &D, location: i32) {
                device.uniform_matrix_f32(location, $dimension, false, &self.to_cols_array());
            }
        }
    };
}

impl_uniform_glam_matrix!(glam::Mat2, 2);
impl_uniform_glam_matrix!(glam::Mat3, 3);
impl_uniform_glam_matrix!(glam::Mat4, 4);

/// GL program object
pub struct Program<D: Device> {
    object: Object<ProgramKind, D>,
    attributes: FxHashMap<String, ActiveVariable>,
    uniforms: FxHashMap<String, ActiveVariable>,
    uniform_blocks: FxHashMap<String, ActiveUniformBlock>,
}

impl<D: Device> Program<D> {
    pub fn new(device: Rc<D>) -> Self {
        Self {
            object: Object::new(device),
            attributes: FxHashMap::default(),
            uniforms: FxHashMap::default(),
            uniform_blocks: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.object.name()
    }

    /// Attach `shaders`, link, detach them again
    ///
    /// Returns the link status. On success the introspection cache is
    /// rebuilt. In debug builds a non-empty info log is echoed as a warning.
    pub fn link(&mut self, shaders: &[&dyn AttachedShader]) -> bool {
        let device = self.object.device();
        let program = self.name();

        for shader in shaders {
            gls_check!(device, device.attach_shader(program, shader.shader_name()));
        }
        gls_check!(device, device.link_program(program));
        for shader in shaders {
            gls_check!(device, device.detach_shader(program, shader.shader_name()));
        }

        let status = gls_check!(device, device.program_link_status(program));

        if cfg!(debug_assertions) {
            let info_log = self.info_log();
            if !info_log.is_empty() {
                gls_warn!("gls::Program", "{}", info_log);
            }
        }

        if status {
            self.introspect();
        }
        status
    }

    /// Info log of the last link (empty if none)
    pub fn info_log(&self) -> String {
        let device = self.object.device();
        gls_check!(device, device.program_info_log(self.name()))
    }

    /// Make this the current program
    pub fn use_program(&self) {
        let device = self.object.device();
        gls_check!(device, device.use_program(self.name()));
    }

    /// Clear the current program
    pub fn unuse(&self) {
        let device = self.object.device();
        gls_check!(device, device.use_program(NULL_NAME));
    }

    // ===== INTROSPECTION =====

    fn introspect(&mut self) {
        let device = self.object.device().clone();
        let program = self.name();

        self.attributes = gls_check!(device, device.active_attributes(program))
            .into_iter()
            .map(|attribute| (attribute.name.clone(), attribute))
            .collect();
        self.uniforms = gls_check!(device, device.active_uniforms(program))
            .into_iter()
            .map(|uniform| (uniform.name.clone(), uniform))
            .collect();
        self.uniform_blocks = gls_check!(device, device.active_uniform_blocks(program))
            .into_iter()
            .map(|block| (block.name.clone(), block))
            .collect();
    }

    /// Attribute location, -1 if absent
    pub fn attribute_location(&self, name: &str) -> i32 {
        self.attributes.get(name).map_or(-1, |a| a.location)
    }

    /// Attribute GL type, 0 if absent
    pub fn attribute_type(&self, name: &str) -> u32 {
        self.attributes.get(name).map_or(0, |a| a.gl_type)
    }

    /// Attribute array size, 0 if absent
    pub fn attribute_size(&self, name: &str) -> i32 {
        self.attributes.get(name).map_or(0, |a| a.size)
    }

    /// Uniform location, -1 if absent
    pub fn uniform_location(&self, name: &str) -> i32 {
        self.uniforms.get(name).map_or(-1, |u| u.location)
    }

    /// Uniform GL type, 0 if absent
    pub fn uniform_type(&self, name: &str) -> u32 {
        self.uniforms.get(name).map_or(0, |u| u.gl_type)
    }

    /// Uniform array size, 0 if absent
    pub fn uniform_size(&self, name: &str) -> i32 {
        self.uniforms.get(name).map_or(0, |u| u.size)
    }

    /// Uniform block index, INVALID_INDEX if absent
    pub fn uniform_block_index(&self, name: &str) -> u32 {
        self.uniform_blocks.get(name).map_or(consts::INVALID_INDEX, |b| b.index)
    }

    /// Uniform block data size in bytes, 0 if absent
    pub fn uniform_block_size(&self, name: &str) -> i32 {
        self.uniform_blocks.get(name).map_or(0, |b| b.data_size)
    }

    // ===== UNIFORMS =====

    /// Write `value` to the uniform `name`
    ///
    /// The program is made current for the call and the binding cleared
    /// afterwards. Absent names resolve to location -1, which GL ignores.
    pub fn set_uniform<V: UniformValue>(&self, name: &str, value: V) {
        let device = self.object.device();
        let location = self.uniform_location(name);
        self.use_program();
        gls_check!(device, value.apply(&**device, location));
        self.unuse();
    }

    /// Write `values.len() / 4` 2x2 matrices
    pub fn set_uniform_matrix2(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix(name, 2, transpose, values);
    }

    /// Write `values.len() / 9` 3x3 matrices
    pub fn set_uniform_matrix3(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix(name, 3, transpose, values);
    }

    /// Write `values.len() / 16` 4x4 matrices
    pub fn set_uniform_matrix4(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix(name, 4, transpose, values);
    }

    /// Write `values.len() / 6` matrices of 2 columns and 3 rows
    pub fn set_uniform_matrix2x3(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix_nonsquare(name, 2, 3, transpose, values);
    }

    pub fn set_uniform_matrix2x4(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix_nonsquare(name, 2, 4, transpose, values);
    }

    pub fn set_uniform_matrix3x2(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix_nonsquare(name, 3, 2, transpose, values);
    }

    pub fn set_uniform_matrix3x4(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix_nonsquare(name, 3, 4, transpose, values);
    }

    pub fn set_uniform_matrix4x2(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix_nonsquare(name, 4, 2, transpose, values);
    }

    /// Write `values.len() / 12` matrices of 4 columns and 3 rows
    pub fn set_uniform_matrix4x3(&self, name: &str, transpose: bool, values: &[f32]) {
        self.set_uniform_matrix_nonsquare(name, 4, 3, transpose, values);
    }

    fn set_uniform_matrix(&self, name: &str, dimension: u32, transpose: bool, values: &[f32]) {
        debug_assert!(values.len() % (dimension * dimension) as usize == 0);

        let device = self.object.device();
        let location = self.uniform_location(name);
        self.use_program();
        gls_check!(device, device.uniform_matrix_f32(location, dimension, transpose, values));
        self.unuse();
    }

    fn set_uniform_matrix_nonsquare(&self, name: &str, columns: u32, rows: u32, transpose: bool, values: &[f32]) {
        debug_assert!(values.len() % (columns * rows) as usize == 0);

        let device = self.object.device();
        let location = self.uniform_location(name);
        self.use_program();
        gls_check!(
            device,
            device.uniform_matrix_nonsquare_f32(location, columns, rows, transpose, values)
        );
        self.unuse();
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
