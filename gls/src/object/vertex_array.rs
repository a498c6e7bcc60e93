/// VertexArray - GL vertex array object
///
/// Attribute bindings are recorded into the VAO: each call binds the VAO,
/// sets up the attribute against the given buffer and unbinds everything
/// again.

use std::rc::Rc;

use crate::device::{consts, Device, Name, NULL_NAME};
use crate::gls_check;
use super::buffer::Buffer;
use super::kinds::VertexArrayKind;
use super::object::Object;
use super::program::Program;

/// Layout of one vertex attribute inside a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeFormat {
    /// Components per vertex (1-4)
    pub size: i32,
    /// Component type (FLOAT, UNSIGNED_BYTE, ...)
    pub ty: u32,
    pub normalized: bool,
    /// Byte stride between consecutive vertices (0 = tightly packed)
    pub stride: i32,
    /// Byte offset of the first component
    pub offset: usize,
}

impl AttributeFormat {
    /// Tightly packed float attribute with `size` components
    pub fn float(size: i32) -> Self {
        Self {
            size,
            ty: consts::FLOAT,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }
}

/// GL vertex array object
pub struct VertexArray<D: Device> {
    object: Object<VertexArrayKind, D>,
}

impl<D: Device> VertexArray<D> {
    pub fn new(device: Rc<D>) -> Self {
        Self {
            object: Object::new(device),
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.object.name()
    }

    pub fn bind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_vertex_array(self.name()));
    }

    pub fn unbind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_vertex_array(NULL_NAME));
    }

    /// Source attribute `location` from `buffer` with the given layout
    pub fn bind_attribute<const TARGET: u32, const USAGE: u32>(
        &self,
        location: u32,
        buffer: &Buffer<D, TARGET, USAGE>,
        format: AttributeFormat,
    ) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.bind_buffer(consts::ARRAY_BUFFER, buffer.name()));
        gls_check!(device, device.enable_vertex_attrib_array(location));
        gls_check!(
            device,
            device.vertex_attrib_pointer(
                location,
                format.size,
                format.ty,
                format.normalized,
                format.stride,
                format.offset
            )
        );
        gls_check!(device, device.bind_buffer(consts::ARRAY_BUFFER, NULL_NAME));
        self.unbind();
    }

    /// Same as `bind_attribute`, resolving the location by name in `program`
    ///
    /// Attributes the program does not have are ignored.
    pub fn bind_program_attribute<const TARGET: u32, const USAGE: u32>(
        &self,
        program: &Program<D>,
        attribute: &str,
        buffer: &Buffer<D, TARGET, USAGE>,
        format: AttributeFormat,
    ) {
        let location = program.attribute_location(attribute);
        if location < 0 {
            return;
        }
        self.bind_attribute(location as u32, buffer, format);
    }

    /// Disable attribute `location`
    pub fn unbind_attribute(&self, location: u32) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.disable_vertex_attrib_array(location));
        self.unbind();
    }

    /// Disable the attribute named `attribute` in `program`, if present
    pub fn unbind_program_attribute(&self, program: &Program<D>, attribute: &str) {
        let location = program.attribute_location(attribute);
        if location < 0 {
            return;
        }
        self.unbind_attribute(location as u32);
    }

    /// Disable every attribute slot up to MAX_VERTEX_ATTRIBS
    pub fn clear_attribute_bindings(&self) {
        let device = self.object.device();
        let max_attributes = gls_check!(device, device.get_integer(consts::MAX_VERTEX_ATTRIBS));
        self.bind();
        for location in 0..max_attributes.max(0) as u32 {
            gls_check!(device, device.disable_vertex_attrib_array(location));
        }
        self.unbind();
    }

    /// Record `buffer` as this VAO's element array buffer
    pub fn bind_index_buffer<const TARGET: u32, const USAGE: u32>(&self, buffer: &Buffer<D, TARGET, USAGE>) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.bind_buffer(consts::ELEMENT_ARRAY_BUFFER, buffer.name()));
        self.unbind();
        // Clear the global binding only once the VAO no longer captures it
        gls_check!(device, device.bind_buffer(consts::ELEMENT_ARRAY_BUFFER, NULL_NAME));
    }

    pub fn unbind_index_buffer(&self) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.bind_buffer(consts::ELEMENT_ARRAY_BUFFER, NULL_NAME));
        self.unbind();
    }
}

#[cfg(test)]
#[path = "vertex_array_tests.rs"]
mod tests;
