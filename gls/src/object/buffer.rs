/// Buffer - GL buffer object with tracked storage size
///
/// Target and usage are const generic parameters, so a vertex buffer and a
/// uniform buffer are different types. Uploads past the current storage
/// grow the buffer: a larger buffer is allocated, the old contents are
/// copied server-side, and the old name is released. The name therefore
/// changes on growth.

use std::rc::Rc;

use crate::device::{consts, Device, Name, NULL_NAME};
use crate::gls_check;
use super::kinds::BufferKind;
use super::object::Object;

/// GL buffer object bound to `TARGET`, allocated with `USAGE`
pub struct Buffer<D: Device, const TARGET: u32 = { consts::ARRAY_BUFFER }, const USAGE: u32 = { consts::DYNAMIC_DRAW }> {
    object: Object<BufferKind, D>,
    size: usize,
}

impl<D: Device, const TARGET: u32, const USAGE: u32> Buffer<D, TARGET, USAGE> {
    /// Generate an empty buffer (no storage allocated)
    pub fn new(device: Rc<D>) -> Self {
        Self {
            object: Object::new(device),
            size: 0,
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.object.name()
    }

    /// Size in bytes requested by the last allocation
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn device(&self) -> &Rc<D> {
        self.object.device()
    }

    /// Bind to `TARGET`, replacing any previous binding
    pub fn bind(&self) {
        let device = self.device();
        gls_check!(device, device.bind_buffer(TARGET, self.name()));
    }

    /// Clear the `TARGET` binding
    pub fn unbind(&self) {
        let device = self.device();
        gls_check!(device, device.bind_buffer(TARGET, NULL_NAME));
    }

    /// Bind `[offset, offset + size)` to the indexed binding point `index` of `TARGET`
    pub fn bind_range(&self, index: u32, offset: usize, size: usize) {
        let device = self.device();
        gls_check!(device, device.bind_buffer_range(TARGET, index, self.name(), offset, size));
    }

    /// Allocate `size` bytes of storage, optionally uploading `data`
    ///
    /// Always orphans the previous storage, even for an equal size. Use
    /// `sub_data` to update in place.
    pub fn data(&mut self, size: usize, data: Option<&[u8]>) {
        debug_assert!(data.map_or(true, |bytes| bytes.len() <= size));
        self.size = size;

        let device = self.device();
        self.bind();
        gls_check!(device, device.buffer_data(TARGET, size, data, USAGE));
        self.unbind();
    }

    /// Allocate storage sized for `values` and upload them
    pub fn data_slice<T: bytemuck::Pod>(&mut self, values: &[T]) {
        let bytes: &[u8] = bytemuck::cast_slice(values);
        self.data(bytes.len(), Some(bytes));
    }

    /// Upload `data` at byte `offset`, growing the buffer if needed
    pub fn sub_data(&mut self, offset: usize, data: &[u8]) {
        let end = offset + data.len();
        if end > self.size {
            self.grow(end);
        }

        let device = self.device();
        self.bind();
        gls_check!(device, device.buffer_sub_data(TARGET, offset, data));
        self.unbind();
    }

    /// Upload `values` at byte `offset`, growing the buffer if needed
    pub fn sub_data_slice<T: bytemuck::Pod>(&mut self, offset: usize, values: &[T]) {
        self.sub_data(offset, bytemuck::cast_slice(values));
    }

    /// Server-side copy of `size` bytes from `source` into this buffer
    ///
    /// `source` may have any target and usage. Grows this buffer if
    /// `write_offset + size` exceeds its storage.
    pub fn copy_sub_data<const SOURCE_TARGET: u32, const SOURCE_USAGE: u32>(
        &mut self,
        source: &Buffer<D, SOURCE_TARGET, SOURCE_USAGE>,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        debug_assert!(size > 0);
        debug_assert!(read_offset + size <= source.size());

        if write_offset + size > self.size {
            self.grow(write_offset + size);
        }

        let device = self.device();
        gls_check!(device, device.bind_buffer(consts::COPY_READ_BUFFER, source.name()));
        gls_check!(device, device.bind_buffer(consts::COPY_WRITE_BUFFER, self.name()));
        gls_check!(
            device,
            device.copy_buffer_sub_data(
                consts::COPY_READ_BUFFER,
                consts::COPY_WRITE_BUFFER,
                read_offset,
                write_offset,
                size
            )
        );
        gls_check!(device, device.bind_buffer(consts::COPY_READ_BUFFER, NULL_NAME));
        gls_check!(device, device.bind_buffer(consts::COPY_WRITE_BUFFER, NULL_NAME));
    }

    /// Read back `out.len()` bytes starting at byte `offset`
    pub fn get_sub_data(&self, offset: usize, out: &mut [u8]) {
        debug_assert!(offset + out.len() <= self.size);

        let device = self.device();
        self.bind();
        gls_check!(device, device.get_buffer_sub_data(TARGET, offset, out));
        self.unbind();
    }

    /// Replace this buffer by one of `new_size` bytes holding the old contents
    fn grow(&mut self, new_size: usize) {
        let mut grown = Self::new(self.device().clone());
        grown.data(new_size, None);
        if self.size > 0 {
            grown.copy_sub_data(self, 0, 0, self.size);
        }
        // Old name is released here
        *self = grown;
    }
}

impl<D: Device, const TARGET: u32, const USAGE: u32> std::fmt::Debug for Buffer<D, TARGET, USAGE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("name", &self.name())
            .field("target", &TARGET)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
