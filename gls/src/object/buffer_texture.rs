/// BufferTexture - texture whose texels live in a buffer object
///
/// Pairs a `TEXTURE_BUFFER`/`STREAM_DRAW` buffer with a `TEXTURE_BUFFER`
/// texture and links them with glTexBuffer. Buffer growth replaces the
/// buffer name, so every storage operation re-links the texture when the
/// name changes.

use std::rc::Rc;

use crate::device::{consts, Device, Name};
use crate::gls_check;
use super::buffer::Buffer;
use super::texture::Texture;

type StorageBuffer<D> = Buffer<D, { consts::TEXTURE_BUFFER }, { consts::STREAM_DRAW }>;

/// Buffer texture sampling its storage as `INTERNAL_FORMAT` (e.g. `R32F`)
pub struct BufferTexture<D: Device, const INTERNAL_FORMAT: u32> {
    buffer: StorageBuffer<D>,
    texture: Texture<D, { consts::TEXTURE_BUFFER }>,
}

impl<D: Device, const INTERNAL_FORMAT: u32> BufferTexture<D, INTERNAL_FORMAT> {
    /// Generate both objects, allocate empty storage and link them
    pub fn new(device: Rc<D>) -> Self {
        let mut buffer = StorageBuffer::new(device.clone());
        buffer.data(0, None);

        let buffer_texture = Self {
            buffer,
            texture: Texture::without_filters(device),
        };
        buffer_texture.link();
        buffer_texture
    }

    #[inline]
    pub fn buffer_name(&self) -> Name {
        self.buffer.name()
    }

    #[inline]
    pub fn texture_name(&self) -> Name {
        self.texture.name()
    }

    /// Storage size in bytes
    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.size()
    }

    /// Storage buffer, e.g. as a `copy_sub_data` source
    #[inline]
    pub fn buffer(&self) -> &StorageBuffer<D> {
        &self.buffer
    }

    /// Bind the texture to `TEXTURE_BUFFER`, replacing any previous one
    pub fn bind(&self) {
        self.texture.bind();
    }

    pub fn unbind(&self) {
        self.texture.unbind();
    }

    /// Reallocate the storage (see `Buffer::data`)
    pub fn data(&mut self, size: usize, data: Option<&[u8]>) {
        self.buffer.data(size, data);
    }

    pub fn data_slice<T: bytemuck::Pod>(&mut self, values: &[T]) {
        self.buffer.data_slice(values);
    }

    /// Upload at byte `offset`, growing and re-linking if needed
    pub fn sub_data(&mut self, offset: usize, data: &[u8]) {
        let before = self.buffer.name();
        self.buffer.sub_data(offset, data);
        self.relink_if_replaced(before);
    }

    pub fn sub_data_slice<T: bytemuck::Pod>(&mut self, offset: usize, values: &[T]) {
        self.sub_data(offset, bytemuck::cast_slice(values));
    }

    pub fn get_sub_data(&self, offset: usize, out: &mut [u8]) {
        self.buffer.get_sub_data(offset, out);
    }

    fn relink_if_replaced(&self, previous: Name) {
        if self.buffer.name() != previous {
            self.link();
        }
    }

    fn link(&self) {
        let device = self.buffer.device();
        self.texture.bind();
        gls_check!(
            device,
            device.tex_buffer(consts::TEXTURE_BUFFER, INTERNAL_FORMAT, self.buffer.name())
        );
        self.texture.unbind();
    }
}

impl<D: Device, const INTERNAL_FORMAT: u32> std::fmt::Debug for BufferTexture<D, INTERNAL_FORMAT> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferTexture")
            .field("buffer", &self.buffer.name())
            .field("texture", &self.texture.name())
            .field("internal_format", &INTERNAL_FORMAT)
            .field("size", &self.buffer.size())
            .finish()
    }
}

#[cfg(test)]
#[path = "buffer_texture_tests.rs"]
mod tests;
