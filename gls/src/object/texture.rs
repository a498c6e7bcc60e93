/// Texture - GL texture object for a fixed target
///
/// Every one-shot operation binds the texture, issues the call and clears
/// the binding again. Dimensions are remembered from the last image upload.

use std::rc::Rc;

use crate::device::{consts, Device, Name, NULL_NAME};
use crate::gls_check;
use super::kinds::TextureKind;
use super::object::Object;

/// GL texture object bound to `TARGET`
pub struct Texture<D: Device, const TARGET: u32 = { consts::TEXTURE_2D }> {
    object: Object<TextureKind, D>,
    width: i32,
    height: i32,
    depth: i32,
}

impl<D: Device, const TARGET: u32> Texture<D, TARGET> {
    /// Generate a texture with LINEAR minification and magnification filters
    pub fn new(device: Rc<D>) -> Self {
        let texture = Self::without_filters(device);
        texture.parameter_i32(consts::TEXTURE_MIN_FILTER, consts::LINEAR as i32);
        texture.parameter_i32(consts::TEXTURE_MAG_FILTER, consts::LINEAR as i32);
        texture
    }

    /// Generate a texture without touching any parameter
    ///
    /// Buffer textures reject filter parameters, so they start here.
    pub(crate) fn without_filters(device: Rc<D>) -> Self {
        Self {
            object: Object::new(device),
            width: 0,
            height: 0,
            depth: 0,
        }
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

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn bind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_texture(TARGET, self.name()));
    }

    pub fn unbind(&self) {
        let device = self.object.device();
        gls_check!(device, device.bind_texture(TARGET, NULL_NAME));
    }

    /// glTexParameteri
    pub fn parameter_i32(&self, parameter: u32, value: i32) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.tex_parameter_i32(TARGET, parameter, value));
        self.unbind();
    }

    /// glTexParameterf
    pub fn parameter_f32(&self, parameter: u32, value: f32) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.tex_parameter_f32(TARGET, parameter, value));
        self.unbind();
    }

    /// glTexParameteriv (e.g. TEXTURE_SWIZZLE_RGBA)
    pub fn parameter_i32_slice(&self, parameter: u32, values: &[i32]) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.tex_parameter_i32_slice(TARGET, parameter, values));
        self.unbind();
    }

    /// glTexParameterfv (e.g. TEXTURE_BORDER_COLOR)
    pub fn parameter_f32_slice(&self, parameter: u32, values: &[f32]) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.tex_parameter_f32_slice(TARGET, parameter, values));
        self.unbind();
    }

    /// Specify a 1D image for `level`
    pub fn image_1d(
        &mut self,
        level: i32,
        internal_format: u32,
        width: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) {
        self.width = width;

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.tex_image_1d(TARGET, level, internal_format as i32, width, format, ty, pixels)
        );
        self.unbind();
    }

    /// Specify a 2D image for `level` (or a cube face when `TARGET` is a cube map face)
    #[allow(clippy::too_many_arguments)]
    pub fn image_2d(
        &mut self,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) {
        self.width = width;
        self.height = height;

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.tex_image_2d(TARGET, level, internal_format as i32, width, height, format, ty, pixels)
        );
        self.unbind();
    }

    /// Specify a 3D (or array) image for `level`
    #[allow(clippy::too_many_arguments)]
    pub fn image_3d(
        &mut self,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) {
        self.width = width;
        self.height = height;
        self.depth = depth;

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.tex_image_3d(TARGET, level, internal_format as i32, width, height, depth, format, ty, pixels)
        );
        self.unbind();
    }

    /// Update a sub-rectangle of `level`
    #[allow(clippy::too_many_arguments)]
    pub fn sub_image_2d(
        &self,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) {
        debug_assert!(x_offset + width <= self.width);
        debug_assert!(y_offset + height <= self.height);

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.tex_sub_image_2d(TARGET, level, x_offset, y_offset, width, height, format, ty, pixels)
        );
        self.unbind();
    }

    /// Update a span of a 1D `level`
    pub fn sub_image_1d(&self, level: i32, x_offset: i32, width: i32, format: u32, ty: u32, pixels: &[u8]) {
        debug_assert!(x_offset + width <= self.width);

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.tex_sub_image_1d(TARGET, level, x_offset, width, format, ty, pixels)
        );
        self.unbind();
    }

    /// Update a sub-box of a 3D (or array) `level`
    #[allow(clippy::too_many_arguments)]
    pub fn sub_image_3d(
        &self,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        z_offset: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) {
        debug_assert!(x_offset + width <= self.width);
        debug_assert!(y_offset + height <= self.height);
        debug_assert!(z_offset + depth <= self.depth);

        let device = self.object.device();
        self.bind();
        gls_check!(
            device,
            device.tex_sub_image_3d(
                TARGET, level, x_offset, y_offset, z_offset, width, height, depth, format, ty, pixels
            )
        );
        self.unbind();
    }

    /// Read `level` back into `pixels`, which must hold the whole image
    pub fn get_image(&self, level: i32, format: u32, ty: u32, pixels: &mut [u8]) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.get_tex_image(TARGET, level, format, ty, pixels));
        self.unbind();
    }

    pub fn generate_mipmap(&self) {
        let device = self.object.device();
        self.bind();
        gls_check!(device, device.generate_mipmap(TARGET));
        self.unbind();
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
