/// GlowDevice - `gls::Device` implemented on top of a `glow::Context`
///
/// glow hands out typed, non-zero handles (`NativeBuffer(NonZeroU32)`, ...)
/// while GLS works with raw GL names. Names are converted at this boundary:
/// a raw `0` becomes `None` ("no object") for binds and is skipped for
/// deletes, so the sentinel name is always a safe no-op.
///
/// glow reports allocation failures as `Err(String)`. Those are logged and
/// turned into the sentinel name, which `gls::Object` then reports as a
/// creation failure.

use std::ffi::c_void;
use std::num::NonZeroU32;

use glow::HasContext;
use gls::device::{ActiveUniformBlock, ActiveVariable};
use gls::{consts, gls_error, Device, Name, NULL_NAME};

use crate::extra_fns::ExtraFns;

/// Convert a raw name to a glow handle (`None` for the sentinel)
fn native<T>(name: Name, wrap: fn(NonZeroU32) -> T) -> Option<T> {
    NonZeroU32::new(name).map(wrap)
}

/// Raw name of a glow creation result, logging failures
fn created<T>(result: Result<T, String>, call: &str, unwrap: fn(T) -> NonZeroU32) -> Name {
    match result {
        Ok(handle) => unwrap(handle).get(),
        Err(message) => {
            gls_error!("gls::glow", "{} failed: {}", call, message);
            NULL_NAME
        }
    }
}

/// Uniform location as glow expects it (`None` for -1)
fn uniform_location(location: i32) -> Option<glow::NativeUniformLocation> {
    u32::try_from(location).ok().map(glow::NativeUniformLocation)
}

/// Client wait timeout, clamped to the `i32` glow accepts
fn wait_timeout(timeout_ns: u64) -> i32 {
    i32::try_from(timeout_ns).unwrap_or(i32::MAX)
}

/// Spend a `u64` wait budget in `i32`-sized waits
///
/// Waits again while the previous wait expired and budget remains, so the
/// total wait matches `timeout_ns` instead of stopping at `i32::MAX`.
fn wait_in_slices(timeout_ns: u64, mut wait: impl FnMut(i32) -> u32) -> u32 {
    let mut remaining = timeout_ns;
    loop {
        let slice = wait_timeout(remaining);
        let status = wait(slice);
        remaining -= slice as u64;
        if status != consts::TIMEOUT_EXPIRED || remaining == 0 {
            return status;
        }
    }
}

/// `gls::Device` backed by glow
///
/// # Example
///
/// ```ignore
/// let gl = unsafe { glow::Context::from_loader_function(|s| loader(s)) };
/// let device = Rc::new(unsafe { GlowDevice::new(gl) });
/// let buffer: gls::Buffer<GlowDevice> = gls::Buffer::new(device.clone());
/// ```
pub struct GlowDevice {
    gl: glow::Context,
    extra: ExtraFns,
}

impl GlowDevice {
    /// Wrap a glow context
    ///
    /// # Safety
    ///
    /// The context must be current on the calling thread for as long as the
    /// device (and every object created from it) is alive. Every `Device`
    /// method calls straight into GL under that assumption.
    ///
    /// Buffer textures, 1D sub-image uploads and signed query results need
    /// entry points glow does not wrap; use `with_loader` for those.
    pub unsafe fn new(gl: glow::Context) -> Self {
        Self { gl, extra: ExtraFns::default() }
    }

    /// Wrap a glow context and resolve the extra entry points with `loader`
    ///
    /// # Safety
    ///
    /// As for `new`. `loader` must be the function the context was loaded
    /// with (or return null for unknown names).
    pub unsafe fn with_loader<F>(gl: glow::Context, loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        Self { gl, extra: ExtraFns::load(loader) }
    }

    /// Underlying glow context, for calls GLS does not wrap
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn into_inner(self) -> glow::Context {
        self.gl
    }
}

// SAFETY (all blocks below): `GlowDevice::new` requires the context to be
// current on this thread for the lifetime of the device.
impl Device for GlowDevice {
    type Fence = <glow::Context as HasContext>::Fence;

    fn get_error(&self) -> u32 {
        unsafe { self.gl.get_error() }
    }

    fn get_integer(&self, parameter: u32) -> i32 {
        unsafe { self.gl.get_parameter_i32(parameter) }
    }

    fn flush(&self) {
        unsafe { self.gl.flush() }
    }

    // ===== BUFFERS =====

    fn gen_buffers(&self, names: &mut [Name]) {
        for name in names {
            *name = created(unsafe { self.gl.create_buffer() }, "create_buffer", |b| b.0);
        }
    }

    fn delete_buffers(&self, names: &[Name]) {
        for buffer in names.iter().filter_map(|&n| native(n, glow::NativeBuffer)) {
            unsafe { self.gl.delete_buffer(buffer) }
        }
    }

    fn bind_buffer(&self, target: u32, buffer: Name) {
        unsafe { self.gl.bind_buffer(target, native(buffer, glow::NativeBuffer)) }
    }

    fn bind_buffer_range(&self, target: u32, index: u32, buffer: Name, offset: usize, size: usize) {
        unsafe {
            self.gl.bind_buffer_range(
                target,
                index,
                native(buffer, glow::NativeBuffer),
                offset as i32,
                size as i32,
            )
        }
    }

    fn buffer_data(&self, target: u32, size: usize, data: Option<&[u8]>, usage: u32) {
        unsafe {
            match data {
                Some(bytes) if bytes.len() == size => {
                    self.gl.buffer_data_u8_slice(target, bytes, usage)
                }
                Some(bytes) => {
                    // Shorter initial data: allocate the full size, upload the prefix
                    self.gl.buffer_data_size(target, size as i32, usage);
                    self.gl.buffer_sub_data_u8_slice(target, 0, bytes);
                }
                None => self.gl.buffer_data_size(target, size as i32, usage),
            }
        }
    }

    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
        unsafe { self.gl.buffer_sub_data_u8_slice(target, offset as i32, data) }
    }

    fn copy_buffer_sub_data(
        &self,
        read_target: u32,
        write_target: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        unsafe {
            self.gl.copy_buffer_sub_data(
                read_target,
                write_target,
                read_offset as i32,
                write_offset as i32,
                size as i32,
            )
        }
    }

    fn get_buffer_sub_data(&self, target: u32, offset: usize, data: &mut [u8]) {
        unsafe { self.gl.get_buffer_sub_data(target, offset as i32, data) }
    }

    // ===== TEXTURES =====

    fn gen_textures(&self, names: &mut [Name]) {
        for name in names {
            *name = created(unsafe { self.gl.create_texture() }, "create_texture", |t| t.0);
        }
    }

    fn delete_textures(&self, names: &[Name]) {
        for texture in names.iter().filter_map(|&n| native(n, glow::NativeTexture)) {
            unsafe { self.gl.delete_texture(texture) }
        }
    }

    fn bind_texture(&self, target: u32, texture: Name) {
        unsafe { self.gl.bind_texture(target, native(texture, glow::NativeTexture)) }
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        unsafe { self.gl.tex_parameter_i32(target, parameter, value) }
    }

    fn tex_parameter_f32(&self, target: u32, parameter: u32, value: f32) {
        unsafe { self.gl.tex_parameter_f32(target, parameter, value) }
    }

    fn tex_parameter_i32_slice(&self, target: u32, parameter: u32, values: &[i32]) {
        unsafe { self.gl.tex_parameter_i32_slice(target, parameter, values) }
    }

    fn tex_parameter_f32_slice(&self, target: u32, parameter: u32, values: &[f32]) {
        unsafe { self.gl.tex_parameter_f32_slice(target, parameter, values) }
    }

    fn tex_image_1d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) {
        unsafe { self.gl.tex_image_1d(target, level, internal_format, width, 0, format, ty, glow::PixelUnpackData::Slice(pixels)) }
    }

    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) {
        unsafe {
            self.gl.tex_image_2d(target, level, internal_format, width, height, 0, format, ty, glow::PixelUnpackData::Slice(pixels))
        }
    }

    fn tex_image_3d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) {
        unsafe {
            self.gl.tex_image_3d(
                target,
                level,
                internal_format,
                width,
                height,
                depth,
                0,
                format,
                ty,
                glow::PixelUnpackData::Slice(pixels),
            )
        }
    }

    fn tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) {
        unsafe {
            self.gl.tex_sub_image_2d(
                target,
                level,
                x_offset,
                y_offset,
                width,
                height,
                format,
                ty,
                glow::PixelUnpackData::Slice(Some(pixels)),
            )
        }
    }

    fn tex_sub_image_1d(
        &self,
        target: u32,
        level: i32,
        x_offset: i32,
        width: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) {
        let issued = unsafe {
            self.extra.tex_sub_image_1d(target, level, x_offset, width, format, ty, pixels)
        };
        if !issued {
            gls_error!("gls::glow", "glTexSubImage1D is not loaded (use GlowDevice::with_loader)");
        }
    }

    fn tex_sub_image_3d(
        &self,
        target: u32,
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
        unsafe {
            self.gl.tex_sub_image_3d(
                target,
                level,
                x_offset,
                y_offset,
                z_offset,
                width,
                height,
                depth,
                format,
                ty,
                glow::PixelUnpackData::Slice(Some(pixels)),
            )
        }
    }

    fn get_tex_image(&self, target: u32, level: i32, format: u32, ty: u32, pixels: &mut [u8]) {
        unsafe { self.gl.get_tex_image(target, level, format, ty, glow::PixelPackData::Slice(Some(pixels))) }
    }

    fn tex_buffer(&self, target: u32, internal_format: u32, buffer: Name) {
        if !unsafe { self.extra.tex_buffer(target, internal_format, buffer) } {
            gls_error!("gls::glow", "glTexBuffer is not loaded (use GlowDevice::with_loader)");
        }
    }

    fn generate_mipmap(&self, target: u32) {
        unsafe { self.gl.generate_mipmap(target) }
    }

    // ===== SHADERS =====

    fn create_shader(&self, shader_type: u32) -> Name {
        created(unsafe { self.gl.create_shader(shader_type) }, "create_shader", |s| s.0)
    }

    fn delete_shader(&self, shader: Name) {
        if let Some(shader) = native(shader, glow::NativeShader) {
            unsafe { self.gl.delete_shader(shader) }
        }
    }

    fn shader_source(&self, shader: Name, source: &str) {
        if let Some(shader) = native(shader, glow::NativeShader) {
            unsafe { self.gl.shader_source(shader, source) }
        }
    }

    fn compile_shader(&self, shader: Name) {
        if let Some(shader) = native(shader, glow::NativeShader) {
            unsafe { self.gl.compile_shader(shader) }
        }
    }

    fn shader_compile_status(&self, shader: Name) -> bool {
        native(shader, glow::NativeShader)
            .is_some_and(|shader| unsafe { self.gl.get_shader_compile_status(shader) })
    }

    fn shader_info_log(&self, shader: Name) -> String {
        native(shader, glow::NativeShader)
            .map(|shader| unsafe { self.gl.get_shader_info_log(shader) })
            .unwrap_or_default()
    }

    // ===== PROGRAMS =====

    fn create_program(&self) -> Name {
        created(unsafe { self.gl.create_program() }, "create_program", |p| p.0)
    }

    fn delete_program(&self, program: Name) {
        if let Some(program) = native(program, glow::NativeProgram) {
            unsafe { self.gl.delete_program(program) }
        }
    }

    fn attach_shader(&self, program: Name, shader: Name) {
        if let (Some(program), Some(shader)) =
            (native(program, glow::NativeProgram), native(shader, glow::NativeShader))
        {
            unsafe { self.gl.attach_shader(program, shader) }
        }
    }

    fn detach_shader(&self, program: Name, shader: Name) {
        if let (Some(program), Some(shader)) =
            (native(program, glow::NativeProgram), native(shader, glow::NativeShader))
        {
            unsafe { self.gl.detach_shader(program, shader) }
        }
    }

    fn link_program(&self, program: Name) {
        if let Some(program) = native(program, glow::NativeProgram) {
            unsafe { self.gl.link_program(program) }
        }
    }

    fn program_link_status(&self, program: Name) -> bool {
        native(program, glow::NativeProgram)
            .is_some_and(|program| unsafe { self.gl.get_program_link_status(program) })
    }

    fn program_info_log(&self, program: Name) -> String {
        native(program, glow::NativeProgram)
            .map(|program| unsafe { self.gl.get_program_info_log(program) })
            .unwrap_or_default()
    }

    fn use_program(&self, program: Name) {
        unsafe { self.gl.use_program(native(program, glow::NativeProgram)) }
    }

    fn active_attributes(&self, program: Name) -> Vec<ActiveVariable> {
        let Some(program) = native(program, glow::NativeProgram) else {
            return Vec::new();
        };

        unsafe {
            let count = self.gl.get_active_attributes(program);
            (0..count)
                .filter_map(|index| {
                    let attribute = self.gl.get_active_attribute(program, index)?;
                    let location = self
                        .gl
                        .get_attrib_location(program, &attribute.name)
                        .map_or(-1, |location| location as i32);
                    Some(ActiveVariable {
                        name: attribute.name,
                        location,
                        gl_type: attribute.atype,
                        size: attribute.size,
                    })
                })
                .collect()
        }
    }

    fn active_uniforms(&self, program: Name) -> Vec<ActiveVariable> {
        let Some(program) = native(program, glow::NativeProgram) else {
            return Vec::new();
        };

        unsafe {
            let count = self.gl.get_active_uniforms(program);
            (0..count)
                .filter_map(|index| {
                    let uniform = self.gl.get_active_uniform(program, index)?;
                    // Block members have no location
                    let location = self
                        .gl
                        .get_uniform_location(program, &uniform.name)
                        .map_or(-1, |location| location.0 as i32);
                    Some(ActiveVariable {
                        name: uniform.name,
                        location,
                        gl_type: uniform.utype,
                        size: uniform.size,
                    })
                })
                .collect()
        }
    }

    fn active_uniform_blocks(&self, program: Name) -> Vec<ActiveUniformBlock> {
        let Some(program) = native(program, glow::NativeProgram) else {
            return Vec::new();
        };

        unsafe {
            let count = self.gl.get_program_parameter_i32(program, glow::ACTIVE_UNIFORM_BLOCKS);
            (0..count.max(0) as u32)
                .map(|index| ActiveUniformBlock {
                    name: self.gl.get_active_uniform_block_name(program, index),
                    index,
                    data_size: self.gl.get_active_uniform_block_parameter_i32(
                        program,
                        index,
                        glow::UNIFORM_BLOCK_DATA_SIZE,
                    ),
                })
                .collect()
        }
    }

    fn uniform_f32(&self, location: i32, components: u32, values: &[f32]) {
        let location = uniform_location(location);
        let location = location.as_ref();
        unsafe {
            match components {
                1 => self.gl.uniform_1_f32_slice(location, values),
                2 => self.gl.uniform_2_f32_slice(location, values),
                3 => self.gl.uniform_3_f32_slice(location, values),
                4 => self.gl.uniform_4_f32_slice(location, values),
                _ => gls_error!("gls::glow", "uniform_f32: invalid component count {}", components),
            }
        }
    }

    fn uniform_i32(&self, location: i32, components: u32, values: &[i32]) {
        let location = uniform_location(location);
        let location = location.as_ref();
        unsafe {
            match components {
                1 => self.gl.uniform_1_i32_slice(location, values),
                2 => self.gl.uniform_2_i32_slice(location, values),
                3 => self.gl.uniform_3_i32_slice(location, values),
                4 => self.gl.uniform_4_i32_slice(location, values),
                _ => gls_error!("gls::glow", "uniform_i32: invalid component count {}", components),
            }
        }
    }

    fn uniform_u32(&self, location: i32, components: u32, values: &[u32]) {
        let location = uniform_location(location);
        let location = location.as_ref();
        unsafe {
            match components {
                1 => self.gl.uniform_1_u32_slice(location, values),
                2 => self.gl.uniform_2_u32_slice(location, values),
                3 => self.gl.uniform_3_u32_slice(location, values),
                4 => self.gl.uniform_4_u32_slice(location, values),
                _ => gls_error!("gls::glow", "uniform_u32: invalid component count {}", components),
            }
        }
    }

    fn uniform_matrix_f32(&self, location: i32, dimension: u32, transpose: bool, values: &[f32]) {
        let location = uniform_location(location);
        let location = location.as_ref();
        unsafe {
            match dimension {
                2 => self.gl.uniform_matrix_2_f32_slice(location, transpose, values),
                3 => self.gl.uniform_matrix_3_f32_slice(location, transpose, values),
                4 => self.gl.uniform_matrix_4_f32_slice(location, transpose, values),
                _ => gls_error!("gls::glow", "uniform_matrix_f32: invalid dimension {}", dimension),
            }
        }
    }

    fn uniform_matrix_nonsquare_f32(
        &self,
        location: i32,
        columns: u32,
        rows: u32,
        transpose: bool,
        values: &[f32],
    ) {
        let location = uniform_location(location);
        let location = location.as_ref();
        unsafe {
            match (columns, rows) {
                (2, 3) => self.gl.uniform_matrix_2x3_f32_slice(location, transpose, values),
                (2, 4) => self.gl.uniform_matrix_2x4_f32_slice(location, transpose, values),
                (3, 2) => self.gl.uniform_matrix_3x2_f32_slice(location, transpose, values),
                (3, 4) => self.gl.uniform_matrix_3x4_f32_slice(location, transpose, values),
                (4, 2) => self.gl.uniform_matrix_4x2_f32_slice(location, transpose, values),
                (4, 3) => self.gl.uniform_matrix_4x3_f32_slice(location, transpose, values),
                _ => gls_error!(
                    "gls::glow",
                    "uniform_matrix_nonsquare_f32: invalid shape {}x{}",
                    columns,
                    rows
                ),
            }
        }
    }

    // ===== VERTEX ARRAYS =====

    fn gen_vertex_arrays(&self, names: &mut [Name]) {
        for name in names {
            *name = created(unsafe { self.gl.create_vertex_array() }, "create_vertex_array", |v| v.0);
        }
    }

    fn delete_vertex_arrays(&self, names: &[Name]) {
        for vertex_array in names.iter().filter_map(|&n| native(n, glow::NativeVertexArray)) {
            unsafe { self.gl.delete_vertex_array(vertex_array) }
        }
    }

    fn bind_vertex_array(&self, vertex_array: Name) {
        unsafe { self.gl.bind_vertex_array(native(vertex_array, glow::NativeVertexArray)) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.disable_vertex_attrib_array(index) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(index, size, ty, normalized, stride, offset as i32)
        }
    }

    // ===== RENDERBUFFERS =====

    fn gen_renderbuffers(&self, names: &mut [Name]) {
        for name in names {
            *name = created(unsafe { self.gl.create_renderbuffer() }, "create_renderbuffer", |r| r.0);
        }
    }

    fn delete_renderbuffers(&self, names: &[Name]) {
        for renderbuffer in names.iter().filter_map(|&n| native(n, glow::NativeRenderbuffer)) {
            unsafe { self.gl.delete_renderbuffer(renderbuffer) }
        }
    }

    fn bind_renderbuffer(&self, renderbuffer: Name) {
        unsafe {
            self.gl.bind_renderbuffer(consts::RENDERBUFFER, native(renderbuffer, glow::NativeRenderbuffer))
        }
    }

    fn renderbuffer_storage_multisample(&self, samples: i32, internal_format: u32, width: i32, height: i32) {
        unsafe {
            self.gl.renderbuffer_storage_multisample(
                consts::RENDERBUFFER,
                samples,
                internal_format,
                width,
                height,
            )
        }
    }

    // ===== FRAMEBUFFERS =====

    fn gen_framebuffers(&self, names: &mut [Name]) {
        for name in names {
            *name = created(unsafe { self.gl.create_framebuffer() }, "create_framebuffer", |f| f.0);
        }
    }

    fn delete_framebuffers(&self, names: &[Name]) {
        for framebuffer in names.iter().filter_map(|&n| native(n, glow::NativeFramebuffer)) {
            unsafe { self.gl.delete_framebuffer(framebuffer) }
        }
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: Name) {
        unsafe { self.gl.bind_framebuffer(target, native(framebuffer, glow::NativeFramebuffer)) }
    }

    fn framebuffer_texture(&self, target: u32, attachment: u32, texture: Name, level: i32) {
        unsafe {
            self.gl.framebuffer_texture(target, attachment, native(texture, glow::NativeTexture), level)
        }
    }

    fn framebuffer_texture_2d(&self, target: u32, attachment: u32, texture_target: u32, texture: Name, level: i32) {
        unsafe {
            self.gl.framebuffer_texture_2d(
                target,
                attachment,
                texture_target,
                native(texture, glow::NativeTexture),
                level,
            )
        }
    }

    fn framebuffer_texture_layer(&self, target: u32, attachment: u32, texture: Name, level: i32, layer: i32) {
        unsafe {
            self.gl.framebuffer_texture_layer(
                target,
                attachment,
                native(texture, glow::NativeTexture),
                level,
                layer,
            )
        }
    }

    fn framebuffer_renderbuffer(&self, target: u32, attachment: u32, renderbuffer: Name) {
        unsafe {
            self.gl.framebuffer_renderbuffer(
                target,
                attachment,
                consts::RENDERBUFFER,
                native(renderbuffer, glow::NativeRenderbuffer),
            )
        }
    }

    fn check_framebuffer_status(&self, target: u32) -> u32 {
        unsafe { self.gl.check_framebuffer_status(target) }
    }

    // ===== QUERIES =====

    fn gen_queries(&self, names: &mut [Name]) {
        for name in names {
            *name = created(unsafe { self.gl.create_query() }, "create_query", |q| q.0);
        }
    }

    fn delete_queries(&self, names: &[Name]) {
        for query in names.iter().filter_map(|&n| native(n, glow::NativeQuery)) {
            unsafe { self.gl.delete_query(query) }
        }
    }

    fn begin_query(&self, target: u32, query: Name) {
        if let Some(query) = native(query, glow::NativeQuery) {
            unsafe { self.gl.begin_query(target, query) }
        }
    }

    fn end_query(&self, target: u32) {
        unsafe { self.gl.end_query(target) }
    }

    fn query_result_u32(&self, query: Name, parameter: u32) -> u32 {
        native(query, glow::NativeQuery)
            .map_or(0, |query| unsafe { self.gl.get_query_parameter_u32(query, parameter) })
    }

    /// Falls back to the unsigned query when glGetQueryObjectiv is not loaded
    fn query_result_i32(&self, query: Name, parameter: u32) -> i32 {
        match unsafe { self.extra.get_query_objectiv(query, parameter) } {
            Some(value) => value,
            None => self.query_result_u32(query, parameter) as i32,
        }
    }

    // ===== SYNC =====

    fn fence_sync(&self) -> Option<Self::Fence> {
        match unsafe { self.gl.fence_sync(consts::SYNC_GPU_COMMANDS_COMPLETE, 0) } {
            Ok(fence) => Some(fence),
            Err(message) => {
                gls_error!("gls::glow", "fence_sync failed: {}", message);
                None
            }
        }
    }

    fn client_wait_sync(&self, fence: Self::Fence, flags: u32, timeout_ns: u64) -> u32 {
        wait_in_slices(timeout_ns, |slice| unsafe { self.gl.client_wait_sync(fence, flags, slice) })
    }

    fn wait_sync(&self, fence: Self::Fence) {
        unsafe { self.gl.wait_sync(fence, 0, consts::TIMEOUT_IGNORED) }
    }

    fn delete_sync(&self, fence: Self::Fence) {
        unsafe { self.gl.delete_sync(fence) }
    }
}

#[cfg(test)]
#[path = "glow_device_tests.rs"]
mod tests;
