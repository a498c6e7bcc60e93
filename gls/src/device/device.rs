//! Device trait - the native GL function table consumed by GLS objects
//!
//! Every wrapper in `crate::object` is generic over a `Device` and reaches
//! the driver only through it. Implementations are expected to forward each
//! method to the corresponding GL entry point with no extra logic; GLS adds
//! the RAII and binding bookkeeping on top.
//!
//! All methods take `&self`: a GL context is implicitly stateful and bound to
//! one thread, so implementations hold it behind shared references and GLS
//! objects share the device through `Rc`.

/// Server-side object name (`GLuint`)
pub type Name = u32;

/// Sentinel name meaning "no object"
pub const NULL_NAME: Name = 0;

/// An active attribute or uniform reported by program introspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVariable {
    /// Variable name as written in GLSL
    pub name: String,
    /// Location (-1 if the driver did not assign one)
    pub location: i32,
    /// GL type enum (e.g. FLOAT_VEC3)
    pub gl_type: u32,
    /// Array size (1 for non-arrays)
    pub size: i32,
}

/// An active uniform block reported by program introspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveUniformBlock {
    /// Block name as written in GLSL
    pub name: String,
    /// Block index
    pub index: u32,
    /// UNIFORM_BLOCK_DATA_SIZE in bytes
    pub data_size: i32,
}

/// Native GL function table
pub trait Device {
    /// Handle type of fence sync objects (`GLsync`)
    type Fence: Copy;

    // ===== ERRORS / STATE =====

    /// glGetError
    fn get_error(&self) -> u32;

    /// glGetIntegerv for single-valued parameters
    fn get_integer(&self, parameter: u32) -> i32;

    /// glFlush
    fn flush(&self);

    // ===== BUFFERS =====

    fn gen_buffers(&self, names: &mut [Name]);
    fn delete_buffers(&self, names: &[Name]);
    fn bind_buffer(&self, target: u32, buffer: Name);
    fn bind_buffer_range(&self, target: u32, index: u32, buffer: Name, offset: usize, size: usize);
    /// glBufferData; `data == None` allocates `size` uninitialized bytes
    fn buffer_data(&self, target: u32, size: usize, data: Option<&[u8]>, usage: u32);
    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]);
    fn copy_buffer_sub_data(
        &self,
        read_target: u32,
        write_target: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    );
    fn get_buffer_sub_data(&self, target: u32, offset: usize, data: &mut [u8]);

    // ===== TEXTURES =====

    fn gen_textures(&self, names: &mut [Name]);
    fn delete_textures(&self, names: &[Name]);
    fn bind_texture(&self, target: u32, texture: Name);
    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32);
    fn tex_parameter_f32(&self, target: u32, parameter: u32, value: f32);
    /// glTexParameteriv
    fn tex_parameter_i32_slice(&self, target: u32, parameter: u32, values: &[i32]);
    /// glTexParameterfv
    fn tex_parameter_f32_slice(&self, target: u32, parameter: u32, values: &[f32]);
    #[allow(clippy::too_many_arguments)]
    fn tex_image_1d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
    fn tex_sub_image_1d(
        &self,
        target: u32,
        level: i32,
        x_offset: i32,
        width: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    /// glGetTexImage into `pixels` (sized by the caller)
    fn get_tex_image(&self, target: u32, level: i32, format: u32, ty: u32, pixels: &mut [u8]);
    /// glTexBuffer: attach `buffer`'s storage to the bound buffer texture
    fn tex_buffer(&self, target: u32, internal_format: u32, buffer: Name);
    fn generate_mipmap(&self, target: u32);

    // ===== SHADERS =====

    /// glCreateShader; returns NULL_NAME on failure
    fn create_shader(&self, shader_type: u32) -> Name;
    fn delete_shader(&self, shader: Name);
    fn shader_source(&self, shader: Name, source: &str);
    fn compile_shader(&self, shader: Name);
    fn shader_compile_status(&self, shader: Name) -> bool;
    fn shader_info_log(&self, shader: Name) -> String;

    // ===== PROGRAMS =====

    /// glCreateProgram; returns NULL_NAME on failure
    fn create_program(&self) -> Name;
    fn delete_program(&self, program: Name);
    fn attach_shader(&self, program: Name, shader: Name);
    fn detach_shader(&self, program: Name, shader: Name);
    fn link_program(&self, program: Name);
    fn program_link_status(&self, program: Name) -> bool;
    fn program_info_log(&self, program: Name) -> String;
    fn use_program(&self, program: Name);
    fn active_attributes(&self, program: Name) -> Vec<ActiveVariable>;
    fn active_uniforms(&self, program: Name) -> Vec<ActiveVariable>;
    fn active_uniform_blocks(&self, program: Name) -> Vec<ActiveUniformBlock>;
    /// glUniform{1,2,3,4}fv with `components` values per element
    fn uniform_f32(&self, location: i32, components: u32, values: &[f32]);
    /// glUniform{1,2,3,4}iv
    fn uniform_i32(&self, location: i32, components: u32, values: &[i32]);
    /// glUniform{1,2,3,4}uiv
    fn uniform_u32(&self, location: i32, components: u32, values: &[u32]);
    /// glUniformMatrix{2,3,4}fv for square matrices of `dimension`
    fn uniform_matrix_f32(&self, location: i32, dimension: u32, transpose: bool, values: &[f32]);
    /// glUniformMatrix{2x3,2x4,3x2,3x4,4x2,4x3}fv
    fn uniform_matrix_nonsquare_f32(
        &self,
        location: i32,
        columns: u32,
        rows: u32,
        transpose: bool,
        values: &[f32],
    );

    // ===== VERTEX ARRAYS =====

    fn gen_vertex_arrays(&self, names: &mut [Name]);
    fn delete_vertex_arrays(&self, names: &[Name]);
    fn bind_vertex_array(&self, vertex_array: Name);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn disable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: usize,
    );

    // ===== RENDERBUFFERS =====

    fn gen_renderbuffers(&self, names: &mut [Name]);
    fn delete_renderbuffers(&self, names: &[Name]);
    fn bind_renderbuffer(&self, renderbuffer: Name);
    fn renderbuffer_storage_multisample(&self, samples: i32, internal_format: u32, width: i32, height: i32);

    // ===== FRAMEBUFFERS =====

    fn gen_framebuffers(&self, names: &mut [Name]);
    fn delete_framebuffers(&self, names: &[Name]);
    fn bind_framebuffer(&self, target: u32, framebuffer: Name);
    fn framebuffer_texture(&self, target: u32, attachment: u32, texture: Name, level: i32);
    fn framebuffer_texture_2d(&self, target: u32, attachment: u32, texture_target: u32, texture: Name, level: i32);
    fn framebuffer_texture_layer(&self, target: u32, attachment: u32, texture: Name, level: i32, layer: i32);
    fn framebuffer_renderbuffer(&self, target: u32, attachment: u32, renderbuffer: Name);
    fn check_framebuffer_status(&self, target: u32) -> u32;

    // ===== QUERIES =====

    fn gen_queries(&self, names: &mut [Name]);
    fn delete_queries(&self, names: &[Name]);
    fn begin_query(&self, target: u32, query: Name);
    fn end_query(&self, target: u32);
    /// glGetQueryObjectuiv
    fn query_result_u32(&self, query: Name, parameter: u32) -> u32;
    /// glGetQueryObjectiv
    fn query_result_i32(&self, query: Name, parameter: u32) -> i32;

    // ===== SYNC =====

    /// glFenceSync(SYNC_GPU_COMMANDS_COMPLETE, 0); None on failure
    fn fence_sync(&self) -> Option<Self::Fence>;
    /// glClientWaitSync; returns ALREADY_SIGNALED, TIMEOUT_EXPIRED, ...
    ///
    /// Implementations with a narrower timeout type must keep waiting until
    /// `timeout_ns` is used up.
    fn client_wait_sync(&self, fence: Self::Fence, flags: u32, timeout_ns: u64) -> u32;
    /// glWaitSync(fence, 0, TIMEOUT_IGNORED)
    fn wait_sync(&self, fence: Self::Fence);
    fn delete_sync(&self, fence: Self::Fence);
}
