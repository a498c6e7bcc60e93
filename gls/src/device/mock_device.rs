/// Mock Device for unit tests (no GL context required)
///
/// Records every call as text, hands out increasing names, keeps the set of
/// live names and reports deletes of names it never handed out (or already
/// deleted). Buffer storage is modelled so that data/sub_data/copy tests can
/// check contents.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use rustc_hash::FxHashMap;

use crate::device::consts;
use crate::device::{ActiveUniformBlock, ActiveVariable, Device, Name, NULL_NAME};

pub struct MockDevice {
    next_name: Cell<Name>,
    next_fence: Cell<u64>,
    calls: RefCell<Vec<String>>,
    live: RefCell<FxHashMap<Name, &'static str>>,
    invalid_deletes: RefCell<Vec<Name>>,
    errors: RefCell<VecDeque<u32>>,
    bindings: RefCell<FxHashMap<u32, Name>>,
    buffers: RefCell<FxHashMap<Name, Vec<u8>>>,
    live_fences: RefCell<Vec<u64>>,

    /// When set, gen_* / create_* return the sentinel and queue OUT_OF_MEMORY
    pub fail_generation: Cell<bool>,
    pub compile_status: Cell<bool>,
    pub link_status: Cell<bool>,
    pub info_log: RefCell<String>,
    pub attributes: RefCell<Vec<ActiveVariable>>,
    pub uniforms: RefCell<Vec<ActiveVariable>>,
    pub uniform_blocks: RefCell<Vec<ActiveUniformBlock>>,
    pub framebuffer_status: Cell<u32>,
    pub query_available: Cell<bool>,
    pub query_value: Cell<u32>,
    pub query_value_i32: Cell<i32>,
    pub wait_status: Cell<u32>,
    pub integers: RefCell<FxHashMap<u32, i32>>,
}

impl MockDevice {
    pub fn new() -> Self {
        let mut integers = FxHashMap::default();
        integers.insert(consts::MAX_VERTEX_ATTRIBS, 16);
        integers.insert(consts::MAX_SAMPLES, 8);
        integers.insert(consts::MAX_RENDERBUFFER_SIZE, 16384);

        Self {
            next_name: Cell::new(1),
            next_fence: Cell::new(1),
            calls: RefCell::new(Vec::new()),
            live: RefCell::new(FxHashMap::default()),
            invalid_deletes: RefCell::new(Vec::new()),
            errors: RefCell::new(VecDeque::new()),
            bindings: RefCell::new(FxHashMap::default()),
            buffers: RefCell::new(FxHashMap::default()),
            live_fences: RefCell::new(Vec::new()),
            fail_generation: Cell::new(false),
            compile_status: Cell::new(true),
            link_status: Cell::new(true),
            info_log: RefCell::new(String::new()),
            attributes: RefCell::new(Vec::new()),
            uniforms: RefCell::new(Vec::new()),
            uniform_blocks: RefCell::new(Vec::new()),
            framebuffer_status: Cell::new(consts::FRAMEBUFFER_COMPLETE),
            query_available: Cell::new(false),
            query_value: Cell::new(0),
            query_value_i32: Cell::new(0),
            wait_status: Cell::new(consts::ALREADY_SIGNALED),
            integers: RefCell::new(integers),
        }
    }

    // ===== INSPECTION =====

    pub fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn has_call(&self, call: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == call)
    }

    pub fn is_live(&self, name: Name) -> bool {
        self.live.borrow().contains_key(&name)
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn invalid_deletes(&self) -> Vec<Name> {
        self.invalid_deletes.borrow().clone()
    }

    pub fn live_fence_count(&self) -> usize {
        self.live_fences.borrow().len()
    }

    /// Queue an error code for the next get_error
    pub fn push_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    pub fn buffer_contents(&self, name: Name) -> Vec<u8> {
        self.buffers.borrow().get(&name).cloned().unwrap_or_default()
    }

    pub fn bound(&self, target: u32) -> Name {
        self.bindings.borrow().get(&target).copied().unwrap_or(NULL_NAME)
    }

    // ===== NAME BOOKKEEPING =====

    fn generate(&self, kind: &'static str, names: &mut [Name]) {
        self.record(format!("gen_{}({})", kind, names.len()));
        for slot in names.iter_mut() {
            *slot = self.allocate(kind);
        }
    }

    fn allocate(&self, kind: &'static str) -> Name {
        if self.fail_generation.get() {
            self.push_error(consts::OUT_OF_MEMORY);
            return NULL_NAME;
        }
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        self.live.borrow_mut().insert(name, kind);
        name
    }

    fn release(&self, kind: &'static str, names: &[Name]) {
        for &name in names {
            self.record(format!("delete_{}({})", kind, name));
            if name == NULL_NAME {
                continue;
            }
            if self.live.borrow_mut().remove(&name).is_none() {
                self.invalid_deletes.borrow_mut().push(name);
            }
            self.buffers.borrow_mut().remove(&name);
        }
    }

    fn bound_buffer_mut<R>(&self, target: u32, f: impl FnOnce(&mut Vec<u8>) -> R) -> Option<R> {
        let name = self.bound(target);
        if name == NULL_NAME {
            return None;
        }
        let mut buffers = self.buffers.borrow_mut();
        Some(f(buffers.entry(name).or_default()))
    }
}

impl Default for MockDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for MockDevice {
    type Fence = u64;

    fn get_error(&self) -> u32 {
        self.errors.borrow_mut().pop_front().unwrap_or(consts::NO_ERROR)
    }

    fn get_integer(&self, parameter: u32) -> i32 {
        self.integers.borrow().get(&parameter).copied().unwrap_or(0)
    }

    fn flush(&self) {
        self.record("flush()".to_string());
    }

    // ===== BUFFERS =====

    fn gen_buffers(&self, names: &mut [Name]) {
        self.generate("buffers", names);
    }

    fn delete_buffers(&self, names: &[Name]) {
        self.release("buffers", names);
    }

    fn bind_buffer(&self, target: u32, buffer: Name) {
        self.record(format!("bind_buffer({}, {})", target, buffer));
        self.bindings.borrow_mut().insert(target, buffer);
    }

    fn bind_buffer_range(&self, target: u32, index: u32, buffer: Name, offset: usize, size: usize) {
        self.record(format!("bind_buffer_range({}, {}, {}, {}, {})", target, index, buffer, offset, size));
    }

    fn buffer_data(&self, target: u32, size: usize, data: Option<&[u8]>, usage: u32) {
        self.record(format!("buffer_data({}, {}, {})", target, size, usage));
        self.bound_buffer_mut(target, |storage| {
            storage.clear();
            storage.resize(size, 0);
            if let Some(bytes) = data {
                let len = bytes.len().min(size);
                storage[..len].copy_from_slice(&bytes[..len]);
            }
        });
    }

    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
        self.record(format!("buffer_sub_data({}, {}, {})", target, offset, data.len()));
        let in_range = self.bound_buffer_mut(target, |storage| {
            if offset + data.len() > storage.len() {
                return false;
            }
            storage[offset..offset + data.len()].copy_from_slice(data);
            true
        });
        if in_range != Some(true) {
            self.push_error(consts::INVALID_VALUE);
        }
    }

    fn copy_buffer_sub_data(
        &self,
        read_target: u32,
        write_target: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        self.record(format!(
            "copy_buffer_sub_data({}, {}, {}, {}, {})",
            read_target, write_target, read_offset, write_offset, size
        ));
        let source = self
            .bound_buffer_mut(read_target, |storage| storage.get(read_offset..read_offset + size).map(|s| s.to_vec()))
            .flatten();
        let copied = source.and_then(|bytes| {
            self.bound_buffer_mut(write_target, |storage| {
                if write_offset + size > storage.len() {
                    return false;
                }
                storage[write_offset..write_offset + size].copy_from_slice(&bytes);
                true
            })
        });
        if copied != Some(true) {
            self.push_error(consts::INVALID_VALUE);
        }
    }

    fn get_buffer_sub_data(&self, target: u32, offset: usize, data: &mut [u8]) {
        self.record(format!("get_buffer_sub_data({}, {}, {})", target, offset, data.len()));
        self.bound_buffer_mut(target, |storage| {
            if let Some(source) = storage.get(offset..offset + data.len()) {
                data.copy_from_slice(source);
            }
        });
    }

    // ===== TEXTURES =====

    fn gen_textures(&self, names: &mut [Name]) {
        self.generate("textures", names);
    }

    fn delete_textures(&self, names: &[Name]) {
        self.release("textures", names);
    }

    fn bind_texture(&self, target: u32, texture: Name) {
        self.record(format!("bind_texture({}, {})", target, texture));
        self.bindings.borrow_mut().insert(target, texture);
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        self.record(format!("tex_parameter_i32({}, {}, {})", target, parameter, value));
    }

    fn tex_parameter_f32(&self, target: u32, parameter: u32, value: f32) {
        self.record(format!("tex_parameter_f32({}, {}, {})", target, parameter, value));
    }

    fn tex_parameter_i32_slice(&self, target: u32, parameter: u32, values: &[i32]) {
        self.record(format!("tex_parameter_i32_slice({}, {}, {:?})", target, parameter, values));
    }

    fn tex_parameter_f32_slice(&self, target: u32, parameter: u32, values: &[f32]) {
        self.record(format!("tex_parameter_f32_slice({}, {}, {:?})", target, parameter, values));
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
        self.record(format!(
            "tex_image_1d({}, {}, {}, {}, {}, {}, {})",
            target, level, internal_format, width, format, ty,
            pixels.map_or(0, |p| p.len())
        ));
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
        self.record(format!(
            "tex_image_2d({}, {}, {}, {}, {}, {}, {}, {})",
            target, level, internal_format, width, height, format, ty,
            pixels.map_or(0, |p| p.len())
        ));
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
        self.record(format!(
            "tex_image_3d({}, {}, {}, {}, {}, {}, {}, {}, {})",
            target, level, internal_format, width, height, depth, format, ty,
            pixels.map_or(0, |p| p.len())
        ));
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
        self.record(format!(
            "tex_sub_image_2d({}, {}, {}, {}, {}, {}, {}, {}, {})",
            target, level, x_offset, y_offset, width, height, format, ty, pixels.len()
        ));
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
        self.record(format!(
            "tex_sub_image_1d({}, {}, {}, {}, {}, {}, {})",
            target, level, x_offset, width, format, ty, pixels.len()
        ));
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
        self.record(format!(
            "tex_sub_image_3d({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
            target, level, x_offset, y_offset, z_offset, width, height, depth, format, ty,
            pixels.len()
        ));
    }

    /// Fills `pixels` with the texture name's low byte so reads are observable
    fn get_tex_image(&self, target: u32, level: i32, format: u32, ty: u32, pixels: &mut [u8]) {
        self.record(format!(
            "get_tex_image({}, {}, {}, {}, {})",
            target, level, format, ty, pixels.len()
        ));
        let texture = self.bound(target);
        pixels.fill(texture as u8);
    }

    fn tex_buffer(&self, target: u32, internal_format: u32, buffer: Name) {
        self.record(format!("tex_buffer({}, {}, {})", target, internal_format, buffer));
    }

    fn generate_mipmap(&self, target: u32) {
        self.record(format!("generate_mipmap({})", target));
    }

    // ===== SHADERS =====

    fn create_shader(&self, shader_type: u32) -> Name {
        self.record(format!("create_shader({})", shader_type));
        self.allocate("shader")
    }

    fn delete_shader(&self, shader: Name) {
        self.release("shader", &[shader]);
    }

    fn shader_source(&self, shader: Name, source: &str) {
        self.record(format!("shader_source({}, {})", shader, source.len()));
    }

    fn compile_shader(&self, shader: Name) {
        self.record(format!("compile_shader({})", shader));
    }

    fn shader_compile_status(&self, _shader: Name) -> bool {
        self.compile_status.get()
    }

    fn shader_info_log(&self, _shader: Name) -> String {
        self.info_log.borrow().clone()
    }

    // ===== PROGRAMS =====

    fn create_program(&self) -> Name {
        self.record("create_program()".to_string());
        self.allocate("program")
    }

    fn delete_program(&self, program: Name) {
        self.release("program", &[program]);
    }

    fn attach_shader(&self, program: Name, shader: Name) {
        self.record(format!("attach_shader({}, {})", program, shader));
    }

    fn detach_shader(&self, program: Name, shader: Name) {
        self.record(format!("detach_shader({}, {})", program, shader));
    }

    fn link_program(&self, program: Name) {
        self.record(format!("link_program({})", program));
    }

    fn program_link_status(&self, _program: Name) -> bool {
        self.link_status.get()
    }

    fn program_info_log(&self, _program: Name) -> String {
        self.info_log.borrow().clone()
    }

    fn use_program(&self, program: Name) {
        self.record(format!("use_program({})", program));
    }

    fn active_attributes(&self, _program: Name) -> Vec<ActiveVariable> {
        self.attributes.borrow().clone()
    }

    fn active_uniforms(&self, _program: Name) -> Vec<ActiveVariable> {
        self.uniforms.borrow().clone()
    }

    fn active_uniform_blocks(&self, _program: Name) -> Vec<ActiveUniformBlock> {
        self.uniform_blocks.borrow().clone()
    }

    fn uniform_f32(&self, location: i32, components: u32, values: &[f32]) {
        self.record(format!("uniform_f32({}, {}, {:?})", location, components, values));
    }

    fn uniform_i32(&self, location: i32, components: u32, values: &[i32]) {
        self.record(format!("uniform_i32({}, {}, {:?})", location, components, values));
    }

    fn uniform_u32(&self, location: i32, components: u32, values: &[u32]) {
        self.record(format!("uniform_u32({}, {}, {:?})", location, components, values));
    }

    fn uniform_matrix_f32(&self, location: i32, dimension: u32, transpose: bool, values: &[f32]) {
        self.record(format!(
            "uniform_matrix_f32({}, {}, {}, {})",
            location, dimension, transpose, values.len()
        ));
    }

    fn uniform_matrix_nonsquare_f32(
        &self,
        location: i32,
        columns: u32,
        rows: u32,
        transpose: bool,
        values: &[f32],
    ) {
        self.record(format!(
            "uniform_matrix_nonsquare_f32({}, {}x{}, {}, {})",
            location, columns, rows, transpose, values.len()
        ));
    }

    // ===== VERTEX ARRAYS =====

    fn gen_vertex_arrays(&self, names: &mut [Name]) {
        self.generate("vertex_arrays", names);
    }

    fn delete_vertex_arrays(&self, names: &[Name]) {
        self.release("vertex_arrays", names);
    }

    fn bind_vertex_array(&self, vertex_array: Name) {
        self.record(format!("bind_vertex_array({})", vertex_array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(format!("enable_vertex_attrib_array({})", index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(format!("disable_vertex_attrib_array({})", index));
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
        self.record(format!(
            "vertex_attrib_pointer({}, {}, {}, {}, {}, {})",
            index, size, ty, normalized, stride, offset
        ));
    }

    // ===== RENDERBUFFERS =====

    fn gen_renderbuffers(&self, names: &mut [Name]) {
        self.generate("renderbuffers", names);
    }

    fn delete_renderbuffers(&self, names: &[Name]) {
        self.release("renderbuffers", names);
    }

    fn bind_renderbuffer(&self, renderbuffer: Name) {
        self.record(format!("bind_renderbuffer({})", renderbuffer));
    }

    fn renderbuffer_storage_multisample(&self, samples: i32, internal_format: u32, width: i32, height: i32) {
        self.record(format!(
            "renderbuffer_storage_multisample({}, {}, {}, {})",
            samples, internal_format, width, height
        ));
    }

    // ===== FRAMEBUFFERS =====

    fn gen_framebuffers(&self, names: &mut [Name]) {
        self.generate("framebuffers", names);
    }

    fn delete_framebuffers(&self, names: &[Name]) {
        self.release("framebuffers", names);
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: Name) {
        self.record(format!("bind_framebuffer({}, {})", target, framebuffer));
    }

    fn framebuffer_texture(&self, target: u32, attachment: u32, texture: Name, level: i32) {
        self.record(format!("framebuffer_texture({}, {}, {}, {})", target, attachment, texture, level));
    }

    fn framebuffer_texture_2d(&self, target: u32, attachment: u32, texture_target: u32, texture: Name, level: i32) {
        self.record(format!(
            "framebuffer_texture_2d({}, {}, {}, {}, {})",
            target, attachment, texture_target, texture, level
        ));
    }

    fn framebuffer_texture_layer(&self, target: u32, attachment: u32, texture: Name, level: i32, layer: i32) {
        self.record(format!(
            "framebuffer_texture_layer({}, {}, {}, {}, {})",
            target, attachment, texture, level, layer
        ));
    }

    fn framebuffer_renderbuffer(&self, target: u32, attachment: u32, renderbuffer: Name) {
        self.record(format!("framebuffer_renderbuffer({}, {}, {})", target, attachment, renderbuffer));
    }

    fn check_framebuffer_status(&self, _target: u32) -> u32 {
        self.framebuffer_status.get()
    }

    // ===== QUERIES =====

    fn gen_queries(&self, names: &mut [Name]) {
        self.generate("queries", names);
    }

    fn delete_queries(&self, names: &[Name]) {
        self.release("queries", names);
    }

    fn begin_query(&self, target: u32, query: Name) {
        self.record(format!("begin_query({}, {})", target, query));
    }

    fn end_query(&self, target: u32) {
        self.record(format!("end_query({})", target));
    }

    fn query_result_u32(&self, _query: Name, parameter: u32) -> u32 {
        if parameter == consts::QUERY_RESULT_AVAILABLE {
            self.query_available.get() as u32
        } else {
            self.query_value.get()
        }
    }

    fn query_result_i32(&self, _query: Name, parameter: u32) -> i32 {
        if parameter == consts::QUERY_RESULT_AVAILABLE {
            self.query_available.get() as i32
        } else {
            self.query_value_i32.get()
        }
    }

    // ===== SYNC =====

    fn fence_sync(&self) -> Option<u64> {
        self.record("fence_sync()".to_string());
        if self.fail_generation.get() {
            return None;
        }
        let fence = self.next_fence.get();
        self.next_fence.set(fence + 1);
        self.live_fences.borrow_mut().push(fence);
        Some(fence)
    }

    fn client_wait_sync(&self, fence: u64, flags: u32, timeout_ns: u64) -> u32 {
        self.record(format!("client_wait_sync({}, {}, {})", fence, flags, timeout_ns));
        self.wait_status.get()
    }

    fn wait_sync(&self, fence: u64) {
        self.record(format!("wait_sync({})", fence));
    }

    fn delete_sync(&self, fence: u64) {
        self.record(format!("delete_sync({})", fence));
        let mut fences = self.live_fences.borrow_mut();
        match fences.iter().position(|&f| f == fence) {
            Some(index) => {
                fences.swap_remove(index);
            }
            None => self.invalid_deletes.borrow_mut().push(fence as Name),
        }
    }
}
