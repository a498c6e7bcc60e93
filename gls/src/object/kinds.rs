/// Object kinds - generate/delete pairs for each GL object type

use crate::device::{Device, Name};
use super::object::ObjectKind;

pub struct BufferKind;

impl<D: Device> ObjectKind<D> for BufferKind {
    const LABEL: &'static str = "buffer";
    const GENERATE_CALL: &'static str = "gen_buffers";
    const DELETE_CALL: &'static str = "delete_buffers";

    fn generate(device: &D, names: &mut [Name]) {
        device.gen_buffers(names);
    }

    fn delete(device: &D, names: &[Name]) {
        device.delete_buffers(names);
    }
}

pub struct TextureKind;

impl<D: Device> ObjectKind<D> for TextureKind {
    const LABEL: &'static str = "texture";
    const GENERATE_CALL: &'static str = "gen_textures";
    const DELETE_CALL: &'static str = "delete_textures";

    fn generate(device: &D, names: &mut [Name]) {
        device.gen_textures(names);
    }

    fn delete(device: &D, names: &[Name]) {
        device.delete_textures(names);
    }
}

/// Shaders are created one at a time with their stage baked in
pub struct ShaderKind<const TYPE: u32>;

impl<D: Device, const TYPE: u32> ObjectKind<D> for ShaderKind<TYPE> {
    const LABEL: &'static str = "shader";
    const GENERATE_CALL: &'static str = "create_shader";
    const DELETE_CALL: &'static str = "delete_shader";

    fn generate(device: &D, names: &mut [Name]) {
        for name in names.iter_mut() {
            *name = device.create_shader(TYPE);
        }
    }

    fn delete(device: &D, names: &[Name]) {
        for &name in names {
            device.delete_shader(name);
        }
    }
}

pub struct ProgramKind;

impl<D: Device> ObjectKind<D> for ProgramKind {
    const LABEL: &'static str = "program";
    const GENERATE_CALL: &'static str = "create_program";
    const DELETE_CALL: &'static str = "delete_program";

    fn generate(device: &D, names: &mut [Name]) {
        for name in names.iter_mut() {
            *name = device.create_program();
        }
    }

    fn delete(device: &D, names: &[Name]) {
        for &name in names {
            device.delete_program(name);
        }
    }
}

pub struct VertexArrayKind;

impl<D: Device> ObjectKind<D> for VertexArrayKind {
    const LABEL: &'static str = "vertex array";
    const GENERATE_CALL: &'static str = "gen_vertex_arrays";
    const DELETE_CALL: &'static str = "delete_vertex_arrays";

    fn generate(device: &D, names: &mut [Name]) {
        device.gen_vertex_arrays(names);
    }

    fn delete(device: &D, names: &[Name]) {
        device.delete_vertex_arrays(names);
    }
}

pub struct RenderbufferKind;

impl<D: Device> ObjectKind<D> for RenderbufferKind {
    const LABEL: &'static str = "renderbuffer";
    const GENERATE_CALL: &'static str = "gen_renderbuffers";
    const DELETE_CALL: &'static str = "delete_renderbuffers";

    fn generate(device: &D, names: &mut [Name]) {
        device.gen_renderbuffers(names);
    }

    fn delete(device: &D, names: &[Name]) {
        device.delete_renderbuffers(names);
    }
}

pub struct FramebufferKind;

impl<D: Device> ObjectKind<D> for FramebufferKind {
    const LABEL: &'static str = "framebuffer";
    const GENERATE_CALL: &'static str = "gen_framebuffers";
    const DELETE_CALL: &'static str = "delete_framebuffers";

    fn generate(device: &D, names: &mut [Name]) {
        device.gen_framebuffers(names);
    }

    fn delete(device: &D, names: &[Name]) {
        device.delete_framebuffers(names);
    }
}

pub struct QueryKind;

impl<D: Device> ObjectKind<D> for QueryKind {
    const LABEL: &'static str = "query";
    const GENERATE_CALL: &'static str = "gen_queries";
    const DELETE_CALL: &'static str = "delete_queries";

    fn generate(device: &D, names: &mut [Name]) {
        device.gen_queries(names);
    }

    fn delete(device: &D, names: &[Name]) {
        device.delete_queries(names);
    }
}
