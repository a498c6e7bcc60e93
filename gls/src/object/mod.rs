/// Object module - RAII handle and the GL object wrappers built on it

mod object;
mod kinds;
mod buffer;
mod texture;
mod buffer_texture;
mod shader;
mod program;
mod vertex_array;
mod renderbuffer;
mod framebuffer;
mod query;
mod sync;

pub use object::{Object, ObjectKind};
pub use kinds::{
    BufferKind, TextureKind, ShaderKind, ProgramKind, VertexArrayKind,
    RenderbufferKind, FramebufferKind, QueryKind,
};
pub use buffer::Buffer;
pub use texture::Texture;
pub use buffer_texture::BufferTexture;
pub use shader::{Shader, AttachedShader, VertexShader, FragmentShader, GeometryShader, ComputeShader};
pub use program::{Program, UniformValue};
pub use vertex_array::{VertexArray, AttributeFormat};
pub use renderbuffer::Renderbuffer;
pub use framebuffer::Framebuffer;
pub use query::Query;
pub use sync::Sync;
