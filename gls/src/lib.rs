/*!
# GLS

Thin, zero-overhead RAII layer over OpenGL objects, plus a generic 3D camera.

Every GL object (buffer, texture, shader, program, vertex array,
renderbuffer, framebuffer, query) is owned by exactly one Rust value. The
name is generated on construction and deleted exactly once on drop.
Ownership moves with Rust moves and nothing is clonable.

GL entry points are reached through the [`Device`] trait, so the wrappers
are generic over the binding layer (see `gls_backend_glow` for a `glow`
implementation) and testable without a GL context.

## Architecture

- **device**: `Device` trait (native function table) and GL enum values
- **object**: `Object<K, D>` RAII handle and the typed object wrappers
- **camera**: `Camera<T>` perspective camera with lazily cached matrices
- **check**: debug-build GL error checks (`gls_check!`)
- **log**: pluggable logger used for every diagnostic

## Error checks

In builds with `debug_assertions` (or with the `error-check` feature) every
wrapped GL call is followed by a `glGetError` whose result is logged with the
call text, file and line. Otherwise the checks compile to nothing.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod check;
pub mod device;
pub mod object;
pub mod camera;

// Error types
pub use error::{Error, Result};

// Logger registry
pub use diagnostics::Diagnostics;

// Native function table
pub use device::{consts, Device, Name, NULL_NAME};

// Objects (`object::Sync` stays namespaced: it would shadow the prelude trait)
pub use object::{
    Object, ObjectKind, Buffer, Texture, BufferTexture, Shader, AttachedShader, VertexShader,
    FragmentShader, GeometryShader, ComputeShader, Program, UniformValue,
    VertexArray, AttributeFormat, Renderbuffer, Framebuffer, Query,
};

// Camera
pub use camera::Camera;

// Re-export math library at crate root
pub use glam;
