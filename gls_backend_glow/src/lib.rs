/*!
# GLS - glow backend

`gls::Device` implementation over the [glow](https://crates.io/crates/glow)
OpenGL bindings.

The caller creates the GL context (glutin, SDL, a browser canvas, ...) and
the `glow::Context`, then hands it to [`GlowDevice`]. All GLS objects built
on the device must stay on the thread where the context is current.

# Example

```ignore
use std::rc::Rc;
use gls_backend_glow::GlowDevice;

let gl = unsafe { glow::Context::from_loader_function(|s| window.get_proc_address(s)) };
let device = Rc::new(unsafe { GlowDevice::new(gl) });
// or GlowDevice::with_loader(gl, |s| window.get_proc_address(s)) for
// buffer textures, 1D sub-image uploads and signed query results

let mut vertices: gls::Buffer<GlowDevice> = gls::Buffer::new(device.clone());
vertices.data_slice(&[0.0f32, 0.5, -0.5, -0.5, 0.5, -0.5]);
```
*/

mod glow_device;
mod extra_fns;

pub use glow_device::GlowDevice;

// Re-export bindings so callers use the same glow version
pub use glow;
