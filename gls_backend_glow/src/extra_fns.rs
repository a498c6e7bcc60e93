/// ExtraFns - GL entry points GLS needs that glow does not wrap
///
/// glow 0.14 has no glTexBuffer, glTexSubImage1D or glGetQueryObjectiv and
/// keeps its own function table private. These are resolved through the
/// same loader the context was created with. Entry points the loader does
/// not know stay `None`.

use std::ffi::c_void;

type TexBufferFn = unsafe extern "system" fn(target: u32, internal_format: u32, buffer: u32);
type TexSubImage1dFn = unsafe extern "system" fn(
    target: u32,
    level: i32,
    x_offset: i32,
    width: i32,
    format: u32,
    ty: u32,
    pixels: *const c_void,
);
type GetQueryObjectivFn = unsafe extern "system" fn(query: u32, parameter: u32, value: *mut i32);

#[derive(Default)]
pub(crate) struct ExtraFns {
    tex_buffer: Option<TexBufferFn>,
    tex_sub_image_1d: Option<TexSubImage1dFn>,
    get_query_objectiv: Option<GetQueryObjectivFn>,
}

/// Reinterpret a loader result as a function pointer (`None` for null)
///
/// # Safety
///
/// `pointer` must be null or the address of a function with signature `F`.
unsafe fn resolve<F: Copy>(pointer: *const c_void) -> Option<F> {
    debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*const c_void>());
    if pointer.is_null() {
        None
    } else {
        Some(std::mem::transmute_copy::<*const c_void, F>(&pointer))
    }
}

impl ExtraFns {
    /// Resolve every entry point through `loader`
    ///
    /// # Safety
    ///
    /// `loader` must return null or a pointer to the GL function it was
    /// asked for, valid for the context the device wraps.
    pub(crate) unsafe fn load<F>(mut loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        Self {
            tex_buffer: resolve(loader("glTexBuffer")),
            tex_sub_image_1d: resolve(loader("glTexSubImage1D")),
            get_query_objectiv: resolve(loader("glGetQueryObjectiv")),
        }
    }

    /// glTexBuffer; false if it was not loaded
    pub(crate) unsafe fn tex_buffer(&self, target: u32, internal_format: u32, buffer: u32) -> bool {
        match self.tex_buffer {
            Some(f) => {
                f(target, internal_format, buffer);
                true
            }
            None => false,
        }
    }

    /// glTexSubImage1D from client memory; false if it was not loaded
    #[allow(clippy::too_many_arguments)]
    pub(crate) unsafe fn tex_sub_image_1d(
        &self,
        target: u32,
        level: i32,
        x_offset: i32,
        width: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) -> bool {
        match self.tex_sub_image_1d {
            Some(f) => {
                f(target, level, x_offset, width, format, ty, pixels.as_ptr().cast());
                true
            }
            None => false,
        }
    }

    /// glGetQueryObjectiv; None if it was not loaded
    pub(crate) unsafe fn get_query_objectiv(&self, query: u32, parameter: u32) -> Option<i32> {
        self.get_query_objectiv.map(|f| {
            let mut value = 0;
            f(query, parameter, &mut value);
            value
        })
    }
}

#[cfg(test)]
#[path = "extra_fns_tests.rs"]
mod tests;
