/// Object - RAII owner of one GL object name
///
/// An `Object<K, D>` generates its name on construction through
/// `K::generate` and deletes it exactly once on drop through `K::delete`.
/// Ownership moves with Rust moves; there is no `Clone`, so two live handles
/// can never own the same name.
///
/// `take()` and `swap()` cover the explicit moved-from states: the source of
/// a `take()` keeps the sentinel name `NULL_NAME` and its drop is a no-op.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::check::{check_error, checks_enabled};
use crate::device::{consts, Device, Name, NULL_NAME};
use crate::error::{Error, Result};
use crate::gls_error;

/// Compile-time pair of generate/delete operations for one GL object kind
///
/// Implemented by zero-sized marker types (see `kinds.rs`). Both operations
/// work on slices to match the `glGen*`/`glDelete*` shape; `Object` always
/// passes exactly one name.
pub trait ObjectKind<D: Device> {
    /// Lowercase kind name used in diagnostics ("buffer", "texture", ...)
    const LABEL: &'static str;

    /// Device call that generates names, named in creation diagnostics
    const GENERATE_CALL: &'static str;

    /// Device call that deletes names, named in error checks on drop
    const DELETE_CALL: &'static str;

    /// Fill `names` with freshly generated names (NULL_NAME on failure)
    fn generate(device: &D, names: &mut [Name]);

    /// Delete every name in `names`
    fn delete(device: &D, names: &[Name]);
}

/// RAII handle owning exactly one GL object name
///
/// # Example
///
/// ```ignore
/// let device = Rc::new(device);
/// let a: Object<BufferKind, _> = Object::new(device.clone());
/// let b = a;                  // ownership moves, nothing released
/// drop(b);                    // glDeleteBuffers(1, &name)
/// ```
///
/// Handles are not clonable:
///
/// ```compile_fail
/// fn requires_clone<T: Clone>() {}
/// fn check<D: gls::Device>() {
///     requires_clone::<gls::Object<gls::object::BufferKind, D>>();
/// }
/// ```
pub struct Object<K, D>
where
    K: ObjectKind<D>,
    D: Device,
{
    device: Rc<D>,
    name: Name,
    _kind: PhantomData<fn() -> K>,
}

impl<K, D> Object<K, D>
where
    K: ObjectKind<D>,
    D: Device,
{
    /// Generate a new object
    ///
    /// Never fails. If the device hands back the sentinel (or reports an
    /// error right after generation), a creation error is logged in builds
    /// with error checks and the handle is left invalid.
    pub fn new(device: Rc<D>) -> Self {
        let mut names = [NULL_NAME];
        K::generate(&device, &mut names);

        if checks_enabled() {
            let code = device.get_error();
            if names[0] == NULL_NAME || code != consts::NO_ERROR {
                gls_error!(
                    "gls::Object",
                    "{} in {}",
                    Error::ResourceCreation { kind: K::LABEL, code },
                    K::GENERATE_CALL
                );
            }
        }

        Self {
            device,
            name: names[0],
            _kind: PhantomData,
        }
    }

    /// Generate a new object, returning an error if no name was produced
    pub fn try_new(device: Rc<D>) -> Result<Self> {
        let mut names = [NULL_NAME];
        K::generate(&device, &mut names);

        if names[0] == NULL_NAME {
            return Err(Error::ResourceCreation {
                kind: K::LABEL,
                code: device.get_error(),
            });
        }

        Ok(Self {
            device,
            name: names[0],
            _kind: PhantomData,
        })
    }

    /// Current name (NULL_NAME once moved-from)
    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// True if this handle currently owns a name
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.name != NULL_NAME
    }

    /// Device this object was created on
    #[inline]
    pub fn device(&self) -> &Rc<D> {
        &self.device
    }

    /// Move the owned name into a new handle, leaving this one empty
    pub fn take(&mut self) -> Self {
        Self {
            device: self.device.clone(),
            name: std::mem::replace(&mut self.name, NULL_NAME),
            _kind: PhantomData,
        }
    }

    /// Exchange ownership with another handle of the same kind
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<K, D> Drop for Object<K, D>
where
    K: ObjectKind<D>,
    D: Device,
{
    fn drop(&mut self) {
        // glow cannot represent name 0, so the sentinel never reaches the device
        if self.name != NULL_NAME {
            K::delete(&self.device, &[self.name]);
            if checks_enabled() {
                check_error(&*self.device, K::DELETE_CALL, file!(), line!());
            }
        }
    }
}

impl<K, D> fmt::Debug for Object<K, D>
where
    K: ObjectKind<D>,
    D: Device,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("kind", &K::LABEL)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;
