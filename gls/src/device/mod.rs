/// Device module - native GL function table and enum values

pub mod consts;
mod device;

#[cfg(test)]
pub(crate) mod mock_device;

pub use device::*;
