/// Camera module - perspective camera with lazily computed matrices

mod camera;
mod math;

pub use camera::Camera;
pub use math::{Matrix4, Quaternion, Real, Vector3};
