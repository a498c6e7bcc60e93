/// Camera math - scalar trait and the small vector/quaternion/matrix helpers
///
/// Vectors, quaternions and matrices are plain arrays. Matrices are stored
/// column-major, element `(row, col)` at index `col * 4 + row`, which is the
/// layout `glUniformMatrix4fv` expects with `transpose = false`.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 3D vector `[x, y, z]`
pub type Vector3<T> = [T; 3];

/// Quaternion `[x, y, z, w]`
pub type Quaternion<T> = [T; 4];

/// 4x4 matrix, column-major
pub type Matrix4<T> = [T; 16];

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point scalar a [`Camera`](super::Camera) computes with
///
/// Sealed: implemented for `f32` and `f64` only.
pub trait Real:
    private::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    fn from_f64(value: f64) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
}

macro_rules! impl_real {
    ($ty:ty) => {
        impl Real for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                <$ty>::tan(self)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

// ===== VECTORS =====

pub(crate) fn vector_length<T: Real>(v: &Vector3<T>) -> T {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Zero-length input yields NaN components
pub(crate) fn vector_normalize<T: Real>(v: &Vector3<T>) -> Vector3<T> {
    let length = vector_length(v);
    [v[0] / length, v[1] / length, v[2] / length]
}

pub(crate) fn vector_cross<T: Real>(v: &Vector3<T>, w: &Vector3<T>) -> Vector3<T> {
    [
        v[1] * w[2] - v[2] * w[1],
        v[2] * w[0] - v[0] * w[2],
        v[0] * w[1] - v[1] * w[0],
    ]
}

// ===== QUATERNIONS =====

pub(crate) fn quaternion_normalize<T: Real>(q: &Quaternion<T>) -> Quaternion<T> {
    let length = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    [q[0] / length, q[1] / length, q[2] / length, q[3] / length]
}

pub(crate) fn quaternion_conjugate<T: Real>(q: &Quaternion<T>) -> Quaternion<T> {
    [-q[0], -q[1], -q[2], q[3]]
}

/// Hamilton product `q * r`
pub(crate) fn quaternion_multiply<T: Real>(q: &Quaternion<T>, r: &Quaternion<T>) -> Quaternion<T> {
    [
        q[0] * r[3] + q[3] * r[0] + q[1] * r[2] - q[2] * r[1],
        q[1] * r[3] + q[3] * r[1] + q[2] * r[0] - q[0] * r[2],
        q[2] * r[3] + q[3] * r[2] + q[0] * r[1] - q[1] * r[0],
        q[3] * r[3] - q[0] * r[0] - q[1] * r[1] - q[2] * r[2],
    ]
}

/// Unit quaternion rotating by `angle` radians about `axis`
pub(crate) fn quaternion_from_axis_angle<T: Real>(axis: &Vector3<T>, angle: T) -> Quaternion<T> {
    let half = angle / T::TWO;
    let sin = half.sin();
    [axis[0] * sin, axis[1] * sin, axis[2] * sin, half.cos()]
}

/// `q * (v, 0) * conj(q)`, the vector part of the result
pub(crate) fn quaternion_rotate<T: Real>(q: &Quaternion<T>, v: &Vector3<T>) -> Vector3<T> {
    let pure = [v[0], v[1], v[2], T::ZERO];
    let rotated = quaternion_multiply(&quaternion_multiply(q, &pure), &quaternion_conjugate(q));
    [rotated[0], rotated[1], rotated[2]]
}

// ===== MATRICES =====

pub(crate) fn matrix_identity<T: Real>() -> Matrix4<T> {
    let mut m = [T::ZERO; 16];
    m[0] = T::ONE;
    m[5] = T::ONE;
    m[10] = T::ONE;
    m[15] = T::ONE;
    m
}

/// `m * n`, both column-major
pub(crate) fn matrix_mult<T: Real>(m: &Matrix4<T>, n: &Matrix4<T>) -> Matrix4<T> {
    let mut result = [T::ZERO; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = T::ZERO;
            for k in 0..4 {
                sum = sum + m[k * 4 + row] * n[col * 4 + k];
            }
            result[col * 4 + row] = sum;
        }
    }
    result
}
