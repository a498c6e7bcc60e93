/// Camera - perspective projection and look-direction view
///
/// The projection, view and combined matrices are cached. Each has its own
/// dirty flag, so changing the position only recomputes the view and the
/// combined product, never the projection. Matrix accessors take `&mut self`
/// and compute on demand.
///
/// Degenerate parameters are not checked: `far == near`, a field of view at
/// a multiple of pi, or a zero direction/up vector produce inf/NaN matrices.

use super::math::{
    matrix_identity, matrix_mult, quaternion_from_axis_angle, quaternion_normalize,
    quaternion_rotate, vector_cross, vector_normalize, Matrix4, Quaternion, Real, Vector3,
};

#[allow(clippy::approx_constant)]
const PI: f64 = 3.14159265359;

/// Perspective camera over `f32` or `f64`
#[derive(Debug, Clone)]
pub struct Camera<T: Real = f32> {
    fov: T,
    aspect: T,
    near: T,
    far: T,
    position: Vector3<T>,
    direction: Vector3<T>,
    up: Vector3<T>,

    projection: Matrix4<T>,
    view: Matrix4<T>,
    matrix: Matrix4<T>,
    projection_dirty: bool,
    view_dirty: bool,
    matrix_dirty: bool,
}

impl<T: Real> Default for Camera<T> {
    /// 90 degree field of view, aspect 1, near 1, far 1000, at the origin
    /// looking down -Z with +Y up
    fn default() -> Self {
        Self {
            fov: T::from_f64(PI * 90.0 / 180.0),
            aspect: T::ONE,
            near: T::ONE,
            far: T::from_f64(1000.0),
            position: [T::ZERO; 3],
            direction: [T::ZERO, T::ZERO, -T::ONE],
            up: [T::ZERO, T::ONE, T::ZERO],
            projection: matrix_identity(),
            view: matrix_identity(),
            matrix: matrix_identity(),
            projection_dirty: true,
            view_dirty: true,
            matrix_dirty: true,
        }
    }
}

impl<T: Real> Camera<T> {
    /// Camera with the given projection and the default view
    ///
    /// `fov` is the vertical field of view in radians. `near < far` and
    /// `aspect > 0` are assumed.
    pub fn new(fov: T, aspect: T, near_distance: T, far_distance: T) -> Self {
        Self {
            fov,
            aspect,
            near: near_distance,
            far: far_distance,
            ..Self::default()
        }
    }

    /// Camera with the given projection and view
    ///
    /// `direction` and `up` are normalized.
    pub fn with_view(
        fov: T,
        aspect: T,
        near_distance: T,
        far_distance: T,
        position: Vector3<T>,
        direction: Vector3<T>,
        up: Vector3<T>,
    ) -> Self {
        Self {
            position,
            direction: vector_normalize(&direction),
            up: vector_normalize(&up),
            ..Self::new(fov, aspect, near_distance, far_distance)
        }
    }

    // ===== PROJECTION PARAMETERS =====

    #[inline]
    pub fn fov(&self) -> T {
        self.fov
    }

    pub fn set_fov(&mut self, fov: T) {
        if self.fov == fov {
            return;
        }
        self.fov = fov;
        self.invalidate_projection();
    }

    #[inline]
    pub fn aspect(&self) -> T {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: T) {
        if self.aspect == aspect {
            return;
        }
        self.aspect = aspect;
        self.invalidate_projection();
    }

    #[inline]
    pub fn near_distance(&self) -> T {
        self.near
    }

    pub fn set_near_distance(&mut self, near_distance: T) {
        if self.near == near_distance {
            return;
        }
        self.near = near_distance;
        self.invalidate_projection();
    }

    #[inline]
    pub fn far_distance(&self) -> T {
        self.far
    }

    pub fn set_far_distance(&mut self, far_distance: T) {
        if self.far == far_distance {
            return;
        }
        self.far = far_distance;
        self.invalidate_projection();
    }

    // ===== VIEW PARAMETERS =====

    #[inline]
    pub fn position(&self) -> &Vector3<T> {
        &self.position
    }

    pub fn set_position(&mut self, position: Vector3<T>) {
        if self.position == position {
            return;
        }
        self.position = position;
        self.invalidate_view();
    }

    /// Unit look direction
    #[inline]
    pub fn direction(&self) -> &Vector3<T> {
        &self.direction
    }

    /// Set the look direction (normalized before storing)
    pub fn set_direction(&mut self, direction: Vector3<T>) {
        let direction = vector_normalize(&direction);
        if self.direction == direction {
            return;
        }
        self.direction = direction;
        self.invalidate_view();
    }

    /// Unit up vector
    #[inline]
    pub fn up(&self) -> &Vector3<T> {
        &self.up
    }

    /// Set the up vector (normalized before storing)
    pub fn set_up(&mut self, up: Vector3<T>) {
        let up = vector_normalize(&up);
        if self.up == up {
            return;
        }
        self.up = up;
        self.invalidate_view();
    }

    // ===== MOVEMENT =====

    /// Translate by `offset` in world space
    pub fn move_by(&mut self, offset: Vector3<T>) {
        let p = self.position;
        self.set_position([p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]]);
    }

    /// Translate along the camera's own axes
    ///
    /// `offset` is `(x, y, z)` with `y` along up. Both other components are
    /// subtracted: positive `x` moves against the right vector
    /// `normalize(cross(direction, up))` and positive `z` moves against the
    /// look direction, so `z = -1` steps forward.
    pub fn move_relative(&mut self, offset: Vector3<T>) {
        let right = vector_normalize(&vector_cross(&self.direction, &self.up));
        let d = self.direction;
        let u = self.up;

        let mut delta = [-d[0] * offset[2], -d[1] * offset[2], -d[2] * offset[2]];
        for i in 0..3 {
            delta[i] = delta[i] + u[i] * offset[1] - right[i] * offset[0];
        }
        self.move_by(delta);
    }

    // ===== ORIENTATION =====

    /// Rotate direction and up by the unit quaternion `rotation`
    ///
    /// Always invalidates the view, even for the identity rotation.
    pub fn rotate(&mut self, rotation: Quaternion<T>) {
        self.direction = vector_normalize(&quaternion_rotate(&rotation, &self.direction));
        self.up = vector_normalize(&quaternion_rotate(&rotation, &self.up));
        self.invalidate_view();
    }

    /// Rotate by `angle` radians about the unit vector `axis`
    pub fn rotate_axis_angle(&mut self, axis: Vector3<T>, angle: T) {
        self.rotate(quaternion_from_axis_angle(&axis, angle));
    }

    /// Set an absolute orientation from yaw, pitch and roll (radians)
    ///
    /// Starting from direction -Z and up +Y: yaw turns the direction about
    /// world +Y (positive yaw turns right), pitch then turns it about the
    /// yawed right axis, and roll finally turns the up vector about the
    /// resulting direction. The previous orientation is discarded.
    pub fn set_orientation_taitbryan(&mut self, yaw: T, pitch: T, roll: T) {
        let world_up = [T::ZERO, T::ONE, T::ZERO];

        let yaw_rotation = quaternion_from_axis_angle(&world_up, -yaw);
        let yawed = quaternion_rotate(&yaw_rotation, &[T::ZERO, T::ZERO, -T::ONE]);
        let yawed = quaternion_normalize(&[yawed[0], yawed[1], yawed[2], T::ZERO]);
        let yawed = [yawed[0], yawed[1], yawed[2]];

        let right = vector_normalize(&vector_cross(&world_up, &yawed));
        let pitch_rotation = quaternion_from_axis_angle(&right, pitch);
        self.direction = vector_normalize(&quaternion_rotate(&pitch_rotation, &yawed));

        let up = vector_normalize(&vector_cross(&self.direction, &right));
        let roll_rotation = quaternion_from_axis_angle(&self.direction, roll);
        self.up = vector_normalize(&quaternion_rotate(&roll_rotation, &up));

        self.invalidate_view();
    }

    // ===== MATRICES =====

    /// Perspective projection, depth mapped to [-1, 1]
    pub fn projection(&mut self) -> &Matrix4<T> {
        self.update_projection();
        &self.projection
    }

    /// World to view transform
    pub fn view(&mut self) -> &Matrix4<T> {
        self.update_view();
        &self.view
    }

    /// `projection * view`
    pub fn matrix(&mut self) -> &Matrix4<T> {
        self.update_projection();
        self.update_view();
        if self.matrix_dirty {
            self.matrix = matrix_mult(&self.projection, &self.view);
            self.matrix_dirty = false;
        }
        &self.matrix
    }

    fn update_projection(&mut self) {
        if !self.projection_dirty {
            return;
        }

        let zero = T::ZERO;
        let one = T::ONE;
        let focal = one / (self.fov / T::TWO).tan();
        let depth = self.far - self.near;

        self.projection = [
            one / (self.aspect * (self.fov / T::TWO).tan()), zero, zero, zero,
            zero, focal, zero, zero,
            zero, zero, -(self.far + self.near) / depth, -one,
            zero, zero, -(T::TWO * self.far * self.near) / depth, zero,
        ];
        self.projection_dirty = false;
    }

    fn update_view(&mut self) {
        if !self.view_dirty {
            return;
        }

        let zero = T::ZERO;
        let one = T::ONE;
        let d = self.direction;
        let s = vector_normalize(&vector_cross(&d, &self.up));
        let u = vector_cross(&s, &d);
        let p = self.position;

        let rotation = [
            s[0], u[0], -d[0], zero,
            s[1], u[1], -d[1], zero,
            s[2], u[2], -d[2], zero,
            zero, zero, zero, one,
        ];
        let translation = [
            one, zero, zero, zero,
            zero, one, zero, zero,
            zero, zero, one, zero,
            -p[0], -p[1], -p[2], one,
        ];
        self.view = matrix_mult(&rotation, &translation);
        self.view_dirty = false;
    }

    fn invalidate_projection(&mut self) {
        self.projection_dirty = true;
        self.matrix_dirty = true;
    }

    fn invalidate_view(&mut self) {
        self.view_dirty = true;
        self.matrix_dirty = true;
    }
}

// ===== GLAM INTEROP =====

impl Camera<f32> {
    pub fn projection_mat4(&mut self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(self.projection())
    }

    pub fn view_mat4(&mut self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(self.view())
    }

    pub fn matrix_mat4(&mut self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(self.matrix())
    }
}

impl Camera<f64> {
    pub fn projection_mat4(&mut self) -> glam::DMat4 {
        glam::DMat4::from_cols_array(self.projection())
    }

    pub fn view_mat4(&mut self) -> glam::DMat4 {
        glam::DMat4::from_cols_array(self.view())
    }

    pub fn matrix_mat4(&mut self) -> glam::DMat4 {
        glam::DMat4::from_cols_array(self.matrix())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
