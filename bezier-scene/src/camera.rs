use cgmath::{
    perspective, Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, SquareMatrix, Vector3,
};

use crate::{config::CameraConfig, view::ViewState};

pub trait Camera {
    /// Returns `(view, projection)`.
    fn get_view_transform(&self) -> (Matrix4<f32>, Matrix4<f32>);

    fn position(&self) -> Vector3<f32>;
    fn direction(&self) -> Vector3<f32>;
}

#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    view_matrix: Matrix4<f32>,
    projection_matrix: Matrix4<f32>,
    eye: Point3<f32>,
    center: Point3<f32>,
    up: Vector3<f32>,
    fov: Deg<f32>,
    aspect: f32,
    near: f32,
    far: f32,
}

impl PerspectiveCamera {
    pub const MIN_FOV: f32 = 1f32;
    pub const MAX_FOV: f32 = 135f32;

    /// Expects a config that passed [`CameraConfig::validate`].
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
            eye: Point3::from(config.eye),
            center: Point3::from(config.center),
            up: Vector3::from(config.up),
            fov: Deg(config.fov_y_degrees.clamp(Self::MIN_FOV, Self::MAX_FOV)),
            aspect: config.aspect.max(f32::EPSILON),
            near: config.near,
            far: config.far,
        };
        camera.update();
        camera
    }

    pub fn update(&mut self) {
        self.view_matrix = Matrix4::look_at_rh(self.eye, self.center, self.up);
        self.projection_matrix = perspective(self.fov, self.aspect, self.near, self.far);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite camera aspect {}", value);
            return;
        }
        self.aspect = value.max(f32::EPSILON);
        self.update();
    }

    pub fn set_fov(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite camera fov {}", value);
            return;
        }
        self.fov = Deg(value.clamp(Self::MIN_FOV, Self::MAX_FOV));
        self.update();
    }

    pub fn set_eye(&mut self, value: Vector3<f32>) {
        self.eye = Point3::from_vec(value);
        self.update();
    }

    /// `projection * view * Rx * Ry`, the transform every model is built upon.
    pub fn base_transform(&self, view: &ViewState) -> Matrix4<f32> {
        let rotate_x = Matrix4::from_angle_x(Deg(view.angle_x));
        let rotate_y = Matrix4::from_angle_y(Deg(view.angle_y));
        self.projection_matrix * self.view_matrix * rotate_x * rotate_y
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl Camera for PerspectiveCamera {
    fn get_view_transform(&self) -> (Matrix4<f32>, Matrix4<f32>) {
        (self.view_matrix, self.projection_matrix)
    }

    fn position(&self) -> Vector3<f32> {
        self.eye.to_vec()
    }

    fn direction(&self) -> Vector3<f32> {
        (self.center - self.eye).normalize()
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{AbsDiffEq, Vector3, Vector4};

    use super::{Camera, PerspectiveCamera};
    use crate::view::ViewState;

    #[test]
    fn test_view_moves_eye_to_origin() {
        let camera = PerspectiveCamera::default();
        let (view, _) = camera.get_view_transform();
        let eye = view * camera.position().extend(1f32);
        assert!(eye.abs_diff_eq(&Vector4::new(0f32, 0f32, 0f32, 1f32), 1e-5));
        assert_eq!(Vector3::new(0f32, 0f32, -1f32), camera.direction());
    }

    #[test]
    fn test_base_transform_without_rotation() {
        let camera = PerspectiveCamera::default();
        let (view, projection) = camera.get_view_transform();
        assert_eq!(projection * view, camera.base_transform(&ViewState::new(0)));
    }

    #[test]
    fn test_base_transform_rotates_about_y() {
        let camera = PerspectiveCamera::default();
        let mut state = ViewState::new(0);
        state.angle_y = 90f32;
        let (view, projection) = camera.get_view_transform();
        // +X turns onto -Z before the camera is applied.
        let expected = projection * view * Vector4::new(0f32, 0f32, -1f32, 1f32);
        let actual = camera.base_transform(&state) * Vector4::new(1f32, 0f32, 0f32, 1f32);
        assert!(actual.abs_diff_eq(&expected, 1e-5), "{:?} {:?}", actual, expected);
    }

    #[test]
    fn test_non_finite_setters_are_ignored() {
        let mut camera = PerspectiveCamera::default();
        let before = camera.get_view_transform();
        camera.set_aspect(f32::NAN);
        camera.set_fov(f32::INFINITY);
        assert_eq!(1f32, camera.aspect());
        assert_eq!(before, camera.get_view_transform());
    }
}
