use nalgebra::{Matrix4, Point3};

use crate::constants::{ASPECT_RATIO, FAR_PLANE, FIELD_OF_VIEW_DEG, NEAR_PLANE};
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Projection {
            fov_y_deg: FIELD_OF_VIEW_DEG,
            aspect: ASPECT_RATIO,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Matrix4<f64> {
        Matrix4::new_perspective(self.aspect, self.fov_y_deg.to_radians(), self.near, self.far)
    }
}

/// Translation shared by the body, wings, nose cone and canopies.
pub fn model_matrix(position: Vector2D) -> Matrix4<f64> {
    Matrix4::new_translation(&position.to_vector3(0.0))
}

pub fn model_view_projection(
    projection: &Matrix4<f64>,
    view: &Matrix4<f64>,
    model: &Matrix4<f64>,
) -> Matrix4<f64> {
    projection * view * model
}

/// Maps a model-space point to normalized device coordinates.
pub fn to_ndc(mvp: &Matrix4<f64>, point: &Point3<f64>) -> Point3<f64> {
    let clip = mvp * point.to_homogeneous();
    Point3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
}
