use nalgebra::{Matrix4, Point3, Vector3};
use tracing::info;

use crate::config::ChaseOffset;
use crate::control::input::{FreeLookInput, InputIntents};
use crate::utils::vector2d::Vector2D;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CameraMode {
    FreeLook,
    Chase,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::FreeLook => CameraMode::Chase,
            CameraMode::Chase => CameraMode::FreeLook,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub mode: CameraMode,
}

impl Default for CameraState {
    fn default() -> Self {
        CameraState {
            mode: CameraMode::FreeLook,
        }
    }
}

/// Source of the view matrix while the camera is in free-look mode.
pub trait FreeLookProvider {
    fn view_matrix(&self) -> Matrix4<f64>;

    /// Feeds this frame's mouse and movement input. Fixed providers ignore it.
    fn handle_input(&mut self, _input: &FreeLookInput, _delta_time: f64) {}
}

/// Eye, target and up vector of a look-at camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.eye, &self.target, &self.up)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub mode: CameraMode,
    pub matrix: Matrix4<f64>,
}

pub struct CameraSelector<P: FreeLookProvider> {
    pub state: CameraState,
    chase_offset: ChaseOffset,
    free_look: P,
}

impl<P: FreeLookProvider> CameraSelector<P> {
    pub fn new(free_look: P, chase_offset: ChaseOffset) -> Self {
        CameraSelector {
            state: CameraState::default(),
            chase_offset,
            free_look,
        }
    }

    pub fn update(&mut self, intents: &InputIntents, tracked_position: Vector2D) -> ViewTransform {
        if intents.camera_toggle_requested {
            self.state.mode = self.state.mode.toggled();
            info!(mode = ?self.state.mode, "Camera mode switched");
        }

        let matrix = match self.state.mode {
            CameraMode::FreeLook => self.free_look.view_matrix(),
            CameraMode::Chase => self.chase_pose(tracked_position).view_matrix(),
        };

        ViewTransform {
            mode: self.state.mode,
            matrix,
        }
    }

    /// Eye hovers at a fixed offset from the rocket, looking at it in the
    /// z = 0 plane.
    pub fn chase_pose(&self, tracked_position: Vector2D) -> CameraPose {
        let target = tracked_position.to_point3(0.0);
        CameraPose {
            eye: target + self.chase_offset.to_vector3(),
            target,
            up: Vector3::y(),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.state.mode
    }

    pub fn free_look(&self) -> &P {
        &self.free_look
    }

    pub fn free_look_mut(&mut self) -> &mut P {
        &mut self.free_look
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct FixedView(Matrix4<f64>);

    impl FreeLookProvider for FixedView {
        fn view_matrix(&self) -> Matrix4<f64> {
            self.0
        }
    }

    fn selector() -> CameraSelector<FixedView> {
        CameraSelector::new(
            FixedView(Matrix4::new_translation(&Vector3::new(0.0, 0.0, -5.0))),
            ChaseOffset::default(),
        )
    }

    #[test]
    fn test_starts_in_free_look_and_delegates() {
        let mut camera = selector();
        let view = camera.update(&InputIntents::none(), Vector2D::new(1.0, 2.0));
        assert_eq!(view.mode, CameraMode::FreeLook);
        assert_eq!(view.matrix, camera.free_look().0);
    }

    #[test]
    fn test_chase_pose_offsets() {
        let camera = selector();
        let pose = camera.chase_pose(Vector2D::new(1.0, 2.0));
        assert_eq!(pose.eye, Point3::new(4.0, 5.0, 10.0));
        assert_eq!(pose.target, Point3::new(1.0, 2.0, 0.0));
        assert_eq!(pose.up, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_chase_depth_follows_offset() {
        let camera = CameraSelector::new(
            FixedView(Matrix4::identity()),
            ChaseOffset::from([0.0, 1.0, 25.0]),
        );
        let pose = camera.chase_pose(Vector2D::new(2.0, 2.0));
        assert_eq!(pose.eye, Point3::new(2.0, 3.0, 25.0));
    }

    #[test]
    fn test_chase_view_maps_target_onto_view_axis() {
        let mut camera = selector();
        let tracked = Vector2D::new(1.0, 2.0);
        let view = camera.update(&InputIntents::camera_toggle(), tracked);
        assert_eq!(view.mode, CameraMode::Chase);

        let pose = camera.chase_pose(tracked);
        let eye_in_view = view.matrix.transform_point(&pose.eye);
        let target_in_view = view.matrix.transform_point(&pose.target);
        let distance = (pose.target - pose.eye).norm();

        assert_relative_eq!(eye_in_view, Point3::origin(), epsilon = 1e-9);
        assert_relative_eq!(
            target_in_view,
            Point3::new(0.0, 0.0, -distance),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_double_toggle_restores_mode() {
        let mut camera = selector();
        let tracked = Vector2D::new(0.5, 0.5);
        let before = camera.update(&InputIntents::none(), tracked);

        camera.update(&InputIntents::camera_toggle(), tracked);
        let after = camera.update(&InputIntents::camera_toggle(), tracked);

        assert_eq!(after.mode, before.mode);
        assert_eq!(after.matrix, before.matrix);
    }

    #[test]
    fn test_chase_follows_target() {
        let mut camera = selector();
        camera.update(&InputIntents::camera_toggle(), Vector2D::zero());

        let a = camera.update(&InputIntents::none(), Vector2D::new(0.0, 0.0));
        let b = camera.update(&InputIntents::none(), Vector2D::new(2.0, 7.0));
        assert_eq!(a.mode, CameraMode::Chase);
        assert_ne!(a.matrix, b.matrix);
    }
}
