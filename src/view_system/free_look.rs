use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Matrix4, Point3, Vector3};

use crate::constants::{FREE_LOOK_SPEED, FREE_LOOK_START, MOUSE_SPEED};
use crate::control::camera::{CameraPose, FreeLookProvider};
use crate::control::input::{FreeLookInput, MoveKeys};

/// Mouse-look camera: yaw/pitch from mouse deltas, strafing from keys.
#[derive(Debug, Clone)]
pub struct FreeLookCamera {
    pub position: Point3<f64>,
    pub horizontal_angle: f64,
    pub vertical_angle: f64,
    pub speed: f64,
    pub mouse_speed: f64,
}

impl Default for FreeLookCamera {
    fn default() -> Self {
        FreeLookCamera {
            position: Point3::from(FREE_LOOK_START),
            horizontal_angle: PI,
            vertical_angle: 0.0,
            speed: FREE_LOOK_SPEED,
            mouse_speed: MOUSE_SPEED,
        }
    }
}

impl FreeLookCamera {
    pub fn new() -> Self {
        FreeLookCamera::default()
    }

    pub fn look(&mut self, mouse_dx: f64, mouse_dy: f64) {
        self.horizontal_angle -= self.mouse_speed * mouse_dx;
        self.vertical_angle -= self.mouse_speed * mouse_dy;
        // Stop just short of straight up/down so the up vector stays defined
        let limit = FRAC_PI_2 - 1e-3;
        self.vertical_angle = self.vertical_angle.clamp(-limit, limit);
    }

    pub fn travel(&mut self, keys: MoveKeys, delta_time: f64) {
        let step = self.speed * delta_time;
        let direction = self.direction();
        let right = self.right();

        if keys.forward {
            self.position += direction * step;
        }
        if keys.backward {
            self.position -= direction * step;
        }
        if keys.right {
            self.position += right * step;
        }
        if keys.left {
            self.position -= right * step;
        }
    }

    pub fn direction(&self) -> Vector3<f64> {
        Vector3::new(
            self.vertical_angle.cos() * self.horizontal_angle.sin(),
            self.vertical_angle.sin(),
            self.vertical_angle.cos() * self.horizontal_angle.cos(),
        )
    }

    fn right(&self) -> Vector3<f64> {
        let yaw = self.horizontal_angle - FRAC_PI_2;
        Vector3::new(yaw.sin(), 0.0, yaw.cos())
    }

    pub fn pose(&self) -> CameraPose {
        let direction = self.direction();
        CameraPose {
            eye: self.position,
            target: self.position + direction,
            up: self.right().cross(&direction),
        }
    }
}

impl FreeLookProvider for FreeLookCamera {
    fn view_matrix(&self) -> Matrix4<f64> {
        self.pose().view_matrix()
    }

    fn handle_input(&mut self, input: &FreeLookInput, delta_time: f64) {
        self.look(input.mouse_dx, input.mouse_dy);
        self.travel(input.keys, delta_time);
    }
}
