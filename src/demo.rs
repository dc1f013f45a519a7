//! Per-frame glue between the input sampler, the flight and camera
//! controllers, and the matrices a renderer consumes.

use nalgebra::Matrix4;
use tracing::info;

use crate::config::FlightConfig;
use crate::control::camera::{CameraSelector, FreeLookProvider, ViewTransform};
use crate::control::flight::FlightSimulator;
use crate::control::input::{ControlKeys, FreeLookInput, InputSampler};
use crate::telemetry_system::telemetry::Telemetry;
use crate::utils::vector2d::Vector2D;
use crate::view_system::free_look::FreeLookCamera;
use crate::view_system::transforms::{model_matrix, model_view_projection, Projection};

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub position: Vector2D,
    pub view: ViewTransform,
    pub model: Matrix4<f64>,
    pub mvp: Matrix4<f64>,
    pub parachute_visible: bool,
}

pub struct LaunchDemo<P: FreeLookProvider = FreeLookCamera> {
    sampler: InputSampler,
    pub flight: FlightSimulator,
    pub camera: CameraSelector<P>,
    pub telemetry: Telemetry,
    projection: Projection,
    finished: bool,
}

impl LaunchDemo<FreeLookCamera> {
    pub fn new(config: FlightConfig) -> Self {
        Self::with_free_look(config, FreeLookCamera::new())
    }
}

impl<P: FreeLookProvider> LaunchDemo<P> {
    pub fn with_free_look(config: FlightConfig, free_look: P) -> Self {
        let chase_offset = config.chase_offset;
        LaunchDemo {
            sampler: InputSampler::new(),
            flight: FlightSimulator::new(config),
            camera: CameraSelector::new(free_look, chase_offset),
            telemetry: Telemetry::new(),
            projection: Projection::default(),
            finished: false,
        }
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Advances one frame with no mouse or movement input.
    pub fn step(&mut self, delta_time: f64, keys: ControlKeys) -> Option<FrameOutput> {
        self.step_with_look(delta_time, keys, &FreeLookInput::default())
    }

    /// Advances one frame. Returns `None` once exit has been requested; the
    /// controllers are not touched after that.
    pub fn step_with_look(
        &mut self,
        delta_time: f64,
        keys: ControlKeys,
        look: &FreeLookInput,
    ) -> Option<FrameOutput> {
        if self.finished {
            return None;
        }

        let intents = self.sampler.sample(keys);
        if intents.exit_requested {
            self.finished = true;
            info!("Exit requested");
            return None;
        }

        let position = self.flight.update(delta_time, &intents);
        self.camera.free_look_mut().handle_input(look, delta_time);
        let view = self.camera.update(&intents, position);
        self.telemetry
            .collect_data(&self.flight, self.camera.mode(), delta_time);

        let model = model_matrix(position);
        let mvp = model_view_projection(&self.projection.matrix(), &view.matrix, &model);

        Some(FrameOutput {
            position,
            view,
            model,
            mvp,
            parachute_visible: self.flight.parachute_deployed(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Launch,
    Parachute,
    Camera,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub control: Control,
    pub frame: u32,
    pub hold_frames: u32,
}

/// Pre-recorded key presses for driving the demo without a window.
#[derive(Debug, Clone, Default)]
pub struct ControlScript {
    presses: Vec<KeyPress>,
}

impl ControlScript {
    pub fn new() -> Self {
        ControlScript::default()
    }

    pub fn press(mut self, control: Control, frame: u32, hold_frames: u32) -> Self {
        self.presses.push(KeyPress {
            control,
            frame,
            hold_frames: hold_frames.max(1),
        });
        self
    }

    pub fn keys_at(&self, frame: u32) -> ControlKeys {
        let mut keys = ControlKeys::default();
        for press in &self.presses {
            if frame >= press.frame && frame - press.frame < press.hold_frames {
                match press.control {
                    Control::Launch => keys.launch = true,
                    Control::Parachute => keys.parachute = true,
                    Control::Camera => keys.camera = true,
                    Control::Exit => keys.exit = true,
                }
            }
        }
        keys
    }
}
