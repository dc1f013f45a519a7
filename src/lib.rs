pub mod config;
pub mod constants;
pub mod control;
pub mod demo;
pub mod errors;
pub mod telemetry_system;
pub mod utils;
pub mod view_system;

pub use config::{ChaseOffset, FlightConfig};
pub use constants::*;
pub use control::camera::{CameraMode, CameraPose, CameraSelector, FreeLookProvider, ViewTransform};
pub use control::flight::{FlightPhase, FlightSimulator, FlightState};
pub use control::input::{
    ControlKeys, EdgeTrigger, FreeLookInput, InputIntents, InputSampler, MoveKeys,
};
pub use demo::{Control, ControlScript, FrameOutput, LaunchDemo};
pub use errors::SimulationError;

// Re-export commonly used items from view_system
pub use view_system::free_look::FreeLookCamera;
pub use view_system::transforms::Projection;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
