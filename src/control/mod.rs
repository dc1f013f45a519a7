pub mod camera;
pub mod flight;
pub mod input;
