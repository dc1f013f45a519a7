// Flight tuning (per-second accelerations, per-frame rates)
pub const GRAVITY: f64 = 0.00000418;
pub const THRUST: f64 = 0.000215;
pub const STALL_VELOCITY: f64 = -0.03;
pub const CUTOFF_VELOCITY: f64 = 0.009;
pub const HORIZONTAL_DRIFT_RATE: f64 = 0.015; // per frame
pub const PARACHUTE_DESCENT_RATE: f64 = 0.006; // per frame
pub const ALTITUDE_SCALE: f64 = 4.0; // visual multiplier, not a physical unit

// Chase Camera
pub const CHASE_OFFSET: [f64; 3] = [3.0, 3.0, 10.0]; // eye relative to rocket

// Projection
pub const FIELD_OF_VIEW_DEG: f64 = 45.0;
pub const ASPECT_RATIO: f64 = 4.0 / 3.0;
pub const NEAR_PLANE: f64 = 0.1;
pub const FAR_PLANE: f64 = 100.0;

// Free-look Camera
pub const FREE_LOOK_START: [f64; 3] = [0.0, 0.0, 5.0];
pub const FREE_LOOK_SPEED: f64 = 3.0; // units per second
pub const MOUSE_SPEED: f64 = 0.005; // radians per pixel

// Telemetry
pub const TELEMETRY_LOG_CAPACITY: usize = 3_600; // frames
pub const TELEMETRY_TRANSITION_CAPACITY: usize = 256;

// Headless Demo
pub const DEMO_FRAMES: u32 = 6_000;
pub const DEMO_DELTA_TIME: f64 = 1.0 / 60.0; // s
