//! Turns raw per-frame key states into the intents the flight and camera
//! controllers consume.

/// Which controls are physically held down this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlKeys {
    pub launch: bool,
    pub parachute: bool,
    pub camera: bool,
    pub exit: bool,
}

/// Sampled intents for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntents {
    pub launch_requested: bool,
    pub parachute_requested: bool,
    pub camera_toggle_requested: bool,
    pub exit_requested: bool,
}

impl InputIntents {
    pub fn none() -> Self {
        InputIntents::default()
    }

    pub fn launch() -> Self {
        InputIntents {
            launch_requested: true,
            ..InputIntents::default()
        }
    }

    pub fn parachute() -> Self {
        InputIntents {
            parachute_requested: true,
            ..InputIntents::default()
        }
    }

    pub fn camera_toggle() -> Self {
        InputIntents {
            camera_toggle_requested: true,
            ..InputIntents::default()
        }
    }
}

/// Movement keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Mouse motion and movement keys steering the free-look camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeLookInput {
    pub mouse_dx: f64,
    pub mouse_dy: f64,
    pub keys: MoveKeys,
}

/// Rising-edge detector: fires only on the frame a control goes from released
/// to pressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_pressed: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        EdgeTrigger::default()
    }

    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        fired
    }

    pub fn is_held(&self) -> bool {
        self.was_pressed
    }
}

/// Launch and exit are level signals (holding them is harmless once the
/// rocket is airborne); parachute and camera are edge-triggered.
#[derive(Debug, Default)]
pub struct InputSampler {
    parachute: EdgeTrigger,
    camera: EdgeTrigger,
}

impl InputSampler {
    pub fn new() -> Self {
        InputSampler::default()
    }

    pub fn sample(&mut self, keys: ControlKeys) -> InputIntents {
        InputIntents {
            launch_requested: keys.launch,
            parachute_requested: self.parachute.update(keys.parachute),
            camera_toggle_requested: self.camera.update(keys.camera),
            exit_requested: keys.exit,
        }
    }
}
