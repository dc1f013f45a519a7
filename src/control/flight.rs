use tracing::{debug, info};

use crate::config::FlightConfig;
use crate::control::input::InputIntents;
use crate::utils::vector2d::Vector2D;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum FlightPhase {
    Grounded,
    PoweredAscent,
    ParachuteDescent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub position: Vector2D,
    pub vertical_velocity: f64,
    pub phase: FlightPhase,
    pub engine_active: bool,
    pub thrust_accel: f64,
    /// Set once velocity falls through the stall threshold; stops drift.
    pub stalled: bool,
    /// Canopy is out. Survives landing until the next launch.
    pub parachute_deployed: bool,
}

impl Default for FlightState {
    fn default() -> Self {
        FlightState {
            position: Vector2D::zero(),
            vertical_velocity: 0.0,
            phase: FlightPhase::Grounded,
            engine_active: false,
            thrust_accel: 0.0,
            stalled: false,
            parachute_deployed: false,
        }
    }
}

/// Scripted launch curve: explicit Euler on vertical velocity with a one-way
/// engine cutoff, constant per-frame drift and a constant parachute sink rate.
pub struct FlightSimulator {
    pub state: FlightState,
    config: FlightConfig,
    launches: u32,
    /// Phases entered during the most recent `update`, in order.
    transitions: Vec<FlightPhase>,
}

impl FlightSimulator {
    pub fn new(config: FlightConfig) -> Self {
        FlightSimulator {
            state: FlightState::default(),
            config,
            launches: 0,
            transitions: Vec::with_capacity(3),
        }
    }

    pub fn update(&mut self, delta_time: f64, intents: &InputIntents) -> Vector2D {
        self.transitions.clear();

        if self.state.phase == FlightPhase::Grounded && intents.launch_requested {
            self.launch();
        }

        match self.state.phase {
            FlightPhase::Grounded => {
                // Waiting for a launch command
            }

            FlightPhase::PoweredAscent => {
                if intents.parachute_requested {
                    self.deploy_parachute();
                    self.descend();
                } else {
                    self.ascend(delta_time);
                }
                self.check_ground_contact();
            }

            FlightPhase::ParachuteDescent => {
                self.descend();
                self.check_ground_contact();
            }
        }

        debug!(
            phase = ?self.state.phase,
            x = self.state.position.x,
            y = self.state.position.y,
            vy = self.state.vertical_velocity,
            "flight step"
        );

        self.state.position
    }

    fn launch(&mut self) {
        self.state.phase = FlightPhase::PoweredAscent;
        self.state.thrust_accel = self.config.thrust;
        self.state.vertical_velocity = 0.0;
        self.state.engine_active = true;
        self.state.stalled = false;
        self.state.parachute_deployed = false;
        self.launches = self.launches.saturating_add(1);
        self.transitions.push(FlightPhase::PoweredAscent);
        info!(x = self.state.position.x, "Rocket launched");
    }

    fn ascend(&mut self, delta_time: f64) {
        let state = &mut self.state;
        state.vertical_velocity += (state.thrust_accel - self.config.gravity) * delta_time;

        if state.vertical_velocity > self.config.cutoff_velocity && state.thrust_accel != 0.0 {
            state.thrust_accel = 0.0;
            state.engine_active = false;
            info!(
                velocity = state.vertical_velocity,
                altitude = state.position.y,
                "Engine cutoff"
            );
        }

        if state.vertical_velocity < self.config.stall_velocity && !state.stalled {
            state.stalled = true;
            state.engine_active = false;
            info!(velocity = state.vertical_velocity, "Ascent stalled");
        }

        if !state.stalled {
            state.position.x += self.config.horizontal_drift_rate;
        }
        state.position.y += self.config.altitude_scale * state.vertical_velocity * delta_time;
    }

    fn deploy_parachute(&mut self) {
        self.state.phase = FlightPhase::ParachuteDescent;
        self.state.engine_active = false;
        self.state.parachute_deployed = true;
        self.transitions.push(FlightPhase::ParachuteDescent);
        info!(altitude = self.state.position.y, "Parachute deployed");
    }

    fn descend(&mut self) {
        self.state.position.y -= self.config.parachute_descent_rate;
    }

    fn check_ground_contact(&mut self) {
        if self.state.position.y < 0.0 {
            self.state.position.y = 0.0;
            self.state.vertical_velocity = 0.0;
            self.state.engine_active = false;
            self.state.phase = FlightPhase::Grounded;
            self.transitions.push(FlightPhase::Grounded);
            info!(x = self.state.position.x, "Rocket has landed");
        }
    }

    pub fn position(&self) -> Vector2D {
        self.state.position
    }

    pub fn phase(&self) -> FlightPhase {
        self.state.phase
    }

    pub fn vertical_velocity(&self) -> f64 {
        self.state.vertical_velocity
    }

    pub fn thrust_accel(&self) -> f64 {
        self.state.thrust_accel
    }

    pub fn is_engine_active(&self) -> bool {
        self.state.engine_active
    }

    pub fn parachute_deployed(&self) -> bool {
        self.state.parachute_deployed
    }

    /// Number of launches since the simulator was created.
    pub fn launches(&self) -> u32 {
        self.launches
    }

    /// Phases entered during the last `update`. A launch that lands in the
    /// same frame reports every intermediate phase.
    pub fn transitions(&self) -> &[FlightPhase] {
        &self.transitions
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }
}
