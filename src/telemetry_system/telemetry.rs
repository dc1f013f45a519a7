use std::collections::VecDeque;

use tracing::info;

use crate::constants::{TELEMETRY_LOG_CAPACITY, TELEMETRY_TRANSITION_CAPACITY};
use crate::control::camera::CameraMode;
use crate::control::flight::{FlightPhase, FlightSimulator};
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pub time: f64,
    pub phase: FlightPhase,
    pub position: Vector2D,
    pub vertical_velocity: f64,
    pub thrust: f64,
    pub camera_mode: CameraMode,
}

/// Rolling flight log. Only the most recent frames and transitions are kept;
/// the aggregates cover the whole run.
pub struct Telemetry {
    pub log: VecDeque<FlightRecord>,
    log_capacity: usize,
    frames: u64,
    max_velocity: f64,
    max_altitude: f64,
    launches: u32,
    phase_times: VecDeque<(FlightPhase, f64)>,
    simulation_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Self::with_capacity(TELEMETRY_LOG_CAPACITY)
    }

    pub fn with_capacity(log_capacity: usize) -> Self {
        let log_capacity = log_capacity.max(1);
        Telemetry {
            log: VecDeque::with_capacity(log_capacity),
            log_capacity,
            frames: 0,
            max_velocity: 0.0,
            max_altitude: 0.0,
            launches: 0,
            phase_times: VecDeque::new(),
            simulation_time: 0.0,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn collect_data(&mut self, flight: &FlightSimulator, camera_mode: CameraMode, delta_time: f64) {
        self.simulation_time += delta_time;
        let position = flight.position();
        let velocity = flight.vertical_velocity();

        if velocity > self.max_velocity {
            self.max_velocity = velocity;
        }
        if position.y > self.max_altitude {
            self.max_altitude = position.y;
        }

        let phase = flight.phase();
        if self.frames == 0 && flight.transitions().is_empty() {
            self.record_transition(phase);
        }
        for &entered in flight.transitions() {
            if entered == FlightPhase::PoweredAscent {
                self.launches = self.launches.saturating_add(1);
            }
            self.record_transition(entered);
        }
        self.frames += 1;

        if self.log.len() == self.log_capacity {
            self.log.pop_front();
        }
        self.log.push_back(FlightRecord {
            time: self.simulation_time,
            phase,
            position,
            vertical_velocity: velocity,
            thrust: flight.thrust_accel(),
            camera_mode,
        });
    }

    fn record_transition(&mut self, phase: FlightPhase) {
        if self.phase_times.len() == TELEMETRY_TRANSITION_CAPACITY {
            self.phase_times.pop_front();
        }
        self.phase_times.push_back((phase, self.simulation_time));
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn launches(&self) -> u32 {
        self.launches
    }

    pub fn phase_times(&self) -> &VecDeque<(FlightPhase, f64)> {
        &self.phase_times
    }

    pub fn total_drift(&self) -> f64 {
        self.log.back().map_or(0.0, |record| record.position.x)
    }

    pub fn display_data(&self) {
        info!("--- Simulation Summary ---");
        info!("Frames: {}", self.frames);
        info!("Elapsed: {}", Self::format_time(self.simulation_time));
        info!("Launches: {}", self.launches);
        info!("Max Altitude: {:.4}", self.max_altitude);
        info!("Max Vertical Velocity: {:.6}", self.max_velocity);
        info!("Total Drift: {:.3}", self.total_drift());

        info!("--- Phase Transitions ---");
        for (phase, time) in &self.phase_times {
            info!("Phase {:?} reached at: {}", phase, Self::format_time(*time));
        }
    }
}
