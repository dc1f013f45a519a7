use approx::assert_abs_diff_eq;
use nalgebra::Point3;
use rocket_launch::{
    errors::SimulationError, CameraMode, Control, ControlKeys, ControlScript, FlightConfig,
    FlightPhase, FlightSimulator, InputIntents, LaunchDemo, Vector2D,
};

// Helper function to create a simulator with the tuned defaults
fn create_test_simulator() -> FlightSimulator {
    FlightSimulator::new(FlightConfig::default())
}

fn run_until_grounded(sim: &mut FlightSimulator, delta_time: f64, max_frames: u32) -> u32 {
    let mut frames = 0;
    while sim.phase() != FlightPhase::Grounded && frames < max_frames {
        sim.update(delta_time, &InputIntents::none());
        frames += 1;
    }
    frames
}

#[test]
fn test_full_ballistic_flight() {
    println!("INTEGRATION TEST: Full ballistic flight");

    let mut sim = create_test_simulator();
    sim.update(1.0, &InputIntents::launch());

    let mut max_altitude: f64 = 0.0;
    let mut cutoff_seen = false;
    let mut frames = 0;

    while sim.phase() != FlightPhase::Grounded && frames < 20_000 {
        sim.update(1.0, &InputIntents::none());
        max_altitude = max_altitude.max(sim.position().y);
        if sim.thrust_accel() == 0.0 {
            cutoff_seen = true;
        }
        if cutoff_seen {
            assert_eq!(sim.thrust_accel(), 0.0, "Cutoff must be permanent");
        }
        frames += 1;
    }

    println!(
        "Landed after {} frames, max altitude {:.3}, drift {:.3}",
        frames,
        max_altitude,
        sim.position().x
    );

    assert!(cutoff_seen, "Engine should cut off during ascent");
    assert_eq!(sim.phase(), FlightPhase::Grounded);
    assert_eq!(sim.position().y, 0.0);
    assert_eq!(sim.vertical_velocity(), 0.0);
    assert!(max_altitude > 30.0, "Coasting arc should climb well past cutoff");
    assert!(sim.position().x > 0.0);
}

#[test]
fn test_parachute_landing_scenario() {
    println!("INTEGRATION TEST: Parachute landing");

    let mut sim = create_test_simulator();
    sim.update(1.0, &InputIntents::launch());
    sim.state.position.y = 0.05;

    sim.update(1.0, &InputIntents::parachute());
    assert_eq!(sim.phase(), FlightPhase::ParachuteDescent);
    let frozen_x = sim.position().x;

    let frames = run_until_grounded(&mut sim, 1.0, 100);
    assert!(frames < 100);
    assert_eq!(sim.position().x, frozen_x);
    assert_eq!(sim.position().y, 0.0);
    assert!(sim.parachute_deployed(), "Canopy stays out after landing");
}

#[test]
fn test_drift_accumulates_across_launches() {
    println!("INTEGRATION TEST: Relaunch");

    let mut sim = create_test_simulator();
    let mut landing_sites = Vec::new();

    for _ in 0..3 {
        sim.update(1.0, &InputIntents::launch());
        for _ in 0..5 {
            sim.update(1.0, &InputIntents::none());
        }
        sim.update(1.0, &InputIntents::parachute());
        run_until_grounded(&mut sim, 1.0, 1_000);
        landing_sites.push(sim.position().x);
    }

    assert!(landing_sites.windows(2).all(|pair| pair[1] > pair[0]));
    assert_abs_diff_eq!(landing_sites[0], 6.0 * 0.015, epsilon = 1e-9);
    assert_abs_diff_eq!(landing_sites[2], 18.0 * 0.015, epsilon = 1e-9);
}

#[test]
fn test_large_delta_time_is_tolerated() {
    let mut sim = create_test_simulator();
    sim.update(1.0, &InputIntents::launch());
    sim.update(50_000.0, &InputIntents::none());

    assert!(sim.position().y.is_finite());
    assert_eq!(sim.thrust_accel(), 0.0);
}

#[test]
fn test_scripted_demo_with_chase_camera() {
    println!("INTEGRATION TEST: Scripted demo");

    let mut demo = LaunchDemo::new(FlightConfig::default());
    let script = ControlScript::new()
        .press(Control::Launch, 0, 1)
        .press(Control::Camera, 5, 10)
        .press(Control::Parachute, 20, 1)
        .press(Control::Exit, 200, 1);

    let mut frame = 0;
    let mut last = None;
    while let Some(output) = demo.step(1.0, script.keys_at(frame)) {
        if frame >= 5 {
            assert_eq!(output.view.mode, CameraMode::Chase);

            // The chase eye sits on the view origin; the rocket lies straight ahead.
            let rocket = Point3::new(output.position.x, output.position.y, 0.0);
            let in_view = output.view.matrix.transform_point(&rocket);
            assert_abs_diff_eq!(in_view.x, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(in_view.y, 0.0, epsilon = 1e-9);
            assert!(in_view.z < 0.0);
        }
        last = Some(output);
        frame += 1;
    }

    let last = last.expect("demo should produce frames");
    assert_eq!(frame, 200);
    assert!(last.parachute_visible);
    assert_eq!(demo.flight.phase(), FlightPhase::Grounded);
    assert_eq!(demo.telemetry.launches(), 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = FlightConfig::from_toml_str("gravity = 1.0\nthrust = 0.5\n");
    assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));

    let config = FlightConfig::from_toml_str("chase_offset = { x = 0.0, y = 6.0 }\n")
        .expect("valid override");
    let mut demo = LaunchDemo::new(config);
    demo.step(1.0, Default::default());
    let pose = demo.camera.chase_pose(Vector2D::new(1.0, 1.0));
    assert_eq!(pose.eye, Point3::new(1.0, 7.0, 10.0));
}

#[test]
fn test_launch_that_lands_immediately_is_recorded() {
    println!("INTEGRATION TEST: Launch and parachute on one frame");

    let mut demo = LaunchDemo::new(FlightConfig::default());
    demo.step(1.0, ControlKeys::default());
    demo.step(
        1.0,
        ControlKeys {
            launch: true,
            parachute: true,
            ..ControlKeys::default()
        },
    );

    assert_eq!(demo.flight.phase(), FlightPhase::Grounded);
    assert_eq!(demo.flight.launches(), 1);
    assert_eq!(demo.telemetry.launches(), 1);
    assert!(demo
        .telemetry
        .phase_times()
        .iter()
        .any(|(phase, _)| *phase == FlightPhase::PoweredAscent));
}

#[test]
fn test_exit_on_last_frame_number() {
    let mut demo = LaunchDemo::new(FlightConfig::default());
    let script = ControlScript::new().press(Control::Exit, u32::MAX, 1);

    let mut frame = u32::MAX - 2;
    let mut produced = 0;
    while demo.step(1.0, script.keys_at(frame)).is_some() {
        produced += 1;
        frame = frame.saturating_add(1);
    }

    assert_eq!(produced, 2);
    assert_eq!(frame, u32::MAX);
    assert!(demo.is_finished());
}
