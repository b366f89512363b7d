// Host-side integration tests for the capture session and start flow.

use glam::DVec2;
use measure_core::*;
use std::cell::RefCell;

struct ScriptedCamera {
    result: Result<(), CameraError>,
}

impl CameraSource for ScriptedCamera {
    type Stream = &'static str;

    async fn open(&self, _request: &CameraRequest) -> Result<Self::Stream, CameraError> {
        self.result.clone().map(|_| "stream")
    }
}

fn measurer(width: f64, height: f64) -> (RefCell<Measurer>, OrientationCell) {
    let cell = OrientationCell::new();
    let m = Measurer::new(
        MeasurerConfig::default(),
        cell.clone(),
        SurfaceSize::new(width, height),
    );
    (RefCell::new(m), cell)
}

fn started(width: f64, height: f64) -> (RefCell<Measurer>, OrientationCell) {
    let (m, cell) = measurer(width, height);
    let camera = ScriptedCamera { result: Ok(()) };
    let stream = pollster::block_on(start(&m, &camera));
    assert_eq!(stream, Ok(Some("stream")));
    (m, cell)
}

#[test]
fn idle_is_the_initial_state() {
    let (m, _) = measurer(800.0, 600.0);
    let m = m.borrow();
    assert_eq!(m.state(), SessionState::Idle);
    assert!(!m.is_active());
    assert!(m.start_enabled());
    assert!(!m.capture_enabled());
    assert_eq!(m.distance_text(), "0.00");
}

#[test]
fn successful_start_awaits_first_point() {
    let (m, _) = started(800.0, 600.0);
    let m = m.borrow();
    assert_eq!(m.state(), SessionState::AwaitingFirstPoint);
    assert!(m.is_active());
    assert!(!m.start_enabled());
    assert!(m.capture_enabled());
    assert_eq!(m.instruction(), SessionState::AwaitingFirstPoint.prompt());
}

#[test]
fn second_start_is_refused_while_active() {
    let (m, _) = started(800.0, 600.0);
    let camera = ScriptedCamera { result: Ok(()) };
    assert_eq!(pollster::block_on(start(&m, &camera)), Ok(None));
}

#[test]
fn permission_denied_leaves_session_inactive() {
    let (m, _) = measurer(800.0, 600.0);
    let camera = ScriptedCamera {
        result: Err(CameraError::PermissionDenied),
    };
    let result = pollster::block_on(start(&m, &camera));
    assert_eq!(result, Err(CameraError::PermissionDenied));

    let m = m.borrow();
    assert!(!m.is_active());
    assert_eq!(m.state(), SessionState::Idle);
    assert!(!m.capture_enabled());
    assert!(m.start_enabled());
    assert_eq!(
        m.instruction(),
        "Camera access was denied. Allow camera access and press Start to try again."
    );
}

#[test]
fn start_can_be_retried_after_failure() {
    let (m, _) = measurer(800.0, 600.0);
    let broken = ScriptedCamera {
        result: Err(CameraError::unavailable("NotFoundError")),
    };
    assert!(pollster::block_on(start(&m, &broken)).is_err());
    assert_eq!(
        m.borrow().instruction(),
        CameraError::unavailable("").user_message()
    );

    let working = ScriptedCamera { result: Ok(()) };
    assert_eq!(pollster::block_on(start(&m, &working)), Ok(Some("stream")));
    let m = m.borrow();
    assert!(m.is_active());
    assert!(m.camera_error().is_none());
    assert_eq!(m.instruction(), SessionState::AwaitingFirstPoint.prompt());
}

#[test]
fn prompts_follow_captures() {
    let (m, _) = started(800.0, 600.0);
    let mut m = m.borrow_mut();

    m.capture_point();
    assert_eq!(m.state(), SessionState::AwaitingSecondPoint);
    assert_eq!(
        m.instruction(),
        "Now aim at the second point and press Capture."
    );

    m.capture_point();
    assert_eq!(m.state(), SessionState::Measured);
    assert_eq!(
        m.instruction(),
        "Measurement complete. Press Reset to start over."
    );
    assert!(!m.capture_enabled());
}

#[test]
fn reference_scenario_reads_four_centimeters() {
    let (m, cell) = started(1000.0, 1000.0);
    let mut m = m.borrow_mut();

    cell.set(OrientationSample::new(Some(0.0), Some(10.0), Some(0.0)));
    m.capture_at(DVec2::new(500.0, 490.0));
    let outcome = m.capture_at(DVec2::new(500.0, 510.0));

    let CaptureOutcome::Measured(measurement) = outcome else {
        panic!("expected a measurement, got {outcome:?}");
    };
    assert_eq!(measurement.pixel_distance, 20.0);
    assert_eq!(measurement.factor, 2.0);
    assert_eq!(measurement.meters_text(), "0.04");
    assert_eq!(m.distance_text(), "0.04");
    assert_eq!(m.readout(), "0.04 m");
}

#[test]
fn distance_matches_formula_for_many_pairs() {
    let pairs = [
        ((0.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
        ((10.0, 20.0, -5.0), (40.0, 60.0, 25.0)),
        ((300.0, 100.0, 80.0), (20.0, 700.0, -10.0)),
        ((1.5, 2.5, 0.0), (1.5, 2.5, 45.0)),
    ];
    for ((x0, y0, b0), (x1, y1, b1)) in pairs {
        let (m, cell) = started(640.0, 480.0);
        let mut m = m.borrow_mut();
        cell.set(OrientationSample::new(None, Some(b0), None));
        m.capture_at(DVec2::new(x0, y0));
        cell.set(OrientationSample::new(None, Some(b1), None));
        let CaptureOutcome::Measured(got) = m.capture_at(DVec2::new(x1, y1)) else {
            panic!("second capture did not measure");
        };

        let px = ((x1 - x0) * (x1 - x0) + (y1 - y0) * (y1 - y0)).sqrt();
        let factor = 2.0 + (b1 - b0).abs() / 90.0;
        let expected = px / 640.0 * factor;
        assert!((got.meters - expected).abs() < 1e-12);
        assert!(got.meters >= 0.0);
        assert_eq!(got.meters == 0.0, x0 == x1 && y0 == y1);
    }
}

#[test]
fn no_third_point_is_ever_stored() {
    let (m, _) = started(800.0, 600.0);
    let mut m = m.borrow_mut();
    m.capture_point();
    m.capture_point();
    for _ in 0..5 {
        assert_eq!(m.capture_point(), CaptureOutcome::Ignored);
        assert_eq!(m.capture_at(DVec2::new(1.0, 1.0)), CaptureOutcome::Ignored);
    }
    assert_eq!(m.points().len(), 2);
}

#[test]
fn capture_before_start_is_a_no_op() {
    let (m, _) = measurer(800.0, 600.0);
    let mut m = m.borrow_mut();
    assert_eq!(m.capture_point(), CaptureOutcome::Ignored);
    assert!(m.points().is_empty());
}

#[test]
fn reset_always_returns_to_empty() {
    for captures in 0..=3 {
        let (m, _) = started(800.0, 600.0);
        let mut m = m.borrow_mut();
        for _ in 0..captures {
            m.capture_point();
        }
        m.reset();
        assert!(m.points().is_empty());
        assert!(m.capture_enabled());
        assert!(m.is_active());
        assert_eq!(m.distance_text(), "0.00");
        assert_eq!(m.readout(), "0.00 m");
        assert_eq!(m.state(), SessionState::AwaitingFirstPoint);
    }
}

#[test]
fn reset_while_idle_stays_idle() {
    let (m, _) = measurer(800.0, 600.0);
    let mut m = m.borrow_mut();
    m.reset();
    assert_eq!(m.state(), SessionState::Idle);
    assert_eq!(m.distance_text(), "0.00");
}

#[test]
fn resize_changes_only_surface() {
    let (m, _) = started(800.0, 600.0);
    let mut m = m.borrow_mut();
    m.capture_point();
    m.capture_at(DVec2::new(100.0, 100.0));
    let points = m.points().to_vec();
    let readout = m.readout();

    m.on_resize(SurfaceSize::new(1200.0, 800.0));

    assert_eq!(m.surface(), SurfaceSize::new(1200.0, 800.0));
    assert_eq!(m.points(), points.as_slice());
    assert_eq!(m.readout(), readout);
    assert_eq!(m.state(), SessionState::Measured);
}

#[test]
fn reticle_follows_resized_surface() {
    let (m, _) = started(800.0, 600.0);
    let mut m = m.borrow_mut();
    m.on_resize(SurfaceSize::new(1200.0, 800.0));
    m.capture_point();
    assert_eq!(m.points()[0].position, DVec2::new(600.0, 400.0));
}

#[test]
fn tap_mode_captures_at_pointer() {
    let cell = OrientationCell::new();
    let config = MeasurerConfig::from_names(Some("ppm"), Some("tap")).unwrap();
    let mut m = Measurer::new(config, cell, SurfaceSize::new(800.0, 600.0));
    m.request_start();
    m.camera_opened();

    m.on_tap(DVec2::new(100.0, 100.0));
    let outcome = m.on_tap(DVec2::new(100.0, 500.0));
    let CaptureOutcome::Measured(got) = outcome else {
        panic!("expected a measurement");
    };
    assert_eq!(got.pixel_distance, 400.0);
    assert_eq!(got.meters_text(), "2.00");
}

#[test]
fn fixed_variant_ignores_tilt_between_captures() {
    let cell = OrientationCell::new();
    let config = MeasurerConfig::from_names(Some("fixed"), None).unwrap();
    let mut m = Measurer::new(config, cell.clone(), SurfaceSize::new(1000.0, 1000.0));
    m.request_start();
    m.camera_opened();

    cell.set(OrientationSample::new(None, Some(0.0), None));
    m.capture_at(DVec2::new(0.0, 0.0));
    cell.set(OrientationSample::new(None, Some(90.0), None));
    m.capture_at(DVec2::new(0.0, 100.0));
    assert_eq!(m.distance_text(), "0.20");
}

#[test]
fn render_ticks_follow_session() {
    let (m, _) = started(400.0, 300.0);
    let mut list = DrawList::new();

    m.borrow().render_tick(&mut list);
    assert_eq!(list.commands.len(), 2);
    assert_eq!(
        list.commands[1],
        DrawCommand::Crosshair {
            center: DVec2::new(200.0, 150.0),
            half_length: CROSSHAIR_HALF_LENGTH,
            width: LINE_WIDTH,
        }
    );

    m.borrow_mut().capture_point();
    m.borrow_mut().capture_at(DVec2::new(0.0, 0.0));
    m.borrow().render_tick(&mut list);
    assert_eq!((list.markers(), list.lines()), (2, 1));

    m.borrow_mut().reset();
    m.borrow().render_tick(&mut list);
    assert_eq!((list.markers(), list.lines()), (0, 0));
}
