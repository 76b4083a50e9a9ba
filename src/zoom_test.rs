#![allow(clippy::float_cmp)]

use super::*;
use crate::host::fake::{RecordingSurface, SurfaceCall};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_factor_is_one() {
    let zoom = ZoomController::default();
    assert_eq!(zoom.factor(), 1.0);
    assert_eq!(zoom.percent(), 100);
}

#[test]
fn default_limits() {
    let limits = ZoomLimits::default();
    assert_eq!(limits.min, 0.5);
    assert_eq!(limits.max, 3.0);
    assert_eq!(limits.step, 0.2);
    assert_eq!(limits.initial, 1.0);
}

#[test]
fn scale_transform_formats_css() {
    assert_eq!(scale_transform(1.2), "scale(1.2)");
    assert_eq!(scale_transform(2.0), "scale(2)");
}

// =============================================================
// Stepping
// =============================================================

#[test]
fn zoom_in_steps_and_applies() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    let f = zoom.zoom_in(&surface, true);
    assert!(approx_eq(f, 1.2));
    assert_eq!(surface.take_calls(), vec![SurfaceCall::Scale(1.2)]);
}

#[test]
fn zoom_out_steps_and_applies() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    assert!(approx_eq(zoom.zoom_out(&surface, true), 0.8));
    assert_eq!(surface.scales(), vec![0.8]);
}

#[test]
fn repeated_zoom_in_saturates_at_max() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    for _ in 0..30 {
        zoom.zoom_in(&surface, true);
    }
    assert_eq!(zoom.factor(), 3.0);
    assert!(zoom.at_max());
}

#[test]
fn repeated_zoom_out_saturates_at_min() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    for _ in 0..30 {
        zoom.zoom_out(&surface, true);
    }
    assert_eq!(zoom.factor(), 0.5);
    assert!(zoom.at_min());
}

#[test]
fn mixed_sequence_stays_in_bounds() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    let pattern = [true, true, false, true, false, false, false, false, true, true, true, true, true, true, true, true, true, true, true];
    for step_in in pattern.iter().cycle().take(200) {
        let f = if *step_in { zoom.zoom_in(&surface, true) } else { zoom.zoom_out(&surface, true) };
        assert!((0.5..=3.0).contains(&f), "factor {f} escaped bounds");
    }
}

#[test]
fn steps_do_not_drift() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    for _ in 0..5 {
        zoom.zoom_in(&surface, true);
    }
    for _ in 0..5 {
        zoom.zoom_out(&surface, true);
    }
    assert_eq!(zoom.factor(), 1.0);
}

// =============================================================
// Nothing mounted
// =============================================================

#[test]
fn zoom_without_mounted_graphic_is_noop() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    assert_eq!(zoom.zoom_in(&surface, false), 1.0);
    assert_eq!(zoom.zoom_out(&surface, false), 1.0);
    assert!(surface.take_calls().is_empty());
}

#[test]
fn apply_is_idempotent() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    zoom.zoom_in(&surface, true);
    surface.take_calls();
    zoom.apply(&surface, true);
    zoom.apply(&surface, true);
    assert_eq!(surface.scales(), vec![1.2, 1.2]);
    assert!(approx_eq(zoom.factor(), 1.2));
}

#[test]
fn reset_restores_initial() {
    let surface = RecordingSurface::new();
    let mut zoom = ZoomController::default();
    zoom.zoom_in(&surface, true);
    zoom.zoom_in(&surface, true);
    zoom.reset();
    assert_eq!(zoom.factor(), 1.0);
}
