// Host-side tests for the pulse driver.

use glam::Vec2;
use heart_core::*;
use std::f64::consts::PI;

#[test]
fn scale_is_zero_at_start_and_one_at_pi() {
    assert_eq!(Pulse::at(0.0).scale(), 0.0);
    assert_eq!(Pulse::at(PI).scale(), 1.0);
    assert!((Pulse::at(PI / 2.0).scale() - 0.5).abs() < 1e-6);
}

#[test]
fn pace_follows_phase() {
    // sin(0) = 0 is not negative and n = -1: normal pace
    assert_eq!(Pulse::at(0.0).pace(), 1.0);
    // near the peak n > 0.8 and sin > 0: dwell
    assert_eq!(Pulse::at(PI - 0.1).pace(), PULSE_DWELL_MULTIPLIER);
    // contracted half, sin < 0: skip
    assert_eq!(Pulse::at(4.0).pace(), PULSE_SKIP_MULTIPLIER);
    assert_eq!(Pulse::at(PI + 0.1).pace(), PULSE_SKIP_MULTIPLIER);
    // rising edge with n below the threshold
    assert_eq!(Pulse::at(1.0).pace(), 1.0);
}

#[test]
fn advance_applies_multiplier_to_base_delta() {
    let mut p = Pulse::at(0.0);
    p.advance(0.01);
    assert!((p.time() - 0.01).abs() < 1e-12);

    let mut p = Pulse::at(4.0);
    p.advance(0.01);
    assert!((p.time() - 4.09).abs() < 1e-12);

    let mut p = Pulse::at(PI - 0.1);
    p.advance(0.01);
    assert!((p.time() - (PI - 0.1 + 0.002)).abs() < 1e-12);
}

#[test]
fn time_is_monotonic_and_spends_longer_near_peak() {
    let mut p = Pulse::new();
    let mut prev = p.time();
    let mut dwell = 0;
    let mut skip = 0;
    for _ in 0..2000 {
        if p.pace() == PULSE_DWELL_MULTIPLIER {
            dwell += 1;
        } else if p.pace() == PULSE_SKIP_MULTIPLIER {
            skip += 1;
        }
        p.advance(TIME_DELTA);
        assert!(p.time() > prev);
        prev = p.time();
    }
    assert!(dwell > skip, "dwell={dwell} skip={skip}");
}

#[test]
fn scale_targets_centres_and_scales() {
    let points = [Vec2::new(10.0, -20.0), Vec2::ZERO];
    let mut out = vec![Vec2::splat(99.0); 5];
    scale_targets(&points, 0.5, 0.75, Vec2::new(400.0, 300.0), &mut out);
    assert_eq!(out.len(), 2);
    assert!((out[0] - Vec2::new(403.75, 292.5)).length() < 1e-5);
    assert_eq!(out[1], Vec2::new(400.0, 300.0));
}
