#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

const EPSILON: f64 = 1e-9;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn in_range(value: f64, (lo, hi): (f64, f64)) -> bool {
    value >= lo && value < hi
}

// =============================================================
// Stars
// =============================================================

#[test]
fn stars_exact_count() {
    for n in [0, 1, 7, 200] {
        assert_eq!(generate_stars(&mut rng(), n, true).len(), n);
    }
}

#[test]
fn stars_within_ranges() {
    for star in generate_stars(&mut rng(), 500, true) {
        assert!(in_range(star.x_pct, (0.0, 100.0)));
        assert!(in_range(star.y_pct, (0.0, 100.0)));
        assert!(in_range(star.size_px, STAR_SIZE_PX));
        assert!(in_range(star.base_opacity, STAR_OPACITY));
        assert!(in_range(star.delay_s, STAR_DELAY_S));
        assert!(in_range(star.duration_s, STAR_DURATION_S));
    }
}

#[test]
fn stars_opacity_gated_by_day() {
    for star in generate_stars(&mut rng(), 100, false) {
        assert_eq!(star.opacity, 0.0);
        assert!(in_range(star.base_opacity, STAR_OPACITY));
    }
}

#[test]
fn stars_opacity_applied_at_night() {
    for star in generate_stars(&mut rng(), 100, true) {
        assert_eq!(star.opacity, star.base_opacity);
    }
}

#[test]
fn stars_same_seed_same_layout() {
    let a = generate_stars(&mut rng(), 20, true);
    let b = generate_stars(&mut rng(), 20, true);
    assert_eq!(a, b);
}

// =============================================================
// Clouds
// =============================================================

#[test]
fn clouds_exact_count() {
    assert_eq!(generate_clouds(&mut rng(), 0).len(), 0);
    assert_eq!(generate_clouds(&mut rng(), 12).len(), 12);
}

#[test]
fn clouds_stay_in_upper_band() {
    for cloud in generate_clouds(&mut rng(), 500) {
        assert!(in_range(cloud.y_pct, (10.0, 50.0)));
        assert!(in_range(cloud.x_pct, (0.0, 100.0)));
    }
}

#[test]
fn clouds_sizes_and_timing_within_ranges() {
    for cloud in generate_clouds(&mut rng(), 500) {
        assert!(in_range(cloud.width_px, CLOUD_WIDTH_PX));
        assert!(in_range(cloud.height_px, CLOUD_HEIGHT_PX));
        assert!(in_range(cloud.opacity, CLOUD_OPACITY));
        assert!(in_range(cloud.duration_s, CLOUD_DURATION_S));
    }
}

#[test]
fn clouds_start_mid_cycle() {
    for cloud in generate_clouds(&mut rng(), 200) {
        assert!(cloud.delay_s < 0.0);
        assert!(cloud.delay_s >= -60.0);
    }
}

// =============================================================
// Craters
// =============================================================

#[test]
fn craters_none_when_empty() {
    assert!(position_craters(&mut rng(), 0).is_empty());
}

#[test]
fn craters_evenly_spaced_by_angle() {
    let placed = position_craters(&mut rng(), 4);
    let expected = [0.0, TAU / 4.0, TAU / 2.0, TAU * 3.0 / 4.0];
    for (crater, angle) in placed.iter().zip(expected) {
        assert!((crater.angle_rad - angle).abs() < EPSILON);
    }
}

#[test]
fn craters_offsets_follow_polar_placement() {
    for crater in position_craters(&mut rng(), 9) {
        assert!(in_range(crater.distance, CRATER_DISTANCE));
        assert!(in_range(crater.size_px, CRATER_SIZE_PX));
        let left = 50.0 + crater.angle_rad.cos() * crater.distance;
        let top = 50.0 + crater.angle_rad.sin() * crater.distance;
        assert!((crater.left_pct - left).abs() < EPSILON);
        assert!((crater.top_pct - top).abs() < EPSILON);
    }
}

#[test]
fn craters_first_sits_right_of_centre() {
    let first = position_craters(&mut rng(), 3)[0];
    assert!((first.top_pct - 50.0).abs() < EPSILON);
    assert!(first.left_pct >= 70.0 && first.left_pct < 100.0);
}

#[test]
fn craters_rerun_keeps_count_and_seeded_layout() {
    let first = position_craters(&mut rng(), 6);
    let again = position_craters(&mut rng(), 6);
    assert_eq!(first.len(), again.len());
    assert_eq!(first, again);
}
