//! Procedural decoration: stars, clouds and crater placement.
//!
//! Every function here is pure over its random source. The host clears the
//! target container and rebuilds it from the returned list, so there is no
//! incremental diffing and no per-element tracking after creation.

#[cfg(test)]
#[path = "decor_test.rs"]
mod decor_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{
    CLOUD_DELAY_S, CLOUD_DURATION_S, CLOUD_HEIGHT_PX, CLOUD_OPACITY, CLOUD_TOP_PCT, CLOUD_WIDTH_PX, CRATER_DISTANCE,
    CRATER_SIZE_PX, STAR_DELAY_S, STAR_DURATION_S, STAR_OPACITY, STAR_SIZE_PX,
};

/// A twinkling star in the sky layer. Positions are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x_pct: f64,
    pub y_pct: f64,
    pub size_px: f64,
    pub base_opacity: f64,
    /// Opacity actually applied: `base_opacity` at night, 0 otherwise.
    pub opacity: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// A drifting cloud. Positions are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x_pct: f64,
    pub y_pct: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub opacity: f64,
    pub duration_s: f64,
    /// Negative, so the drift animation starts part-way through its cycle.
    pub delay_s: f64,
}

/// Where one crater sits on the moon face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraterPlacement {
    pub angle_rad: f64,
    pub distance: f64,
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
}

fn sample<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    rng.random_range(lo..hi)
}

/// Build `count` stars. Opacity is gated to 0 unless `night` so freshly
/// generated stars don't flash during the day.
#[must_use]
pub fn generate_stars<R: Rng>(rng: &mut R, count: usize, night: bool) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let x_pct = sample(rng, (0.0, 100.0));
            let y_pct = sample(rng, (0.0, 100.0));
            let size_px = sample(rng, STAR_SIZE_PX);
            let base_opacity = sample(rng, STAR_OPACITY);
            let delay_s = sample(rng, STAR_DELAY_S);
            let duration_s = sample(rng, STAR_DURATION_S);
            Star {
                x_pct,
                y_pct,
                size_px,
                base_opacity,
                opacity: if night { base_opacity } else { 0.0 },
                delay_s,
                duration_s,
            }
        })
        .collect()
}

/// Build `count` clouds confined to the upper sky band.
#[must_use]
pub fn generate_clouds<R: Rng>(rng: &mut R, count: usize) -> Vec<Cloud> {
    (0..count)
        .map(|_| Cloud {
            x_pct: sample(rng, (0.0, 100.0)),
            y_pct: sample(rng, CLOUD_TOP_PCT),
            width_px: sample(rng, CLOUD_WIDTH_PX),
            height_px: sample(rng, CLOUD_HEIGHT_PX),
            opacity: sample(rng, CLOUD_OPACITY),
            duration_s: sample(rng, CLOUD_DURATION_S),
            delay_s: sample(rng, CLOUD_DELAY_S),
        })
        .collect()
}

/// Spread `total` existing craters evenly by angle around the moon centre,
/// each at a random radial distance and size.
#[must_use]
pub fn position_craters<R: Rng>(rng: &mut R, total: usize) -> Vec<CraterPlacement> {
    (0..total)
        .map(|index| {
            let angle_rad = index as f64 / total as f64 * TAU;
            let distance = sample(rng, CRATER_DISTANCE);
            let size_px = sample(rng, CRATER_SIZE_PX);
            CraterPlacement {
                angle_rad,
                distance,
                size_px,
                left_pct: 50.0 + angle_rad.cos() * distance,
                top_pct: 50.0 + angle_rad.sin() * distance,
            }
        })
        .collect()
}
