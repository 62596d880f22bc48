//! Per-frame motion for the ocean waves and the boat.
//!
//! All values derive from the absolute frame timestamp (milliseconds since
//! page load), never from the frame delta, so a dropped frame cannot make
//! the motion drift.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{
    BOAT_BOB_PX, BOAT_ROLL_DEG, BOAT_ROLL_RATE, WAVE_AMPLITUDE_PX, WAVE_BASE_SPEED, WAVE_SPEED_STEP,
};

fn seconds(timestamp_ms: f64) -> f64 {
    timestamp_ms / 1000.0
}

/// Angular speed of wave `index`; each successive wave runs slightly faster.
#[must_use]
pub fn wave_speed(index: usize) -> f64 {
    WAVE_BASE_SPEED + index as f64 * WAVE_SPEED_STEP
}

/// Horizontal offset in pixels for wave `index` at `timestamp_ms`.
#[must_use]
pub fn wave_offset(timestamp_ms: f64, index: usize) -> f64 {
    (seconds(timestamp_ms) * wave_speed(index)).sin() * WAVE_AMPLITUDE_PX
}

/// Offsets for `count` waves at `timestamp_ms`. Empty when there are no waves.
#[must_use]
pub fn wave_offsets(timestamp_ms: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| wave_offset(timestamp_ms, i)).collect()
}

#[must_use]
pub fn wave_transform(offset_px: f64) -> String {
    format!("translateX({offset_px}px)")
}

/// Boat bob and roll at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatPose {
    pub bob_px: f64,
    pub rotation_deg: f64,
}

impl BoatPose {
    #[must_use]
    pub fn at(timestamp_ms: f64) -> Self {
        let t = seconds(timestamp_ms);
        Self {
            bob_px: t.sin() * BOAT_BOB_PX,
            rotation_deg: (t * BOAT_ROLL_RATE).sin() * BOAT_ROLL_DEG,
        }
    }

    /// CSS transform, composed with the fixed horizontal centring.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translateX(-50%) translateY({}px) rotate({}deg)",
            self.bob_px, self.rotation_deg
        )
    }
}

/// Tracks the previous frame timestamp to produce frame deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    /// Record `timestamp_ms` and return the time since the previous frame.
    /// The first frame compares against itself, so its delta is 0.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let last = self.last_timestamp.unwrap_or(timestamp_ms);
        self.last_timestamp = Some(timestamp_ms);
        timestamp_ms - last
    }

    #[must_use]
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }
}
