//! Shared numeric constants for the scene controller.

// ── Theme ───────────────────────────────────────────────────────

/// First hour (inclusive) that counts as morning.
pub const MORNING_START_HOUR: u32 = 5;

/// Hour (exclusive) at which morning ends.
pub const MORNING_END_HOUR: u32 = 12;

/// Celestial body transition when switching to night, in seconds.
pub const NIGHT_TRANSITION_SECS: f64 = 1.5;

/// Celestial body transition when switching to day, in seconds.
pub const DAY_TRANSITION_SECS: f64 = 1.0;

/// Delay before the star layer is hidden after a toggle, in milliseconds.
pub const STAR_HIDE_DELAY_MS: u32 = 100;

// ── Stars ───────────────────────────────────────────────────────

pub const STAR_SIZE_PX: (f64, f64) = (1.0, 3.0);
pub const STAR_OPACITY: (f64, f64) = (0.5, 1.0);
pub const STAR_DELAY_S: (f64, f64) = (0.0, 5.0);
pub const STAR_DURATION_S: (f64, f64) = (3.0, 6.0);

// ── Clouds ──────────────────────────────────────────────────────

/// Clouds stay in the upper half of the sky.
pub const CLOUD_TOP_PCT: (f64, f64) = (10.0, 50.0);
pub const CLOUD_WIDTH_PX: (f64, f64) = (80.0, 200.0);
pub const CLOUD_HEIGHT_PX: (f64, f64) = (20.0, 60.0);
pub const CLOUD_OPACITY: (f64, f64) = (0.6, 1.0);
pub const CLOUD_DURATION_S: (f64, f64) = (30.0, 90.0);

/// Negative delays start each cloud mid-cycle.
pub const CLOUD_DELAY_S: (f64, f64) = (-60.0, 0.0);

// ── Craters ─────────────────────────────────────────────────────

/// Radial distance from the moon's centre, in percent of its box.
pub const CRATER_DISTANCE: (f64, f64) = (20.0, 50.0);
pub const CRATER_SIZE_PX: (f64, f64) = (5.0, 20.0);

// ── Motion ──────────────────────────────────────────────────────

/// Angular speed of the first wave, in radians per second.
pub const WAVE_BASE_SPEED: f64 = 0.2;

/// Extra speed added for each successive wave.
pub const WAVE_SPEED_STEP: f64 = 0.05;

/// Peak horizontal wave displacement in pixels.
pub const WAVE_AMPLITUDE_PX: f64 = 10.0;

/// Peak vertical boat bob in pixels.
pub const BOAT_BOB_PX: f64 = 5.0;

/// Peak boat roll in degrees.
pub const BOAT_ROLL_DEG: f64 = 2.0;

/// Roll runs at half the bob frequency.
pub const BOAT_ROLL_RATE: f64 = 0.5;
