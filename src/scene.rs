//! Scene controller core: theme state machine and animation loop state.
//!
//! `SceneCore` makes every decision without touching the browser. Its
//! operations return [`Action`]s that the host applies to the render tree,
//! storage and timers, which keeps the whole controller testable natively.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::config::SceneConfig;
use crate::motion::{BoatPose, FrameClock, wave_offsets};
use crate::theme::{Theme, stars_visible};

/// Star layer opacity while visible.
pub const STARS_SHOWN: &str = "1";
/// Star layer opacity while hidden.
pub const STARS_HIDDEN: &str = "0";

/// Side effects requested by the core for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add (`true`) or remove the night class on the root element.
    SetNightClass(bool),
    /// Transition length for the celestial body, in seconds.
    SetCelestialTransition(f64),
    /// Point the theme icon at a new URI.
    SetIcon(String),
    /// Write the theme under the configured storage key.
    PersistTheme(Theme),
    /// Set the star container's opacity (`"1"` or `"0"`).
    SetStarsOpacity(&'static str),
    /// Arm the one-shot star hide timer. Replaces any pending one.
    ScheduleStarHide { token: u64, delay_ms: u32 },
    /// Drop the pending star hide timer.
    CancelStarHide,
}

/// Whether the frame loop is currently armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running(i32),
    Stopped,
}

/// Transforms computed for one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub delta_ms: f64,
    pub wave_offsets: Vec<f64>,
    pub boat: BoatPose,
}

/// The controller's only mutable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    pub is_night: bool,
    pub clock: FrameClock,
    pub animation_handle: Option<i32>,
}

impl SceneState {
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_night(self.is_night)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneCore {
    pub config: SceneConfig,
    pub state: SceneState,
    next_hide_token: u64,
    pending_hide: Option<u64>,
}

impl SceneCore {
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Star layer opacity for the current theme at `hour`.
    #[must_use]
    pub fn stars_opacity(&self, hour: u32) -> &'static str {
        if stars_visible(self.theme(), hour) { STARS_SHOWN } else { STARS_HIDDEN }
    }

    // --- Theme ---

    /// Flip between day and night.
    pub fn toggle_theme(&mut self, hour: u32) -> Vec<Action> {
        self.state.is_night = !self.state.is_night;
        let theme = self.theme();
        log::debug!("scene: theme -> {}", theme.as_str());

        let mut actions = vec![
            Action::SetNightClass(theme.is_night()),
            Action::SetCelestialTransition(self.config.transition_for(theme)),
            Action::SetIcon(self.config.icon_for(theme).to_owned()),
            Action::PersistTheme(theme),
        ];

        if self.pending_hide.take().is_some() {
            actions.push(Action::CancelStarHide);
        }

        if stars_visible(theme, hour) {
            actions.push(Action::SetStarsOpacity(STARS_SHOWN));
        } else {
            self.next_hide_token += 1;
            let token = self.next_hide_token;
            self.pending_hide = Some(token);
            actions.push(Action::ScheduleStarHide { token, delay_ms: self.config.star_hide_delay_ms });
        }
        actions
    }

    /// Converge in-memory state with a stored preference.
    ///
    /// A missing or unrecognised value leaves the state untouched. Night
    /// always ends with the moon icon set, even right after the toggle set
    /// it already.
    pub fn load_theme_preference(&mut self, stored: Option<&str>, hour: u32) -> Vec<Action> {
        let Some(preference) = stored.and_then(Theme::parse) else {
            if let Some(raw) = stored {
                log::warn!("scene: ignoring unrecognised theme preference {raw:?}");
            }
            return Vec::new();
        };

        let mut actions = Vec::new();
        if preference.is_night() != self.state.is_night {
            actions.extend(self.toggle_theme(hour));
            actions.push(Action::SetIcon(self.config.icon_for(preference).to_owned()));
        } else if preference.is_night() {
            actions.push(Action::SetIcon(self.config.icon_for(preference).to_owned()));
        }
        actions
    }

    /// Startup sequence: load the preference, then settle the day defaults
    /// if no switch to night happened.
    pub fn start(&mut self, stored: Option<&str>, hour: u32) -> Vec<Action> {
        let mut actions = self.load_theme_preference(stored, hour);
        if !self.state.is_night {
            actions.push(Action::SetStarsOpacity(STARS_HIDDEN));
            actions.push(Action::SetIcon(self.config.icon_for(Theme::Day).to_owned()));
        }
        actions
    }

    /// The hide timer fired. Stale tokens are ignored, and the stars are
    /// hidden only if the scene is still not night-outside-morning.
    pub fn on_star_hide_timer(&mut self, token: u64, hour: u32) -> Option<Action> {
        if self.pending_hide != Some(token) {
            log::debug!("scene: stale star hide timer {token}");
            return None;
        }
        self.pending_hide = None;
        if stars_visible(self.theme(), hour) {
            return None;
        }
        Some(Action::SetStarsOpacity(STARS_HIDDEN))
    }

    /// Token of the star hide timer that is still allowed to fire.
    #[must_use]
    pub fn pending_star_hide(&self) -> Option<u64> {
        self.pending_hide
    }

    // --- Animation loop ---

    /// Advance one frame. Waves and boat use the absolute timestamp.
    pub fn animate(&mut self, timestamp_ms: f64, wave_count: usize) -> FrameUpdate {
        let delta_ms = self.state.clock.tick(timestamp_ms);
        FrameUpdate {
            delta_ms,
            wave_offsets: wave_offsets(timestamp_ms, wave_count),
            boat: BoatPose::at(timestamp_ms),
        }
    }

    /// Record the handle of the frame request that is now pending.
    pub fn arm_frame(&mut self, handle: i32) {
        self.state.animation_handle = Some(handle);
    }

    #[must_use]
    pub fn loop_state(&self) -> LoopState {
        self.state.animation_handle.map_or(LoopState::Stopped, LoopState::Running)
    }

    /// Stop the loop. Returns the handle to cancel, or `None` when already
    /// stopped.
    pub fn destroy(&mut self) -> Option<i32> {
        self.pending_hide = None;
        let handle = self.state.animation_handle.take();
        if handle.is_some() {
            log::debug!("scene: animation loop stopped");
        }
        handle
    }
}
