//! Scene configuration: element ids, counts, asset URIs and timings.
//!
//! Every field has a default, so the host may pass a partial JSON object
//! (or nothing at all) when constructing the controller.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DAY_TRANSITION_SECS, NIGHT_TRANSITION_SECS, STAR_HIDE_DELAY_MS};
use crate::error::SceneError;
use crate::theme::Theme;

/// Ids and class names the controller looks up in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub toggle: String,
    pub celestial: String,
    pub ocean: String,
    pub boat: String,
    pub stars: String,
    pub clouds: String,
    pub icon: String,
    pub wave_class: String,
    pub crater_class: String,
    pub menu_button: String,
    pub menu: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            toggle: "theme-toggle".into(),
            celestial: "sun".into(),
            ocean: "ocean".into(),
            boat: "boat".into(),
            stars: "stars".into(),
            clouds: "clouds".into(),
            icon: "theme-icon".into(),
            wave_class: "wave".into(),
            crater_class: "crater".into(),
            menu_button: "menu-btn".into(),
            menu: "menu".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub star_count: usize,
    pub cloud_count: usize,
    /// `localStorage` key holding `"day"` or `"night"`.
    pub storage_key: String,
    pub sun_icon: String,
    pub moon_icon: String,
    /// Class applied to the root element in night mode.
    pub night_class: String,
    pub star_hide_delay_ms: u32,
    pub night_transition_secs: f64,
    pub day_transition_secs: f64,
    pub elements: ElementIds,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 150,
            cloud_count: 6,
            storage_key: "theme".into(),
            sun_icon: "assets/sun.svg".into(),
            moon_icon: "assets/moon.svg".into(),
            night_class: "night".into(),
            star_hide_delay_ms: STAR_HIDE_DELAY_MS,
            night_transition_secs: NIGHT_TRANSITION_SECS,
            day_transition_secs: DAY_TRANSITION_SECS,
            elements: ElementIds::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Icon URI shown for `theme`.
    #[must_use]
    pub fn icon_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Day => &self.sun_icon,
            Theme::Night => &self.moon_icon,
        }
    }

    /// Celestial transition length for a switch into `theme`.
    #[must_use]
    pub fn transition_for(&self, theme: Theme) -> f64 {
        match theme {
            Theme::Day => self.day_transition_secs,
            Theme::Night => self.night_transition_secs,
        }
    }
}
