//! Render-tree host: element handles, storage, and applying core output.
//!
//! This module is the only place that touches the document. It receives
//! decisions from [`crate::scene::SceneCore`] and the decoration generators
//! and writes them into styles, classes and attributes. Absent optional
//! elements turn the matching write into a no-op.
//!
//! Fallible DOM calls propagate `Result<(), JsValue>`; the caller in
//! [`crate::app`] decides whether to log or abort.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Storage, Window};

use crate::config::ElementIds;
use crate::decor::{Cloud, CraterPlacement, Star};
use crate::error::SceneError;
use crate::motion::wave_transform;
use crate::scene::{Action, FrameUpdate};
use crate::theme::Theme;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Whether a `document.readyState` value means parsing has finished
/// (`"interactive"` or `"complete"`), so boot can run immediately.
#[must_use]
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(as_html)
}

/// All elements carrying `class`, searched under `scope` when present.
fn by_class(document: &Document, scope: Option<&HtmlElement>, class: &str) -> Vec<HtmlElement> {
    let collection = match scope {
        Some(scope) => scope.get_elements_by_class_name(class),
        None => document.get_elements_by_class_name(class),
    };
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(as_html)
        .collect()
}

fn set_styles(element: &HtmlElement, styles: &[(&str, String)]) -> Result<(), JsValue> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

fn spawn(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?;
    element.set_class_name(class);
    element.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Handles to every element the scene drives, resolved once at mount.
pub struct SceneElements {
    document: Document,
    pub toggle: HtmlInputElement,
    root: Option<Element>,
    celestial: Option<HtmlElement>,
    boat: Option<HtmlElement>,
    stars: Option<HtmlElement>,
    clouds: Option<HtmlElement>,
    icon: Option<Element>,
    waves: Vec<HtmlElement>,
    craters: Vec<HtmlElement>,
}

impl SceneElements {
    /// Resolve handles. Only the toggle control is required.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MissingElement`] if the toggle is absent or is
    /// not an `<input>`.
    pub fn query(document: &Document, ids: &ElementIds) -> Result<Self, SceneError> {
        let toggle = document
            .get_element_by_id(&ids.toggle)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or_else(|| SceneError::MissingElement(ids.toggle.clone()))?;

        let celestial = by_id(document, &ids.celestial);
        let ocean = by_id(document, &ids.ocean);
        let waves = by_class(document, ocean.as_ref(), &ids.wave_class);
        let craters = by_class(document, celestial.as_ref(), &ids.crater_class);

        Ok(Self {
            document: document.clone(),
            toggle,
            root: document.document_element(),
            boat: by_id(document, &ids.boat),
            stars: by_id(document, &ids.stars),
            clouds: by_id(document, &ids.clouds),
            icon: document.get_element_by_id(&ids.icon),
            celestial,
            waves,
            craters,
        })
    }

    #[must_use]
    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }

    #[must_use]
    pub fn crater_count(&self) -> usize {
        self.craters.len()
    }

    /// Apply a render-tree action. Storage and timer actions are handled by
    /// the caller and ignored here.
    ///
    /// # Errors
    ///
    /// Propagates any failed DOM call.
    pub fn apply(&self, action: &Action, night_class: &str) -> Result<(), JsValue> {
        match action {
            Action::SetNightClass(night) => {
                self.toggle.set_checked(*night);
                if let Some(root) = &self.root {
                    root.class_list().toggle_with_force(night_class, *night)?;
                }
            }
            Action::SetCelestialTransition(secs) => {
                if let Some(celestial) = &self.celestial {
                    set_styles(celestial, &[("transition", format!("all {secs}s ease"))])?;
                }
            }
            Action::SetIcon(uri) => {
                if let Some(icon) = &self.icon {
                    icon.set_attribute("src", uri)?;
                }
            }
            Action::SetStarsOpacity(opacity) => {
                if let Some(stars) = &self.stars {
                    set_styles(stars, &[("opacity", (*opacity).to_owned())])?;
                }
            }
            Action::PersistTheme(_) | Action::ScheduleStarHide { .. } | Action::CancelStarHide => {}
        }
        Ok(())
    }

    /// Replace the star layer's children.
    ///
    /// # Errors
    ///
    /// Propagates any failed DOM call.
    pub fn render_stars(&self, stars: &[Star]) -> Result<(), JsValue> {
        let Some(container) = &self.stars else {
            return Ok(());
        };
        container.set_inner_html("");
        for star in stars {
            let element = spawn(&self.document, "star")?;
            set_styles(
                &element,
                &[
                    ("left", format!("{}%", star.x_pct)),
                    ("top", format!("{}%", star.y_pct)),
                    ("width", format!("{}px", star.size_px)),
                    ("height", format!("{}px", star.size_px)),
                    ("opacity", star.opacity.to_string()),
                    ("--star-opacity", star.base_opacity.to_string()),
                    ("animation-delay", format!("{}s", star.delay_s)),
                    ("animation-duration", format!("{}s", star.duration_s)),
                ],
            )?;
            container.append_child(&element)?;
        }
        Ok(())
    }

    /// Replace the cloud layer's children.
    ///
    /// # Errors
    ///
    /// Propagates any failed DOM call.
    pub fn render_clouds(&self, clouds: &[Cloud]) -> Result<(), JsValue> {
        let Some(container) = &self.clouds else {
            return Ok(());
        };
        container.set_inner_html("");
        for cloud in clouds {
            let element = spawn(&self.document, "cloud")?;
            set_styles(
                &element,
                &[
                    ("left", format!("{}%", cloud.x_pct)),
                    ("top", format!("{}%", cloud.y_pct)),
                    ("width", format!("{}px", cloud.width_px)),
                    ("height", format!("{}px", cloud.height_px)),
                    ("opacity", cloud.opacity.to_string()),
                    ("animation-duration", format!("{}s", cloud.duration_s)),
                    ("animation-delay", format!("{}s", cloud.delay_s)),
                ],
            )?;
            container.append_child(&element)?;
        }
        Ok(())
    }

    /// Move the existing craters to `placements`, pairing by index.
    ///
    /// # Errors
    ///
    /// Propagates any failed DOM call.
    pub fn place_craters(&self, placements: &[CraterPlacement]) -> Result<(), JsValue> {
        for (crater, placement) in self.craters.iter().zip(placements) {
            set_styles(
                crater,
                &[
                    ("left", format!("{}%", placement.left_pct)),
                    ("top", format!("{}%", placement.top_pct)),
                    ("width", format!("{}px", placement.size_px)),
                    ("height", format!("{}px", placement.size_px)),
                    ("transform", "translate(-50%, -50%)".to_owned()),
                ],
            )?;
        }
        Ok(())
    }

    /// Write one frame's wave and boat transforms.
    ///
    /// # Errors
    ///
    /// Propagates any failed DOM call.
    pub fn apply_frame(&self, frame: &FrameUpdate) -> Result<(), JsValue> {
        for (wave, offset) in self.waves.iter().zip(&frame.wave_offsets) {
            set_styles(wave, &[("transform", wave_transform(*offset))])?;
        }
        if let Some(boat) = &self.boat {
            set_styles(boat, &[("transform", frame.boat.transform())])?;
        }
        Ok(())
    }
}

/// `localStorage` access for the theme preference. Unavailable storage
/// (private mode, sandboxed frames) reads as empty and ignores writes.
pub struct ThemeStorage {
    storage: Option<Storage>,
}

impl ThemeStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self { storage },
            Err(err) => {
                log::warn!("storage: localStorage unavailable: {err:?}");
                Self { storage: None }
            }
        }
    }

    #[must_use]
    pub fn read(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("storage: read {key} failed: {err:?}");
                None
            }
        }
    }

    pub fn write(&self, key: &str, theme: Theme) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, theme.as_str()) {
            log::warn!("storage: write {key} failed: {err:?}");
        }
    }
}
