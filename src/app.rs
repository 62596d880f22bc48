//! WebAssembly entry point and event wiring.
//!
//! ARCHITECTURE
//! ============
//! [`CosmicHorizon`] owns the scene core, the element handles, storage, the
//! random source and the two timer resources (frame callback, star hide
//! timeout). It is constructed once on DOM ready and handed to the event
//! listeners that drive it; nothing lives in a global.
//!
//! Frame and timer callbacks hold only a `Weak` reference, so dropping the
//! controller (or calling [`CosmicHorizon::destroy`]) stops them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Event, EventTarget, Window};

use crate::config::{ElementIds, SceneConfig};
use crate::decor::{generate_clouds, generate_stars, position_craters};
use crate::dom::{SceneElements, ThemeStorage, is_parsed};
use crate::error::SceneError;
use crate::menu::{HIDDEN_CLASS, aria_value, next_expanded};
use crate::scene::{Action, LoopState, SceneCore};

/// Root element attribute that may carry a JSON [`SceneConfig`] override.
const CONFIG_ATTRIBUTE: &str = "data-horizon-config";

fn window() -> Result<Window, SceneError> {
    web_sys::window().ok_or_else(|| SceneError::Host("no window".into()))
}

fn document(window: &Window) -> Result<Document, SceneError> {
    window.document().ok_or_else(|| SceneError::Host("no document".into()))
}

fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64((js_sys::Math::random() * 9_007_199_254_740_992.0) as u64)
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SceneError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|err| SceneError::from_js(&err))?;
    cb.forget();
    Ok(())
}

struct Inner {
    core: SceneCore,
    elements: SceneElements,
    storage: ThemeStorage,
    rng: StdRng,
    hide_timer: Option<Timeout>,
    frame_cb: Option<Closure<dyn FnMut(f64)>>,
}

/// The day/night scene controller bound to a live document.
#[derive(Clone)]
pub struct CosmicHorizon {
    inner: Rc<RefCell<Inner>>,
}

impl CosmicHorizon {
    /// Resolve elements, build the decorations, converge on the stored theme
    /// and start the animation loop.
    ///
    /// # Errors
    ///
    /// Fails if the toggle control is missing or the first frame cannot be
    /// requested.
    pub fn mount(config: SceneConfig) -> Result<Self, SceneError> {
        let window = window()?;
        let document = document(&window)?;
        let elements = SceneElements::query(&document, &config.elements)?;
        let storage = ThemeStorage::open(&window);
        let stored = storage.read(&config.storage_key);

        let scene = Self {
            inner: Rc::new(RefCell::new(Inner {
                core: SceneCore::new(config),
                elements,
                storage,
                rng: seeded_rng(),
                hide_timer: None,
                frame_cb: None,
            })),
        };

        let (star_count, cloud_count) = {
            let inner = scene.inner.borrow();
            (inner.core.config.star_count, inner.core.config.cloud_count)
        };
        scene.generate_stars(star_count);
        scene.generate_clouds(cloud_count);
        scene.position_craters();

        let actions = scene.inner.borrow_mut().core.start(stored.as_deref(), current_hour());
        perform(&scene.inner, actions);

        scene.start_loop()?;
        log::info!("scene: mounted");
        Ok(scene)
    }

    #[must_use]
    pub fn is_night(&self) -> bool {
        self.inner.borrow().core.state.is_night
    }

    pub fn toggle_theme(&self) {
        let actions = self.inner.borrow_mut().core.toggle_theme(current_hour());
        perform(&self.inner, actions);
    }

    /// Rebuild the star layer with `count` fresh stars.
    pub fn generate_stars(&self, count: usize) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let stars = generate_stars(&mut inner.rng, count, inner.core.state.is_night);
        if let Err(err) = inner.elements.render_stars(&stars) {
            log::warn!("scene: rendering stars failed: {err:?}");
        }
    }

    /// Rebuild the cloud layer with `count` fresh clouds.
    pub fn generate_clouds(&self, count: usize) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let clouds = generate_clouds(&mut inner.rng, count);
        if let Err(err) = inner.elements.render_clouds(&clouds) {
            log::warn!("scene: rendering clouds failed: {err:?}");
        }
    }

    /// Re-place the existing craters. Called at mount and on every resize.
    pub fn position_craters(&self) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let placements = position_craters(&mut inner.rng, inner.elements.crater_count());
        if let Err(err) = inner.elements.place_craters(&placements) {
            log::warn!("scene: placing craters failed: {err:?}");
        }
    }

    fn start_loop(&self) -> Result<(), SceneError> {
        let weak = Rc::downgrade(&self.inner);
        let cb = Closure::wrap(Box::new(move |timestamp: f64| on_frame(&weak, timestamp)) as Box<dyn FnMut(f64)>);
        self.inner.borrow_mut().frame_cb = Some(cb);
        request_frame(&self.inner)
    }

    /// Stop the animation loop and drop any pending star hide. Safe to call
    /// more than once.
    pub fn destroy(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handle) = inner.core.destroy() {
            match window() {
                Ok(window) => {
                    if let Err(err) = window.cancel_animation_frame(handle) {
                        log::warn!("scene: cancel frame {handle} failed: {err:?}");
                    }
                }
                Err(err) => log::warn!("scene: {err}"),
            }
        }
        inner.hide_timer = None;
        inner.frame_cb = None;
    }
}

fn request_frame(inner: &Rc<RefCell<Inner>>) -> Result<(), SceneError> {
    let window = window()?;
    let mut guard = inner.borrow_mut();
    let handle = {
        let Some(cb) = guard.frame_cb.as_ref() else {
            return Ok(());
        };
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|err| SceneError::from_js(&err))?
    };
    guard.core.arm_frame(handle);
    Ok(())
}

fn on_frame(weak: &Weak<RefCell<Inner>>, timestamp: f64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    {
        let mut guard = inner.borrow_mut();
        if guard.core.loop_state() == LoopState::Stopped {
            return;
        }
        let wave_count = guard.elements.wave_count();
        let frame = guard.core.animate(timestamp, wave_count);
        if let Err(err) = guard.elements.apply_frame(&frame) {
            log::warn!("scene: frame update failed: {err:?}");
        }
    }
    if let Err(err) = request_frame(&inner) {
        log::warn!("scene: {err}");
    }
}

fn perform(inner: &Rc<RefCell<Inner>>, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::PersistTheme(theme) => {
                let guard = inner.borrow();
                guard.storage.write(&guard.core.config.storage_key, theme);
            }
            Action::ScheduleStarHide { token, delay_ms } => {
                let weak = Rc::downgrade(inner);
                let timer = Timeout::new(delay_ms, move || {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let follow_up = inner.borrow_mut().core.on_star_hide_timer(token, current_hour());
                    perform(&inner, follow_up.into_iter().collect());
                });
                inner.borrow_mut().hide_timer = Some(timer);
            }
            Action::CancelStarHide => {
                inner.borrow_mut().hide_timer = None;
            }
            other => {
                let guard = inner.borrow();
                if let Err(err) = guard.elements.apply(&other, &guard.core.config.night_class) {
                    log::warn!("scene: applying {other:?} failed: {err:?}");
                }
            }
        }
    }
}

fn read_config(document: &Document) -> SceneConfig {
    let raw = document
        .document_element()
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let Some(raw) = raw else {
        return SceneConfig::default();
    };
    match SceneConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("scene: {err}; using defaults");
            SceneConfig::default()
        }
    }
}

fn wire_menu(document: &Document, ids: &ElementIds) -> Result<(), SceneError> {
    let (Some(button), Some(menu)) = (document.get_element_by_id(&ids.menu_button), document.get_element_by_id(&ids.menu))
    else {
        log::debug!("menu: button or menu absent, not wiring");
        return Ok(());
    };
    let target = button.clone();
    listen(&target, "click", move |_| {
        let expanded = next_expanded(button.get_attribute("aria-expanded").as_deref());
        if let Err(err) = button.set_attribute("aria-expanded", aria_value(expanded)) {
            log::warn!("menu: set aria-expanded failed: {err:?}");
        }
        if let Err(err) = menu.class_list().toggle(HIDDEN_CLASS) {
            log::warn!("menu: toggle class failed: {err:?}");
        }
    })
}

fn wire_scene(window: &Window, scene: &CosmicHorizon) -> Result<(), SceneError> {
    let toggle = scene.inner.borrow().elements.toggle.clone();
    let on_change = scene.clone();
    listen(&toggle, "change", move |_| on_change.toggle_theme())?;
    let on_resize = scene.clone();
    listen(window, "resize", move |_| on_resize.position_craters())
}

fn boot() -> Result<(), SceneError> {
    let window = window()?;
    let document = document(&window)?;
    let config = read_config(&document);
    wire_menu(&document, &config.elements)?;
    let scene = CosmicHorizon::mount(config)?;
    wire_scene(&window, &scene)
}

fn when_ready<F>(document: &Document, run: F) -> Result<(), SceneError>
where
    F: FnOnce() + 'static,
{
    if is_parsed(&document.ready_state()) {
        run();
        return Ok(());
    }
    let mut run = Some(run);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(run) = run.take() {
            run();
        }
    })
}

/// Install logging and boot the page once the DOM is parsed.
///
/// # Errors
///
/// Fails only if there is no window or document.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }

    let document = document(&window()?)?;
    when_ready(&document, || {
        if let Err(err) = boot() {
            log::error!("scene: boot failed: {err}");
        }
    })?;
    Ok(())
}
