//! Day/night decorative scene controller for the browser.
//!
//! This crate is compiled to WebAssembly and boots itself on DOM ready. It
//! generates the sky decorations (stars, clouds, craters), switches and
//! persists the day/night theme, and animates the ocean waves and the boat
//! from a `requestAnimationFrame` loop. It also wires the page's menu toggle.
//!
//! All decisions are made by [`scene::SceneCore`] and the pure generators,
//! which compile and test without a browser. [`dom`] and [`app`] apply the
//! results to the document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | Testable [`scene::SceneCore`]: theme state machine, star hide timer, frame loop state |
//! | [`theme`] | `Theme` enum, morning window, star visibility rule |
//! | [`decor`] | Star, cloud and crater generators |
//! | [`motion`] | Wave and boat motion, frame clock |
//! | [`menu`] | Menu toggle state |
//! | [`config`] | `SceneConfig`: element ids, counts, icons, timings |
//! | [`consts`] | Shared numeric constants (ranges, amplitudes, delays) |
//! | [`error`] | `SceneError` |
//! | [`dom`] | Element handles and `localStorage` access |
//! | [`app`] | Wasm entry point, controller ownership, event wiring |

pub mod app;
pub mod config;
pub mod consts;
pub mod decor;
pub mod dom;
pub mod error;
pub mod menu;
pub mod motion;
pub mod scene;
pub mod theme;
