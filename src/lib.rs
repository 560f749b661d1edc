//! # portfolio
//!
//! Leptos + WASM single-page portfolio site: fixed navigation, hero, and
//! static content sections rendered from compiled-in data, with a
//! persisted light/dark theme and scroll-driven section highlighting.
//!
//! This crate contains the page components, application state, and the
//! browser glue that backs theme persistence and scroll tracking. State
//! decisions are pure functions in `state`; all DOM and storage I/O lives
//! in `util` and the component layer.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;
