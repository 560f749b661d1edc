//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability. Browser calls are gated on
//! `target_arch = "wasm32"`; native builds get inert fallbacks so the
//! unit-test suite runs on the host toolchain.

pub mod dark_mode;
pub mod scroll;
pub mod storage;
