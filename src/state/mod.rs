//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module owns one piece of mutable state, provided from the app root
//! as an `RwSignal` context so every field has a single obvious writer.
//! The modules hold pure data and decision logic only; browser effects
//! live in `util`.

pub mod section;
pub mod theme;
