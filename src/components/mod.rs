//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and content sections while reading/writing
//! shared state from Leptos context providers. Section components are
//! static markup over `content`; only `nav_bar` and `hero` mutate state.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod projects;
pub mod skills;
