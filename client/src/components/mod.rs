//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render Site A chrome and read the redirect configuration from
//! Leptos context.

pub mod navigation_menu;
