//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates interaction to
//! `components`.

pub mod home;
pub mod login;
