//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are only ever constructed by `section`,
//! after the route guard has allowed the navigation.

pub mod admin_home;
pub mod guard_home;
pub mod login;
pub mod not_found;
pub mod resource;
pub mod section;
