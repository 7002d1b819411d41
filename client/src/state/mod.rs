//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session itself lives in storage behind `session::SessionStore`; state
//! here only holds transient view models that pages wrap in signals.

pub mod login;
pub mod resource;
