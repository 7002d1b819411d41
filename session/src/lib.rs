//! Session and role-routing contract for the SmartCar access panel.
//!
//! This crate owns everything that decides *who* may see *which* view:
//! the persisted session, the route table, the navigation guard, the login
//! exchange, and the handling of guarded backend responses. It has no
//! browser or HTTP dependencies so that both `client` (WASM) and `cli`
//! (native) drive the exact same rules.
//!
//! DESIGN
//! ======
//! Storage is a seam ([`KeyValueStorage`]) and [`SessionStore`] is the only
//! code that touches it. Views never read storage directly; they ask the
//! store, the guard, or the guarded-response helpers.

pub mod api;
pub mod auth;
pub mod guard;
pub mod model;
pub mod routes;
pub mod storage;
pub mod store;

pub use api::{ApiError, Resource};
pub use auth::{AuthError, LoginRequest, LoginResponse};
pub use guard::GuardDecision;
pub use model::{Role, Session, SessionUser};
pub use routes::{AppRoute, RoleSet};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::SessionStore;
