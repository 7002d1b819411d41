//! # smartcar_cli
//!
//! Command-line client for the SmartCar vehicle-access backend.
//!
//! Drives the same session contract as the browser panel: the session
//! lives in a JSON file instead of `localStorage`, every `get` runs the
//! route guard's role check before touching the network, and a 401 on any
//! guarded call deletes the stored session.

pub mod backend;
pub mod commands;
pub mod error;
pub mod file_storage;

pub use backend::Backend;
pub use error::CliError;
pub use file_storage::FileStorage;
