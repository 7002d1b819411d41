//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only place the client talks HTTP: the login exchange and the
//! guarded request helper every data view goes through.

pub mod api;
