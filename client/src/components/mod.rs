//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render panel chrome and read-only data views. They receive the
//! already-guarded session as a prop and never read storage themselves.

pub mod data_table;
pub mod layout;
pub mod stat_card;
