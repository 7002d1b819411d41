//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation decisions)
//! from page and component logic so the decisions stay testable natively.

pub mod guard;
pub mod storage;
