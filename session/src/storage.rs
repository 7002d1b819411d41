//! Durable key-value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser binds this to `localStorage`, the CLI to a JSON file, and
//! tests to [`MemoryStorage`]. Only [`crate::SessionStore`] calls it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value storage that survives reloads.
///
/// Implementations swallow their own I/O failures: reads degrade to `None`
/// and writes become no-ops. Callers treat storage as always available.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage backed by a shared map.
///
/// Clones share the same map, which mirrors how every handle to
/// `localStorage` in a tab sees the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}
