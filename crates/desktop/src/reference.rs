//! Shared, atomically replaced reference lists.

use std::sync::{Arc, PoisonError, RwLock};

/// A list loaded from the backend and shared between loader tasks and readers.
///
/// A refresh swaps in a whole new list; it never edits the current one in place.
/// Readers take a [`snapshot`](ReferenceList::snapshot) and so always see either
/// the complete old list or the complete new one.
#[derive(Debug)]
pub struct ReferenceList<T> {
    current: Arc<RwLock<Arc<Vec<T>>>>,
}

impl<T> ReferenceList<T> {
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Vec::new()))),
        }
    }

    /// The list as of now. Later replacements do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in `items` as the current list.
    pub fn replace(&self, items: Vec<T>) {
        let items = Arc::new(items);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = items;
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl<T> Default for ReferenceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share the same slot.
impl<T> Clone for ReferenceList<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
        }
    }
}
