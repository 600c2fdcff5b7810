use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Snapshot, Store};
use crate::storage::Storage;

/// A store that can be handed to several threads. Every call takes the one
/// lock, so mutations never interleave and each validates against the
/// state left by the previous one.
pub struct SharedStore<S: Storage> {
    inner: Arc<Mutex<Store<S>>>,
}

impl<S: Storage> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Storage> SharedStore<S> {
    pub fn new(store: Store<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Store<S>) -> R) -> R {
        f(&*self.lock())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Store<S>) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    // A panic inside a closure cannot leave a half-applied mutation, since
    // the store validates before touching any collection.
    fn lock(&self) -> MutexGuard<'_, Store<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
