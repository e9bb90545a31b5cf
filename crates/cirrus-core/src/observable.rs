//! Single-writer observable values with synchronous reads.
//!
//! The published snapshot, error slot, and loading flag are all
//! `Observable`s: many readers, serialized writers, and a callback list for
//! subscribers. Writes and their notifications happen under one lock, so a
//! subscriber never observes publications out of completion order and a
//! reader sees either the old value or the new one, never a partial write.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<Subscriber<T>>>,
}

/// A shared observable value. Cloning is cheap and refers to the same slot.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Publish a new value and notify subscribers.
    ///
    /// Concurrent callers serialize here; whichever call enters last leaves
    /// its value published (last-write-wins by completion).
    pub fn set(&self, value: T) {
        let subscribers = self.inner.subscribers.lock();
        *self.inner.value.write() = value.clone();
        for notify in subscribers.iter() {
            notify(&value);
        }
    }

    /// Register a callback invoked on every publication.
    ///
    /// Callbacks run under the publication lock and the locks are not
    /// reentrant: a callback must not call `set` or `subscribe` on the
    /// observable it is watching, or it will deadlock.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) {
        self.inner.subscribers.lock().push(Box::new(callback));
    }
}
