use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::{MotionError, Result};

type Callback<T> = Box<dyn FnMut(&T) + Send>;

struct SubjectInner<T> {
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    latest: Option<T>,
}

/// Minimal subject for the "subscribe to a continuous value, update on
/// change, unsubscribe on teardown" pattern used by the shared trackers.
///
/// Delivery is synchronous and single-threaded; callbacks must not subscribe
/// or publish on the same subject from inside a notification.
pub struct Subject<T> {
    inner: Arc<Mutex<SubjectInner<T>>>,
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SubjectInner {
                next_id: 0,
                subscribers: Vec::new(),
                latest: None,
            })),
        }
    }

    /// Registers a callback invoked on every published value. The returned
    /// [`Subscription`] detaches the callback when dropped.
    pub fn subscribe<F>(&self, callback: F) -> Result<Subscription<T>>
    where
        F: FnMut(&T) + Send + 'static,
    {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));

        Ok(Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        })
    }

    /// Number of subscriptions currently attached.
    pub fn live_subscribers(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.subscribers.len())
            .unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, SubjectInner<T>>> {
        self.inner
            .lock()
            .map_err(|_| MotionError::msg("subject state has been poisoned"))
    }
}

impl<T: Clone> Subject<T> {
    /// Stores the value as the latest reading and fans it out to every
    /// subscriber in registration order.
    pub fn publish(&self, value: T) -> Result<()> {
        let mut inner = self.lock()?;
        inner.latest = Some(value.clone());
        for (_, callback) in inner.subscribers.iter_mut() {
            callback(&value);
        }
        Ok(())
    }

    /// Returns the most recently published value, if any.
    pub fn latest(&self) -> Result<Option<T>> {
        let inner = self.lock()?;
        Ok(inner.latest.clone())
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("subscribers", &self.live_subscribers())
            .finish()
    }
}

/// Scoped handle for a registered callback. Dropping it detaches the
/// callback, so a view that owns the subscription cannot be notified after
/// it is discarded.
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Mutex<SubjectInner<T>>>,
}

impl<T> Subscription<T> {
    /// Detaches the callback immediately instead of waiting for drop.
    pub fn cancel(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.subscribers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
