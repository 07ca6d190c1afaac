//! Change-notifying mutable cells
//!
//! `ObservableProperty<T>` is the foundation for every stateful field in the
//! coordinator: a mutable cell that notifies subscribers with `(old, new)`
//! when, and only when, a write actually changes the value under
//! `PartialEq`. Derived read-only cells are built on top of subscriptions
//! via [`derive`] and [`derive2`].
//!
//! Handles are cheap to clone and share one cell (the same shared-state
//! idiom as an `Arc<RwLock<..>>` snapshot, but with notification attached).
//! The value lock is released before callbacks run, so a subscriber may read
//! the property it observes.

use std::sync::{Arc, Mutex};

/// Identifies one subscription on one property, for later removal.
pub type SubscriptionId = u64;

type Callback<T> = Box<dyn FnMut(&T, &T) + Send>;

struct Subscribers<T> {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Callback<T>)>,
}

/// A mutable cell whose writes are equality-gated and observable.
///
/// Writes and reads may come from any thread holding a handle, but the
/// intended discipline is the coordinator's: one owning task writes, spawned
/// work communicates through events instead of touching properties.
pub struct ObservableProperty<T> {
    value: Arc<Mutex<T>>,
    subscribers: Arc<Mutex<Subscribers<T>>>,
}

impl<T> Clone for ObservableProperty<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObservableProperty")
            .field(&*self.value.lock().expect("property value lock poisoned"))
            .finish()
    }
}

impl<T> ObservableProperty<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
            subscribers: Arc::new(Mutex::new(Subscribers {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Current value, cloned out of the cell.
    pub fn get(&self) -> T {
        self.value.lock().expect("property value lock poisoned").clone()
    }

    /// Write a new value.
    ///
    /// If the value differs from the current one under `PartialEq`, it is
    /// stored and every subscriber is notified synchronously with
    /// `(old, new)`, in subscription order. A no-op write stores nothing and
    /// fires no notification. Returns whether a change occurred.
    ///
    /// Notifications for a given property are serialized: concurrent writers
    /// observe them in write order.
    pub fn set(&self, new_value: T) -> bool {
        let old = {
            let mut value = self.value.lock().expect("property value lock poisoned");
            if *value == new_value {
                return false;
            }
            std::mem::replace(&mut *value, new_value.clone())
        };
        let mut subscribers = self
            .subscribers
            .lock()
            .expect("property subscriber lock poisoned");
        for (_, callback) in subscribers.entries.iter_mut() {
            callback(&old, &new_value);
        }
        true
    }

    /// Register a callback invoked on every effective write.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T, &T) + Send + 'static,
    {
        let mut subscribers = self
            .subscribers
            .lock()
            .expect("property subscriber lock poisoned");
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .lock()
            .expect("property subscriber lock poisoned");
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
        subscribers.entries.len() != before
    }

    /// A read-only handle onto the same cell.
    pub fn read_only(&self) -> ReadOnlyProperty<T> {
        ReadOnlyProperty {
            inner: self.clone(),
        }
    }
}

/// Read-only view of a property: same cell, no `set`.
///
/// Derived cells are handed out in this form so their value can only change
/// through recomputation.
pub struct ReadOnlyProperty<T> {
    inner: ObservableProperty<T>,
}

impl<T> Clone for ReadOnlyProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ReadOnlyProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ReadOnlyProperty")
            .field(&self.inner)
            .finish()
    }
}

impl<T> ReadOnlyProperty<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T, &T) + Send + 'static,
    {
        self.inner.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

/// Derived read-only cell over one source.
///
/// Computed from the source's current value at construction, then recomputed
/// on every source change. The derived cell is itself equality-gated, so a
/// recompute that lands on the same value notifies nobody downstream.
pub fn derive<S, T, F>(source: &ObservableProperty<S>, f: F) -> ReadOnlyProperty<T>
where
    S: Clone + PartialEq + Send + 'static,
    T: Clone + PartialEq + Send + 'static,
    F: Fn(&S) -> T + Send + 'static,
{
    let derived = ObservableProperty::new(f(&source.get()));
    let sink = derived.clone();
    source.subscribe(move |_, new_value| {
        sink.set(f(new_value));
    });
    derived.read_only()
}

/// Derived read-only cell over two sources.
pub fn derive2<A, B, T, F>(
    a: &ObservableProperty<A>,
    b: &ObservableProperty<B>,
    f: F,
) -> ReadOnlyProperty<T>
where
    A: Clone + PartialEq + Send + 'static,
    B: Clone + PartialEq + Send + 'static,
    T: Clone + PartialEq + Send + 'static,
    F: Fn(&A, &B) -> T + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let derived = ObservableProperty::new(f(&a.get(), &b.get()));
    {
        let sink = derived.clone();
        let f = Arc::clone(&f);
        let b = b.clone();
        a.subscribe(move |_, new_a| {
            sink.set(f(new_a, &b.get()));
        });
    }
    {
        let sink = derived.clone();
        let f = Arc::clone(&f);
        let a = a.clone();
        b.subscribe(move |_, new_b| {
            sink.set(f(&a.get(), new_b));
        });
    }
    derived.read_only()
}
