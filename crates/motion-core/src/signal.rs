//! Observable values for structural state.
//!
//! Values that toggle markup (visibility, classes) are published through a
//! [`Signal`]; every consumer holds its own subscription and drops it on
//! teardown. One underlying browser listener can feed any number of them.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<RefCell<dyn FnMut(T)>>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

/// Single-threaded observable. Cloning shares the underlying value.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Copy + PartialEq + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value
    }

    /// Store `value` and notify subscribers if it changed.
    ///
    /// Subscribers may read the signal, unsubscribe others or set it again
    /// while being notified. A subscriber removed mid-dispatch is not called.
    /// A nested `set` supersedes the outer one: remaining subscribers only
    /// see the newer value, and a callback is never re-entered.
    pub fn set(&self, value: T) {
        let callbacks: Vec<(SubscriptionId, Callback<T>)> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.subscribers.clone()
        };
        for (id, cb) in callbacks {
            {
                let inner = self.inner.borrow();
                if inner.value != value {
                    break;
                }
                if !inner.subscribers.iter().any(|(sid, _)| *sid == id) {
                    continue;
                }
            }
            // busy: this callback is the one that re-entered
            if let Ok(mut f) = cb.try_borrow_mut() {
                (&mut *f)(value);
            }
        }
    }

    /// Register `callback`; it is invoked once immediately with the current
    /// value so consumers start consistent.
    pub fn subscribe(&self, callback: impl FnMut(T) + 'static) -> SubscriptionId {
        let cb: Callback<T> = Rc::new(RefCell::new(callback));
        let (id, value) = {
            let mut inner = self.inner.borrow_mut();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, cb.clone()));
            (id, inner.value)
        };
        (&mut *cb.borrow_mut())(value);
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// RAII subscription: unsubscribes when dropped.
pub struct Subscription<T: Copy + PartialEq + 'static> {
    signal: Signal<T>,
    id: SubscriptionId,
}

impl<T: Copy + PartialEq + 'static> Subscription<T> {
    pub fn new(signal: &Signal<T>, callback: impl FnMut(T) + 'static) -> Self {
        let id = signal.subscribe(callback);
        Self {
            signal: signal.clone(),
            id,
        }
    }
}

impl<T: Copy + PartialEq + 'static> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.signal.unsubscribe(self.id);
    }
}
