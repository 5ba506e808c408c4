//! Shared continuously-updating drag value with a listener registry.
//!
//! The sliding panel owns such a signal and feeds it on every drag
//! frame; screens observe it through RAII subscriptions so listeners
//! are deregistered on every unmount path, not just the happy one.

use std::cell::RefCell;
use std::rc::Rc;

type Listener = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct SignalInner {
    value: f64,
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
}

/// Continuously-updating numeric signal, shared by cloning.
#[derive(Clone, Default)]
pub struct DragSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl DragSignal {
    pub fn new(initial: f64) -> Self {
        let signal = Self::default();
        signal.inner.borrow_mut().value = initial;
        signal
    }

    pub fn get(&self) -> f64 {
        self.inner.borrow().value
    }

    /// Store a new value, then notify every listener.
    pub fn set(&self, value: f64) {
        self.inner.borrow_mut().value = value;
        // Snapshot the callbacks so a listener may read or write the
        // signal without hitting a double borrow.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    /// Register a listener; the returned guard deregisters it on drop.
    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) -> SignalSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        SignalSubscription {
            signal: self.clone(),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl PartialEq for DragSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// RAII guard for a registered listener.
pub struct SignalSubscription {
    signal: DragSignal,
    id: usize,
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        self.signal
            .inner
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_observe_every_set() {
        let signal = DragSignal::new(120.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = signal.subscribe(move |v| sink.borrow_mut().push(v));

        signal.set(200.0);
        signal.set(950.0);
        assert_eq!(*seen.borrow(), vec![200.0, 950.0]);
        assert_eq!(signal.get(), 950.0);
    }

    #[test]
    fn dropping_the_subscription_deregisters_the_listener() {
        let signal = DragSignal::new(0.0);
        let a = signal.subscribe(|_| {});
        let b = signal.subscribe(|_| {});
        assert_eq!(signal.listener_count(), 2);

        drop(a);
        assert_eq!(signal.listener_count(), 1);
        drop(b);
        assert_eq!(signal.listener_count(), 0);

        // setting with no listeners is a no-op, not a panic
        signal.set(42.0);
        assert_eq!(signal.get(), 42.0);
    }

    #[test]
    fn listener_may_read_the_signal_reentrantly() {
        let signal = DragSignal::new(0.0);
        let observed = Rc::new(RefCell::new(0.0));
        let sink = observed.clone();
        let reader = signal.clone();
        let _sub = signal.subscribe(move |_| {
            *sink.borrow_mut() = reader.get();
        });

        signal.set(77.0);
        assert_eq!(*observed.borrow(), 77.0);
    }
}
