//! Typed single-threaded publish/subscribe channel.
//!
//! Used to let deeply nested views request navigation without holding a
//! reference to the router: the router subscribes, views publish.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

type Handler<T> = Rc<dyn Fn(&T)>;

struct Subscribers<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

pub struct SignalBus<T> {
    inner: Rc<RefCell<Subscribers<T>>>,
}

impl<T> SignalBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Subscribers {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Registers `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> Subscription<T> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Rc::new(handler)));
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `signal` to everyone subscribed when publishing started and
    /// returns how many handlers ran.
    pub fn publish(&self, signal: &T) -> usize {
        let handlers: Vec<Handler<T>> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in &handlers {
            handler(signal);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl<T> Default for SignalBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SignalBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for SignalBus<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> fmt::Debug for SignalBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a handler registered; unsubscribes on drop.
pub struct Subscription<T> {
    id: u64,
    bus: Weak<RefCell<Subscribers<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::router::{NavSignal, View, ViewRouter};

    #[test]
    fn publish_reaches_live_subscribers_only() {
        let bus = SignalBus::<u32>::new();
        let seen = Rc::new(Cell::new(0));

        let first = {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |value| seen.set(seen.get() + *value))
        };
        let second = {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |value| seen.set(seen.get() + *value * 10))
        };

        assert_eq!(bus.publish(&1), 2);
        assert_eq!(seen.get(), 11);

        drop(second);
        assert_eq!(bus.publish(&1), 1);
        assert_eq!(seen.get(), 12);

        drop(first);
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish(&1), 0);
    }

    #[test]
    fn handlers_may_unsubscribe_while_being_notified() {
        let bus = SignalBus::<()>::new();
        let slot: Rc<RefCell<Option<Subscription<()>>>> = Rc::new(RefCell::new(None));
        let subscription = {
            let slot = Rc::clone(&slot);
            bus.subscribe(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        assert_eq!(bus.publish(&()), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_the_bus_is_harmless() {
        let bus = SignalBus::<u8>::new();
        let subscription = bus.subscribe(|_| {});
        drop(bus);
        drop(subscription);
    }

    #[test]
    fn router_follows_signals_published_on_the_bus() {
        let bus = SignalBus::<NavSignal>::new();
        let router = Rc::new(RefCell::new(ViewRouter::new()));
        let _subscription = {
            let router = Rc::clone(&router);
            bus.subscribe(move |signal| {
                router.borrow_mut().handle_signal(signal);
            })
        };

        bus.publish(&NavSignal::view(View::Calligraphy));
        assert_eq!(router.borrow().view(), View::Calligraphy);

        bus.publish(&NavSignal::Bare("settings".to_string()));
        assert_eq!(router.borrow().view(), View::Calligraphy);
    }
}
