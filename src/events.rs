// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Event subscriptions with an owner and an end.
//!
//! Handlers attached imperatively at load time pile up: every view transition
//! that re-runs setup adds another copy. Here a subscription is a value.
//! Dropping it detaches the handler, and an `EventScope` keys subscriptions by
//! name so binding `"theme-btn"` a second time replaces the first binding
//! instead of doubling it.
//!
//! Single-threaded by construction (`Rc`), like the UI thread it models.
//! A handler may subscribe or unsubscribe while an event is being emitted;
//! the change takes effect from the next emit. A handler that re-emits into
//! its own hub is not called recursively.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<E> = Rc<RefCell<Box<dyn FnMut(&E)>>>;

struct Registry<E> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler<E>)>>,
}

impl<E> Registry<E> {
    fn remove(&self, id: u64) {
        self.handlers.borrow_mut().retain(|(hid, _)| *hid != id);
    }
}

/// A source of events of type `E`.
pub struct EventHub<E> {
    registry: Rc<Registry<E>>,
}

impl<E: 'static> EventHub<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Attach `handler` until the returned subscription is dropped.
    #[must_use = "dropping the subscription detaches the handler immediately"]
    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        let boxed: Box<dyn FnMut(&E)> = Box::new(handler);
        self.registry
            .handlers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(boxed))));

        let weak: Weak<Registry<E>> = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.remove(id);
                }
            })),
        }
    }

    /// Call every attached handler, in subscription order.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Handler<E>> = self
            .registry
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in snapshot {
            if let Ok(mut f) = handler.try_borrow_mut() {
                f(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.handlers.borrow().len()
    }
}

impl<E: 'static> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Live attachment of one handler. Detaches on drop.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap an arbitrary teardown, e.g. removing a DOM listener.
    pub fn from_teardown(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Named subscriptions with a shared lifetime.
#[derive(Debug, Default)]
pub struct EventScope {
    bindings: HashMap<String, Subscription>,
}

impl EventScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `subscription` under `key`, detaching whatever held the key before.
    pub fn bind(&mut self, key: impl Into<String>, subscription: Subscription) {
        let key = key.into();
        if self.bindings.insert(key.clone(), subscription).is_some() {
            log::debug!("rebound '{}', previous handler detached", key);
        }
    }

    pub fn unbind(&mut self, key: &str) -> bool {
        self.bindings.remove(key).is_some()
    }

    pub fn is_bound(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Detach everything.
    pub fn teardown(&mut self) {
        self.bindings.clear();
    }
}

impl Drop for EventScope {
    fn drop(&mut self) {
        self.teardown();
    }
}
