//! Current document address and change notifications
//!
//! Listeners run synchronously inside [`Location::navigate`], in the order they
//! subscribed. Dropping the returned [`Subscription`] detaches the listener.

use crate::address::parse_address;
use crate::error::Result;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use url::Url;

type Listener = Rc<dyn Fn(&Url)>;

struct LocationInner {
    address: Url,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
    /// Bumped on every address change
    generation: u64,
}

impl LocationInner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// Observable document address
#[derive(Clone)]
pub struct Location {
    inner: Rc<RefCell<LocationInner>>,
}

impl Location {
    pub fn new(address: Url) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LocationInner {
                address,
                listeners: Vec::new(),
                next_id: 0,
                generation: 0,
            })),
        }
    }

    /// Create a location from an address string
    pub fn parse(address: &str) -> Result<Self> {
        Ok(Self::new(parse_address(address)?))
    }

    /// Snapshot of the current address
    pub fn current(&self) -> Url {
        self.inner.borrow().address.clone()
    }

    pub fn href(&self) -> String {
        self.inner.borrow().address.to_string()
    }

    /// Move to a new address and notify listeners if it differs from the current one
    pub fn navigate(&self, address: Url) {
        let (generation, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if inner.address == address {
                return;
            }
            inner.address = address.clone();
            inner.generation += 1;
            let listeners: Vec<(u64, Listener)> = inner
                .listeners
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(listener)))
                .collect();
            (inner.generation, listeners)
        };

        log::debug!("Address changed to {}, notifying {} listeners", address, listeners.len());

        for (id, listener) in listeners {
            {
                let inner = self.inner.borrow();
                // A listener navigated again, the newer dispatch already ran
                if inner.generation != generation {
                    break;
                }
                if !inner.is_subscribed(id) {
                    continue;
                }
            }
            listener(&address);
        }
    }

    /// Parse an address string and navigate to it
    pub fn navigate_str(&self, address: &str) -> Result<()> {
        self.navigate(parse_address(address)?);
        Ok(())
    }

    /// Register a listener invoked with every new address
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Url) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));

        Subscription {
            id,
            location: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Handle keeping an address listener attached
pub struct Subscription {
    id: u64,
    location: Weak<RefCell<LocationInner>>,
}

impl Subscription {
    /// Detach the listener now
    pub fn unsubscribe(self) {}

    /// Whether the listener is still attached to a live location
    pub fn is_active(&self) -> bool {
        self.location
            .upgrade()
            .map(|inner| inner.borrow().is_subscribed(self.id))
            .unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.location.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
