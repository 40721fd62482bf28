//! The event bus.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{trace, warn};

use crate::error::{DispatchFailure, HandlerError, HandlerResult};

/// An event that can travel over an [`EventBus`].
///
/// `Kind` is the payload-free discriminant handlers subscribe to.
pub trait BusEvent: fmt::Debug {
    type Kind: Copy + Eq + fmt::Debug;

    fn kind(&self) -> Self::Kind;
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Outcome of a single `emit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Handlers that completed successfully.
    pub delivered: usize,
    /// Handlers that returned an error or panicked.
    pub failed: usize,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

type Handler<E> = Rc<dyn Fn(&E) -> HandlerResult>;

enum Filter<K> {
    Kind(K),
    All,
}

struct Registration<E: BusEvent> {
    id: SubscriptionId,
    filter: Filter<E::Kind>,
    handler: Handler<E>,
}

impl<E: BusEvent> Registration<E> {
    fn matches(&self, kind: E::Kind) -> bool {
        match self.filter {
            Filter::Kind(k) => k == kind,
            Filter::All => true,
        }
    }
}

/// Single-threaded publish/subscribe bus.
///
/// Share it behind an `Rc`; every method takes `&self` so handlers may
/// emit or subscribe while a dispatch is in progress. A subscription made
/// during dispatch first fires on the next `emit`, and an unsubscription
/// made during dispatch does not stop the in-progress one.
pub struct EventBus<E: BusEvent> {
    registrations: RefCell<Vec<Registration<E>>>,
    next_id: Cell<u64>,
    failures: RefCell<Vec<DispatchFailure>>,
}

impl<E: BusEvent> EventBus<E> {
    pub fn new() -> Self {
        Self {
            registrations: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            failures: RefCell::new(Vec::new()),
        }
    }

    /// Register a handler for one event kind.
    pub fn subscribe<F>(&self, kind: E::Kind, handler: F) -> SubscriptionId
    where
        F: Fn(&E) -> HandlerResult + 'static,
    {
        self.register(Filter::Kind(kind), Rc::new(handler))
    }

    /// Register a handler for every event.
    pub fn subscribe_all<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&E) -> HandlerResult + 'static,
    {
        self.register(Filter::All, Rc::new(handler))
    }

    fn register(&self, filter: Filter<E::Kind>, handler: Handler<E>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.registrations.borrow_mut().push(Registration {
            id,
            filter,
            handler,
        });
        trace!(subscription = %id, "handler registered");
        id
    }

    /// Remove a handler. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registrations = self.registrations.borrow_mut();
        let before = registrations.len();
        registrations.retain(|r| r.id != id);
        registrations.len() < before
    }

    /// Number of handlers that would receive an event of `kind`.
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|r| r.matches(kind))
            .count()
    }

    /// Deliver `event` to every matching handler, in registration order.
    pub fn emit(&self, event: &E) -> DispatchReport {
        let kind = event.kind();

        // Snapshot so handlers can touch the bus while we iterate.
        let targets: Vec<(SubscriptionId, Handler<E>)> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.matches(kind))
            .map(|r| (r.id, Rc::clone(&r.handler)))
            .collect();

        trace!(event = ?kind, handlers = targets.len(), "dispatching");

        let mut report = DispatchReport::default();
        for (id, handler) in targets {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(event)))
                .unwrap_or_else(|payload| Err(HandlerError::Panicked(panic_message(&*payload))));

            match outcome {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    report.failed += 1;
                    warn!(event = ?kind, subscription = %id, %error, "event handler failed");
                    self.failures.borrow_mut().push(DispatchFailure {
                        event: format!("{:?}", kind),
                        subscription: id,
                        error,
                    });
                }
            }
        }
        report
    }

    /// Drain the failures recorded since the last call.
    pub fn take_failures(&self) -> Vec<DispatchFailure> {
        std::mem::take(&mut *self.failures.borrow_mut())
    }
}

impl<E: BusEvent> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BusEvent> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.registrations.borrow().len())
            .field("pending_failures", &self.failures.borrow().len())
            .finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
