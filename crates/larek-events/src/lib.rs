//! Synchronous, single-threaded publish/subscribe.
//!
//! Events are a user-defined sum type implementing [`BusEvent`]; handlers
//! subscribe to one event kind and are invoked in registration order each
//! time an event of that kind is emitted. Dispatch completes before
//! `emit` returns.
//!
//! A failing handler (an `Err` or a panic) never prevents the remaining
//! handlers from running. Failures are logged and collected on a side
//! channel, see [`EventBus::take_failures`].
//!
//! # Example
//!
//! ```rust
//! use larek_events::{BusEvent, EventBus};
//!
//! #[derive(Debug)]
//! enum Ping { Hello(u32) }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum PingKind { Hello }
//!
//! impl BusEvent for Ping {
//!     type Kind = PingKind;
//!     fn kind(&self) -> PingKind { PingKind::Hello }
//! }
//!
//! let bus = EventBus::new();
//! bus.subscribe(PingKind::Hello, |event: &Ping| {
//!     let Ping::Hello(n) = event;
//!     assert_eq!(*n, 7);
//!     Ok(())
//! });
//! let report = bus.emit(&Ping::Hello(7));
//! assert_eq!(report.delivered, 1);
//! ```

mod bus;
mod error;

pub use bus::{BusEvent, DispatchReport, EventBus, SubscriptionId};
pub use error::{DispatchFailure, HandlerError, HandlerResult};
