//! FIFO send monitor — a concurrency primitive that serialises a variable
//! number of producer threads through a bounded critical section while
//! preserving the exact order in which they requested entry.
//!
//! Producers call [`Monitor::schedule`] to reserve a FIFO position, then
//! [`Reservation::enter`] to park (if required) and be admitted. Up to
//! [`Config::window`] producers may be inside the critical section at once;
//! the rest queue and are admitted one at a time, in arrival order, as
//! [`Entered`] guards are released. [`Monitor::pause`]/[`Monitor::resume`]
//! freeze and resume admission without losing anyone's place in line;
//! [`Monitor::interrupt`] cancels a single queued waiter; [`Monitor::close`]
//! permanently shuts the monitor down, returning [`MonitorError::Closed`] to
//! every present and future caller.
//!
//! # Example
//!
//! ```
//! use fifo_monitor::{Config, Monitor};
//!
//! let monitor = Monitor::new(Config::new(4, 1).unwrap());
//!
//! let entered = monitor.enter_blocking().unwrap();
//! // ... critical section ...
//! entered.leave();
//! ```
//!
//! # Two-phase entry
//!
//! Callers that want to be able to [`Monitor::interrupt`] their own wait from
//! another thread should use the split form instead of
//! [`Monitor::enter_blocking`]:
//!
//! ```
//! use fifo_monitor::{Config, Monitor};
//!
//! let monitor = Monitor::new(Config::new(4, 1).unwrap());
//! let reservation = monitor.schedule().unwrap();
//! let handle = reservation.handle(); // Some(_) if this call will block
//! let entered = reservation.enter().unwrap();
//! entered.leave();
//! let _ = handle;
//! ```

mod config;
mod error;
mod handle;
mod invariants;
mod monitor;

pub use config::{Config, ConfigError};
pub use error::MonitorError;
pub use handle::Handle;
pub use monitor::{Entered, Monitor, Reservation};
