use thiserror::Error;

/// Errors returned by monitor operations.
///
/// Each variant carries a fixed negative errno-style code via
/// [`MonitorError::as_errno`] for callers that need to cross a boundary where
/// a plain integer is expected (this mirrors the historical C contract the
/// monitor's operations were ported from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MonitorError {
    /// The queue is at capacity; the caller should back off and retry later.
    #[error("monitor queue is full")]
    QueueFull,
    /// The monitor has been permanently closed.
    #[error("monitor is closed")]
    Closed,
    /// This waiter was targeted by [`Monitor::interrupt`](crate::Monitor::interrupt)
    /// while queued.
    #[error("wait was interrupted")]
    Interrupted,
    /// The handle passed to `interrupt` does not name a live waiter — it has
    /// already entered, already been interrupted, or never existed.
    #[error("no such waiter")]
    NoSuchWaiter,
    /// `resume` was called on a monitor that is not currently paused.
    #[error("monitor is not paused")]
    NotPaused,
}

impl MonitorError {
    /// The fixed negative errno-style code associated with this error.
    ///
    /// These values are part of the binary contract with callers that treat
    /// monitor results as plain integers; they must not change once assigned.
    #[must_use]
    pub const fn as_errno(self) -> i32 {
        match self {
            // ENOBUFS: no buffer space available.
            Self::QueueFull => -105,
            // EBADF: bad file descriptor (closed handle).
            Self::Closed => -9,
            // EINTR: interrupted system call.
            Self::Interrupted => -4,
            // ESRCH: no such process (no such waiter).
            Self::NoSuchWaiter => -3,
            // EINVAL: invalid argument (not paused).
            Self::NotPaused => -22,
        }
    }
}
