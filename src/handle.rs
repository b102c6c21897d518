use std::num::NonZeroUsize;

/// An opaque handle to a queued waiter, returned by
/// [`Monitor::schedule`](crate::Monitor::schedule) when the caller must wait,
/// and later usable with [`Monitor::interrupt`](crate::Monitor::interrupt).
///
/// A handle is the 1-based ring index of the waiter's slot (so `0` is free to
/// mean "no handle needed" in the underlying protocol, even though the public
/// type never constructs a zero value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(NonZeroUsize);

impl Handle {
    pub(crate) fn from_slot_index(index: usize) -> Self {
        // index + 1 is always non-zero.
        Self(NonZeroUsize::new(index + 1).expect("slot index + 1 is never zero"))
    }

    pub(crate) fn slot_index(self) -> usize {
        self.0.get() - 1
    }
}
