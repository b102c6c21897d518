//! Debug assertion macros for monitor state invariants.
//!
//! These provide runtime checks for the counter and cursor relationships the
//! monitor must never violate. They are only active in debug builds
//! (`#[cfg(debug_assertions)]`), so there is zero overhead in release builds.

// =============================================================================
// INV-MON-01: Bounded concurrency window
// =============================================================================

/// Assert that `entered` never exceeds the configured concurrency window.
///
/// **Invariant**: `0 ≤ entered ≤ window`
macro_rules! debug_assert_entered_bounded {
    ($entered:expr, $window:expr) => {
        debug_assert!(
            $entered <= $window,
            "INV-MON-01 violated: entered {} exceeds window {}",
            $entered,
            $window
        )
    };
}

// =============================================================================
// INV-MON-02: Bounded occupancy
// =============================================================================

/// Assert that `users` never exceeds the ring capacity.
///
/// **Invariant**: `0 ≤ users ≤ capacity`
macro_rules! debug_assert_users_bounded {
    ($users:expr, $capacity:expr) => {
        debug_assert!(
            $users <= $capacity,
            "INV-MON-02 violated: users {} exceeds capacity {}",
            $users,
            $capacity
        )
    };
}

// =============================================================================
// INV-MON-03: Entered is a subset of holders
// =============================================================================

/// Assert that the number entered never exceeds the number holding a slot.
///
/// **Invariant**: `entered ≤ users`
macro_rules! debug_assert_entered_le_users {
    ($entered:expr, $users:expr) => {
        debug_assert!(
            $entered <= $users,
            "INV-MON-03 violated: entered {} exceeds users {}",
            $entered,
            $users
        )
    };
}

// =============================================================================
// INV-MON-04: Monotonic ring cursor advance
// =============================================================================

/// Assert that a ring cursor only ever advances by the expected step under the mask.
///
/// **Invariant**: `new == (old + 1) & mask`
macro_rules! debug_assert_cursor_step {
    ($name:literal, $old:expr, $new:expr, $mask:expr) => {
        debug_assert!(
            $new == ($old + 1) & $mask,
            "INV-MON-04 violated: {} advanced from {} to {} (mask {:#x})",
            $name,
            $old,
            $new,
            $mask
        )
    };
}

// =============================================================================
// INV-MON-05: Sticky close code
// =============================================================================

/// Assert that a sticky close code, once set, is never overwritten with a
/// different value.
///
/// **Invariant**: once `ret != 0`, `ret` never changes.
macro_rules! debug_assert_ret_sticky {
    ($old:expr, $new:expr) => {
        debug_assert!(
            $old == 0 || $old == $new,
            "INV-MON-05 violated: close code changed from {} to {}",
            $old,
            $new
        )
    };
}

pub(crate) use debug_assert_cursor_step;
pub(crate) use debug_assert_entered_bounded;
pub(crate) use debug_assert_entered_le_users;
pub(crate) use debug_assert_ret_sticky;
pub(crate) use debug_assert_users_bounded;
