use thiserror::Error;

/// Configuration for a [`Monitor`](crate::Monitor).
///
/// `capacity` bounds the number of producers that may simultaneously hold a
/// slot (queued, reserved, or entered); `window` bounds how many of those may
/// be *entered* in the critical section at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    capacity: usize,
    window: usize,
}

/// Errors returned by [`Config::new`] when the requested shape is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `capacity` was not a power of two, or was smaller than 2.
    #[error("capacity {0} must be a power of two no smaller than 2")]
    NotPowerOfTwo(usize),
    /// `window` was zero.
    #[error("concurrency window must be at least 1")]
    ZeroWindow,
    /// `window` exceeded `capacity`, which can never be admitted.
    #[error("concurrency window {window} exceeds capacity {capacity}")]
    WindowExceedsCapacity {
        /// The requested window.
        window: usize,
        /// The requested capacity.
        capacity: usize,
    },
}

impl Config {
    /// Creates a configuration for a monitor with the given queue `capacity`
    /// (must be a power of two, at least 2) and concurrency `window` (must be
    /// at least 1 and no greater than `capacity`).
    pub fn new(capacity: usize, window: usize) -> Result<Self, ConfigError> {
        if capacity < 2 || !capacity.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo(capacity));
        }
        if window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if window > capacity {
            return Err(ConfigError::WindowExceedsCapacity { window, capacity });
        }
        Ok(Self { capacity, window })
    }

    /// Queue capacity (power of two).
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index mask derived from `capacity` (`capacity - 1`).
    #[inline]
    pub const fn mask(&self) -> usize {
        self.capacity - 1
    }

    /// Concurrency window `N`.
    #[inline]
    pub const fn window(&self) -> usize {
        self.window
    }
}

impl Default for Config {
    /// A modest default: 64-deep queue, strict FIFO mutex (`window = 1`).
    fn default() -> Self {
        Self {
            capacity: 64,
            window: 1,
        }
    }
}
