use time::{Date, OffsetDateTime, UtcOffset};

use kernel::interface::clock::Clock;

/// Calendar date at the local offset captured by [`SystemClock::new`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// Reads the local offset once, falling back to UTC when it is unknown.
    ///
    /// On Unix the offset can only be read while the process is
    /// single-threaded, so build the clock before any runtime or logging
    /// thread starts.
    pub fn new() -> Self {
        Self::with_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.offset).date()
    }
}
