//! Click Counter
//!
//! The only mutable state of the application. It starts at zero and only the
//! tap handler advances it, by exactly one per tap.

/// Title shown before the first tap
pub const INITIAL_TITLE: &str = "Click me!";

/// Prefix of the title shown after each tap
pub const TAP_TITLE_PREFIX: &str = "Click #";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickCounter {
    count: u64,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Advance by one and return the new value.
    ///
    /// Saturates at `u64::MAX` instead of wrapping back to zero.
    pub(crate) fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Button title for the current count
    pub fn title(&self) -> String {
        title_for(self.count)
    }
}

/// Button title after `count` taps
pub fn title_for(count: u64) -> String {
    if count == 0 {
        INITIAL_TITLE.to_string()
    } else {
        format!("{TAP_TITLE_PREFIX}{count}")
    }
}
