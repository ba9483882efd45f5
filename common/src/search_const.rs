//! Shared search constants.

/// Products per results page.
pub const PAGE_SIZE: u64 = 12;
