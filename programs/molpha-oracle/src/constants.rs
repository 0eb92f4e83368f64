/// Basis-point denominator used by deviation thresholds and slash percentages.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A median of fewer than three values tolerates no faulty reporter.
pub const MIN_REPORTERS_FLOOR: u8 = 3;

/// Capacity of a round account's submission list.
pub const MAX_SUBMISSIONS: usize = 32;

/// Finalized answers kept per feed.
pub const MAX_HISTORY: usize = 20;

pub const MAX_FEED_NAME_LEN: usize = 64;
