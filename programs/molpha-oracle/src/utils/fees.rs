use crate::error::OracleError;
use anchor_lang::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    /// Credited to each honest reporter.
    pub share: u64,
    /// Distributed in total; `pool - distributed` stays in the pool.
    pub distributed: u64,
}

impl FeeSplit {
    pub fn remainder(&self, pool: u64) -> u64 {
        pool - self.distributed
    }
}

/// Divides `pool` equally among `recipients`, rounding down.
pub fn split_pool(pool: u64, recipients: usize) -> Result<FeeSplit> {
    if recipients == 0 {
        return Ok(FeeSplit {
            share: 0,
            distributed: 0,
        });
    }

    let recipients = u64::try_from(recipients).map_err(|_| OracleError::ArithmeticOverflow)?;
    let share = pool / recipients;
    let distributed = share
        .checked_mul(recipients)
        .ok_or(OracleError::ArithmeticOverflow)?;
    Ok(FeeSplit { share, distributed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_evenly() {
        let split = split_pool(30, 2).unwrap();
        assert_eq!(split.share, 15);
        assert_eq!(split.remainder(30), 0);
    }

    #[test]
    fn remainder_stays_behind() {
        let split = split_pool(100, 3).unwrap();
        assert_eq!(split.share, 33);
        assert_eq!(split.distributed, 99);
        assert_eq!(split.remainder(100), 1);
    }

    #[test]
    fn no_recipients_keeps_whole_pool() {
        let split = split_pool(42, 0).unwrap();
        assert_eq!(split.distributed, 0);
        assert_eq!(split.remainder(42), 42);
    }

    #[test]
    fn credits_plus_remainder_equal_pool() {
        for pool in [0u64, 1, 7, 1_000, 999_999] {
            for n in 1..=10usize {
                let split = split_pool(pool, n).unwrap();
                assert_eq!(split.share * n as u64 + split.remainder(pool), pool);
                assert!(split.remainder(pool) < n as u64);
            }
        }
    }
}
