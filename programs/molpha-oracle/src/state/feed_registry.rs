use crate::error::OracleError;
use anchor_lang::prelude::*;

#[account]
#[derive(Default, InitSpace)]
pub struct FeedRegistry {
    /// Id handed to the next created feed. Ids start at 1 and never repeat.
    pub next_feed_id: u64,
    pub feed_count: u64,
    pub bump: u8,
}

impl FeedRegistry {
    pub const SEED_PREFIX: &'static [u8] = b"feed-registry";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn initialize(&mut self, bump: u8) {
        self.next_feed_id = 1;
        self.feed_count = 0;
        self.bump = bump;
    }

    /// Returns the id for a new feed and advances the counter.
    pub fn allocate_feed_id(&mut self) -> Result<u64> {
        let id = self.next_feed_id;
        self.next_feed_id = id.checked_add(1).ok_or(OracleError::ArithmeticOverflow)?;
        self.feed_count = self
            .feed_count
            .checked_add(1)
            .ok_or(OracleError::ArithmeticOverflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_ids_are_sequential_from_one() {
        let mut registry = FeedRegistry::default();
        registry.initialize(255);

        assert_eq!(registry.allocate_feed_id().unwrap(), 1);
        assert_eq!(registry.allocate_feed_id().unwrap(), 2);
        assert_eq!(registry.next_feed_id, 3);
        assert_eq!(registry.feed_count, 2);
    }
}
