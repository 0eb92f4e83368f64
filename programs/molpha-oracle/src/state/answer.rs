use anchor_lang::prelude::*;

/// A finalized round result as exposed to consumers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq, InitSpace)]
pub struct Answer {
    pub round: u64,
    pub value: u64,
    pub slot: u64,
    pub timestamp: i64,
}

impl Answer {
    pub const SPACE: usize = Answer::INIT_SPACE;
}
