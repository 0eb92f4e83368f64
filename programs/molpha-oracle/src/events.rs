use anchor_lang::prelude::*;

#[event]
pub struct ProtocolInitialized {
    pub protocol_config: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub min_stake: u64,
    pub slash_percentage_bps: u16,
    pub initialized_at: i64,
}

#[event]
pub struct ProtocolConfigUpdated {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub min_stake: u64,
    pub slash_percentage_bps: u16,
    pub updated_at: i64,
}

#[event]
pub struct FeedCreated {
    pub feed: Pubkey,
    pub feed_id: u64,
    pub owner: Pubkey,
    pub name: String,
    pub heartbeat_slots: u64,
    pub deviation_threshold_bps: u16,
    pub min_reporters: u8,
    pub query_fee: u64,
    pub created_at: i64,
}

#[event]
pub struct FeedConfigUpdated {
    pub feed_id: u64,
    pub owner: Pubkey,
    pub heartbeat_slots: u64,
    pub deviation_threshold_bps: u16,
    pub min_reporters: u8,
    pub query_fee: u64,
    pub updated_at: i64,
}

#[event]
pub struct FeedPausedChanged {
    pub feed_id: u64,
    pub owner: Pubkey,
    pub paused: bool,
    pub changed_at: i64,
}

#[event]
pub struct ReporterRegistered {
    pub reporter: Pubkey,
    pub stake: u64,
    pub registered_at: i64,
}

#[event]
pub struct ReporterUnregistered {
    pub reporter: Pubkey,
    pub refunded_stake: u64,
    pub unregistered_at: i64,
}

#[event]
pub struct StakeIncreased {
    pub reporter: Pubkey,
    pub amount: u64,
    pub new_stake: u64,
}

#[event]
pub struct RoundOpened {
    pub feed_id: u64,
    pub round: u64,
    pub opened_by: Pubkey,
    pub open_slot: u64,
}

#[event]
pub struct ValueSubmitted {
    pub feed_id: u64,
    pub round: u64,
    pub reporter: Pubkey,
    pub value: u64,
    pub slot: u64,
}

#[event]
pub struct RoundClosed {
    pub feed_id: u64,
    pub round: u64,
    pub submissions: u8,
    pub close_slot: u64,
    pub closed_at: i64,
}

#[event]
pub struct RoundFinalized {
    pub feed_id: u64,
    pub round: u64,
    pub median: u64,
    pub honest_reporters: u8,
    pub slashed_reporters: u8,
    pub fee_share: u64,
    pub finalized_slot: u64,
}

#[event]
pub struct ReporterSlashed {
    pub feed_id: u64,
    pub round: u64,
    pub reporter: Pubkey,
    pub value: u64,
    pub deviation_bps: u64,
    pub penalty: u64,
    pub remaining_stake: u64,
    pub deactivated: bool,
}

#[event]
pub struct QueryFeePaid {
    pub feed_id: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub fee_pool: u64,
}

#[event]
pub struct FeesClaimed {
    pub reporter: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
}
