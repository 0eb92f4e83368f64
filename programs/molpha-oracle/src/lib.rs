use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::*;

declare_id!("7MgLh8MFfPrs4Jmx9z3hTq7oapXavoZQ2UXJmy3vdozx");

#[program]
pub mod molpha_oracle {
    use super::*;

    // Protocol setup
    pub fn initialize(ctx: Context<Initialize>, min_stake: u64, slash_percentage_bps: u16) -> Result<()> {
        instructions::initialize(ctx, min_stake, slash_percentage_bps)
    }

    pub fn update_protocol_config(
        ctx: Context<UpdateProtocolConfig>,
        min_stake: u64,
        slash_percentage_bps: u16,
    ) -> Result<()> {
        instructions::update_protocol_config(ctx, min_stake, slash_percentage_bps)
    }

    // Feed registry
    pub fn create_feed(ctx: Context<CreateFeed>, name: String, params: FeedParams) -> Result<u64> {
        instructions::create_feed(ctx, name, params)
    }

    pub fn update_feed_config(ctx: Context<UpdateFeed>, feed_id: u64, params: FeedParams) -> Result<()> {
        instructions::update_feed_config(ctx, feed_id, params)
    }

    pub fn pause_feed(ctx: Context<UpdateFeed>, feed_id: u64) -> Result<()> {
        instructions::set_feed_paused(ctx, feed_id, true)
    }

    pub fn unpause_feed(ctx: Context<UpdateFeed>, feed_id: u64) -> Result<()> {
        instructions::set_feed_paused(ctx, feed_id, false)
    }

    // Reporter ledger
    pub fn register_reporter(ctx: Context<RegisterReporter>, stake_amount: u64) -> Result<()> {
        instructions::register_reporter(ctx, stake_amount)
    }

    pub fn increase_stake(ctx: Context<ManageStake>, amount: u64) -> Result<()> {
        instructions::increase_stake(ctx, amount)
    }

    pub fn unregister_reporter(ctx: Context<ManageStake>) -> Result<u64> {
        instructions::unregister_reporter(ctx)
    }

    // Round lifecycle
    pub fn open_round(ctx: Context<OpenRound>, feed_id: u64) -> Result<u64> {
        instructions::open_round(ctx, feed_id)
    }

    pub fn submit_value(ctx: Context<SubmitValue>, feed_id: u64, value: u64) -> Result<()> {
        instructions::submit_value(ctx, feed_id, value)
    }

    pub fn close_round(ctx: Context<CloseRound>, feed_id: u64) -> Result<()> {
        instructions::close_round(ctx, feed_id)
    }

    pub fn finalize_round<'info>(
        ctx: Context<'_, '_, 'info, 'info, FinalizeRound<'info>>,
        feed_id: u64,
    ) -> Result<u64> {
        instructions::finalize_round(ctx, feed_id)
    }

    // Query fees
    pub fn pay_query_fee(ctx: Context<PayQueryFee>, feed_id: u64, amount: u64) -> Result<()> {
        instructions::pay_query_fee(ctx, feed_id, amount)
    }

    pub fn claim_reporter_fees(ctx: Context<ClaimReporterFees>) -> Result<u64> {
        instructions::claim_reporter_fees(ctx)
    }

    // Consumer reads
    pub fn get_latest_value(ctx: Context<ReadFeed>, feed_id: u64) -> Result<u64> {
        instructions::get_latest_value(ctx, feed_id)
    }

    pub fn get_last_update_block(ctx: Context<ReadFeed>, feed_id: u64) -> Result<u64> {
        instructions::get_last_update_block(ctx, feed_id)
    }

    pub fn get_current_round(ctx: Context<ReadFeed>, feed_id: u64) -> Result<u64> {
        instructions::get_current_round(ctx, feed_id)
    }

    pub fn get_round_median(ctx: Context<ReadRound>, feed_id: u64, round_number: u64) -> Result<u64> {
        instructions::get_round_median(ctx, feed_id, round_number)
    }

    pub fn get_round_status(
        ctx: Context<ReadRound>,
        feed_id: u64,
        round_number: u64,
    ) -> Result<RoundStatus> {
        instructions::get_round_status(ctx, feed_id, round_number)
    }
}
