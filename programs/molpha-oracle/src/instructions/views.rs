//! Read-only accessors. Values are returned to the caller as instruction
//! return data.

use crate::state::{Feed, Round, RoundStatus};
use anchor_lang::prelude::*;

pub fn get_latest_value(ctx: Context<ReadFeed>, _feed_id: u64) -> Result<u64> {
    ctx.accounts.feed.latest_value()
}

pub fn get_last_update_block(ctx: Context<ReadFeed>, _feed_id: u64) -> Result<u64> {
    ctx.accounts.feed.last_update_slot()
}

pub fn get_current_round(ctx: Context<ReadFeed>, _feed_id: u64) -> Result<u64> {
    Ok(ctx.accounts.feed.current_round)
}

pub fn get_round_median(ctx: Context<ReadRound>, _feed_id: u64, _round_number: u64) -> Result<u64> {
    ctx.accounts.round.committed_median()
}

pub fn get_round_status(
    ctx: Context<ReadRound>,
    _feed_id: u64,
    _round_number: u64,
) -> Result<RoundStatus> {
    Ok(ctx.accounts.round.status)
}

#[derive(Accounts)]
#[instruction(feed_id: u64)]
pub struct ReadFeed<'info> {
    #[account(
        seeds = [Feed::SEED_PREFIX, &feed_id.to_le_bytes()],
        bump = feed.bump,
    )]
    pub feed: Account<'info, Feed>,
}

#[derive(Accounts)]
#[instruction(feed_id: u64, round_number: u64)]
pub struct ReadRound<'info> {
    #[account(
        seeds = [Feed::SEED_PREFIX, &feed_id.to_le_bytes()],
        bump = feed.bump,
    )]
    pub feed: Account<'info, Feed>,

    #[account(
        seeds = [
            Round::SEED_PREFIX,
            feed.key().as_ref(),
            &round_number.to_le_bytes(),
        ],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,
}
