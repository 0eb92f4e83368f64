use crate::error::OracleError;
use crate::events::{FeedConfigUpdated, FeedPausedChanged};
use crate::state::{Feed, FeedParams};
use anchor_lang::prelude::*;

pub fn update_feed_config(ctx: Context<UpdateFeed>, _feed_id: u64, params: FeedParams) -> Result<()> {
    let feed = &mut ctx.accounts.feed;
    feed.update_params(&params)?;

    emit!(FeedConfigUpdated {
        feed_id: feed.id,
        owner: ctx.accounts.owner.key(),
        heartbeat_slots: params.heartbeat_slots,
        deviation_threshold_bps: params.deviation_threshold_bps,
        min_reporters: params.min_reporters,
        query_fee: params.query_fee,
        updated_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn set_feed_paused(ctx: Context<UpdateFeed>, _feed_id: u64, paused: bool) -> Result<()> {
    let feed = &mut ctx.accounts.feed;
    feed.paused = paused;

    msg!("Feed {} paused: {}", feed.id, paused);

    emit!(FeedPausedChanged {
        feed_id: feed.id,
        owner: ctx.accounts.owner.key(),
        paused,
        changed_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(feed_id: u64)]
pub struct UpdateFeed<'info> {
    #[account(
        mut,
        seeds = [Feed::SEED_PREFIX, &feed_id.to_le_bytes()],
        bump = feed.bump,
        has_one = owner @ OracleError::NotAuthorized,
    )]
    pub feed: Account<'info, Feed>,
    pub owner: Signer<'info>,
}
