use crate::events::FeedCreated;
use crate::state::{Feed, FeedParams, FeedRegistry};
use anchor_lang::prelude::*;

pub fn create_feed(ctx: Context<CreateFeed>, name: String, params: FeedParams) -> Result<u64> {
    let clock = Clock::get()?;
    let feed_id = ctx.accounts.feed_registry.allocate_feed_id()?;

    let feed = &mut ctx.accounts.feed;
    feed.initialize(
        feed_id,
        name,
        ctx.accounts.owner.key(),
        &params,
        ctx.bumps.feed,
    )?;

    msg!("Created feed {} ({})", feed_id, feed.name);

    emit!(FeedCreated {
        feed: feed.key(),
        feed_id,
        owner: feed.owner,
        name: feed.name.clone(),
        heartbeat_slots: feed.heartbeat_slots,
        deviation_threshold_bps: feed.deviation_threshold_bps,
        min_reporters: feed.min_reporters,
        query_fee: feed.query_fee,
        created_at: clock.unix_timestamp,
    });

    Ok(feed_id)
}

#[derive(Accounts)]
pub struct CreateFeed<'info> {
    #[account(
        mut,
        seeds = [FeedRegistry::SEED_PREFIX],
        bump = feed_registry.bump,
    )]
    pub feed_registry: Account<'info, FeedRegistry>,

    #[account(
        init,
        payer = owner,
        space = Feed::SPACE,
        seeds = [Feed::SEED_PREFIX, &feed_registry.next_feed_id.to_le_bytes()],
        bump
    )]
    pub feed: Account<'info, Feed>,

    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}
