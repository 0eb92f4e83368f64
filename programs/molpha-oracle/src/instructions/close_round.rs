use crate::events::RoundClosed;
use crate::state::{Feed, Round};
use anchor_lang::prelude::*;

/// Callable by anyone once the round has reached quorum.
pub fn close_round(ctx: Context<CloseRound>, _feed_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let feed = &ctx.accounts.feed;
    let round = &mut ctx.accounts.round;

    round.close_submissions(feed.min_reporters, clock.slot, clock.unix_timestamp)?;

    msg!(
        "Closed round {} for feed {} with {} submissions",
        round.round,
        feed.id,
        round.submission_count()
    );

    emit!(RoundClosed {
        feed_id: feed.id,
        round: round.round,
        submissions: round.submission_count() as u8,
        close_slot: clock.slot,
        closed_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(feed_id: u64)]
pub struct CloseRound<'info> {
    #[account(
        seeds = [Feed::SEED_PREFIX, &feed_id.to_le_bytes()],
        bump = feed.bump,
    )]
    pub feed: Account<'info, Feed>,

    #[account(
        mut,
        seeds = [
            Round::SEED_PREFIX,
            feed.key().as_ref(),
            &feed.current_round.to_le_bytes(),
        ],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,
}
