use crate::events::ValueSubmitted;
use crate::state::{Feed, ProtocolConfig, Reporter, Round};
use anchor_lang::prelude::*;

pub fn submit_value(ctx: Context<SubmitValue>, _feed_id: u64, value: u64) -> Result<()> {
    let slot = Clock::get()?.slot;
    let authority = ctx.accounts.authority.key();

    ctx.accounts
        .reporter
        .ensure_eligible(ctx.accounts.protocol_config.min_stake)?;

    let round = &mut ctx.accounts.round;
    round.record_submission(authority, value, slot)?;

    msg!(
        "Reporter {} submitted {} to round {} ({} submissions)",
        authority,
        value,
        round.round,
        round.submission_count()
    );

    emit!(ValueSubmitted {
        feed_id: ctx.accounts.feed.id,
        round: round.round,
        reporter: authority,
        value,
        slot,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(feed_id: u64)]
pub struct SubmitValue<'info> {
    #[account(
        seeds = [ProtocolConfig::SEED_PREFIX],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

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

    #[account(
        seeds = [Reporter::SEED_PREFIX, authority.key().as_ref()],
        bump = reporter.bump,
    )]
    pub reporter: Account<'info, Reporter>,

    pub authority: Signer<'info>,
}
