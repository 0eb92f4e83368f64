use crate::events::RoundOpened;
use crate::state::{Feed, ProtocolConfig, Reporter, Round};
use anchor_lang::prelude::*;

pub fn open_round(ctx: Context<OpenRound>, _feed_id: u64) -> Result<u64> {
    let slot = Clock::get()?.slot;
    let authority = ctx.accounts.authority.key();

    ctx.accounts
        .reporter
        .ensure_eligible(ctx.accounts.protocol_config.min_stake)?;

    let feed = &mut ctx.accounts.feed;
    let number = feed.begin_round(slot)?;
    let feed_key = feed.key();
    let feed_id = feed.id;

    ctx.accounts
        .round
        .open(feed_key, number, authority, slot, ctx.bumps.round);

    msg!("Opened round {} for feed {} at slot {}", number, feed_id, slot);

    emit!(RoundOpened {
        feed_id,
        round: number,
        opened_by: authority,
        open_slot: slot,
    });

    Ok(number)
}

#[derive(Accounts)]
#[instruction(feed_id: u64)]
pub struct OpenRound<'info> {
    #[account(
        seeds = [ProtocolConfig::SEED_PREFIX],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [Feed::SEED_PREFIX, &feed_id.to_le_bytes()],
        bump = feed.bump,
    )]
    pub feed: Account<'info, Feed>,

    #[account(
        init,
        payer = authority,
        space = Round::SPACE,
        seeds = [
            Round::SEED_PREFIX,
            feed.key().as_ref(),
            &(feed.current_round + 1).to_le_bytes(),
        ],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        seeds = [Reporter::SEED_PREFIX, authority.key().as_ref()],
        bump = reporter.bump,
    )]
    pub reporter: Account<'info, Reporter>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}
