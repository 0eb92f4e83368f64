use crate::events::ProtocolInitialized;
use crate::state::{FeedRegistry, ProtocolConfig};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

pub fn initialize(ctx: Context<Initialize>, min_stake: u64, slash_percentage_bps: u16) -> Result<()> {
    ProtocolConfig::validate_params(min_stake, slash_percentage_bps)?;
    let clock = Clock::get()?;

    let protocol_config = &mut ctx.accounts.protocol_config;
    protocol_config.authority = ctx.accounts.authority.key();
    protocol_config.mint = ctx.accounts.mint.key();
    protocol_config.treasury = ctx.accounts.treasury.key();
    protocol_config.min_stake = min_stake;
    protocol_config.slash_percentage_bps = slash_percentage_bps;
    protocol_config.stake_vault_bump = ctx.bumps.stake_vault;
    protocol_config.fee_vault_bump = ctx.bumps.fee_vault;
    protocol_config.bump = ctx.bumps.protocol_config;

    ctx.accounts
        .feed_registry
        .initialize(ctx.bumps.feed_registry);

    emit!(ProtocolInitialized {
        protocol_config: ctx.accounts.protocol_config.key(),
        authority: ctx.accounts.authority.key(),
        mint: ctx.accounts.mint.key(),
        min_stake,
        slash_percentage_bps,
        initialized_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = ProtocolConfig::SPACE,
        seeds = [ProtocolConfig::SEED_PREFIX],
        bump
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        payer = authority,
        space = FeedRegistry::SPACE,
        seeds = [FeedRegistry::SEED_PREFIX],
        bump
    )]
    pub feed_registry: Account<'info, FeedRegistry>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// Holds reporter collateral.
    #[account(
        init,
        payer = authority,
        seeds = [ProtocolConfig::STAKE_VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = protocol_config,
        token::token_program = token_program,
    )]
    pub stake_vault: InterfaceAccount<'info, TokenAccount>,

    /// Holds query fees until reporters claim them.
    #[account(
        init,
        payer = authority,
        seeds = [ProtocolConfig::FEE_VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = protocol_config,
        token::token_program = token_program,
    )]
    pub fee_vault: InterfaceAccount<'info, TokenAccount>,

    /// Receives slashed stake.
    #[account(token::mint = mint)]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}
