use crate::error::OracleError;
use crate::events::{ReporterRegistered, ReporterUnregistered, StakeIncreased};
use crate::state::{ProtocolConfig, Reporter};
use crate::utils::custody::{lock_stake, release_stake, Vault};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

pub fn register_reporter(ctx: Context<RegisterReporter>, stake_amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let reporter = &mut ctx.accounts.reporter;
    reporter.register(
        authority,
        stake_amount,
        ctx.accounts.protocol_config.min_stake,
        clock.unix_timestamp,
        ctx.bumps.reporter,
    )?;
    let stake = reporter.stake;

    let stake_vault = Vault {
        account: &ctx.accounts.stake_vault,
        mint: &ctx.accounts.mint,
        config: &ctx.accounts.protocol_config,
        token_program: &ctx.accounts.token_program,
    };
    lock_stake(
        &stake_vault,
        &ctx.accounts.reporter_token_account,
        &ctx.accounts.authority,
        stake_amount,
    )?;

    msg!("Registered reporter {} with stake {}", authority, stake);

    emit!(ReporterRegistered {
        reporter: authority,
        stake,
        registered_at: clock.unix_timestamp,
    });

    Ok(())
}

pub fn increase_stake(ctx: Context<ManageStake>, amount: u64) -> Result<()> {
    let reporter = &mut ctx.accounts.reporter;
    reporter.increase_stake(amount)?;
    let new_stake = reporter.stake;

    let stake_vault = Vault {
        account: &ctx.accounts.stake_vault,
        mint: &ctx.accounts.mint,
        config: &ctx.accounts.protocol_config,
        token_program: &ctx.accounts.token_program,
    };
    lock_stake(
        &stake_vault,
        &ctx.accounts.reporter_token_account,
        &ctx.accounts.authority,
        amount,
    )?;

    emit!(StakeIncreased {
        reporter: ctx.accounts.authority.key(),
        amount,
        new_stake,
    });

    Ok(())
}

/// Refunds the remaining stake. Submissions already made stay in their
/// rounds and are settled at finalization.
pub fn unregister_reporter(ctx: Context<ManageStake>) -> Result<u64> {
    let refund = ctx.accounts.reporter.unregister()?;

    let stake_vault = Vault {
        account: &ctx.accounts.stake_vault,
        mint: &ctx.accounts.mint,
        config: &ctx.accounts.protocol_config,
        token_program: &ctx.accounts.token_program,
    };
    release_stake(&stake_vault, &ctx.accounts.reporter_token_account, refund)?;

    msg!(
        "Unregistered reporter {}, refunded {}",
        ctx.accounts.authority.key(),
        refund
    );

    emit!(ReporterUnregistered {
        reporter: ctx.accounts.authority.key(),
        refunded_stake: refund,
        unregistered_at: Clock::get()?.unix_timestamp,
    });

    Ok(refund)
}

#[derive(Accounts)]
pub struct RegisterReporter<'info> {
    #[account(
        seeds = [ProtocolConfig::SEED_PREFIX],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Reporter::SPACE,
        seeds = [Reporter::SEED_PREFIX, authority.key().as_ref()],
        bump
    )]
    pub reporter: Account<'info, Reporter>,

    #[account(address = protocol_config.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [ProtocolConfig::STAKE_VAULT_SEED],
        bump = protocol_config.stake_vault_bump,
    )]
    pub stake_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = authority,
    )]
    pub reporter_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
pub struct ManageStake<'info> {
    #[account(
        seeds = [ProtocolConfig::SEED_PREFIX],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [Reporter::SEED_PREFIX, authority.key().as_ref()],
        bump = reporter.bump,
        has_one = authority @ OracleError::NotAuthorized,
    )]
    pub reporter: Account<'info, Reporter>,

    #[account(address = protocol_config.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [ProtocolConfig::STAKE_VAULT_SEED],
        bump = protocol_config.stake_vault_bump,
    )]
    pub stake_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = authority,
    )]
    pub reporter_token_account: InterfaceAccount<'info, TokenAccount>,

    pub authority: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}
