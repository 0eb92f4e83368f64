use crate::error::OracleError;
use crate::events::{FeesClaimed, QueryFeePaid};
use crate::state::{Feed, ProtocolConfig, Reporter};
use crate::utils::custody::Vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

pub fn pay_query_fee(ctx: Context<PayQueryFee>, _feed_id: u64, amount: u64) -> Result<()> {
    let feed = &mut ctx.accounts.feed;
    feed.deposit_fee(amount)?;
    let feed_id = feed.id;
    let fee_pool = feed.fee_pool;

    let fee_vault = Vault {
        account: &ctx.accounts.fee_vault,
        mint: &ctx.accounts.mint,
        config: &ctx.accounts.protocol_config,
        token_program: &ctx.accounts.token_program,
    };
    fee_vault.deposit(&ctx.accounts.payer_token_account, &ctx.accounts.payer, amount)?;

    emit!(QueryFeePaid {
        feed_id,
        payer: ctx.accounts.payer.key(),
        amount,
        fee_pool,
    });

    Ok(())
}

pub fn claim_reporter_fees(ctx: Context<ClaimReporterFees>) -> Result<u64> {
    let amount = ctx.accounts.reporter.take_claimable_fees()?;

    let fee_vault = Vault {
        account: &ctx.accounts.fee_vault,
        mint: &ctx.accounts.mint,
        config: &ctx.accounts.protocol_config,
        token_program: &ctx.accounts.token_program,
    };
    fee_vault.withdraw(&ctx.accounts.reporter_token_account, amount)?;

    msg!(
        "Reporter {} claimed {} in fees",
        ctx.accounts.authority.key(),
        amount
    );

    emit!(FeesClaimed {
        reporter: ctx.accounts.authority.key(),
        amount,
        claimed_at: Clock::get()?.unix_timestamp,
    });

    Ok(amount)
}

#[derive(Accounts)]
#[instruction(feed_id: u64)]
pub struct PayQueryFee<'info> {
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

    #[account(address = protocol_config.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [ProtocolConfig::FEE_VAULT_SEED],
        bump = protocol_config.fee_vault_bump,
    )]
    pub fee_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = payer,
    )]
    pub payer_token_account: InterfaceAccount<'info, TokenAccount>,

    pub payer: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
pub struct ClaimReporterFees<'info> {
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
        seeds = [ProtocolConfig::FEE_VAULT_SEED],
        bump = protocol_config.fee_vault_bump,
    )]
    pub fee_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
    )]
    pub reporter_token_account: InterfaceAccount<'info, TokenAccount>,

    pub authority: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}
