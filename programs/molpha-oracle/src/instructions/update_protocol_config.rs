use crate::error::OracleError;
use crate::events::ProtocolConfigUpdated;
use crate::state::ProtocolConfig;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

pub fn update_protocol_config(
    ctx: Context<UpdateProtocolConfig>,
    min_stake: u64,
    slash_percentage_bps: u16,
) -> Result<()> {
    ProtocolConfig::validate_params(min_stake, slash_percentage_bps)?;

    let config = &mut ctx.accounts.protocol_config;
    config.min_stake = min_stake;
    config.slash_percentage_bps = slash_percentage_bps;
    config.treasury = ctx.accounts.treasury.key();

    emit!(ProtocolConfigUpdated {
        authority: ctx.accounts.authority.key(),
        treasury: config.treasury,
        min_stake,
        slash_percentage_bps,
        updated_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateProtocolConfig<'info> {
    #[account(
        mut,
        seeds = [ProtocolConfig::SEED_PREFIX],
        bump = protocol_config.bump,
        has_one = authority @ OracleError::NotAuthorized,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(token::mint = protocol_config.mint)]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    pub authority: Signer<'info>,
}
