//! Token movements in and out of the program-owned vaults.
//!
//! Callers update account state before invoking any of these, so the token
//! program never observes a half-applied change.

use crate::state::ProtocolConfig;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

/// A vault token account whose authority is the protocol config PDA.
pub struct Vault<'a, 'info> {
    pub account: &'a InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub config: &'a Account<'info, ProtocolConfig>,
    pub token_program: &'a Interface<'info, TokenInterface>,
}

impl<'a, 'info> Vault<'a, 'info> {
    /// Pulls `amount` from a token account owned by `owner` into the vault.
    pub fn deposit(
        &self,
        from: &InterfaceAccount<'info, TokenAccount>,
        owner: &Signer<'info>,
        amount: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let cpi_accounts = TransferChecked {
            from: from.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.account.to_account_info(),
            authority: owner.to_account_info(),
        };
        let cpi_context = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        transfer_checked(cpi_context, amount, self.mint.decimals)
    }

    /// Pays `amount` out of the vault, signing as the config PDA.
    pub fn withdraw(&self, to: &InterfaceAccount<'info, TokenAccount>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let seeds = self.config.signer_seeds();
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = TransferChecked {
            from: self.account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: to.to_account_info(),
            authority: self.config.to_account_info(),
        };
        let cpi_context = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        transfer_checked(cpi_context, amount, self.mint.decimals)
    }
}

/// Locks reporter collateral in the stake vault.
pub fn lock_stake<'info>(
    stake_vault: &Vault<'_, 'info>,
    from: &InterfaceAccount<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    stake_vault.deposit(from, owner, amount)
}

/// Returns collateral to a reporter.
pub fn release_stake<'info>(
    stake_vault: &Vault<'_, 'info>,
    to: &InterfaceAccount<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    stake_vault.withdraw(to, amount)
}

/// Moves forfeited collateral to the protocol treasury.
pub fn slash_stake<'info>(
    stake_vault: &Vault<'_, 'info>,
    treasury: &InterfaceAccount<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    stake_vault.withdraw(treasury, amount)
}
