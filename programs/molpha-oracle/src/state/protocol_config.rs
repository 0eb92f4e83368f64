use crate::constants::BPS_DENOMINATOR;
use crate::error::OracleError;
use anchor_lang::prelude::*;

#[account]
#[derive(Default, InitSpace)]
pub struct ProtocolConfig {
    pub authority: Pubkey,
    /// Token used for both reporter collateral and query fees.
    pub mint: Pubkey,
    /// Token account receiving slashed stake.
    pub treasury: Pubkey,
    pub min_stake: u64,
    /// Share of a reporter's stake forfeited per deviating submission.
    pub slash_percentage_bps: u16,
    pub stake_vault_bump: u8,
    pub fee_vault_bump: u8,
    pub bump: u8,
}

impl ProtocolConfig {
    pub const SEED_PREFIX: &'static [u8] = b"config";
    pub const STAKE_VAULT_SEED: &'static [u8] = b"stake-vault";
    pub const FEE_VAULT_SEED: &'static [u8] = b"fee-vault";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn validate_params(min_stake: u64, slash_percentage_bps: u16) -> Result<()> {
        require!(min_stake > 0, OracleError::InvalidConfig);
        require!(
            u64::from(slash_percentage_bps) <= BPS_DENOMINATOR,
            OracleError::InvalidConfig
        );
        Ok(())
    }

    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [Self::SEED_PREFIX, std::slice::from_ref(&self.bump)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_min_stake() {
        assert_eq!(
            ProtocolConfig::validate_params(0, 1_000).unwrap_err(),
            OracleError::InvalidConfig.into()
        );
    }

    #[test]
    fn slash_percentage_is_bounded_by_full_stake() {
        assert!(ProtocolConfig::validate_params(1, 10_000).is_ok());
        assert_eq!(
            ProtocolConfig::validate_params(1, 10_001).unwrap_err(),
            OracleError::InvalidConfig.into()
        );
    }
}
