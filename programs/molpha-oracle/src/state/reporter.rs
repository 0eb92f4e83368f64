use crate::constants::BPS_DENOMINATOR;
use crate::error::OracleError;
use anchor_lang::prelude::*;

#[account]
#[derive(Default, InitSpace)]
pub struct Reporter {
    pub authority: Pubkey, // Account that submits values and owns the stake
    pub stake: u64,        // Collateral currently held in the stake vault
    pub is_active: bool,   // Cleared on unregistration or full slashing
    pub claimable_fees: u64,
    pub registered_at: i64,
    pub rounds_participated: u64,
    pub times_slashed: u64,
    pub total_slashed: u64,
    pub total_fees_claimed: u64,
    pub bump: u8,
}

impl Reporter {
    pub const SEED_PREFIX: &'static [u8] = b"reporter";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Activates a fresh or previously deactivated reporter account.
    pub fn register(
        &mut self,
        authority: Pubkey,
        stake_amount: u64,
        min_stake: u64,
        registered_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_active, OracleError::AlreadyRegistered);
        require!(stake_amount >= min_stake, OracleError::InsufficientStake);

        self.authority = authority;
        self.stake = self
            .stake
            .checked_add(stake_amount)
            .ok_or(OracleError::ArithmeticOverflow)?;
        self.is_active = true;
        self.registered_at = registered_at;
        self.bump = bump;
        Ok(())
    }

    /// Deactivates the reporter and returns the stake to be released.
    pub fn unregister(&mut self) -> Result<u64> {
        require!(self.is_active, OracleError::NotRegistered);
        let refund = self.stake;
        self.stake = 0;
        self.is_active = false;
        Ok(refund)
    }

    pub fn increase_stake(&mut self, amount: u64) -> Result<()> {
        require!(self.is_active, OracleError::NotRegistered);
        require!(amount > 0, OracleError::InvalidAmount);
        self.stake = self
            .stake
            .checked_add(amount)
            .ok_or(OracleError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Active and collateralized enough to open rounds and submit values.
    pub fn ensure_eligible(&self, min_stake: u64) -> Result<()> {
        require!(self.is_active, OracleError::NotRegistered);
        require!(self.stake >= min_stake, OracleError::InsufficientStake);
        Ok(())
    }

    /// Forfeits `slash_percentage_bps` of the current stake, never more than
    /// what is left. Returns the penalty taken.
    pub fn slash(&mut self, slash_percentage_bps: u16) -> u64 {
        let penalty = (u128::from(self.stake) * u128::from(slash_percentage_bps)
            / u128::from(BPS_DENOMINATOR)) as u64;
        let penalty = penalty.min(self.stake);

        self.stake -= penalty;
        self.times_slashed = self.times_slashed.saturating_add(1);
        self.total_slashed = self.total_slashed.saturating_add(penalty);
        if self.stake == 0 {
            self.is_active = false;
        }
        penalty
    }

    pub fn credit_fees(&mut self, amount: u64) -> Result<()> {
        self.claimable_fees = self
            .claimable_fees
            .checked_add(amount)
            .ok_or(OracleError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Zeroes the claimable balance and returns the amount to pay out.
    pub fn take_claimable_fees(&mut self) -> Result<u64> {
        let amount = self.claimable_fees;
        require!(amount > 0, OracleError::NothingToClaim);
        self.claimable_fees = 0;
        self.total_fees_claimed = self.total_fees_claimed.saturating_add(amount);
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_STAKE: u64 = 1_000;

    fn reporter(stake: u64) -> Reporter {
        let mut reporter = Reporter::default();
        reporter
            .register(Pubkey::new_from_array([7; 32]), stake, MIN_STAKE, 0, 255)
            .unwrap();
        reporter
    }

    #[test]
    fn registration_requires_minimum_stake() {
        let mut reporter = Reporter::default();
        let err = reporter
            .register(Pubkey::default(), MIN_STAKE - 1, MIN_STAKE, 0, 0)
            .unwrap_err();
        assert_eq!(err, OracleError::InsufficientStake.into());
        assert!(!reporter.is_active);
    }

    #[test]
    fn double_registration_fails() {
        let mut reporter = reporter(MIN_STAKE);
        let err = reporter
            .register(reporter.authority, MIN_STAKE, MIN_STAKE, 1, 255)
            .unwrap_err();
        assert_eq!(err, OracleError::AlreadyRegistered.into());
        assert_eq!(reporter.stake, MIN_STAKE);
    }

    #[test]
    fn unregister_refunds_full_stake_once() {
        let mut reporter = reporter(2_500);
        assert_eq!(reporter.unregister().unwrap(), 2_500);
        assert_eq!(reporter.stake, 0);
        assert_eq!(
            reporter.unregister().unwrap_err(),
            OracleError::NotRegistered.into()
        );
    }

    #[test]
    fn reregistration_reuses_account() {
        let mut reporter = reporter(MIN_STAKE);
        reporter.unregister().unwrap();
        reporter
            .register(reporter.authority, 3_000, MIN_STAKE, 9, 255)
            .unwrap();
        assert!(reporter.is_active);
        assert_eq!(reporter.stake, 3_000);
        assert_eq!(reporter.registered_at, 9);
    }

    #[test]
    fn slash_takes_configured_share() {
        let mut reporter = reporter(10_000);
        assert_eq!(reporter.slash(1_000), 1_000);
        assert_eq!(reporter.stake, 9_000);
        assert_eq!(reporter.times_slashed, 1);
        assert!(reporter.is_active);
    }

    #[test]
    fn full_slash_deactivates_without_going_negative() {
        let mut reporter = reporter(1_500);
        assert_eq!(reporter.slash(10_000), 1_500);
        assert_eq!(reporter.stake, 0);
        assert!(!reporter.is_active);

        // Already empty: nothing more to take.
        assert_eq!(reporter.slash(10_000), 0);
        assert_eq!(reporter.total_slashed, 1_500);
    }

    #[test]
    fn partially_slashed_reporter_below_minimum_is_ineligible() {
        let mut reporter = reporter(MIN_STAKE);
        reporter.slash(5_000);
        assert!(reporter.is_active);
        assert_eq!(
            reporter.ensure_eligible(MIN_STAKE).unwrap_err(),
            OracleError::InsufficientStake.into()
        );

        reporter.increase_stake(500).unwrap();
        assert!(reporter.ensure_eligible(MIN_STAKE).is_ok());
    }

    #[test]
    fn claiming_drains_balance() {
        let mut reporter = reporter(MIN_STAKE);
        assert_eq!(
            reporter.take_claimable_fees().unwrap_err(),
            OracleError::NothingToClaim.into()
        );
        reporter.credit_fees(15).unwrap();
        reporter.credit_fees(5).unwrap();
        assert_eq!(reporter.take_claimable_fees().unwrap(), 20);
        assert_eq!(reporter.claimable_fees, 0);
        assert_eq!(reporter.total_fees_claimed, 20);
    }
}
