use crate::constants::MAX_SUBMISSIONS;
use crate::error::OracleError;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
pub enum RoundStatus {
    #[default]
    Open,
    Closed,
    Finalized,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct Submission {
    pub reporter: Pubkey,
    pub value: u64,
    pub slot: u64,
}

#[account]
#[derive(Default, InitSpace)]
pub struct Round {
    pub feed: Pubkey,
    pub round: u64,
    pub status: RoundStatus,
    pub opened_by: Pubkey,
    pub open_slot: u64,
    pub close_slot: u64,
    pub closed_at: i64,
    pub finalized_slot: u64,
    /// Set once the round is finalized.
    pub median: Option<u64>,
    #[max_len(MAX_SUBMISSIONS)]
    pub submissions: Vec<Submission>,
    pub bump: u8,
}

impl Round {
    pub const SEED_PREFIX: &'static [u8] = b"round";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn open(&mut self, feed: Pubkey, round: u64, opened_by: Pubkey, slot: u64, bump: u8) {
        self.feed = feed;
        self.round = round;
        self.status = RoundStatus::Open;
        self.opened_by = opened_by;
        self.open_slot = slot;
        self.median = None;
        self.submissions = Vec::with_capacity(MAX_SUBMISSIONS);
        self.bump = bump;
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    pub fn has_submitted(&self, reporter: &Pubkey) -> bool {
        self.submissions.iter().any(|s| &s.reporter == reporter)
    }

    pub fn record_submission(&mut self, reporter: Pubkey, value: u64, slot: u64) -> Result<()> {
        require!(self.status == RoundStatus::Open, OracleError::RoundNotOpen);
        require!(
            !self.has_submitted(&reporter),
            OracleError::DuplicateSubmission
        );
        require!(
            self.submissions.len() < MAX_SUBMISSIONS,
            OracleError::RoundFull
        );

        self.submissions.push(Submission {
            reporter,
            value,
            slot,
        });
        Ok(())
    }

    /// Freezes the submission set. Nothing is accepted after this point.
    pub fn close_submissions(&mut self, min_reporters: u8, slot: u64, timestamp: i64) -> Result<()> {
        require!(self.status == RoundStatus::Open, OracleError::RoundNotOpen);
        require!(
            self.submissions.len() >= usize::from(min_reporters),
            OracleError::InsufficientSubmissions
        );

        self.status = RoundStatus::Closed;
        self.close_slot = slot;
        self.closed_at = timestamp;
        Ok(())
    }

    pub fn ensure_closed(&self) -> Result<()> {
        require!(
            self.status == RoundStatus::Closed,
            OracleError::RoundNotClosed
        );
        Ok(())
    }

    pub fn finalize(&mut self, median: u64, slot: u64) -> Result<()> {
        self.ensure_closed()?;
        self.status = RoundStatus::Finalized;
        self.median = Some(median);
        self.finalized_slot = slot;
        Ok(())
    }

    pub fn values(&self) -> Vec<u64> {
        self.submissions.iter().map(|s| s.value).collect()
    }

    pub fn committed_median(&self) -> Result<u64> {
        self.median.ok_or_else(|| error!(OracleError::RoundNotFinalized))
    }
}
