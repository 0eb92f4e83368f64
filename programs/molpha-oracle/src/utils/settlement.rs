//! Round finalization: aggregation, slashing and fee distribution combined
//! into one plan that is computed before any account is touched.

use super::aggregation::median;
use super::fees::{split_pool, FeeSplit};
use super::slashing::{assess, Verdict};
use crate::error::OracleError;
use crate::state::{Answer, Feed, Reporter, Round};
use anchor_lang::prelude::*;

#[derive(Clone, Debug)]
pub struct Settlement {
    pub median: u64,
    pub verdicts: Vec<Verdict>,
    pub fee_split: FeeSplit,
}

impl Settlement {
    pub fn plan(feed: &Feed, round: &Round) -> Result<Self> {
        round.ensure_closed()?;

        let median = median(&round.values()).ok_or(OracleError::InsufficientSubmissions)?;
        let verdicts = assess(&round.submissions, median, feed.deviation_threshold_bps);
        let honest = verdicts.iter().filter(|v| v.is_honest()).count();
        let fee_split = split_pool(feed.fee_pool, honest)?;

        Ok(Self {
            median,
            verdicts,
            fee_split,
        })
    }

    pub fn honest_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_honest()).count()
    }

    /// Applies the verdict at `index` to its reporter. Returns the penalty
    /// taken, zero for honest reporters.
    pub fn apply(&self, index: usize, reporter: &mut Reporter, slash_percentage_bps: u16) -> Result<u64> {
        let verdict = self
            .verdicts
            .get(index)
            .ok_or(OracleError::ReporterAccountMismatch)?;
        require_keys_eq!(
            reporter.authority,
            verdict.reporter,
            OracleError::ReporterAccountMismatch
        );

        reporter.rounds_participated = reporter.rounds_participated.saturating_add(1);
        if verdict.slashed {
            Ok(reporter.slash(slash_percentage_bps))
        } else {
            reporter.credit_fees(self.fee_split.share)?;
            Ok(0)
        }
    }

    /// Marks the round finalized and publishes the median on the feed.
    pub fn commit(&self, feed: &mut Feed, round: &mut Round, slot: u64, timestamp: i64) -> Result<Answer> {
        round.finalize(self.median, slot)?;

        feed.fee_pool = feed
            .fee_pool
            .checked_sub(self.fee_split.distributed)
            .ok_or(OracleError::ArithmeticOverflow)?;

        let answer = Answer {
            round: round.round,
            value: self.median,
            slot,
            timestamp,
        };
        feed.record_answer(answer);
        Ok(answer)
    }
}
