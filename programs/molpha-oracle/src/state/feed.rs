use super::Answer;
use crate::constants::{
    BPS_DENOMINATOR, MAX_FEED_NAME_LEN, MAX_HISTORY, MAX_SUBMISSIONS, MIN_REPORTERS_FLOOR,
};
use crate::error::OracleError;
use anchor_lang::prelude::*;

#[account]
#[derive(Default, InitSpace)]
pub struct Feed {
    pub id: u64,
    #[max_len(MAX_FEED_NAME_LEN)]
    pub name: String,
    pub owner: Pubkey,
    pub heartbeat_slots: u64,
    pub deviation_threshold_bps: u16,
    pub min_reporters: u8,
    pub query_fee: u64,
    pub paused: bool,
    /// Fees paid by consumers and not yet distributed to reporters.
    pub fee_pool: u64,
    /// Round currently addressed by submit/close/finalize; 0 before the first round.
    pub current_round: u64,
    pub current_round_opened_slot: u64,
    pub last_finalized_round: u64,
    pub latest_answer: Answer,
    #[max_len(MAX_HISTORY)]
    pub answer_history: Vec<Answer>,
    pub history_idx: u64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct FeedParams {
    pub heartbeat_slots: u64,
    pub deviation_threshold_bps: u16,
    pub min_reporters: u8,
    pub query_fee: u64,
}

impl FeedParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.heartbeat_slots > 0, OracleError::InvalidConfig);
        require!(
            u64::from(self.deviation_threshold_bps) <= BPS_DENOMINATOR,
            OracleError::InvalidConfig
        );
        require!(
            self.min_reporters >= MIN_REPORTERS_FLOOR
                && usize::from(self.min_reporters) <= MAX_SUBMISSIONS,
            OracleError::InvalidConfig
        );
        Ok(())
    }
}

impl Feed {
    pub const SEED_PREFIX: &'static [u8] = b"feed";
    pub const SPACE: usize = 8 + Feed::INIT_SPACE;

    pub fn initialize(
        &mut self,
        id: u64,
        name: String,
        owner: Pubkey,
        params: &FeedParams,
        bump: u8,
    ) -> Result<()> {
        require!(
            !name.is_empty() && name.len() <= MAX_FEED_NAME_LEN,
            OracleError::InvalidConfig
        );
        params.validate()?;

        self.id = id;
        self.name = name;
        self.owner = owner;
        self.paused = false;
        self.fee_pool = 0;
        self.current_round = 0;
        self.last_finalized_round = 0;
        self.answer_history = Vec::with_capacity(MAX_HISTORY);
        self.history_idx = 0;
        self.bump = bump;
        self.apply_params(params);
        Ok(())
    }

    pub fn update_params(&mut self, params: &FeedParams) -> Result<()> {
        params.validate()?;
        self.apply_params(params);
        Ok(())
    }

    fn apply_params(&mut self, params: &FeedParams) {
        self.heartbeat_slots = params.heartbeat_slots;
        self.deviation_threshold_bps = params.deviation_threshold_bps;
        self.min_reporters = params.min_reporters;
        self.query_fee = params.query_fee;
    }

    pub fn has_finalized(&self) -> bool {
        self.last_finalized_round > 0
    }

    pub fn has_round_in_flight(&self) -> bool {
        self.current_round > self.last_finalized_round
    }

    /// Advances the feed to a new round and returns its number.
    ///
    /// The heartbeat gates rounds after the first finalized one. An
    /// unfinalized round blocks new rounds until it has been open for a full
    /// heartbeat, after which it is superseded.
    pub fn begin_round(&mut self, slot: u64) -> Result<u64> {
        require!(!self.paused, OracleError::FeedPaused);

        if self.has_round_in_flight() {
            let stale_at = self
                .current_round_opened_slot
                .saturating_add(self.heartbeat_slots);
            require!(slot >= stale_at, OracleError::RoundInProgress);
        }

        if self.has_finalized() {
            let due = self.latest_answer.slot.saturating_add(self.heartbeat_slots);
            require!(slot >= due, OracleError::HeartbeatNotElapsed);
        }

        let round = self
            .current_round
            .checked_add(1)
            .ok_or(OracleError::ArithmeticOverflow)?;
        self.current_round = round;
        self.current_round_opened_slot = slot;
        Ok(round)
    }

    pub fn deposit_fee(&mut self, amount: u64) -> Result<()> {
        require!(amount >= self.query_fee, OracleError::FeeTooLow);
        require!(amount > 0, OracleError::InvalidAmount);
        self.fee_pool = self
            .fee_pool
            .checked_add(amount)
            .ok_or(OracleError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Commits a finalized answer as the feed's latest value.
    pub fn record_answer(&mut self, answer: Answer) {
        self.latest_answer = answer;
        self.last_finalized_round = answer.round;

        // Use a ring buffer for history
        if self.answer_history.len() < MAX_HISTORY {
            self.answer_history.push(answer);
            self.history_idx = self.answer_history.len() as u64 % MAX_HISTORY as u64;
        } else {
            let history_idx = self.history_idx as usize;
            self.answer_history[history_idx] = answer;
            self.history_idx = (history_idx as u64 + 1) % MAX_HISTORY as u64;
        }
    }

    pub fn latest_value(&self) -> Result<u64> {
        require!(self.has_finalized(), OracleError::NoFinalizedValue);
        Ok(self.latest_answer.value)
    }

    pub fn last_update_slot(&self) -> Result<u64> {
        require!(self.has_finalized(), OracleError::NoFinalizedValue);
        Ok(self.latest_answer.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FeedParams {
        FeedParams {
            heartbeat_slots: 100,
            deviation_threshold_bps: 500,
            min_reporters: 3,
            query_fee: 10,
        }
    }

    fn feed() -> Feed {
        let mut feed = Feed::default();
        feed.initialize(1, "SOL/USD".to_string(), Pubkey::default(), &params(), 254)
            .unwrap();
        feed
    }

    fn answer(round: u64, value: u64, slot: u64) -> Answer {
        Answer {
            round,
            value,
            slot,
            timestamp: 0,
        }
    }

    #[test]
    fn rejects_malformed_params() {
        let cases = [
            FeedParams { min_reporters: 2, ..params() },
            FeedParams { heartbeat_slots: 0, ..params() },
            FeedParams { deviation_threshold_bps: 10_001, ..params() },
            FeedParams { min_reporters: 33, ..params() },
        ];
        for case in cases {
            assert_eq!(case.validate().unwrap_err(), OracleError::InvalidConfig.into());
        }
        assert!(FeedParams { deviation_threshold_bps: 10_000, ..params() }
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut feed = Feed::default();
        let err = feed
            .initialize(1, String::new(), Pubkey::default(), &params(), 0)
            .unwrap_err();
        assert_eq!(err, OracleError::InvalidConfig.into());
    }

    #[test]
    fn first_round_ignores_heartbeat() {
        let mut feed = feed();
        assert_eq!(feed.begin_round(0).unwrap(), 1);
        assert_eq!(feed.current_round_opened_slot, 0);
    }

    #[test]
    fn paused_feed_cannot_open_rounds() {
        let mut feed = feed();
        feed.paused = true;
        assert_eq!(feed.begin_round(5).unwrap_err(), OracleError::FeedPaused.into());
    }

    #[test]
    fn heartbeat_gates_rounds_after_finalization() {
        let mut feed = feed();
        feed.begin_round(10).unwrap();
        feed.record_answer(answer(1, 42, 20));

        assert_eq!(
            feed.begin_round(119).unwrap_err(),
            OracleError::HeartbeatNotElapsed.into()
        );
        assert_eq!(feed.begin_round(120).unwrap(), 2);
    }

    #[test]
    fn stale_round_is_superseded_after_heartbeat() {
        let mut feed = feed();
        feed.begin_round(10).unwrap();

        assert_eq!(
            feed.begin_round(50).unwrap_err(),
            OracleError::RoundInProgress.into()
        );
        assert_eq!(feed.begin_round(110).unwrap(), 2);
        assert_eq!(feed.current_round_opened_slot, 110);
    }

    #[test]
    fn history_wraps_around() {
        let mut feed = feed();
        for round in 1..=(MAX_HISTORY as u64 + 3) {
            feed.record_answer(answer(round, round * 10, round));
        }
        assert_eq!(feed.answer_history.len(), MAX_HISTORY);
        assert_eq!(feed.history_idx, 3);
        assert_eq!(feed.answer_history[2].round, MAX_HISTORY as u64 + 3);
        assert_eq!(feed.latest_value().unwrap(), (MAX_HISTORY as u64 + 3) * 10);
    }

    #[test]
    fn latest_value_requires_a_finalized_round() {
        let feed = feed();
        assert_eq!(
            feed.latest_value().unwrap_err(),
            OracleError::NoFinalizedValue.into()
        );
    }

    #[test]
    fn fee_deposit_respects_query_fee() {
        let mut feed = feed();
        assert_eq!(feed.deposit_fee(9).unwrap_err(), OracleError::FeeTooLow.into());
        feed.deposit_fee(10).unwrap();
        feed.deposit_fee(25).unwrap();
        assert_eq!(feed.fee_pool, 35);
    }
}
