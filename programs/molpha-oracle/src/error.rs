use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("The caller lacks the required role for this operation.")]
    NotAuthorized,
    #[msg("Invalid feed or protocol configuration.")]
    InvalidConfig,
    #[msg("The feed is paused.")]
    FeedPaused,
    #[msg("The caller is already an active reporter.")]
    AlreadyRegistered,
    #[msg("The caller is not an active reporter.")]
    NotRegistered,
    #[msg("The current round is not open.")]
    RoundNotOpen,
    #[msg("The current round is not closed.")]
    RoundNotClosed,
    #[msg("The reporter already submitted a value for this round.")]
    DuplicateSubmission,
    #[msg("Not enough submissions to close the round.")]
    InsufficientSubmissions,
    #[msg("The heartbeat interval has not elapsed since the last update.")]
    HeartbeatNotElapsed,
    #[msg("Stake is below the protocol minimum.")]
    InsufficientStake,
    #[msg("There are no fees to claim.")]
    NothingToClaim,
    #[msg("A round for this feed is still in progress.")]
    RoundInProgress,
    #[msg("The round has reached its submission capacity.")]
    RoundFull,
    #[msg("The round has not been finalized.")]
    RoundNotFinalized,
    #[msg("The feed has no finalized value yet.")]
    NoFinalizedValue,
    #[msg("The paid amount is below the feed's query fee.")]
    FeeTooLow,
    #[msg("The amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Reporter accounts do not match the round's submissions.")]
    ReporterAccountMismatch,
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
}
