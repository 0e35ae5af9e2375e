use anchor_lang::prelude::*;

#[error_code]
pub enum AllowlistError {
    // Access errors
    #[msg("Caller is not allowed to perform this action")]
    Unauthorized,

    // Lifecycle errors
    #[msg("Operation is not valid in the current raffle state")]
    InvalidState,
    #[msg("Identity is already registered")]
    AlreadyRegistered,
    #[msg("Random seed has already been set")]
    AlreadySeeded,
    #[msg("Not enough participants for the requested winners")]
    CapacityExceeded,

    // Creation errors
    #[msg("Raffle name is too long")]
    NameTooLong,
    #[msg("Winners to draw exceeds the maximum")]
    ExceedWinnersCount,

    // Commitment errors
    #[msg("Commitment must be between 1 and 64 bytes")]
    InvalidCommitment,

    // Randomness errors
    #[msg("Invalid randomness data")]
    InvalidRandomnessData,
    #[msg("Randomness not yet revealed")]
    RandomnessNotRevealed,
    #[msg("Randomness not yet resolved")]
    RandomnessNotResolved,
    #[msg("Clock error")]
    ClockError,
}
