use anchor_lang::prelude::*;

#[error_code]
pub enum RpsError{
    #[msg("The signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("The fee must be between 0 and 1000 (tenths of a percent)")]
    InvalidFee,
    #[msg("The move must be 1 (rock), 2 (paper) or 3 (scissors)")]
    InvalidMove,
    #[msg("The global state has already been initialized")]
    AlreadyInitialized,
    #[msg("A round with this index already exists for the creator")]
    RoundAlreadyExists,
    #[msg("The creator cannot join their own round")]
    CannotJoinOwnRound,
    #[msg("The player has already played in this round")]
    AlreadyPlayed,
    #[msg("The round has already been settled")]
    AlreadySettled,
    #[msg("No round exists for this index and creator")]
    RoundNotFound,
    #[msg("The vault does not hold enough lamports for this payout")]
    InsufficientVaultBalance,
    #[msg("The deposit must be greater than zero")]
    InvalidDepositAmount,
    #[msg("The round is not open for joining")]
    RoundNotJoinable,
    #[msg("The round is not accepting moves")]
    RoundNotPlayable,
    #[msg("The window for playing this round has closed")]
    PlayWindowClosed,
    #[msg("The round cannot be settled yet")]
    TooSoonToClaim,
    #[msg("The provided participant account does not match the round")]
    InvalidParticipantAccount,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("The owner cannot be the default key")]
    InvalidOwner
}
