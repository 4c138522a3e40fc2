use anchor_lang::prelude::*;

#[error_code]
pub enum SkepticError {
    #[msg("Entry fee must be greater than zero.")]
    InvalidEntryFee,
    #[msg("Task description cannot be empty.")]
    TaskDescriptionEmpty,
    #[msg("Task description exceeds maximum length of 200 bytes.")]
    TaskDescriptionTooLong,
    #[msg("Market close must be in the future.")]
    MarketCloseInPast,
    #[msg("Market has already closed.")]
    MarketClosed,
    #[msg("Market has not closed yet.")]
    MarketNotClosed,
    #[msg("Market has already been resolved.")]
    AlreadyResolved,
    #[msg("Market has not been resolved yet.")]
    NotResolved,
    #[msg("Player has not joined this lobby.")]
    NotJoined,
    #[msg("Player has already been verified.")]
    AlreadyVerified,
    #[msg("Player is not verified.")]
    NotVerified,
    #[msg("Player has already claimed winnings.")]
    AlreadyClaimed,
    #[msg("Only the lobby's verifier can verify proofs.")]
    UnauthorizedVerifier,
    #[msg("Charity share has already been released.")]
    CharityAlreadyReleased,
    #[msg("Token account does not belong to the charity wallet.")]
    InvalidCharityAccount,
    #[msg("Lobby is full.")]
    LobbyFull,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
