use anchor_lang::prelude::*;

#[error_code]
pub enum SwapError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient token balance")]
    InsufficientBalance,
    #[msg("Unauthorized: signer does not control this account")]
    Unauthorized,
    #[msg("Invalid token mint provided")]
    InvalidMint,
    #[msg("Offer counter overflow - maximum offers reached")]
    CounterOverflow,
    #[msg("User profile already initialized")]
    AlreadyInitialized,
    #[msg("Stored offer record does not match the supplied id")]
    RecordMismatch,
}
