use anchor_lang::prelude::*;

/// Custom error codes for the disbursement program.
///
/// Oversized claims and inverted vesting windows are not errors: claims are
/// capped at what has vested, inverted windows vest all at once.
#[error_code]
pub enum DisburseError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Beneficiary ledger is full")]
    LedgerFull,

    #[msg("Math overflow")]
    MathOverflow,
}
