//! Program-wide constants.

/// Seed of the singleton config PDA (admin, mint, record id counter).
pub const CONFIG_SEED: &[u8] = b"disburse_config";

/// Seed prefix of a beneficiary's ledger PDA: `[LEDGER_SEED, beneficiary]`.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed prefix of the token vault PDA: `[VAULT_SEED, config]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Id handed to the first disbursement ever recorded.
pub const FIRST_RECORD_ID: u64 = 1;

/// Records one ledger account can hold; the account is allocated at full size.
pub const MAX_RECORDS_PER_LEDGER: usize = 64;

/// Records returned per `get_disbursements` page (return data is capped at 1024 bytes).
pub const MAX_RECORDS_PER_PAGE: usize = 24;
