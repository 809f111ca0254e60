use anchor_lang::prelude::*;

use crate::constants::FIRST_RECORD_ID;
use crate::error::DisburseError;

/// Singleton program state PDA.
#[account]
pub struct DisburseConfig {
    /// Authority allowed to register disbursements.
    pub admin: Pubkey,
    /// Token mint held by the vault and paid out on claim.
    pub mint: Pubkey,
    /// Id the next disbursement receives; shared by every beneficiary.
    pub next_record_id: u64,
    /// Sum of all disbursement amounts ever scheduled.
    pub total_scheduled: u64,
    /// Sum of all amounts ever claimed.
    pub total_claimed: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl DisburseConfig {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        8 +  // next_record_id
        8 +  // total_scheduled
        8 +  // total_claimed
        1 +  // bump
        1;   // vault_bump

    pub fn new(admin: Pubkey, mint: Pubkey, bump: u8, vault_bump: u8) -> Self {
        Self {
            admin,
            mint,
            next_record_id: FIRST_RECORD_ID,
            total_scheduled: 0,
            total_claimed: 0,
            bump,
            vault_bump,
        }
    }

    /// Accounts for a new disbursement of `amount` and hands out its id.
    /// Ids are never reused. Nothing changes if either counter would overflow.
    pub fn schedule(&mut self, amount: u64) -> Result<u64> {
        let id = self.next_record_id;
        let next_record_id = id.checked_add(1).ok_or(DisburseError::MathOverflow)?;
        let total_scheduled = self
            .total_scheduled
            .checked_add(amount)
            .ok_or(DisburseError::MathOverflow)?;
        self.next_record_id = next_record_id;
        self.total_scheduled = total_scheduled;
        Ok(id)
    }

    pub fn record_claimed(&mut self, amount: u64) -> Result<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(DisburseError::MathOverflow)?;
        Ok(())
    }
}
