use anchor_lang::prelude::*;

/// Emitted once per successful `add_disbursement`.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisbursementAdded {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub vest_start: i64,
    pub vest_end: i64,
}

/// Emitted once per record drained by a claim, in drain order.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisbursementClaim {
    pub record_id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
}
