//! Read-only views, answered through Anchor return data at cluster time.
//!
//! A beneficiary with no ledger account reads as an empty ledger.

use anchor_lang::prelude::*;

use crate::capabilities::{ClusterClock, TimeSource};
use crate::constants::LEDGER_SEED;
use crate::state::{BeneficiaryLedger, DisbursementPage};

pub fn total_vested(ctx: Context<LedgerQuery>) -> Result<u64> {
    let now = ClusterClock.current_time()?;
    vested_of(ctx.accounts.ledger.as_deref(), now)
}

pub fn total_claimed(ctx: Context<LedgerQuery>) -> Result<u64> {
    claimed_of(ctx.accounts.ledger.as_deref())
}

pub fn total_unclaimed(ctx: Context<LedgerQuery>) -> Result<u64> {
    let now = ClusterClock.current_time()?;
    unclaimed_of(ctx.accounts.ledger.as_deref(), now)
}

pub fn get_disbursements(ctx: Context<LedgerQuery>, offset: u32) -> Result<DisbursementPage> {
    Ok(page_of(ctx.accounts.ledger.as_deref(), offset))
}

fn vested_of(ledger: Option<&BeneficiaryLedger>, now: i64) -> Result<u64> {
    ledger.map_or(Ok(0), |l| l.total_vested(now))
}

fn claimed_of(ledger: Option<&BeneficiaryLedger>) -> Result<u64> {
    ledger.map_or(Ok(0), |l| l.total_claimed())
}

fn unclaimed_of(ledger: Option<&BeneficiaryLedger>, now: i64) -> Result<u64> {
    ledger.map_or(Ok(0), |l| l.total_unclaimed(now))
}

fn page_of(ledger: Option<&BeneficiaryLedger>, offset: u32) -> DisbursementPage {
    ledger.map(|l| l.page(offset)).unwrap_or_default()
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct LedgerQuery<'info> {
    #[account(seeds = [LEDGER_SEED, beneficiary.as_ref()], bump)]
    pub ledger: Option<Account<'info, BeneficiaryLedger>>,
}
