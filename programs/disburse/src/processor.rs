//! Ledger mutations behind `add_disbursement` and `claim`.
//!
//! Handlers resolve accounts, signers and token plumbing, then call in here
//! with the collaborators from [`crate::capabilities`]. Events are returned
//! rather than emitted so the handler decides when they are logged.

use anchor_lang::prelude::*;

use crate::capabilities::{AdminAuthority, TimeSource, ValueTransfer};
use crate::error::DisburseError;
use crate::events::{DisbursementAdded, DisbursementClaim};
use crate::state::{BeneficiaryLedger, DisburseConfig};

/// Registers a new disbursement on `ledger`, returning its id and the event to emit.
///
/// Amount and window are stored as given; zero amounts and inverted windows are accepted.
pub fn add_disbursement(
    authority: &impl AdminAuthority,
    caller: &Pubkey,
    config: &mut DisburseConfig,
    ledger: &mut BeneficiaryLedger,
    amount: u64,
    vest_start: i64,
    vest_end: i64,
) -> Result<(u64, DisbursementAdded)> {
    require!(
        authority.is_authorized_admin(caller),
        DisburseError::UnauthorizedAdmin
    );
    require!(!ledger.is_full(), DisburseError::LedgerFull);

    let id = config.schedule(amount)?;
    ledger.append(id, amount, vest_start, vest_end)?;

    Ok((
        id,
        DisbursementAdded {
            beneficiary: ledger.beneficiary,
            amount,
            vest_start,
            vest_end,
        },
    ))
}

/// Outcome of one claim call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// Units actually paid out; at most the requested amount.
    pub claimed: u64,
    /// One entry per record drained, in drain order.
    pub drained: Vec<DisbursementClaim>,
}

/// Pays out up to `requested` vested-but-unclaimed units, oldest record first.
///
/// Requests larger than what is claimable are capped, not rejected; a
/// beneficiary without a ledger gets an empty receipt. The
/// ledger is updated before `transfer` runs; if the transfer fails its error
/// is returned and the caller's transaction must roll the ledger back.
pub fn claim(
    ledger: Option<&mut BeneficiaryLedger>,
    requested: u64,
    clock: &impl TimeSource,
    transfer: &mut impl ValueTransfer,
) -> Result<ClaimReceipt> {
    let Some(ledger) = ledger else {
        return Ok(ClaimReceipt::default());
    };
    let now = clock.current_time()?;
    let beneficiary = ledger.beneficiary;

    let mut remaining = requested;
    let mut receipt = ClaimReceipt::default();

    for record in ledger.records.iter_mut() {
        if remaining == 0 {
            break;
        }
        let available = record.claimable(now);
        if available == 0 {
            continue;
        }
        let take = available.min(remaining);

        // take <= vested - claimed and the running total <= requested; neither can overflow.
        record.claimed += take;
        remaining -= take;
        receipt.claimed += take;

        receipt.drained.push(DisbursementClaim {
            record_id: record.id,
            beneficiary,
            amount: take,
        });
    }

    if receipt.claimed > 0 {
        transfer.transfer(&beneficiary, receipt.claimed)?;
    }

    Ok(receipt)
}
