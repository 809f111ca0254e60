use anchor_lang::prelude::*;

use crate::constants::{MAX_RECORDS_PER_LEDGER, MAX_RECORDS_PER_PAGE};
use crate::error::DisburseError;
use crate::utils::vesting::vested_amount;

/// One scheduled grant. Only `claimed` changes after creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisbursementRecord {
    pub id: u64,
    pub amount: u64,
    pub vest_start: i64,
    pub vest_end: i64,
    pub claimed: u64,
}

impl DisbursementRecord {
    pub const SIZE: usize = 8 + 8 + 8 + 8 + 8;

    pub fn vested(&self, now: i64) -> u64 {
        vested_amount(self, now)
    }

    /// Vested units not yet paid out.
    pub fn claimable(&self, now: i64) -> u64 {
        self.vested(now).saturating_sub(self.claimed)
    }
}

/// Per-beneficiary ledger PDA.
#[account]
pub struct BeneficiaryLedger {
    pub beneficiary: Pubkey,
    pub bump: u8,
    /// Insertion order; this is the order claims drain in.
    pub records: Vec<DisbursementRecord>,
}

impl BeneficiaryLedger {
    /// Space for discriminator + header + a full records vec.
    pub const fn space() -> usize {
        8 + 32 + 1 + 4 + MAX_RECORDS_PER_LEDGER * DisbursementRecord::SIZE
    }

    pub fn new(beneficiary: Pubkey, bump: u8) -> Self {
        Self {
            beneficiary,
            bump,
            records: Vec::new(),
        }
    }

    /// Records which beneficiary and bump this account belongs to.
    /// Only the header is written; existing records are kept.
    pub fn bind(&mut self, beneficiary: Pubkey, bump: u8) {
        self.beneficiary = beneficiary;
        self.bump = bump;
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= MAX_RECORDS_PER_LEDGER
    }

    pub fn append(
        &mut self,
        id: u64,
        amount: u64,
        vest_start: i64,
        vest_end: i64,
    ) -> Result<&DisbursementRecord> {
        require!(!self.is_full(), DisburseError::LedgerFull);
        self.records.push(DisbursementRecord {
            id,
            amount,
            vest_start,
            vest_end,
            claimed: 0,
        });
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn total_vested(&self, now: i64) -> Result<u64> {
        sum(self.records.iter().map(|r| r.vested(now)))
    }

    pub fn total_claimed(&self) -> Result<u64> {
        sum(self.records.iter().map(|r| r.claimed))
    }

    pub fn total_unclaimed(&self, now: i64) -> Result<u64> {
        let vested = self.total_vested(now)?;
        let claimed = self.total_claimed()?;
        Ok(vested
            .checked_sub(claimed)
            .ok_or(DisburseError::MathOverflow)?)
    }

    /// Up to `MAX_RECORDS_PER_PAGE` records starting at `offset`.
    pub fn page(&self, offset: u32) -> DisbursementPage {
        let records = self
            .records
            .iter()
            .skip(offset as usize)
            .take(MAX_RECORDS_PER_PAGE)
            .copied()
            .collect();
        DisbursementPage {
            total: self.records.len() as u32,
            records,
        }
    }
}

/// Slice of a ledger listing returned by `get_disbursements`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DisbursementPage {
    /// Number of records in the whole ledger.
    pub total: u32,
    pub records: Vec<DisbursementRecord>,
}

fn sum(values: impl Iterator<Item = u64>) -> Result<u64> {
    let mut total: u64 = 0;
    for v in values {
        total = total.checked_add(v).ok_or(DisburseError::MathOverflow)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000;

    fn ledger() -> BeneficiaryLedger {
        BeneficiaryLedger::new(Pubkey::new_unique(), 255)
    }

    #[test]
    fn empty_ledger_totals_are_zero() {
        let l = ledger();
        assert_eq!(l.total_vested(T).unwrap(), 0);
        assert_eq!(l.total_claimed().unwrap(), 0);
        assert_eq!(l.total_unclaimed(T).unwrap(), 0);
        assert_eq!(l.page(0), DisbursementPage::default());
    }

    #[test]
    fn binding_keeps_existing_records() {
        let mut l = BeneficiaryLedger::new(Pubkey::default(), 0);
        l.bind(Pubkey::default(), 251);
        l.append(1, 10, T, T).unwrap();

        l.bind(Pubkey::default(), 251);
        l.append(2, 20, T, T).unwrap();

        assert_eq!(l.records.len(), 2);
        assert_eq!(l.total_vested(T).unwrap(), 30);
        assert_eq!(l.bump, 251);
    }

    #[test]
    fn instant_disbursement_is_fully_vested() {
        let mut l = ledger();
        l.append(1, 10, T, T).unwrap();
        assert_eq!(l.total_vested(T).unwrap(), 10);
        assert_eq!(l.total_unclaimed(T).unwrap(), 10);
        assert_eq!(l.total_claimed().unwrap(), 0);
    }

    #[test]
    fn records_keep_insertion_order() {
        let mut l = ledger();
        l.append(1, 100, T, T).unwrap();
        l.append(2, 100, T + 1, T + 1).unwrap();
        let ids: Vec<u64> = l.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(l.records.iter().all(|r| r.claimed == 0));
    }

    #[test]
    fn partially_vested_totals() {
        let mut l = ledger();
        l.append(1, 100, T, T + 100).unwrap();
        assert_eq!(l.total_vested(T + 75).unwrap(), 75);
        assert_eq!(l.total_claimed().unwrap(), 0);
        assert_eq!(l.total_unclaimed(T + 75).unwrap(), 75);

        l.records[0].claimed = 50;
        assert_eq!(l.total_unclaimed(T + 75).unwrap(), 25);
    }

    #[test]
    fn totals_repeat_and_never_decrease() {
        let mut l = ledger();
        l.append(1, 1_000, T, T + 300).unwrap();
        l.append(2, 7, T + 50, T + 51).unwrap();
        let mut last = 0;
        for now in (T - 10..T + 400).step_by(7) {
            let v = l.total_vested(now).unwrap();
            assert_eq!(v, l.total_vested(now).unwrap());
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 1_007);
    }

    #[test]
    fn full_ledger_rejects_append() {
        let mut l = ledger();
        for id in 0..MAX_RECORDS_PER_LEDGER as u64 {
            l.append(id + 1, 1, T, T).unwrap();
        }
        assert!(l.append(999, 1, T, T).is_err());
        assert_eq!(l.records.len(), MAX_RECORDS_PER_LEDGER);
    }

    #[test]
    fn overflowing_sum_errors() {
        let mut l = ledger();
        l.append(1, u64::MAX, T, T).unwrap();
        l.append(2, 1, T, T).unwrap();
        assert!(l.total_vested(T).is_err());
    }

    #[test]
    fn pages_walk_the_ledger_in_order() {
        let mut l = ledger();
        for id in 1..=30u64 {
            l.append(id, id * 10, T, T).unwrap();
        }
        let first = l.page(0);
        assert_eq!(first.total, 30);
        assert_eq!(first.records.len(), MAX_RECORDS_PER_PAGE);
        assert_eq!(first.records[0].id, 1);

        let second = l.page(MAX_RECORDS_PER_PAGE as u32);
        assert_eq!(second.records.len(), 30 - MAX_RECORDS_PER_PAGE);
        assert_eq!(second.records[0].id, MAX_RECORDS_PER_PAGE as u64 + 1);

        assert!(l.page(30).records.is_empty());
        assert!(l.page(u32::MAX).records.is_empty());
    }

    #[test]
    fn full_page_fits_in_return_data() {
        let page = DisbursementPage {
            total: MAX_RECORDS_PER_PAGE as u32,
            records: vec![DisbursementRecord::default(); MAX_RECORDS_PER_PAGE],
        };
        let mut bytes = Vec::new();
        page.serialize(&mut bytes).unwrap();
        assert!(bytes.len() <= 1024);
    }
}
