//! Linear vesting curve.
//! - before `vest_start`: nothing vested
//! - at or after `vest_end`: the whole amount
//! - in between: `floor(amount * elapsed / duration)`
//!
//! A zero-length window vests fully at `vest_start`. An inverted window
//! (`vest_start > vest_end`) vests nothing before `vest_start` and everything
//! from then on.

use crate::state::DisbursementRecord;

pub fn vested_amount(record: &DisbursementRecord, now: i64) -> u64 {
    linear_vested(record.amount, record.vest_start, record.vest_end, now)
}

fn linear_vested(amount: u64, vest_start: i64, vest_end: i64, now: i64) -> u64 {
    if now < vest_start {
        return 0;
    }
    if now >= vest_end {
        return amount;
    }
    // vest_start <= now < vest_end, so both spans are positive and elapsed < duration.
    let elapsed = (now as i128 - vest_start as i128) as u128;
    let duration = (vest_end as i128 - vest_start as i128) as u128;
    // amount * elapsed < 2^64 * 2^64, fits in u128; quotient < amount.
    ((amount as u128) * elapsed / duration) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(amount: u64, vest_start: i64, vest_end: i64) -> DisbursementRecord {
        DisbursementRecord {
            id: 1,
            amount,
            vest_start,
            vest_end,
            claimed: 0,
        }
    }

    #[test]
    fn nothing_vested_before_start() {
        let r = record(100, 1_000, 1_100);
        assert_eq!(vested_amount(&r, 0), 0);
        assert_eq!(vested_amount(&r, 999), 0);
        assert_eq!(vested_amount(&r, 1_000), 0);
    }

    #[test]
    fn fully_vested_at_and_after_end() {
        let r = record(100, 1_000, 1_100);
        assert_eq!(vested_amount(&r, 1_100), 100);
        assert_eq!(vested_amount(&r, i64::MAX), 100);
    }

    #[test]
    fn linear_interpolation_floors() {
        let r = record(100, 1_000, 1_100);
        assert_eq!(vested_amount(&r, 1_075), 75);

        // 10 units over 3 seconds: 3.33.. then 6.66.. are floored.
        let r = record(10, 0, 3);
        assert_eq!(vested_amount(&r, 1), 3);
        assert_eq!(vested_amount(&r, 2), 6);
        assert_eq!(vested_amount(&r, 3), 10);
    }

    #[test]
    fn zero_length_window_vests_at_start() {
        let r = record(10, 500, 500);
        assert_eq!(vested_amount(&r, 499), 0);
        assert_eq!(vested_amount(&r, 500), 10);
        assert_eq!(vested_amount(&r, 501), 10);
    }

    #[test]
    fn inverted_window_jumps_at_start() {
        let r = record(10, 500, 400);
        assert_eq!(vested_amount(&r, 450), 0);
        assert_eq!(vested_amount(&r, 499), 0);
        assert_eq!(vested_amount(&r, 500), 10);
    }

    #[test]
    fn zero_amount_never_vests_anything() {
        let r = record(0, 0, 100);
        assert_eq!(vested_amount(&r, 50), 0);
        assert_eq!(vested_amount(&r, 100), 0);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let r = record(u64::MAX, i64::MIN, i64::MAX);
        assert_eq!(vested_amount(&r, 0), 1u64 << 63);
        assert_eq!(vested_amount(&r, i64::MAX - 1), u64::MAX - 1);
    }

    proptest! {
        #[test]
        fn vesting_is_monotonic_and_bounded(
            amount in any::<u64>(),
            vest_start in -1_000_000i64..1_000_000,
            vest_end in -1_000_000i64..1_000_000,
            t1 in -2_000_000i64..2_000_000,
            dt in 0i64..2_000_000,
        ) {
            let r = record(amount, vest_start, vest_end);
            let early = vested_amount(&r, t1);
            let late = vested_amount(&r, t1 + dt);
            prop_assert!(early <= late);
            prop_assert!(late <= amount);
            prop_assert_eq!(early, vested_amount(&r, t1));
        }
    }
}
