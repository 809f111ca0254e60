//! Collaborators the ledger core calls into but does not own.
//!
//! The instruction handlers wire these to the config account, the SPL token
//! program and the cluster clock; tests substitute in-memory stand-ins.

use anchor_lang::prelude::*;

/// Decides whether `caller` may register disbursements.
pub trait AdminAuthority {
    fn is_authorized_admin(&self, caller: &Pubkey) -> bool;
}

/// Moves `amount` units of the ledger's asset to `beneficiary`.
///
/// Invoked once per claim, after the ledger has been updated.
pub trait ValueTransfer {
    fn transfer(&mut self, beneficiary: &Pubkey, amount: u64) -> Result<()>;
}

/// Source of the current unix timestamp (seconds).
pub trait TimeSource {
    fn current_time(&self) -> Result<i64>;
}

/// The admin recorded in the config account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfiguredAdmin(pub Pubkey);

impl AdminAuthority for ConfiguredAdmin {
    fn is_authorized_admin(&self, caller: &Pubkey) -> bool {
        self.0 != Pubkey::default() && self.0 == *caller
    }
}

/// Cluster time from the `Clock` sysvar.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClusterClock;

impl TimeSource for ClusterClock {
    fn current_time(&self) -> Result<i64> {
        Ok(Clock::get()?.unix_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_admin_matches_only_its_key() {
        let admin = Pubkey::new_unique();
        let authority = ConfiguredAdmin(admin);
        assert!(authority.is_authorized_admin(&admin));
        assert!(!authority.is_authorized_admin(&Pubkey::new_unique()));
    }

    #[test]
    fn default_admin_authorizes_nobody() {
        let authority = ConfiguredAdmin(Pubkey::default());
        assert!(!authority.is_authorized_admin(&Pubkey::default()));
    }
}
