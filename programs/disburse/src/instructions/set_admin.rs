use anchor_lang::prelude::*;

use crate::capabilities::{AdminAuthority, ConfiguredAdmin};
use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::DisburseError;
use crate::state::DisburseConfig;

pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let cfg = &mut ctx.accounts.config;
    require!(
        ConfiguredAdmin(cfg.admin).is_authorized_admin(&ctx.accounts.admin.key()),
        DisburseError::UnauthorizedAdmin
    );
    validate_admin_candidate(&new_admin, &config_key)?;

    let old_admin = cfg.admin;
    cfg.admin = new_admin;

    msg!("disburse admin changed: {} -> {}", old_admin, new_admin);
    emit!(AdminChanged {
        old_admin,
        new_admin,
    });
    Ok(())
}

/// An admin must be able to sign: not the default key, not one of our PDAs.
pub fn validate_admin_candidate(candidate: &Pubkey, config_key: &Pubkey) -> Result<()> {
    require!(*candidate != Pubkey::default(), DisburseError::InvalidPubkey);
    require!(candidate != config_key, DisburseError::InvalidConfig);
    require!(*candidate != crate::ID, DisburseError::InvalidConfig);

    let (vault_pda, _) =
        Pubkey::find_program_address(&[VAULT_SEED, config_key.as_ref()], &crate::ID);
    require!(*candidate != vault_pda, DisburseError::InvalidConfig);
    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, DisburseConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminChanged {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_pda() -> Pubkey {
        Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID).0
    }

    #[test]
    fn ordinary_wallet_is_accepted() {
        assert!(validate_admin_candidate(&Pubkey::new_unique(), &config_pda()).is_ok());
    }

    #[test]
    fn unsignable_keys_are_rejected() {
        let config = config_pda();
        let (vault, _) = Pubkey::find_program_address(&[VAULT_SEED, config.as_ref()], &crate::ID);
        for key in [Pubkey::default(), config, vault, crate::ID] {
            assert!(validate_admin_candidate(&key, &config).is_err(), "{key} accepted");
        }
    }
}
