use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::capabilities::{ClusterClock, ValueTransfer};
use crate::constants::{CONFIG_SEED, LEDGER_SEED, VAULT_SEED};
use crate::error::DisburseError;
use crate::processor;
use crate::state::{BeneficiaryLedger, DisburseConfig};

/// Pays the signing beneficiary up to `requested` vested units.
///
/// Returns the amount actually paid, which is smaller than `requested`
/// whenever less has vested. A beneficiary without a ledger gets 0.
pub fn claim(ctx: Context<Claim>, requested: u64) -> Result<u64> {
    // Capture the PDA signer before taking mutable borrows of the accounts.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = [ctx.accounts.config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &config_bump]];

    let accounts = &mut *ctx.accounts;
    let beneficiary = accounts.beneficiary.key();
    let mut transfer = VaultTransfer {
        token_program: &accounts.token_program,
        vault: &accounts.vault,
        destination: &accounts.beneficiary_token_account,
        authority: config_ai,
        signer_seeds,
    };
    let receipt = processor::claim(
        accounts.ledger.as_deref_mut(),
        requested,
        &ClusterClock,
        &mut transfer,
    )?;

    accounts.config.record_claimed(receipt.claimed)?;

    msg!(
        "claim by {}: requested={} paid={} records={}",
        beneficiary,
        requested,
        receipt.claimed,
        receipt.drained.len()
    );
    for event in receipt.drained {
        emit!(event);
    }

    Ok(receipt.claimed)
}

/// SPL transfer out of the vault, signed by the config PDA.
struct VaultTransfer<'a, 'info> {
    token_program: &'a Program<'info, Token>,
    vault: &'a Account<'info, TokenAccount>,
    destination: &'a Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl ValueTransfer for VaultTransfer<'_, '_> {
    fn transfer(&mut self, beneficiary: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            self.destination.owner,
            *beneficiary,
            DisburseError::InvalidTokenAccount
        );
        require!(
            self.vault.amount >= amount,
            DisburseError::InsufficientVaultBalance
        );

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
    }
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, DisburseConfig>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub ledger: Option<Account<'info, BeneficiaryLedger>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump = config.vault_bump,
        constraint = vault.mint == config.mint @ DisburseError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == config.mint @ DisburseError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ DisburseError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
