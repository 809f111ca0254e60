use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::capabilities::{AdminAuthority, ConfiguredAdmin};
use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::DisburseError;
use crate::state::DisburseConfig;

/// Funds the vault that claims are paid from.
pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, DisburseError::InvalidConfig);

    let cfg = &ctx.accounts.config;
    require!(
        ConfiguredAdmin(cfg.admin).is_authorized_admin(&ctx.accounts.admin.key()),
        DisburseError::UnauthorizedAdmin
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        cfg.mint,
        DisburseError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        DisburseError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    msg!("vault funded with {}, balance {}", amount, ctx.accounts.vault.amount);
    emit!(TokensDeposited {
        admin: ctx.accounts.admin.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, DisburseConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump = config.vault_bump,
        constraint = vault.mint == config.mint @ DisburseError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
