use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::instructions::set_admin::validate_admin_candidate;
use crate::state::DisburseConfig;

pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    validate_admin_candidate(&admin, &config_key)?;

    let mint = ctx.accounts.mint.key();
    ctx.accounts.config.set_inner(DisburseConfig::new(
        admin,
        mint,
        ctx.bumps.config,
        ctx.bumps.vault,
    ));

    msg!("disburse initialized: admin={} mint={}", admin, mint);
    emit!(DisburserInitialized {
        admin,
        mint,
        vault: ctx.accounts.vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + DisburseConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, DisburseConfig>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = config,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct DisburserInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
