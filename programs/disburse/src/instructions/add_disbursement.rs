use anchor_lang::prelude::*;

use crate::capabilities::{AdminAuthority, ConfiguredAdmin};
use crate::constants::{CONFIG_SEED, LEDGER_SEED};
use crate::error::DisburseError;
use crate::processor;
use crate::state::{BeneficiaryLedger, DisburseConfig};

/// Schedules `amount` to vest linearly to `beneficiary` over `[vest_start, vest_end]`.
///
/// The window is not validated: `vest_start > vest_end` is stored as given
/// and vests everything at `vest_start`.
pub fn add_disbursement(
    ctx: Context<AddDisbursement>,
    beneficiary: Pubkey,
    amount: u64,
    vest_start: i64,
    vest_end: i64,
) -> Result<u64> {
    let authority = ConfiguredAdmin(ctx.accounts.config.admin);
    let caller = ctx.accounts.admin.key();
    require!(
        authority.is_authorized_admin(&caller),
        DisburseError::UnauthorizedAdmin
    );

    ctx.accounts.ledger.bind(beneficiary, ctx.bumps.ledger);

    let (id, event) = processor::add_disbursement(
        &authority,
        &caller,
        &mut ctx.accounts.config,
        &mut ctx.accounts.ledger,
        amount,
        vest_start,
        vest_end,
    )?;

    msg!(
        "disbursement {} added: beneficiary={} amount={} window=[{}, {}]",
        id,
        beneficiary,
        amount,
        vest_start,
        vest_end
    );
    emit!(event);

    Ok(id)
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct AddDisbursement<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, DisburseConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = BeneficiaryLedger::space(),
        seeds = [LEDGER_SEED, beneficiary.as_ref()],
        bump
    )]
    pub ledger: Account<'info, BeneficiaryLedger>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
