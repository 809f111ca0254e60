use anchor_lang::prelude::*;

pub mod capabilities;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod processor;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::DisbursementPage;

declare_id!("D1sbVr5eYtQk8mC3nJ7pWq2xHf4LgA9sRu6ZoT1bKcEv");

#[program]
pub mod disburse {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, admin)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::set_admin(ctx, new_admin)
    }

    pub fn add_disbursement(
        ctx: Context<AddDisbursement>,
        beneficiary: Pubkey,
        amount: u64,
        vest_start: i64,
        vest_end: i64,
    ) -> Result<u64> {
        instructions::add_disbursement::add_disbursement(
            ctx,
            beneficiary,
            amount,
            vest_start,
            vest_end,
        )
    }

    pub fn claim(ctx: Context<Claim>, requested: u64) -> Result<u64> {
        instructions::claim::claim(ctx, requested)
    }

    pub fn total_vested(ctx: Context<LedgerQuery>, _beneficiary: Pubkey) -> Result<u64> {
        instructions::queries::total_vested(ctx)
    }

    pub fn total_unclaimed(ctx: Context<LedgerQuery>, _beneficiary: Pubkey) -> Result<u64> {
        instructions::queries::total_unclaimed(ctx)
    }

    pub fn total_claimed(ctx: Context<LedgerQuery>, _beneficiary: Pubkey) -> Result<u64> {
        instructions::queries::total_claimed(ctx)
    }

    pub fn get_disbursements(
        ctx: Context<LedgerQuery>,
        _beneficiary: Pubkey,
        offset: u32,
    ) -> Result<DisbursementPage> {
        instructions::queries::get_disbursements(ctx, offset)
    }
}
