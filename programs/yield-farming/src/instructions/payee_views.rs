use anchor_lang::prelude::*;

use crate::constants::{FARM_SEED, PAYEES_SEED};
use crate::state::{FarmState, PayeeLedger};

pub fn payee(ctx: Context<PayeeLedgerView>, index: u32) -> Result<Pubkey> {
    Ok(ctx.accounts.payee_ledger.payee(index)?)
}

/// Zero for accounts that are not payees.
pub fn shares(ctx: Context<PayeeLedgerView>, account: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.payee_ledger.shares_of(&account))
}

pub fn released(ctx: Context<PayeeLedgerView>, account: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.payee_ledger.released_of(&account))
}

pub fn total_shares(ctx: Context<PayeeLedgerView>) -> Result<u64> {
    Ok(ctx.accounts.payee_ledger.total_shares)
}

pub fn total_released(ctx: Context<PayeeLedgerView>) -> Result<u64> {
    Ok(ctx.accounts.payee_ledger.total_released)
}

#[derive(Accounts)]
pub struct PayeeLedgerView<'info> {
    #[account(
        seeds = [FARM_SEED, farm_state.accepted_mint.as_ref()],
        bump = farm_state.bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    #[account(
        seeds = [PAYEES_SEED, farm_state.key().as_ref()],
        bump
    )]
    pub payee_ledger: Box<Account<'info, PayeeLedger>>,
}
