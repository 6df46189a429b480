use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{FARM_SEED, PAYEES_SEED, VAULT_SEED};
use crate::error::YieldFarmingError;
use crate::state::{FarmState, PayeeLedger};

pub fn add_payee(ctx: Context<ManagePayees>, account: Pubkey, shares: u64) -> Result<()> {
    let st = &ctx.accounts.farm_state;
    st.ensure_owner(&ctx.accounts.owner.key())?;

    let vault_balance = ctx.accounts.vault.amount;
    let ledger = &mut ctx.accounts.payee_ledger;
    ledger.add_payee(account, shares, vault_balance)?;

    emit!(PayeeAdded { account, shares });

    Ok(())
}

/// Accounts shared by the owner-only payee administration instructions.
#[derive(Accounts)]
pub struct ManagePayees<'info> {
    #[account(
        seeds = [FARM_SEED, farm_state.accepted_mint.as_ref()],
        bump = farm_state.bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    #[account(
        mut,
        seeds = [PAYEES_SEED, farm_state.key().as_ref()],
        bump
    )]
    pub payee_ledger: Box<Account<'info, PayeeLedger>>,

    #[account(
        seeds = [VAULT_SEED, farm_state.key().as_ref()],
        bump,
        constraint = vault.key() == farm_state.vault @ YieldFarmingError::InvalidTokenAccount,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct PayeeAdded {
    pub account: Pubkey,
    pub shares: u64,
}
