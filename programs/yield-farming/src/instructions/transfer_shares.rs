use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{FARM_SEED, PAYEES_SEED, VAULT_SEED};
use crate::error::YieldFarmingError;
use crate::instructions::{PayeeAdded, PayeeRemoved};
use crate::state::{FarmState, PayeeLedger};

/// Moves `amount` of the signer's shares to `to`. Total shares are unchanged.
pub fn transfer_shares(ctx: Context<TransferShares>, to: Pubkey, amount: u64) -> Result<()> {
    let from = ctx.accounts.payee.key();

    let vault_balance = ctx.accounts.vault.amount;
    let ledger = &mut ctx.accounts.payee_ledger;
    let outcome = ledger.transfer_shares(&from, to, amount, vault_balance)?;

    if outcome.recipient_added {
        emit!(PayeeAdded {
            account: to,
            shares: amount,
        });
    }
    emit!(SharesTransferred { from, to, amount });
    if outcome.transferrer_removed {
        emit!(PayeeRemoved { account: from });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct TransferShares<'info> {
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

    pub payee: Signer<'info>,
}

#[event]
pub struct SharesTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
