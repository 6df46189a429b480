use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{FARM_SEED, PAYEES_SEED, VAULT_SEED};
use crate::error::YieldFarmingError;
use crate::state::{FarmState, PayeeLedger};

/// Pays `account` its pro-rata share of everything the vault has received.
/// Permissionless: anyone may crank a payee's release.
pub fn release(ctx: Context<ReleasePayment>, account: Pubkey) -> Result<()> {
    let farm_ai = ctx.accounts.farm_state.to_account_info();
    let st = &ctx.accounts.farm_state;

    let vault_balance = ctx.accounts.vault.amount;
    let ledger = &mut ctx.accounts.payee_ledger;
    let payment = ledger.release(&account, vault_balance)?;

    let destination = &ctx.accounts.payee_token_account;
    require_keys_eq!(destination.mint, st.accepted_mint, YieldFarmingError::InvalidTokenMint);
    require_keys_eq!(destination.owner, account, YieldFarmingError::InvalidTokenAccount);

    let accepted_mint = st.accepted_mint;
    let bump = st.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[FARM_SEED, accepted_mint.as_ref(), &[bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: destination.to_account_info(),
                authority: farm_ai,
            },
            signer_seeds,
        ),
        payment,
    )?;

    msg!(
        "Released {} to payee {} (total released {})",
        payment,
        account,
        ledger.total_released
    );

    emit!(PaymentReleased {
        to: account,
        amount: payment,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReleasePayment<'info> {
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
        mut,
        seeds = [VAULT_SEED, farm_state.key().as_ref()],
        bump,
        constraint = vault.key() == farm_state.vault @ YieldFarmingError::InvalidTokenAccount,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payee_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PaymentReleased {
    pub to: Pubkey,
    pub amount: u64,
}
