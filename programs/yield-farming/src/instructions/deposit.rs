use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{FARM_SEED, MAX_TIME_LOCKS, TIME_LOCKS_SEED, VAULT_SEED};
use crate::error::YieldFarmingError;
use crate::state::{FarmState, TokenTimeLocks};
use crate::utils::allowance;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, YieldFarmingError::InvalidAmount);

    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let farm_ai = ctx.accounts.farm_state.to_account_info();
    let farm_key = ctx.accounts.farm_state.key();
    let depositor = ctx.accounts.depositor.key();

    let st = &mut ctx.accounts.farm_state;
    let source = &ctx.accounts.depositor_token_account;
    require_keys_eq!(source.mint, st.accepted_mint, YieldFarmingError::InvalidTokenMint);
    require_keys_eq!(source.owner, depositor, YieldFarmingError::InvalidTokenAccount);
    allowance::ensure_allowance(
        Option::<Pubkey>::from(source.delegate),
        source.delegated_amount,
        &farm_key,
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let time_locks = &mut ctx.accounts.time_locks;
    time_locks.bind(farm_key, depositor)?;
    let index = time_locks.lock(amount, now, st)?;
    let release_time = time_locks.get(index)?.release_time;

    let accepted_mint = st.accepted_mint;
    let bump = st.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[FARM_SEED, accepted_mint.as_ref(), &[bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: source.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: farm_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    st.record_deposit(amount)?;

    msg!(
        "Deposit #{} of {} locked until {}",
        index,
        amount,
        release_time
    );

    emit!(AcceptedTokenDeposit { depositor, amount });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm_state.accepted_mint.as_ref()],
        bump = farm_state.bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = TokenTimeLocks::space(MAX_TIME_LOCKS),
        seeds = [TIME_LOCKS_SEED, farm_state.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub time_locks: Box<Account<'info, TokenTimeLocks>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, farm_state.key().as_ref()],
        bump,
        constraint = vault.key() == farm_state.vault @ YieldFarmingError::InvalidTokenAccount,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub depositor_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AcceptedTokenDeposit {
    pub depositor: Pubkey,
    pub amount: u64,
}
