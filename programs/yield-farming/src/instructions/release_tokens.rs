use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{FARM_SEED, TIME_LOCKS_SEED};
use crate::error::YieldFarmingError;
use crate::state::{FarmState, TokenTimeLocks};

pub fn release_tokens(ctx: Context<ReleaseTokens>, index: u32) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let farm_ai = ctx.accounts.farm_state.to_account_info();
    let beneficiary = ctx.accounts.beneficiary.key();
    let now = Clock::get()?.unix_timestamp;

    let st = &mut ctx.accounts.farm_state;

    // A caller that never deposited has no list: every index is out of bounds.
    let time_locks = ctx
        .accounts
        .time_locks
        .as_mut()
        .ok_or(YieldFarmingError::IndexOutOfBounds)?;
    let reward = time_locks.release(index, now, st)?;

    let destination = &ctx.accounts.beneficiary_reward_account;
    require_keys_eq!(destination.mint, st.reward_mint, YieldFarmingError::InvalidTokenMint);
    require_keys_eq!(destination.owner, beneficiary, YieldFarmingError::InvalidTokenAccount);

    let accepted_mint = st.accepted_mint;
    let bump = st.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[FARM_SEED, accepted_mint.as_ref(), &[bump]]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.reward_mint.to_account_info(),
                to: destination.to_account_info(),
                authority: farm_ai,
            },
            signer_seeds,
        ),
        reward,
    )?;

    st.record_mint(reward)?;

    msg!("Time-lock #{} released: minted {}", index, reward);

    emit!(YieldFarmingTokenRelease {
        beneficiary,
        amount: reward,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReleaseTokens<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm_state.accepted_mint.as_ref()],
        bump = farm_state.bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    #[account(
        mut,
        seeds = [TIME_LOCKS_SEED, farm_state.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub time_locks: Option<Account<'info, TokenTimeLocks>>,

    #[account(
        mut,
        address = farm_state.reward_mint @ YieldFarmingError::InvalidTokenMint
    )]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub beneficiary_reward_account: Box<Account<'info, TokenAccount>>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct YieldFarmingTokenRelease {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
