use anchor_lang::prelude::*;

use crate::constants::{FARM_SEED, TIME_LOCKS_SEED};
use crate::error::YieldFarmingError;
use crate::state::{FarmState, TokenTimeLock, TokenTimeLocks};

/// All time-locks of the signer; empty when it never deposited.
pub fn get_my_token_time_locks(ctx: Context<TimeLocksView>) -> Result<Vec<TokenTimeLock>> {
    Ok(ctx
        .accounts
        .time_locks
        .as_ref()
        .map(|list| list.locks.clone())
        .unwrap_or_default())
}

pub fn get_my_token_time_lock(ctx: Context<TimeLocksView>, index: u32) -> Result<TokenTimeLock> {
    let list = ctx
        .accounts
        .time_locks
        .as_ref()
        .ok_or(YieldFarmingError::IndexOutOfBounds)?;
    Ok(*list.get(index)?)
}

#[derive(Accounts)]
pub struct TimeLocksView<'info> {
    #[account(
        seeds = [FARM_SEED, farm_state.accepted_mint.as_ref()],
        bump = farm_state.bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    #[account(
        seeds = [TIME_LOCKS_SEED, farm_state.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub time_locks: Option<Account<'info, TokenTimeLocks>>,

    pub beneficiary: Signer<'info>,
}
