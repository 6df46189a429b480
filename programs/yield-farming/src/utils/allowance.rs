//! Spend checks against an SPL delegate approval, the allowance model used by
//! `deposit` and `burn`: the owner approves the farm PDA, the farm moves funds.

use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::YieldFarmingError;

/// Amount `spender` may move from an account with the given delegation.
pub fn allowance(delegate: Option<Pubkey>, delegated_amount: u64, spender: &Pubkey) -> u64 {
    match delegate {
        Some(d) if d == *spender => delegated_amount,
        _ => 0,
    }
}

pub fn ensure_allowance(
    delegate: Option<Pubkey>,
    delegated_amount: u64,
    spender: &Pubkey,
    amount: u64,
) -> Result<(), YieldFarmingError> {
    if allowance(delegate, delegated_amount, spender) < amount {
        return Err(YieldFarmingError::InsufficientAllowance);
    }
    Ok(())
}
