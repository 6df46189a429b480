use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{FarmConfig, TokenTimeLock};

declare_id!("7GkwH9CwVFD4XhGGPyjpDjY5rkqrdC4ZnyDsHw455EHH");

#[program]
pub mod yield_farming {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        config: FarmConfig,
        payees: Vec<Pubkey>,
        shares: Vec<u64>,
    ) -> Result<()> {
        instructions::initialize(ctx, config, payees, shares)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn release_tokens(ctx: Context<ReleaseTokens>, index: u32) -> Result<()> {
        instructions::release_tokens(ctx, index)
    }

    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn(ctx, amount)
    }

    pub fn get_my_token_time_locks(ctx: Context<TimeLocksView>) -> Result<Vec<TokenTimeLock>> {
        instructions::get_my_token_time_locks(ctx)
    }

    pub fn get_my_token_time_lock(ctx: Context<TimeLocksView>, index: u32) -> Result<TokenTimeLock> {
        instructions::get_my_token_time_lock(ctx, index)
    }

    pub fn transfer_shares(ctx: Context<TransferShares>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer_shares(ctx, to, amount)
    }

    pub fn add_payee(ctx: Context<ManagePayees>, account: Pubkey, shares: u64) -> Result<()> {
        instructions::add_payee(ctx, account, shares)
    }

    pub fn update_payee(ctx: Context<ManagePayees>, account: Pubkey, new_shares: u64) -> Result<()> {
        instructions::update_payee(ctx, account, new_shares)
    }

    pub fn remove_payee(ctx: Context<ManagePayees>, account: Pubkey) -> Result<()> {
        instructions::remove_payee(ctx, account)
    }

    pub fn release(ctx: Context<ReleasePayment>, account: Pubkey) -> Result<()> {
        instructions::release(ctx, account)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn payee(ctx: Context<PayeeLedgerView>, index: u32) -> Result<Pubkey> {
        instructions::payee(ctx, index)
    }

    pub fn shares(ctx: Context<PayeeLedgerView>, account: Pubkey) -> Result<u64> {
        instructions::shares(ctx, account)
    }

    pub fn released(ctx: Context<PayeeLedgerView>, account: Pubkey) -> Result<u64> {
        instructions::released(ctx, account)
    }

    pub fn total_shares(ctx: Context<PayeeLedgerView>) -> Result<u64> {
        instructions::total_shares(ctx)
    }

    pub fn total_released(ctx: Context<PayeeLedgerView>) -> Result<u64> {
        instructions::total_released(ctx)
    }
}
