use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{FARM_SEED, MAX_PAYEES, PAYEES_SEED, REWARD_MINT_SEED, VAULT_SEED};
use crate::instructions::{OwnershipTransferred, PayeeAdded};
use crate::state::{FarmConfig, FarmState, PayeeLedger};
use crate::utils::records::PayeeRecords;

pub fn initialize(
    ctx: Context<Initialize>,
    config: FarmConfig,
    payees: Vec<Pubkey>,
    shares: Vec<u64>,
) -> Result<()> {
    config.validate()?;
    let records = PayeeRecords::from_lists(&payees, &shares)?;

    let farm_key = ctx.accounts.farm_state.key();
    let owner = ctx.accounts.owner.key();
    let accepted_mint = ctx.accounts.accepted_mint.key();
    let reward_mint = ctx.accounts.reward_mint.key();
    let vault = ctx.accounts.vault.key();

    let ledger = &mut ctx.accounts.payee_ledger;
    ledger.initialize(farm_key, &records)?;

    let st = &mut ctx.accounts.farm_state;
    st.configure(
        owner,
        accepted_mint,
        reward_mint,
        vault,
        config,
        ctx.bumps.farm_state,
    )?;

    msg!(
        "Farm {} initialized: {} payees, {} total shares",
        farm_key,
        ledger.len(),
        ledger.total_shares
    );

    emit!(FarmInitialized {
        farm: farm_key,
        owner,
        accepted_mint,
        reward_mint,
        name: st.name.clone(),
        symbol: st.symbol.clone(),
        interest_numerator: st.interest.numerator,
        interest_denominator: st.interest.denominator,
        multiplier: st.multiplier,
        lock_time: st.lock_time,
    });
    for r in records.records() {
        emit!(PayeeAdded {
            account: r.account,
            shares: r.shares,
        });
    }
    emit!(OwnershipTransferred {
        previous_owner: Pubkey::default(),
        new_owner: owner,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(config: FarmConfig)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + FarmState::SIZE,
        seeds = [FARM_SEED, accepted_mint.key().as_ref()],
        bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    #[account(
        init,
        payer = owner,
        space = PayeeLedger::space(MAX_PAYEES),
        seeds = [PAYEES_SEED, farm_state.key().as_ref()],
        bump
    )]
    pub payee_ledger: Box<Account<'info, PayeeLedger>>,

    #[account(
        init,
        payer = owner,
        mint::decimals = config.decimals,
        mint::authority = farm_state,
        seeds = [REWARD_MINT_SEED, farm_state.key().as_ref()],
        bump
    )]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = owner,
        token::mint = accepted_mint,
        token::authority = farm_state,
        seeds = [VAULT_SEED, farm_state.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub accepted_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct FarmInitialized {
    pub farm: Pubkey,
    pub owner: Pubkey,
    pub accepted_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub interest_numerator: u64,
    pub interest_denominator: u64,
    pub multiplier: u64,
    pub lock_time: i64,
}
