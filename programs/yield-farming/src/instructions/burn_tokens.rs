use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::FARM_SEED;
use crate::error::YieldFarmingError;
use crate::state::FarmState;
use crate::utils::allowance;

pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, YieldFarmingError::InvalidAmount);

    let farm_ai = ctx.accounts.farm_state.to_account_info();
    let farm_key = ctx.accounts.farm_state.key();
    let holder = ctx.accounts.holder.key();

    let st = &mut ctx.accounts.farm_state;
    let source = &ctx.accounts.holder_reward_account;
    require_keys_eq!(source.mint, st.reward_mint, YieldFarmingError::InvalidTokenMint);
    require_keys_eq!(source.owner, holder, YieldFarmingError::InvalidTokenAccount);
    allowance::ensure_allowance(
        Option::<Pubkey>::from(source.delegate),
        source.delegated_amount,
        &farm_key,
        amount,
    )?;

    let accepted_mint = st.accepted_mint;
    let bump = st.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[FARM_SEED, accepted_mint.as_ref(), &[bump]]];
    token::burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.reward_mint.to_account_info(),
                from: source.to_account_info(),
                authority: farm_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    st.record_burn(amount)?;

    emit!(YieldFarmingTokenBurn {
        account: holder,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm_state.accepted_mint.as_ref()],
        bump = farm_state.bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    #[account(
        mut,
        address = farm_state.reward_mint @ YieldFarmingError::InvalidTokenMint
    )]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub holder_reward_account: Box<Account<'info, TokenAccount>>,

    pub holder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct YieldFarmingTokenBurn {
    pub account: Pubkey,
    pub amount: u64,
}
