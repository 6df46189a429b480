use anchor_lang::prelude::*;

use crate::constants::FARM_SEED;
use crate::state::FarmState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let st = &mut ctx.accounts.farm_state;
    let previous_owner = st.transfer_ownership(&caller, new_owner)?;

    msg!("Ownership transferred: {} -> {}", previous_owner, new_owner);

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm_state.accepted_mint.as_ref()],
        bump = farm_state.bump
    )]
    pub farm_state: Box<Account<'info, FarmState>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
