use anchor_lang::prelude::*;

use crate::instructions::{ManagePayees, PayeeRemoved};
use crate::state::PayeeChange;

/// Sets `account` to `new_shares`. Zero shares removes the payee.
pub fn update_payee(ctx: Context<ManagePayees>, account: Pubkey, new_shares: u64) -> Result<()> {
    ctx.accounts
        .farm_state
        .ensure_owner(&ctx.accounts.owner.key())?;

    let vault_balance = ctx.accounts.vault.amount;
    let ledger = &mut ctx.accounts.payee_ledger;
    match ledger.update_payee(&account, new_shares, vault_balance)? {
        PayeeChange::Updated { delta } => emit!(PayeeUpdated { account, delta }),
        PayeeChange::Removed => emit!(PayeeRemoved { account }),
    }

    Ok(())
}

#[event]
pub struct PayeeUpdated {
    pub account: Pubkey,
    /// Signed change applied to the payee's shares.
    pub delta: i64,
}
