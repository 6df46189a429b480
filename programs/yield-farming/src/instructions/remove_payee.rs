use anchor_lang::prelude::*;

use crate::instructions::ManagePayees;

pub fn remove_payee(ctx: Context<ManagePayees>, account: Pubkey) -> Result<()> {
    ctx.accounts
        .farm_state
        .ensure_owner(&ctx.accounts.owner.key())?;

    let vault_balance = ctx.accounts.vault.amount;
    let removed = ctx
        .accounts
        .payee_ledger
        .remove_payee(&account, vault_balance)?;
    msg!(
        "Removed payee {} ({} shares, {} released, {} unpaid returned to the pool)",
        removed.account,
        removed.shares,
        removed.released,
        removed.owed
    );

    emit!(PayeeRemoved { account });

    Ok(())
}

#[event]
pub struct PayeeRemoved {
    pub account: Pubkey,
}
