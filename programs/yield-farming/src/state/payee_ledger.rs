use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{MAX_PAYEES, PER_SHARE_SCALE};
use crate::error::YieldFarmingError;
use crate::utils::records::PayeeRecords;

/// A single payee stored in the payee ledger PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayeeEntry {
    pub account: Pubkey,
    pub shares: u64,
    /// Accepted tokens already paid out to this payee.
    pub released: u64,
    /// Earned and not yet paid out.
    pub owed: u64,
    /// Ledger `per_share` that `owed` was last brought up to.
    pub last_per_share: u128,
}

impl PayeeEntry {
    pub const SIZE: usize = 32 + 8 + 8 + 8 + 16;

    /// `owed` plus what the entry's shares earned between `last_per_share`
    /// and `per_share`.
    fn earned(&self, per_share: u128) -> Result<u64, YieldFarmingError> {
        let step = per_share
            .checked_sub(self.last_per_share)
            .ok_or(YieldFarmingError::MathOverflow)?;
        let accrued = (self.shares as u128)
            .checked_mul(step)
            .ok_or(YieldFarmingError::MathOverflow)?
            / PER_SHARE_SCALE;
        u64::try_from(accrued)
            .ok()
            .and_then(|a| self.owed.checked_add(a))
            .ok_or(YieldFarmingError::MathOverflow)
    }
}

/// Outcome of `update_payee`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayeeChange {
    Updated { delta: i64 },
    Removed,
}

/// Outcome of `transfer_shares`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareTransfer {
    /// Recipient was not a payee before the transfer.
    pub recipient_added: bool,
    /// Transferrer gave away all of its shares and left the ledger.
    pub transferrer_removed: bool,
}

/// Weighted payee list (payment splitter), insertion ordered.
///
/// Inflows to the vault are spread over the shares present when they are
/// first observed: every share change syncs `per_share` against the vault
/// balance before it applies, so a payee only earns on what arrived while it
/// held the shares.
#[account]
pub struct PayeeLedger {
    pub farm: Pubkey,
    pub total_shares: u64,
    pub total_released: u64,
    /// Part of the total received already spread into `per_share`.
    pub total_accounted: u64,
    /// Cumulative payout per share, scaled by `PER_SHARE_SCALE`.
    pub per_share: u128,
    pub payees: Vec<PayeeEntry>,
}

impl PayeeLedger {
    /// Space for discriminator + header + `capacity` entries.
    pub const fn space(capacity: usize) -> usize {
        8 + 32 + 8 + 8 + 8 + 16 + 4 + capacity * PayeeEntry::SIZE
    }

    pub fn initialize(
        &mut self,
        farm: Pubkey,
        records: &PayeeRecords,
    ) -> Result<(), YieldFarmingError> {
        if records.is_empty() {
            return Err(YieldFarmingError::NoPayees);
        }
        records.total_shares()?;
        self.farm = farm;
        self.total_shares = 0;
        self.total_released = 0;
        self.total_accounted = 0;
        self.per_share = 0;
        self.payees = Vec::with_capacity(records.len());
        for r in records.records() {
            // The vault is created empty alongside the ledger.
            self.add_payee(r.account, r.shares, 0)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.payees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payees.is_empty()
    }

    fn position(&self, account: &Pubkey) -> Option<usize> {
        self.payees.iter().position(|p| p.account == *account)
    }

    pub fn get(&self, account: &Pubkey) -> Option<&PayeeEntry> {
        self.payees.iter().find(|p| p.account == *account)
    }

    pub fn shares_of(&self, account: &Pubkey) -> u64 {
        self.get(account).map(|p| p.shares).unwrap_or(0)
    }

    pub fn released_of(&self, account: &Pubkey) -> u64 {
        self.get(account).map(|p| p.released).unwrap_or(0)
    }

    pub fn payee(&self, index: u32) -> Result<Pubkey, YieldFarmingError> {
        self.payees
            .get(index as usize)
            .map(|p| p.account)
            .ok_or(YieldFarmingError::IndexOutOfBounds)
    }

    /// `per_share` and `total_accounted` once everything the vault received
    /// since the last sync is spread over the current shares. With no shares
    /// the inflow waits for the next payee.
    fn projected(&self, vault_balance: u64) -> Result<(u128, u64), YieldFarmingError> {
        if self.total_shares == 0 {
            return Ok((self.per_share, self.total_accounted));
        }
        let received = vault_balance
            .checked_add(self.total_released)
            .ok_or(YieldFarmingError::MathOverflow)?;
        let fresh = received.saturating_sub(self.total_accounted);
        let step = (fresh as u128)
            .checked_mul(PER_SHARE_SCALE)
            .ok_or(YieldFarmingError::MathOverflow)?
            / (self.total_shares as u128);
        let per_share = self
            .per_share
            .checked_add(step)
            .ok_or(YieldFarmingError::MathOverflow)?;
        Ok((per_share, self.total_accounted + fresh))
    }

    fn sync(&mut self, vault_balance: u64) -> Result<(), YieldFarmingError> {
        let (per_share, accounted) = self.projected(vault_balance)?;
        self.per_share = per_share;
        self.total_accounted = accounted;
        Ok(())
    }

    /// Folds what `payees[idx]` earned so far into its `owed`.
    fn settle(&mut self, idx: usize) -> Result<(), YieldFarmingError> {
        let owed = self.payees[idx].earned(self.per_share)?;
        self.payees[idx].owed = owed;
        self.payees[idx].last_per_share = self.per_share;
        Ok(())
    }

    pub fn add_payee(
        &mut self,
        account: Pubkey,
        shares: u64,
        vault_balance: u64,
    ) -> Result<(), YieldFarmingError> {
        if account == Pubkey::default() {
            return Err(YieldFarmingError::ZeroAddress);
        }
        if shares == 0 {
            return Err(YieldFarmingError::ZeroShares);
        }
        if self.position(&account).is_some() {
            return Err(YieldFarmingError::AlreadyPayee);
        }
        if self.payees.len() >= MAX_PAYEES {
            return Err(YieldFarmingError::PayeeListFull);
        }
        let total = self
            .total_shares
            .checked_add(shares)
            .ok_or(YieldFarmingError::MathOverflow)?;

        self.sync(vault_balance)?;
        self.payees.push(PayeeEntry {
            account,
            shares,
            released: 0,
            owed: 0,
            last_per_share: self.per_share,
        });
        self.total_shares = total;
        Ok(())
    }

    /// Removes `account`, compacting the list in order. Returns the removed
    /// entry; its unpaid `owed` goes back to the remaining payees.
    pub fn remove_payee(
        &mut self,
        account: &Pubkey,
        vault_balance: u64,
    ) -> Result<PayeeEntry, YieldFarmingError> {
        if self.payees.is_empty() {
            return Err(YieldFarmingError::EmptyPayeeList);
        }
        let idx = self
            .position(account)
            .ok_or(YieldFarmingError::PayeeNotFound)?;

        self.sync(vault_balance)?;
        self.settle(idx)?;
        let removed = self.payees.remove(idx);
        self.total_shares = self
            .total_shares
            .checked_sub(removed.shares)
            .ok_or(YieldFarmingError::MathOverflow)?;
        self.total_accounted = self
            .total_accounted
            .checked_sub(removed.owed)
            .ok_or(YieldFarmingError::MathOverflow)?;
        Ok(removed)
    }

    pub fn update_payee(
        &mut self,
        account: &Pubkey,
        new_shares: u64,
        vault_balance: u64,
    ) -> Result<PayeeChange, YieldFarmingError> {
        let idx = self.position(account).ok_or(YieldFarmingError::NotAPayee)?;
        let current = self.payees[idx].shares;
        if current == new_shares {
            return Err(YieldFarmingError::SameShares);
        }
        if new_shares == 0 {
            self.remove_payee(account, vault_balance)?;
            return Ok(PayeeChange::Removed);
        }

        let delta = i64::try_from(new_shares as i128 - current as i128)
            .map_err(|_| YieldFarmingError::MathOverflow)?;
        let total = self
            .total_shares
            .checked_sub(current)
            .and_then(|t| t.checked_add(new_shares))
            .ok_or(YieldFarmingError::MathOverflow)?;

        self.sync(vault_balance)?;
        self.settle(idx)?;
        self.payees[idx].shares = new_shares;
        self.total_shares = total;
        Ok(PayeeChange::Updated { delta })
    }

    /// Moves `amount` shares from `from` to `to`, creating `to` if needed.
    /// The same fraction of `from`'s unpaid earnings travels with them.
    /// Total shares are unchanged.
    pub fn transfer_shares(
        &mut self,
        from: &Pubkey,
        to: Pubkey,
        amount: u64,
        vault_balance: u64,
    ) -> Result<ShareTransfer, YieldFarmingError> {
        let from_idx = self
            .position(from)
            .ok_or(YieldFarmingError::TransferrerNotPayee)?;
        if amount == 0 {
            return Err(YieldFarmingError::ZeroShares);
        }
        if to == Pubkey::default() {
            return Err(YieldFarmingError::ZeroAddress);
        }
        if to == *from {
            return Err(YieldFarmingError::SelfTransfer);
        }
        let from_shares = self.payees[from_idx].shares;
        if from_shares < amount {
            return Err(YieldFarmingError::NotEnoughShares);
        }

        let transferrer_removed = from_shares == amount;
        let to_idx = self.position(&to);
        match to_idx {
            Some(i) => {
                self.payees[i]
                    .shares
                    .checked_add(amount)
                    .ok_or(YieldFarmingError::MathOverflow)?;
            }
            // A departing transferrer frees its own slot.
            None if !transferrer_removed && self.payees.len() >= MAX_PAYEES => {
                return Err(YieldFarmingError::PayeeListFull);
            }
            None => {}
        }

        self.sync(vault_balance)?;
        self.settle(from_idx)?;
        let from_owed = self.payees[from_idx].owed;
        let moved_owed = if transferrer_removed {
            from_owed
        } else {
            u64::try_from(from_owed as u128 * amount as u128 / from_shares as u128)
                .map_err(|_| YieldFarmingError::MathOverflow)?
        };

        match to_idx {
            Some(i) => {
                self.settle(i)?;
                let recipient = &mut self.payees[i];
                recipient.shares += amount;
                recipient.owed = recipient
                    .owed
                    .checked_add(moved_owed)
                    .ok_or(YieldFarmingError::MathOverflow)?;
            }
            None => self.payees.push(PayeeEntry {
                account: to,
                shares: amount,
                released: 0,
                owed: moved_owed,
                last_per_share: self.per_share,
            }),
        }

        if transferrer_removed {
            self.payees.remove(from_idx);
        } else {
            let transferrer = &mut self.payees[from_idx];
            transferrer.shares = from_shares - amount;
            transferrer.owed = from_owed - moved_owed;
        }

        Ok(ShareTransfer {
            recipient_added: to_idx.is_none(),
            transferrer_removed,
        })
    }

    /// Amount `account` could release right now against `vault_balance`.
    pub fn pending_payment(
        &self,
        account: &Pubkey,
        vault_balance: u64,
    ) -> Result<u64, YieldFarmingError> {
        let entry = self.get(account).ok_or(YieldFarmingError::AccountNotPayee)?;
        let (per_share, _) = self.projected(vault_balance)?;
        entry.earned(per_share)
    }

    /// Books a payout for `account` against the tokens currently held by the
    /// vault. Returns the amount to transfer.
    pub fn release(
        &mut self,
        account: &Pubkey,
        vault_balance: u64,
    ) -> Result<u64, YieldFarmingError> {
        let payment = self.pending_payment(account, vault_balance)?;
        if payment == 0 {
            return Err(YieldFarmingError::NotDuePayment);
        }
        let total_released = self
            .total_released
            .checked_add(payment)
            .ok_or(YieldFarmingError::MathOverflow)?;
        let idx = self
            .position(account)
            .ok_or(YieldFarmingError::AccountNotPayee)?;
        let released = self.payees[idx]
            .released
            .checked_add(payment)
            .ok_or(YieldFarmingError::MathOverflow)?;

        self.sync(vault_balance)?;
        let entry = &mut self.payees[idx];
        entry.owed = 0;
        entry.last_per_share = self.per_share;
        entry.released = released;
        self.total_released = total_released;
        Ok(payment)
    }
}
