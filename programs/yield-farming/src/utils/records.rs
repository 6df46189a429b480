//! Payee input records: zips the parallel account/share lists handed to
//! `initialize`.

use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::YieldFarmingError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayeeRecord {
    pub account: Pubkey,
    pub shares: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayeeRecords {
    records: Vec<PayeeRecord>,
}

impl PayeeRecords {
    pub fn from_lists(accounts: &[Pubkey], shares: &[u64]) -> Result<Self, YieldFarmingError> {
        if accounts.len() != shares.len() {
            return Err(YieldFarmingError::PayeesSharesLengthMismatch);
        }
        let records = accounts
            .iter()
            .zip(shares.iter())
            .map(|(account, shares)| PayeeRecord {
                account: *account,
                shares: *shares,
            })
            .collect();
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PayeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_shares(&self) -> Result<u64, YieldFarmingError> {
        self.records.iter().try_fold(0u64, |acc, r| {
            acc.checked_add(r.shares)
                .ok_or(YieldFarmingError::MathOverflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zips_parallel_lists_in_order() {
        let keys = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
        let records = PayeeRecords::from_lists(&keys, &[10, 30, 60]).unwrap();

        assert_eq!(records.len(), 3);
        let zipped: Vec<(Pubkey, u64)> = records
            .records()
            .iter()
            .map(|r| (r.account, r.shares))
            .collect();
        assert_eq!(zipped, vec![(keys[0], 10), (keys[1], 30), (keys[2], 60)]);
        assert_eq!(records.total_shares().unwrap(), 100);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let keys = [Pubkey::new_unique(), Pubkey::new_unique()];
        assert!(matches!(
            PayeeRecords::from_lists(&keys, &[100]),
            Err(YieldFarmingError::PayeesSharesLengthMismatch)
        ));
    }

    #[test]
    fn empty_lists_are_accepted_here() {
        let records = PayeeRecords::from_lists(&[], &[]).unwrap();
        assert!(records.is_empty());
        assert_eq!(records.total_shares().unwrap(), 0);
    }

    #[test]
    fn total_shares_overflow() {
        let keys = [Pubkey::new_unique(), Pubkey::new_unique()];
        let records = PayeeRecords::from_lists(&keys, &[u64::MAX, 1]).unwrap();
        assert!(matches!(
            records.total_shares(),
            Err(YieldFarmingError::MathOverflow)
        ));
    }
}
