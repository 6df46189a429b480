use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::error::YieldFarmingError;
use crate::utils::interest::{self, InterestRate};

/// Deployment parameters, fixed at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FarmConfig {
    /// Reward token name.
    pub name: String,
    /// Reward token symbol.
    pub symbol: String,
    /// Reward mint decimals.
    pub decimals: u8,
    pub interest: InterestRate,
    pub multiplier: u64,
    /// Lock duration applied to each deposit, in days.
    pub lock_time: i64,
}

impl FarmConfig {
    pub fn validate(&self) -> Result<(), YieldFarmingError> {
        if self.name.is_empty() || self.name.len() > MAX_NAME_LEN {
            return Err(YieldFarmingError::InvalidConfig);
        }
        if self.symbol.is_empty() || self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(YieldFarmingError::InvalidConfig);
        }
        self.interest.validate()?;
        if self.lock_time < 0 {
            return Err(YieldFarmingError::InvalidTimestamp);
        }
        Ok(())
    }
}

/// Farm state PDA, one per accepted mint.
#[account]
pub struct FarmState {
    /// Administrative authority over the payee ledger.
    pub owner: Pubkey,
    /// Token accepted for deposits.
    pub accepted_mint: Pubkey,
    /// Reward token minted on time-lock release (mint authority = this PDA).
    pub reward_mint: Pubkey,
    /// PDA-owned token account holding deposits until paid out to payees.
    pub vault: Pubkey,
    pub name: String,
    pub symbol: String,
    pub interest: InterestRate,
    pub multiplier: u64,
    /// Lock duration applied to each deposit, in days.
    pub lock_time: i64,
    pub total_deposited: u64,
    pub total_reward_minted: u64,
    pub total_burned: u64,
    pub bump: u8,
}

impl FarmState {
    pub const SIZE: usize =
        32 + // owner
        32 + // accepted_mint
        32 + // reward_mint
        32 + // vault
        4 + MAX_NAME_LEN + // name
        4 + MAX_SYMBOL_LEN + // symbol
        InterestRate::SIZE + // interest
        8 + // multiplier
        8 + // lock_time
        8 + // total_deposited
        8 + // total_reward_minted
        8 + // total_burned
        1;  // bump

    pub fn configure(
        &mut self,
        owner: Pubkey,
        accepted_mint: Pubkey,
        reward_mint: Pubkey,
        vault: Pubkey,
        config: FarmConfig,
        bump: u8,
    ) -> Result<(), YieldFarmingError> {
        config.validate()?;
        self.owner = owner;
        self.accepted_mint = accepted_mint;
        self.reward_mint = reward_mint;
        self.vault = vault;
        self.name = config.name;
        self.symbol = config.symbol;
        self.interest = config.interest;
        self.multiplier = config.multiplier;
        self.lock_time = config.lock_time;
        self.total_deposited = 0;
        self.total_reward_minted = 0;
        self.total_burned = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<(), YieldFarmingError> {
        if *caller != self.owner {
            return Err(YieldFarmingError::CallerNotOwner);
        }
        Ok(())
    }

    /// Hands ownership to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> Result<Pubkey, YieldFarmingError> {
        self.ensure_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(YieldFarmingError::NewOwnerIsZeroAddress);
        }
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    pub fn reward_for(&self, principal: u64) -> Result<u64, YieldFarmingError> {
        interest::reward_amount(principal, &self.interest, self.multiplier)
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<(), YieldFarmingError> {
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(YieldFarmingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_mint(&mut self, amount: u64) -> Result<(), YieldFarmingError> {
        self.total_reward_minted = self
            .total_reward_minted
            .checked_add(amount)
            .ok_or(YieldFarmingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_burn(&mut self, amount: u64) -> Result<(), YieldFarmingError> {
        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(YieldFarmingError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(multiplier: u64) -> FarmConfig {
        FarmConfig {
            name: "A Token name".to_string(),
            symbol: "ATS".to_string(),
            decimals: 9,
            interest: InterestRate::new(25, 10_000).unwrap(),
            multiplier,
            lock_time: 1,
        }
    }

    fn farm(owner: Pubkey, multiplier: u64) -> FarmState {
        let mut st = FarmState {
            owner: Pubkey::default(),
            accepted_mint: Pubkey::default(),
            reward_mint: Pubkey::default(),
            vault: Pubkey::default(),
            name: String::new(),
            symbol: String::new(),
            interest: InterestRate::default(),
            multiplier: 0,
            lock_time: 0,
            total_deposited: 0,
            total_reward_minted: 0,
            total_burned: 0,
            bump: 0,
        };
        st.configure(
            owner,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            config(multiplier),
            255,
        )
        .unwrap();
        st
    }

    #[test]
    fn ownership_transfer() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut st = farm(first, 1);

        assert_eq!(st.transfer_ownership(&first, second).unwrap(), first);
        assert_eq!(st.owner, second);

        // Former owner lost its rights.
        assert!(matches!(
            st.transfer_ownership(&first, first),
            Err(YieldFarmingError::CallerNotOwner)
        ));
        assert!(st.ensure_owner(&second).is_ok());
    }

    #[test]
    fn ownership_cannot_go_to_zero_key() {
        let owner = Pubkey::new_unique();
        let mut st = farm(owner, 1);
        assert!(matches!(
            st.transfer_ownership(&owner, Pubkey::default()),
            Err(YieldFarmingError::NewOwnerIsZeroAddress)
        ));
        assert_eq!(st.owner, owner);
    }

    #[test]
    fn config_validation() {
        assert!(config(1).validate().is_ok());

        let mut c = config(1);
        c.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(c.validate(), Err(YieldFarmingError::InvalidConfig)));

        let mut c = config(1);
        c.symbol = String::new();
        assert!(matches!(c.validate(), Err(YieldFarmingError::InvalidConfig)));

        let mut c = config(1);
        c.interest.denominator = 0;
        assert!(matches!(
            c.validate(),
            Err(YieldFarmingError::InvalidInterestRate)
        ));

        let mut c = config(1);
        c.lock_time = -1;
        assert!(matches!(
            c.validate(),
            Err(YieldFarmingError::InvalidTimestamp)
        ));
    }

    #[test]
    fn reward_uses_configured_parameters() {
        let st = farm(Pubkey::new_unique(), 1_000_000_000_000);
        assert_eq!(st.reward_for(1000).unwrap(), 997_506_234_413_965);

        let idle = farm(Pubkey::new_unique(), 0);
        assert_eq!(idle.reward_for(1000).unwrap(), 0);
    }

    #[test]
    fn totals_accumulate() {
        let mut st = farm(Pubkey::new_unique(), 1);
        st.record_deposit(333).unwrap();
        st.record_deposit(667).unwrap();
        st.record_mint(10).unwrap();
        st.record_burn(1).unwrap();
        assert_eq!(st.total_deposited, 1000);
        assert_eq!(st.total_reward_minted, 10);
        assert_eq!(st.total_burned, 1);

        st.total_burned = u64::MAX;
        assert!(matches!(
            st.record_burn(1),
            Err(YieldFarmingError::MathOverflow)
        ));
    }
}
