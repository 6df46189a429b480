use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_TIME_LOCKS;
use crate::error::YieldFarmingError;
use crate::state::FarmState;
use crate::utils::time;

/// One locked deposit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenTimeLock {
    pub beneficiary: Pubkey,
    /// Principal deposited (accepted token units).
    pub amount: u64,
    pub created_at: i64,
    pub release_time: i64,
    pub released: bool,
}

impl TokenTimeLock {
    pub const SIZE: usize = 32 + 8 + 8 + 8 + 1;

    /// Marks the lock released and returns the reward to mint.
    pub fn release(&mut self, now_ts: i64, farm: &FarmState) -> Result<u64, YieldFarmingError> {
        time::ensure_unlocked(now_ts, self.release_time)?;
        if self.released {
            return Err(YieldFarmingError::NoTokensToRelease);
        }
        let reward = farm.reward_for(self.amount)?;
        if reward == 0 {
            return Err(YieldFarmingError::NoTokensToRelease);
        }
        self.released = true;
        Ok(reward)
    }
}

/// Per-beneficiary list of time-locks, in deposit order.
#[account]
pub struct TokenTimeLocks {
    pub farm: Pubkey,
    pub beneficiary: Pubkey,
    pub locks: Vec<TokenTimeLock>,
}

impl TokenTimeLocks {
    pub const fn space(capacity: usize) -> usize {
        8 + 32 + 32 + 4 + capacity * TokenTimeLock::SIZE
    }

    /// Binds a freshly created list to its owner; no-op on later deposits.
    pub fn bind(&mut self, farm: Pubkey, beneficiary: Pubkey) -> Result<(), YieldFarmingError> {
        if self.beneficiary == Pubkey::default() {
            self.farm = farm;
            self.beneficiary = beneficiary;
            return Ok(());
        }
        if self.farm != farm || self.beneficiary != beneficiary {
            return Err(YieldFarmingError::InvalidTokenAccount);
        }
        Ok(())
    }

    /// Appends a lock over `amount` opening `farm.lock_time` days after
    /// `now_ts`. Returns its index.
    ///
    /// The reward is computed up front: a principal whose reward cannot be
    /// minted is refused here rather than stuck at release.
    pub fn lock(
        &mut self,
        amount: u64,
        now_ts: i64,
        farm: &FarmState,
    ) -> Result<u32, YieldFarmingError> {
        if amount == 0 {
            return Err(YieldFarmingError::InvalidAmount);
        }
        if self.locks.len() >= MAX_TIME_LOCKS {
            return Err(YieldFarmingError::TimeLockListFull);
        }
        farm.reward_for(amount)?;
        let release_time = time::release_timestamp(now_ts, farm.lock_time)?;
        let index = u32::try_from(self.locks.len()).map_err(|_| YieldFarmingError::MathOverflow)?;
        self.locks.push(TokenTimeLock {
            beneficiary: self.beneficiary,
            amount,
            created_at: now_ts,
            release_time,
            released: false,
        });
        Ok(index)
    }

    pub fn get(&self, index: u32) -> Result<&TokenTimeLock, YieldFarmingError> {
        self.locks
            .get(index as usize)
            .ok_or(YieldFarmingError::IndexOutOfBounds)
    }

    pub fn release(
        &mut self,
        index: u32,
        now_ts: i64,
        farm: &FarmState,
    ) -> Result<u64, YieldFarmingError> {
        self.locks
            .get_mut(index as usize)
            .ok_or(YieldFarmingError::IndexOutOfBounds)?
            .release(now_ts, farm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_RETURN_DATA, SECONDS_PER_DAY};
    use crate::state::FarmConfig;
    use crate::utils::interest::InterestRate;

    const DEPLOY: i64 = 1;
    const DEPOSIT: i64 = DEPLOY + SECONDS_PER_DAY;
    const UNLOCK: i64 = DEPOSIT + SECONDS_PER_DAY;
    const LOCK_TIME: i64 = 1;

    fn farm(multiplier: u64) -> FarmState {
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
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            FarmConfig {
                name: "A Token name".to_string(),
                symbol: "ATS".to_string(),
                decimals: 9,
                interest: InterestRate::new(25, 10_000).unwrap(),
                multiplier,
                lock_time: LOCK_TIME,
            },
            255,
        )
        .unwrap();
        st
    }

    fn locks_for(beneficiary: Pubkey) -> TokenTimeLocks {
        let mut locks = TokenTimeLocks {
            farm: Pubkey::default(),
            beneficiary: Pubkey::default(),
            locks: Vec::new(),
        };
        locks.bind(Pubkey::new_unique(), beneficiary).unwrap();
        locks
    }

    #[test]
    fn no_deposit_is_out_of_bounds() {
        let st = farm(1_000_000_000_000);
        let mut locks = locks_for(Pubkey::new_unique());
        assert!(matches!(
            locks.get(0),
            Err(YieldFarmingError::IndexOutOfBounds)
        ));
        assert!(matches!(
            locks.release(0, UNLOCK, &st),
            Err(YieldFarmingError::IndexOutOfBounds)
        ));
    }

    #[test]
    fn single_deposit_lifecycle() {
        let st = farm(1_000_000_000_000);
        let me = Pubkey::new_unique();
        let mut locks = locks_for(me);

        assert_eq!(locks.lock(1000, DEPOSIT, &st).unwrap(), 0);
        let lock = locks.get(0).unwrap();
        assert_eq!(lock.beneficiary, me);
        assert_eq!(lock.release_time, UNLOCK);
        assert!(matches!(
            locks.get(1),
            Err(YieldFarmingError::IndexOutOfBounds)
        ));

        assert!(matches!(
            locks.release(0, DEPOSIT, &st),
            Err(YieldFarmingError::BeforeReleaseTime)
        ));
        assert!(matches!(
            locks.release(0, DEPOSIT + 1, &st),
            Err(YieldFarmingError::BeforeReleaseTime)
        ));
        assert!(matches!(
            locks.release(0, UNLOCK - 1, &st),
            Err(YieldFarmingError::BeforeReleaseTime)
        ));
        assert_eq!(locks.release(0, UNLOCK, &st).unwrap(), 997_506_234_413_965);
        assert!(locks.get(0).unwrap().released);

        assert!(matches!(
            locks.release(0, UNLOCK, &st),
            Err(YieldFarmingError::NoTokensToRelease)
        ));
    }

    #[test]
    fn two_deposits_release_independently() {
        let st = farm(1_000_000_000_000);
        let mut locks = locks_for(Pubkey::new_unique());
        locks.lock(333, DEPOSIT, &st).unwrap();
        locks.lock(667, DEPOSIT, &st).unwrap();

        assert_eq!(locks.release(1, UNLOCK, &st).unwrap(), 665_336_658_354_115);
        assert!(!locks.get(0).unwrap().released);
        assert_eq!(locks.release(0, UNLOCK, &st).unwrap(), 332_169_576_059_850);
    }

    #[test]
    fn zero_multiplier_has_nothing_to_release() {
        let st = farm(0);
        let mut locks = locks_for(Pubkey::new_unique());
        locks.lock(1000, DEPLOY, &st).unwrap();
        assert!(matches!(
            locks.release(0, DEPOSIT, &st),
            Err(YieldFarmingError::NoTokensToRelease)
        ));
        // The failed attempt left the lock untouched.
        assert!(!locks.get(0).unwrap().released);
    }

    #[test]
    fn lock_rejects_zero_amount_and_full_list() {
        let st = farm(1_000_000_000_000);
        let mut locks = locks_for(Pubkey::new_unique());
        assert!(matches!(
            locks.lock(0, DEPOSIT, &st),
            Err(YieldFarmingError::InvalidAmount)
        ));
        for _ in 0..MAX_TIME_LOCKS {
            locks.lock(1, DEPOSIT, &st).unwrap();
        }
        assert!(matches!(
            locks.lock(1, DEPOSIT, &st),
            Err(YieldFarmingError::TimeLockListFull)
        ));
    }

    #[test]
    fn unmintable_reward_is_refused_at_deposit() {
        let st = farm(1_000_000_000_000);
        let mut locks = locks_for(Pubkey::new_unique());
        assert!(matches!(
            locks.lock(1_000_000_000, DEPOSIT, &st),
            Err(YieldFarmingError::MathOverflow)
        ));
        assert!(locks.locks.is_empty());

        // Largest principal whose reward still fits in a u64.
        assert!(matches!(
            locks.lock(18_492_861, DEPOSIT, &st),
            Err(YieldFarmingError::MathOverflow)
        ));
        let idx = locks.lock(18_492_860, DEPOSIT, &st).unwrap();
        assert!(locks.release(idx, UNLOCK, &st).is_ok());
    }

    #[test]
    fn full_list_fits_in_return_data() {
        let st = farm(1_000_000_000_000);
        let mut locks = locks_for(Pubkey::new_unique());
        for _ in 0..MAX_TIME_LOCKS {
            locks.lock(1, DEPOSIT, &st).unwrap();
        }
        let mut encoded = Vec::new();
        AnchorSerialize::serialize(&locks.locks, &mut encoded).unwrap();
        assert_eq!(encoded.len(), 4 + MAX_TIME_LOCKS * TokenTimeLock::SIZE);
        assert!(encoded.len() <= MAX_RETURN_DATA);
        assert!(4 + (MAX_TIME_LOCKS + 1) * TokenTimeLock::SIZE > MAX_RETURN_DATA);
    }

    #[test]
    fn bind_is_sticky() {
        let me = Pubkey::new_unique();
        let mut locks = locks_for(me);
        let farm_key = locks.farm;
        assert!(locks.bind(farm_key, me).is_ok());
        assert!(matches!(
            locks.bind(farm_key, Pubkey::new_unique()),
            Err(YieldFarmingError::InvalidTokenAccount)
        ));
    }
}
