//! Reward math for released time-locks.
//!
//! reward = principal * multiplier / (1 + numerator / denominator)
//!        = principal * multiplier * denominator / (denominator + numerator)
//!
//! Evaluated as an exact rational in u128 and rounded half-up to whole reward
//! token units, so results do not depend on evaluation order.

use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::YieldFarmingError;

/// Interest rate as an exact fraction `numerator / denominator`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterestRate {
    pub numerator: u64,
    pub denominator: u64,
}

impl InterestRate {
    pub const SIZE: usize = 8 + 8;

    pub fn new(numerator: u64, denominator: u64) -> Result<Self, YieldFarmingError> {
        let rate = Self {
            numerator,
            denominator,
        };
        rate.validate()?;
        Ok(rate)
    }

    pub fn validate(&self) -> Result<(), YieldFarmingError> {
        if self.denominator == 0 {
            return Err(YieldFarmingError::InvalidInterestRate);
        }
        Ok(())
    }

    /// Denominator of `1 + rate` over the shared `denominator`.
    fn growth_denominator(&self) -> Result<u128, YieldFarmingError> {
        (self.denominator as u128)
            .checked_add(self.numerator as u128)
            .ok_or(YieldFarmingError::MathOverflow)
    }
}

/// Reward minted for `principal` locked for one period at `rate`, scaled by
/// `multiplier`.
pub fn reward_amount(
    principal: u64,
    rate: &InterestRate,
    multiplier: u64,
) -> Result<u64, YieldFarmingError> {
    rate.validate()?;
    let numerator = (principal as u128)
        .checked_mul(multiplier as u128)
        .ok_or(YieldFarmingError::MathOverflow)?
        .checked_mul(rate.denominator as u128)
        .ok_or(YieldFarmingError::MathOverflow)?;
    let denominator = rate.growth_denominator()?;
    let reward = div_round_half_up(numerator, denominator)?;
    u64::try_from(reward).map_err(|_| YieldFarmingError::MathOverflow)
}

fn div_round_half_up(numerator: u128, denominator: u128) -> Result<u128, YieldFarmingError> {
    if denominator == 0 {
        return Err(YieldFarmingError::MathOverflow);
    }
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    // remainder >= denominator / 2, written without the lossy halving.
    if remainder >= denominator - remainder {
        quotient.checked_add(1).ok_or(YieldFarmingError::MathOverflow)
    } else {
        Ok(quotient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MULTIPLIER: u64 = 1_000_000_000_000;

    fn rate() -> InterestRate {
        InterestRate::new(25, 10_000).unwrap()
    }

    #[test]
    fn single_deposit_reference_value() {
        assert_eq!(
            reward_amount(1000, &rate(), MULTIPLIER).unwrap(),
            997_506_234_413_965
        );
    }

    #[test]
    fn split_deposit_reference_values() {
        // 333 / 667 split of a 1000 deposit; the second rounds up.
        assert_eq!(
            reward_amount(333, &rate(), MULTIPLIER).unwrap(),
            332_169_576_059_850
        );
        assert_eq!(
            reward_amount(667, &rate(), MULTIPLIER).unwrap(),
            665_336_658_354_115
        );
    }

    #[test]
    fn zero_multiplier_or_principal_yields_nothing() {
        assert_eq!(reward_amount(1000, &rate(), 0).unwrap(), 0);
        assert_eq!(reward_amount(0, &rate(), MULTIPLIER).unwrap(), 0);
    }

    #[test]
    fn zero_rate_returns_scaled_principal() {
        let flat = InterestRate::new(0, 1).unwrap();
        assert_eq!(reward_amount(42, &flat, 3).unwrap(), 126);
    }

    #[test]
    fn rounding_is_half_up() {
        // 1 * 1 * 2 / 4 = 0.5 -> 1
        let half = InterestRate::new(2, 2).unwrap();
        assert_eq!(reward_amount(1, &half, 1).unwrap(), 1);
        // 1 * 1 * 3 / 10 = 0.3 -> 0
        let small = InterestRate::new(7, 3).unwrap();
        assert_eq!(reward_amount(1, &small, 1).unwrap(), 0);
    }

    #[test]
    fn rejects_zero_denominator() {
        assert!(matches!(
            InterestRate::new(1, 0),
            Err(YieldFarmingError::InvalidInterestRate)
        ));
        let broken = InterestRate {
            numerator: 1,
            denominator: 0,
        };
        assert!(matches!(
            reward_amount(1, &broken, 1),
            Err(YieldFarmingError::InvalidInterestRate)
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let r = InterestRate::new(0, u64::MAX).unwrap();
        assert!(matches!(
            reward_amount(u64::MAX, &r, u64::MAX),
            Err(YieldFarmingError::MathOverflow)
        ));
        // Fits in u128 but not in u64.
        let flat = InterestRate::new(0, 1).unwrap();
        assert!(matches!(
            reward_amount(u64::MAX, &flat, 2),
            Err(YieldFarmingError::MathOverflow)
        ));
    }
}
