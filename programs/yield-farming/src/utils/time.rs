//! Lock-window arithmetic over Unix timestamps (seconds, UTC).
//! - release_ts = deposit_ts + lock_days * SECONDS_PER_DAY
//! - a lock is open at release_ts (inclusive)

use crate::constants::SECONDS_PER_DAY;
use crate::error::YieldFarmingError;

/// Release timestamp of a lock created at `now_ts` for `lock_days` days.
pub fn release_timestamp(now_ts: i64, lock_days: i64) -> Result<i64, YieldFarmingError> {
    if lock_days < 0 {
        return Err(YieldFarmingError::InvalidTimestamp);
    }
    lock_days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| now_ts.checked_add(secs))
        .ok_or(YieldFarmingError::MathOverflow)
}

pub fn is_unlocked(now_ts: i64, release_ts: i64) -> bool {
    now_ts >= release_ts
}

pub fn ensure_unlocked(now_ts: i64, release_ts: i64) -> Result<(), YieldFarmingError> {
    if is_unlocked(now_ts, release_ts) {
        Ok(())
    } else {
        Err(YieldFarmingError::BeforeReleaseTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_boundary_inclusive() {
        let deposit = 1 + SECONDS_PER_DAY;
        let release = release_timestamp(deposit, 1).unwrap();
        assert_eq!(release, deposit + SECONDS_PER_DAY);

        assert!(matches!(
            ensure_unlocked(deposit, release),
            Err(YieldFarmingError::BeforeReleaseTime)
        ));
        assert!(matches!(
            ensure_unlocked(deposit + 1, release),
            Err(YieldFarmingError::BeforeReleaseTime)
        ));
        assert!(matches!(
            ensure_unlocked(release - 1, release),
            Err(YieldFarmingError::BeforeReleaseTime)
        ));
        assert!(ensure_unlocked(release, release).is_ok());
    }

    #[test]
    fn lock_length_counts_whole_days() {
        assert_eq!(release_timestamp(0, 3).unwrap(), 3 * SECONDS_PER_DAY);
    }

    #[test]
    fn zero_lock_time_opens_immediately() {
        let now = 1_700_000_000;
        let release = release_timestamp(now, 0).unwrap();
        assert!(is_unlocked(now, release));
    }

    #[test]
    fn rejects_negative_and_overflowing_lock_time() {
        assert!(matches!(
            release_timestamp(10, -1),
            Err(YieldFarmingError::InvalidTimestamp)
        ));
        assert!(matches!(
            release_timestamp(i64::MAX, 1),
            Err(YieldFarmingError::MathOverflow)
        ));
        assert!(matches!(
            release_timestamp(0, i64::MAX),
            Err(YieldFarmingError::MathOverflow)
        ));
    }
}
