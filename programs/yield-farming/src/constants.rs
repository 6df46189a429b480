//! Program-wide constants.

/// PDA seed of the farm state (per accepted mint).
pub const FARM_SEED: &[u8] = b"farm";
/// PDA seed of the payee ledger (per farm).
pub const PAYEES_SEED: &[u8] = b"payees";
/// PDA seed of the reward mint (per farm).
pub const REWARD_MINT_SEED: &[u8] = b"reward_mint";
/// PDA seed of the accepted-token vault (per farm).
pub const VAULT_SEED: &[u8] = b"vault";
/// PDA seed of a depositor's time-lock list (per farm and beneficiary).
pub const TIME_LOCKS_SEED: &[u8] = b"time_locks";

/// Max payees stored in the payee ledger PDA.
pub const MAX_PAYEES: usize = 32;

/// Runtime cap on instruction return data (bytes).
pub const MAX_RETURN_DATA: usize = 1024;

/// Max time-locks a single beneficiary can hold. The whole list must fit in
/// the return data of `get_my_token_time_locks`.
pub const MAX_TIME_LOCKS: usize = 17;

/// Reward token name/symbol limits (bytes).
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed-point scale of the payee ledger's cumulative payout per share.
pub const PER_SHARE_SCALE: u128 = 1_000_000_000_000;
