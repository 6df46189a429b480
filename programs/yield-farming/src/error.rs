use anchor_lang::prelude::*;

/// Custom error codes for the yield farming program.
#[error_code]
pub enum YieldFarmingError {
    #[msg("Ownable: caller is not the owner")]
    CallerNotOwner,

    #[msg("Ownable: new owner is the zero address")]
    NewOwnerIsZeroAddress,

    #[msg("PaymentSplitter: payees and shares length mismatch")]
    PayeesSharesLengthMismatch,

    #[msg("PaymentSplitter: no payees")]
    NoPayees,

    #[msg("PaymentSplitter: account is the zero address")]
    ZeroAddress,

    #[msg("PaymentSplitter: shares are 0")]
    ZeroShares,

    #[msg("PaymentSplitter: account is already payee")]
    AlreadyPayee,

    #[msg("PaymentSplitter: payee list is full")]
    PayeeListFull,

    #[msg("PaymentSplitter: account is not a payee")]
    AccountNotPayee,

    #[msg("PaymentSplitter: account is not due payment")]
    NotDuePayment,

    #[msg("PaymentSplitter: transferrer not a payee")]
    TransferrerNotPayee,

    #[msg("PaymentSplitter: not enough shares balance")]
    NotEnoughShares,

    #[msg("PaymentSplitter: cannot transfer shares to self")]
    SelfTransfer,

    #[msg("PaymentSplitter: not a payee")]
    NotAPayee,

    #[msg("PaymentSplitter: account already has that many shares")]
    SameShares,

    #[msg("PaymentSplitter: account not found")]
    PayeeNotFound,

    #[msg("PaymentSplitter: empty payee list")]
    EmptyPayeeList,

    #[msg("Index out of bounds!")]
    IndexOutOfBounds,

    #[msg("TokenTimeLock: current time is before release time")]
    BeforeReleaseTime,

    #[msg("TokenTimeLock: no tokens to release")]
    NoTokensToRelease,

    #[msg("TokenTimeLock: time-lock list is full")]
    TimeLockListFull,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Amount exceeds the allowance delegated to the farm")]
    InsufficientAllowance,

    #[msg("Invalid interest rate (denominator must be > 0)")]
    InvalidInterestRate,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
