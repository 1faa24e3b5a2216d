use spl_program_error::spl_program_error;

#[spl_program_error]
pub enum StakeError {
    /// 0 - Amount must be greater than zero.
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// 1 - The stake account already holds an active stake.
    #[error("Stake is already active")]
    AlreadyStaked,

    /// 2 - The source token account cannot cover the stake amount.
    #[error("Insufficient funds in source token account")]
    InsufficientFunds,

    /// 3 - The stake is not active or its lock has not expired yet.
    #[error("Stake is not unlockable")]
    NotUnlockable,

    /// 4 - Signer is neither the stake authority nor the registered executor.
    #[error("Unauthorized release authority")]
    Unauthorized,

    /// 5 - The vault cannot pay out the recorded stake amount.
    #[error("Vault payout failed")]
    PayoutFailure,

    /// 6 - Vault does not match the one on the config account.
    #[error("Incorrect vault account")]
    IncorrectVaultAccount,

    /// 7 - Token account owner is not the expected one.
    #[error("Invalid token owner")]
    InvalidTokenOwner,

    /// 8 - Mint does not match the vault mint.
    #[error("Invalid mint")]
    InvalidMint,

    /// 9 - Vault must be empty when the config is created.
    #[error("Amount greater than zero")]
    AmountGreaterThanZero,

    /// 10 - Account data length does not match the account type.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// 11 - Destination token account is not owned by the stake authority.
    #[error("Invalid destination account")]
    InvalidDestinationAccount,

    /// 12 - Lock duration must be greater than zero.
    #[error("Invalid lock duration")]
    InvalidLockDuration,

    /// 13 - Executor cannot be the default address.
    #[error("Invalid executor")]
    InvalidExecutor,
}

#[macro_export]
macro_rules! err {
    ( $error:expr ) => {{
        Err($error.into())
    }};
    ( $error:expr, $msg:expr ) => {{
        solana_program::msg!("[ERROR] {}", $msg);
        Err($error.into())
    }};
    ( $error:expr, $msg:literal, $($args:tt)+ ) => {{
        err!($error, &format!($msg, $($args)+))
    }};
}
