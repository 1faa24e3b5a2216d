//! Client helpers for the Lock Vault and Unstake Executor programs.

pub mod instructions;
pub mod pdas;

pub mod accounts {
    pub use lock_vault_program::state::{Config, Stake};
}

pub mod errors {
    pub use lock_vault_program::error::StakeError;
}

pub mod events {
    pub use lock_vault_program::events::{decode, Staked, Unstaked};
}

pub use lock_vault_program::{instruction::GetStakeReturnData, ID};

/// Address of the Unstake Executor program.
pub const EXECUTOR_ID: solana_program::pubkey::Pubkey = unstake_executor_program::ID;
