//! Instruction builders.
//!
//! Every builder follows the same shape: set the accounts and arguments, then
//! call `instruction()`. Missing required accounts panic when building.

use lock_vault_program::instruction::LockVaultInstruction;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use unstake_executor_program::instruction::UnstakeExecutorInstruction;

const SPL_TOKEN_2022_ID: Pubkey =
    solana_program::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

macro_rules! builder_setters {
    ( $( $name:ident : $ty:ty ),* $(,)? ) => {
        $(
            #[inline(always)]
            pub fn $name(&mut self, $name: $ty) -> &mut Self {
                self.$name = Some($name);
                self
            }
        )*

        /// Add an additional account to the instruction.
        #[inline(always)]
        pub fn add_remaining_account(&mut self, account: AccountMeta) -> &mut Self {
            self.__remaining_accounts.push(account);
            self
        }

        /// Add additional accounts to the instruction.
        #[inline(always)]
        pub fn add_remaining_accounts(&mut self, accounts: &[AccountMeta]) -> &mut Self {
            self.__remaining_accounts.extend_from_slice(accounts);
            self
        }
    };
}

/// Builds an `InitializeConfig` instruction.
///
/// ### Accounts:
///
///   0. `[writable]` config
///   1. `[]` executor
///   2. `[]` mint
///   3. `[]` vault
#[derive(Clone, Debug, Default)]
pub struct InitializeConfigBuilder {
    config: Option<Pubkey>,
    executor: Option<Pubkey>,
    mint: Option<Pubkey>,
    vault: Option<Pubkey>,
    lock_duration_seconds: Option<u64>,
    __remaining_accounts: Vec<AccountMeta>,
}

impl InitializeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters!(
        config: Pubkey,
        executor: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        lock_duration_seconds: u64,
    );

    pub fn instruction(&self) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new(self.config.expect("config is not set"), false),
            AccountMeta::new_readonly(self.executor.expect("executor is not set"), false),
            AccountMeta::new_readonly(self.mint.expect("mint is not set"), false),
            AccountMeta::new_readonly(self.vault.expect("vault is not set"), false),
        ];
        accounts.extend_from_slice(&self.__remaining_accounts);

        Instruction {
            program_id: crate::ID,
            accounts,
            data: LockVaultInstruction::InitializeConfig {
                lock_duration_seconds: self
                    .lock_duration_seconds
                    .expect("lock_duration_seconds is not set"),
            }
            .pack(),
        }
    }
}

/// Builds an `InitializeStake` instruction.
///
/// ### Accounts:
///
///   0. `[]` config
///   1. `[writable]` stake
///   2. `[]` stake_authority
///   3. `[optional]` system_program (default to `11111111111111111111111111111111`)
#[derive(Clone, Debug, Default)]
pub struct InitializeStakeBuilder {
    config: Option<Pubkey>,
    stake: Option<Pubkey>,
    stake_authority: Option<Pubkey>,
    system_program: Option<Pubkey>,
    __remaining_accounts: Vec<AccountMeta>,
}

impl InitializeStakeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters!(
        config: Pubkey,
        stake: Pubkey,
        stake_authority: Pubkey,
        system_program: Pubkey,
    );

    pub fn instruction(&self) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new_readonly(self.config.expect("config is not set"), false),
            AccountMeta::new(self.stake.expect("stake is not set"), false),
            AccountMeta::new_readonly(
                self.stake_authority.expect("stake_authority is not set"),
                false,
            ),
            AccountMeta::new_readonly(self.system_program.unwrap_or(system_program::ID), false),
        ];
        accounts.extend_from_slice(&self.__remaining_accounts);

        Instruction {
            program_id: crate::ID,
            accounts,
            data: LockVaultInstruction::InitializeStake.pack(),
        }
    }
}

/// Builds a `StakeTokens` instruction.
///
/// ### Accounts:
///
///   0. `[writable]` config
///   1. `[writable]` stake
///   2. `[signer]` stake_authority
///   3. `[writable]` source_token_account
///   4. `[signer]` source_token_account_authority
///   5. `[]` mint
///   6. `[writable]` vault
///   7. `[optional]` token_program (default to `TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`)
#[derive(Clone, Debug, Default)]
pub struct StakeTokensBuilder {
    config: Option<Pubkey>,
    stake: Option<Pubkey>,
    stake_authority: Option<Pubkey>,
    source_token_account: Option<Pubkey>,
    source_token_account_authority: Option<Pubkey>,
    mint: Option<Pubkey>,
    vault: Option<Pubkey>,
    token_program: Option<Pubkey>,
    amount: Option<u64>,
    __remaining_accounts: Vec<AccountMeta>,
}

impl StakeTokensBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters!(
        config: Pubkey,
        stake: Pubkey,
        stake_authority: Pubkey,
        source_token_account: Pubkey,
        source_token_account_authority: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        token_program: Pubkey,
        amount: u64,
    );

    pub fn instruction(&self) -> Instruction {
        let stake_authority = self.stake_authority.expect("stake_authority is not set");
        let mut accounts = vec![
            AccountMeta::new(self.config.expect("config is not set"), false),
            AccountMeta::new(self.stake.expect("stake is not set"), false),
            AccountMeta::new_readonly(stake_authority, true),
            AccountMeta::new(
                self.source_token_account
                    .expect("source_token_account is not set"),
                false,
            ),
            // the stake authority usually owns the source token account
            AccountMeta::new_readonly(
                self.source_token_account_authority.unwrap_or(stake_authority),
                true,
            ),
            AccountMeta::new_readonly(self.mint.expect("mint is not set"), false),
            AccountMeta::new(self.vault.expect("vault is not set"), false),
            AccountMeta::new_readonly(self.token_program.unwrap_or(SPL_TOKEN_2022_ID), false),
        ];
        accounts.extend_from_slice(&self.__remaining_accounts);

        Instruction {
            program_id: crate::ID,
            accounts,
            data: LockVaultInstruction::StakeTokens(self.amount.expect("amount is not set"))
                .pack(),
        }
    }
}

/// Builds a `ReleaseStake` instruction.
///
/// ### Accounts:
///
///   0. `[writable]` config
///   1. `[writable]` stake
///   2. `[signer]` release_authority
///   3. `[writable]` vault
///   4. `[]` vault_authority
///   5. `[writable]` destination_token_account
///   6. `[]` mint
///   7. `[optional]` token_program (default to `TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`)
#[derive(Clone, Debug, Default)]
pub struct ReleaseStakeBuilder {
    config: Option<Pubkey>,
    stake: Option<Pubkey>,
    release_authority: Option<Pubkey>,
    vault: Option<Pubkey>,
    vault_authority: Option<Pubkey>,
    destination_token_account: Option<Pubkey>,
    mint: Option<Pubkey>,
    token_program: Option<Pubkey>,
    __remaining_accounts: Vec<AccountMeta>,
}

impl ReleaseStakeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters!(
        config: Pubkey,
        stake: Pubkey,
        release_authority: Pubkey,
        vault: Pubkey,
        vault_authority: Pubkey,
        destination_token_account: Pubkey,
        mint: Pubkey,
        token_program: Pubkey,
    );

    pub fn instruction(&self) -> Instruction {
        let config = self.config.expect("config is not set");
        let mut accounts = vec![
            AccountMeta::new(config, false),
            AccountMeta::new(self.stake.expect("stake is not set"), false),
            AccountMeta::new_readonly(
                self.release_authority.expect("release_authority is not set"),
                true,
            ),
            AccountMeta::new(self.vault.expect("vault is not set"), false),
            AccountMeta::new_readonly(
                self.vault_authority
                    .unwrap_or_else(|| crate::pdas::find_vault_authority_pda(&config).0),
                false,
            ),
            AccountMeta::new(
                self.destination_token_account
                    .expect("destination_token_account is not set"),
                false,
            ),
            AccountMeta::new_readonly(self.mint.expect("mint is not set"), false),
            AccountMeta::new_readonly(self.token_program.unwrap_or(SPL_TOKEN_2022_ID), false),
        ];
        accounts.extend_from_slice(&self.__remaining_accounts);

        Instruction {
            program_id: crate::ID,
            accounts,
            data: LockVaultInstruction::ReleaseStake.pack(),
        }
    }
}

/// Builds a `CanRelease` instruction.
///
/// ### Accounts:
///
///   0. `[]` config
///   1. `[]` stake
#[derive(Clone, Debug, Default)]
pub struct CanReleaseBuilder {
    config: Option<Pubkey>,
    stake: Option<Pubkey>,
    __remaining_accounts: Vec<AccountMeta>,
}

impl CanReleaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters!(config: Pubkey, stake: Pubkey);

    pub fn instruction(&self) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new_readonly(self.config.expect("config is not set"), false),
            AccountMeta::new_readonly(self.stake.expect("stake is not set"), false),
        ];
        accounts.extend_from_slice(&self.__remaining_accounts);

        Instruction {
            program_id: crate::ID,
            accounts,
            data: LockVaultInstruction::CanRelease.pack(),
        }
    }
}

/// Builds a `GetStake` instruction.
///
/// ### Accounts:
///
///   0. `[]` config
///   1. `[]` stake
#[derive(Clone, Debug, Default)]
pub struct GetStakeBuilder {
    config: Option<Pubkey>,
    stake: Option<Pubkey>,
    __remaining_accounts: Vec<AccountMeta>,
}

impl GetStakeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters!(config: Pubkey, stake: Pubkey);

    pub fn instruction(&self) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new_readonly(self.config.expect("config is not set"), false),
            AccountMeta::new_readonly(self.stake.expect("stake is not set"), false),
        ];
        accounts.extend_from_slice(&self.__remaining_accounts);

        Instruction {
            program_id: crate::ID,
            accounts,
            data: LockVaultInstruction::GetStake.pack(),
        }
    }
}

/// Builds an `ExecuteRelease` instruction of the Unstake Executor program.
///
/// ### Accounts:
///
///   0. `[optional]` executor_authority (default to pda of `['executor', config]`)
///   1. `[writable]` config
///   2. `[writable]` stake
///   3. `[writable]` vault
///   4. `[optional]` vault_authority (default to pda of `['token-owner', config]`)
///   5. `[writable]` destination_token_account
///   6. `[]` mint
///   7. `[optional]` token_program (default to `TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`)
///   8. `[optional]` lock_vault_program (default to the Lock Vault program)
#[derive(Clone, Debug, Default)]
pub struct ExecuteReleaseBuilder {
    executor_authority: Option<Pubkey>,
    config: Option<Pubkey>,
    stake: Option<Pubkey>,
    vault: Option<Pubkey>,
    vault_authority: Option<Pubkey>,
    destination_token_account: Option<Pubkey>,
    mint: Option<Pubkey>,
    token_program: Option<Pubkey>,
    lock_vault_program: Option<Pubkey>,
    __remaining_accounts: Vec<AccountMeta>,
}

impl ExecuteReleaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_setters!(
        executor_authority: Pubkey,
        config: Pubkey,
        stake: Pubkey,
        vault: Pubkey,
        vault_authority: Pubkey,
        destination_token_account: Pubkey,
        mint: Pubkey,
        token_program: Pubkey,
        lock_vault_program: Pubkey,
    );

    pub fn instruction(&self) -> Instruction {
        let config = self.config.expect("config is not set");
        let mut accounts = vec![
            AccountMeta::new_readonly(
                self.executor_authority
                    .unwrap_or_else(|| crate::pdas::find_executor_authority_pda(&config).0),
                false,
            ),
            AccountMeta::new(config, false),
            AccountMeta::new(self.stake.expect("stake is not set"), false),
            AccountMeta::new(self.vault.expect("vault is not set"), false),
            AccountMeta::new_readonly(
                self.vault_authority
                    .unwrap_or_else(|| crate::pdas::find_vault_authority_pda(&config).0),
                false,
            ),
            AccountMeta::new(
                self.destination_token_account
                    .expect("destination_token_account is not set"),
                false,
            ),
            AccountMeta::new_readonly(self.mint.expect("mint is not set"), false),
            AccountMeta::new_readonly(self.token_program.unwrap_or(SPL_TOKEN_2022_ID), false),
            AccountMeta::new_readonly(self.lock_vault_program.unwrap_or(crate::ID), false),
        ];
        accounts.extend_from_slice(&self.__remaining_accounts);

        Instruction {
            program_id: crate::EXECUTOR_ID,
            accounts,
            data: UnstakeExecutorInstruction::ExecuteRelease.pack(),
        }
    }
}
