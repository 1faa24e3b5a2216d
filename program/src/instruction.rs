use arrayref::array_ref;
use bytemuck::{Pod, Zeroable};
use shank::{ShankContext, ShankInstruction};
use solana_program::program_error::ProgramError;
use spl_pod::primitives::PodBool;

/// Enum defining all instructions in the Lock Vault program.
#[repr(C)]
#[derive(Clone, Debug, Eq, PartialEq, ShankContext, ShankInstruction)]
#[rustfmt::skip]
pub enum LockVaultInstruction {
    /// Creates the vault config account, fixing the executor and the lock
    /// duration for the lifetime of the vault.
    #[account(
        0,
        writable,
        name = "config",
        desc = "Vault config account"
    )]
    #[account(
        1,
        name = "executor",
        desc = "Identity allowed to release stakes on behalf of their authority"
    )]
    #[account(
        2,
        name = "mint",
        desc = "Stake token mint"
    )]
    #[account(
        3,
        name = "vault",
        desc = "Vault token account (owned by pda of `['token-owner', config]`)"
    )]
    InitializeConfig {
        lock_duration_seconds: u64,
    },

    /// Initializes an empty stake account for an authority.
    ///
    /// NOTE: Anybody can create the stake account. The account needs to be
    /// pre-funded with the rent-exempt minimum balance.
    #[account(
        0,
        name = "config",
        desc = "Vault config account"
    )]
    #[account(
        1,
        writable,
        name = "stake",
        desc = "Stake account (pda of `['stake::state::stake', stake_authority, config]`)"
    )]
    #[account(
        2,
        name = "stake_authority",
        desc = "Owner of the stake"
    )]
    #[account(
        3,
        name = "system_program",
        desc = "System program"
    )]
    InitializeStake,

    /// Locks tokens in the vault for the configured duration.
    ///
    /// Fails if the stake account already holds an active stake.
    ///
    /// Instruction data: amount of tokens to stake, as a little-endian `u64`.
    #[account(
        0,
        writable,
        name = "config",
        desc = "Vault config account"
    )]
    #[account(
        1,
        writable,
        name = "stake",
        desc = "Stake account (pda of `['stake::state::stake', stake_authority, config]`)"
    )]
    #[account(
        2,
        signer,
        name = "stake_authority",
        desc = "Owner of the stake"
    )]
    #[account(
        3,
        writable,
        name = "source_token_account",
        desc = "Token account to pull the tokens from"
    )]
    #[account(
        4,
        signer,
        name = "source_token_account_authority",
        desc = "Owner or delegate of the source token account"
    )]
    #[account(
        5,
        name = "mint",
        desc = "Stake token mint"
    )]
    #[account(
        6,
        writable,
        name = "vault",
        desc = "Vault token account"
    )]
    #[account(
        7,
        name = "token_program",
        desc = "Token program"
    )]
    StakeTokens(u64),

    /// Releases an expired stake, paying the whole amount back to the stake
    /// authority.
    ///
    /// The release authority must be the stake authority or the executor
    /// registered on the config.
    #[account(
        0,
        writable,
        name = "config",
        desc = "Vault config account"
    )]
    #[account(
        1,
        writable,
        name = "stake",
        desc = "Stake account (pda of `['stake::state::stake', stake_authority, config]`)"
    )]
    #[account(
        2,
        signer,
        name = "release_authority",
        desc = "Stake authority or config executor"
    )]
    #[account(
        3,
        writable,
        name = "vault",
        desc = "Vault token account"
    )]
    #[account(
        4,
        name = "vault_authority",
        desc = "Vault authority (pda of `['token-owner', config]`)"
    )]
    #[account(
        5,
        writable,
        name = "destination_token_account",
        desc = "Token account of the stake authority"
    )]
    #[account(
        6,
        name = "mint",
        desc = "Stake token mint"
    )]
    #[account(
        7,
        name = "token_program",
        desc = "Token program"
    )]
    ReleaseStake,

    /// Returns whether the stake can be released now.
    ///
    /// Return data: `1` if releasable, `0` otherwise.
    #[account(
        0,
        name = "config",
        desc = "Vault config account"
    )]
    #[account(
        1,
        name = "stake",
        desc = "Stake account (pda of `['stake::state::stake', stake_authority, config]`)"
    )]
    CanRelease,

    /// Returns a snapshot of the stake.
    ///
    /// Return data: [`GetStakeReturnData`].
    #[account(
        0,
        name = "config",
        desc = "Vault config account"
    )]
    #[account(
        1,
        name = "stake",
        desc = "Stake account (pda of `['stake::state::stake', stake_authority, config]`)"
    )]
    GetStake,
}

impl LockVaultInstruction {
    /// Packs a [LockVaultInstruction](enum.LockVaultInstruction.html) into a byte buffer.
    pub fn pack(&self) -> Vec<u8> {
        match self {
            LockVaultInstruction::InitializeConfig {
                lock_duration_seconds,
            } => {
                let mut data = Vec::with_capacity(9);
                data.push(0);
                data.extend_from_slice(&lock_duration_seconds.to_le_bytes());
                data
            }
            LockVaultInstruction::InitializeStake => vec![1],
            LockVaultInstruction::StakeTokens(amount) => {
                let mut data = Vec::with_capacity(9);
                data.push(2);
                data.extend_from_slice(&amount.to_le_bytes());
                data
            }
            LockVaultInstruction::ReleaseStake => vec![3],
            LockVaultInstruction::CanRelease => vec![4],
            LockVaultInstruction::GetStake => vec![5],
        }
    }

    /// Unpacks a byte buffer into a [LockVaultInstruction](enum.LockVaultInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.split_first() {
            // 0 - InitializeConfig: u64 (8)
            Some((&0, rest)) if rest.len() == 8 => {
                let lock_duration_seconds = u64::from_le_bytes(*array_ref![rest, 0, 8]);

                Ok(LockVaultInstruction::InitializeConfig {
                    lock_duration_seconds,
                })
            }
            // 1 - InitializeStake
            Some((&1, _)) => Ok(LockVaultInstruction::InitializeStake),
            // 2 - StakeTokens: u64 (8)
            Some((&2, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(*array_ref![rest, 0, 8]);

                Ok(LockVaultInstruction::StakeTokens(amount))
            }
            // 3 - ReleaseStake
            Some((&3, _)) => Ok(LockVaultInstruction::ReleaseStake),
            // 4 - CanRelease
            Some((&4, _)) => Ok(LockVaultInstruction::CanRelease),
            // 5 - GetStake
            Some((&5, _)) => Ok(LockVaultInstruction::GetStake),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Return data of the `GetStake` instruction.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GetStakeReturnData {
    pub amount: u64,
    pub unlock_timestamp: u64,
    pub active: PodBool,
    _padding: [u8; 7],
}

impl GetStakeReturnData {
    pub const LEN: usize = std::mem::size_of::<GetStakeReturnData>();

    pub fn new(amount: u64, unlock_timestamp: u64, active: bool) -> Self {
        Self {
            amount,
            unlock_timestamp,
            active: PodBool::from(active),
            _padding: [0; 7],
        }
    }

    /// Decodes the return data published by `GetStake`.
    ///
    /// The runtime trims trailing zero bytes from return data, so shorter
    /// buffers are zero-extended.
    pub fn from_return_data(data: &[u8]) -> Option<Self> {
        if data.len() > Self::LEN {
            return None;
        }

        let mut bytes = [0u8; Self::LEN];
        bytes[..data.len()].copy_from_slice(data);

        Some(bytemuck::pod_read_unaligned(&bytes))
    }
}
