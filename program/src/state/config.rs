use bytemuck::{Pod, Zeroable};
use shank::ShankAccount;
use solana_program::{program_error::ProgramError, program_pack::IsInitialized, pubkey::Pubkey};
use spl_discriminator::SplDiscriminate;

/// Configuration of a lock vault.
///
/// Everything except the custody ledger is written once by `InitializeConfig`
/// and only exposed through read accessors afterwards.
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, ShankAccount, SplDiscriminate, Zeroable)]
#[discriminator_hash_input("lock_vault::state::config")]
pub struct Config {
    /// Account discriminator.
    ///
    /// The discriminator is equal to `ArrayDiscriminator::UNINITIALIZED` when
    /// the account is empty, and equal to `Config::DISCRIMINATOR` when the account
    /// is initialized.
    discriminator: [u8; 8],

    /// The only identity, besides the stake authority, allowed to release a stake.
    executor: Pubkey,

    /// Token account holding all staked tokens.
    vault: Pubkey,

    /// Number of seconds between staking and the earliest release.
    lock_duration_seconds: u64,

    /// Sum of the amounts of all active stakes.
    ///
    /// Anybody can transfer tokens into the vault without passing through the
    /// program, so this number is maintained independently of the vault balance.
    pub token_amount_staked: u64,

    /// Bump seed of the vault authority PDA.
    vault_authority_bump: u8,

    _padding: [u8; 7],
}

impl Config {
    pub const LEN: usize = std::mem::size_of::<Config>();

    pub fn new(
        executor: Pubkey,
        vault: Pubkey,
        lock_duration_seconds: u64,
        vault_authority_bump: u8,
    ) -> Self {
        Self {
            discriminator: Config::SPL_DISCRIMINATOR.into(),
            executor,
            vault,
            lock_duration_seconds,
            token_amount_staked: 0,
            vault_authority_bump,
            _padding: [0; 7],
        }
    }

    /// Checks whether the discriminator has been set and it is equal to
    /// `Config::SPL_DISCRIMINATOR_SLICE` or not.
    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.discriminator.as_slice() == Config::SPL_DISCRIMINATOR_SLICE
    }

    #[inline(always)]
    pub fn executor(&self) -> &Pubkey {
        &self.executor
    }

    #[inline(always)]
    pub fn vault(&self) -> &Pubkey {
        &self.vault
    }

    #[inline(always)]
    pub fn lock_duration_seconds(&self) -> u64 {
        self.lock_duration_seconds
    }

    #[inline(always)]
    pub fn vault_authority_bump(&self) -> u8 {
        self.vault_authority_bump
    }

    /// Whether `key` may release stakes on behalf of `stake_authority`.
    #[inline(always)]
    pub fn is_release_authority(&self, key: &Pubkey, stake_authority: &Pubkey) -> bool {
        key == stake_authority || key == &self.executor
    }

    /// Adds a newly locked amount to the custody ledger.
    pub fn record_stake(&mut self, amount: u64) -> Result<(), ProgramError> {
        self.token_amount_staked = self
            .token_amount_staked
            .checked_add(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Removes a released amount from the custody ledger.
    pub fn record_release(&mut self, amount: u64) -> Result<(), ProgramError> {
        self.token_amount_staked = self
            .token_amount_staked
            .checked_sub(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }
}

impl IsInitialized for Config {
    fn is_initialized(&self) -> bool {
        self.is_initialized()
    }
}
