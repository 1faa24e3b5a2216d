use bytemuck::{Pod, Zeroable};
use shank::ShankAccount;
use solana_program::{program_error::ProgramError, program_pack::IsInitialized, pubkey::Pubkey};
use spl_discriminator::SplDiscriminate;
use spl_pod::primitives::PodBool;

use crate::{error::StakeError, require};

/// Locked stake of a single authority on a vault.
///
/// A stake account moves through three states:
///
/// ```text
/// Empty --lock--> Locked --(time elapses)--> Unlockable --release--> Empty
/// ```
///
/// Only `active` is stored; `Locked` and `Unlockable` are derived by comparing
/// `unlock_timestamp` with the current time. The account is never closed, a
/// released stake stays as an inactive placeholder that can be locked again.
#[repr(C)]
#[derive(Clone, Copy, Pod, ShankAccount, SplDiscriminate, Zeroable)]
#[discriminator_hash_input("lock_vault::state::stake")]
pub struct Stake {
    /// Account discriminator.
    ///
    /// The discriminator is equal to `ArrayDiscriminator::UNINITIALIZED` when
    /// the account is empty, and equal to `Stake::DISCRIMINATOR` when the account
    /// is initialized.
    ///
    /// Note that the value of the discriminator is different than the prefix seed
    /// `"stake::state::stake"` used to derive the PDA address.
    discriminator: [u8; 8],

    /// Amount of locked tokens. Zero while inactive.
    amount: u64,

    /// Timestamp at which the lock expires.
    unlock_timestamp: u64,

    /// Owner of the stake, the only recipient of released tokens.
    authority: Pubkey,

    /// Whether the stake holds locked tokens.
    active: PodBool,

    _padding: [u8; 7],
}

impl Stake {
    pub const LEN: usize = std::mem::size_of::<Stake>();

    pub fn new(authority: Pubkey) -> Self {
        Self {
            discriminator: Stake::SPL_DISCRIMINATOR.into(),
            amount: 0,
            unlock_timestamp: 0,
            authority,
            active: PodBool::from(false),
            _padding: [0; 7],
        }
    }

    /// Checks whether the discriminator has been set and it is equal to
    /// `Stake::SPL_DISCRIMINATOR_SLICE` or not.
    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.discriminator.as_slice() == Stake::SPL_DISCRIMINATOR_SLICE
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        self.amount
    }

    #[inline(always)]
    pub fn unlock_timestamp(&self) -> u64 {
        self.unlock_timestamp
    }

    #[inline(always)]
    pub fn authority(&self) -> &Pubkey {
        &self.authority
    }

    #[inline(always)]
    pub fn is_active(&self) -> bool {
        bool::from(self.active)
    }

    /// Whether the stake can be released at `now`.
    #[inline(always)]
    pub fn can_release(&self, now: u64) -> bool {
        self.is_active() && now >= self.unlock_timestamp
    }

    /// Locks `amount` tokens until `now + lock_duration`.
    ///
    /// Returns the unlock timestamp. Nothing is modified on error.
    pub fn lock(&mut self, amount: u64, now: u64, lock_duration: u64) -> Result<u64, ProgramError> {
        require!(amount > 0, StakeError::InvalidAmount);
        require!(!self.is_active(), StakeError::AlreadyStaked);

        let unlock_timestamp = now
            .checked_add(lock_duration)
            .ok_or(ProgramError::ArithmeticOverflow)?;

        self.amount = amount;
        self.unlock_timestamp = unlock_timestamp;
        self.active = PodBool::from(true);

        Ok(unlock_timestamp)
    }

    /// Deactivates the stake and returns the amount to pay out.
    ///
    /// The stake is inactive once this returns, so the caller must only move
    /// tokens after calling it. Nothing is modified on error.
    pub fn release(&mut self, now: u64) -> Result<u64, ProgramError> {
        require!(
            self.is_active(),
            StakeError::NotUnlockable,
            "no active stake"
        );
        require!(
            now >= self.unlock_timestamp,
            StakeError::NotUnlockable,
            "{} second(s) remaining for unlock",
            self.unlock_timestamp.saturating_sub(now)
        );

        let amount = self.amount;
        self.amount = 0;
        self.active = PodBool::from(false);

        Ok(amount)
    }
}

impl IsInitialized for Stake {
    fn is_initialized(&self) -> bool {
        self.is_initialized()
    }
}
