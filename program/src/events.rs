//! Events logged with `sol_log_data`.
//!
//! Each record is the 8-byte event discriminator followed by the Pod bytes of
//! the event.

use bytemuck::{Pod, Zeroable};
use solana_program::{log::sol_log_data, pubkey::Pubkey};
use spl_discriminator::SplDiscriminate;

/// Tokens were locked in the vault.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, SplDiscriminate, Zeroable)]
#[discriminator_hash_input("lock_vault::event::staked")]
pub struct Staked {
    pub authority: Pubkey,
    pub amount: u64,
    pub unlock_timestamp: u64,
}

/// Tokens were released from the vault back to the stake authority.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, SplDiscriminate, Zeroable)]
#[discriminator_hash_input("lock_vault::event::unstaked")]
pub struct Unstaked {
    pub authority: Pubkey,
    /// Signer of the release, either the authority or the executor.
    pub release_authority: Pubkey,
    pub amount: u64,
    pub timestamp: u64,
}

pub fn emit<T: Pod + SplDiscriminate>(event: &T) {
    sol_log_data(&[T::SPL_DISCRIMINATOR_SLICE, bytemuck::bytes_of(event)]);
}

/// Decodes an event from a `sol_log_data` record, if it is of type `T`.
pub fn decode<T: Pod + SplDiscriminate>(data: &[u8]) -> Option<T> {
    if data.len() < 8 {
        return None;
    }

    let (discriminator, event) = data.split_at(8);

    if discriminator != T::SPL_DISCRIMINATOR_SLICE {
        return None;
    }

    bytemuck::try_pod_read_unaligned::<T>(event).ok()
}
