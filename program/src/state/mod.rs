pub mod config;
pub mod stake;

pub use config::*;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};
pub use stake::*;

/// Seed prefix of the PDA that owns the vault token account.
pub const VAULT_AUTHORITY_SEED: &[u8] = b"token-owner";

/// Seed prefix of stake account PDAs.
pub const STAKE_SEED: &[u8] = b"stake::state::stake";

#[inline(always)]
pub fn find_vault_authority_pda(config: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, config.as_ref()], program_id)
}

/// Derives the vault authority from the bump stored on the config account.
#[inline(always)]
pub fn create_vault_authority_pda(
    config: &Pubkey,
    bump_seed: &[u8],
    program_id: &Pubkey,
) -> Result<Pubkey, ProgramError> {
    Pubkey::create_program_address(&[VAULT_AUTHORITY_SEED, config.as_ref(), bump_seed], program_id)
        .map_err(|_| ProgramError::InvalidSeeds)
}

#[inline(always)]
pub fn get_vault_authority_pda_signer_seeds<'a>(
    config: &'a Pubkey,
    bump_seed: &'a [u8],
) -> [&'a [u8]; 3] {
    [VAULT_AUTHORITY_SEED, config.as_ref(), bump_seed]
}

#[inline(always)]
pub fn find_stake_pda(authority: &Pubkey, config: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_SEED, authority.as_ref(), config.as_ref()], program_id)
}

#[inline(always)]
pub fn get_stake_pda_signer_seeds<'a>(
    authority: &'a Pubkey,
    config: &'a Pubkey,
    bump_seed: &'a [u8],
) -> [&'a [u8]; 4] {
    [STAKE_SEED, authority.as_ref(), config.as_ref(), bump_seed]
}
