use solana_program::pubkey::Pubkey;

/// Seed prefix of the executor authority PDA.
pub const EXECUTOR_SEED: &[u8] = b"executor";

/// Finds the executor authority for a vault config.
///
/// This is the address to register as `executor` when initializing the vault.
#[inline(always)]
pub fn find_executor_authority_pda(config: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EXECUTOR_SEED, config.as_ref()], program_id)
}

#[inline(always)]
pub fn get_executor_authority_pda_signer_seeds<'a>(
    config: &'a Pubkey,
    bump_seed: &'a [u8],
) -> [&'a [u8]; 3] {
    [EXECUTOR_SEED, config.as_ref(), bump_seed]
}
