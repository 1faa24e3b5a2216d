use solana_program::{
    entrypoint::ProgramResult, msg, program_error::ProgramError, pubkey::Pubkey,
};
use spl_token_2022::{
    extension::PodStateWithExtensions,
    pod::{PodAccount, PodMint},
};

use crate::{
    error::StakeError,
    instruction::accounts::{Context, InitializeConfigAccounts},
    require,
    state::{find_vault_authority_pda, Config},
};

/// Creates the vault config account.
///
/// The executor and the lock duration are written here and never again: no
/// instruction of this program modifies them after initialization.
///
/// ### Accounts:
///
///   0. `[w]` config
///   1. `[ ]` executor
///   2. `[ ]` mint
///   3. `[ ]` vault
pub fn process_initialize_config(
    program_id: &Pubkey,
    ctx: Context<InitializeConfigAccounts>,
    lock_duration_seconds: u64,
) -> ProgramResult {
    // Arguments validation.

    require!(
        lock_duration_seconds > 0,
        StakeError::InvalidLockDuration,
        "lock duration must be greater than 0"
    );

    require!(
        ctx.accounts.executor.key != &Pubkey::default(),
        StakeError::InvalidExecutor,
        "executor"
    );

    // Accounts validation.

    // 1. mint
    // - owner must the spl token 2022
    // - must be initialized

    require!(
        ctx.accounts.mint.owner == &spl_token_2022::ID,
        ProgramError::InvalidAccountOwner,
        "mint"
    );

    let mint_data = ctx.accounts.mint.try_borrow_data()?;
    // unpack checks if the mint is initialized
    PodStateWithExtensions::<PodMint>::unpack(&mint_data)?;

    // 2. vault (token account)
    // - must be initialized
    // - have the vault authority (PDA) as owner
    // - have the correct mint
    // - amount equal to 0

    require!(
        ctx.accounts.vault.owner == &spl_token_2022::ID,
        ProgramError::InvalidAccountOwner,
        "vault"
    );

    let vault_data = ctx.accounts.vault.try_borrow_data()?;
    // unpack checks if the token is initialized
    let vault = PodStateWithExtensions::<PodAccount>::unpack(&vault_data)?;

    let (vault_authority, bump) = find_vault_authority_pda(ctx.accounts.config.key, program_id);

    require!(
        vault.base.owner == vault_authority,
        StakeError::InvalidTokenOwner,
        "vault"
    );

    require!(
        &vault.base.mint == ctx.accounts.mint.key,
        StakeError::InvalidMint,
        "vault"
    );

    let amount: u64 = vault.base.amount.into();
    require!(amount == 0, StakeError::AmountGreaterThanZero, "vault");

    // 3. config
    // - owner must be this program
    // - have the correct length
    // - be uninitialized

    require!(
        ctx.accounts.config.owner == program_id,
        ProgramError::InvalidAccountOwner,
        "config"
    );

    let mut data = ctx.accounts.config.try_borrow_mut_data()?;

    require!(
        data.len() == Config::LEN,
        StakeError::InvalidAccountDataLength,
        "config"
    );

    let config = bytemuck::from_bytes_mut::<Config>(&mut data);

    require!(
        !config.is_initialized(),
        ProgramError::AccountAlreadyInitialized,
        "config"
    );

    // Initialize the vault config account.

    *config = Config::new(
        *ctx.accounts.executor.key,
        *ctx.accounts.vault.key,
        lock_duration_seconds,
        bump,
    );

    msg!(
        "Vault initialized with executor {} and a lock of {} second(s)",
        ctx.accounts.executor.key,
        lock_duration_seconds
    );

    Ok(())
}
