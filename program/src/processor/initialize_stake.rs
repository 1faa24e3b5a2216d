use solana_program::{
    entrypoint::ProgramResult, program::invoke_signed, program_error::ProgramError,
    pubkey::Pubkey, rent::Rent, system_instruction, sysvar::Sysvar,
};

use crate::{
    instruction::accounts::{Context, InitializeStakeAccounts},
    processor::check_config,
    require,
    state::{find_stake_pda, get_stake_pda_signer_seeds, Stake},
};

/// Initializes an empty stake account for an authority.
///
/// NOTE: Anybody can create the stake account; the authority does not need
/// to sign since the account holds no tokens until the authority stakes.
///
/// 0. `[ ]` Vault config
/// 1. `[w]` Stake
/// 2. `[ ]` Stake authority
/// 3. `[ ]` System program
pub fn process_initialize_stake(
    program_id: &Pubkey,
    ctx: Context<InitializeStakeAccounts>,
) -> ProgramResult {
    // Accounts validation.

    // config
    // - owner must be this program
    // - must be initialized
    check_config(ctx.accounts.config, program_id)?;

    // stake
    // - have the correct PDA derivation
    // - be uninitialized (empty data)
    //
    // NOTE: The stake account is created and assigned to the program, so it needs
    // to be pre-funded with the minimum rent balance by the caller.
    let (derivation, bump) = find_stake_pda(
        ctx.accounts.stake_authority.key,
        ctx.accounts.config.key,
        program_id,
    );
    require!(
        ctx.accounts.stake.key == &derivation,
        ProgramError::InvalidSeeds,
        "stake"
    );
    require!(
        ctx.accounts.stake.data_is_empty(),
        ProgramError::AccountAlreadyInitialized,
        "stake"
    );

    // Ensure the account is rent exempt.
    require!(
        ctx.accounts.stake.lamports() >= Rent::get()?.minimum_balance(Stake::LEN),
        ProgramError::AccountNotRentExempt,
        "stake",
    );

    // Allocate and assign.
    let bump_seed = [bump];
    let signer_seeds = get_stake_pda_signer_seeds(
        ctx.accounts.stake_authority.key,
        ctx.accounts.config.key,
        &bump_seed,
    );
    invoke_signed(
        &system_instruction::allocate(ctx.accounts.stake.key, Stake::LEN as u64),
        &[ctx.accounts.stake.clone()],
        &[&signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(ctx.accounts.stake.key, program_id),
        &[ctx.accounts.stake.clone()],
        &[&signer_seeds],
    )?;

    // Initialize the stake account.
    let mut data = ctx.accounts.stake.try_borrow_mut_data()?;
    let stake = bytemuck::from_bytes_mut::<Stake>(&mut data);
    *stake = Stake::new(*ctx.accounts.stake_authority.key);

    Ok(())
}
