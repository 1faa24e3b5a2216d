use solana_program::{
    clock::Clock, entrypoint::ProgramResult, msg, program_error::ProgramError, pubkey::Pubkey,
    sysvar::Sysvar,
};
use spl_token_2022::{
    extension::PodStateWithExtensions,
    pod::{PodAccount, PodMint},
};

use crate::{
    error::StakeError,
    events::{self, Unstaked},
    instruction::accounts::{Context, ReleaseStakeAccounts},
    processor::{check_stake, unpack_initialized_mut},
    require,
    state::{create_vault_authority_pda, get_vault_authority_pda_signer_seeds, Config, Stake},
};

/// Releases an expired stake, paying the full amount back to the stake
/// authority's token account.
///
/// The release authority is either the stake authority itself or the
/// executor registered on the vault config.
///
/// 0. `[w]` Vault config
/// 1. `[w]` Stake
/// 2. `[s]` Release authority
/// 3. `[w]` Vault token account
/// 4. `[ ]` Vault authority
/// 5. `[w]` Destination token account
/// 6. `[ ]` Mint
/// 7. `[ ]` SPL Token 2022 program
pub fn process_release_stake<'info>(
    program_id: &Pubkey,
    ctx: Context<'info, ReleaseStakeAccounts<'info>>,
) -> ProgramResult {
    // Account validation.

    // config
    // - owner must be the vault program
    // - must be initialized
    require!(
        ctx.accounts.config.owner == program_id,
        ProgramError::InvalidAccountOwner,
        "config"
    );
    let mut config_borrow = ctx.accounts.config.try_borrow_mut_data()?;
    let config = unpack_initialized_mut::<Config>(&mut config_borrow)?;

    // stake
    // - owner must be the vault program
    // - must be initialized
    // - must have the correct derivation
    check_stake(ctx.accounts.stake, ctx.accounts.config.key, program_id)?;
    let mut stake_borrow = ctx.accounts.stake.try_borrow_mut_data()?;
    let stake = unpack_initialized_mut::<Stake>(&mut stake_borrow)?;

    // release authority
    // - must be a signer
    // - must be the stake authority or the vault executor
    require!(
        ctx.accounts.release_authority.is_signer,
        ProgramError::MissingRequiredSignature,
        "release authority",
    );
    require!(
        config.is_release_authority(ctx.accounts.release_authority.key, stake.authority()),
        StakeError::Unauthorized,
        "release authority",
    );

    // vault
    // - must be the token account on the vault config
    // - must not be the destination
    require!(
        ctx.accounts.vault.key == config.vault(),
        StakeError::IncorrectVaultAccount,
    );
    require!(
        ctx.accounts.vault.key != ctx.accounts.destination_token_account.key,
        StakeError::InvalidDestinationAccount,
        "vault matches destination token account"
    );
    let vault_borrow = ctx.accounts.vault.try_borrow_data()?;
    let vault = PodStateWithExtensions::<PodAccount>::unpack(&vault_borrow)?;

    // vault authority
    // - derivation must match
    let bump = [config.vault_authority_bump()];
    let vault_signer = create_vault_authority_pda(ctx.accounts.config.key, &bump, program_id)?;
    require!(
        ctx.accounts.vault_authority.key == &vault_signer,
        StakeError::InvalidTokenOwner,
        "vault authority",
    );
    let signer_seeds = get_vault_authority_pda_signer_seeds(ctx.accounts.config.key, &bump);

    // mint
    // - must match the vault mint
    require!(
        &vault.base.mint == ctx.accounts.mint.key,
        StakeError::InvalidMint,
        "mint"
    );
    let mint_borrow = ctx.accounts.mint.try_borrow_data()?;
    let mint = PodStateWithExtensions::<PodMint>::unpack(&mint_borrow)?;
    let decimals = mint.base.decimals;

    // token program
    require!(
        ctx.accounts.token_program.key == &spl_token_2022::ID,
        ProgramError::IncorrectProgramId,
        "token program"
    );

    // destination token account
    // - must be owned by the stake authority
    // - must hold the vault mint
    let destination_borrow = ctx.accounts.destination_token_account.try_borrow_data()?;
    let destination = PodStateWithExtensions::<PodAccount>::unpack(&destination_borrow)?;
    require!(
        &destination.base.owner == stake.authority(),
        StakeError::InvalidDestinationAccount,
        "destination token account owner"
    );
    require!(
        &destination.base.mint == ctx.accounts.mint.key,
        StakeError::InvalidMint,
        "destination token account mint"
    );

    // Release the stake and update the custody ledger.
    let now = Clock::get()?.unix_timestamp as u64;
    let amount = stake.release(now)?;

    // The vault must be able to cover the payout.
    let vault_balance = u64::from(vault.base.amount);
    require!(
        vault_balance >= amount,
        StakeError::PayoutFailure,
        "vault balance ({}) below stake amount ({})",
        vault_balance,
        amount
    );

    config.record_release(amount)?;

    let event = Unstaked {
        authority: *stake.authority(),
        release_authority: *ctx.accounts.release_authority.key,
        amount,
        timestamp: now,
    };

    drop(destination_borrow);
    drop(mint_borrow);
    drop(vault_borrow);
    spl_token_2022::onchain::invoke_transfer_checked(
        &spl_token_2022::ID,
        ctx.accounts.vault.clone(),
        ctx.accounts.mint.clone(),
        ctx.accounts.destination_token_account.clone(),
        ctx.accounts.vault_authority.clone(),
        ctx.remaining_accounts,
        amount,
        decimals,
        &[&signer_seeds],
    )?;

    events::emit(&event);
    msg!(
        "Released {} token(s) to {}",
        amount,
        ctx.accounts.destination_token_account.key
    );

    Ok(())
}
