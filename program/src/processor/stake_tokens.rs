use solana_program::{
    clock::Clock, entrypoint::ProgramResult, msg, program_error::ProgramError, pubkey::Pubkey,
    sysvar::Sysvar,
};
use spl_token_2022::{
    extension::PodStateWithExtensions,
    pod::{PodAccount, PodCOption, PodMint},
};

use crate::{
    err,
    error::StakeError,
    events::{self, Staked},
    instruction::accounts::{Context, StakeTokensAccounts},
    processor::{check_stake, unpack_initialized_mut},
    require,
    state::{Config, Stake},
};

/// Locks tokens from the source token account in the vault.
///
/// The lock expires `lock_duration_seconds` after the current clock time;
/// a stake can only be locked while it is inactive.
///
/// 0. `[w]` Vault config
/// 1. `[w]` Stake
/// 2. `[s]` Stake authority
/// 3. `[w]` Source token account
/// 4. `[s]` Source token account authority (owner or delegate)
/// 5. `[ ]` Mint
/// 6. `[w]` Vault token account
/// 7. `[ ]` SPL Token 2022 program
pub fn process_stake_tokens<'info>(
    program_id: &Pubkey,
    ctx: Context<'info, StakeTokensAccounts<'info>>,
    amount: u64,
) -> ProgramResult {
    require!(amount > 0, StakeError::InvalidAmount, "amount");

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

    // stake authority
    // - must be a signer
    // - must match the authority on the stake account
    require!(
        ctx.accounts.stake_authority.is_signer,
        ProgramError::MissingRequiredSignature,
        "stake authority",
    );
    require!(
        ctx.accounts.stake_authority.key == stake.authority(),
        StakeError::Unauthorized,
        "stake authority",
    );

    // source token account authority
    // - must be a signer (owner or approved delegate)
    require!(
        ctx.accounts.source_token_account_authority.is_signer,
        ProgramError::MissingRequiredSignature,
        "source token account authority",
    );

    // vault
    // - must be the token account on the vault config
    require!(
        ctx.accounts.vault.key == config.vault(),
        StakeError::IncorrectVaultAccount,
    );
    require!(
        ctx.accounts.vault.key != ctx.accounts.source_token_account.key,
        StakeError::IncorrectVaultAccount,
        "vault matches source token account"
    );
    let vault_borrow = ctx.accounts.vault.try_borrow_data()?;
    let vault = PodStateWithExtensions::<PodAccount>::unpack(&vault_borrow)?;

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

    // source token account
    // - must hold the vault mint
    // - must hold at least `amount` tokens
    // - a delegate authority must be allowed to move at least `amount` tokens
    let source_borrow = ctx.accounts.source_token_account.try_borrow_data()?;
    let source = PodStateWithExtensions::<PodAccount>::unpack(&source_borrow)?;
    require!(
        &source.base.mint == ctx.accounts.mint.key,
        StakeError::InvalidMint,
        "source token account mint"
    );
    let balance = u64::from(source.base.amount);
    if balance < amount {
        return err!(
            StakeError::InsufficientFunds,
            "balance ({}) below requested amount ({})",
            balance,
            amount
        );
    }
    let source_authority = ctx.accounts.source_token_account_authority.key;
    if &source.base.owner != source_authority {
        require!(
            source.base.delegate == PodCOption::some(*source_authority),
            StakeError::InsufficientFunds,
            "source token account authority is not the owner or delegate"
        );
        let allowance = u64::from(source.base.delegated_amount);
        if allowance < amount {
            return err!(
                StakeError::InsufficientFunds,
                "allowance ({}) below requested amount ({})",
                allowance,
                amount
            );
        }
    }

    // Lock the stake and update the custody ledger.
    let now = Clock::get()?.unix_timestamp as u64;
    let unlock_timestamp = stake.lock(amount, now, config.lock_duration_seconds())?;
    config.record_stake(amount)?;

    let event = Staked {
        authority: *stake.authority(),
        amount,
        unlock_timestamp,
    };

    drop(source_borrow);
    drop(mint_borrow);
    drop(vault_borrow);
    spl_token_2022::onchain::invoke_transfer_checked(
        &spl_token_2022::ID,
        ctx.accounts.source_token_account.clone(),
        ctx.accounts.mint.clone(),
        ctx.accounts.vault.clone(),
        ctx.accounts.source_token_account_authority.clone(),
        ctx.remaining_accounts,
        amount,
        decimals,
        &[],
    )?;

    events::emit(&event);
    msg!("Staked {} token(s), unlocking at {}", amount, unlock_timestamp);

    Ok(())
}
