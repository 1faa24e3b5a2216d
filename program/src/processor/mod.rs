use bytemuck::Pod;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    program_pack::IsInitialized, pubkey::Pubkey,
};

use crate::{
    instruction::{
        accounts::{
            CanReleaseAccounts, GetStakeAccounts, InitializeConfigAccounts,
            InitializeStakeAccounts, ReleaseStakeAccounts, StakeTokensAccounts,
        },
        LockVaultInstruction,
    },
    state::{find_stake_pda, Config, Stake},
};

mod can_release;
mod get_stake;
mod initialize_config;
mod initialize_stake;
mod release_stake;
mod stake_tokens;

#[inline(always)]
pub fn process_instruction<'a>(
    program_id: &Pubkey,
    accounts: &'a [AccountInfo<'a>],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = LockVaultInstruction::unpack(instruction_data)?;

    match instruction {
        LockVaultInstruction::InitializeConfig {
            lock_duration_seconds,
        } => {
            msg!("Instruction: InitializeConfig");
            initialize_config::process_initialize_config(
                program_id,
                InitializeConfigAccounts::context(accounts)?,
                lock_duration_seconds,
            )
        }
        LockVaultInstruction::InitializeStake => {
            msg!("Instruction: InitializeStake");
            initialize_stake::process_initialize_stake(
                program_id,
                InitializeStakeAccounts::context(accounts)?,
            )
        }
        LockVaultInstruction::StakeTokens(amount) => {
            msg!("Instruction: StakeTokens");
            stake_tokens::process_stake_tokens(
                program_id,
                StakeTokensAccounts::context(accounts)?,
                amount,
            )
        }
        LockVaultInstruction::ReleaseStake => {
            msg!("Instruction: ReleaseStake");
            release_stake::process_release_stake(
                program_id,
                ReleaseStakeAccounts::context(accounts)?,
            )
        }
        LockVaultInstruction::CanRelease => {
            msg!("Instruction: CanRelease");
            can_release::process_can_release(program_id, CanReleaseAccounts::context(accounts)?)
        }
        LockVaultInstruction::GetStake => {
            msg!("Instruction: GetStake");
            get_stake::process_get_stake(program_id, GetStakeAccounts::context(accounts)?)
        }
    }
}

#[macro_export]
macro_rules! require {
    ( $constraint:expr, $error:expr $(,)? ) => {
        if !$constraint {
            return Err($error.into());
        }
    };
    ( $constraint:expr, $error:expr, $message:expr $(,)? ) => {
        if !$constraint {
            solana_program::msg!("Constraint failed: {}", $message);
            return Err($error.into());
        }
    };
    ( $constraint:expr, $error:expr, $message:literal, $($args:tt)+ ) => {
        require!( $constraint, $error, format!($message, $($args)+) );
    };
}

#[inline]
pub fn unpack_initialized<T: Pod + IsInitialized>(data: &[u8]) -> Result<&T, ProgramError> {
    let account =
        bytemuck::try_from_bytes::<T>(data).map_err(|_error| ProgramError::InvalidAccountData)?;

    require!(account.is_initialized(), ProgramError::UninitializedAccount);

    Ok(account)
}

/// Unpacks an initialized account from the given data and
/// returns a mutable reference to it.
#[inline]
pub fn unpack_initialized_mut<T: Pod + IsInitialized>(
    data: &mut [u8],
) -> Result<&mut T, ProgramError> {
    let account = bytemuck::try_from_bytes_mut::<T>(data)
        .map_err(|_error| ProgramError::InvalidAccountData)?;

    require!(account.is_initialized(), ProgramError::UninitializedAccount);

    Ok(account)
}

/// Checks that the config account is owned by the program and initialized.
#[inline]
pub(crate) fn check_config(config_info: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    require!(
        config_info.owner == program_id,
        ProgramError::InvalidAccountOwner,
        "config"
    );

    let data = config_info.try_borrow_data()?;
    unpack_initialized::<Config>(&data)?;

    Ok(())
}

/// Checks that the stake account is owned by the program, initialized and
/// derived from its authority and the given config.
#[inline]
pub(crate) fn check_stake(
    stake_info: &AccountInfo,
    config: &Pubkey,
    program_id: &Pubkey,
) -> ProgramResult {
    require!(
        stake_info.owner == program_id,
        ProgramError::InvalidAccountOwner,
        "stake"
    );

    let data = stake_info.try_borrow_data()?;
    let stake = unpack_initialized::<Stake>(&data)?;

    let (derivation, _) = find_stake_pda(stake.authority(), config, program_id);
    require!(
        stake_info.key == &derivation,
        ProgramError::InvalidSeeds,
        "stake"
    );

    Ok(())
}
