use lock_vault_program::{instruction::LockVaultInstruction, require};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    instruction::{
        accounts::{Context, ExecuteReleaseAccounts},
        UnstakeExecutorInstruction,
    },
    state::{find_executor_authority_pda, get_executor_authority_pda_signer_seeds},
};

#[inline(always)]
pub fn process_instruction<'a>(
    program_id: &Pubkey,
    accounts: &'a [AccountInfo<'a>],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = UnstakeExecutorInstruction::unpack(instruction_data)?;

    match instruction {
        UnstakeExecutorInstruction::ExecuteRelease => {
            msg!("Instruction: ExecuteRelease");
            process_execute_release(program_id, ExecuteReleaseAccounts::context(accounts)?)
        }
    }
}

/// Releases an expired stake by signing the vault `ReleaseStake` instruction
/// with the executor authority PDA.
///
/// The vault program performs every stake check; it rejects the release
/// unless the executor authority is the executor registered on the config.
fn process_execute_release<'info>(
    program_id: &Pubkey,
    ctx: Context<'info, ExecuteReleaseAccounts<'info>>,
) -> ProgramResult {
    // Account validation.

    // lock vault program
    // - must be the known vault program
    require!(
        ctx.accounts.lock_vault_program.key == &lock_vault_program::ID,
        ProgramError::IncorrectProgramId,
        "lock vault program"
    );

    // executor authority
    // - derivation must match
    let (executor_authority, bump) =
        find_executor_authority_pda(ctx.accounts.config.key, program_id);
    require!(
        ctx.accounts.executor_authority.key == &executor_authority,
        ProgramError::InvalidSeeds,
        "executor authority"
    );

    let mut accounts = vec![
        AccountMeta::new(*ctx.accounts.config.key, false),
        AccountMeta::new(*ctx.accounts.stake.key, false),
        AccountMeta::new_readonly(executor_authority, true),
        AccountMeta::new(*ctx.accounts.vault.key, false),
        AccountMeta::new_readonly(*ctx.accounts.vault_authority.key, false),
        AccountMeta::new(*ctx.accounts.destination_token_account.key, false),
        AccountMeta::new_readonly(*ctx.accounts.mint.key, false),
        AccountMeta::new_readonly(*ctx.accounts.token_program.key, false),
    ];
    accounts.extend(ctx.remaining_accounts.iter().map(|account| {
        if account.is_writable {
            AccountMeta::new(*account.key, account.is_signer)
        } else {
            AccountMeta::new_readonly(*account.key, account.is_signer)
        }
    }));

    let instruction = Instruction {
        program_id: lock_vault_program::ID,
        accounts,
        data: LockVaultInstruction::ReleaseStake.pack(),
    };

    let mut account_infos = vec![
        ctx.accounts.config.clone(),
        ctx.accounts.stake.clone(),
        ctx.accounts.executor_authority.clone(),
        ctx.accounts.vault.clone(),
        ctx.accounts.vault_authority.clone(),
        ctx.accounts.destination_token_account.clone(),
        ctx.accounts.mint.clone(),
        ctx.accounts.token_program.clone(),
        ctx.accounts.lock_vault_program.clone(),
    ];
    account_infos.extend_from_slice(ctx.remaining_accounts);

    let bump_seed = [bump];
    let signer_seeds = get_executor_authority_pda_signer_seeds(ctx.accounts.config.key, &bump_seed);
    invoke_signed(&instruction, &account_infos, &[&signer_seeds])?;

    msg!("Executed release of stake {}", ctx.accounts.stake.key);

    Ok(())
}
