//! Program entrypoint for the lock vault.
//!
//! Failures are logged as `StakeError` before they are returned. Token-2022
//! conditions are checked by the processors ahead of any transfer, so a custom
//! code returned from here always belongs to the vault.

use {
    crate::{error::StakeError, processor},
    solana_program::{
        account_info::AccountInfo, entrypoint::ProgramResult, program_error::PrintProgramError,
        pubkey::Pubkey,
    },
};

solana_program::entrypoint!(process_lock_vault_instruction);

fn process_lock_vault_instruction<'a>(
    program_id: &'a Pubkey,
    accounts: &'a [AccountInfo<'a>],
    instruction_data: &[u8],
) -> ProgramResult {
    processor::process_instruction(program_id, accounts, instruction_data).map_err(|error| {
        error.print::<StakeError>();
        error
    })
}
