//! Program entrypoint for the unstake executor.

use {
    crate::processor,
    lock_vault_program::error::StakeError,
    solana_program::{
        account_info::AccountInfo, entrypoint::ProgramResult, program_error::PrintProgramError,
        pubkey::Pubkey,
    },
};

solana_program::entrypoint!(process_executor_instruction);

fn process_executor_instruction<'a>(
    program_id: &'a Pubkey,
    accounts: &'a [AccountInfo<'a>],
    instruction_data: &[u8],
) -> ProgramResult {
    // errors bubbled up from the vault program keep their codes
    processor::process_instruction(program_id, accounts, instruction_data).map_err(|error| {
        error.print::<StakeError>();
        error
    })
}
