use solana_program::{
    clock::Clock, entrypoint::ProgramResult, program::set_return_data, pubkey::Pubkey,
    sysvar::Sysvar,
};

use crate::{
    instruction::accounts::{CanReleaseAccounts, Context},
    processor::{check_config, check_stake, unpack_initialized},
    state::Stake,
};

/// Returns `1` when the stake can be released now and `0` otherwise.
///
/// 0. `[ ]` Vault config
/// 1. `[ ]` Stake
pub fn process_can_release(program_id: &Pubkey, ctx: Context<CanReleaseAccounts>) -> ProgramResult {
    check_config(ctx.accounts.config, program_id)?;
    check_stake(ctx.accounts.stake, ctx.accounts.config.key, program_id)?;

    let data = ctx.accounts.stake.try_borrow_data()?;
    let stake = unpack_initialized::<Stake>(&data)?;

    let now = Clock::get()?.unix_timestamp as u64;
    set_return_data(&[u8::from(stake.can_release(now))]);

    Ok(())
}
