use solana_program::{entrypoint::ProgramResult, program::set_return_data, pubkey::Pubkey};

use crate::{
    instruction::{
        accounts::{Context, GetStakeAccounts},
        GetStakeReturnData,
    },
    processor::{check_config, check_stake, unpack_initialized},
    state::Stake,
};

/// Returns the amount, unlock timestamp and active flag of a stake as
/// `GetStakeReturnData`.
///
/// 0. `[ ]` Vault config
/// 1. `[ ]` Stake
pub fn process_get_stake(program_id: &Pubkey, ctx: Context<GetStakeAccounts>) -> ProgramResult {
    check_config(ctx.accounts.config, program_id)?;
    check_stake(ctx.accounts.stake, ctx.accounts.config.key, program_id)?;

    let data = ctx.accounts.stake.try_borrow_data()?;
    let stake = unpack_initialized::<Stake>(&data)?;

    let stake_data =
        GetStakeReturnData::new(stake.amount(), stake.unlock_timestamp(), stake.is_active());
    set_return_data(bytemuck::bytes_of(&stake_data));

    Ok(())
}
