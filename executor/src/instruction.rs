use shank::{ShankContext, ShankInstruction};
use solana_program::program_error::ProgramError;

/// Enum defining all instructions in the Unstake Executor program.
#[repr(C)]
#[derive(Clone, Debug, Eq, PartialEq, ShankContext, ShankInstruction)]
#[rustfmt::skip]
pub enum UnstakeExecutorInstruction {
    /// Releases an expired stake on behalf of its authority.
    ///
    /// Permissionless: anybody can crank the release once the stake is
    /// unlockable. Tokens are always paid to the stake authority's token
    /// account, the executor PDA only signs the vault release.
    ///
    /// Any remaining accounts are forwarded to the vault program (e.g. extra
    /// accounts required by a transfer hook).
    #[account(
        0,
        name = "executor_authority",
        desc = "Executor authority (pda of `['executor', config]`)"
    )]
    #[account(
        1,
        writable,
        name = "config",
        desc = "Vault config account"
    )]
    #[account(
        2,
        writable,
        name = "stake",
        desc = "Stake account"
    )]
    #[account(
        3,
        writable,
        name = "vault",
        desc = "Vault token account"
    )]
    #[account(
        4,
        name = "vault_authority",
        desc = "Vault authority (pda of `['token-owner', config]`)"
    )]
    #[account(
        5,
        writable,
        name = "destination_token_account",
        desc = "Token account of the stake authority"
    )]
    #[account(
        6,
        name = "mint",
        desc = "Stake token mint"
    )]
    #[account(
        7,
        name = "token_program",
        desc = "SPL Token 2022 program"
    )]
    #[account(
        8,
        name = "lock_vault_program",
        desc = "Lock Vault program"
    )]
    ExecuteRelease,
}

impl UnstakeExecutorInstruction {
    /// Packs a [UnstakeExecutorInstruction](enum.UnstakeExecutorInstruction.html) into a byte buffer.
    pub fn pack(&self) -> Vec<u8> {
        match self {
            UnstakeExecutorInstruction::ExecuteRelease => vec![0],
        }
    }

    /// Unpacks a byte buffer into a [UnstakeExecutorInstruction](enum.UnstakeExecutorInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.split_first() {
            // 0 - ExecuteRelease
            Some((&0, _)) => Ok(UnstakeExecutorInstruction::ExecuteRelease),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_execute_release() {
        let packed = UnstakeExecutorInstruction::ExecuteRelease.pack();
        assert_eq!(packed, vec![0]);
        assert_eq!(
            UnstakeExecutorInstruction::unpack(&packed).unwrap(),
            UnstakeExecutorInstruction::ExecuteRelease
        );
    }

    #[test]
    fn test_unpack_invalid_data() {
        assert_eq!(
            UnstakeExecutorInstruction::unpack(&[]).unwrap_err(),
            ProgramError::InvalidInstructionData
        );
        assert_eq!(
            UnstakeExecutorInstruction::unpack(&[1]).unwrap_err(),
            ProgramError::InvalidInstructionData
        );
    }
}
