#![allow(dead_code)]

#[macro_export]
macro_rules! assert_instruction_error {
    ( $error:expr, $matcher:pat ) => {
        match $error {
            solana_program_test::BanksClientError::TransactionError(
                solana_sdk::transaction::TransactionError::InstructionError(_, $matcher),
            ) => {
                assert!(true)
            }
            err => assert!(false, "Expected instruction error but got '{:#?}'", err),
        };
    };
}

#[macro_export]
macro_rules! assert_custom_error {
    ( $error:expr, $matcher:pat ) => {
        match $error {
            solana_program_test::BanksClientError::TransactionError(
                solana_sdk::transaction::TransactionError::InstructionError(
                    _,
                    solana_sdk::instruction::InstructionError::Custom(x),
                ),
            ) => match num_traits::FromPrimitive::from_i32(x as i32) {
                Some($matcher) => assert!(true),
                Some(other) => {
                    assert!(
                        false,
                        "Expected another custom instruction error than '{:#?}'",
                        other
                    )
                }
                None => assert!(false, "Expected custom instruction error"),
            },
            err => assert!(
                false,
                "Expected custom instruction error but got '{:#?}'",
                err
            ),
        };
    };
}

#[macro_export]
macro_rules! get_account {
    ( $context:expr, $pubkey:expr ) => {{
        let account = $context
            .banks_client
            .get_account($pubkey)
            .await
            .expect(&format!("account not found: {}", $pubkey));

        assert!(account.is_some());

        account.unwrap()
    }};
}

/// Reads a `Pod` account from the test bank.
#[macro_export]
macro_rules! get_pod_account {
    ( $context:expr, $pubkey:expr, $type:ty ) => {{
        let account = get_account!($context, $pubkey);
        bytemuck::pod_read_unaligned::<$type>(&account.data)
    }};
}

// Declared after the macros so they are in scope for the setup modules.
pub mod config;
pub mod stake;
pub mod token;

use base64::{engine::general_purpose::STANDARD, Engine};
use solana_program_test::{ProgramTest, ProgramTestContext};
use solana_sdk::clock::Clock;

/// Program test with both the vault and the executor programs loaded.
pub fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new("lock_vault_program", lock_vault_client::ID, None);
    program_test.add_program(
        "unstake_executor_program",
        lock_vault_client::EXECUTOR_ID,
        None,
    );
    program_test
}

/// Returns the current unix timestamp of the test bank.
pub async fn current_timestamp(context: &mut ProgramTestContext) -> u64 {
    let clock = context.banks_client.get_sysvar::<Clock>().await.unwrap();
    clock.unix_timestamp as u64
}

/// Moves the clock forward by `seconds`.
pub async fn warp_clock(context: &mut ProgramTestContext, seconds: u64) {
    let mut clock = context.banks_client.get_sysvar::<Clock>().await.unwrap();
    clock.unix_timestamp = clock.unix_timestamp.saturating_add(seconds as i64);
    context.set_sysvar::<Clock>(&clock);
}

/// Returns the `sol_log_data` records found in the transaction logs.
///
/// Each `Program data:` line holds the base64 encoding of every logged slice,
/// separated by spaces; the slices are concatenated back into one record.
pub fn event_records(logs: &[String]) -> Vec<Vec<u8>> {
    logs.iter()
        .filter_map(|log| log.strip_prefix("Program data: "))
        .map(|data| {
            data.split(' ')
                .flat_map(|slice| STANDARD.decode(slice).unwrap())
                .collect()
        })
        .collect()
}
