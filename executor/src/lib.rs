#[cfg(feature = "bpf-entrypoint")]
pub mod entrypoint;
pub mod instruction;
pub mod processor;
pub mod state;

solana_program::declare_id!("UnstakeExec11111111111111111111111111111111");
