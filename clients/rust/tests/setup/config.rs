use lock_vault_client::{
    accounts::Config,
    instructions::InitializeConfigBuilder,
    pdas::{find_executor_authority_pda, find_vault_authority_pda},
};
use solana_program_test::ProgramTestContext;
use solana_sdk::{
    pubkey::Pubkey, signature::Keypair, signer::Signer, system_instruction,
    transaction::Transaction,
};

use super::token::{create_mint, create_token_account, TOKEN_ACCOUNT_EXTENSIONS};

/// Default lock duration of 1 hour.
pub const LOCK_DURATION_SECONDS: u64 = 3600;

pub struct ConfigManager {
    // Config account.
    pub config: Pubkey,
    // Executor allowed to release stakes.
    pub executor: Pubkey,
    // Mint account.
    pub mint: Pubkey,
    // Mint authority.
    pub mint_authority: Keypair,
    // Vault token account.
    pub vault: Pubkey,
    // Vault token account authority.
    pub vault_authority: Pubkey,
}

impl ConfigManager {
    /// Creates a vault with the Unstake Executor program as executor.
    pub async fn new(context: &mut ProgramTestContext) -> Self {
        let config = Keypair::new();
        let executor = find_executor_authority_pda(&config.pubkey()).0;
        Self::with_args(context, config, executor, LOCK_DURATION_SECONDS).await
    }

    pub async fn with_args(
        context: &mut ProgramTestContext,
        config: Keypair,
        executor: Pubkey,
        lock_duration_seconds: u64,
    ) -> Self {
        let mut manager = Self {
            config: config.pubkey(),
            executor,
            mint: Pubkey::default(),
            mint_authority: Keypair::new(),
            vault: Pubkey::default(),
            vault_authority: find_vault_authority_pda(&config.pubkey()).0,
        };

        // creates the mint

        let mint = Keypair::new();
        create_mint(
            context,
            &mint,
            &manager.mint_authority.pubkey(),
            Some(&manager.mint_authority.pubkey()),
            0,
        )
        .await
        .unwrap();

        manager.mint = mint.pubkey();

        // creates the vault (token account)

        let vault = Keypair::new();
        create_token_account(
            context,
            &manager.vault_authority,
            &vault,
            &manager.mint,
            TOKEN_ACCOUNT_EXTENSIONS,
        )
        .await
        .unwrap();

        manager.vault = vault.pubkey();

        // initializes the config

        let create_ix = system_instruction::create_account(
            &context.payer.pubkey(),
            &config.pubkey(),
            context
                .banks_client
                .get_rent()
                .await
                .unwrap()
                .minimum_balance(Config::LEN),
            Config::LEN as u64,
            &lock_vault_client::ID,
        );

        let initialize_ix = InitializeConfigBuilder::new()
            .config(config.pubkey())
            .executor(executor)
            .mint(manager.mint)
            .vault(manager.vault)
            .lock_duration_seconds(lock_duration_seconds)
            .instruction();

        context.get_new_latest_blockhash().await.unwrap();

        let tx = Transaction::new_signed_with_payer(
            &[create_ix, initialize_ix],
            Some(&context.payer.pubkey()),
            &[&context.payer, &config],
            context.last_blockhash,
        );
        context.banks_client.process_transaction(tx).await.unwrap();

        manager
    }
}
