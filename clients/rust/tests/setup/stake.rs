use lock_vault_client::{
    accounts::Stake,
    instructions::{InitializeStakeBuilder, StakeTokensBuilder},
    pdas::find_stake_pda,
};
use solana_program_test::{BanksClientError, ProgramTestContext};
use solana_sdk::{
    pubkey::Pubkey, signature::Keypair, signer::Signer, system_instruction,
    transaction::Transaction,
};

use super::{
    config::ConfigManager,
    token::{create_token_account, mint_to, TOKEN_ACCOUNT_EXTENSIONS},
};

pub struct StakeManager {
    // Stake account.
    pub stake: Pubkey,
    // Stake authority.
    pub authority: Keypair,
    // Token account of the stake authority.
    pub token_account: Pubkey,
}

impl StakeManager {
    /// Creates a stake account and a token account holding `balance` tokens for a
    /// new authority.
    pub async fn new(context: &mut ProgramTestContext, manager: &ConfigManager, balance: u64) -> Self {
        let authority = Keypair::new();
        let stake = create_stake(context, &authority.pubkey(), &manager.config).await;

        let token_account = Keypair::new();
        create_token_account(
            context,
            &authority.pubkey(),
            &token_account,
            &manager.mint,
            TOKEN_ACCOUNT_EXTENSIONS,
        )
        .await
        .unwrap();

        if balance > 0 {
            mint_to(
                context,
                &manager.mint,
                &manager.mint_authority,
                &token_account.pubkey(),
                balance,
                0,
            )
            .await
            .unwrap();
        }

        Self {
            stake,
            authority,
            token_account: token_account.pubkey(),
        }
    }

    fn stake_tokens_transaction(
        &self,
        context: &ProgramTestContext,
        manager: &ConfigManager,
        amount: u64,
    ) -> Transaction {
        let stake_ix = StakeTokensBuilder::new()
            .config(manager.config)
            .stake(self.stake)
            .stake_authority(self.authority.pubkey())
            .source_token_account(self.token_account)
            .mint(manager.mint)
            .vault(manager.vault)
            .amount(amount)
            .instruction();

        Transaction::new_signed_with_payer(
            &[stake_ix],
            Some(&context.payer.pubkey()),
            &[&context.payer, &self.authority],
            context.last_blockhash,
        )
    }

    /// Stakes `amount` tokens from the authority's token account.
    pub async fn stake_tokens(
        &self,
        context: &mut ProgramTestContext,
        manager: &ConfigManager,
        amount: u64,
    ) -> Result<(), BanksClientError> {
        context.get_new_latest_blockhash().await.unwrap();

        let tx = self.stake_tokens_transaction(context, manager, amount);
        context.banks_client.process_transaction(tx).await
    }

    /// Stakes `amount` tokens and returns the transaction logs.
    pub async fn stake_tokens_with_logs(
        &self,
        context: &mut ProgramTestContext,
        manager: &ConfigManager,
        amount: u64,
    ) -> Vec<String> {
        context.get_new_latest_blockhash().await.unwrap();

        let tx = self.stake_tokens_transaction(context, manager, amount);
        let result = context
            .banks_client
            .process_transaction_with_metadata(tx)
            .await
            .unwrap();
        assert!(result.result.is_ok());

        result.metadata.unwrap().log_messages
    }
}

pub async fn create_stake(
    context: &mut ProgramTestContext,
    authority: &Pubkey,
    config: &Pubkey,
) -> Pubkey {
    let (stake_pda, _) = find_stake_pda(authority, config);

    let transfer_ix = system_instruction::transfer(
        &context.payer.pubkey(),
        &stake_pda,
        context
            .banks_client
            .get_rent()
            .await
            .unwrap()
            .minimum_balance(Stake::LEN),
    );

    let initialize_ix = InitializeStakeBuilder::new()
        .config(*config)
        .stake(stake_pda)
        .stake_authority(*authority)
        .instruction();

    let tx = Transaction::new_signed_with_payer(
        &[transfer_ix, initialize_ix],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.last_blockhash,
    );
    context.banks_client.process_transaction(tx).await.unwrap();

    stake_pda
}
