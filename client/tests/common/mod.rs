#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashMap,
};

use futures::future::BoxFuture;
use solana_client::client_error::{
    ClientError,
    ClientErrorKind,
};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use streak_client::{
    chain::{
        ChainClient,
        Checkpoint,
        ConfirmationStatus,
    },
    config::StreakConfig,
    wallet::SendingWallet,
};

pub fn test_config() -> StreakConfig {
    StreakConfig::new(Pubkey::new_unique(), "http://localhost:8899")
}

pub fn custom_error(msg: &str) -> ClientError {
    ClientError::from(ClientErrorKind::Custom(msg.to_string()))
}

/// In-memory chain. Failures are injected per operation and consumed on first use.
pub struct MockChain {
    pub checkpoint: Checkpoint,
    pub accounts: RefCell<HashMap<Pubkey, Vec<u8>>>,
    pub confirmation: RefCell<ConfirmationStatus>,
    pub fetch_error: RefCell<Option<ClientError>>,
    pub send_error: RefCell<Option<ClientError>>,
    pub sent: RefCell<Vec<Transaction>>,
    pub confirmed: RefCell<Vec<Signature>>,
}

impl Default for MockChain {
    fn default() -> Self {
        Self {
            checkpoint: Checkpoint {
                blockhash: Hash::new_unique(),
                last_valid_block_height: 150,
            },
            accounts: RefCell::default(),
            confirmation: RefCell::new(ConfirmationStatus::Confirmed),
            fetch_error: RefCell::default(),
            send_error: RefCell::default(),
            sent: RefCell::default(),
            confirmed: RefCell::default(),
        }
    }
}

impl MockChain {
    pub fn with_account(self, address: Pubkey, data: Vec<u8>) -> Self {
        self.accounts.borrow_mut().insert(address, data);
        self
    }

    pub fn with_confirmation(self, status: ConfirmationStatus) -> Self {
        *self.confirmation.borrow_mut() = status;
        self
    }

    pub fn with_send_error(self, error: ClientError) -> Self {
        *self.send_error.borrow_mut() = Some(error);
        self
    }

    pub fn with_fetch_error(self, error: ClientError) -> Self {
        *self.fetch_error.borrow_mut() = Some(error);
        self
    }
}

impl ChainClient for MockChain {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        if let Some(error) = self.fetch_error.borrow_mut().take() {
            return Err(error);
        }
        Ok(self.accounts.borrow().get(address).cloned())
    }

    async fn get_latest_checkpoint(&self) -> Result<Checkpoint, ClientError> {
        Ok(self.checkpoint)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, ClientError> {
        if let Some(error) = self.send_error.borrow_mut().take() {
            return Err(error);
        }
        transaction.verify()?;
        self.sent.borrow_mut().push(transaction.clone());
        Ok(transaction.signatures[0])
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<ConfirmationStatus, ClientError> {
        assert_eq!(checkpoint, &self.checkpoint);
        self.confirmed.borrow_mut().push(*signature);
        Ok(self.confirmation.borrow().clone())
    }
}

/// A wallet that signs and "submits" on its own, recording what it was asked to send.
pub struct MockSendingWallet {
    pub keypair: Keypair,
    pub sent: RefCell<Vec<Transaction>>,
}

impl MockSendingWallet {
    pub fn new() -> Self {
        Self {
            keypair: Keypair::new(),
            sent: RefCell::default(),
        }
    }
}

impl SendingWallet for MockSendingWallet {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    fn sign_and_send(
        &self,
        mut transaction: Transaction,
    ) -> BoxFuture<'_, Result<Signature, ClientError>> {
        let blockhash = transaction.message.recent_blockhash;
        let result = transaction
            .try_sign(&[&self.keypair], blockhash)
            .map_err(ClientError::from)
            .map(|()| {
                let signature = transaction.signatures[0];
                self.sent.borrow_mut().push(transaction);
                signature
            });
        Box::pin(futures::future::ready(result))
    }
}
