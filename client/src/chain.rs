//! The chain read/write surface the streak client depends on, and its implementation over the
//! nonblocking Solana RPC client.

use std::time::Duration;

use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;

/// Interval between signature status polls while awaiting confirmation.
pub const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A recent blockhash and the last block height at which transactions using it are still valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Confirmed,
    /// The transaction landed but failed.
    Failed(TransactionError),
    /// The block height passed the checkpoint's last valid block height without the transaction
    /// being confirmed.
    Expired,
}

#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Returns the account's data, or `None` if no account exists at `address`.
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClientError>;

    async fn get_latest_checkpoint(&self) -> Result<Checkpoint, ClientError>;

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, ClientError>;

    /// Waits until `signature` reaches the client's commitment level or `checkpoint` expires.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<ConfirmationStatus, ClientError>;
}

impl ChainClient for RpcClient {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn get_latest_checkpoint(&self) -> Result<Checkpoint, ClientError> {
        let (blockhash, last_valid_block_height) = self
            .get_latest_blockhash_with_commitment(self.commitment())
            .await?;
        Ok(Checkpoint {
            blockhash,
            last_valid_block_height,
        })
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, ClientError> {
        RpcClient::send_transaction(self, transaction).await
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<ConfirmationStatus, ClientError> {
        loop {
            if let Some(status) = landed_status(self, signature).await? {
                return Ok(status);
            }

            let block_height = self
                .get_block_height_with_commitment(self.commitment())
                .await?;
            if block_height > checkpoint.last_valid_block_height {
                // The transaction may have landed between the status and block height reads.
                let status = landed_status(self, signature).await?;
                return Ok(status.unwrap_or(ConfirmationStatus::Expired));
            }

            tokio::time::sleep(CONFIRMATION_POLL_INTERVAL).await;
        }
    }
}

/// The signature's final status at the client's commitment, or `None` if it hasn't landed yet.
async fn landed_status(
    rpc: &RpcClient,
    signature: &Signature,
) -> Result<Option<ConfirmationStatus>, ClientError> {
    let status = rpc
        .get_signature_status_with_commitment(signature, rpc.commitment())
        .await?;
    Ok(status.map(|result| match result {
        Ok(()) => ConfirmationStatus::Confirmed,
        Err(error) => ConfirmationStatus::Failed(error),
    }))
}
