//! Signer capabilities. A wallet either only signs, leaving submission to the client, or signs and
//! submits on its own. The capability is fixed when the [`Wallet`] is constructed.

use futures::future::BoxFuture;
use solana_client::client_error::ClientError;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::error::CheckInError;

/// A wallet that signs and submits transactions itself, e.g. an external wallet adapter that
/// prompts its user before sending.
pub trait SendingWallet {
    fn pubkey(&self) -> Pubkey;

    /// Signs `transaction`, which already carries its recent blockhash and fee payer, submits it
    /// and returns its signature.
    fn sign_and_send(
        &self,
        transaction: Transaction,
    ) -> BoxFuture<'_, Result<Signature, ClientError>>;
}

#[derive(Clone, Copy)]
pub enum WalletSigner<'a> {
    /// Signs locally; the client submits the signed transaction.
    SignOnly(&'a dyn Signer),
    /// Signs and submits; the client only awaits confirmation.
    SignAndSend(&'a dyn SendingWallet),
}

impl WalletSigner<'_> {
    pub fn pubkey(&self) -> Pubkey {
        match self {
            Self::SignOnly(signer) => signer.pubkey(),
            Self::SignAndSend(wallet) => wallet.pubkey(),
        }
    }
}

/// The connection state of a user's wallet as seen by the client.
#[derive(Clone, Copy)]
pub struct Wallet<'a> {
    identity: Option<Pubkey>,
    signer: Option<WalletSigner<'a>>,
}

impl<'a> Wallet<'a> {
    pub fn new(identity: Option<Pubkey>, signer: Option<WalletSigner<'a>>) -> Self {
        Self { identity, signer }
    }

    pub fn disconnected() -> Self {
        Self::new(None, None)
    }

    /// A connected wallet backed by a local signer such as a keypair.
    pub fn from_signer(signer: &'a dyn Signer) -> Self {
        Self::new(
            Some(signer.pubkey()),
            Some(WalletSigner::SignOnly(signer)),
        )
    }

    pub fn from_sending_wallet(wallet: &'a dyn SendingWallet) -> Self {
        Self::new(
            Some(wallet.pubkey()),
            Some(WalletSigner::SignAndSend(wallet)),
        )
    }

    pub fn identity(&self) -> Option<Pubkey> {
        self.identity
    }

    pub fn is_connected(&self) -> bool {
        self.identity.is_some()
    }

    /// Resolves the wallet's identity and a signer able to sign for it.
    pub fn resolve(&self) -> Result<(Pubkey, WalletSigner<'a>), CheckInError> {
        let identity = self.identity.ok_or(CheckInError::WalletNotConnected)?;
        let signer = self.signer.ok_or(CheckInError::UnsupportedSigner)?;
        if signer.pubkey() != identity {
            return Err(CheckInError::UnsupportedSigner);
        }
        Ok((identity, signer))
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::signature::Keypair;

    use super::*;

    #[test]
    fn disconnected_wallet() {
        let wallet = Wallet::disconnected();
        assert!(!wallet.is_connected());
        assert!(matches!(
            wallet.resolve(),
            Err(CheckInError::WalletNotConnected)
        ));
    }

    #[test]
    fn identity_without_signer_is_unsupported() {
        let wallet = Wallet::new(Some(Pubkey::new_unique()), None);
        assert!(wallet.is_connected());
        assert!(matches!(
            wallet.resolve(),
            Err(CheckInError::UnsupportedSigner)
        ));
    }

    #[test]
    fn mismatched_signer_is_unsupported() {
        let keypair = Keypair::new();
        let wallet = Wallet::new(
            Some(Pubkey::new_unique()),
            Some(WalletSigner::SignOnly(&keypair)),
        );
        assert!(matches!(
            wallet.resolve(),
            Err(CheckInError::UnsupportedSigner)
        ));
    }

    #[test]
    fn keypair_wallet_resolves() {
        let keypair = Keypair::new();
        let wallet = Wallet::from_signer(&keypair);
        let (identity, signer) = wallet.resolve().unwrap();
        assert_eq!(identity, keypair.pubkey());
        assert!(matches!(signer, WalletSigner::SignOnly(_)));
    }
}
