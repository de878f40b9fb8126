//! Process-wide configuration, built once at startup and passed by reference to every component.

use std::str::FromStr;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use streak_interface::program::PLACEHOLDER_ID;

use crate::load_env;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid program id {value:?}: {reason}")]
    InvalidProgramId { value: String, reason: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Cluster {
    Devnet,
    Testnet,
    Mainnet,
    Localnet,
    Custom,
}

impl Cluster {
    /// Best-effort guess of the cluster an RPC endpoint points at, for display only.
    pub fn from_rpc_url(url: &str) -> Self {
        let url = url.to_ascii_lowercase();
        if url.contains("devnet") {
            Cluster::Devnet
        } else if url.contains("testnet") {
            Cluster::Testnet
        } else if url.contains("mainnet") {
            Cluster::Mainnet
        } else if url.contains("localhost") || url.contains("127.0.0.1") {
            Cluster::Localnet
        } else {
            Cluster::Custom
        }
    }
}

#[derive(Clone, Debug)]
pub struct StreakConfig {
    program_id: Pubkey,
    rpc_url: String,
    commitment: CommitmentConfig,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self::new(PLACEHOLDER_ID, DEFAULT_RPC_URL)
    }
}

impl StreakConfig {
    pub fn new(program_id: Pubkey, rpc_url: impl Into<String>) -> Self {
        Self {
            program_id,
            rpc_url: rpc_url.into(),
            commitment: CommitmentConfig::confirmed(),
        }
    }

    /// Reads `STREAK_PROGRAM_ID` and `STREAK_RPC_URL`, falling back to the placeholder program ID
    /// and the public devnet endpoint when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(load_env::program_id(), load_env::rpc_url())
    }

    /// Builds a config from optional raw values; `None` selects the default for that field.
    pub fn from_values(
        program_id: Option<String>,
        rpc_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let program_id = match program_id {
            Some(value) => parse_program_id(&value)?,
            None => PLACEHOLDER_ID,
        };
        let rpc_url = rpc_url.unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        Ok(Self::new(program_id, rpc_url))
    }

    pub fn with_commitment(self, commitment: CommitmentConfig) -> Self {
        Self { commitment, ..self }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }

    pub fn cluster(&self) -> Cluster {
        Cluster::from_rpc_url(&self.rpc_url)
    }

    /// Whether the program ID is still the placeholder that no real deployment uses.
    pub fn is_placeholder_program(&self) -> bool {
        self.program_id == PLACEHOLDER_ID
    }

    pub fn rpc_client(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), self.commitment)
    }
}

fn parse_program_id(value: &str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(value).map_err(|e| ConfigError::InvalidProgramId {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = StreakConfig::from_values(None, None).unwrap();
        assert_eq!(config.program_id(), &PLACEHOLDER_ID);
        assert!(config.is_placeholder_program());
        assert_eq!(config.rpc_url(), DEFAULT_RPC_URL);
        assert_eq!(config.cluster(), Cluster::Devnet);
        assert_eq!(config.commitment(), CommitmentConfig::confirmed());
    }

    #[test]
    fn explicit_values() {
        let program_id = Pubkey::new_unique();
        let config = StreakConfig::from_values(
            Some(program_id.to_string()),
            Some("http://127.0.0.1:8899".to_string()),
        )
        .unwrap();
        assert_eq!(config.program_id(), &program_id);
        assert!(!config.is_placeholder_program());
        assert_eq!(config.cluster(), Cluster::Localnet);
    }

    #[test]
    fn invalid_program_id_is_an_error() {
        let err = StreakConfig::from_values(Some("not-a-pubkey".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProgramId { .. }));
        assert!(err.to_string().contains("not-a-pubkey"));
    }

    #[test]
    fn cluster_from_url() {
        assert_eq!(
            Cluster::from_rpc_url("https://api.mainnet-beta.solana.com"),
            Cluster::Mainnet
        );
        assert_eq!(
            Cluster::from_rpc_url("https://api.testnet.solana.com"),
            Cluster::Testnet
        );
        assert_eq!(
            Cluster::from_rpc_url("https://rpc.example.org"),
            Cluster::Custom
        );
    }
}
