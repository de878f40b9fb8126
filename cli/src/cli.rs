use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    anyhow,
    Context,
};
use clap::{
    Args,
    Parser,
    Subcommand,
};
use solana_keypair::{
    read_keypair_file,
    Keypair,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::Signer,
};
use streak_client::{
    config::StreakConfig,
    load_env,
};

#[derive(Debug, Parser)]
#[command(name = "streak", about = "Check in daily and track your on-chain habit streak.")]
pub struct Cli {
    /// RPC endpoint. Overrides `STREAK_RPC_URL`.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Streak program ID. Overrides `STREAK_PROGRAM_ID`.
    #[arg(long, global = true)]
    pub program_id: Option<String>,

    /// Print machine-readable JSON instead of colored text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the streak account address derived for a user.
    Address {
        #[arg(long)]
        user: Pubkey,
    },
    /// Show a user's current streak.
    Status {
        #[command(flatten)]
        user: UserArgs,

        /// Reject accounts that don't carry the `UserStreak` account discriminator.
        #[arg(long)]
        strict: bool,
    },
    /// Check in for today.
    CheckIn {
        /// Keypair file of the user checking in; also pays the transaction fee.
        #[arg(long)]
        keypair: PathBuf,

        /// Print the instruction without sending it.
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct UserArgs {
    /// The user's wallet address.
    #[arg(long)]
    pub user: Option<Pubkey>,

    /// Keypair file of the user; only its public key is used.
    #[arg(long)]
    pub keypair: Option<PathBuf>,
}

impl UserArgs {
    pub fn pubkey(&self) -> anyhow::Result<Pubkey> {
        match (&self.user, &self.keypair) {
            (Some(user), _) => Ok(*user),
            (None, Some(path)) => Ok(load_keypair(path)?.pubkey()),
            (None, None) => Err(anyhow!("Either --user or --keypair is required")),
        }
    }
}

impl Cli {
    /// Flags take precedence over the environment; anything unset falls back to the defaults.
    pub fn streak_config(&self) -> anyhow::Result<StreakConfig> {
        let program_id = self.program_id.clone().or_else(load_env::program_id);
        let url = self.url.clone().or_else(load_env::rpc_url);
        StreakConfig::from_values(program_id, url).context("Invalid streak configuration")
    }
}

pub fn load_keypair(path: &Path) -> anyhow::Result<Keypair> {
    read_keypair_file(path)
        .map_err(|e| anyhow!("Couldn't read keypair file {}: {e}", path.display()))
}
