//! Terminal client for the daily check-in streak program.

use anyhow::Context;
use clap::Parser;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Signer,
};
use streak_client::{
    config::StreakConfig,
    logs::{
        log_check_in_outcome,
        log_info,
        log_warning,
    },
    pretty::{
        instruction::PrettyInstruction,
        streak::PrettyStreakStatus,
    },
    print_kv,
    query::{
        fetch_user_streak,
        fetch_user_streak_strict,
    },
    transactions::{
        check_in_instruction,
        send_check_in,
        CheckInOutcome,
        SendTransactionConfig,
    },
    views::StreakStatus,
    wallet::Wallet,
};

use crate::cli::{
    load_keypair,
    Cli,
    Command,
};

pub mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.streak_config()?;
    if config.is_placeholder_program() && !cli.json {
        log_warning(
            "Program",
            "no program ID configured; the placeholder won't match any deployment",
        );
    }

    match &cli.command {
        Command::Address { user } => print_address(&config, user, cli.json)?,
        Command::Status { user, strict } => {
            let status = load_status(&config, &user.pubkey()?, *strict).await?;
            print_status(&config, &status, cli.json)?;
        }
        Command::CheckIn { keypair, dry_run } => {
            let keypair = load_keypair(keypair)?;
            if *dry_run {
                let instruction = check_in_instruction(&config, &keypair.pubkey())?;
                println!(
                    "{}",
                    PrettyInstruction {
                        indent_size: 2,
                        instruction: &instruction,
                        streak_program_id: config.program_id(),
                    }
                );
                return Ok(());
            }

            let rpc = config.rpc_client();
            let send_config = SendTransactionConfig {
                debug_logs: Some(!cli.json),
            };
            let outcome = send_check_in(&rpc, &Wallet::from_signer(&keypair), &config, &send_config)
                .await
                .context("Check-in failed")?;

            // Re-query so the printed streak reflects the chain after the attempt.
            let status = load_status(&config, &keypair.pubkey(), false).await?;
            if cli.json {
                let report = check_in_report(outcome, &status)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                log_check_in_outcome(&outcome);
                print_status(&config, &status, false)?;
            }
        }
    }

    Ok(())
}

/// The JSON printed after a check-in attempt, carrying the re-queried streak status.
fn check_in_report(
    outcome: CheckInOutcome,
    status: &StreakStatus,
) -> anyhow::Result<serde_json::Value> {
    let signature = match outcome {
        CheckInOutcome::CheckedIn(signature) => Some(signature.to_string()),
        CheckInOutcome::AlreadyCheckedInToday => None,
    };
    Ok(serde_json::json!({
        "signature": signature,
        "already_checked_in": outcome == CheckInOutcome::AlreadyCheckedInToday,
        "status": serde_json::to_value(status)?,
    }))
}

fn print_address(config: &StreakConfig, user: &Pubkey, json: bool) -> anyhow::Result<()> {
    let (address, bump) = config
        .user_streak_address(user)
        .context("Couldn't derive the streak address")?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "address": address.to_string(), "bump": bump })
        );
    } else {
        print_kv!("Streak account", address);
        print_kv!("Bump", bump);
    }
    Ok(())
}

async fn load_status(
    config: &StreakConfig,
    user: &Pubkey,
    strict: bool,
) -> anyhow::Result<StreakStatus> {
    let rpc = config.rpc_client();
    let (user_streak, _) = config.user_streak_address(user)?;
    let record = match strict {
        true => fetch_user_streak_strict(&rpc, config, user).await,
        false => fetch_user_streak(&rpc, config, user).await,
    }
    .context("Failed to fetch the user streak")?;

    Ok(StreakStatus::new(user, &user_streak, record.as_ref()))
}

fn print_status(config: &StreakConfig, status: &StreakStatus, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(status)?);
    } else {
        if !status.account_exists {
            log_info("Streak", "no check-ins recorded for this wallet yet");
        }
        println!(
            "{}",
            PrettyStreakStatus {
                status,
                cluster: config.cluster(),
            }
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use solana_sdk::signature::Signature;
    use streak_interface::state::user_streak::StreakRecord;

    use super::*;

    fn status_with_streak(streak_count: u64) -> StreakStatus {
        let user = Pubkey::new_unique();
        let record = StreakRecord {
            owner: user,
            streak_count,
            last_check_in: 1_700_000_000,
        };
        StreakStatus::new(&user, &Pubkey::new_unique(), Some(&record))
    }

    #[test]
    fn check_in_report_includes_status() {
        let signature = Signature::new_unique();
        let status = status_with_streak(4);
        let report = check_in_report(CheckInOutcome::CheckedIn(signature), &status).unwrap();

        assert_eq!(report["signature"], signature.to_string());
        assert_eq!(report["already_checked_in"], false);
        assert_eq!(report["status"], serde_json::to_value(&status).unwrap());
    }

    #[test]
    fn already_checked_in_report_includes_status() {
        let status = status_with_streak(9);
        let report = check_in_report(CheckInOutcome::AlreadyCheckedInToday, &status).unwrap();

        assert!(report["signature"].is_null());
        assert_eq!(report["already_checked_in"], true);
        assert_eq!(report["status"]["streak_count"], 9);
    }
}
