use solana_client::client_error::ClientError;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};
use streak_interface::instructions::check_in::check_in;

use crate::{
    chain::{
        Checkpoint,
        ChainClient,
        ConfirmationStatus,
    },
    config::StreakConfig,
    error::{
        classify_submission_error,
        CheckInError,
    },
    logs::{
        log_error,
        log_info,
        log_signature,
        log_warning,
    },
    pda::find_user_streak_address,
    pretty::instruction_error::PrettyInstructionError,
    wallet::{
        Wallet,
        WalletSigner,
    },
};

pub struct SendTransactionConfig {
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            debug_logs: Some(true),
        }
    }
}

impl SendTransactionConfig {
    pub fn quiet() -> Self {
        SendTransactionConfig {
            debug_logs: Some(false),
        }
    }

    fn debug_logs(&self) -> bool {
        matches!(self.debug_logs, Some(true))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckInOutcome {
    CheckedIn(Signature),
    /// The program rejected the check-in because the user already checked in today.
    AlreadyCheckedInToday,
}

/// Signs and submits a transaction containing only `instruction`, paid for by the wallet's user,
/// then waits for it to be confirmed or for its blockhash to expire.
///
/// Nothing is retried; every failure is returned to the caller.
pub async fn submit_instruction<C: ChainClient>(
    chain: &C,
    wallet: &Wallet<'_>,
    instruction: Instruction,
    streak_config: &StreakConfig,
    config: &SendTransactionConfig,
) -> Result<Signature, CheckInError> {
    let (payer, signer) = wallet.resolve()?;
    let fail = |error: ClientError| {
        if config.debug_logs() {
            log_submission_error(&error, &instruction, &payer, streak_config);
        }
        classify_submission_error(error)
    };

    let checkpoint = chain.get_latest_checkpoint().await.map_err(fail)?;
    let transaction = Transaction::new_unsigned(Message::new(
        std::slice::from_ref(&instruction),
        Some(&payer),
    ));

    let signature = sign_and_send(chain, signer, transaction, &checkpoint)
        .await
        .map_err(fail)?;

    match chain
        .confirm_transaction(&signature, &checkpoint)
        .await
        .map_err(fail)?
    {
        ConfirmationStatus::Confirmed => {
            if config.debug_logs() {
                log_signature(&signature, &payer);
            }
            Ok(signature)
        }
        ConfirmationStatus::Failed(error) => Err(fail(ClientError::from(error))),
        ConfirmationStatus::Expired => {
            if config.debug_logs() {
                log_error("Expired", signature);
            }
            Err(CheckInError::ConfirmationTimeout { signature })
        }
    }
}

async fn sign_and_send<C: ChainClient>(
    chain: &C,
    signer: WalletSigner<'_>,
    mut transaction: Transaction,
    checkpoint: &Checkpoint,
) -> Result<Signature, ClientError> {
    match signer {
        WalletSigner::SignOnly(signer) => {
            transaction.try_sign(&[signer], checkpoint.blockhash)?;
            chain.send_transaction(&transaction).await
        }
        WalletSigner::SignAndSend(wallet) => {
            transaction.message.recent_blockhash = checkpoint.blockhash;
            wallet.sign_and_send(transaction).await
        }
    }
}

/// Checks the wallet's user in for today.
///
/// The "already checked in today" rejection is returned as [`CheckInOutcome::AlreadyCheckedInToday`]
/// rather than an error.
pub async fn send_check_in<C: ChainClient>(
    chain: &C,
    wallet: &Wallet<'_>,
    streak_config: &StreakConfig,
    config: &SendTransactionConfig,
) -> Result<CheckInOutcome, CheckInError> {
    let (user, _) = wallet.resolve()?;
    let instruction = check_in_instruction(streak_config, &user)?;

    match submit_instruction(chain, wallet, instruction, streak_config, config).await {
        Ok(signature) => Ok(CheckInOutcome::CheckedIn(signature)),
        Err(CheckInError::AlreadyCheckedInToday) => Ok(CheckInOutcome::AlreadyCheckedInToday),
        Err(error) => Err(error),
    }
}

/// Builds the check-in instruction for `user` against their derived streak account.
pub fn check_in_instruction(
    streak_config: &StreakConfig,
    user: &Pubkey,
) -> Result<Instruction, CheckInError> {
    let program_id = streak_config.program_id();
    let (user_streak, _) =
        find_user_streak_address(user, program_id).map_err(CheckInError::AddressDerivation)?;
    Ok(check_in(program_id, user, &user_streak))
}

fn log_submission_error(
    error: &ClientError,
    instruction: &Instruction,
    payer: &Pubkey,
    streak_config: &StreakConfig,
) {
    let instructions = std::slice::from_ref(instruction);
    match PrettyInstructionError::new(error, instructions, streak_config.program_id()) {
        Some(pretty) => log_warning("Rejected", pretty),
        None => log_error("Failed transaction submission", error),
    }
    log_info("Payer", payer);
}
