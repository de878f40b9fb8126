//! Client error types and the classification of RPC failures into streak outcomes.

use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction_error::InstructionError;
use solana_sdk::signature::Signature;
use solana_transaction_error::TransactionError;
use streak_interface::error::{
    StreakError,
    StreakProgramError,
};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("malformed user streak account: {0}")]
    MalformedAccount(StreakError),

    #[error("couldn't derive the user streak address: {0}")]
    AddressDerivation(StreakError),

    #[error("failed to fetch the user streak account: {0}")]
    Rpc(#[from] ClientError),
}

#[derive(Debug, thiserror::Error)]
pub enum CheckInError {
    #[error("wallet not connected")]
    WalletNotConnected,

    #[error("wallet can't sign transactions for this user")]
    UnsupportedSigner,

    #[error("{}", StreakProgramError::AlreadyCheckedInToday.message())]
    AlreadyCheckedInToday,

    #[error("transaction submission failed: {0}")]
    SubmissionFailed(#[source] ClientError),

    #[error("transaction {signature} wasn't confirmed before its blockhash expired")]
    ConfirmationTimeout { signature: Signature },

    #[error("couldn't derive the user streak address: {0}")]
    AddressDerivation(StreakError),
}

/// Classifies a failed submission.
///
/// The structured custom error code is checked first. When it isn't available, the error text and
/// any preflight simulation logs are searched for the program's known error markers.
pub fn classify_submission_error(error: ClientError) -> CheckInError {
    let code_match = program_error(&error) == Some(StreakProgramError::AlreadyCheckedInToday);
    if code_match || contains_marker(&error, StreakProgramError::AlreadyCheckedInToday) {
        CheckInError::AlreadyCheckedInToday
    } else {
        CheckInError::SubmissionFailed(error)
    }
}

/// Extracts the streak program's custom error from a client error, if it carries one.
pub fn program_error(error: &ClientError) -> Option<StreakProgramError> {
    match transaction_error(error)? {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            StreakProgramError::from_repr(code)
        }
        _ => None,
    }
}

/// The transaction error behind a client error: either returned directly or reported by the
/// preflight simulation of `sendTransaction`.
pub fn transaction_error(error: &ClientError) -> Option<TransactionError> {
    match error.kind() {
        ClientErrorKind::TransactionError(transaction_error) => Some(transaction_error.clone()),
        ClientErrorKind::RpcError(RpcResponseError {
            data:
                RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                    err: Some(ui_err),
                    ..
                }),
            ..
        }) => Some(ui_err.clone().into()),
        _ => None,
    }
}

fn preflight_logs(error: &ClientError) -> &[String] {
    match error.kind() {
        ClientErrorKind::RpcError(RpcResponseError {
            data:
                RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                    logs: Some(logs),
                    ..
                }),
            ..
        }) => logs.as_slice(),
        _ => &[],
    }
}

fn contains_marker(error: &ClientError, program_error: StreakProgramError) -> bool {
    let text = error.to_string();
    let markers = program_error.markers();
    markers.iter().any(|marker| text.contains(marker))
        || preflight_logs(error)
            .iter()
            .any(|log| markers.iter().any(|marker| log.contains(marker)))
}
