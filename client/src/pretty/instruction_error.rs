//! Interprets RPC and on-chain errors into readable streak program/Solana instruction error
//! messages.

use std::fmt::Display;

use solana_client::client_error::ClientError;
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError as SolanaInstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_error::TransactionError;
use streak_interface::{
    error::StreakProgramError,
    instructions::InstructionTag,
};

use crate::{
    error::transaction_error,
    fmt_kv,
    LogColor,
};

enum InstructionError {
    Solana {
        instruction_name: String,
        error: SolanaInstructionError,
    },
    Streak {
        instruction_tag: InstructionTag,
        error: StreakProgramError,
    },
}

pub struct PrettyInstructionError(InstructionError);

impl PrettyInstructionError {
    pub fn new(
        error: &ClientError,
        instructions: &[Instruction],
        streak_program_id: &Pubkey,
    ) -> Option<Self> {
        let TransactionError::InstructionError(instruction_index, instruction_error) =
            transaction_error(error)?
        else {
            return None;
        };
        let instruction = instructions.get(instruction_index as usize)?;
        let instruction_tag = InstructionTag::try_from(instruction.data.as_slice()).ok();
        let is_streak = instruction.program_id == *streak_program_id;

        let res = match (instruction_error, instruction_tag) {
            (SolanaInstructionError::Custom(code), Some(instruction_tag)) if is_streak => {
                match StreakProgramError::from_repr(code) {
                    Some(error) => InstructionError::Streak {
                        instruction_tag,
                        error,
                    },
                    None => InstructionError::Solana {
                        instruction_name: instruction_tag.to_string(),
                        error: SolanaInstructionError::Custom(code),
                    },
                }
            }
            (error, tag) => InstructionError::Solana {
                instruction_name: tag.map_or_else(
                    || format!("instruction #{instruction_index}"),
                    |tag| tag.to_string(),
                ),
                error,
            },
        };

        Some(Self(res))
    }
}

impl Display for PrettyInstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (error_type, instruction, error) = match &self.0 {
            InstructionError::Solana {
                instruction_name,
                error,
            } => (
                "SolanaInstructionError",
                instruction_name.clone(),
                error.to_string(),
            ),
            InstructionError::Streak {
                instruction_tag,
                error,
            } => (
                "StreakError",
                instruction_tag.to_string(),
                error.to_string(),
            ),
        };

        let message = format!("({instruction}, {error})");
        let error_message = fmt_kv!(error_type, message, LogColor::Error);
        write!(f, "{error_message}")
    }
}
