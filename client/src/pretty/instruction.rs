use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::{
    Color,
    Colorize,
};
use solana_instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use streak_interface::{
    instructions::InstructionTag,
    state::SYSTEM_PROGRAM_ID,
};

use crate::logs::LogColor;

/// Renders an instruction as `program::Instruction` followed by one line per account.
pub struct PrettyInstruction<'a> {
    /// The amount of spaces preceding each account line.
    pub indent_size: usize,
    pub instruction: &'a Instruction,
    /// The configured streak program, used to name the instruction.
    pub streak_program_id: &'a Pubkey,
}

impl Display for PrettyInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let instruction = self.instruction;
        let known_program = KnownProgram::from_program_id(
            &instruction.program_id,
            self.streak_program_id,
        );

        let (program_name, instruction_name, name_color) = match known_program {
            Some(known) => (
                known.to_string(),
                known.instruction_name(&instruction.data),
                Color::from(LogColor::Debug),
            ),
            None => (
                instruction.program_id.to_string(),
                "UnknownInstruction".to_string(),
                Color::from(LogColor::Warning),
            ),
        };
        writeln!(f, "{}::{instruction_name}", program_name.color(name_color))?;

        let indentation = " ".repeat(self.indent_size);
        for (i, meta) in instruction.accounts.iter().enumerate() {
            let flags = match (meta.is_writable, meta.is_signer) {
                (true, true) => "WRITE, SIGNER",
                (true, false) => "WRITE",
                (false, true) => "SIGNER",
                (false, false) => "READ",
            };
            let flags = format!("[{flags}]").color(LogColor::FadedGray);
            writeln!(f, "{indentation}{i}. {flags} {}", meta.pubkey)?;
        }

        Ok(())
    }
}

#[derive(strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
enum KnownProgram {
    Streak,
    SystemProgram,
}

impl KnownProgram {
    fn from_program_id(program_id: &Pubkey, streak_program_id: &Pubkey) -> Option<Self> {
        if program_id == streak_program_id {
            Some(Self::Streak)
        } else if program_id == &SYSTEM_PROGRAM_ID {
            Some(Self::SystemProgram)
        } else {
            None
        }
    }

    fn instruction_name(&self, instruction_data: &[u8]) -> String {
        match self {
            Self::Streak => InstructionTag::try_from(instruction_data)
                .map(|tag| tag.to_string())
                .unwrap_or_else(|_| "UnknownInstruction".to_string()),
            Self::SystemProgram => "SystemInstruction".to_string(),
        }
    }
}
