use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    instructions::encode_check_in,
    state::SYSTEM_PROGRAM_ID,
};

/// Records today's check-in for `user`, creating the streak account on the first call.
///
/// ### Accounts
///   0. `[WRITE, SIGNER]` User (fee payer)
///   1. `[WRITE]` User streak account, the PDA derived from `["user-streak", user]`
///   2. `[READ]` System program
///
/// The account order is part of the program's instruction contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckIn {
    pub user: Pubkey,
    pub user_streak: Pubkey,
}

impl CheckIn {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.user, true),
            AccountMeta::new(self.user_streak, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn create_instruction(&self, program_id: &Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: self.create_account_metas().to_vec(),
            data: encode_check_in().to_vec(),
        }
    }
}

/// Builds the check-in instruction for `user` against the streak account at `user_streak`.
pub fn check_in(program_id: &Pubkey, user: &Pubkey, user_streak: &Pubkey) -> Instruction {
    CheckIn {
        user: *user,
        user_streak: *user_streak,
    }
    .create_instruction(program_id)
}
