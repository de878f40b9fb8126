//! PDA helpers for deriving streak program addresses.

use solana_sdk::pubkey::Pubkey;
use streak_interface::{
    error::StreakError,
    user_streak_seeds,
};

use crate::config::StreakConfig;

/// Derives the user's streak account address and bump under `program_id`.
///
/// Both the query path and the check-in path go through this function so that readers and writers
/// always agree on a single streak account per user.
pub fn find_user_streak_address(
    user: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), StreakError> {
    Pubkey::try_find_program_address(user_streak_seeds!(user), program_id)
        .ok_or(StreakError::SeedsExhausted)
}

impl StreakConfig {
    /// Derives the user's streak account address under the configured program.
    pub fn user_streak_address(&self, user: &Pubkey) -> Result<(Pubkey, u8), StreakError> {
        find_user_streak_address(user, self.program_id())
    }
}
