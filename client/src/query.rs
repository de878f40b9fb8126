use solana_sdk::pubkey::Pubkey;
use streak_interface::state::user_streak::{
    StreakRecord,
    UserStreak,
};

use crate::{
    chain::ChainClient,
    config::StreakConfig,
    error::QueryError,
    pda::find_user_streak_address,
};

/// Fetches and decodes the user's streak account.
///
/// Returns `Ok(None)` when no account (or an account with no data) exists at the user's derived
/// address, which is the normal state for a user that never checked in. The account discriminator
/// only has to be present.
pub async fn fetch_user_streak<C: ChainClient>(
    chain: &C,
    config: &StreakConfig,
    user: &Pubkey,
) -> Result<Option<StreakRecord>, QueryError> {
    let (user_streak, _) =
        find_user_streak_address(user, config.program_id()).map_err(QueryError::AddressDerivation)?;
    fetch_streak_at(chain, &user_streak, false).await
}

/// Like [`fetch_user_streak`], but also rejects accounts that don't carry the `UserStreak`
/// account discriminator.
pub async fn fetch_user_streak_strict<C: ChainClient>(
    chain: &C,
    config: &StreakConfig,
    user: &Pubkey,
) -> Result<Option<StreakRecord>, QueryError> {
    let (user_streak, _) =
        find_user_streak_address(user, config.program_id()).map_err(QueryError::AddressDerivation)?;
    fetch_streak_at(chain, &user_streak, true).await
}

/// Fetches and decodes the streak account at an already derived address.
async fn fetch_streak_at<C: ChainClient>(
    chain: &C,
    user_streak: &Pubkey,
    verify_discriminant: bool,
) -> Result<Option<StreakRecord>, QueryError> {
    let data = match chain.get_account_data(user_streak).await? {
        Some(data) if !data.is_empty() => data,
        _ => return Ok(None),
    };

    let account = UserStreak::load(&data).map_err(QueryError::MalformedAccount)?;
    if verify_discriminant {
        account
            .verify_discriminant()
            .map_err(QueryError::MalformedAccount)?;
    }
    Ok(Some(StreakRecord::from(account)))
}
