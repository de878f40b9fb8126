pub mod user_streak {
    pub const USER_STREAK_SEED_STR: &[u8] = b"user-streak";
}

/// Expands to the seeds of a user's streak account: the literal `"user-streak"` followed by the
/// user's 32 pubkey bytes.
///
/// # Example
///
/// ```
/// use solana_sdk::pubkey::Pubkey;
/// use streak_interface::user_streak_seeds;
///
/// let user = Pubkey::new_from_array([7; 32]);
/// let seeds: &[&[u8]] = user_streak_seeds!(user);
/// assert_eq!(seeds[0], b"user-streak");
/// assert_eq!(seeds[1], user.as_ref());
/// ```
#[macro_export]
macro_rules! user_streak_seeds {
    ($user:expr) => {
        &[
            $crate::seeds::user_streak::USER_STREAK_SEED_STR,
            $user.as_ref(),
        ]
    };
}
