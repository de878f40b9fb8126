use solana_sdk::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        StreakError,
        StreakResult,
    },
    state::{
        transmutable::{
            self,
            Transmutable,
        },
        LeI64,
        LeU64,
    },
};

pub const USER_STREAK_SIZE: usize = 56;
pub const USER_STREAK_DISCRIMINATOR_LEN: usize = 8;

/// `sha256("account:UserStreak")[..8]`
pub const USER_STREAK_ACCOUNT_DISCRIMINATOR: [u8; USER_STREAK_DISCRIMINATOR_LEN] =
    [0xc3, 0x52, 0x1a, 0xfe, 0x7f, 0x08, 0x6d, 0xb2];

/// On-chain byte layout of a user streak account. All integers are little-endian.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserStreak {
    /// The 8-byte account type discriminator.
    discriminator: [u8; USER_STREAK_DISCRIMINATOR_LEN],
    /// The user that owns the streak.
    pub user: Pubkey,
    /// The u64 number of consecutive daily check-ins as LE bytes.
    streak_count: LeU64,
    /// The i64 unix timestamp of the last check-in as LE bytes. Zero means never.
    last_check_in: LeI64,
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for UserStreak {
    const LEN: usize = USER_STREAK_SIZE;
}

const_assert_eq!(USER_STREAK_SIZE, size_of::<UserStreak>());
const_assert_eq!(align_of::<UserStreak>(), 1);

impl UserStreak {
    pub fn new(user: Pubkey, streak_count: u64, last_check_in: i64) -> Self {
        UserStreak {
            discriminator: USER_STREAK_ACCOUNT_DISCRIMINATOR,
            user,
            streak_count: streak_count.to_le_bytes(),
            last_check_in: last_check_in.to_le_bytes(),
        }
    }

    /// Views the leading [`USER_STREAK_SIZE`] bytes of `data` as a user streak account. The
    /// discriminator only has to be present; its value is not checked here.
    #[inline(always)]
    pub fn load(data: &[u8]) -> StreakResult<&Self> {
        transmutable::load::<Self>(data)
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> StreakResult {
        if self.discriminator != USER_STREAK_ACCOUNT_DISCRIMINATOR {
            return Err(StreakError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn discriminator(&self) -> [u8; USER_STREAK_DISCRIMINATOR_LEN] {
        self.discriminator
    }

    #[inline(always)]
    pub fn set_discriminator(&mut self, discriminator: [u8; USER_STREAK_DISCRIMINATOR_LEN]) {
        self.discriminator = discriminator;
    }

    #[inline(always)]
    pub fn streak_count(&self) -> u64 {
        u64::from_le_bytes(self.streak_count)
    }

    #[inline(always)]
    pub fn last_check_in(&self) -> i64 {
        i64::from_le_bytes(self.last_check_in)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        transmutable::as_bytes(self)
    }
}

/// Decoded view of a user streak account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreakRecord {
    pub owner: Pubkey,
    pub streak_count: u64,
    /// Unix seconds of the last check-in, `0` if the user never checked in.
    pub last_check_in: i64,
}

impl StreakRecord {
    /// Decodes raw account data. Fails with [`StreakError::InsufficientByteLength`] when `data`
    /// is shorter than [`USER_STREAK_SIZE`].
    pub fn decode(data: &[u8]) -> StreakResult<Self> {
        UserStreak::load(data).map(Self::from)
    }

    /// The last check-in timestamp, or `None` if the stored value is the "never" sentinel.
    pub fn last_check_in(&self) -> Option<i64> {
        match self.last_check_in {
            0 => None,
            ts => Some(ts),
        }
    }

    pub fn has_checked_in(&self) -> bool {
        self.last_check_in().is_some()
    }
}

impl From<&UserStreak> for StreakRecord {
    fn from(account: &UserStreak) -> Self {
        Self {
            owner: account.user,
            streak_count: account.streak_count(),
            last_check_in: account.last_check_in(),
        }
    }
}
