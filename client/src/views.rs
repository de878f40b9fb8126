//! Display-oriented views of streak state.

use chrono::{
    DateTime,
    NaiveDate,
    Utc,
};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use streak_interface::state::user_streak::StreakRecord;

pub const NO_CHECK_INS: &str = "No check-ins yet";

/// Shortens an address to its first and last `chars` characters, e.g. `7xKX...sAsU`.
pub fn shorten_address(address: &Pubkey, chars: usize) -> String {
    let address = address.to_string();
    if address.len() <= chars * 2 {
        return address;
    }
    format!("{}...{}", &address[..chars], &address[address.len() - chars..])
}

pub trait StreakRecordExt {
    /// The last check-in as a UTC datetime, `None` if the user never checked in.
    fn last_check_in_time(&self) -> Option<DateTime<Utc>>;

    /// Whether the last check-in happened on the given UTC calendar day.
    fn checked_in_on(&self, date: NaiveDate) -> bool;
}

impl StreakRecordExt for StreakRecord {
    fn last_check_in_time(&self) -> Option<DateTime<Utc>> {
        self.last_check_in()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    fn checked_in_on(&self, date: NaiveDate) -> bool {
        self.last_check_in_time()
            .is_some_and(|time| time.date_naive() == date)
    }
}

/// A user's streak as shown to them. A user without a streak account has a streak of zero and no
/// last check-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StreakStatus {
    pub user: String,
    pub streak_address: String,
    pub streak_count: u64,
    pub last_check_in: Option<DateTime<Utc>>,
    pub account_exists: bool,
}

impl StreakStatus {
    pub fn new(user: &Pubkey, streak_address: &Pubkey, record: Option<&StreakRecord>) -> Self {
        Self {
            user: user.to_string(),
            streak_address: streak_address.to_string(),
            streak_count: record.map_or(0, |record| record.streak_count),
            last_check_in: record.and_then(|record| record.last_check_in_time()),
            account_exists: record.is_some(),
        }
    }

    pub fn last_check_in_text(&self) -> String {
        match self.last_check_in {
            Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => NO_CHECK_INS.to_string(),
        }
    }
}
