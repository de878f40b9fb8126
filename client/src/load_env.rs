//! Environment lookups. Only [`crate::config::StreakConfig::from_env`] reads these.

pub const PROGRAM_ID_VAR: &str = "STREAK_PROGRAM_ID";
pub const RPC_URL_VAR: &str = "STREAK_RPC_URL";

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn program_id() -> Option<String> {
    non_empty_var(PROGRAM_ID_VAR)
}

pub fn rpc_url() -> Option<String> {
    non_empty_var(RPC_URL_VAR)
}
