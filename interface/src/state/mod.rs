use solana_sdk::pubkey::Pubkey;

pub mod transmutable;
pub mod user_streak;

pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const I64_SIZE: usize = core::mem::size_of::<i64>();

pub type LeU64 = [u8; U64_SIZE];
pub type LeI64 = [u8; I64_SIZE];

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::from_str_const("11111111111111111111111111111111");
