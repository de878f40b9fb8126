//! Encoding contract shared with the on-chain streak program: seeds, instruction tags, account
//! layout and the program's custom error codes.

pub mod error;
pub mod instructions;
pub mod seeds;
pub mod state;

pub mod program {
    use solana_sdk::pubkey::Pubkey;

    /// Placeholder program ID used when no deployment is configured. It does not match any real
    /// deployment of the streak program.
    pub const PLACEHOLDER_ID: Pubkey = Pubkey::from_str_const("11111111111111111111111111111111");
}
