/// Errors raised locally while encoding or decoding streak program data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum StreakError {
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    InvalidInstructionTag,
    SeedsExhausted,
}

impl From<StreakError> for &'static str {
    fn from(value: StreakError) -> Self {
        match value {
            StreakError::InsufficientByteLength => "Not enough bytes for a user streak account",
            StreakError::InvalidAccountDiscriminant => "Invalid account discriminant",
            StreakError::InvalidInstructionTag => "Invalid instruction tag",
            StreakError::SeedsExhausted => "No viable bump seed for the user streak address",
        }
    }
}

impl core::fmt::Display for StreakError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{:?}: {msg}", self)
    }
}

impl std::error::Error for StreakError {}

pub type StreakResult<T = ()> = Result<T, StreakError>;

/// Offset the on-chain program adds to its custom error codes.
pub const PROGRAM_ERROR_CODE_OFFSET: u32 = 6000;

/// Custom error codes returned by the on-chain streak program.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr, strum_macros::Display)]
pub enum StreakProgramError {
    /// `0x1770`
    AlreadyCheckedInToday = PROGRAM_ERROR_CODE_OFFSET,
}

impl StreakProgramError {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::AlreadyCheckedInToday => "You already checked in today.",
        }
    }

    /// Text that identifies this error in RPC error strings and program logs when no structured
    /// error code is available.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Self::AlreadyCheckedInToday => &["0x1770", "You already checked in"],
        }
    }
}
