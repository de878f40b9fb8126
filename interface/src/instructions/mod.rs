use crate::error::StreakError;

pub mod check_in;

pub const INSTRUCTION_DISCRIMINATOR_LEN: usize = 8;

/// `sha256("global:check_in")[..8]`
pub const CHECK_IN_DISCRIMINATOR: [u8; INSTRUCTION_DISCRIMINATOR_LEN] =
    [0xd1, 0xfd, 0x04, 0xd9, 0xfa, 0xf1, 0xcf, 0x32];

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum InstructionTag {
    CheckIn,
}

impl InstructionTag {
    pub const fn discriminator(&self) -> [u8; INSTRUCTION_DISCRIMINATOR_LEN] {
        match self {
            Self::CheckIn => CHECK_IN_DISCRIMINATOR,
        }
    }
}

/// Resolves the tag from the leading bytes of instruction data.
impl TryFrom<&[u8]> for InstructionTag {
    type Error = StreakError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        match data.get(..INSTRUCTION_DISCRIMINATOR_LEN) {
            Some(prefix) if prefix == CHECK_IN_DISCRIMINATOR => Ok(Self::CheckIn),
            _ => Err(StreakError::InvalidInstructionTag),
        }
    }
}

/// Returns the check-in instruction data. The instruction takes no arguments, so the data is
/// exactly the tag.
pub const fn encode_check_in() -> [u8; INSTRUCTION_DISCRIMINATOR_LEN] {
    InstructionTag::CheckIn.discriminator()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn instruction_tag_from_discriminator_exhaustive() {
        for variant in InstructionTag::iter() {
            let discriminator = variant.discriminator();
            assert_eq!(
                InstructionTag::try_from(discriminator.as_slice()),
                Ok(variant)
            );
        }
    }

    #[test]
    fn check_in_data_is_constant() {
        assert_eq!(
            encode_check_in(),
            [0xD1, 0xFD, 0x04, 0xD9, 0xFA, 0xF1, 0xCF, 0x32]
        );
        assert_eq!(encode_check_in(), encode_check_in());
    }

    #[test]
    fn unknown_or_short_tags_are_rejected() {
        assert_eq!(
            InstructionTag::try_from([0u8; 8].as_slice()),
            Err(StreakError::InvalidInstructionTag)
        );
        assert_eq!(
            InstructionTag::try_from(&CHECK_IN_DISCRIMINATOR[..7]),
            Err(StreakError::InvalidInstructionTag)
        );
    }
}
