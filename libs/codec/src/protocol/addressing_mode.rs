//! Addressing modes for mail destination descriptors

use num_enum::TryFromPrimitive;

/// Addressing modes for mail delivery
///
/// Selects which destination descriptor an envelope carries: a concrete
/// remote actor address, or a name the remote framework resolves at
/// delivery time. Encoded on the wire as the enum ordinal in a single
/// byte, which bounds the format to 255 modes - two are defined.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum AddressingMode {
    /// Destination is a concrete (framework id, actor id) pair
    ByAddress = 1,

    /// Destination is a framework id plus an actor name resolved remotely
    ByName = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_ordinals() {
        assert_eq!(AddressingMode::ByAddress as u8, 1);
        assert_eq!(AddressingMode::ByName as u8, 2);
    }

    #[test]
    fn test_mode_from_byte() {
        assert_eq!(AddressingMode::try_from(1u8), Ok(AddressingMode::ByAddress));
        assert_eq!(AddressingMode::try_from(2u8), Ok(AddressingMode::ByName));
        assert!(AddressingMode::try_from(0u8).is_err());
        assert!(AddressingMode::try_from(3u8).is_err());
    }
}
