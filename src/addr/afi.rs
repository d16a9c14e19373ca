use crate::typeenum; // from util::macros

typeenum!(
/// The address family of a prefix.
///
/// The family of a [`Prefix`][crate::addr::Prefix] is never stored. It is
/// derived from the length of the address octets, and anything that is
/// neither four nor sixteen octets long is reported as `Max`.
    Afi, u8,
    0 => Ipv4,
    1 => Ipv6,
    2 => Max,
);

impl Afi {
    /// Returns the family for an address of `len` octets.
    pub fn from_octets_len(len: usize) -> Self {
        match len {
            4 => Afi::Ipv4,
            16 => Afi::Ipv6,
            _ => Afi::Max,
        }
    }

    /// Returns the number of octets in an address of this family.
    pub fn addr_len(self) -> Option<usize> {
        match self {
            Afi::Ipv4 => Some(4),
            Afi::Ipv6 => Some(16),
            _ => None,
        }
    }

    /// Returns the number of bits in an address of this family.
    pub fn bits(self) -> Option<u8> {
        match self {
            Afi::Ipv4 => Some(32),
            Afi::Ipv6 => Some(128),
            _ => None,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoints() {
        assert_eq!(Afi::from(0), Afi::Ipv4);
        assert_eq!(Afi::from(1), Afi::Ipv6);
        assert_eq!(Afi::from(2), Afi::Max);
        assert_eq!(Afi::from(9), Afi::Unimplemented(9));
        assert_eq!(u8::from(Afi::Ipv6), 1);
        assert_eq!(u8::from(Afi::Unimplemented(9)), 9);
    }

    #[test]
    fn display() {
        assert_eq!(Afi::Ipv4.to_string(), "Ipv4");
        assert_eq!(Afi::Max.to_string(), "Max");
        assert_eq!(Afi::Unimplemented(42).to_string(), "unknown-Afi-42");
    }

    #[test]
    fn sizes() {
        assert_eq!(Afi::from_octets_len(4), Afi::Ipv4);
        assert_eq!(Afi::from_octets_len(16), Afi::Ipv6);
        assert_eq!(Afi::from_octets_len(0), Afi::Max);
        assert_eq!(Afi::from_octets_len(5), Afi::Max);

        assert_eq!(Afi::Ipv4.addr_len(), Some(4));
        assert_eq!(Afi::Ipv6.bits(), Some(128));
        assert_eq!(Afi::Max.addr_len(), None);
        assert_eq!(Afi::Unimplemented(3).bits(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Afi::Ipv6,
            &[Token::UnitVariant { name: "Afi", variant: "Ipv6" }]
        );
    }
}
