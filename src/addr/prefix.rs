use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::num::ParseIntError;
use std::str::FromStr;
use std::{error, fmt};

#[cfg(feature = "log")]
use log::debug;

use super::afi::Afi;

/// Masks for the octet in which a prefix ends.
///
/// The entry at index `n` keeps the `n` most significant bits of an octet.
pub const MASK_BITS: [u8; 9] = [
    0x00, 0x80, 0xc0, 0xe0, 0xf0, 0xf8, 0xfc, 0xfe, 0xff
];

/// The first twelve octets of an IPv4-mapped IPv6 address.
const V4_MAPPED: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];


//------------ Prefix --------------------------------------------------------

/// An IP prefix.
///
/// A prefix is made up of the octets of an address and a length in bits.
/// For a well-formed prefix the address is four octets for IPv4 and sixteen
/// octets for IPv6, and the length does not exceed the number of bits in
/// the address. Only parsing from a string enforces this. The other
/// constructors take what they are given, and [`is_valid`][Self::is_valid]
/// tells whether the result is well-formed.
///
/// A prefix always owns its octets. Cloning it gives a prefix that shares
/// nothing with the original.
///
/// Two prefixes compare equal if their lengths match and their addresses
/// are equal, where an IPv4 address is equal to its IPv4-mapped IPv6
/// form.
#[derive(Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Prefix {
    octets: Vec<u8>,
    len: u8,
}

impl Prefix {
    /// Creates a prefix from an address and a length.
    ///
    /// The address is used as is, i.e., an IPv4-mapped IPv6 address stays
    /// sixteen octets long. The length is not checked.
    pub fn new(addr: IpAddr, len: u8) -> Self {
        let octets = match addr {
            IpAddr::V4(addr) => addr.octets().to_vec(),
            IpAddr::V6(addr) => addr.octets().to_vec(),
        };
        Prefix { octets, len }
    }

    /// Creates a prefix from raw address octets and a length.
    ///
    /// Neither the number of octets nor the length is checked.
    pub fn from_octets(octets: &[u8], len: u8) -> Self {
        Prefix { octets: octets.to_vec(), len }
    }

    /// Creates the all-zeros prefix of length zero for a family.
    ///
    /// Returns `None` if `afi` is not IPv4 or IPv6.
    pub fn zero(afi: Afi) -> Option<Self> {
        afi.addr_len().map(|n| Prefix { octets: vec![0; n], len: 0 })
    }

    /// Creates a prefix from an address and a netmask.
    ///
    /// The address is converted to IPv4 if it is an IPv4-mapped IPv6
    /// address. The length is the number of leading one bits in `mask`.
    /// If the ones in `mask` are not contiguous, the length is zero.
    pub fn from_ip_net(addr: IpAddr, mask: IpAddr) -> Self {
        Prefix::new(addr.to_canonical(), netmask_len(mask).unwrap_or(0))
    }

    /// Returns the address family.
    ///
    /// This depends only on the number of octets in the address.
    pub fn afi(&self) -> Afi {
        Afi::from_octets_len(self.octets.len())
    }

    /// Returns the address if it has a known family.
    pub fn addr(&self) -> Option<IpAddr> {
        if let Ok(octets) = <[u8; 4]>::try_from(self.octets.as_slice()) {
            Some(Ipv4Addr::from(octets).into())
        }
        else if let Ok(octets) = <[u8; 16]>::try_from(self.octets.as_slice()) {
            Some(Ipv6Addr::from(octets).into())
        }
        else {
            None
        }
    }

    /// Returns the address octets.
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    /// Returns a mutable reference to the address octets.
    pub fn octets_mut(&mut self) -> &mut [u8] {
        &mut self.octets
    }

    /// Returns the prefix length in bits.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Changes the prefix length without touching the address.
    pub fn set_len(&mut self, len: u8) {
        self.len = len
    }

    /// Returns whether the family is known and the length fits.
    pub fn is_valid(&self) -> bool {
        match self.afi().bits() {
            Some(bits) => self.len <= bits,
            None => false,
        }
    }

    /// Clears all address bits beyond the prefix length.
    ///
    /// If the length covers the whole address or more, nothing changes.
    pub fn apply_mask(&mut self) {
        let idx = usize::from(self.len / 8);
        if idx >= self.octets.len() {
            return
        }
        self.octets[idx] &= MASK_BITS[usize::from(self.len % 8)];
        self.octets[idx + 1..].fill(0);
    }

    /// Returns a copy with all address bits beyond the length cleared.
    pub fn masked(&self) -> Self {
        let mut res = self.clone();
        res.apply_mask();
        res
    }

    /// Returns the octets used for comparison.
    ///
    /// This strips IPv4-mapped addresses down to their IPv4 part.
    fn cmp_octets(&self) -> &[u8] {
        if self.octets.len() == 16 && self.octets[..12] == V4_MAPPED {
            &self.octets[12..]
        }
        else {
            &self.octets
        }
    }
}

/// Returns the length of a netmask, or `None` if it isn't contiguous.
fn netmask_len(mask: IpAddr) -> Option<u8> {
    let (ones, count) = match mask {
        IpAddr::V4(mask) => {
            let mask = u32::from(mask);
            (mask.leading_ones(), mask.count_ones())
        }
        IpAddr::V6(mask) => {
            let mask = u128::from(mask);
            (mask.leading_ones(), mask.count_ones())
        }
    };
    if ones == count {
        u8::try_from(ones).ok()
    }
    else {
        None
    }
}


//------------ parse_addr ----------------------------------------------------

/// Parses an IP address, preferring its IPv4 form.
///
/// An IPv4-mapped IPv6 address is returned as the IPv4 address it maps.
/// Returns `None` if `s` is not an address.
pub fn parse_addr(s: &str) -> Option<IpAddr> {
    IpAddr::from_str(s).ok().map(|addr| addr.to_canonical())
}


//--- From, TryFrom and FromStr

impl From<(IpAddr, u8)> for Prefix {
    fn from((addr, len): (IpAddr, u8)) -> Self {
        Prefix::new(addr, len)
    }
}

impl From<inetnum::addr::Prefix> for Prefix {
    fn from(src: inetnum::addr::Prefix) -> Self {
        Prefix::new(src.addr().to_canonical(), src.len())
    }
}

impl TryFrom<&Prefix> for inetnum::addr::Prefix {
    type Error = PrefixConversionError;

    fn try_from(src: &Prefix) -> Result<Self, Self::Error> {
        let addr = src.addr().ok_or(PrefixConversionError)?;
        inetnum::addr::Prefix::new(addr, src.len())
            .map_err(|_| PrefixConversionError)
    }
}

impl FromStr for Prefix {
    type Err = ParsePrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefix(s).map_err(|err| {
            #[cfg(feature = "log")]
            debug!("rejecting prefix {:?}: {}", s, err);
            err
        })
    }
}

fn parse_prefix(s: &str) -> Result<Prefix, ParsePrefixError> {
    let (addr, len) = s.split_once('/').ok_or(ParsePrefixError::Malformed)?;
    let addr = parse_addr(addr).ok_or(ParsePrefixError::Malformed)?;
    let len = u8::from_str(len).map_err(ParsePrefixError::MalformedLength)?;
    let max = match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    if len > max {
        return Err(ParsePrefixError::LengthOutOfRange { len, max })
    }
    Ok(Prefix::new(addr, len))
}


//--- PartialEq, Eq and Hash

impl PartialEq for Prefix {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.cmp_octets() == other.cmp_octets()
    }
}

impl Eq for Prefix { }

impl Hash for Prefix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cmp_octets().hash(state);
        self.len.hash(state);
    }
}


//--- Display and Debug

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.addr() {
            Some(addr) => write!(f, "{}/{}", addr, self.len),
            None if self.octets.is_empty() => {
                write!(f, "<nil>/{}", self.len)
            }
            None => {
                f.write_str("?")?;
                for octet in &self.octets {
                    write!(f, "{:02x}", octet)?;
                }
                write!(f, "/{}", self.len)
            }
        }
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Prefix({})", self)
    }
}


//--- Deserialize and Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for Prefix {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Prefix {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D
    ) -> Result<Self, D::Error> {
        struct PrefixVisitor;

        impl serde::de::Visitor<'_> for PrefixVisitor {
            type Value = Prefix;

            fn expecting(
                &self, formatter: &mut fmt::Formatter
            ) -> fmt::Result {
                write!(formatter, "a string containing an IP prefix")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where E: serde::de::Error {
                Prefix::from_str(s).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(PrefixVisitor)
    }
}


//============ Errors ========================================================

//------------ ParsePrefixError ----------------------------------------------

/// Parsing a prefix from a string has failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsePrefixError {
    /// There is no slash or the part before it isn't an address.
    Malformed,

    /// The part after the slash isn't a decimal number up to 255.
    MalformedLength(ParseIntError),

    /// The length is larger than the number of bits in the address.
    LengthOutOfRange { len: u8, max: u8 },
}

impl fmt::Display for ParsePrefixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsePrefixError::Malformed => f.write_str("invalid prefix"),
            ParsePrefixError::MalformedLength(err) => {
                write!(f, "invalid prefix length: {}", err)
            }
            ParsePrefixError::LengthOutOfRange { len, max } => {
                write!(f, "prefix length {} exceeds {}", len, max)
            }
        }
    }
}

impl error::Error for ParsePrefixError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParsePrefixError::MalformedLength(err) => Some(err),
            _ => None,
        }
    }
}


//------------ PrefixConversionError -----------------------------------------

/// A prefix could not be converted into an `inetnum` prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrefixConversionError;

impl fmt::Display for PrefixConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("prefix not representable")
    }
}

impl error::Error for PrefixConversionError { }


//============ Testing =======================================================
