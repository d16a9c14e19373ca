//! An IP network prefix value type.
//!
//! The central type is [`Prefix`], an address together with a prefix
//! length in bits. It can be parsed from and printed as the usual
//! `address/length` notation and masked down to its network address.
//!
//! ```
//! use netprefix::{Afi, Prefix};
//!
//! let mut prefix: Prefix = "192.168.1.17/24".parse().unwrap();
//! assert_eq!(prefix.afi(), Afi::Ipv4);
//! prefix.apply_mask();
//! assert_eq!(prefix.to_string(), "192.168.1.0/24");
//! ```
//!
//! # Features
//!
//! * `log`: report rejected input through the `log` facade (default).
//! * `serde`: (de)serialize prefixes as strings.
//! * `arbitrary`: implement `arbitrary::Arbitrary` for fuzzing.

pub mod addr;

pub use addr::{parse_addr, Afi, ParsePrefixError, Prefix};

//--- Private modules

mod util;
