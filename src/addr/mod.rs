//! Types for IP prefixes and their address families.

mod afi;
mod prefix;

pub use afi::*;
pub use prefix::*;
