/// Generate enums for numeric codepoints.
///
/// # Example
///
/// ```rust
/// # #[macro_use] extern crate netprefix;
/// # fn main() {
/// typeenum!(Family, u16,
///     1 => Ipv4,
///     2 => Ipv6,
/// );
/// assert_eq!(Family::from(2), Family::Ipv6);
/// assert_eq!(Family::from(7).to_string(), "unknown-Family-7");
/// # }
/// ```
/// This will create a `pub enum Family`, comprised of variants `Ipv4` and
/// `Ipv6`, plus `Unimplemented(u16)` catching every other value. On this
/// enum, [`From`] (for conversion between the variants and `u16`) and
/// [`std::fmt::Display`] are implemented.
#[macro_export]
macro_rules! typeenum {
    ($(#[$attr:meta])* $name:ident, $ty:ty, $($x:expr => $y:ident),+ $(,)*) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        #[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
        pub enum $name {
            $($y),+,
            Unimplemented($ty),
        }

        impl From<$ty> for $name {
            fn from(f: $ty) -> $name {
                match f {
                    $($x => $name::$y,)+
                    u => $name::Unimplemented(u),
                }
            }
        }

        impl From<$name> for $ty {
            fn from(s: $name) -> $ty {
                match s {
                    $($name::$y => $x,)+
                    $name::Unimplemented(u) => u,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter)
                -> Result<(), std::fmt::Error>
            {
                match self {
                    $($name::$y => write!(f, stringify!($y))),+,
                    $name::Unimplemented(u) =>
                        write!(f, "unknown-{}-{}", stringify!($name), u)
                }
            }
        }
    }
}
