#[macro_use]
pub(crate) mod macros;
