mod base;
mod interface;

pub use base::ParseError;
pub(crate) use base::{Parser, Registry};
pub(crate) use interface::*;
