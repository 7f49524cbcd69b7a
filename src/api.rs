mod argument;
mod core;
mod matches;

pub use self::argument::{ArgumentId, BindError, OptionNames};
pub(crate) use self::argument::{Argument, Role};
pub use self::core::*;
pub use self::matches::*;
