//! `argbind` is a typed command line parser for Rust.
//!
//! The parser is built around a few design concerns:
//! * *Typed arguments*:
//! Every positional and option is declared with a Rust type, and the parser decodes and type checks its value.
//! The user never calls a `&str -> T` conversion directly.
//! * *Positional vs. option paradigm*:
//! Positionals are identified by their position among the non-option tokens.
//! Options are named, introduced by a long (`--name`) or short (`-n`) prefix.
//! * *Configurable conventions*:
//! The prefixes and delimiters which classify tokens are a [`Policy`] value, validated when constructed.
//! * *First error wins*:
//! Parsing stops at the first offending token, reporting a descriptive [`ParseError`].
//!
//! # Usage
//! Declare arguments on a [`CommandLineParser`], keeping the [`Key`] of each.
//! After a successful parse, read the values out of the [`Matches`] by key.
//! ```
//! use argbind::CommandLineParser;
//! use std::path::PathBuf;
//!
//! let mut parser = CommandLineParser::new(["copy", "--force", "in.txt", "-o", "out.txt"]);
//! let input = parser.positional::<PathBuf>("input").required().key();
//! let output = parser
//!     .option::<PathBuf>(("--output", "-o"))
//!     .required()
//!     .help("Where to copy to.")
//!     .key();
//! let force = parser.option::<bool>(("--force", "-f")).key();
//!
//! let matches = parser.parse().unwrap();
//!
//! assert_eq!(matches.get(input), Some(PathBuf::from("in.txt")));
//! assert_eq!(matches.get(output), Some(PathBuf::from("out.txt")));
//! assert_eq!(matches.get(force), Some(true));
//! ```
//!
//! # Tokens
//! Each token (after the program name) is classified by the [`Policy`]:
//! 1. Starting with the long prefix, it is a long option.
//!    The value may follow inline, after the assignment delimiter: `--level=3`.
//! 2. Starting with the short prefix, it is a short option.
//!    The value is the following token: `-l 3`.
//! 3. Otherwise, it is the next positional.
//!
//! Boolean options are flags: they take no value and switch on when present.
//! A long boolean option may still be given an inline value (`--force=false`).
//!
//! # Types
//! Arguments may be declared as any [`Scalar`] type:
//! [`bool`], [`i64`], [`u64`], [`f64`], [`String`] or [`PathBuf`](std::path::PathBuf).
//! Decoding is performed by the [`DefaultDecoder`], or a custom [`Decoder`] via [`CommandLineParser::parse_with`].
//!
//! # Errors
//! Mistakes in the declarations (ex: an empty name, or an option name missing its prefix) are programming errors and panic.
//! Mistakes in the command line input are returned as a [`ParseError`].
#![deny(missing_docs)]
mod api;
mod constant;
mod decoder;
mod model;
mod parser;
mod policy;
mod util;

pub use api::*;
pub use decoder::*;
pub use model::*;
pub use parser::ParseError;
pub use policy::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
