//! Token classification conventions.
//!
//! Policies are plain values validated by `const` constructors.
//! Declaring one as a `const` moves the validation to compile time:
//! ```compile_fail
//! use argbind::PrefixPolicy;
//!
//! const BROKEN: PrefixPolicy = PrefixPolicy::new("-", "-");
//! # let _ = BROKEN;
//! ```
use crate::constant::*;

/// The prefixes which introduce long and short option names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixPolicy {
    long: &'static str,
    short: &'static str,
}

impl PrefixPolicy {
    /// Create a prefix policy.
    ///
    /// Panics if either prefix is empty, or if they are equal.
    pub const fn new(long: &'static str, short: &'static str) -> Self {
        assert!(
            !long.is_empty() && !short.is_empty(),
            "argbind: option prefixes must be non-empty"
        );
        assert!(
            !str_equals(long, short),
            "argbind: long and short option prefixes must differ"
        );
        Self { long, short }
    }

    /// The prefix of long option names (ex: `--`).
    pub const fn long(&self) -> &'static str {
        self.long
    }

    /// The prefix of short option names (ex: `-`).
    pub const fn short(&self) -> &'static str {
        self.short
    }
}

impl Default for PrefixPolicy {
    fn default() -> Self {
        Self::new(LONG_PREFIX, SHORT_PREFIX)
    }
}

/// The delimiters which split an option from its inline value, and separate list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimPolicy {
    assign: char,
    separator: char,
}

impl DelimPolicy {
    /// Create a delimiter policy.
    ///
    /// Panics if the delimiters are equal.
    pub const fn new(assign: char, separator: char) -> Self {
        assert!(
            assign != separator,
            "argbind: assignment and separator delimiters must differ"
        );
        Self { assign, separator }
    }

    /// Splits a long option from its inline value (ex: `=` in `--level=3`).
    pub const fn assign(&self) -> char {
        self.assign
    }

    /// Reserved for list valued options; not consulted when parsing.
    pub const fn separator(&self) -> char {
        self.separator
    }
}

impl Default for DelimPolicy {
    fn default() -> Self {
        Self::new(ASSIGN_DELIMITER, SEPARATOR_DELIMITER)
    }
}

/// The complete set of conventions a [`CommandLineParser`](crate::CommandLineParser) classifies tokens by.
///
/// ### Example
/// ```
/// use argbind::{CommandLineParser, DelimPolicy, Policy, PrefixPolicy};
///
/// const WINDOWS: Policy = Policy::new(PrefixPolicy::new("//", "/"), DelimPolicy::new(':', ';'));
///
/// let mut parser = CommandLineParser::with_policy(WINDOWS, ["program", "//level:3", "/v"]);
/// let level = parser.option::<u64>(("//level", "/l")).key();
/// let verbose = parser.option::<bool>(("", "/v")).key();
/// let matches = parser.parse().unwrap();
///
/// assert_eq!(matches.get(level), Some(3));
/// assert_eq!(matches.get(verbose), Some(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    prefix: PrefixPolicy,
    delimiter: DelimPolicy,
}

impl Policy {
    /// `--long`, `-s`, `--long=value`.
    pub const POSIX: Policy = Policy::new(
        PrefixPolicy::new(LONG_PREFIX, SHORT_PREFIX),
        DelimPolicy::new(ASSIGN_DELIMITER, SEPARATOR_DELIMITER),
    );

    /// Combine a prefix and delimiter policy.
    pub const fn new(prefix: PrefixPolicy, delimiter: DelimPolicy) -> Self {
        Self { prefix, delimiter }
    }

    /// The prefix policy.
    pub const fn prefix(&self) -> &PrefixPolicy {
        &self.prefix
    }

    /// The delimiter policy.
    pub const fn delimiter(&self) -> &DelimPolicy {
        &self.delimiter
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::POSIX
    }
}

const fn str_equals(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn policy_default() {
        let policy = Policy::default();
        assert_eq!(policy, Policy::POSIX);
        assert_eq!(policy.prefix().long(), "--");
        assert_eq!(policy.prefix().short(), "-");
        assert_eq!(policy.delimiter().assign(), '=');
        assert_eq!(policy.delimiter().separator(), ',');
    }

    #[rstest]
    #[case("--", "-")]
    #[case("-", "--")]
    #[case("//", "/")]
    #[case("+", "-")]
    fn prefix_policy(#[case] long: &'static str, #[case] short: &'static str) {
        let policy = PrefixPolicy::new(long, short);
        assert_eq!(policy.long(), long);
        assert_eq!(policy.short(), short);
    }

    #[rstest]
    #[case("-", "-")]
    #[case("--", "--")]
    #[case("", "-")]
    #[case("--", "")]
    #[should_panic]
    fn prefix_policy_invalid(#[case] long: &'static str, #[case] short: &'static str) {
        PrefixPolicy::new(long, short);
    }

    #[test]
    fn delim_policy() {
        let policy = DelimPolicy::new(':', ';');
        assert_eq!(policy.assign(), ':');
        assert_eq!(policy.separator(), ';');
    }

    #[test]
    #[should_panic]
    fn delim_policy_invalid() {
        DelimPolicy::new('=', '=');
    }

    #[rstest]
    #[case("", "", true)]
    #[case("a", "a", true)]
    #[case("ab", "ab", true)]
    #[case("a", "b", false)]
    #[case("a", "ab", false)]
    #[case("ab", "a", false)]
    fn const_str_equals(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(str_equals(a, b), expected);
    }
}
