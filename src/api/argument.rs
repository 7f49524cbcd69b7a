use thiserror::Error;

use crate::model::{Kind, Value};

/// The stable identity of a declared argument within its [`CommandLineParser`](crate::CommandLineParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArgumentId(pub(crate) usize);

impl ArgumentId {
    /// The registration index of the argument.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Positional,
    Option,
}

/// The long and/or short names of an option.
///
/// An empty name means the form is absent.
///
/// ### Example
/// ```
/// use argbind::OptionNames;
///
/// let both = OptionNames::from(("--output", "-o"));
/// let long = OptionNames::long("--output");
/// let short = OptionNames::short("-o");
///
/// assert_eq!(both.names(), vec!["--output", "-o"]);
/// assert_eq!(long.names(), vec!["--output"]);
/// assert_eq!(short.names(), vec!["-o"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionNames {
    long: String,
    short: String,
}

impl OptionNames {
    /// Both a long and short name.
    pub fn new(long: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            short: short.into(),
        }
    }

    /// Only a long name.
    pub fn long(long: impl Into<String>) -> Self {
        Self::new(long, "")
    }

    /// Only a short name.
    pub fn short(short: impl Into<String>) -> Self {
        Self::new("", short)
    }

    pub(crate) fn long_name(&self) -> Option<&str> {
        Some(self.long.as_str()).filter(|name| !name.is_empty())
    }

    pub(crate) fn short_name(&self) -> Option<&str> {
        Some(self.short.as_str()).filter(|name| !name.is_empty())
    }

    /// The defined names, long first.
    pub fn names(&self) -> Vec<&str> {
        self.long_name().into_iter().chain(self.short_name()).collect()
    }
}

impl<L: Into<String>, S: Into<String>> From<(L, S)> for OptionNames {
    fn from((long, short): (L, S)) -> Self {
        Self::new(long, short)
    }
}

/// A failure to write a value into its argument.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BindError {
    /// The value's kind is not the kind the argument was declared with.
    #[error("{name}: expected {expected}, got {received}")]
    Mismatch {
        /// The argument's display name.
        name: String,
        /// The declared kind.
        expected: Kind,
        /// The kind of the offered value.
        received: Kind,
    },
}

/// A declared argument, as stored by the parser.
#[derive(Debug)]
pub(crate) struct Argument {
    names: Vec<String>,
    kind: Kind,
    role: Role,
    required: bool,
    provided: bool,
    help: Option<String>,
    value: Option<Value>,
}

impl Argument {
    pub(crate) fn positional(name: impl Into<String>, kind: Kind) -> Self {
        Self::new(vec![name.into()], kind, Role::Positional)
    }

    pub(crate) fn option(names: Vec<String>, kind: Kind) -> Self {
        Self::new(names, kind, Role::Option)
    }

    fn new(names: Vec<String>, kind: Kind, role: Role) -> Self {
        debug_assert!(!names.is_empty());
        Self {
            names,
            kind,
            role,
            required: false,
            provided: false,
            help: None,
            value: None,
        }
    }

    /// The canonical display name.
    pub(crate) fn name(&self) -> &str {
        &self.names[0]
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn kind(&self) -> Kind {
        self.kind
    }

    pub(crate) fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn set_required(&mut self) {
        self.required = true;
    }

    pub(crate) fn is_provided(&self) -> bool {
        self.provided
    }

    /// Declare that the argument has been matched on the command line.
    pub(crate) fn matched(&mut self) {
        self.provided = true;
    }

    pub(crate) fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn set_help(&mut self, help: String) {
        self.help.replace(help);
    }

    pub(crate) fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Write the value into this argument, replacing any previous value.
    pub(crate) fn bind(&mut self, value: Value) -> Result<(), BindError> {
        if value.kind() != self.kind {
            return Err(BindError::Mismatch {
                name: self.name().to_string(),
                expected: self.kind,
                received: value.kind(),
            });
        }

        self.value.replace(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case(OptionNames::new("--output", "-o"), vec!["--output", "-o"])]
    #[case(OptionNames::long("--output"), vec!["--output"])]
    #[case(OptionNames::short("-o"), vec!["-o"])]
    #[case(OptionNames::from(("", "")), vec![])]
    #[case(OptionNames::default(), vec![])]
    fn option_names(#[case] names: OptionNames, #[case] expected: Vec<&str>) {
        assert_eq!(names.names(), expected);
    }

    #[test]
    fn argument_positional() {
        let argument = Argument::positional("input", Kind::Path);
        assert_eq!(argument.name(), "input");
        assert_eq!(argument.names(), &["input".to_string()]);
        assert_eq!(argument.kind(), Kind::Path);
        assert_eq!(argument.role(), Role::Positional);
        assert!(!argument.is_required());
        assert!(!argument.is_provided());
        assert_eq!(argument.help(), None);
        assert_eq!(argument.value(), None);
    }

    #[test]
    fn argument_option() {
        let mut argument =
            Argument::option(vec!["--output".to_string(), "-o".to_string()], Kind::Path);
        argument.set_required();
        argument.set_help("Where to write.".to_string());
        argument.matched();

        assert_eq!(argument.name(), "--output");
        assert_eq!(argument.role(), Role::Option);
        assert!(argument.is_required());
        assert!(argument.is_provided());
        assert_eq!(argument.help(), Some("Where to write."));
    }

    #[test]
    fn argument_bind() {
        let mut argument = Argument::positional("count", Kind::UInt64);

        argument.bind(Value::UInt64(1)).unwrap();
        assert_eq!(argument.value(), Some(&Value::UInt64(1)));

        argument.bind(Value::UInt64(2)).unwrap();
        assert_eq!(argument.value(), Some(&Value::UInt64(2)));
    }

    #[test]
    fn argument_bind_mismatch() {
        let mut argument = Argument::positional("input", Kind::Path);

        let result = argument.bind(Value::Text("in.txt".to_string()));

        assert_eq!(
            result,
            Err(BindError::Mismatch {
                name: "input".to_string(),
                expected: Kind::Path,
                received: Kind::Text,
            })
        );
        assert_eq!(argument.value(), None);
        assert_eq!(
            result.unwrap_err().to_string(),
            "input: expected path, got string"
        );

        argument.bind(Value::Path(PathBuf::from("in.txt"))).unwrap();
    }
}
