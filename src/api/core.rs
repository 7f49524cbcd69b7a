use std::env;
use std::marker::PhantomData;

use crate::api::{Argument, ArgumentId, Key, Matches, OptionNames};
use crate::decoder::{Decoder, DefaultDecoder};
use crate::model::Scalar;
use crate::parser::{ConsoleInterface, ParseError, Parser, Registry, UserInterface};
use crate::policy::Policy;
use crate::util::{fail, require};

/// The command line parser.
///
/// Declare positionals and options, then [`parse`](CommandLineParser::parse) the tokens.
/// Token `0` is the program name, and is never parsed.
///
/// ### Example
/// ```
/// use argbind::CommandLineParser;
/// use std::path::PathBuf;
///
/// let mut parser = CommandLineParser::new(["program", "--do-thing", "file", "-o", "out"]);
/// let input = parser.positional::<PathBuf>("input").required().key();
/// let do_thing = parser.option::<bool>(("--do-thing", "-do")).key();
/// let output = parser.option::<PathBuf>(("--output", "-o")).key();
///
/// let matches = parser.parse().unwrap();
///
/// assert_eq!(matches.get(input), Some(PathBuf::from("file")));
/// assert_eq!(matches.get(do_thing), Some(true));
/// assert_eq!(matches.get(output), Some(PathBuf::from("out")));
/// ```
#[derive(Debug)]
pub struct CommandLineParser {
    policy: Policy,
    tokens: Vec<String>,
    registry: Registry,
}

impl CommandLineParser {
    /// Create a command line parser over `tokens`, with the [`Policy::POSIX`] conventions.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_policy(Policy::default(), tokens)
    }

    /// Create a command line parser over `tokens`, with the specified conventions.
    pub fn with_policy<I, S>(policy: Policy, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            policy,
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().to_string())
                .collect(),
            registry: Registry::default(),
        }
    }

    /// Create a command line parser over the process arguments, with the [`Policy::POSIX`] conventions.
    ///
    /// Arguments which are not valid unicode are converted lossily.
    pub fn from_env() -> Self {
        Self::new(env::args_os().map(|token| token.to_string_lossy().into_owned()))
    }

    /// The conventions this parser classifies tokens by.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// The program name (token `0`), if any.
    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Declare the next positional argument.
    ///
    /// Positionals are filled in the order they are declared.
    /// Panics if `name` is empty or already declared.
    ///
    /// ### Example
    /// ```
    /// use argbind::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new(["program", "1", "2"]);
    /// let a = parser.positional::<u64>("a").key();
    /// let b = parser.positional::<i64>("b").key();
    /// let matches = parser.parse().unwrap();
    ///
    /// assert_eq!(matches.get(a), Some(1));
    /// assert_eq!(matches.get(b), Some(2));
    /// ```
    pub fn positional<T: Scalar>(&mut self, name: impl Into<String>) -> Registration<'_, T> {
        let name = name.into();
        require(!name.is_empty(), || {
            "positional must have non-empty name".to_string()
        });

        let id = self.registry.add(Argument::positional(name, T::KIND));
        Registration::new(self.registry.argument_mut(id), id)
    }

    /// Declare an option, by its long and/or short name.
    ///
    /// Panics if neither name is defined, if a name does not start with its prefix, or if a name is already declared.
    ///
    /// ### Example
    /// ```
    /// use argbind::{CommandLineParser, OptionNames};
    ///
    /// let mut parser = CommandLineParser::new(["program", "--verbose", "-n", "3"]);
    /// let verbose = parser.option::<bool>(OptionNames::long("--verbose")).key();
    /// let count = parser.option::<u64>(OptionNames::short("-n")).key();
    /// let matches = parser.parse().unwrap();
    ///
    /// assert_eq!(matches.get(verbose), Some(true));
    /// assert_eq!(matches.get(count), Some(3));
    /// ```
    pub fn option<T: Scalar>(&mut self, names: impl Into<OptionNames>) -> Registration<'_, T> {
        let names = names.into();
        let prefix = self.policy.prefix();

        if names.names().is_empty() {
            fail("option must have at least one name".to_string());
        }

        if let Some(long) = names.long_name() {
            require(long.starts_with(prefix.long()), || {
                format!(
                    "long option name '{long}' must start with '{}'",
                    prefix.long()
                )
            });
        }

        if let Some(short) = names.short_name() {
            require(short.starts_with(prefix.short()), || {
                format!(
                    "short option name '{short}' must start with '{}'",
                    prefix.short()
                )
            });
        }

        let names = names.names().into_iter().map(str::to_string).collect();
        let id = self.registry.add(Argument::option(names, T::KIND));
        Registration::new(self.registry.argument_mut(id), id)
    }

    /// The names an argument was declared with, canonical name first.
    ///
    /// # Panics
    /// If `id` was not issued by this parser.
    pub fn names(&self, id: ArgumentId) -> &[String] {
        self.registry.argument(id).names()
    }

    /// The help text documented on an argument.
    ///
    /// # Panics
    /// If `id` was not issued by this parser.
    pub fn help(&self, id: ArgumentId) -> Option<&str> {
        self.registry.argument(id).help()
    }

    /// Parse the tokens with the [`DefaultDecoder`].
    ///
    /// Stops at the first error.
    /// Repeating an option is not an error: the last value wins.
    pub fn parse(&mut self) -> Result<Matches, ParseError> {
        self.parse_with(&DefaultDecoder)
    }

    /// Parse the tokens, decoding values with `decoder`.
    pub fn parse_with<D: Decoder + ?Sized>(&mut self, decoder: &D) -> Result<Matches, ParseError> {
        Parser::new(&mut self.registry, &self.policy, decoder).consume(&self.tokens)?;
        Ok(self.registry.matches())
    }

    /// Parse the tokens with the [`DefaultDecoder`].
    /// If an error is encountered, prints it and exits with error code `1` (via [`std::process::exit`]).
    pub fn parse_or_exit(&mut self) -> Matches {
        match self.parse_with_interface(&DefaultDecoder, &ConsoleInterface::default()) {
            Ok(matches) => matches,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }

    fn parse_with_interface<D: Decoder + ?Sized>(
        &mut self,
        decoder: &D,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<Matches, i32> {
        self.parse_with(decoder).map_err(|error| {
            user_interface.print_error(&error);
            1
        })
    }
}

/// A declared argument, open to further configuration.
pub struct Registration<'p, T> {
    argument: &'p mut Argument,
    id: ArgumentId,
    _phantom: PhantomData<fn() -> T>,
}

impl<'p, T> Registration<'p, T> {
    fn new(argument: &'p mut Argument, id: ArgumentId) -> Self {
        Self {
            argument,
            id,
            _phantom: PhantomData,
        }
    }

    /// Require the argument to be provided.
    ///
    /// ### Example
    /// ```
    /// use argbind::{CommandLineParser, ParseError};
    ///
    /// let mut parser = CommandLineParser::new(["program"]);
    /// parser.positional::<String>("input").required();
    ///
    /// assert_eq!(
    ///     parser.parse(),
    ///     Err(ParseError::MissingPositional { name: "input".to_string() }),
    /// );
    /// ```
    pub fn required(self) -> Self {
        self.argument.set_required();
        self
    }

    /// Document the argument.
    /// If repeated, only the final help message will apply.
    ///
    /// The help text is stored for the caller; it does not affect parsing.
    pub fn help(self, description: impl Into<String>) -> Self {
        self.argument.set_help(description.into());
        self
    }

    /// The untyped identity of the argument.
    pub fn id(&self) -> ArgumentId {
        self.id
    }

    /// The typed handle for reading the argument out of [`Matches`].
    pub fn key(&self) -> Key<T> {
        Key::new(self.id)
    }
}

impl<'p, T> From<Registration<'p, T>> for Key<T> {
    fn from(value: Registration<'p, T>) -> Self {
        value.key()
    }
}
