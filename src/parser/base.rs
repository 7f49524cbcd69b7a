use std::collections::HashMap;
use thiserror::Error;

use crate::api::{Argument, ArgumentId, BindError, Matches, Role};
use crate::decoder::{DecodeError, Decoder};
use crate::model::{Kind, Value};
use crate::policy::Policy;
use crate::util::{fail, require};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A failure caused by the command line input.
///
/// Parsing stops at the first one encountered.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// An option token names no declared option.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name, without any inline value.
        name: String,
    },

    /// A value could not be decoded as the argument's kind.
    #[error("{name}: {source} '{raw}'")]
    InvalidValue {
        /// The option name, or the positional name.
        name: String,
        /// The raw value.
        raw: String,
        /// The reason decoding failed.
        source: DecodeError,
    },

    /// A decoded value does not have the argument's kind.
    #[error("{name}: expected {expected}, got {received} '{value}'")]
    TypeMismatch {
        /// The option name, or the positional name.
        name: String,
        /// The kind the argument was declared with.
        expected: Kind,
        /// The kind produced by the decoder.
        received: Kind,
        /// The rendered value.
        value: String,
    },

    /// A short option which takes a value is the final token.
    #[error("{name}: missing value")]
    MissingValue {
        /// The option name.
        name: String,
    },

    /// More positional tokens than declared positionals.
    #[error("unexpected positional argument #{position}: '{token}'")]
    UnexpectedPositional {
        /// The zero based index among positional tokens.
        position: usize,
        /// The token.
        token: String,
    },

    /// The value could not be written to its argument.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// A required positional was never provided.
    #[error("missing required positional: {name}")]
    MissingPositional {
        /// The positional name.
        name: String,
    },

    /// A required option was never provided.
    #[error("missing required option: {name}")]
    MissingOption {
        /// The canonical option name.
        name: String,
    },
}

/// The declared arguments.
///
/// Arguments live in a single arena; the positional order and the name table refer to them by [`ArgumentId`].
#[derive(Debug, Default)]
pub(crate) struct Registry {
    arguments: Vec<Argument>,
    positionals: Vec<ArgumentId>,
    options: HashMap<String, ArgumentId>,
}

impl Registry {
    pub(crate) fn add(&mut self, argument: Argument) -> ArgumentId {
        for (i, name) in argument.names().iter().enumerate() {
            let repeated = argument.names()[..i].contains(name);
            require(!repeated && !self.is_declared(name), || {
                format!("cannot duplicate the parameter '{name}'")
            });
        }

        let id = ArgumentId(self.arguments.len());

        match argument.role() {
            Role::Positional => self.positionals.push(id),
            Role::Option => {
                for name in argument.names() {
                    self.options.insert(name.clone(), id);
                }
            }
        }

        self.arguments.push(argument);
        id
    }

    fn is_declared(&self, name: &str) -> bool {
        self.arguments
            .iter()
            .any(|argument| argument.names().iter().any(|n| n == name))
    }

    pub(crate) fn argument(&self, id: ArgumentId) -> &Argument {
        self.arguments
            .get(id.0)
            .unwrap_or_else(|| fail(format!("unknown argument #{}", id.0)))
    }

    pub(crate) fn argument_mut(&mut self, id: ArgumentId) -> &mut Argument {
        self.arguments
            .get_mut(id.0)
            .unwrap_or_else(|| fail(format!("unknown argument #{}", id.0)))
    }

    fn option(&self, name: &str) -> Option<ArgumentId> {
        self.options.get(name).copied()
    }

    fn positional(&self, position: usize) -> Option<ArgumentId> {
        self.positionals.get(position).copied()
    }

    fn check_required(&self) -> Result<(), ParseError> {
        for id in &self.positionals {
            let argument = self.argument(*id);

            if argument.is_required() && !argument.is_provided() {
                return Err(ParseError::MissingPositional {
                    name: argument.name().to_string(),
                });
            }
        }

        for argument in self
            .arguments
            .iter()
            .filter(|argument| argument.role() == Role::Option)
        {
            if argument.is_required() && !argument.is_provided() {
                return Err(ParseError::MissingOption {
                    name: argument.name().to_string(),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn matches(&self) -> Matches {
        Matches::new(
            self.arguments
                .iter()
                .map(|argument| argument.value().cloned())
                .collect(),
        )
    }
}

/// A single walk over the command line tokens.
pub(crate) struct Parser<'r, D: ?Sized> {
    registry: &'r mut Registry,
    policy: &'r Policy,
    decoder: &'r D,
}

impl<'r, D: Decoder + ?Sized> Parser<'r, D> {
    pub(crate) fn new(registry: &'r mut Registry, policy: &'r Policy, decoder: &'r D) -> Self {
        Self {
            registry,
            policy,
            decoder,
        }
    }

    /// Consume the tokens, skipping the program name at index `0`.
    pub(crate) fn consume(mut self, tokens: &[String]) -> Result<(), ParseError> {
        let long_prefix = self.policy.prefix().long();
        let short_prefix = self.policy.prefix().short();
        let mut position = 0;
        let mut index = 1;

        while index < tokens.len() {
            let token = tokens[index].as_str();

            if token.starts_with(long_prefix) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token #{index} '{token}' is a long option.");
                }

                self.long_option(token)?;
            } else if token.starts_with(short_prefix) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token #{index} '{token}' is a short option.");
                }

                index = self.short_option(tokens, index)?;
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token #{index} '{token}' is positional #{position}.");
                }

                self.positional(token, position)?;
                position += 1;
            }

            index += 1;
        }

        self.registry.check_required()
    }

    fn long_option(&mut self, token: &str) -> Result<(), ParseError> {
        let (name, raw) = token
            .split_once(self.policy.delimiter().assign())
            .unwrap_or((token, ""));
        let id = self.lookup(name)?;
        let kind = self.registry.argument(id).kind();

        if kind == Kind::Boolean {
            // A bare flag (or an unrecognized inline value) switches on.
            let value = self
                .decoder
                .decode(raw, kind)
                .unwrap_or(Value::Boolean(true));
            self.bind(id, name, value)
        } else {
            self.capture(id, name, raw)
        }
    }

    /// Returns the index of the last token consumed.
    fn short_option(&mut self, tokens: &[String], index: usize) -> Result<usize, ParseError> {
        let name = tokens[index].as_str();
        let id = self.lookup(name)?;

        if self.registry.argument(id).kind() == Kind::Boolean {
            self.bind(id, name, Value::Boolean(true))?;
            return Ok(index);
        }

        match tokens.get(index + 1) {
            Some(raw) => {
                self.capture(id, name, raw)?;
                Ok(index + 1)
            }
            None => Err(ParseError::MissingValue {
                name: name.to_string(),
            }),
        }
    }

    fn positional(&mut self, token: &str, position: usize) -> Result<(), ParseError> {
        let id = self
            .registry
            .positional(position)
            .ok_or_else(|| ParseError::UnexpectedPositional {
                position,
                token: token.to_string(),
            })?;
        self.matched(id);
        let name = self.registry.argument(id).name().to_string();
        self.capture(id, &name, token)
    }

    /// Find the option and declare it matched.
    fn lookup(&mut self, name: &str) -> Result<ArgumentId, ParseError> {
        let id = self
            .registry
            .option(name)
            .ok_or_else(|| ParseError::UnknownOption {
                name: name.to_string(),
            })?;
        self.matched(id);
        Ok(id)
    }

    fn matched(&mut self, id: ArgumentId) {
        let argument = self.registry.argument_mut(id);

        #[cfg(feature = "tracing_debug")]
        {
            if argument.is_provided() {
                debug!(
                    "Parameter '{}' provided again; the last value wins.",
                    argument.name()
                );
            }
        }

        argument.matched();
    }

    /// Decode the raw value and bind it.
    fn capture(&mut self, id: ArgumentId, name: &str, raw: &str) -> Result<(), ParseError> {
        let kind = self.registry.argument(id).kind();
        let value = self
            .decoder
            .decode(raw, kind)
            .map_err(|source| ParseError::InvalidValue {
                name: name.to_string(),
                raw: raw.to_string(),
                source,
            })?;
        self.bind(id, name, value)
    }

    /// Type check the value and bind it.
    fn bind(&mut self, id: ArgumentId, name: &str, value: Value) -> Result<(), ParseError> {
        let argument = self.registry.argument_mut(id);

        if value.kind() != argument.kind() {
            return Err(ParseError::TypeMismatch {
                name: name.to_string(),
                expected: argument.kind(),
                received: value.kind(),
                value: value.to_string(),
            });
        }

        argument.bind(value)?;
        Ok(())
    }
}
