//! The two disjoint error taxonomies: configuration-time errors raised by
//! [`crate::ParserConfig`]'s registration API, and parse-time errors raised
//! by [`crate::ParserConfig::parse`].

use std::fmt;

/// An error raised while registering a flag, positional, or other setting
/// on a [`crate::ParserConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag name or alias collides with one already registered (as a
    /// regular flag, an alias, the help flag, or the separator flag).
    NameAlreadyExists(String),
    /// A flag/alias name does not begin with an active prefix character.
    InvalidPrefix(String),
    /// [`crate::ParserConfig::set_flag_prefix`] was called after at least
    /// one flag (including the default help flag) was registered.
    PrefixChangeAfterFlags,
    /// A positional was declared with [`crate::DataType::Presence`].
    PresenceForPositional(String),
    /// A required positional was added after an optional one.
    RequiredAfterOptional(String),
    /// Any positional was added after a variadic one.
    AnythingAfterVariadic(String),
    /// `max_count < min_count` (and `max_count != -1`).
    InvalidCount {
        /// The flag this count was rejected for.
        flag: String,
        /// The configured minimum.
        min_count: u32,
        /// The configured maximum (`-1` meaning unbounded is never an
        /// error, so this field is always non-negative here).
        max_count: i64,
    },
    /// [`crate::ParserConfig::add_flag_alias`] named a flag that was never
    /// registered with `add_flag`, `set_help_flag`, or
    /// `set_flag_separator`.
    AliasForUnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NameAlreadyExists(name) => {
                write!(f, "a flag or alias named '{name}' is already registered")
            }
            ConfigError::InvalidPrefix(name) => {
                write!(f, "'{name}' does not begin with an active prefix character")
            }
            ConfigError::PrefixChangeAfterFlags => {
                write!(
                    f,
                    "cannot change the flag prefix set after a flag has been registered"
                )
            }
            ConfigError::PresenceForPositional(name) => {
                write!(f, "positional '{name}' cannot have data type Presence")
            }
            ConfigError::RequiredAfterOptional(name) => {
                write!(
                    f,
                    "required positional '{name}' cannot follow an optional positional"
                )
            }
            ConfigError::AnythingAfterVariadic(name) => {
                write!(f, "positional '{name}' cannot follow a variadic positional")
            }
            ConfigError::InvalidCount {
                flag,
                min_count,
                max_count,
            } => {
                write!(
                    f,
                    "flag '{flag}' has an invalid count range: min={min_count}, max={max_count}"
                )
            }
            ConfigError::AliasForUnknownFlag(name) => {
                write!(f, "cannot add an alias for unknown flag '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// An error raised while parsing a single argv against a frozen
/// [`crate::ParserConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A flag-like token matched no flag, alias, help flag, or separator.
    UnknownFlag(String),
    /// A value-bearing flag was the last token in argv.
    MissingFlagValue(String),
    /// A flag's value did not match its declared data type.
    CannotParseFlag {
        /// The flag's canonical name.
        flag: String,
        /// The raw token that failed to parse.
        raw: String,
    },
    /// A positional's value did not match its declared data type.
    CannotParsePositional {
        /// The positional's name.
        name: String,
        /// The raw token that failed to parse.
        raw: String,
    },
    /// A flag occurred more times than its `max_count`.
    TooManyFlags(String),
    /// A flag occurred fewer times than its `min_count`.
    NotEnoughFlags(String),
    /// A non-flag token arrived after all positionals were consumed.
    TooManyPositionals,
    /// A required positional (including a required-variadic one with zero
    /// values) was not satisfied.
    NotEnoughPositionals(String),
    /// argv contained a zero-length string.
    EmptyArgument,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownFlag(tok) => write!(f, "unknown flag '{tok}'"),
            ParseError::MissingFlagValue(flag) => {
                write!(f, "flag '{flag}' requires a value but none was given")
            }
            ParseError::CannotParseFlag { flag, raw } => {
                write!(f, "could not parse '{raw}' as the value of flag '{flag}'")
            }
            ParseError::CannotParsePositional { name, raw } => {
                write!(f, "could not parse '{raw}' as the value of '{name}'")
            }
            ParseError::TooManyFlags(flag) => {
                write!(f, "flag '{flag}' was given more times than allowed")
            }
            ParseError::NotEnoughFlags(flag) => {
                write!(f, "flag '{flag}' is required but was not given enough times")
            }
            ParseError::TooManyPositionals => {
                write!(f, "too many positional arguments")
            }
            ParseError::NotEnoughPositionals(name) => {
                write!(f, "missing required positional argument '{name}'")
            }
            ParseError::EmptyArgument => write!(f, "argument vector contained an empty string"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_mention_the_offending_name() {
        assert!(ParseError::UnknownFlag("-x".into())
            .to_string()
            .contains("-x"));
        assert!(ConfigError::NameAlreadyExists("-a".into())
            .to_string()
            .contains("-a"));
    }
}
