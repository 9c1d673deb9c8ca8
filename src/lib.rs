//! A small, explicit command line argument parser.
//!
//! An author describes the expected command line surface — flags
//! (optionally with typed values), positional arguments, a help flag, and a
//! flag separator — by registering them on a [`ParserConfig`]. A configured,
//! frozen [`ParserConfig`] then consumes a raw argument vector and produces
//! either a pair of [`NamedValueStore`]s (one for flags, one for
//! positionals) or a [`ParseError`].
//!
//! ```
//! use argcap::{DataType, ParserConfig};
//!
//! let mut config = ParserConfig::default(); // prefix '-', separator "--", help flag "-h"
//! config
//!     .add_flag("-c", DataType::String, 0, -1, Some("STRING".into()), None)
//!     .unwrap();
//! config
//!     .add_positional("word", DataType::String, true, false, None, None)
//!     .unwrap();
//!
//! let argv = ["prog", "-c", "a", "-c", "b", "hello"];
//! let outcome = config.parse(&argv).unwrap();
//! let argcap::ParseOutcome::Success { flags, positionals } = outcome else {
//!     panic!("expected a successful parse")
//! };
//! assert_eq!(flags.count("-c"), 2);
//! assert_eq!(positionals.get("word").unwrap().as_str(), "hello");
//! ```
//!
//! Two things this crate deliberately does not do: it never mutates a
//! [`ParserConfig`] after it has produced a parse, and it never reads
//! environment variables. Subcommand trees, bundled short options
//! (`-abc` for `-a -b -c`), `--flag=value` syntax, and shell completion are
//! all out of scope; see the module-level docs on [`ParserConfig`] for the
//! exact grammar this crate accepts.

#[cfg(feature = "color")]
#[macro_use]
mod color;
#[cfg(not(feature = "color"))]
#[macro_use]
mod no_color;

/// Forces colored (`true`) or plain (`false`) help output, overriding the
/// `supports-color` probe. A no-op unless the `color` feature is enabled.
#[cfg(feature = "color")]
pub use color::set_override as set_color_override;

/// Forces colored (`true`) or plain (`false`) help output, overriding the
/// `supports-color` probe. A no-op unless the `color` feature is enabled.
#[cfg(not(feature = "color"))]
pub use no_color::set_override as set_color_override;

mod config;
pub mod error;
mod flag;
pub mod help;
mod parser;
mod positional;
mod store;
mod value;

#[cfg(test)]
mod tests;

pub use config::ParserConfig;
pub use error::{ConfigError, ParseError};
pub use flag::FlagDescriptor;
pub use parser::ParseOutcome;
pub use positional::PositionalDescriptor;
pub use store::{NamedValueEntry, NamedValueStore};
pub use value::{DataType, Value};

/// Parses `argv` against `config`, printing help or a diagnostic and
/// exiting the process on anything other than a successful parse.
///
/// [`ParserConfig::parse`] is the no-exit entry point this wraps for
/// callers that would rather print and exit than match on a `Result`.
#[must_use]
pub fn parse_or_exit<S: AsRef<str>>(
    config: &ParserConfig,
    argv: &[S],
) -> (crate::store::NamedValueStore, crate::store::NamedValueStore) {
    let program_name = config.program_name(argv);
    match config.parse(argv) {
        Ok(ParseOutcome::Success { flags, positionals }) => (flags, positionals),
        Ok(ParseOutcome::HelpRequested) => {
            print!("{}", help::help_string(config, program_name));
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("{program_name}: error: {err}");
            std::process::exit(1);
        }
    }
}
