//! The parse-time state machine: consumes a raw argv against a
//! frozen [`ParserConfig`] and produces a populated pair of
//! [`NamedValueStore`]s, a help request, or a typed [`ParseError`].

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::store::NamedValueStore;
use crate::value::{self, DataType, Value};

/// The result of a successful parse: either the populated stores, or a
/// signal that the help flag was seen (in which case no stores are
/// produced: help requests short-circuit parsing).
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Parsing completed; `flags` and `positionals` hold every value
    /// accumulated along the way.
    Success {
        /// Values stored under each flag's canonical name.
        flags: NamedValueStore,
        /// Values stored under each positional's name.
        positionals: NamedValueStore,
    },
    /// The help flag was encountered before positional-only mode; no
    /// stores were produced.
    HelpRequested,
}

fn parse_value(raw: &str, data_type: DataType) -> Option<Value> {
    match data_type {
        DataType::Presence => Some(Value::Presence),
        DataType::Int => value::parse_int(raw).map(Value::Int),
        DataType::Double => value::parse_double(raw).map(Value::Double),
        DataType::String => Some(Value::String(raw.to_owned())),
    }
}

impl ParserConfig {
    /// Derives the default program name from `argv[0]`, or returns the
    /// configured override if one was set with
    /// [`ParserConfig::set_program_name`].
    #[must_use]
    pub fn program_name<'a, S: AsRef<str>>(&'a self, argv: &'a [S]) -> &'a str {
        self.program_name
            .as_deref()
            .or_else(|| argv.first().map(AsRef::as_ref))
            .unwrap_or("")
    }

    /// Parses `argv` (where `argv[0]` is the program name, per convention)
    /// against this configuration.
    pub fn parse<S: AsRef<str>>(&self, argv: &[S]) -> Result<ParseOutcome, ParseError> {
        // Help is matched by a pre-scan over the whole argument vector, not
        // inline in the main loop below: the help flag aborts parsing when
        // encountered anywhere before positional-only mode, so a malformed
        // or unknown token earlier in argv must not shadow a later `-h`.
        if let Some(help) = &self.help_flag {
            for raw in argv.iter().skip(1) {
                let tok = raw.as_ref();
                if tok.is_empty()
                    || !tok
                        .chars()
                        .next()
                        .is_some_and(|c| self.prefix_chars.contains(&c))
                {
                    continue;
                }
                if help.matches(tok) {
                    return Ok(ParseOutcome::HelpRequested);
                }
                if let Some(sep) = &self.separator {
                    if sep.matches(tok) {
                        break;
                    }
                }
            }
        }

        let mut i = 1usize;
        let mut positional_cursor = 0usize;
        let mut in_positional_only = false;
        let mut flag_store = NamedValueStore::empty();
        let mut positional_store = NamedValueStore::empty();
        let mut tally: std::collections::HashMap<String, u32> = std::collections::HashMap::new();

        while i < argv.len() {
            let tok = argv[i].as_ref();

            if tok.is_empty() {
                return Err(ParseError::EmptyArgument);
            }

            let flag_like = !in_positional_only
                && tok
                    .chars()
                    .next()
                    .is_some_and(|c| self.prefix_chars.contains(&c));

            if flag_like {
                if let Some(sep) = &self.separator {
                    if sep.matches(tok) {
                        in_positional_only = true;
                        i += 1;
                        continue;
                    }
                }

                let flag = self
                    .flags
                    .iter()
                    .find(|f| f.matches(tok))
                    .ok_or_else(|| ParseError::UnknownFlag(tok.to_owned()))?;
                let canonical = flag.name().to_owned();

                let value = if flag.data_type() == DataType::Presence {
                    Value::Presence
                } else {
                    i += 1;
                    let raw = argv
                        .get(i)
                        .ok_or_else(|| ParseError::MissingFlagValue(canonical.clone()))?
                        .as_ref();
                    parse_value(raw, flag.data_type()).ok_or_else(|| ParseError::CannotParseFlag {
                        flag: canonical.clone(),
                        raw: raw.to_owned(),
                    })?
                };

                let count = tally.entry(canonical.clone()).or_insert(0);
                *count += 1;
                if flag.max_count() >= 0 && i64::from(*count) > flag.max_count() {
                    return Err(ParseError::TooManyFlags(canonical));
                }
                flag_store
                    .append(&canonical, value)
                    .expect("a flag's values always share its declared data type");
                i += 1;
            } else {
                let Some(p) = self.positionals.get(positional_cursor) else {
                    return Err(ParseError::TooManyPositionals);
                };
                let value = parse_value(tok, p.data_type()).ok_or_else(|| {
                    ParseError::CannotParsePositional {
                        name: p.name().to_owned(),
                        raw: tok.to_owned(),
                    }
                })?;
                if p.variadic() {
                    positional_store
                        .append(p.name(), value)
                        .expect("a positional's values always share its declared data type");
                } else {
                    positional_store.set(p.name(), value);
                    positional_cursor += 1;
                }
                i += 1;
            }
        }

        for flag in &self.flags {
            let seen = tally.get(flag.name()).copied().unwrap_or(0);
            if seen < flag.min_count() {
                return Err(ParseError::NotEnoughFlags(flag.name().to_owned()));
            }
        }
        for p in &self.positionals[positional_cursor..] {
            if p.required() && positional_store.count(p.name()) == 0 {
                return Err(ParseError::NotEnoughPositionals(p.name().to_owned()));
            }
        }

        Ok(ParseOutcome::Success {
            flags: flag_store,
            positionals: positional_store,
        })
    }
}
