//! The parser configuration: registration-time state for flags and
//! positionals, plus the invariants enforced while building it.

use crate::error::ConfigError;
use crate::flag::FlagDescriptor;
use crate::positional::PositionalDescriptor;
use crate::value::DataType;

/// A help flag or flag separator: like a [`FlagDescriptor`] but with no
/// value type and no repetition bounds, since both are intercepted before
/// ordinary flag lookup.
#[derive(Debug, Clone)]
pub(crate) struct SpecialFlag {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    #[allow(dead_code)]
    pub(crate) description: Option<String>,
}

impl SpecialFlag {
    pub(crate) fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|a| a == token)
    }
}

/// The declared command-line grammar: flags, positionals, prefix
/// characters, the help and separator flags, and display text.
///
/// Mutated only during the registration phase; [`ParserConfig::parse`]
/// takes `&self`, so the type system prevents mutation while a parse is in
/// progress.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub(crate) flags: Vec<FlagDescriptor>,
    pub(crate) positionals: Vec<PositionalDescriptor>,
    pub(crate) prefix_chars: Vec<char>,
    pub(crate) help_flag: Option<SpecialFlag>,
    pub(crate) separator: Option<SpecialFlag>,
    pub(crate) program_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) epilogue: Option<String>,
    pub(crate) custom_help: Option<String>,
    pub(crate) help_enabled: bool,
    pub(crate) usage_enabled: bool,
    any_flag_registered: bool,
    has_optional_positional: bool,
    has_variadic_positional: bool,
}

impl ParserConfig {
    /// An empty configuration: only the default prefix set `{'-'}` is
    /// preregistered. No help flag, no separator, no flags, no positionals.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: Vec::new(),
            positionals: Vec::new(),
            prefix_chars: vec!['-'],
            help_flag: None,
            separator: None,
            program_name: None,
            description: None,
            epilogue: None,
            custom_help: None,
            help_enabled: true,
            usage_enabled: true,
            any_flag_registered: false,
            has_optional_positional: false,
            has_variadic_positional: false,
        }
    }

    fn starts_with_prefix(&self, name: &str) -> bool {
        name.chars()
            .next()
            .is_some_and(|c| self.prefix_chars.contains(&c))
    }

    fn all_registered_names(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .flat_map(|f| std::iter::once(f.name()).chain(f.aliases().iter().map(String::as_str)))
            .chain(
                self.help_flag
                    .iter()
                    .flat_map(|h| std::iter::once(h.name.as_str()).chain(h.aliases.iter().map(String::as_str))),
            )
            .chain(
                self.separator
                    .iter()
                    .flat_map(|s| std::iter::once(s.name.as_str()).chain(s.aliases.iter().map(String::as_str))),
            )
    }

    fn name_taken(&self, name: &str) -> bool {
        self.all_registered_names().any(|n| n == name)
    }

    /// Registers a flag. See [`crate::error::ConfigError`] for the ways
    /// this can fail.
    pub fn add_flag(
        &mut self,
        name: impl Into<String>,
        data_type: DataType,
        min_count: u32,
        max_count: i64,
        meta_name: Option<String>,
        description: Option<String>,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if !self.starts_with_prefix(&name) {
            return Err(ConfigError::InvalidPrefix(name));
        }
        if self.name_taken(&name) {
            return Err(ConfigError::NameAlreadyExists(name));
        }
        if max_count >= 0 && (max_count as u64) < u64::from(min_count) {
            return Err(ConfigError::InvalidCount {
                flag: name,
                min_count,
                max_count,
            });
        }
        self.any_flag_registered = true;
        self.flags.push(FlagDescriptor {
            name,
            data_type,
            min_count,
            max_count,
            meta_name,
            description,
            aliases: Vec::new(),
        });
        Ok(())
    }

    /// Registers `alias` as another spelling of the flag, help flag, or
    /// separator already registered under `name`.
    pub fn add_flag_alias(
        &mut self,
        name: &str,
        alias: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let alias = alias.into();
        if !self.starts_with_prefix(&alias) {
            return Err(ConfigError::InvalidPrefix(alias));
        }
        if self.name_taken(&alias) {
            return Err(ConfigError::NameAlreadyExists(alias));
        }

        if let Some(f) = self.flags.iter_mut().find(|f| f.name == name) {
            f.aliases.push(alias);
            return Ok(());
        }
        if let Some(h) = &mut self.help_flag {
            if h.name == name {
                h.aliases.push(alias);
                return Ok(());
            }
        }
        if let Some(s) = &mut self.separator {
            if s.name == name {
                s.aliases.push(alias);
                return Ok(());
            }
        }
        Err(ConfigError::AliasForUnknownFlag(name.to_owned()))
    }

    /// Replaces the help flag, or disables it if `name` is `None`.
    pub fn set_help_flag(
        &mut self,
        name: Option<impl Into<String>>,
        description: Option<String>,
    ) -> Result<(), ConfigError> {
        let old = self.help_flag.take();
        let Some(name) = name else {
            return Ok(());
        };
        let name = name.into();
        if !self.starts_with_prefix(&name) {
            self.help_flag = old;
            return Err(ConfigError::InvalidPrefix(name));
        }
        if self.name_taken(&name) {
            self.help_flag = old;
            return Err(ConfigError::NameAlreadyExists(name));
        }
        self.any_flag_registered = true;
        self.help_flag = Some(SpecialFlag {
            name,
            aliases: Vec::new(),
            description,
        });
        Ok(())
    }

    /// Replaces the flag separator, or disables it if `name` is `None`.
    pub fn set_flag_separator(
        &mut self,
        name: Option<impl Into<String>>,
        description: Option<String>,
    ) -> Result<(), ConfigError> {
        let old = self.separator.take();
        let Some(name) = name else {
            return Ok(());
        };
        let name = name.into();
        if !self.starts_with_prefix(&name) {
            self.separator = old;
            return Err(ConfigError::InvalidPrefix(name));
        }
        if self.name_taken(&name) {
            self.separator = old;
            return Err(ConfigError::NameAlreadyExists(name));
        }
        self.any_flag_registered = true;
        self.separator = Some(SpecialFlag {
            name,
            aliases: Vec::new(),
            description,
        });
        Ok(())
    }

    /// Registers a positional argument.
    ///
    /// No required positional may be added after an optional one; no
    /// positional at all may be added after a variadic one.
    pub fn add_positional(
        &mut self,
        name: impl Into<String>,
        data_type: DataType,
        required: bool,
        variadic: bool,
        meta_name: Option<String>,
        description: Option<String>,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if data_type == DataType::Presence {
            return Err(ConfigError::PresenceForPositional(name));
        }
        if self.starts_with_prefix(&name) {
            return Err(ConfigError::InvalidPrefix(name));
        }
        if self.has_variadic_positional {
            return Err(ConfigError::AnythingAfterVariadic(name));
        }
        if required && self.has_optional_positional {
            return Err(ConfigError::RequiredAfterOptional(name));
        }
        if !required {
            self.has_optional_positional = true;
        }
        if variadic {
            self.has_variadic_positional = true;
        }
        self.positionals.push(PositionalDescriptor {
            name,
            data_type,
            required,
            variadic,
            meta_name,
            description,
        });
        Ok(())
    }

    /// Replaces the active prefix-character set.
    ///
    /// Fails once any flag (including the default help flag) has been
    /// registered.
    pub fn set_flag_prefix(&mut self, chars: impl IntoIterator<Item = char>) -> Result<(), ConfigError> {
        if self.any_flag_registered {
            return Err(ConfigError::PrefixChangeAfterFlags);
        }
        self.prefix_chars = chars.into_iter().collect();
        Ok(())
    }

    /// Overrides the program name used in help/usage text and error
    /// messages; by default it is taken from `argv[0]` at parse time.
    pub fn set_program_name(&mut self, name: impl Into<String>) {
        self.program_name = Some(name.into());
    }

    /// Sets the description shown at the top of the help message.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Sets the epilogue shown at the end of the help message.
    pub fn set_epilogue(&mut self, epilogue: impl Into<String>) {
        self.epilogue = Some(epilogue.into());
    }

    /// Overrides the automatically generated help text.
    pub fn set_custom_help(&mut self, text: impl Into<String>) {
        self.custom_help = Some(text.into());
    }

    /// Enables or disables the help section of rendered help text.
    pub fn enable_help(&mut self, enabled: bool) {
        self.help_enabled = enabled;
    }

    /// Enables or disables the usage line of rendered help text.
    pub fn enable_usage(&mut self, enabled: bool) {
        self.usage_enabled = enabled;
    }

    /// The configured flags, in registration order.
    #[must_use]
    pub fn flags(&self) -> &[FlagDescriptor] {
        &self.flags
    }

    /// The configured positionals, in registration order (also their
    /// consumption order at parse time).
    #[must_use]
    pub fn positionals(&self) -> &[PositionalDescriptor] {
        &self.positionals
    }
}

impl Default for ParserConfig {
    /// The "default configuration": prefix `{'-'}`, separator `"--"`, help
    /// flag `-h` (`Presence` type), nothing else.
    fn default() -> Self {
        let mut config = Self::new();
        config.separator = Some(SpecialFlag {
            name: "--".to_owned(),
            aliases: Vec::new(),
            description: None,
        });
        config.help_flag = Some(SpecialFlag {
            name: "-h".to_owned(),
            aliases: Vec::new(),
            description: Some("Print this help message".to_owned()),
        });
        config.any_flag_registered = true;
        config
    }
}
