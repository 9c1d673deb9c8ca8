//! An immutable record describing one declared flag: its name, value type,
//! repetition bounds, and display metadata.

use crate::value::DataType;

/// Configuration-time description of a flag.
///
/// Built and validated by [`crate::ParserConfig::add_flag`]; never
/// constructed directly by users of the crate.
#[derive(Debug, Clone)]
pub struct FlagDescriptor {
    pub(crate) name: String,
    pub(crate) data_type: DataType,
    pub(crate) min_count: u32,
    pub(crate) max_count: i64,
    pub(crate) meta_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) aliases: Vec<String>,
}

impl FlagDescriptor {
    /// The canonical name values are stored under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared data type.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Minimum required occurrences.
    #[must_use]
    pub fn min_count(&self) -> u32 {
        self.min_count
    }

    /// Maximum allowed occurrences, or `-1` for unbounded.
    #[must_use]
    pub fn max_count(&self) -> i64 {
        self.max_count
    }

    /// The explicit meta-name, if any; ignored in help output when
    /// `data_type() == DataType::Presence`.
    #[must_use]
    pub fn meta_name(&self) -> Option<&str> {
        self.meta_name.as_deref()
    }

    /// Falls back to the flag's own name (prefix stripped, upper-cased) when
    /// no explicit meta-name was configured.
    #[must_use]
    pub fn display_meta_name(&self) -> String {
        match &self.meta_name {
            Some(m) => m.clone(),
            None => self
                .name
                .trim_start_matches(|c: char| !c.is_alphanumeric())
                .to_uppercase(),
        }
    }

    /// The flag's description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Aliases registered for this flag, in registration order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// `true` iff `token` matches this flag's name or one of its aliases.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|a| a == token)
    }
}
