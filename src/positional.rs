//! An immutable record describing one declared positional argument.

use crate::value::DataType;

/// Configuration-time description of a positional argument.
///
/// Built and validated by [`crate::ParserConfig::add_positional`]; never
/// constructed directly by users of the crate.
#[derive(Debug, Clone)]
pub struct PositionalDescriptor {
    pub(crate) name: String,
    pub(crate) data_type: DataType,
    pub(crate) required: bool,
    pub(crate) variadic: bool,
    pub(crate) meta_name: Option<String>,
    pub(crate) description: Option<String>,
}

impl PositionalDescriptor {
    /// The name values are stored under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared data type; never [`DataType::Presence`].
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// `true` iff this positional must be supplied at least once.
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// `true` iff this positional absorbs all remaining non-flag tokens.
    #[must_use]
    pub fn variadic(&self) -> bool {
        self.variadic
    }

    /// The explicit meta-name, if any.
    #[must_use]
    pub fn meta_name(&self) -> Option<&str> {
        self.meta_name.as_deref()
    }

    /// Falls back to the positional's own name when no explicit meta-name
    /// was configured.
    #[must_use]
    pub fn display_meta_name(&self) -> &str {
        self.meta_name.as_deref().unwrap_or(&self.name)
    }

    /// The positional's description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
