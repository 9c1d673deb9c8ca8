//! The result container: an ordered multi-map from name to a sequence of
//! [`Value`]s, used for both the flag store and the positional store a parse
//! produces.

use crate::value::{DataType, Value};

/// A name and the ordered sequence of values stored under it.
///
/// Invariant: all values in one entry share the same [`DataType`].
#[derive(Debug, Clone)]
pub struct NamedValueEntry {
    name: String,
    values: Vec<Value>,
}

impl NamedValueEntry {
    /// The entry's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry's values, in insertion order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// Ordered multi-map from name to a sequence of [`Value`]s; the result
/// container produced by a parse for flags, and separately for positionals.
///
/// Names are pairwise distinct. Lookup by name returns either the entry or
/// absence. The store owns its entries and their values.
#[derive(Debug, Clone, Default)]
pub struct NamedValueStore {
    entries: Vec<NamedValueEntry>,
}

impl NamedValueStore {
    /// A new, empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// `true` iff any entry exists for `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Number of values stored for `name`, zero if absent.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.index_of(name)
            .map_or(0, |i| self.entries[i].values.len())
    }

    /// The `i`-th value (0-based) stored for `name`, or `None` if
    /// `i >= count(name)`.
    #[must_use]
    pub fn get_at(&self, name: &str, i: usize) -> Option<&Value> {
        self.entries
            .iter()
            .find(|e| e.name == name)?
            .values
            .get(i)
    }

    /// Shorthand for `get_at(name, 0)`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.get_at(name, 0)
    }

    /// The full entry for `name`, if any.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&NamedValueEntry> {
        self.index_of(name).map(|i| &self.entries[i])
    }

    /// All stored entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[NamedValueEntry] {
        &self.entries
    }

    /// Appends `value` to the entry for `name`, creating it if absent.
    ///
    /// Used for flag-style accumulation. Returns `Err(existing_type)` if the
    /// entry already holds values of a different [`DataType`] than `value`.
    pub fn append(&mut self, name: &str, value: Value) -> Result<(), DataType> {
        match self.index_of(name) {
            Some(i) => {
                let existing = self.entries[i]
                    .values
                    .first()
                    .expect("an entry is never created without at least one value")
                    .data_type();
                if existing != value.data_type() {
                    return Err(existing);
                }
                self.entries[i].values.push(value);
            }
            None => self.entries.push(NamedValueEntry {
                name: name.to_owned(),
                values: vec![value],
            }),
        }
        Ok(())
    }

    /// Creates or replaces the entry for `name` so it holds exactly one
    /// value. Used for positional-style single-value storage; changing type
    /// across calls is permitted.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.index_of(name) {
            Some(i) => self.entries[i].values = vec![value],
            None => self.entries.push(NamedValueEntry {
                name: name.to_owned(),
                values: vec![value],
            }),
        }
    }
}
