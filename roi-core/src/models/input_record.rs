use std::array;

use serde::{Deserialize, Serialize};

use crate::calculations::Operand;
use crate::engine::ParamMap;
use crate::models::FieldKey;

/// The raw text of every input field of a session.
///
/// The mapping is total: each [`FieldKey`] has a value, and an unset field
/// holds the empty string. Values are kept exactly as entered; they are only
/// interpreted as numbers when a calculation reads them through
/// [`InputRecord::operand`].
///
/// Records are values. Editing a field with [`InputRecord::with_field`]
/// returns a new record and leaves the original untouched.
///
/// A record serializes as its parameter map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ParamMap", from = "ParamMap")]
pub struct InputRecord {
    values: [String; FieldKey::COUNT],
}

impl InputRecord {
    /// A record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(key, value)` pairs; fields not listed stay
    /// unset and later pairs win over earlier ones.
    pub fn from_fields<I, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (FieldKey, V)>,
        V: Into<String>,
    {
        let mut values: [String; FieldKey::COUNT] = array::from_fn(|_| String::new());
        for (key, value) in fields {
            values[key.index()] = value.into();
        }
        Self { values }
    }

    /// Raw text of `key`.
    pub fn get(
        &self,
        key: FieldKey,
    ) -> &str {
        &self.values[key.index()]
    }

    /// `key` read as a calculation operand.
    pub fn operand(
        &self,
        key: FieldKey,
    ) -> Operand {
        Operand::parse(self.get(key))
    }

    /// A copy of this record with `key` set to `raw`.
    #[must_use]
    pub fn with_field(
        &self,
        key: FieldKey,
        raw: impl Into<String>,
    ) -> Self {
        let mut next = self.clone();
        next.values[key.index()] = raw.into();
        next
    }

    pub fn is_unset(
        &self,
        key: FieldKey,
    ) -> bool {
        self.get(key).is_empty()
    }

    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Fields in [`FieldKey::all`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        FieldKey::all()
            .iter()
            .map(move |key| (*key, self.get(*key)))
    }
}
