use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Words that may not appear anywhere in a search keyword. Checked in order,
/// first match wins.
pub const BAD_WORDS: [&str; 2] = ["crazy", "ugly"];

/// An employee record. `id` doubles as the engine document ID.
///
/// Optional fields are omitted from serialized JSON when absent, so the same
/// shape works as a full document (insert) and as a partial one (update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Employee {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl Employee {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Synthetic record used when seeding: `person{id}`, `address{id}`, `id * 100`.
    pub fn seeded(id: i64) -> Self {
        Self::new(id)
            .with_name(format!("person{}", id))
            .with_address(format!("address{}", id))
            .with_salary(id as f64 * 100.0)
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn merge(&mut self, patch: &Employee) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(address) = &patch.address {
            self.address = Some(address.clone());
        }
        if let Some(salary) = patch.salary {
            self.salary = Some(salary);
        }
    }
}

/// Raw search text. Must pass [`Keyword::validate`] before reaching the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-sensitive substring check against [`BAD_WORDS`]. No trimming.
    pub fn validate(&self) -> Result<()> {
        match BAD_WORDS.iter().find(|word| self.0.contains(*word)) {
            Some(word) => Err(RosterError::BadKeyword(word.to_string())),
            None => Ok(()),
        }
    }
}

impl From<&str> for Keyword {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
