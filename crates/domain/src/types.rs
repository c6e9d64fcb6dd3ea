// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A single untyped input value, as delivered by an input parser.
///
/// CSV cells always arrive as text. JSON numbers arrive as numbers, and
/// every other JSON value (booleans, nulls, arrays, objects) is carried as
/// its JSON text so that it can still be reported back to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// A textual value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// Any other value, rendered as text.
    Other(String),
}

impl RawValue {
    /// Creates a textual raw value.
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    /// Interprets this value as a finite number.
    ///
    /// Text is trimmed before parsing. `NaN` and infinities are not
    /// considered numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let number: f64 = match self {
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Number(number) => *number,
            Self::Other(_) => return None,
        };
        number.is_finite().then_some(number)
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) | Self::Other(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One untyped input record: an ordered mapping of field name to raw value.
///
/// Fields outside the schema are kept so that they are counted, but they
/// are never validated or used in calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: Vec<(String, RawValue)>,
}

impl RawRecord {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Sets a field, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: &str, value: RawValue) {
        if let Some(slot) = self.fields.iter_mut().find(|(field, _)| field == name) {
            slot.1 = value;
        } else {
            self.fields.push((name.to_string(), value));
        }
    }

    /// Builder-style variant of [`RawRecord::insert`].
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<RawValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns whether a field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<RawValue> {
        let idx: usize = self.fields.iter().position(|(field, _)| field == name)?;
        Some(self.fields.remove(idx).1)
    }

    /// Returns the number of fields in this record.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether this record has no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, RawValue)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (S, RawValue)>>(iter: I) -> Self {
        let mut record: Self = Self::new();
        for (name, value) in iter {
            let name: String = name.into();
            record.insert(&name, value);
        }
        record
    }
}

/// A validated, typed team record.
///
/// Instances are produced by the validator once every field has passed its
/// type and range checks. Calculations assume these guarantees hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Free-form team identifier.
    pub team_id: String,
    /// Number of agents currently on the team.
    pub current_staff: u32,
    /// Queries handled per day.
    pub queries_per_day: u32,
    /// Average handling time per query, in minutes.
    pub average_query_time: f64,
    /// Shift length, in hours.
    pub shift_hours: f64,
    /// Percentage of the shift available for query work.
    pub available_capacity: f64,
    /// Remote infrastructure efficiency, as a percentage.
    pub remote_infrastructure_efficiency: f64,
}
