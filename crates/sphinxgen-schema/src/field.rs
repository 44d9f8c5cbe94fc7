//! Field kinds, descriptors, and signatures.
//!
//! A [`FieldDescriptor`] is the normalized, read-only view of one model
//! field as supplied by the schema manifest: its semantic kind, storage
//! column, optional relation target, and optional enumerated choices.
//!
//! The derived [`FieldSignature`] is the equality key used by the
//! multi-model union: two fields from different models are "the same
//! field" only if kind, column, relation target, and choices all match
//! exactly.

use serde::{Deserialize, Serialize};

/// Semantic type tag for a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text (char/text columns).
    Text,
    /// Integer column.
    Integer,
    /// Floating-point column.
    Float,
    /// Fixed-precision decimal column.
    Decimal,
    /// Date column.
    Date,
    /// Date-and-time column.
    DateTime,
    /// Boolean column.
    Boolean,
    /// Foreign key to another model.
    ForeignKey,
    /// Many-to-many relation (no storage column on this table).
    ManyToMany,
    /// Geospatial point column.
    Point,
}

impl FieldKind {
    /// Whether this kind is a float attribute (float or decimal).
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Decimal)
    }

    /// Whether this kind is a date attribute (date or datetime).
    pub fn is_date(self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }
}

/// The normalized view of one model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Semantic kind.
    pub kind: FieldKind,

    /// Underlying storage column name.
    pub column: String,

    /// Relation target model, present only for relation fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    /// Enumerated set of allowed values, if the field is choice-constrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl FieldDescriptor {
    /// Create a plain field of the given kind.
    pub fn new(kind: FieldKind, column: impl Into<String>) -> Self {
        Self {
            kind,
            column: column.into(),
            relation: None,
            choices: None,
        }
    }

    /// Create a foreign-key field pointing at `target`.
    pub fn foreign_key(column: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::ForeignKey,
            column: column.into(),
            relation: Some(target.into()),
            choices: None,
        }
    }

    /// Attach an enumerated choice set.
    #[must_use]
    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Whether the field has a relation target.
    pub fn has_relation(&self) -> bool {
        self.relation.is_some()
    }

    /// Whether the field carries a non-empty choice set.
    pub fn has_choices(&self) -> bool {
        self.choices.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Derive the four-part signature used for union equality.
    pub fn signature(&self) -> FieldSignature {
        FieldSignature {
            kind: self.kind,
            column: self.column.clone(),
            relation: self.relation.clone(),
            choices: self.choices.clone(),
        }
    }
}

/// The four-part equality key for multi-model field intersection.
///
/// Stable and comparable across models; never mutated after derivation.
/// Exactly `(kind, column, relation, choices)` — declared database column
/// types are deliberately not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSignature {
    /// Semantic kind.
    pub kind: FieldKind,
    /// Storage column name.
    pub column: String,
    /// Relation target, or `None`.
    pub relation: Option<String>,
    /// Choice set, or `None`.
    pub choices: Option<Vec<String>>,
}

// ============================================================================
// Tests
// ============================================================================
