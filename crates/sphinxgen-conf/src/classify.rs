//! Field eligibility and category classification.
//!
//! Given one field descriptor, the classifier decides whether the field
//! can be sourced into the search index at all and, if so, which semantic
//! categories it belongs to: grouping attribute, date attribute, float
//! attribute, geospatial attribute. Plain text and foreign-key columns
//! with no category are indexed as ordinary attributes.
//!
//! Classification is total: any well-formed descriptor classifies without
//! error. Ineligible fields simply return `None`.

use sphinxgen_core::Settings;
use sphinxgen_core::version::VER_FLOAT_ATTRS;
use sphinxgen_schema::{FieldDescriptor, FieldKind, FieldSignature, ModelDescriptor};

/// A semantic category an eligible field can belong to.
///
/// A field may satisfy several categories at once (an integer with
/// choices is both sourced and grouped, a datetime is grouped by time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Usable for result grouping/filtering.
    Group,
    /// Date/datetime attribute.
    Date,
    /// Float attribute.
    Float,
    /// Geospatial point attribute.
    Geo,
}

/// Geospatial capability, resolved once at startup.
///
/// When disabled, point columns classify without the geo category and no
/// coordinate expressions are emitted; absence is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoSupport {
    /// Geospatial extension available; coordinates transform to `srid`.
    Enabled {
        /// Spatial reference id for coordinate transforms.
        srid: u32,
    },
    /// No geospatial extension.
    Disabled,
}

impl GeoSupport {
    /// Whether the capability is present.
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    /// The configured spatial reference id, if enabled.
    pub fn srid(self) -> Option<u32> {
        match self {
            Self::Enabled { srid } => Some(srid),
            Self::Disabled => None,
        }
    }
}

/// An eligible field with its derived signature and categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedField {
    /// The four-part union-equality signature.
    pub signature: FieldSignature,
    /// Categories the field belongs to.
    categories: Vec<Category>,
}

impl ClassifiedField {
    /// The field's storage column name.
    pub fn column(&self) -> &str {
        &self.signature.column
    }

    /// Whether the field belongs to the given category.
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// The field classifier.
///
/// Holds the two capability inputs the rules depend on: the negotiated
/// daemon protocol version (float attribute gate) and the geospatial
/// capability flag.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    api_version: u32,
    geo: GeoSupport,
}

impl Classifier {
    /// Create a classifier with explicit capabilities.
    pub fn new(api_version: u32, geo: GeoSupport) -> Self {
        Self { api_version, geo }
    }

    /// Derive the classifier from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let geo = if settings.gis.enabled {
            GeoSupport::Enabled {
                srid: settings.gis.srid,
            }
        } else {
            GeoSupport::Disabled
        };
        Self::new(settings.searchd.api_version, geo)
    }

    /// The geospatial capability this classifier was built with.
    pub fn geo(&self) -> GeoSupport {
        self.geo
    }

    /// Classify one field.
    ///
    /// Returns `None` for ineligible fields. Eligibility rules, in order:
    ///
    /// 1. Float/decimal fields are eligible only when the daemon protocol
    ///    version supports float attributes; otherwise they are excluded
    ///    entirely.
    /// 2. Foreign keys are always eligible.
    /// 3. Integers with a non-empty choice set are eligible.
    /// 4. Any remaining field with no relation is eligible.
    /// 5. Everything else (relation fields that are not simple foreign
    ///    keys) is excluded.
    pub fn classify(&self, field: &FieldDescriptor) -> Option<ClassifiedField> {
        if !self.is_sourcable(field) {
            return None;
        }

        let mut categories = Vec::new();
        if field.has_choices()
            || field.kind == FieldKind::Boolean
            || field.kind == FieldKind::Integer
        {
            categories.push(Category::Group);
        }
        if field.kind.is_date() {
            categories.push(Category::Date);
        }
        if field.kind.is_float() {
            categories.push(Category::Float);
        }
        if field.kind == FieldKind::Point && self.geo.is_enabled() {
            categories.push(Category::Geo);
        }

        Some(ClassifiedField {
            signature: field.signature(),
            categories,
        })
    }

    /// Classify every field of a model, keeping declaration order.
    pub fn classify_model(&self, model: &ModelDescriptor) -> Vec<ClassifiedField> {
        model
            .fields
            .iter()
            .filter_map(|field| self.classify(field))
            .collect()
    }

    fn is_sourcable(&self, field: &FieldDescriptor) -> bool {
        if field.kind.is_float() {
            return self.api_version >= VER_FLOAT_ATTRS;
        }
        if field.kind == FieldKind::ForeignKey {
            return true;
        }
        if field.kind == FieldKind::Integer && field.has_choices() {
            return true;
        }
        !field.has_relation()
    }
}

// ============================================================================
// Tests
// ============================================================================
