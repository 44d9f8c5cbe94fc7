//! Model descriptors.

use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;

/// The normalized view of one data model.
///
/// Carries everything the synthesizers need: the storage table, primary
/// key, ordered field descriptors, the statically-declared index names,
/// and the registered content-type identifier used as the union
/// discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model name (e.g. `Article`).
    pub name: String,

    /// Owning application label; filled in by the registry/manifest loader.
    #[serde(default)]
    pub app: String,

    /// Database table backing the model.
    pub table: String,

    /// Primary-key column.
    #[serde(default = "default_primary_key")]
    pub primary_key: String,

    /// Registered content-type identifier (the union discriminator value).
    pub content_type: u32,

    /// Declared search index names. Empty means the model is not indexed.
    #[serde(default)]
    pub indexes: Vec<String>,

    /// Abstract models are never enumerated for config generation.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Ordered field descriptors.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

fn default_primary_key() -> String {
    "id".to_string()
}

impl ModelDescriptor {
    /// Create a descriptor with the default primary key and no fields.
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        content_type: u32,
    ) -> Self {
        Self {
            name: name.into(),
            app: String::new(),
            table: table.into(),
            primary_key: default_primary_key(),
            content_type,
            indexes: Vec::new(),
            is_abstract: false,
            fields: Vec::new(),
        }
    }

    /// Append a field descriptor.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare a search index name.
    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.indexes.push(index.into());
        self
    }

    /// Override the primary-key column.
    #[must_use]
    pub fn with_primary_key(mut self, pk: impl Into<String>) -> Self {
        self.primary_key = pk.into();
        self
    }

    /// Whether the model declares at least one index.
    pub fn is_indexed(&self) -> bool {
        !self.indexes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn test_model_builder() {
        let model = ModelDescriptor::new("Article", "blog_article", 7)
            .with_primary_key("article_id")
            .with_field(FieldDescriptor::new(FieldKind::Text, "title"))
            .with_index("blog_article");

        assert_eq!(model.primary_key, "article_id");
        assert_eq!(model.fields.len(), 1);
        assert!(model.is_indexed());
        assert!(!model.is_abstract);
    }

    #[test]
    fn test_model_not_indexed_by_default() {
        let model = ModelDescriptor::new("Draft", "blog_draft", 9);
        assert!(!model.is_indexed());
    }

    #[test]
    fn test_model_deserialization() {
        let model: ModelDescriptor = toml::from_str(
            r#"
            name = "Article"
            table = "blog_article"
            content_type = 7
            indexes = ["blog_article"]

            [[fields]]
            kind = "text"
            column = "title"

            [[fields]]
            kind = "foreign_key"
            column = "author_id"
            relation = "auth.User"
            "#,
        )
        .unwrap();

        assert_eq!(model.name, "Article");
        assert_eq!(model.primary_key, "id");
        assert_eq!(model.fields.len(), 2);
        assert_eq!(model.fields[1].kind, FieldKind::ForeignKey);
    }

    #[test]
    fn test_model_abstract_flag() {
        let model: ModelDescriptor = toml::from_str(
            r#"
            name = "Base"
            table = "blog_base"
            content_type = 1
            abstract = true
            "#,
        )
        .unwrap();
        assert!(model.is_abstract);
    }
}
