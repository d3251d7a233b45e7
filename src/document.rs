//! Document and field types for indexing.
//!
//! A [`Document`] is a mapping from field name to [`Field`]. Each field
//! carries its raw string value plus indexing options: its
//! [`FieldKind`] (how the value is analyzed) and whether it is indexed
//! and/or stored. Stored-ness is independent of indexed-ness; a field
//! may be either, both, or neither.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// How a field's value is analyzed at index and query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Prose text: lowercased and split on non-alphanumeric boundaries.
    Text,
    /// Exact value: the whole input is one term, case preserved.
    Keyword,
}

/// A field value combined with its indexing options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The raw field value.
    pub value: String,

    /// How the value is analyzed.
    pub kind: FieldKind,

    /// Whether the field contributes postings to the inverted index.
    pub indexed: bool,

    /// Whether the raw value is retained for retrieval.
    pub stored: bool,
}

impl Field {
    /// Create an indexed, stored TEXT field.
    pub fn text<S: Into<String>>(value: S) -> Self {
        Field {
            value: value.into(),
            kind: FieldKind::Text,
            indexed: true,
            stored: true,
        }
    }

    /// Create an indexed, stored KEYWORD field.
    pub fn keyword<S: Into<String>>(value: S) -> Self {
        Field {
            value: value.into(),
            kind: FieldKind::Keyword,
            indexed: true,
            stored: true,
        }
    }

    /// Set whether the field is indexed.
    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }

    /// Set whether the field is stored.
    pub fn stored(mut self, stored: bool) -> Self {
        self.stored = stored;
        self
    }
}

/// A document to be indexed: a mapping from field name to field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: AHashMap<String, Field>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Document {
            fields: AHashMap::new(),
        }
    }

    /// Create a builder for constructing documents fluently.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Add or replace a field.
    pub fn add_field<S: Into<String>>(&mut self, name: S, field: Field) {
        self.fields.insert(name.into(), field);
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Iterate over all fields.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Field)> {
        self.fields.iter()
    }

    /// Number of fields in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new builder with an empty document.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::new(),
        }
    }

    /// Add an indexed, stored TEXT field.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document.add_field(name, Field::text(value));
        self
    }

    /// Add an indexed, stored KEYWORD field.
    pub fn add_keyword<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document.add_field(name, Field::keyword(value));
        self
    }

    /// Add a field with explicit options.
    pub fn add_field<S: Into<String>>(mut self, name: S, field: Field) -> Self {
        self.document.add_field(name, field);
        self
    }

    /// Finish building the document.
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_defaults() {
        let field = Field::text("hello");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(field.indexed);
        assert!(field.stored);

        let field = Field::keyword("ABC-1").stored(false);
        assert_eq!(field.kind, FieldKind::Keyword);
        assert!(field.indexed);
        assert!(!field.stored);
    }

    #[test]
    fn test_document_builder() {
        let doc = Document::builder()
            .add_text("title", "Rust Programming")
            .add_keyword("id", "doc-42")
            .add_field("summary", Field::text("stored only").indexed(false))
            .build();

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.get_field("title").map(|f| f.value.as_str()), Some("Rust Programming"));
        assert_eq!(doc.get_field("id").map(|f| f.kind), Some(FieldKind::Keyword));
        assert_eq!(doc.get_field("summary").map(|f| f.indexed), Some(false));
        assert!(doc.get_field("missing").is_none());
    }

    #[test]
    fn test_add_field_replaces() {
        let mut doc = Document::new();
        doc.add_field("title", Field::text("first"));
        doc.add_field("title", Field::text("second"));
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_field("title").map(|f| f.value.as_str()), Some("second"));
    }
}
