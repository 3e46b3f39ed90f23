//! The resolved schema - resource type, base URI, and field registry.

use serde_json::{json, Value};

use crate::list::FieldList;

/// An immutable, resolved resource schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    resource_type: String,
    base_uri: String,
    fields: FieldList,
}

impl Schema {
    /// Assemble a schema. Trailing slashes are stripped from `base_uri`.
    pub fn new(resource_type: impl Into<String>, base_uri: &str, fields: FieldList) -> Self {
        Self {
            resource_type: resource_type.into(),
            base_uri: base_uri.trim_end_matches('/').to_string(),
            fields,
        }
    }

    /// The resource type.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// The resource-specific base URI: the root URI joined with the
    /// resource type.
    pub fn base_uri(&self) -> String {
        format!("{}/{}", self.base_uri, self.resource_type)
    }

    /// The resolved field registry.
    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    /// A JSON view of the resolved schema, for consumers that introspect
    /// the contract rather than link against it.
    pub fn describe(&self) -> Value {
        json!({
            "type": self.resource_type,
            "baseUri": self.base_uri(),
            "fields": self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Attribute, Field, Relation};

    fn fields() -> FieldList {
        FieldList::new([
            Field::from(Attribute::new("title").unwrap()),
            Field::from(Relation::belongs_to("author", "users").unwrap()),
        ])
    }

    #[test]
    fn base_uri_joins_resource_type() {
        let schema = Schema::new("posts", "/api/v1", fields());
        assert_eq!(schema.base_uri(), "/api/v1/posts");
    }

    #[test]
    fn base_uri_strips_trailing_slashes() {
        let schema = Schema::new("posts", "/api/v1/", fields());
        assert_eq!(schema.base_uri(), "/api/v1/posts");

        let schema = Schema::new("posts", "/api/v1//", fields());
        assert_eq!(schema.base_uri(), "/api/v1/posts");
    }

    #[test]
    fn accessors() {
        let schema = Schema::new("posts", "/api/v1", fields());

        assert_eq!(schema.resource_type(), "posts");
        assert_eq!(schema.fields().len(), 2);
    }

    #[test]
    fn describe_emits_json_view() {
        let schema = Schema::new("posts", "/api/v1", fields());
        let doc = schema.describe();

        assert_eq!(doc["type"], json!("posts"));
        assert_eq!(doc["baseUri"], json!("/api/v1/posts"));
        assert_eq!(doc["fields"]["attributes"]["title"]["sparseField"], json!(true));
        assert_eq!(
            doc["fields"]["relations"]["author"]["inverse"],
            json!("users")
        );
        assert_eq!(doc["fields"]["relations"]["author"]["kind"], json!("toOne"));
    }
}
