//! Resource Schema Resolver
//!
//! Resolution of declaratively-written resource schema definitions into an
//! immutable, queryable field registry for a JSON:API-style contract layer.
//!
//! A definition writes each field as an ordinary zero-argument method (plus
//! the [`FieldFactory`] handle) and enumerates those methods explicitly; the
//! discovery engine classifies each declaration by its declared return
//! capability, invokes the field producers, and partitions the results into
//! a sorted, name-indexed [`FieldList`]. Unspecified names and inverse
//! resource types are inferred from naming conventions.
//!
//! # Example
//!
//! ```
//! use jsonapi_schema::{
//!     Attribute, Declarations, FieldError, FieldFactory, Relation, SchemaBuilder,
//!     SchemaDefinition,
//! };
//!
//! struct PostSchema;
//!
//! impl PostSchema {
//!     fn title(&self, f: &FieldFactory) -> Result<Attribute, FieldError> {
//!         Ok(f.attribute(None)?.sortable(true))
//!     }
//!
//!     fn author(&self, f: &FieldFactory) -> Result<Relation, FieldError> {
//!         f.belongs_to(None, "users")
//!     }
//!
//!     fn comments(&self, f: &FieldFactory) -> Result<Relation, FieldError> {
//!         f.has_many(None, None)
//!     }
//! }
//!
//! impl SchemaDefinition for PostSchema {
//!     fn declared_methods(&self) -> Declarations<Self> {
//!         Declarations::new()
//!             .attribute("title", Self::title)
//!             .relation("author", Self::author)
//!             .relation("comments", Self::comments)
//!     }
//! }
//!
//! let schema = SchemaBuilder::new(PostSchema).create("/api/v1")?;
//!
//! // The resource type is inferred from the definition's type name.
//! assert_eq!(schema.resource_type(), "posts");
//! assert_eq!(schema.base_uri(), "/api/v1/posts");
//!
//! // The registry is ordered and name-indexed.
//! assert!(schema.fields().exists("title"));
//! let author = schema.fields().field("author")?;
//! assert_eq!(author.as_relation().unwrap().inverse(), "users");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Naming Conventions
//!
//! | Inference | Rule | Example |
//! |-----------|------|---------|
//! | Resource type | type name minus `Schema`, pluralized, dasherized | `PostSchema` → `posts` |
//! | Field name | the declaring method's name | `title()` → `title` |
//! | Belongs-to inverse | field name pluralized, dasherized | `author` → `authors` |
//! | Has-many inverse | field name dasherized, not pluralized | `comments` → `comments` |

mod builder;
mod discover;
mod error;
mod field;
mod inflect;
mod list;
mod schema;

pub use builder::{FieldFactory, SchemaBuilder};
pub use discover::{
    AttributeFn, Declaration, Declarations, FieldDiscovery, RelationFn, Returns, SchemaDefinition,
};
pub use error::{DiscoveryError, FieldError, UnknownField};
pub use field::{Attribute, Field, Relation, RelationKind};
pub use list::{FieldList, FieldRef};
pub use schema::Schema;
