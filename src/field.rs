//! Field model - attributes, relations, and their behavioral flags.
//!
//! Fields are built once by the resolution pipeline and are read-only after
//! the schema is assembled. The fluent toggles consume and return the field
//! by value, so construction reads as a single chain:
//!
//! ```
//! use jsonapi_schema::Attribute;
//!
//! let title = Attribute::new("title")?.sortable(true).filter(true);
//! assert!(title.is_sortable());
//! # Ok::<(), jsonapi_schema::FieldError>(())
//! ```

use serde::Serialize;

use crate::error::FieldError;

/// A scalar (non-relational) resource field.
///
/// Defaults: fillable (not read-only), eligible for sparse fieldsets,
/// not sortable, not a filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    name: String,
    fillable: bool,
    filter: bool,
    sparse_field: bool,
    sortable: bool,
}

impl Attribute {
    /// Create an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidField`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::InvalidField);
        }

        Ok(Self {
            name,
            fillable: true,
            filter: false,
            sparse_field: true,
            sortable: false,
        })
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mark the field as mass-assignable.
    pub fn fillable(mut self, fillable: bool) -> Self {
        self.fillable = fillable;
        self
    }

    /// Mark the field as not mass-assignable.
    pub fn guarded(self, guarded: bool) -> Self {
        self.fillable(!guarded)
    }

    /// Mark the field as read-only (not mass-assignable).
    pub fn read_only(self, read_only: bool) -> Self {
        self.fillable(!read_only)
    }

    /// Mark the field as not read-only.
    pub fn not_read_only(self, not_read_only: bool) -> Self {
        self.read_only(!not_read_only)
    }

    /// Mark the field as an allowed sparse fieldset member.
    pub fn sparse_field(mut self, sparse: bool) -> Self {
        self.sparse_field = sparse;
        self
    }

    /// Mark the field as not allowed in sparse fieldsets.
    pub fn not_sparse_field(self, not_sparse: bool) -> Self {
        self.sparse_field(!not_sparse)
    }

    /// Mark the field as a sort key.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Mark the field as not sortable.
    pub fn not_sortable(self, not_sortable: bool) -> Self {
        self.sortable(!not_sortable)
    }

    /// Mark the field as a filter key.
    pub fn filter(mut self, filter: bool) -> Self {
        self.filter = filter;
        self
    }

    /// Mark the field as not allowed in filters.
    pub fn not_filter(self, not_filter: bool) -> Self {
        self.filter(!not_filter)
    }

    pub fn is_fillable(&self) -> bool {
        self.fillable
    }

    pub fn is_guarded(&self) -> bool {
        !self.fillable
    }

    pub fn is_read_only(&self) -> bool {
        !self.fillable
    }

    pub fn is_sparse_field(&self) -> bool {
        self.sparse_field
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filter(&self) -> bool {
        self.filter
    }
}

/// Whether a relation points at a single resource or a collection.
///
/// Derived from the constructor, not stored as independent booleans, so
/// `to_one()` and `to_many()` are always mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    ToOne,
    ToMany,
}

/// A field referencing another resource type.
///
/// Defaults common to both kinds: guarded, eligible for sparse fieldsets,
/// not sortable, not a filter key, not a default include path, self and
/// related links on. A to-one (belongs-to) relation additionally defaults
/// to being an allowed include path; a to-many (has-many) does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    name: String,
    inverse: String,
    kind: RelationKind,
    fillable: bool,
    filter: bool,
    sparse_field: bool,
    sortable: bool,
    include_path: bool,
    default_include_path: bool,
    self_link: bool,
    related_link: bool,
}

impl Relation {
    /// Create a to-one relation.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidRelation`] if `inverse` is empty, or
    /// [`FieldError::InvalidField`] if `name` is empty.
    pub fn belongs_to(
        name: impl Into<String>,
        inverse: impl Into<String>,
    ) -> Result<Self, FieldError> {
        Self::new(name, inverse, RelationKind::ToOne, true)
    }

    /// Create a to-many relation.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidRelation`] if `inverse` is empty, or
    /// [`FieldError::InvalidField`] if `name` is empty.
    pub fn has_many(
        name: impl Into<String>,
        inverse: impl Into<String>,
    ) -> Result<Self, FieldError> {
        Self::new(name, inverse, RelationKind::ToMany, false)
    }

    fn new(
        name: impl Into<String>,
        inverse: impl Into<String>,
        kind: RelationKind,
        include_path: bool,
    ) -> Result<Self, FieldError> {
        // The inverse is checked first, matching construction order in the
        // original contract: an empty inverse wins over an empty name.
        let inverse = inverse.into();
        if inverse.is_empty() {
            return Err(FieldError::InvalidRelation);
        }

        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::InvalidField);
        }

        Ok(Self {
            name,
            inverse,
            kind,
            fillable: false,
            filter: false,
            sparse_field: true,
            sortable: false,
            include_path,
            default_include_path: false,
            self_link: true,
            related_link: true,
        })
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The inverse resource type.
    pub fn inverse(&self) -> &str {
        &self.inverse
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Does the relation reference a single resource?
    pub fn to_one(&self) -> bool {
        self.kind == RelationKind::ToOne
    }

    /// Does the relation reference a collection?
    pub fn to_many(&self) -> bool {
        self.kind == RelationKind::ToMany
    }

    /// Mark the relation as mass-assignable.
    pub fn fillable(mut self, fillable: bool) -> Self {
        self.fillable = fillable;
        self
    }

    /// Mark the relation as not mass-assignable.
    pub fn guarded(self, guarded: bool) -> Self {
        self.fillable(!guarded)
    }

    /// Mark the relation as read-only (not mass-assignable).
    pub fn read_only(self, read_only: bool) -> Self {
        self.fillable(!read_only)
    }

    /// Mark the relation as not read-only.
    pub fn not_read_only(self, not_read_only: bool) -> Self {
        self.read_only(!not_read_only)
    }

    /// Mark the relation as an allowed sparse fieldset member.
    pub fn sparse_field(mut self, sparse: bool) -> Self {
        self.sparse_field = sparse;
        self
    }

    /// Mark the relation as not allowed in sparse fieldsets.
    pub fn not_sparse_field(self, not_sparse: bool) -> Self {
        self.sparse_field(!not_sparse)
    }

    /// Mark the relation as a sort key.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Mark the relation as not sortable.
    pub fn not_sortable(self, not_sortable: bool) -> Self {
        self.sortable(!not_sortable)
    }

    /// Mark the relation as a filter key.
    pub fn filter(mut self, filter: bool) -> Self {
        self.filter = filter;
        self
    }

    /// Mark the relation as not allowed in filters.
    pub fn not_filter(self, not_filter: bool) -> Self {
        self.filter(!not_filter)
    }

    /// Mark the relation as an allowed include path.
    pub fn include_path(mut self, include: bool) -> Self {
        self.include_path = include;
        self
    }

    /// Mark the relation as a disallowed include path.
    pub fn not_include_path(self, do_not_include: bool) -> Self {
        self.include_path(!do_not_include)
    }

    /// Mark the relation as included by default.
    ///
    /// Setting this on forces the relation to be an allowed include path.
    /// Setting it off leaves the include path flag untouched.
    pub fn default_include_path(mut self, default: bool) -> Self {
        if default {
            self.include_path = true;
        }

        self.default_include_path = default;
        self
    }

    /// Mark the relation as having a self link.
    pub fn with_self(mut self, self_link: bool) -> Self {
        self.self_link = self_link;
        self
    }

    /// Mark the relation as not having a self link.
    pub fn without_self(self, without_self: bool) -> Self {
        self.with_self(!without_self)
    }

    /// Mark the relation as having a related link.
    pub fn with_related(mut self, related: bool) -> Self {
        self.related_link = related;
        self
    }

    /// Mark the relation as not having a related link.
    pub fn without_related(self, without_related: bool) -> Self {
        self.with_related(!without_related)
    }

    pub fn is_fillable(&self) -> bool {
        self.fillable
    }

    pub fn is_guarded(&self) -> bool {
        !self.fillable
    }

    pub fn is_read_only(&self) -> bool {
        !self.fillable
    }

    pub fn is_sparse_field(&self) -> bool {
        self.sparse_field
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filter(&self) -> bool {
        self.filter
    }

    pub fn is_include_path(&self) -> bool {
        self.include_path
    }

    pub fn is_default_include_path(&self) -> bool {
        self.default_include_path
    }

    pub fn has_self_link(&self) -> bool {
        self.self_link
    }

    pub fn has_related_link(&self) -> bool {
        self.related_link
    }
}

/// An owned field value - either an attribute or a relation.
///
/// This is what discovery yields and what [`FieldList::new`] consumes;
/// classification is a closed match on the two variants.
///
/// [`FieldList::new`]: crate::FieldList::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Attribute(Attribute),
    Relation(Relation),
}

impl Field {
    /// The field name.
    pub fn name(&self) -> &str {
        match self {
            Field::Attribute(attr) => attr.name(),
            Field::Relation(rel) => rel.name(),
        }
    }

    pub fn is_attribute(&self) -> bool {
        matches!(self, Field::Attribute(_))
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Field::Relation(_))
    }

    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Field::Attribute(attr) => Some(attr),
            Field::Relation(_) => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Field::Attribute(_) => None,
            Field::Relation(rel) => Some(rel),
        }
    }

    pub fn is_fillable(&self) -> bool {
        match self {
            Field::Attribute(attr) => attr.is_fillable(),
            Field::Relation(rel) => rel.is_fillable(),
        }
    }

    pub fn is_sparse_field(&self) -> bool {
        match self {
            Field::Attribute(attr) => attr.is_sparse_field(),
            Field::Relation(rel) => rel.is_sparse_field(),
        }
    }
}

impl From<Attribute> for Field {
    fn from(attr: Attribute) -> Self {
        Field::Attribute(attr)
    }
}

impl From<Relation> for Field {
    fn from(rel: Relation) -> Self {
        Field::Relation(rel)
    }
}
