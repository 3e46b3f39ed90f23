//! The resolved field registry - immutable, name-indexed, ordered.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::UnknownField;
use crate::field::{Attribute, Field, Relation};

/// An immutable registry of a resource's fields.
///
/// Construction partitions the input into an attributes map and a relations
/// map, both keyed and ordered by field name (ascending ordinal order).
/// Iteration yields attributes fully before relations. Input order is
/// irrelevant: discovery order is unstable by contract, and the maps re-sort.
///
/// Duplicate names follow last-write-wins, across kinds as well: a name
/// never exists in both maps at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldList {
    attributes: BTreeMap<String, Attribute>,
    relations: BTreeMap<String, Relation>,
}

impl FieldList {
    /// Build the registry from an unordered sequence of fields.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut attributes = BTreeMap::new();
        let mut relations = BTreeMap::new();

        for field in fields {
            match field {
                Field::Attribute(attr) => {
                    relations.remove(attr.name());
                    attributes.insert(attr.name().to_string(), attr);
                }
                Field::Relation(rel) => {
                    attributes.remove(rel.name());
                    relations.insert(rel.name().to_string(), rel);
                }
            }
        }

        Self {
            attributes,
            relations,
        }
    }

    /// Is there a field with this name?
    pub fn exists(&self, name: &str) -> bool {
        self.attributes.contains_key(name) || self.relations.contains_key(name)
    }

    /// Get a field by name, consulting attributes then relations.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] if the name is in neither map.
    pub fn field(&self, name: &str) -> Result<FieldRef<'_>, UnknownField> {
        if let Some(attr) = self.attributes.get(name) {
            return Ok(FieldRef::Attribute(attr));
        }

        if let Some(rel) = self.relations.get(name) {
            return Ok(FieldRef::Relation(rel));
        }

        Err(UnknownField::new(name))
    }

    /// Iterate the attributes in ascending name order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Iterate the relations in ascending name order.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }

    /// Iterate every field: attributes first, then relations.
    pub fn iter(&self) -> impl Iterator<Item = FieldRef<'_>> {
        self.attributes
            .values()
            .map(FieldRef::Attribute)
            .chain(self.relations.values().map(FieldRef::Relation))
    }

    /// Total number of fields.
    pub fn len(&self) -> usize {
        self.attributes.len() + self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.relations.is_empty()
    }
}

/// A borrowed view of a field in a [`FieldList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Attribute(&'a Attribute),
    Relation(&'a Relation),
}

impl<'a> FieldRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            FieldRef::Attribute(attr) => attr.name(),
            FieldRef::Relation(rel) => rel.name(),
        }
    }

    pub fn is_attribute(&self) -> bool {
        matches!(self, FieldRef::Attribute(_))
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, FieldRef::Relation(_))
    }

    pub fn as_attribute(&self) -> Option<&'a Attribute> {
        match self {
            FieldRef::Attribute(attr) => Some(attr),
            FieldRef::Relation(_) => None,
        }
    }

    pub fn as_relation(&self) -> Option<&'a Relation> {
        match self {
            FieldRef::Attribute(_) => None,
            FieldRef::Relation(rel) => Some(rel),
        }
    }

    pub fn is_fillable(&self) -> bool {
        match self {
            FieldRef::Attribute(attr) => attr.is_fillable(),
            FieldRef::Relation(rel) => rel.is_fillable(),
        }
    }

    pub fn is_guarded(&self) -> bool {
        !self.is_fillable()
    }

    pub fn is_read_only(&self) -> bool {
        !self.is_fillable()
    }

    pub fn is_sparse_field(&self) -> bool {
        match self {
            FieldRef::Attribute(attr) => attr.is_sparse_field(),
            FieldRef::Relation(rel) => rel.is_sparse_field(),
        }
    }

    pub fn is_sortable(&self) -> bool {
        match self {
            FieldRef::Attribute(attr) => attr.is_sortable(),
            FieldRef::Relation(rel) => rel.is_sortable(),
        }
    }

    pub fn is_filter(&self) -> bool {
        match self {
            FieldRef::Attribute(attr) => attr.is_filter(),
            FieldRef::Relation(rel) => rel.is_filter(),
        }
    }
}
