//! Schema assembly - field factories, naming inference, and the build entry
//! point.

use std::sync::OnceLock;

use crate::discover::{FieldDiscovery, SchemaDefinition};
use crate::error::{DiscoveryError, FieldError};
use crate::field::{Attribute, Relation};
use crate::inflect;
use crate::list::FieldList;
use crate::schema::Schema;

/// Field factories bound to the declaring method's name.
///
/// Discovery hands one of these to every field-producing method it invokes.
/// A `None` name falls back to the method's own name; a `None` inverse is
/// guessed from the resolved field name. The two relation factories guess
/// differently on purpose: a singular belongs-to field name refers to a
/// collection resource type and is pluralized, while a has-many field name
/// already denotes the collection and is only dasherized.
#[derive(Debug, Clone, Copy)]
pub struct FieldFactory {
    method: &'static str,
}

impl FieldFactory {
    pub fn new(method: &'static str) -> Self {
        Self { method }
    }

    /// The name of the declaring method.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Create an attribute; `None` infers the method name.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidField`] if an explicit name is empty.
    pub fn attribute<'a>(
        &self,
        name: impl Into<Option<&'a str>>,
    ) -> Result<Attribute, FieldError> {
        Attribute::new(self.name_or_method(name.into()))
    }

    /// Create a to-one relation; `None` inverse guesses the dasherized
    /// plural of the field name (`author` becomes `authors`).
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidField`] or [`FieldError::InvalidRelation`]
    /// if an explicit name or inverse is empty.
    pub fn belongs_to<'a, 'b>(
        &self,
        name: impl Into<Option<&'a str>>,
        inverse: impl Into<Option<&'b str>>,
    ) -> Result<Relation, FieldError> {
        let name = self.name_or_method(name.into());
        let inverse = match inverse.into() {
            Some(explicit) => explicit.to_string(),
            None => inflect::dasherize(&inflect::pluralize(&name)),
        };

        Relation::belongs_to(name, inverse)
    }

    /// Create a to-many relation; `None` inverse guesses the dasherized
    /// field name without pluralizing (`comments` stays `comments`).
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidField`] or [`FieldError::InvalidRelation`]
    /// if an explicit name or inverse is empty.
    pub fn has_many<'a, 'b>(
        &self,
        name: impl Into<Option<&'a str>>,
        inverse: impl Into<Option<&'b str>>,
    ) -> Result<Relation, FieldError> {
        let name = self.name_or_method(name.into());
        let inverse = match inverse.into() {
            Some(explicit) => explicit.to_string(),
            None => inflect::dasherize(&name),
        };

        Relation::has_many(name, inverse)
    }

    fn name_or_method(&self, name: Option<&str>) -> String {
        name.unwrap_or(self.method).to_string()
    }
}

/// Builds a [`Schema`] from a definition.
///
/// The build sequence is one-shot: resolve the resource type, discover and
/// partition the fields, assemble the schema. The resolved resource type is
/// memoized; the `OnceLock` write is atomic, so racing builds on a shared
/// builder at worst recompute the same deterministic value.
#[derive(Debug)]
pub struct SchemaBuilder<T> {
    definition: T,
    resource_type: OnceLock<String>,
}

impl<T: SchemaDefinition> SchemaBuilder<T> {
    pub fn new(definition: T) -> Self {
        Self {
            definition,
            resource_type: OnceLock::new(),
        }
    }

    pub fn definition(&self) -> &T {
        &self.definition
    }

    /// The resource type: the definition's explicit choice, or the
    /// dasherized plural of its type name with any `Schema` suffix
    /// stripped (`PostSchema` resolves to `posts`).
    pub fn resource_type(&self) -> &str {
        self.resource_type.get_or_init(|| {
            match self.definition.resource_type() {
                Some(explicit) => explicit.to_string(),
                None => inflect::resource_type_of::<T>(),
            }
        })
    }

    /// Discover the definition's fields.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if any field-producing method fails.
    pub fn fields(&self) -> Result<FieldList, DiscoveryError> {
        FieldDiscovery::new(&self.definition).fields()
    }

    /// Build the schema. Terminal: a new schema requires a fresh call.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if field discovery fails; no partial
    /// schema is returned.
    pub fn create(&self, base_uri: &str) -> Result<Schema, DiscoveryError> {
        let fields = self.fields()?;

        Ok(Schema::new(self.resource_type(), base_uri, fields))
    }
}
