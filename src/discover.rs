//! Field discovery - classifies and invokes a definition's declared methods.
//!
//! A schema definition enumerates its zero-argument field-producing methods
//! as [`Declarations`]: each entry carries the method's name and its declared
//! return capability. The engine accepts entries declaring the Attribute or
//! Relation capability, invokes them with a [`FieldFactory`] bound to the
//! method's name, and collects the produced fields. Entries with any other
//! return capability are rejected without being invoked.
//!
//! Discovery is mechanical classification plus invocation: it knows nothing
//! about naming conventions (those live in the factory), and it makes no
//! guarantee about enumeration order - the [`FieldList`] re-sorts by name.

use crate::builder::FieldFactory;
use crate::error::{DiscoveryError, FieldError};
use crate::field::{Attribute, Field, Relation};
use crate::inflect;
use crate::list::FieldList;

/// Producer signature for a method declaring the Attribute capability.
pub type AttributeFn<T> = fn(&T, &FieldFactory) -> Result<Attribute, FieldError>;

/// Producer signature for a method declaring the Relation capability.
pub type RelationFn<T> = fn(&T, &FieldFactory) -> Result<Relation, FieldError>;

/// A type whose instances resolve to a schema.
///
/// Definitions write their fields as ordinary inherent methods taking a
/// [`FieldFactory`], then enumerate them in [`declared_methods`]. The
/// registration key is the method's name and doubles as the inferred field
/// name.
///
/// [`declared_methods`]: SchemaDefinition::declared_methods
pub trait SchemaDefinition {
    /// Enumerate this definition's declared methods.
    fn declared_methods(&self) -> Declarations<Self>
    where
        Self: Sized;

    /// Explicit resource type, overriding inference from the type name.
    fn resource_type(&self) -> Option<&str> {
        None
    }
}

/// The declared return capability of a definition method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    Attribute,
    Relation,
    /// Any other return type; such methods are never field producers.
    Other,
}

enum Producer<T> {
    Attribute(AttributeFn<T>),
    Relation(RelationFn<T>),
    Other,
}

// Manual impls: fn pointers are always copyable, a derive would demand
// `T: Copy` for no reason.
impl<T> Clone for Producer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Producer<T> {}

/// One declared method: its name and what it claims to return.
pub struct Declaration<T> {
    name: &'static str,
    produce: Producer<T>,
}

impl<T> Declaration<T> {
    /// The method name; doubles as the registration key for name inference.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared return capability.
    pub fn returns(&self) -> Returns {
        match self.produce {
            Producer::Attribute(_) => Returns::Attribute,
            Producer::Relation(_) => Returns::Relation,
            Producer::Other => Returns::Other,
        }
    }
}

/// The explicit enumeration of a definition's declared methods.
pub struct Declarations<T> {
    methods: Vec<Declaration<T>>,
}

impl<T> Default for Declarations<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Declarations<T> {
    pub fn new() -> Self {
        Self {
            methods: Vec::new(),
        }
    }

    /// Register a method declaring the Attribute capability.
    pub fn attribute(mut self, name: &'static str, produce: AttributeFn<T>) -> Self {
        self.methods.push(Declaration {
            name,
            produce: Producer::Attribute(produce),
        });
        self
    }

    /// Register a method declaring the Relation capability.
    pub fn relation(mut self, name: &'static str, produce: RelationFn<T>) -> Self {
        self.methods.push(Declaration {
            name,
            produce: Producer::Relation(produce),
        });
        self
    }

    /// Register a method with any other return capability.
    ///
    /// Discovery rejects it: the entry is never invoked and produces no
    /// field.
    pub fn method(mut self, name: &'static str) -> Self {
        self.methods.push(Declaration {
            name,
            produce: Producer::Other,
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration<T>> {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// The discovery engine, bound over one definition instance.
pub struct FieldDiscovery<'a, T> {
    definition: &'a T,
    methods: Declarations<T>,
}

impl<'a, T: SchemaDefinition> FieldDiscovery<'a, T> {
    pub fn new(definition: &'a T) -> Self {
        let methods = definition.declared_methods();
        Self {
            definition,
            methods,
        }
    }

    /// A lazy cursor over the field-producing declarations.
    ///
    /// Declarations with the Attribute or Relation capability are invoked in
    /// enumeration order; others are skipped. Callers must not rely on the
    /// yield order.
    pub fn cursor(&self) -> impl Iterator<Item = Result<Field, FieldError>> + '_ {
        self.methods.iter().filter_map(move |decl| {
            let factory = FieldFactory::new(decl.name);
            match decl.produce {
                Producer::Attribute(produce) => {
                    Some(produce(self.definition, &factory).map(Field::Attribute))
                }
                Producer::Relation(produce) => {
                    Some(produce(self.definition, &factory).map(Field::Relation))
                }
                Producer::Other => None,
            }
        })
    }

    /// Drain the cursor into a [`FieldList`].
    ///
    /// # Errors
    ///
    /// The first producer failure aborts the whole discovery with a
    /// [`DiscoveryError`] naming the definition type; no partial list is
    /// returned.
    pub fn fields(&self) -> Result<FieldList, DiscoveryError> {
        let mut fields = Vec::with_capacity(self.methods.len());

        for produced in self.cursor() {
            let field = produced.map_err(|source| {
                let definition = inflect::simple_type_name(std::any::type_name::<T>());
                DiscoveryError::new(definition, source)
            })?;
            fields.push(field);
        }

        Ok(FieldList::new(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ArticleSchema;

    impl ArticleSchema {
        fn title(&self, f: &FieldFactory) -> Result<Attribute, FieldError> {
            f.attribute(None)
        }

        fn author(&self, f: &FieldFactory) -> Result<Relation, FieldError> {
            f.belongs_to(None, "users")
        }
    }

    impl SchemaDefinition for ArticleSchema {
        fn declared_methods(&self) -> Declarations<Self> {
            Declarations::new()
                .attribute("title", Self::title)
                .relation("author", Self::author)
                .method("helper")
        }
    }

    struct BrokenSchema;

    impl SchemaDefinition for BrokenSchema {
        fn declared_methods(&self) -> Declarations<Self> {
            Declarations::new()
                .attribute("good", |_, f| f.attribute(None))
                .attribute("bad", |_, f| f.attribute(""))
        }
    }

    #[test]
    fn declaration_capability_tags() {
        let schema = ArticleSchema;
        let methods = schema.declared_methods();

        let tags: Vec<(&str, Returns)> =
            methods.iter().map(|d| (d.name(), d.returns())).collect();
        assert_eq!(
            tags,
            [
                ("title", Returns::Attribute),
                ("author", Returns::Relation),
                ("helper", Returns::Other),
            ]
        );
    }

    #[test]
    fn cursor_invokes_field_producers_only() {
        let schema = ArticleSchema;
        let discovery = FieldDiscovery::new(&schema);

        let fields: Vec<Field> = discovery.cursor().map(Result::unwrap).collect();
        assert_eq!(fields.len(), 2, "the helper method is rejected");

        let names: Vec<&str> = fields.iter().map(Field::name).collect();
        assert_eq!(names, ["title", "author"]);
    }

    #[test]
    fn fields_collects_into_a_list() {
        let schema = ArticleSchema;
        let list = FieldDiscovery::new(&schema).fields().unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.field("title").unwrap().is_attribute());
        assert_eq!(
            list.field("author").unwrap().as_relation().unwrap().inverse(),
            "users"
        );
    }

    #[test]
    fn producer_failure_aborts_whole_discovery() {
        let schema = BrokenSchema;
        let err = FieldDiscovery::new(&schema).fields().unwrap_err();

        assert_eq!(err.definition(), "BrokenSchema");
        assert_eq!(err.cause(), &FieldError::InvalidField);
        assert_eq!(
            err.to_string(),
            "unable to build fields for BrokenSchema"
        );
    }

    #[test]
    fn empty_declarations_resolve_to_an_empty_list() {
        struct EmptySchema;

        impl SchemaDefinition for EmptySchema {
            fn declared_methods(&self) -> Declarations<Self> {
                Declarations::new()
            }
        }

        let list = FieldDiscovery::new(&EmptySchema).fields().unwrap();
        assert!(list.is_empty());
    }
}
