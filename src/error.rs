//! Error types for field construction, discovery, and registry lookup.

use thiserror::Error;

/// Errors during field or relation construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("expecting a non-empty field name")]
    InvalidField,

    #[error("expecting a non-empty inverse resource type")]
    InvalidRelation,
}

/// Failure while invoking a definition's field-producing methods.
///
/// Discovery is all-or-nothing: the first producer that fails aborts the
/// whole build and surfaces here, with the definition's type name for
/// context and the original cause chained as the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to build fields for {definition}")]
pub struct DiscoveryError {
    definition: String,
    #[source]
    source: FieldError,
}

impl DiscoveryError {
    pub(crate) fn new(definition: impl Into<String>, source: FieldError) -> Self {
        Self {
            definition: definition.into(),
            source,
        }
    }

    /// The simple type name of the definition that failed.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The construction error that aborted discovery.
    pub fn cause(&self) -> &FieldError {
        &self.source
    }
}

/// Raised by [`FieldList::field`](crate::FieldList::field) when a name is in
/// neither the attributes map nor the relations map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {name} does not exist")]
pub struct UnknownField {
    name: String,
}

impl UnknownField {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn field_error_display() {
        assert_eq!(
            FieldError::InvalidField.to_string(),
            "expecting a non-empty field name"
        );
        assert_eq!(
            FieldError::InvalidRelation.to_string(),
            "expecting a non-empty inverse resource type"
        );
    }

    #[test]
    fn discovery_error_names_definition_and_chains_cause() {
        let err = DiscoveryError::new("PostSchema", FieldError::InvalidField);

        assert_eq!(err.to_string(), "unable to build fields for PostSchema");
        assert_eq!(err.definition(), "PostSchema");
        assert_eq!(err.cause(), &FieldError::InvalidField);

        let source = err.source().expect("source should be chained");
        assert_eq!(source.to_string(), "expecting a non-empty field name");
    }

    #[test]
    fn unknown_field_display() {
        let err = UnknownField::new("missing");
        assert_eq!(err.to_string(), "field missing does not exist");
        assert_eq!(err.name(), "missing");
    }
}
