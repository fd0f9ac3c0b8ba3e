//! Error types for the Sigrid system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::node_id::NodeId;
use crate::types::NodeKind;

/// Result alias for Sigrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Sigrid operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a node kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: NodeKind, actual: NodeKind) -> Self {
        Self::new(ErrorKind::NodeKindMismatch { expected, actual })
    }

    /// Creates a node not found error.
    #[must_use]
    pub fn node_not_found(id: NodeId) -> Self {
        Self::new(ErrorKind::NodeNotFound(id))
    }

    /// Creates a stale node reference error.
    #[must_use]
    pub fn stale_node(id: NodeId) -> Self {
        Self::new(ErrorKind::StaleNode(id))
    }

    /// Creates an ontology load error.
    #[must_use]
    pub fn ontology_load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OntologyLoad {
            source_name: source_name.into(),
            message: message.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A node was attached or copied under a parent of an incompatible kind.
    #[error("node kind mismatch: expected a child assignable to {expected}, got {actual}")]
    NodeKindMismatch {
        /// The kind the parent accepts.
        expected: NodeKind,
        /// The kind that was supplied.
        actual: NodeKind,
    },

    /// Node was not found in the tree's slot table.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Node reference is stale (generation mismatch after slot reuse).
    #[error("stale node reference: {0:?}")]
    StaleNode(NodeId),

    /// A verb-class ontology or synonym lexicon failed to parse or load.
    ///
    /// This is fatal to initialization; no partial ontology is accepted.
    #[error("failed to load ontology source '{source_name}': {message}")]
    OntologyLoad {
        /// Name of the data source (file path or reader label).
        source_name: String,
        /// Description of the load failure.
        message: String,
    },

    /// Catalog serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An IO failure during catalog persistence.
    #[error("io error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The data source or artifact involved.
    pub source: Option<String>,
    /// The identifier of the element involved.
    pub identifier: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the element identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(identifier) = &self.identifier {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at element '{identifier}'")?;
        }
        Ok(())
    }
}
