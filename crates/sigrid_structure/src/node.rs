//! Signature-tree nodes: a shared core with a tagged variant payload.

use sigrid_foundation::{ANONYMOUS_IDENTIFIER, NodeId, NodeKind, Numerus};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::documentation::Documentation;

/// The purpose of a parameter list within an operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListDirection {
    /// Input parameters.
    Input,
    /// Output parameters.
    Output,
    /// A thrown or returned fault message.
    Fault,
}

/// Variant-specific payload of a signature node.
///
/// Child collections hold node ids into the owning [`crate::SignatureTree`];
/// the shared core fields live on [`SignatureNode`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodePayload {
    /// A whole source file.
    Artifact {
        /// Interfaces declared in the artifact, in declaration order.
        interfaces: Vec<NodeId>,
    },
    /// A service, interface, or class.
    Interface {
        /// Operations of the interface, in declaration order.
        operations: Vec<NodeId>,
        /// Nested interfaces/classes.
        inner_interfaces: Vec<NodeId>,
    },
    /// An operation or method.
    Operation {
        /// Input, output, and fault parameter lists.
        parameter_lists: Vec<NodeId>,
    },
    /// An input, output, or fault parameter list.
    ParameterList {
        /// What the list holds.
        direction: ListDirection,
        /// The parameters, in declaration order.
        parameters: Vec<NodeId>,
    },
    /// An individual, possibly nested, parameter.
    Parameter {
        /// Plain data type name (e.g. `Customer`).
        data_type: String,
        /// Fully qualified data type name.
        qualified_data_type: String,
        /// Members of a complex type.
        children: Vec<NodeId>,
    },
}

impl NodePayload {
    /// Returns the kind discriminant of this payload.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Artifact { .. } => NodeKind::Artifact,
            Self::Interface { .. } => NodeKind::Interface,
            Self::Operation { .. } => NodeKind::Operation,
            Self::ParameterList { .. } => NodeKind::ParameterList,
            Self::Parameter { .. } => NodeKind::Parameter,
        }
    }

    /// Returns all structural children in order.
    #[must_use]
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Self::Artifact { interfaces } => interfaces.clone(),
            Self::Interface {
                operations,
                inner_interfaces,
            } => operations
                .iter()
                .chain(inner_interfaces.iter())
                .copied()
                .collect(),
            Self::Operation { parameter_lists } => parameter_lists.clone(),
            Self::ParameterList { parameters, .. } => parameters.clone(),
            Self::Parameter { children, .. } => children.clone(),
        }
    }

    /// Returns a copy of this payload with all scalar fields duplicated and
    /// all child collections emptied.
    ///
    /// The copy engine rebuilds the child collections while recursing so
    /// that copied children are re-parented to the copied node.
    #[must_use]
    pub fn scalar_copy(&self) -> Self {
        match self {
            Self::Artifact { .. } => Self::Artifact {
                interfaces: Vec::new(),
            },
            Self::Interface { .. } => Self::Interface {
                operations: Vec::new(),
                inner_interfaces: Vec::new(),
            },
            Self::Operation { .. } => Self::Operation {
                parameter_lists: Vec::new(),
            },
            Self::ParameterList { direction, .. } => Self::ParameterList {
                direction: *direction,
                parameters: Vec::new(),
            },
            Self::Parameter {
                data_type,
                qualified_data_type,
                ..
            } => Self::Parameter {
                data_type: data_type.clone(),
                qualified_data_type: qualified_data_type.clone(),
                children: Vec::new(),
            },
        }
    }

    /// Returns true if payloads agree on all scalar (non-child) fields.
    #[must_use]
    pub fn scalar_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Artifact { .. }, Self::Artifact { .. })
            | (Self::Interface { .. }, Self::Interface { .. })
            | (Self::Operation { .. }, Self::Operation { .. }) => true,
            (
                Self::ParameterList { direction: a, .. },
                Self::ParameterList { direction: b, .. },
            ) => a == b,
            (
                Self::Parameter {
                    data_type: dt_a,
                    qualified_data_type: qdt_a,
                    ..
                },
                Self::Parameter {
                    data_type: dt_b,
                    qualified_data_type: qdt_b,
                    ..
                },
            ) => dt_a == dt_b && qdt_a == qdt_b,
            _ => false,
        }
    }
}

/// Returns true if a parent of kind `parent` may hold a child of kind `child`.
///
/// This is the fixed attachment-compatibility table of the model.
#[must_use]
pub(crate) fn accepts_child(parent: NodeKind, child: NodeKind) -> bool {
    matches!(
        (parent, child),
        (NodeKind::Artifact, NodeKind::Interface)
            | (NodeKind::Interface, NodeKind::Interface | NodeKind::Operation)
            | (NodeKind::Operation, NodeKind::ParameterList)
            | (NodeKind::ParameterList | NodeKind::Parameter, NodeKind::Parameter)
    )
}

/// A node in a signature tree.
///
/// The core fields are shared by every kind; the format-specific shape lives
/// in [`NodePayload`]. The parent reference is set when the node is attached
/// and never mutated afterwards.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignatureNode {
    /// Identifier of the element; empty if undefined in the parsed structure.
    pub identifier: String,
    /// Fully qualified identifier.
    pub qualified_identifier: String,
    /// Category tag describing the node's syntactic role (e.g. "Operation", "Part").
    pub category: String,
    /// Grammatical number of the identifier.
    pub numerus: Numerus,
    /// False if documentation makes no sense on this node (e.g. file level).
    pub documentation_allowed: bool,
    /// Ordered documentation parts.
    documentations: Vec<Documentation>,
    /// The parent node; `None` for the tree root.
    parent: Option<NodeId>,
    /// Variant-specific payload.
    payload: NodePayload,
}

impl SignatureNode {
    /// Creates a node with the given category and payload.
    #[must_use]
    pub fn new(category: impl Into<String>, payload: NodePayload) -> Self {
        Self {
            identifier: String::new(),
            qualified_identifier: String::new(),
            category: category.into(),
            numerus: Numerus::Singular,
            documentation_allowed: true,
            documentations: Vec::new(),
            parent: None,
            payload,
        }
    }

    /// Creates an artifact node. Documentation is not allowed on file level.
    #[must_use]
    pub fn artifact(category: impl Into<String>) -> Self {
        let mut node = Self::new(
            category,
            NodePayload::Artifact {
                interfaces: Vec::new(),
            },
        );
        node.documentation_allowed = false;
        node
    }

    /// Creates an interface node.
    #[must_use]
    pub fn interface(category: impl Into<String>) -> Self {
        Self::new(
            category,
            NodePayload::Interface {
                operations: Vec::new(),
                inner_interfaces: Vec::new(),
            },
        )
    }

    /// Creates an operation node.
    #[must_use]
    pub fn operation(category: impl Into<String>) -> Self {
        Self::new(
            category,
            NodePayload::Operation {
                parameter_lists: Vec::new(),
            },
        )
    }

    /// Creates a parameter-list node.
    #[must_use]
    pub fn parameter_list(category: impl Into<String>, direction: ListDirection) -> Self {
        Self::new(
            category,
            NodePayload::ParameterList {
                direction,
                parameters: Vec::new(),
            },
        )
    }

    /// Creates a parameter node.
    #[must_use]
    pub fn parameter(
        category: impl Into<String>,
        data_type: impl Into<String>,
        qualified_data_type: impl Into<String>,
    ) -> Self {
        Self::new(
            category,
            NodePayload::Parameter {
                data_type: data_type.into(),
                qualified_data_type: qualified_data_type.into(),
                children: Vec::new(),
            },
        )
    }

    /// Sets the identifier (and the qualified identifier when unset).
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        if self.qualified_identifier.is_empty() {
            self.qualified_identifier = self.identifier.clone();
        }
        self
    }

    /// Sets the qualified identifier.
    #[must_use]
    pub fn with_qualified_identifier(mut self, qualified: impl Into<String>) -> Self {
        self.qualified_identifier = qualified.into();
        self
    }

    /// Sets the numerus.
    #[must_use]
    pub fn with_numerus(mut self, numerus: Numerus) -> Self {
        self.numerus = numerus;
        self
    }

    /// Returns the kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &NodePayload {
        &self.payload
    }

    /// Returns the payload mutably. Used by the owning tree.
    pub(crate) fn payload_mut(&mut self) -> &mut NodePayload {
        &mut self.payload
    }

    /// Returns the parent node id, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Returns the documentation parts in order.
    #[must_use]
    pub fn documentations(&self) -> &[Documentation] {
        &self.documentations
    }

    /// Adds a documentation part.
    pub fn add_documentation(&mut self, documentation: Documentation) {
        self.documentations.push(documentation);
    }

    /// Replaces all documentation parts.
    pub fn set_documentations(&mut self, documentations: Vec<Documentation>) {
        self.documentations = documentations;
    }

    /// Builds a display name like `findCustomers [Operation]`, appending the
    /// data type for parameters: `customer (Type: Customer) [Part]`.
    ///
    /// Elements the parser left unnamed display as `anonymous`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut name = if self.identifier.is_empty() {
            ANONYMOUS_IDENTIFIER.to_string()
        } else {
            self.identifier.clone()
        };
        if let NodePayload::Parameter { data_type, .. } = &self.payload {
            if !data_type.is_empty() {
                name.push_str(&format!(" (Type: {data_type})"));
            }
        }
        if !self.category.is_empty() {
            name.push_str(&format!(" [{}]", self.category));
        }
        name
    }

    /// Returns true if all core fields agree, ignoring parent identity.
    #[must_use]
    pub(crate) fn core_eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.qualified_identifier == other.qualified_identifier
            && self.category == other.category
            && self.numerus == other.numerus
            && self.documentation_allowed == other.documentation_allowed
            && self.documentations == other.documentations
    }
}
