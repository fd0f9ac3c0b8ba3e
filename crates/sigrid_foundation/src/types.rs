//! Shared enums and constants for the signature model.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier used for elements whose name is undefined in the parsed structure.
pub const ANONYMOUS_IDENTIFIER: &str = "anonymous";

/// Grammatical number of a signature element's identifier.
///
/// Used when rendering an identifier as part of a sentence-like reading
/// of the signature.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Numerus {
    /// Singular identifier (e.g. `customer`).
    #[default]
    Singular,
    /// Plural identifier (e.g. `customers`).
    Plural,
}

impl fmt::Display for Numerus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singular => write!(f, "singular"),
            Self::Plural => write!(f, "plural"),
        }
    }
}

/// The structural levels a thematic role may be documented on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoleScope {
    /// The role applies to interface-level elements only.
    InterfaceLevel,
    /// The role applies to operation-level elements only.
    OperationLevel,
    /// The role applies on both levels.
    #[default]
    Both,
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InterfaceLevel => write!(f, "interface-level"),
            Self::OperationLevel => write!(f, "operation-level"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// The concrete kind of a signature-tree node.
///
/// Attachment compatibility between kinds is a fixed table enforced by the
/// tree; violations surface as [`crate::ErrorKind::NodeKindMismatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A whole source file (the tree root).
    Artifact,
    /// A service, interface, or class.
    Interface,
    /// An operation or method.
    Operation,
    /// An input, output, or fault parameter list.
    ParameterList,
    /// An individual, possibly nested, parameter.
    Parameter,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artifact => write!(f, "artifact"),
            Self::Interface => write!(f, "interface"),
            Self::Operation => write!(f, "operation"),
            Self::ParameterList => write!(f, "parameter list"),
            Self::Parameter => write!(f, "parameter"),
        }
    }
}
