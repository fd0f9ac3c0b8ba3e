//! Thematic roles: named semantic tags for signature elements.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use sigrid_foundation::RoleScope;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role names that may carry an error-case documentation.
///
/// Whether a role is failable is a fixed classification, not arbitrary state:
/// roles describing outcomes or affected elements can fail, roles describing
/// the acting party cannot.
pub const FAILABLE_ROLE_NAMES: &[&str] = &["ACTION", "OBJECT", "SOURCE", "DESTINATION", "REPORT"];

/// A named, described semantic tag (AGENT, SOURCE, DESTINATION, ...).
///
/// Equality, ordering, and hashing are by name only (case-sensitive), never
/// by description: two roles with the same name are the same role regardless
/// of their description text.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThematicRole {
    /// The role name; `None` for a role that was never named.
    pub name: Option<String>,
    /// Free-text description shown to the documenting user.
    pub description: String,
    /// The structural levels the role may be documented on.
    pub scope: RoleScope,
}

impl ThematicRole {
    /// Creates a named role with an empty description and [`RoleScope::Both`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: String::new(),
            scope: RoleScope::Both,
        }
    }

    /// Creates a role without a name.
    ///
    /// Unnamed roles never match anything in name-based membership tests.
    #[must_use]
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: RoleScope) -> Self {
        self.scope = scope;
        self
    }

    /// Returns the role name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if this role may carry an error-case documentation.
    ///
    /// Membership in the fixed [`FAILABLE_ROLE_NAMES`] classification list
    /// decides this; an unnamed role is never failable.
    #[must_use]
    pub fn is_failable(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| FAILABLE_ROLE_NAMES.contains(&name))
    }
}

impl PartialEq for ThematicRole {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ThematicRole {}

impl Hash for ThematicRole {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for ThematicRole {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ThematicRole {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for ThematicRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "<unnamed role>"),
        }
    }
}
