//! Thematic grids: named templates binding trigger verbs to role obligations.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::ThematicRole;

/// Whether a role in a grid is mandatory or optional.
///
/// Roles default to mandatory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Obligation {
    /// The role must be documented for operations using this grid.
    #[default]
    Mandatory,
    /// The role may be documented.
    Optional,
}

impl Obligation {
    /// Returns true for [`Obligation::Mandatory`].
    #[must_use]
    pub fn is_mandatory(self) -> bool {
        matches!(self, Self::Mandatory)
    }
}

/// A named bundle associating trigger verbs with expected thematic roles.
///
/// Invariants:
/// - the reference verb is always a member of the trigger-verb set;
/// - role membership in the obligation list is keyed by role-name equality,
///   never by role-object identity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThematicGrid {
    /// Grid name, shown as the recommendation headline.
    pub name: String,
    /// Free-text description of the grid.
    pub description: String,
    /// The main verb generalizing all associated verbs.
    reference_verb: String,
    /// Verbs using this grid.
    verbs: BTreeSet<String>,
    /// Associated roles with their obligation, keyed by role name.
    roles: Vec<(ThematicRole, Obligation)>,
    /// Per-role validation rule strings, keyed by role name.
    rules: BTreeMap<String, String>,
}

impl ThematicGrid {
    /// Creates an empty grid with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the reference verb, inserting it into the trigger-verb set.
    #[must_use]
    pub fn with_reference_verb(mut self, verb: impl Into<String>) -> Self {
        let verb = verb.into();
        self.verbs.insert(verb.clone());
        self.reference_verb = verb;
        self
    }

    /// Adds a trigger verb.
    #[must_use]
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verbs.insert(verb.into());
        self
    }

    /// Adds a role with its obligation, replacing any role of the same name.
    #[must_use]
    pub fn with_role(mut self, role: ThematicRole, obligation: Obligation) -> Self {
        self.set_role(role, obligation);
        self
    }

    /// Inserts or replaces a role by name equality.
    pub fn set_role(&mut self, role: ThematicRole, obligation: Obligation) {
        if let Some(entry) = self
            .roles
            .iter_mut()
            .find(|(existing, _)| existing.name == role.name)
        {
            *entry = (role, obligation);
        } else {
            self.roles.push((role, obligation));
        }
    }

    /// Sets the validation rule for a role name.
    pub fn set_rule(&mut self, role_name: impl Into<String>, rule: impl Into<String>) {
        self.rules.insert(role_name.into(), rule.into());
    }

    /// Returns the reference verb.
    #[must_use]
    pub fn reference_verb(&self) -> &str {
        &self.reference_verb
    }

    /// Returns the trigger verbs.
    #[must_use]
    pub fn verbs(&self) -> &BTreeSet<String> {
        &self.verbs
    }

    /// Returns true if the exact verb is among the trigger verbs.
    ///
    /// Matching is case-sensitive as stored; callers normalize beforehand.
    #[must_use]
    pub fn matches_verb(&self, verb: &str) -> bool {
        self.verbs.contains(verb)
    }

    /// Iterates over roles with their obligations, in insertion order.
    pub fn roles(&self) -> impl Iterator<Item = (&ThematicRole, Obligation)> {
        self.roles.iter().map(|(role, obligation)| (role, *obligation))
    }

    /// Looks up a role's obligation by name.
    #[must_use]
    pub fn role_obligation(&self, role_name: &str) -> Option<Obligation> {
        self.roles
            .iter()
            .find(|(role, _)| role.name() == Some(role_name))
            .map(|(_, obligation)| *obligation)
    }

    /// Returns the validation rule for a role name, if any.
    #[must_use]
    pub fn rule_for(&self, role_name: &str) -> Option<&str> {
        self.rules.get(role_name).map(String::as_str)
    }
}

impl fmt::Display for ThematicGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.reference_verb)
    }
}
