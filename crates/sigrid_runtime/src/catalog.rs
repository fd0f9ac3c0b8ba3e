//! The editable definition catalog of a host application.

use serde::{Deserialize, Serialize};
use sigrid_structure::{Addressee, ThematicGrid, ThematicRole};

/// The definitions a host edits and persists: documentation addressees,
/// thematic roles, and thematic grids.
///
/// The catalog is plain data; consistency between roles and the roles
/// referenced by grids is the editor's concern, not enforced here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Documentation addressee definitions.
    pub addressees: Vec<Addressee>,
    /// Thematic role definitions.
    pub roles: Vec<ThematicRole>,
    /// Thematic grid definitions.
    pub grids: Vec<ThematicGrid>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an addressee definition.
    #[must_use]
    pub fn with_addressee(mut self, addressee: Addressee) -> Self {
        self.addressees.push(addressee);
        self
    }

    /// Adds a role definition.
    #[must_use]
    pub fn with_role(mut self, role: ThematicRole) -> Self {
        self.roles.push(role);
        self
    }

    /// Adds a grid definition.
    #[must_use]
    pub fn with_grid(mut self, grid: ThematicGrid) -> Self {
        self.grids.push(grid);
        self
    }

    /// Looks up an addressee by name.
    #[must_use]
    pub fn addressee(&self, name: &str) -> Option<&Addressee> {
        self.addressees.iter().find(|a| a.name == name)
    }

    /// Looks up a role by name.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<&ThematicRole> {
        self.roles.iter().find(|r| r.name() == Some(name))
    }

    /// Looks up a grid by name.
    #[must_use]
    pub fn grid(&self, name: &str) -> Option<&ThematicGrid> {
        self.grids.iter().find(|g| g.name == name)
    }
}
