//! Role set operations with name-based equality.
//!
//! Throughout this module two roles count as equal when their names are
//! equal; descriptions and scopes are display data. A role without a name
//! never matches anything, not even another unnamed role.

use sigrid_foundation::{NodeId, Result};
use sigrid_structure::{Documentation, SignatureTree, ThematicGrid, ThematicRole};

/// Tests whether `role` is contained in `roles`, comparing by name only.
///
/// A probe role without a name is never contained.
#[must_use]
pub fn contains_role(roles: &[ThematicRole], role: &ThematicRole) -> bool {
    role.name().is_some() && roles.iter().any(|reference| reference.name() == role.name())
}

/// Collects the roles of `grids` on top of `existing`.
///
/// The existing roles come first in their original order; newly discovered
/// grid roles follow in grid iteration order. Each name appears exactly once.
#[must_use]
pub fn collect_thematic_roles(
    grids: &[ThematicGrid],
    existing: &[ThematicRole],
) -> Vec<ThematicRole> {
    let mut roles: Vec<ThematicRole> = Vec::with_capacity(existing.len());
    for role in existing {
        if !contains_role(&roles, role) {
            roles.push(role.clone());
        }
    }

    for grid in grids {
        for (role, _) in grid.roles() {
            if !contains_role(&roles, role) {
                roles.push(role.clone());
            }
        }
    }

    roles
}

/// Collects the roles already used by `documentations`, deduplicated by name
/// in insertion order.
///
/// With `error_case_only` set, only documentations flagged as describing an
/// error case contribute.
#[must_use]
pub fn collect_documented_roles(
    documentations: &[Documentation],
    error_case_only: bool,
) -> Vec<ThematicRole> {
    let mut roles = Vec::new();

    for documentation in documentations {
        if error_case_only && !documentation.error_case {
            continue;
        }
        if let Some(role) = &documentation.thematic_role {
            if !contains_role(&roles, role) {
                roles.push(role.clone());
            }
        }
    }

    roles
}

/// Collects the documented roles of a whole subtree in depth-first order.
///
/// # Errors
///
/// Fails if `root` is not a valid id of `tree`.
pub fn collect_subtree_roles(
    tree: &SignatureTree,
    root: NodeId,
    error_case_only: bool,
) -> Result<Vec<ThematicRole>> {
    let mut roles = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        for role in collect_documented_roles(tree.get(id)?.documentations(), error_case_only) {
            if !contains_role(&roles, &role) {
                roles.push(role);
            }
        }
        let mut children = tree.children(id)?;
        children.reverse();
        stack.extend(children);
    }

    Ok(roles)
}
