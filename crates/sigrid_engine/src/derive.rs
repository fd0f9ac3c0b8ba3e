//! Grid matching against operation identifiers.

use std::collections::HashMap;

use sigrid_lexicon::extract_verb;
use sigrid_structure::{ThematicGrid, ThematicRole};

use crate::roles::collect_thematic_roles;

/// Returns every grid whose trigger-verb set contains `verb`.
///
/// Matching is exact and case-sensitive; verb extraction already lower-cases,
/// and grid verb sets are expected to be lower-case too.
#[must_use]
pub fn find_matching_grids<'a>(verb: &str, grids: &'a [ThematicGrid]) -> Vec<&'a ThematicGrid> {
    grids.iter().filter(|grid| grid.matches_verb(verb)).collect()
}

/// Derives the thematic grids for an operation identifier.
///
/// The identifier's first word token is taken as the verb and matched against
/// the trigger-verb sets of the defined grids. The result maps grid names to
/// the matched grids; identifiers without any word token produce an empty map,
/// which is not an error.
///
/// When two defined grids share a name, the later one in slice order wins.
#[must_use]
pub fn derive_thematic_grid(
    identifier: &str,
    grids: &[ThematicGrid],
) -> HashMap<String, ThematicGrid> {
    let Some(verb) = extract_verb(identifier) else {
        return HashMap::new();
    };

    find_matching_grids(&verb, grids)
        .into_iter()
        .map(|grid| (grid.name.clone(), grid.clone()))
        .collect()
}

/// A grid recommendation for an operation identifier.
#[derive(Clone, Debug, Default)]
pub struct GridRecommendation {
    /// Matched grids keyed by grid name.
    pub grids: HashMap<String, ThematicGrid>,
    /// Union of the matched grids' roles, deduplicated by name, in the
    /// defined grids' slice order.
    pub roles: Vec<ThematicRole>,
}

impl GridRecommendation {
    /// Returns true if no grid matched the identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

/// Derives the grids for an identifier and bundles them with the union of
/// their roles.
#[must_use]
pub fn recommend(identifier: &str, grids: &[ThematicGrid]) -> GridRecommendation {
    let derived = derive_thematic_grid(identifier, grids);

    // Collect roles over the defined slice order so the result does not
    // depend on map iteration order.
    let matched: Vec<ThematicGrid> = grids
        .iter()
        .filter(|grid| derived.contains_key(&grid.name))
        .cloned()
        .collect();
    let roles = collect_thematic_roles(&matched, &[]);

    GridRecommendation {
        grids: derived,
        roles,
    }
}
