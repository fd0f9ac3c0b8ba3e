//! Integration tests for thematic-grid derivation.
//!
//! The reference scenario: a "Searching Operations" grid and a "Converting
//! Operations" grid share the trigger verb "get", but "find" belongs to the
//! searching grid alone.

use sigrid_engine::{derive_thematic_grid, find_matching_grids, recommend};
use sigrid_structure::{Obligation, ThematicGrid, ThematicRole};

fn defined_grids() -> Vec<ThematicGrid> {
    vec![
        ThematicGrid::new("Searching Operations")
            .with_description("operations that look elements up")
            .with_reference_verb("search")
            .with_verb("find")
            .with_verb("get")
            .with_verb("look")
            .with_role(ThematicRole::new("AGENT"), Obligation::Mandatory)
            .with_role(ThematicRole::new("OBJECT"), Obligation::Mandatory)
            .with_role(ThematicRole::new("COMPARISON"), Obligation::Optional),
        ThematicGrid::new("Converting Operations")
            .with_description("operations that transform representations")
            .with_reference_verb("convert")
            .with_verb("get")
            .with_verb("transform")
            .with_role(ThematicRole::new("OBJECT"), Obligation::Mandatory)
            .with_role(ThematicRole::new("DESTINATION"), Obligation::Mandatory),
    ]
}

#[test]
fn find_matches_only_the_searching_grid() {
    let grids = defined_grids();

    let derived = derive_thematic_grid("findCustomersByName", &grids);
    assert_eq!(derived.len(), 1);
    assert!(derived.contains_key("Searching Operations"));
    assert!(!derived.contains_key("Converting Operations"));
}

#[test]
fn shared_trigger_verbs_match_both_grids() {
    let grids = defined_grids();

    let derived = derive_thematic_grid("getTemperature", &grids);
    assert_eq!(derived.len(), 2);
    assert!(derived.contains_key("Searching Operations"));
    assert!(derived.contains_key("Converting Operations"));
}

#[test]
fn derived_grids_carry_their_roles_and_obligations() {
    let grids = defined_grids();

    let derived = derive_thematic_grid("findCustomersByName", &grids);
    let searching = &derived["Searching Operations"];

    assert_eq!(
        searching.role_obligation("COMPARISON"),
        Some(Obligation::Optional)
    );
    assert_eq!(
        searching.role_obligation("AGENT"),
        Some(Obligation::Mandatory)
    );
    assert_eq!(searching.role_obligation("DESTINATION"), None);
}

#[test]
fn verbless_identifiers_derive_nothing() {
    let grids = defined_grids();
    assert!(derive_thematic_grid("", &grids).is_empty());
    assert!(derive_thematic_grid("_____", &grids).is_empty());
}

#[test]
fn unknown_verbs_derive_nothing() {
    let grids = defined_grids();
    assert!(derive_thematic_grid("frobnicateEverything", &grids).is_empty());
    // Reference verbs count as triggers too.
    assert_eq!(find_matching_grids("convert", &grids).len(), 1);
}

#[test]
fn recommendation_bundles_grids_and_role_union() {
    let grids = defined_grids();

    let recommendation = recommend("getCustomerAsXml", &grids);
    assert_eq!(recommendation.grids.len(), 2);

    let names: Vec<&str> = recommendation
        .roles
        .iter()
        .filter_map(ThematicRole::name)
        .collect();
    assert_eq!(names, ["AGENT", "OBJECT", "COMPARISON", "DESTINATION"]);
}
