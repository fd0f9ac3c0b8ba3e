//! Catalog persistence across the runtime layer.

use sigrid::foundation::RoleScope;
use sigrid::runtime::{Catalog, from_bytes, load_from_file, save_to_file, to_bytes};
use sigrid::structure::{Addressee, Obligation, ThematicGrid, ThematicRole};

fn editable_catalog() -> Catalog {
    Catalog::new()
        .with_addressee(Addressee::new("Developer").with_description("implements API clients"))
        .with_addressee(Addressee::new("Tester"))
        .with_role(
            ThematicRole::new("AGENT")
                .with_description("who performs the action")
                .with_scope(RoleScope::OperationLevel),
        )
        .with_role(ThematicRole::new("OBJECT"))
        .with_role(ThematicRole::new("COMPARISON"))
        .with_grid(
            ThematicGrid::new("Searching Operations")
                .with_reference_verb("search")
                .with_verb("find")
                .with_verb("get")
                .with_role(ThematicRole::new("AGENT"), Obligation::Mandatory)
                .with_role(ThematicRole::new("OBJECT"), Obligation::Mandatory)
                .with_role(ThematicRole::new("COMPARISON"), Obligation::Optional),
        )
}

#[test]
fn catalog_survives_a_byte_round_trip() {
    let catalog = editable_catalog();

    let restored = from_bytes(&to_bytes(&catalog).unwrap()).unwrap();

    assert_eq!(restored.addressees, catalog.addressees);
    assert_eq!(restored.roles, catalog.roles);
    let grid = restored.grid("Searching Operations").unwrap();
    assert!(grid.matches_verb("find"));
    assert_eq!(grid.role_obligation("COMPARISON"), Some(Obligation::Optional));
}

#[test]
fn restored_grids_still_drive_derivation() {
    let catalog = editable_catalog();
    let restored = from_bytes(&to_bytes(&catalog).unwrap()).unwrap();

    let derived = sigrid::engine::derive_thematic_grid("findCustomersByName", &restored.grids);
    assert_eq!(derived.len(), 1);
    assert!(derived.contains_key("Searching Operations"));
}

#[test]
fn catalog_survives_a_file_round_trip() {
    let catalog = editable_catalog();
    let path = std::env::temp_dir().join("sigrid-integration-catalog.mp");

    save_to_file(&catalog, &path).unwrap();
    let restored = load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.addressees.len(), 2);
    assert_eq!(restored.roles.len(), 3);
    assert!(restored.grid("Searching Operations").is_some());
}
