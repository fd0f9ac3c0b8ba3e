//! Integration tests for role collection over grids and documented trees.

use sigrid_engine::{collect_subtree_roles, collect_thematic_roles, contains_role};
use sigrid_structure::{
    Documentation, ListDirection, Obligation, SignatureNode, SignatureTree, ThematicGrid,
    ThematicRole,
};

#[test]
fn membership_is_by_name_and_refuses_unnamed_probes() {
    let roles = vec![ThematicRole::new("AGENT"), ThematicRole::new("OBJECT")];

    assert!(contains_role(
        &roles,
        &ThematicRole::new("AGENT").with_description("different description")
    ));
    assert!(!contains_role(&roles, &ThematicRole::new("SOURCE")));
    assert!(!contains_role(&roles, &ThematicRole::unnamed()));
}

#[test]
fn existing_roles_come_first_and_names_stay_unique() {
    let grids = vec![
        ThematicGrid::new("A")
            .with_reference_verb("a")
            .with_role(ThematicRole::new("AGENT"), Obligation::Mandatory)
            .with_role(ThematicRole::new("OBJECT"), Obligation::Mandatory),
        ThematicGrid::new("B")
            .with_reference_verb("b")
            .with_role(ThematicRole::new("OBJECT"), Obligation::Mandatory)
            .with_role(ThematicRole::new("REPORT"), Obligation::Optional),
    ];
    let existing = vec![ThematicRole::new("OBJECT"), ThematicRole::new("SOURCE")];

    let collected = collect_thematic_roles(&grids, &existing);
    let names: Vec<&str> = collected.iter().filter_map(ThematicRole::name).collect();
    assert_eq!(names, ["OBJECT", "SOURCE", "AGENT", "REPORT"]);
}

/// The error-case scenario: an operation documents AGENT and OBJECT on the
/// happy path, ACTION and OBJECT flagged as error cases. Error-only
/// collection sees ACTION and OBJECT; full collection sees everything.
#[test]
fn error_case_collection_scenario() {
    let mut tree = SignatureTree::new();
    let artifact = tree
        .insert_artifact(SignatureNode::artifact("Artifact"))
        .unwrap();
    let interface = tree
        .attach(artifact, SignatureNode::interface("PortType"))
        .unwrap();
    let operation = tree
        .attach(
            interface,
            SignatureNode::operation("Operation").with_identifier("findCustomersByName"),
        )
        .unwrap();
    let input = tree
        .attach(
            operation,
            SignatureNode::parameter_list("Input", ListDirection::Input),
        )
        .unwrap();
    let parameter = tree
        .attach(
            input,
            SignatureNode::parameter("Part", "Customer", "Customer"),
        )
        .unwrap();

    tree.get_mut(operation)
        .unwrap()
        .add_documentation(Documentation::new().with_role(ThematicRole::new("AGENT")));
    tree.get_mut(operation).unwrap().add_documentation(
        Documentation::new()
            .with_role(ThematicRole::new("ACTION"))
            .with_error_case(true),
    );
    tree.get_mut(parameter).unwrap().add_documentation(
        Documentation::new()
            .with_role(ThematicRole::new("OBJECT"))
            .with_error_case(true),
    );

    let error_roles = collect_subtree_roles(&tree, artifact, true).unwrap();
    let names: Vec<&str> = error_roles.iter().filter_map(ThematicRole::name).collect();
    assert_eq!(names, ["ACTION", "OBJECT"]);

    let all_roles = collect_subtree_roles(&tree, artifact, false).unwrap();
    let names: Vec<&str> = all_roles.iter().filter_map(ThematicRole::name).collect();
    assert_eq!(names, ["AGENT", "ACTION", "OBJECT"]);
}
