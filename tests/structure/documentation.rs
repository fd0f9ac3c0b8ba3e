//! Integration tests for documentation parts, addressees, and paths.

use sigrid_foundation::RoleScope;
use sigrid_structure::{
    Addressee, Delimiters, Documentation, ListDirection, SignatureNode, SignatureTree,
    ThematicRole,
};

#[test]
fn addressee_texts_keep_first_insertion_order() {
    let mut documentation = Documentation::new()
        .with_text(Addressee::new("Developer"), "initial developer text")
        .with_text(Addressee::new("Tester"), "tester text");

    // Replacing a text must not move the addressee to the back.
    documentation.set_text(Addressee::new("Developer"), "revised developer text");

    let order: Vec<&str> = documentation
        .addressee_sequence()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(order, ["Developer", "Tester"]);
    assert_eq!(
        documentation.text_for("Developer"),
        Some("revised developer text")
    );
}

#[test]
fn roles_compare_by_name_only() {
    let described = ThematicRole::new("AGENT")
        .with_description("who performs the action")
        .with_scope(RoleScope::OperationLevel);
    let bare = ThematicRole::new("AGENT");

    assert_eq!(described, bare);
    assert_ne!(described, ThematicRole::new("OBJECT"));
    assert_ne!(ThematicRole::unnamed(), ThematicRole::new("AGENT"));
}

#[test]
fn failable_roles_are_the_fixed_error_set() {
    for name in ["ACTION", "OBJECT", "SOURCE", "DESTINATION", "REPORT"] {
        assert!(ThematicRole::new(name).is_failable(), "{name} is failable");
    }
    assert!(!ThematicRole::new("AGENT").is_failable());
    assert!(!ThematicRole::unnamed().is_failable());
}

#[test]
fn signature_paths_identify_elements_across_parses() {
    let mut tree = SignatureTree::new();
    let artifact = tree
        .insert_artifact(SignatureNode::artifact("Artifact").with_identifier("service.wsdl"))
        .unwrap();
    let interface = tree
        .attach(
            artifact,
            SignatureNode::interface("PortType").with_identifier("CustomerService"),
        )
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
            SignatureNode::parameter_list("InputMessage", ListDirection::Input)
                .with_identifier("findRequest"),
        )
        .unwrap();
    let customer = tree
        .attach(
            input,
            SignatureNode::parameter("Part", "Customer", "com.example.Customer")
                .with_identifier("customer"),
        )
        .unwrap();

    let delimiters = Delimiters::default();
    let path = tree.signature_path(customer, &delimiters).unwrap();
    assert_eq!(
        path,
        "service.wsdl.CustomerService.findCustomersByName.findRequest.customer:com.example.Customer"
    );

    // A stored documentation finds its element again by that path.
    let stored = Documentation::new()
        .with_role(ThematicRole::new("OBJECT"))
        .with_text(Addressee::new("Developer"), "the search template")
        .with_element_path(path);
    assert!(tree
        .attach_matching_documentation(artifact, &delimiters, &stored)
        .unwrap());
    assert_eq!(tree.get(customer).unwrap().documentations().len(), 1);

    // An unknown path attaches nowhere and reports false.
    let unmatched = Documentation::new().with_element_path("service.wsdl.Missing");
    assert!(!tree
        .attach_matching_documentation(artifact, &delimiters, &unmatched)
        .unwrap());
}
