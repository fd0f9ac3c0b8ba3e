//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use sigrid_foundation::{Error, ErrorKind, NodeId, NodeKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_kind_mismatch() {
    let err = Error::kind_mismatch(NodeKind::Artifact, NodeKind::Operation);
    assert!(matches!(err.kind, ErrorKind::NodeKindMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("artifact"));
    assert!(msg.contains("operation"));
}

#[test]
fn error_node_not_found() {
    let id = NodeId::new(42, 1);
    let err = Error::node_not_found(id);
    assert!(matches!(err.kind, ErrorKind::NodeNotFound(_)));
    let msg = format!("{err}");
    assert!(msg.contains("42"));
}

#[test]
fn error_stale_node() {
    let id = NodeId::new(5, 2);
    let err = Error::stale_node(id);
    assert!(matches!(err.kind, ErrorKind::StaleNode(_)));
    let msg = format!("{err}");
    assert!(msg.contains("5"));
}

#[test]
fn error_ontology_load() {
    let err = Error::ontology_load("get-13.5.1.xml", "unexpected end of document");
    assert!(matches!(err.kind, ErrorKind::OntologyLoad { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("get-13.5.1.xml"));
    assert!(msg.contains("unexpected end of document"));
}

#[test]
fn error_internal() {
    let err = Error::internal("tree already has a root artifact");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    let msg = format!("{err}");
    assert!(msg.contains("root artifact"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_names_both_kinds() {
    let err = Error::kind_mismatch(NodeKind::ParameterList, NodeKind::Interface);
    let msg = format!("{err}");
    assert!(msg.contains("parameter list"));
    assert!(msg.contains("interface"));
}

#[test]
fn error_display_serialization_and_io() {
    let ser = Error::new(ErrorKind::Serialization("invalid marker".to_string()));
    assert!(format!("{ser}").contains("invalid marker"));

    let io = Error::new(ErrorKind::Io("failed to open file".to_string()));
    assert!(format!("{io}").contains("failed to open file"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_carries_source_and_identifier() {
    use sigrid_foundation::ErrorContext;

    let err = Error::node_not_found(NodeId::new(7, 1)).with_context(
        ErrorContext::new()
            .with_source("CustomerService.wsdl")
            .with_identifier("findCustomersByName"),
    );

    let ctx = err.context.expect("context was attached");
    assert_eq!(ctx.source.as_deref(), Some("CustomerService.wsdl"));
    assert_eq!(ctx.identifier.as_deref(), Some("findCustomersByName"));
    let rendered = format!("{ctx}");
    assert!(rendered.contains("CustomerService.wsdl"));
    assert!(rendered.contains("findCustomersByName"));
}
