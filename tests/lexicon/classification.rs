//! Integration tests for ontology loading and verb classification.

use sigrid_foundation::ErrorKind;
use sigrid_lexicon::{CLASS_UNCLASSIFIED, SynonymLexicon, VerbClassifier, VerbOntology};

const GET_CLASS: &str = r#"
    <VNCLASS ID="get-13.5.1">
        <MEMBERS>
            <MEMBER name="get" wn="get%2:40:00"/>
            <MEMBER name="fetch" wn="fetch%2:40:00"/>
            <MEMBER name="order" wn="order%2:40:01"/>
        </MEMBERS>
    </VNCLASS>"#;

const SEARCH_CLASS: &str = r#"
    <VNCLASS ID="search-35.2">
        <MEMBERS>
            <MEMBER name="search" wn="search%2:35:00"/>
            <MEMBER name="seek" wn="seek%2:35:00"/>
        </MEMBERS>
    </VNCLASS>"#;

fn sample_classifier() -> VerbClassifier {
    let mut ontology = VerbOntology::new();
    ontology.add_document("get.xml", GET_CLASS).unwrap();
    ontology.add_document("search.xml", SEARCH_CLASS).unwrap();

    let mut synonyms = SynonymLexicon::new();
    synonyms
        .load_from_text(
            "verbs.txt",
            "# verb synsets\nfind search seek\nfind regain\nretrieve fetch get\n",
        )
        .unwrap();

    VerbClassifier::new(ontology, synonyms)
}

#[test]
fn ontology_members_resolve_to_their_class() {
    let classifier = sample_classifier();
    assert_eq!(classifier.classify("get"), ["get-13.5.1"]);
    assert_eq!(classifier.classify("seek"), ["search-35.2"]);
}

#[test]
fn synonym_fallback_covers_unknown_verbs() {
    let classifier = sample_classifier();
    // "find" is no ontology member, but its synonyms "search" and "seek" are.
    assert_eq!(classifier.classify("find"), ["search-35.2"]);
    // "retrieve" reaches get-13.5.1 through "fetch" and "get".
    assert_eq!(classifier.classify("retrieve"), ["get-13.5.1"]);
}

#[test]
fn hopeless_verbs_are_unclassified() {
    let classifier = sample_classifier();
    assert_eq!(classifier.classify("frobnicate"), [CLASS_UNCLASSIFIED]);
    // Classification always yields at least one class.
    assert!(!classifier.classify("").is_empty());
}

#[test]
fn malformed_ontology_documents_fail_to_load() {
    let mut ontology = VerbOntology::new();

    let err = ontology
        .add_document("broken.xml", "<MEMBERS><MEMBER name=\"x\"/></MEMBERS>")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OntologyLoad { .. }));

    let err = ontology
        .add_document("truncated.xml", r#"<VNCLASS ID="x-1"><MEMBER"#)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OntologyLoad { .. }));
}

#[test]
fn loading_is_all_or_nothing_per_document() {
    let mut ontology = VerbOntology::new();
    ontology.add_document("get.xml", GET_CLASS).unwrap();
    ontology
        .add_document("broken.xml", "<nonsense/>")
        .unwrap_err();

    // The broken document contributed nothing; the good one is intact.
    assert_eq!(ontology.class_count(), 1);
    assert_eq!(ontology.classes_for("get"), ["get-13.5.1"]);
}
