//! Verb-to-class resolution with synonym fallback.

use crate::synonyms::SynonymLexicon;
use crate::verbnet::VerbOntology;

/// Class name reported when neither a verb nor any of its synonyms is known
/// to the ontology.
pub const CLASS_UNCLASSIFIED: &str = "unclassified";

/// Resolves verbs to verb classes.
///
/// A verb is first looked up in the ontology directly. If that yields no
/// classes, the classes of its synonyms are collected instead. A verb whose
/// synonyms are unknown too gets the single class [`CLASS_UNCLASSIFIED`], so
/// classification always produces at least one class.
#[derive(Clone, Debug, Default)]
pub struct VerbClassifier {
    ontology: VerbOntology,
    synonyms: SynonymLexicon,
}

impl VerbClassifier {
    /// Creates a classifier over the given ontology and synonym lexicon.
    #[must_use]
    pub fn new(ontology: VerbOntology, synonyms: SynonymLexicon) -> Self {
        Self { ontology, synonyms }
    }

    /// Returns the loaded ontology.
    #[must_use]
    pub fn ontology(&self) -> &VerbOntology {
        &self.ontology
    }

    /// Returns the loaded synonym lexicon.
    #[must_use]
    pub fn synonyms(&self) -> &SynonymLexicon {
        &self.synonyms
    }

    /// Classifies a verb.
    ///
    /// Returns the verb's own classes, or the deduplicated classes of its
    /// synonyms, or `[CLASS_UNCLASSIFIED]` when both lookups come up empty.
    #[must_use]
    pub fn classify(&self, verb: &str) -> Vec<String> {
        let direct = self.ontology.classes_for(verb);
        if !direct.is_empty() {
            return direct.to_vec();
        }
        self.classify_by_synonym(verb)
    }

    fn classify_by_synonym(&self, verb: &str) -> Vec<String> {
        let mut classes: Vec<String> = Vec::new();

        for synset in self.synonyms.synsets_for(verb) {
            for synonym in synset {
                if synonym == verb {
                    continue;
                }
                // Some lexica spell contractions with apostrophes.
                let synonym = synonym.replace('\'', " ");
                for class in self.ontology.classes_for(&synonym) {
                    if !classes.contains(class) {
                        classes.push(class.clone());
                    }
                }
            }
        }

        if classes.is_empty() {
            classes.push(CLASS_UNCLASSIFIED.to_string());
        }
        classes
    }
}
