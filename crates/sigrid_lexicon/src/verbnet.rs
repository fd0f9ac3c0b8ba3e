//! Verb-class ontology loaded from XML class documents.
//!
//! Each document describes one verb class in the VerbNet 3.0 layout: a root
//! `VNCLASS` element carrying an `ID` attribute, with `MEMBER` elements
//! (possibly nested in subclasses) carrying the member verbs in their `name`
//! attributes. Every member anywhere in a document belongs to the document's
//! root class.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use sigrid_foundation::{Error, Interner, Result, WordId};

const CLASS_ELEMENT: &[u8] = b"VNCLASS";
const MEMBER_ELEMENT: &[u8] = b"MEMBER";

/// A verb-class ontology indexed by member verb.
///
/// Documents are parsed once at load time; lookups afterwards are plain map
/// reads and cannot fail.
#[derive(Clone, Debug, Default)]
pub struct VerbOntology {
    /// Interned member verbs.
    words: Interner,
    /// Interned member verb to class ids, in first-seen order without
    /// duplicates.
    classes_by_member: HashMap<WordId, Vec<String>>,
    /// All loaded class ids, in load order.
    class_ids: Vec<String>,
}

impl VerbOntology {
    /// Creates an empty ontology.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of loaded verb classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.class_ids.len()
    }

    /// Returns true if no class documents were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.class_ids.is_empty()
    }

    /// Loads all `.xml` files among `paths` as class documents.
    ///
    /// Files without an `.xml` extension are skipped.
    ///
    /// # Errors
    ///
    /// Fails if a file cannot be read or is not a well-formed class document.
    pub fn load_from_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        for path in paths {
            let path = path.as_ref();
            if path.extension().is_none_or(|ext| ext != "xml") {
                continue;
            }
            let source_name = path.display().to_string();
            let xml = fs::read_to_string(path)
                .map_err(|e| Error::ontology_load(&source_name, e.to_string()))?;
            self.add_document(&source_name, &xml)?;
        }
        Ok(())
    }

    /// Parses one class document and indexes its members.
    ///
    /// `source_name` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Fails if the XML is malformed or no root class id is present.
    pub fn add_document(&mut self, source_name: &str, xml: &str) -> Result<()> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();

        let mut class_id: Option<String> = None;
        let mut members = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e) | Event::Empty(e)) => {
                    if e.name().as_ref() == CLASS_ELEMENT && class_id.is_none() {
                        class_id = Some(required_attribute(source_name, &e, b"ID")?);
                    } else if e.name().as_ref() == MEMBER_ELEMENT {
                        members.push(required_attribute(source_name, &e, b"name")?);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::ontology_load(source_name, e.to_string())),
            }
            buf.clear();
        }

        let Some(class_id) = class_id else {
            return Err(Error::ontology_load(
                source_name,
                "document has no root VNCLASS element with an ID attribute",
            ));
        };

        for member in members {
            let word = self.words.intern(&member);
            let classes = self.classes_by_member.entry(word).or_default();
            if !classes.contains(&class_id) {
                classes.push(class_id.clone());
            }
        }
        self.class_ids.push(class_id);

        Ok(())
    }

    /// Returns the class ids whose member lists contain `word`.
    ///
    /// The slice is empty for unknown words.
    #[must_use]
    pub fn classes_for(&self, word: &str) -> &[String] {
        self.words
            .get(word)
            .and_then(|id| self.classes_by_member.get(&id))
            .map_or(&[], Vec::as_slice)
    }
}

fn required_attribute(source_name: &str, element: &BytesStart<'_>, name: &[u8]) -> Result<String> {
    let attribute = element
        .try_get_attribute(name)
        .map_err(|e| Error::ontology_load(source_name, e.to_string()))?
        .ok_or_else(|| {
            Error::ontology_load(
                source_name,
                format!(
                    "element {} is missing its {} attribute",
                    String::from_utf8_lossy(element.name().as_ref()),
                    String::from_utf8_lossy(name)
                ),
            )
        })?;
    let value = attribute
        .unescape_value()
        .map_err(|e| Error::ontology_load(source_name, e.to_string()))?;
    Ok(value.into_owned())
}
