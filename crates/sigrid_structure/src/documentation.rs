//! Documentation parts attached to signature elements.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::ThematicRole;

/// A named audience for whom a documentation text variant is written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Addressee {
    /// The audience name (Developer, Manager, Tester, ...).
    pub name: String,
    /// Free-text description of the audience.
    pub description: String,
}

impl Addressee {
    /// Creates an addressee with an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Addressee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One addressee's text within a documentation part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AddresseeText {
    /// The audience this text is written for.
    pub addressee: Addressee,
    /// The documentation text.
    pub text: String,
}

/// A documentation part attached to a signature element.
///
/// Texts are stored in first-insertion order because the rendering order of
/// addressees matters. Setting a text for an addressee whose name is already
/// present replaces the existing entry in place.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Documentation {
    /// The thematic role this documentation describes, if assigned.
    pub thematic_role: Option<ThematicRole>,
    /// Per-addressee texts in insertion order.
    texts: Vec<AddresseeText>,
    /// True if this documentation describes an error case.
    pub error_case: bool,
    /// Dotted/typed identifier path of the documented element.
    pub element_path: Option<String>,
}

impl Documentation {
    /// Creates an empty documentation part.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thematic role.
    #[must_use]
    pub fn with_role(mut self, role: ThematicRole) -> Self {
        self.thematic_role = Some(role);
        self
    }

    /// Marks this documentation as describing an error case.
    #[must_use]
    pub fn with_error_case(mut self, error_case: bool) -> Self {
        self.error_case = error_case;
        self
    }

    /// Sets the documented element's path.
    #[must_use]
    pub fn with_element_path(mut self, path: impl Into<String>) -> Self {
        self.element_path = Some(path.into());
        self
    }

    /// Adds a text during construction. See [`Documentation::set_text`].
    #[must_use]
    pub fn with_text(mut self, addressee: Addressee, text: impl Into<String>) -> Self {
        self.set_text(addressee, text);
        self
    }

    /// Sets the text for an addressee.
    ///
    /// Replaces an existing entry with the same addressee name in place,
    /// otherwise appends, preserving first-insertion order.
    pub fn set_text(&mut self, addressee: Addressee, text: impl Into<String>) {
        let text = text.into();
        if let Some(entry) = self
            .texts
            .iter_mut()
            .find(|entry| entry.addressee.name == addressee.name)
        {
            entry.addressee = addressee;
            entry.text = text;
        } else {
            self.texts.push(AddresseeText { addressee, text });
        }
    }

    /// Returns the text written for the named addressee, if any.
    #[must_use]
    pub fn text_for(&self, addressee_name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|entry| entry.addressee.name == addressee_name)
            .map(|entry| entry.text.as_str())
    }

    /// Iterates addressees in rendering (first-insertion) order.
    pub fn addressee_sequence(&self) -> impl Iterator<Item = &Addressee> {
        self.texts.iter().map(|entry| &entry.addressee)
    }

    /// Iterates all texts in rendering order.
    pub fn texts(&self) -> impl Iterator<Item = &AddresseeText> {
        self.texts.iter()
    }

    /// Returns true if no text has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
