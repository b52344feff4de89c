/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::hash;

use serde::Deserialize;

use super::category::ElementCategory;
use crate::interface::{CompletionInterface, EntryKind};

// --------- //
// Structure //
// --------- //

/// Un élément HTML du catalogue.
///
/// L'identité d'un élément est son nom : deux entrées portant le même nom
/// sont égales et ont la même empreinte, quelle que soit leur description.
/// Le catalogue refuse donc deux éléments de même nom (voir
/// [CatalogBuilder::build](crate::CatalogBuilder::build)).
#[derive(Debug)]
#[derive(Clone)]
#[derive(Deserialize)]
pub struct ElementEntry {
    name: String,
    category: ElementCategory,
    description: String,
    #[serde(default)]
    deprecated: bool,
}

// -------------- //
// Implémentation //
// -------------- //

impl ElementEntry {
    pub fn new(
        name: impl ToString,
        category: ElementCategory,
        description: impl ToString,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            description: description.to_string(),
            deprecated: false,
        }
    }

    /// Marque l'élément comme obsolète.
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Nom de la balise, ex. "div".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ElementCategory {
        self.category
    }

    /// Description lisible de l'élément. Elle peut tenir sur plusieurs
    /// lignes et contenir des balises (`<dt>`) en texte brut.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl PartialEq for ElementEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ElementEntry {}

impl hash::Hash for ElementEntry {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq<str> for ElementEntry {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for ElementEntry {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl CompletionInterface for ElementEntry {
    fn kind(&self) -> EntryKind {
        EntryKind::Element
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn is_deprecated(&self) -> bool {
        self.deprecated
    }
}

// ---- //
// Test //
// ---- //

#[cfg(test)]
mod tests {
    use std::{
        collections::{hash_map::DefaultHasher, HashSet},
        hash::{Hash, Hasher},
    };

    use super::*;

    fn hash_of(element: &ElementEntry) -> u64 {
        let mut hasher = DefaultHasher::new();
        element.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identity_is_the_name() {
        let div = ElementEntry::new(
            "div",
            ElementCategory::TextContent,
            "The generic container for flow content.",
        );
        let other_div = ElementEntry::new(
            "div",
            ElementCategory::InlineTextSemantics,
            "Une autre description.",
        )
        .with_deprecated(true);

        assert_eq!(div, other_div);
        assert_eq!(hash_of(&div), hash_of(&other_div));

        // Un ensemble ne garde qu'une des deux entrées.
        let set: HashSet<_> = [div.clone(), other_div].into_iter().collect();
        assert_eq!(set.len(), 1);

        let span = ElementEntry::new(
            "span",
            ElementCategory::InlineTextSemantics,
            "The generic container for flow content.",
        );
        assert_ne!(div, span);
    }

    #[test]
    fn test_eq_str() {
        let form =
            ElementEntry::new("form", ElementCategory::Forms, "A form.");
        assert!(form == "form");
        assert!(form != "Form");
    }

    #[test]
    fn test_completion() {
        let dir = ElementEntry::new(
            "dir",
            ElementCategory::TextContent,
            "The obsolete HTML Directory element.",
        )
        .with_deprecated(true);

        assert_eq!(dir.kind(), EntryKind::Element);
        assert!(CompletionInterface::is_deprecated(&dir));
        assert!(!dir.is_global());
        assert_eq!(
            CompletionInterface::description(&dir),
            Some("The obsolete HTML Directory element.")
        );
    }

    #[test]
    fn test_deserialize() {
        let hr: ElementEntry = serde_json::from_str(
            r#"{
                "name": "hr",
                "category": "text-content",
                "description": "Represents a thematic break."
            }"#,
        )
        .unwrap();

        assert_eq!(hr.name(), "hr");
        assert_eq!(hr.category(), ElementCategory::TextContent);
        assert!(!hr.is_deprecated());
    }
}
