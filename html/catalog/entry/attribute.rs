/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::sync::Arc;

use super::element::ElementEntry;
use crate::interface::{CompletionInterface, EntryKind};

// --------- //
// Structure //
// --------- //

/// Un attribut HTML du catalogue.
///
/// Un attribut sans élément associé est global : il s'applique à tous les
/// éléments. Les éléments associés sont partagés avec le catalogue qui les
/// possède.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq, Eq, Hash)]
pub struct AttributeEntry {
    name: String,
    description: Option<String>,
    deprecated: bool,
    elements: Vec<Arc<ElementEntry>>,
}

// -------------- //
// Implémentation //
// -------------- //

impl AttributeEntry {
    pub fn new(name: impl ToString, description: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            description,
            deprecated: false,
            elements: Vec::default(),
        }
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Limite l'attribut aux éléments donnés.
    pub fn with_elements(
        mut self,
        elements: impl IntoIterator<Item = Arc<ElementEntry>>,
    ) -> Self {
        self.elements = elements.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Certains attributs n'ont pas de description connue.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementEntry> {
        self.elements.iter().map(|element| &**element)
    }

    pub fn is_global(&self) -> bool {
        self.elements.is_empty()
    }

    /// Vérifie que l'attribut est limité, entre autres, à l'élément donné.
    /// Un attribut global ne s'applique *explicitement* à aucun élément.
    pub fn applies_to(&self, element: &ElementEntry) -> bool {
        self.elements.iter().any(|scoped| **scoped == *element)
    }
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl CompletionInterface for AttributeEntry {
    fn kind(&self) -> EntryKind {
        EntryKind::Attribute
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    fn is_global(&self) -> bool {
        self.elements.is_empty()
    }
}

// ---- //
// Test //
// ---- //
