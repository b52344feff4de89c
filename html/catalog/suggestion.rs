/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::{
    catalog::Catalog,
    entry::{attribute::AttributeEntry, element::ElementEntry},
    interface::{CompletionInterface, EntryKind},
};

// ----------- //
// Énumération //
// ----------- //

/// Une suggestion de complétion, élément ou attribut.
#[derive(Debug)]
#[derive(Copy, Clone)]
#[derive(PartialEq, Eq)]
pub enum Completion<'a> {
    Element(&'a ElementEntry),
    Attribute(&'a AttributeEntry),
}

// -------------- //
// Implémentation //
// -------------- //

impl Catalog {
    /// Les éléments dont le nom commence par `prefix` (sans tenir compte de
    /// la casse ASCII), dans l'ordre du catalogue. Les éléments obsolètes
    /// sont proposés eux aussi.
    pub fn suggest_elements(&self, prefix: &str) -> Vec<Completion<'_>> {
        self.all_elements()
            .iter()
            .filter(|element| {
                starts_with_ignore_ascii_case(element.name(), prefix)
            })
            .map(|element| Completion::Element(&**element))
            .collect()
    }

    /// Les attributs de `element` dont le nom commence par `prefix`, dans
    /// l'ordre de [Catalog::attributes_for].
    pub fn suggest_attributes(
        &self,
        element: &ElementEntry,
        prefix: &str,
    ) -> Vec<Completion<'_>> {
        self.attributes_for(element)
            .into_iter()
            .filter(|attribute| {
                starts_with_ignore_ascii_case(attribute.name(), prefix)
            })
            .map(Completion::Attribute)
            .collect()
    }
}

impl CompletionInterface for Completion<'_> {
    fn kind(&self) -> EntryKind {
        match self {
            | Self::Element(_) => EntryKind::Element,
            | Self::Attribute(_) => EntryKind::Attribute,
        }
    }

    fn name(&self) -> &str {
        match *self {
            | Self::Element(element) => element.name(),
            | Self::Attribute(attribute) => attribute.name(),
        }
    }

    fn description(&self) -> Option<&str> {
        match *self {
            | Self::Element(element) => Some(element.description()),
            | Self::Attribute(attribute) => attribute.description(),
        }
    }

    fn is_deprecated(&self) -> bool {
        match *self {
            | Self::Element(element) => element.is_deprecated(),
            | Self::Attribute(attribute) => attribute.is_deprecated(),
        }
    }

    fn is_global(&self) -> bool {
        match self {
            | Self::Element(_) => false,
            | Self::Attribute(attribute) => attribute.is_global(),
        }
    }
}

fn starts_with_ignore_ascii_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .is_some()
}

// ---- //
// Test //
// ---- //
