/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Les descriptions des éléments et des attributs proviennent de MDN
//! (https://developer.mozilla.org/), sous licence CC-BY-SA 2.5
//! (https://creativecommons.org/licenses/by-sa/2.5/), légèrement modifiées.

use serde::Deserialize;

use crate::{entry::element::ElementEntry, error::CatalogError};

// -------- //
// Constant //
// -------- //

/// Éléments HTML, regroupés par catégorie.
pub(crate) const ELEMENTS_JSON: &str = include_str!("dataset/elements.json");

/// Attributs HTML.
pub(crate) const ATTRIBUTES_JSON: &str =
    include_str!("dataset/attributes.json");

// --------- //
// Structure //
// --------- //

/// Un attribut tel qu'il est déclaré dans un jeu de données : les éléments
/// sont désignés par leur nom et ne sont résolus qu'à la construction du
/// catalogue, une fois tous les éléments connus.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
#[derive(Deserialize)]
pub struct AttributeRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub elements: Vec<String>,
}

// -------------- //
// Implémentation //
// -------------- //

impl AttributeRecord {
    /// Attribut global, sans description.
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            deprecated: false,
            elements: Vec::default(),
        }
    }

    pub fn with_description(mut self, description: impl ToString) -> Self {
        self.description.replace(description.to_string());
        self
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn with_elements<S>(
        mut self,
        elements: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: ToString,
    {
        self.elements = elements.into_iter().map(|s| s.to_string()).collect();
        self
    }
}

pub(crate) fn parse_elements(
    json: &str,
) -> Result<Vec<ElementEntry>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub(crate) fn parse_attributes(
    json: &str,
) -> Result<Vec<AttributeRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

// ---- //
// Test //
// ---- //
