/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::{fs, io, path::Path};

use serde::Deserialize;

use crate::label::Color;

// --------- //
// Structure //
// --------- //

/// Apparence des lignes de complétion.
///
/// Exemple de fichier TOML, chaque clé est facultative :
///
/// ```toml
/// global-attribute-color = "#0000FF"
/// element-icon = "<>"
/// attribute-icon = "@"
/// ```
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
#[derive(Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompletionStyle {
    /// Couleur du libellé des attributs globaux.
    pub global_attribute_color: Color,
    pub element_icon: String,
    pub attribute_icon: String,
}

// ----------- //
// Énumération //
// ----------- //

#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum StyleError {
    #[error("Lecture du style impossible: {0}")]
    Io(#[from] io::Error),

    #[error("Style invalide: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Couleur invalide (attendu: #RRGGBB ou #AARRGGBB): {0}")]
    InvalidColor(String),
}

// -------------- //
// Implémentation //
// -------------- //

impl CompletionStyle {
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        log::debug!("Chargement du style: {}", path.display());
        Self::from_toml(&fs::read_to_string(path)?)
    }
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl Default for CompletionStyle {
    fn default() -> Self {
        Self {
            global_attribute_color: Color::BLUE,
            element_icon: String::from("<>"),
            attribute_icon: String::from("@"),
        }
    }
}

// ---- //
// Test //
// ---- //
