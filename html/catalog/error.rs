/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

// ----------- //
// Énumération //
// ----------- //

/// Défauts d'intégrité d'un jeu de données. Ce sont des erreurs de saisie
/// des données : le jeu de données embarqué n'en contient aucune, les tests
/// du catalogue le vérifient.
#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum CatalogError {
    /// Le document JSON ne décrit pas des éléments ou des attributs.
    #[error("Jeu de données illisible: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Deux éléments portent le même nom.
    #[error("L'élément <{0}> est déclaré plusieurs fois")]
    DuplicateElement(String),

    #[error("L'attribut \"{0}\" est déclaré plusieurs fois")]
    DuplicateAttribute(String),

    /// Un attribut est limité à un élément absent du catalogue.
    #[error(
        "L'attribut \"{attribute}\" fait référence à un élément inconnu: \
         <{element}>"
    )]
    UnknownElement { attribute: String, element: String },
}
