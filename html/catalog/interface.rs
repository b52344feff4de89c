/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use core::fmt;

// ----------- //
// Énumération //
// ----------- //

/// Nature d'une entrée du catalogue. C'est la seule information dont a
/// besoin la couche de rendu pour choisir l'icône d'une ligne de
/// complétion.
#[derive(Debug)]
#[derive(Copy, Clone)]
#[derive(PartialEq, Eq, Hash)]
pub enum EntryKind {
    Element,
    Attribute,
}

// --------- //
// Interface //
// --------- //

/// Ce qu'une liste de complétion sait afficher d'une entrée.
pub trait CompletionInterface {
    fn kind(&self) -> EntryKind;

    fn name(&self) -> &str;

    fn description(&self) -> Option<&str>;

    fn is_deprecated(&self) -> bool;

    /// Seuls les attributs peuvent être globaux.
    fn is_global(&self) -> bool {
        false
    }
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                | Self::Element => "element",
                | Self::Attribute => "attribute",
            }
        )
    }
}
