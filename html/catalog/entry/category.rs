/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use core::{fmt, str};

use serde::{de, Deserialize, Deserializer};

// ------ //
// Macros //
// ------ //

macro_rules! enumerate_element_categories {
    ($(
        $(#[$attr:meta])*
        $variant:ident => $name:literal
    )*) => {
        #[derive(Debug)]
        #[derive(Copy, Clone)]
        #[derive(PartialEq, Eq, Hash)]
        pub enum ElementCategory {
        $(
            $(#[$attr])*
            $variant
        ),*
        }

        impl ElementCategory {
            /// Toutes les catégories, dans l'ordre de déclaration du
            /// catalogue.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }
        }

        impl str::FromStr for ElementCategory {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s {
                    $(| $name => Self::$variant),*,
                    | _ => return Err("Catégorie inconnue")
                })
            }
        }
    };
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(|err: &'static str| {
            de::Error::custom(format!("{err}: {name}"))
        })
    }
}

// ----------------------- //
// Application de la macro //
// ----------------------- //

enumerate_element_categories! {
    /// La racine d'un document : <html>.
    MainRoot => "main-root"

    /// Informations sur la page à destination des navigateurs et des
    /// moteurs de recherche (styles, scripts, métadonnées).
    DocumentMetadata => "document-metadata"

    /// Représente le contenu d'un document : <body>.
    SectioningRoot => "sectioning-root"

    /// Organisation du contenu en sections logiques.
    ContentSectioning => "content-sectioning"

    /// Blocs et sections de contenu entre les balises <body>.
    TextContent => "text-content"

    /// Sémantique d'un mot, d'une ligne ou d'un texte arbitraire.
    InlineTextSemantics => "inline-text-semantics"

    /// Images, sons et vidéos.
    ImageAndMultimedia => "image-and-multimedia"

    /// Contenu embarqué depuis une autre source.
    EmbeddedContent => "embedded-content"

    /// Contenu dynamique et scripts.
    Scripting => "scripting"

    /// Marquage des modifications d'un texte.
    DemarcatingEdits => "demarcating-edits"

    /// Données tabulaires.
    TableContent => "table-content"

    /// Formulaires et contrôles interactifs.
    Forms => "forms"

    /// Objets d'interface utilisateur interactifs.
    InteractiveElements => "interactive-elements"

    /// Composants web.
    WebComponents => "web-components"
}

// ---- //
// Test //
// ---- //
