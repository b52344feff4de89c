/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::{any::Any, fmt};

use crate::{context::Drawable, label::StyledLabel};

// --------- //
// Interface //
// --------- //

/// Une vue d'une liste de complétion. Les listes ne créent qu'une poignée
/// de vues et les réutilisent d'une ligne à l'autre ; une vue d'un autre
/// type que celui attendu par le rendu est remplacée.
pub trait ViewInterface: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

// --------- //
// Structure //
// --------- //

/// Une ligne de complétion : une icône et un libellé.
#[derive(Debug)]
#[derive(Default)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
pub struct CompletionRow {
    icon: Option<Drawable>,
    label: StyledLabel,
}

// -------------- //
// Implémentation //
// -------------- //

impl CompletionRow {
    pub fn icon(&self) -> Option<&Drawable> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<Drawable>) {
        self.icon = icon;
    }

    pub fn label(&self) -> &StyledLabel {
        &self.label
    }

    pub fn set_label(&mut self, label: StyledLabel) {
        self.label = label;
    }
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl ViewInterface for CompletionRow {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl fmt::Display for CompletionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            | Some(icon) => write!(f, "{} {}", icon.content(), self.label),
            | None => write!(f, "{}", self.label),
        }
    }
}
