/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

/// Contexte de rendu : ressources graphiques et style actif.
mod context;
/// Libellés enrichis (barré, couleur).
mod label;
/// Rendu d'une entrée du catalogue en ligne de complétion.
mod render;
/// Lignes de complétion et vues recyclables.
mod row;
/// Configuration du rendu.
mod style;

pub use self::{
    context::{
        Drawable, DrawableResource, RenderingContextInterface,
        TextRenderingContext,
    },
    label::{Color, Span, SpanStyle, StyledLabel},
    render::{label_for, render_completion},
    row::{CompletionRow, ViewInterface},
    style::{CompletionStyle, StyleError},
};
