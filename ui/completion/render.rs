/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use catalog::{CompletionInterface, EntryKind};

use crate::{
    context::{DrawableResource, RenderingContextInterface},
    label::{SpanStyle, StyledLabel},
    row::{CompletionRow, ViewInterface},
    style::CompletionStyle,
};

// -------- //
// Fonction //
// -------- //

/// Le libellé d'une entrée : son nom, barré si l'entrée est obsolète, et,
/// pour les attributs globaux, dans la couleur du style.
pub fn label_for<E>(entry: &E, style: &CompletionStyle) -> StyledLabel
where
    E: CompletionInterface + ?Sized,
{
    let mut label = StyledLabel::new(entry.name());

    if entry.is_deprecated() {
        label.set_span(SpanStyle::Strikethrough);
    }

    if entry.kind() == EntryKind::Attribute && entry.is_global() {
        label.set_span(SpanStyle::Foreground(style.global_attribute_color));
    }

    label
}

/// Rend une entrée en ligne de complétion.
///
/// Si `convert_view` est une [CompletionRow], c'est cette même ligne qui
/// est mise à jour puis retournée ; sinon une nouvelle ligne est créée.
pub fn render_completion<C, E>(
    context: &C,
    entry: &E,
    convert_view: Option<Box<dyn ViewInterface>>,
) -> Box<dyn ViewInterface>
where
    C: RenderingContextInterface + ?Sized,
    E: CompletionInterface + ?Sized,
{
    let resource = DrawableResource::for_kind(entry.kind());
    let icon = context.drawable(resource);
    if icon.is_none() {
        log::warn!(
            "Ressource graphique manquante: {}",
            resource.resource_name()
        );
    }

    let label = label_for(entry, context.style());

    let mut row = match convert_view.map(|view| view.into_any()) {
        | Some(view) => match view.downcast::<CompletionRow>() {
            | Ok(row) => {
                log::trace!("Réutilisation d'une ligne pour {}", entry.name());
                row
            }
            | Err(_) => {
                log::trace!("Vue non recyclable remplacée ({})", entry.name());
                Box::default()
            }
        },
        | None => Box::default(),
    };

    row.set_icon(icon);
    row.set_label(label);
    row
}

// ---- //
// Test //
// ---- //
