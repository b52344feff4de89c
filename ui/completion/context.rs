/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use catalog::EntryKind;

use crate::style::CompletionStyle;

// --------- //
// Interface //
// --------- //

/// Le contexte dans lequel les lignes de complétion sont rendues. Il donne
/// accès aux ressources graphiques de la plateforme.
pub trait RenderingContextInterface {
    /// `None` lorsque la plateforme ne dispose pas de la ressource.
    fn drawable(&self, resource: DrawableResource) -> Option<Drawable>;

    fn style(&self) -> &CompletionStyle;
}

// ----------- //
// Énumération //
// ----------- //

#[derive(Debug)]
#[derive(Copy, Clone)]
#[derive(PartialEq, Eq, Hash)]
pub enum DrawableResource {
    ElementIcon,
    AttributeIcon,
}

// --------- //
// Structure //
// --------- //

/// Une ressource graphique résolue par un contexte de rendu.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
pub struct Drawable {
    resource: DrawableResource,
    content: String,
}

/// Contexte de rendu pour un terminal : les icônes sont des glyphes.
#[derive(Debug)]
#[derive(Default)]
#[derive(Clone)]
pub struct TextRenderingContext {
    style: CompletionStyle,
}

// -------------- //
// Implémentation //
// -------------- //

impl DrawableResource {
    pub fn for_kind(kind: EntryKind) -> Self {
        match kind {
            | EntryKind::Element => Self::ElementIcon,
            | EntryKind::Attribute => Self::AttributeIcon,
        }
    }

    /// Nom de la ressource dans un lot de ressources d'application.
    pub const fn resource_name(&self) -> &'static str {
        match self {
            | Self::ElementIcon => "ic_element_48dp",
            | Self::AttributeIcon => "ic_attribute_48dp",
        }
    }
}

impl Drawable {
    pub fn new(resource: DrawableResource, content: impl ToString) -> Self {
        Self {
            resource,
            content: content.to_string(),
        }
    }

    pub fn resource(&self) -> DrawableResource {
        self.resource
    }

    /// Le contenu de la ressource, tel que fourni par le contexte (un
    /// glyphe, un chemin, ...).
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TextRenderingContext {
    pub fn new(style: CompletionStyle) -> Self {
        Self { style }
    }
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl RenderingContextInterface for TextRenderingContext {
    fn drawable(&self, resource: DrawableResource) -> Option<Drawable> {
        let glyph = match resource {
            | DrawableResource::ElementIcon => &self.style.element_icon,
            | DrawableResource::AttributeIcon => &self.style.attribute_icon,
        };

        if glyph.is_empty() {
            return None;
        }

        Some(Drawable::new(resource, glyph))
    }

    fn style(&self) -> &CompletionStyle {
        &self.style
    }
}

// ---- //
// Test //
// ---- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind() {
        assert_eq!(
            DrawableResource::for_kind(EntryKind::Element).resource_name(),
            "ic_element_48dp"
        );
        assert_eq!(
            DrawableResource::for_kind(EntryKind::Attribute).resource_name(),
            "ic_attribute_48dp"
        );
    }

    #[test]
    fn test_text_rendering_context() {
        let context = TextRenderingContext::default();
        let icon = context.drawable(DrawableResource::ElementIcon).unwrap();
        assert_eq!(icon.resource(), DrawableResource::ElementIcon);
        assert_eq!(icon.content(), "<>");

        let context = TextRenderingContext::new(CompletionStyle {
            attribute_icon: String::new(),
            ..CompletionStyle::default()
        });
        assert_eq!(context.drawable(DrawableResource::AttributeIcon), None);
    }
}
