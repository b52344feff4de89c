/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::{collections::HashMap, sync::Arc};

use crate::{
    dataset::{self, AttributeRecord},
    entry::{
        attribute::AttributeEntry, category::ElementCategory,
        element::ElementEntry,
    },
    error::CatalogError,
};

// --------- //
// Structure //
// --------- //

/// Catalogue des éléments et des attributs HTML.
///
/// Le catalogue est immuable une fois construit. Les attributs applicables
/// à chaque élément sont calculés à la construction, les requêtes ne font
/// que relire ces listes.
#[derive(Debug)]
pub struct Catalog {
    elements: Vec<Arc<ElementEntry>>,
    attributes: Vec<AttributeEntry>,
    element_index: HashMap<String, usize>,
    attribute_index: HashMap<String, usize>,
    /// Positions des attributs globaux dans `attributes`.
    global_attributes: Vec<usize>,
    /// Pour chaque élément (même position que dans `elements`), les
    /// positions des attributs qui lui sont applicables : les attributs
    /// globaux puis les attributs qui lui sont limités.
    element_attributes: Vec<Vec<usize>>,
}

/// Construit un [Catalog] à partir d'éléments et d'attributs déclarés dans
/// n'importe quel ordre : un attribut peut désigner un élément ajouté après
/// lui.
#[derive(Debug)]
#[derive(Default)]
pub struct CatalogBuilder {
    elements: Vec<ElementEntry>,
    attributes: Vec<AttributeRecord>,
}

// -------------- //
// Implémentation //
// -------------- //

impl Catalog {
    /// Catalogue du jeu de données embarqué.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(dataset::ELEMENTS_JSON, dataset::ATTRIBUTES_JSON)
    }

    /// Catalogue de deux documents JSON : un tableau d'éléments et un
    /// tableau d'attributs, dans le format du jeu de données embarqué.
    pub fn from_json(
        elements: &str,
        attributes: &str,
    ) -> Result<Self, CatalogError> {
        Self::builder()
            .elements(dataset::parse_elements(elements)?)
            .attributes(dataset::parse_attributes(attributes)?)
            .build()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Tous les éléments, dans l'ordre de déclaration (par catégorie).
    pub fn all_elements(&self) -> &[Arc<ElementEntry>] {
        &self.elements
    }

    /// Tous les attributs, dans l'ordre de déclaration.
    pub fn all_attributes(&self) -> &[AttributeEntry] {
        &self.attributes
    }

    /// Les attributs applicables à tous les éléments.
    pub fn global_attributes(&self) -> Vec<&AttributeEntry> {
        self.resolve(&self.global_attributes)
    }

    /// Les attributs qu'un élément peut porter : les attributs globaux,
    /// puis ceux qui lui sont limités, chacun dans l'ordre du catalogue.
    ///
    /// Un élément inconnu du catalogue ne reçoit que les attributs globaux.
    pub fn attributes_for(
        &self,
        element: &ElementEntry,
    ) -> Vec<&AttributeEntry> {
        match self.element_index.get(element.name()) {
            | Some(&index) => self.resolve(&self.element_attributes[index]),
            | None => self.global_attributes(),
        }
    }

    pub fn element(&self, name: &str) -> Option<&ElementEntry> {
        self.element_index
            .get(name)
            .map(|&index| &*self.elements[index])
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeEntry> {
        self.attribute_index
            .get(name)
            .map(|&index| &self.attributes[index])
    }

    /// Les éléments d'une catégorie, dans l'ordre du catalogue.
    pub fn elements_in(
        &self,
        category: ElementCategory,
    ) -> impl Iterator<Item = &ElementEntry> {
        self.elements
            .iter()
            .map(|element| &**element)
            .filter(move |element| element.category() == category)
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&AttributeEntry> {
        positions.iter().map(|&index| &self.attributes[index]).collect()
    }
}

impl CatalogBuilder {
    pub fn element(mut self, element: ElementEntry) -> Self {
        self.elements.push(element);
        self
    }

    pub fn elements(
        mut self,
        elements: impl IntoIterator<Item = ElementEntry>,
    ) -> Self {
        self.elements.extend(elements);
        self
    }

    pub fn attribute(mut self, attribute: AttributeRecord) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes(
        mut self,
        attributes: impl IntoIterator<Item = AttributeRecord>,
    ) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Relie les attributs aux éléments et calcule les attributs
    /// applicables à chaque élément.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut element_index = HashMap::with_capacity(self.elements.len());
        let elements: Vec<Arc<ElementEntry>> =
            self.elements.into_iter().map(Arc::new).collect();

        for (index, element) in elements.iter().enumerate() {
            let name = element.name().to_owned();
            if element_index.contains_key(&name) {
                return Err(CatalogError::DuplicateElement(name));
            }
            element_index.insert(name, index);
        }

        let mut attribute_index =
            HashMap::with_capacity(self.attributes.len());
        let mut attributes = Vec::with_capacity(self.attributes.len());

        for record in self.attributes {
            if attribute_index.contains_key(&record.name) {
                return Err(CatalogError::DuplicateAttribute(record.name));
            }

            let scope = record
                .elements
                .iter()
                .map(|name| match element_index.get(name) {
                    | Some(&index) => Ok(Arc::clone(&elements[index])),
                    | None => Err(CatalogError::UnknownElement {
                        attribute: record.name.clone(),
                        element: name.clone(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            attribute_index.insert(record.name.clone(), attributes.len());
            attributes.push(
                AttributeEntry::new(record.name, record.description)
                    .with_deprecated(record.deprecated)
                    .with_elements(scope),
            );
        }

        let global_attributes: Vec<usize> = attributes
            .iter()
            .enumerate()
            .filter(|(_, attribute)| attribute.is_global())
            .map(|(index, _)| index)
            .collect();

        let element_attributes: Vec<Vec<usize>> = elements
            .iter()
            .map(|element| {
                let scoped = attributes
                    .iter()
                    .enumerate()
                    .filter(|(_, attribute)| attribute.applies_to(element))
                    .map(|(index, _)| index);
                global_attributes
                    .iter()
                    .copied()
                    .chain(scoped)
                    .collect::<Vec<_>>()
            })
            .collect();

        log::debug!(
            "Catalogue HTML construit: {} éléments, {} attributs dont {} \
             globaux",
            elements.len(),
            attributes.len(),
            global_attributes.len(),
        );

        Ok(Catalog {
            elements,
            attributes,
            element_index,
            attribute_index,
            global_attributes,
            element_attributes,
        })
    }
}

// ---- //
// Test //
// ---- //

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("Le jeu de données embarqué")
    }

    fn names(attributes: &[&AttributeEntry]) -> Vec<String> {
        attributes.iter().map(|a| a.name().to_owned()).collect()
    }

    #[test]
    fn test_builtin() {
        let catalog = catalog();
        assert_eq!(catalog.all_elements().len(), 120);
        assert_eq!(catalog.all_attributes().len(), 108);

        let names: HashSet<_> =
            catalog.all_elements().iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), catalog.all_elements().len());
    }

    #[test]
    fn test_elements_grouped_by_category() {
        let catalog = catalog();

        // Chaque catégorie apparaît en un seul bloc, dans l'ordre
        // de déclaration des catégories.
        let mut categories: Vec<ElementCategory> = catalog
            .all_elements()
            .iter()
            .map(|element| element.category())
            .collect();
        categories.dedup();
        assert_eq!(categories, ElementCategory::ALL);

        let metadata: Vec<_> = catalog
            .elements_in(ElementCategory::DocumentMetadata)
            .map(|element| element.name())
            .collect();
        assert_eq!(metadata, ["head", "link", "meta", "style", "title"]);
    }

    #[test]
    fn test_is_global_iff_no_elements() {
        for attribute in catalog().all_attributes() {
            assert_eq!(
                attribute.is_global(),
                attribute.elements().next().is_none(),
                "{}",
                attribute.name()
            );
        }
    }

    #[test]
    fn test_global_attributes() {
        let catalog = catalog();
        let globals = catalog.global_attributes();

        let expected: Vec<&AttributeEntry> = catalog
            .all_attributes()
            .iter()
            .filter(|attribute| attribute.is_global())
            .collect();
        assert_eq!(globals, expected);

        assert!(!globals.is_empty());
        assert!(globals.len() < catalog.all_attributes().len());
        assert_eq!(
            names(&globals),
            [
                "accesskey",
                "autocapitalize",
                "class",
                "contenteditable",
                "contextmenu",
                "dir",
                "draggable",
                "dropzone",
                "hidden",
                "id",
                "itemprop",
                "lang",
                "slot",
                "spellcheck",
                "style",
                "tabindex",
                "title",
                "translate",
            ]
        );
    }

    #[test]
    fn test_attributes_for_every_element() {
        let catalog = catalog();
        let globals = catalog.global_attributes();

        for element in catalog.all_elements() {
            let attributes = catalog.attributes_for(element);

            let unique: HashSet<_> =
                attributes.iter().map(|a| a.name()).collect();
            assert_eq!(
                unique.len(),
                attributes.len(),
                "<{}>",
                element.name()
            );

            // Les attributs globaux d'abord, une seule fois chacun.
            assert_eq!(attributes[..globals.len()], globals[..]);

            for attribute in catalog.all_attributes() {
                let expected =
                    attribute.is_global() || attribute.applies_to(element);
                assert_eq!(
                    attributes.contains(&attribute),
                    expected,
                    "<{}> {}",
                    element.name(),
                    attribute.name()
                );
            }
        }
    }

    #[test]
    fn test_attributes_for_is_idempotent() {
        let catalog = catalog();
        let input = catalog.element("input").unwrap();
        assert_eq!(
            catalog.attributes_for(input),
            catalog.attributes_for(input)
        );
    }

    #[test]
    fn test_attributes_for_form() {
        let catalog = catalog();
        let form = catalog.element("form").unwrap();
        let attributes = names(&catalog.attributes_for(form));

        for name in [
            "accept",
            "accept-charset",
            "action",
            "autocomplete",
            "enctype",
            "method",
            "name",
            "novalidate",
            "target",
            "class",
            "id",
            "style",
            "title",
        ] {
            assert!(attributes.iter().any(|a| a == name), "{name}");
        }

        assert!(!attributes.iter().any(|a| a == "checked"));

        let scoped = &attributes[catalog.global_attributes().len()..];
        assert_eq!(
            scoped,
            [
                "accept",
                "accept-charset",
                "action",
                "autocomplete",
                "enctype",
                "method",
                "name",
                "novalidate",
                "target",
            ]
        );
    }

    #[test]
    fn test_attributes_for_unknown_element() {
        let catalog = catalog();
        let blink = ElementEntry::new(
            "blink",
            ElementCategory::InlineTextSemantics,
            "Non-standard.",
        );
        assert_eq!(
            catalog.attributes_for(&blink),
            catalog.global_attributes()
        );

        // Même nom, même identité : la description n'a pas d'importance.
        let form = ElementEntry::new("form", ElementCategory::Forms, "");
        assert_eq!(
            catalog.attributes_for(&form),
            catalog.attributes_for(catalog.element("form").unwrap())
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog();

        let dir = catalog.element("dir").unwrap();
        assert!(dir.is_deprecated());
        assert_eq!(dir.category(), ElementCategory::TextContent);
        assert!(!catalog.element("div").unwrap().is_deprecated());
        assert!(catalog.element("blink").is_none());

        let class = catalog.attribute("class").unwrap();
        assert!(class.is_global());

        assert_eq!(catalog.attribute("dirname").unwrap().description(), None);
        assert!(catalog.attribute("accept").unwrap().description().is_some());

        let color = catalog.attribute("color").unwrap();
        assert!(color.is_deprecated());
        assert_eq!(
            color.elements().map(|e| e.name()).collect::<Vec<_>>(),
            ["hr"]
        );
    }

    #[test]
    fn test_forward_reference() {
        let catalog = Catalog::builder()
            .attribute(
                AttributeRecord::new("checked")
                    .with_description("Checked on page load.")
                    .with_elements(["input"]),
            )
            .attribute(AttributeRecord::new("id"))
            .element(ElementEntry::new("input", ElementCategory::Forms, ""))
            .element(ElementEntry::new("form", ElementCategory::Forms, ""))
            .build()
            .unwrap();

        let input = catalog.element("input").unwrap();
        assert_eq!(names(&catalog.attributes_for(input)), ["id", "checked"]);

        let form = catalog.element("form").unwrap();
        assert_eq!(names(&catalog.attributes_for(form)), ["id"]);
    }

    #[test]
    fn test_duplicate_element() {
        let err = Catalog::builder()
            .element(ElementEntry::new("p", ElementCategory::TextContent, "A"))
            .element(ElementEntry::new("p", ElementCategory::TextContent, "B"))
            .build()
            .unwrap_err();
        assert!(
            matches!(err, CatalogError::DuplicateElement(name) if name == "p")
        );
    }

    #[test]
    fn test_duplicate_attribute() {
        let err = Catalog::builder()
            .attribute(AttributeRecord::new("id"))
            .attribute(AttributeRecord::new("id"))
            .build()
            .unwrap_err();
        assert!(
            matches!(err, CatalogError::DuplicateAttribute(name) if name == "id")
        );
    }

    #[test]
    fn test_unknown_element() {
        let err = Catalog::builder()
            .element(ElementEntry::new("input", ElementCategory::Forms, ""))
            .attribute(
                AttributeRecord::new("checked").with_elements(["imput"]),
            )
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "L'attribut \"checked\" fait référence à un élément inconnu: \
             <imput>"
        );
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[
                { "name": "ol", "category": "text-content", "description": "Ordered list." },
                { "name": "tt", "category": "inline-text-semantics", "description": "Teletype.", "deprecated": true }
            ]"#,
            r#"[
                { "name": "reversed", "elements": ["ol"] },
                { "name": "lang", "description": "Language." }
            ]"#,
        )
        .unwrap();

        assert!(catalog.element("tt").unwrap().is_deprecated());
        let ol = catalog.element("ol").unwrap();
        assert_eq!(names(&catalog.attributes_for(ol)), ["lang", "reversed"]);

        let err = Catalog::from_json("{}", "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
