/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::{path::PathBuf, process::ExitCode};

use catalog::{Catalog, CompletionInterface, ElementCategory, ElementEntry};
use clap::{Parser, Subcommand};
use completion::{
    render_completion, CompletionRow, CompletionStyle, SpanStyle,
    StyledLabel, TextRenderingContext, ViewInterface,
};
use owo_colors::{OwoColorize, Style};

// --------- //
// Structure //
// --------- //

/// Index des éléments et attributs HTML.
#[derive(Parser)]
#[command(name = "html-index", version)]
struct Arguments {
    /// Fichier TOML décrivant l'apparence des lignes.
    #[arg(long, global = true)]
    style: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

// ----------- //
// Énumération //
// ----------- //

#[derive(Subcommand)]
enum Command {
    /// Liste les éléments.
    Elements {
        /// Catégorie des éléments (ex: `forms`, `text-content`).
        #[arg(long)]
        category: Option<ElementCategory>,

        /// Début du nom, sans tenir compte de la casse.
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Liste les attributs qu'un élément peut porter.
    Attributes {
        element: String,

        /// Début du nom, sans tenir compte de la casse.
        #[arg(long, default_value = "")]
        prefix: String,

        /// Uniquement les attributs globaux.
        #[arg(long)]
        globals: bool,
    },

    /// Affiche la description d'un élément et/ou d'un attribut.
    Describe { name: String },
}

// -------- //
// Fonction //
// -------- //

fn main() -> ExitCode {
    env_logger::init();

    let arguments = Arguments::parse();

    let style = match arguments.style {
        | Some(path) => match CompletionStyle::load(&path) {
            | Ok(style) => style,
            | Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        | None => CompletionStyle::default(),
    };

    let catalog = match Catalog::builtin() {
        | Ok(catalog) => catalog,
        | Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let context = TextRenderingContext::new(style);

    match arguments.command {
        | Command::Elements { category, prefix } => {
            let suggestions = catalog
                .suggest_elements(&prefix)
                .into_iter()
                .filter(|suggestion| {
                    category.map_or(true, |category| {
                        catalog
                            .element(suggestion.name())
                            .is_some_and(|element| {
                                element.category() == category
                            })
                    })
                });
            print_rows(&context, suggestions);
        }

        | Command::Attributes {
            element,
            prefix,
            globals,
        } => {
            let unknown;
            let element = match catalog.element(&element) {
                | Some(element) => element,
                | None => {
                    log::warn!(
                        "<{element}> est inconnu, seuls les attributs \
                         globaux s'appliquent."
                    );
                    unknown = ElementEntry::new(
                        element,
                        ElementCategory::WebComponents,
                        "",
                    );
                    &unknown
                }
            };

            let suggestions = catalog
                .suggest_attributes(element, &prefix)
                .into_iter()
                .filter(|suggestion| !globals || suggestion.is_global());
            print_rows(&context, suggestions);
        }

        | Command::Describe { name } => {
            let element = catalog.element(&name);
            let attribute = catalog.attribute(&name);

            if element.is_none() && attribute.is_none() {
                log::error!("Aucune entrée nommée \"{name}\".");
                return ExitCode::FAILURE;
            }

            if let Some(element) = element {
                print_row(&*render_completion(&context, element, None));
                println!("  catégorie: {}", element.category());
                println!("  {}", element.description().replace('\n', "\n  "));
            }

            if let Some(attribute) = attribute {
                print_row(&*render_completion(&context, attribute, None));
                if attribute.is_global() {
                    println!("  global");
                } else {
                    let elements: Vec<_> = attribute
                        .elements()
                        .map(|element| format!("<{}>", element.name()))
                        .collect();
                    println!("  éléments: {}", elements.join(", "));
                }
                match attribute.description() {
                    | Some(description) => println!("  {description}"),
                    | None => println!("  (pas de description)"),
                }
            }
        }
    }

    ExitCode::SUCCESS
}

/// Rend chaque entrée en réutilisant la même ligne d'une entrée à l'autre.
fn print_rows<E>(
    context: &TextRenderingContext,
    entries: impl IntoIterator<Item = E>,
) where
    E: CompletionInterface,
{
    let mut view: Option<Box<dyn ViewInterface>> = None;
    for entry in entries {
        let row = render_completion(context, &entry, view);
        print_row(&*row);
        view = Some(row);
    }
}

fn print_row(view: &dyn ViewInterface) {
    let Some(row) = view.as_any().downcast_ref::<CompletionRow>() else {
        return;
    };

    match row.icon() {
        | Some(icon) => {
            println!("{} {}", icon.content(), styled(row.label()))
        }
        | None => println!("{}", styled(row.label())),
    }
}

/// Les styles d'un libellé portent sur l'ensemble de son texte.
fn styled(label: &StyledLabel) -> String {
    let style = label.spans().iter().fold(Style::new(), |style, span| {
        match span.style {
            | SpanStyle::Strikethrough => style.strikethrough(),
            | SpanStyle::Foreground(color) => {
                style.truecolor(color.red, color.green, color.blue)
            }
        }
    });

    label.text().style(style).to_string()
}
