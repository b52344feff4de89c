/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use core::{fmt, ops::Range, str};

use serde::{de, Deserialize, Deserializer};

use crate::style::StyleError;

// --------- //
// Structure //
// --------- //

/// Couleur ARGB.
#[derive(Debug)]
#[derive(Copy, Clone)]
#[derive(PartialEq, Eq, Hash)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Un style appliqué à une plage d'octets d'un libellé.
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub style: SpanStyle,
}

/// Un texte et les styles appliqués à certaines de ses plages.
#[derive(Debug)]
#[derive(Default)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
pub struct StyledLabel {
    text: String,
    spans: Vec<Span>,
}

// ----------- //
// Énumération //
// ----------- //

#[derive(Debug)]
#[derive(Copy, Clone)]
#[derive(PartialEq, Eq, Hash)]
pub enum SpanStyle {
    Strikethrough,
    Foreground(Color),
}

// -------------- //
// Implémentation //
// -------------- //

impl Color {
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha: 0xFF,
            red,
            green,
            blue,
        }
    }
}

impl StyledLabel {
    pub fn new(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            spans: Vec::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Applique un style à tout le texte.
    pub fn set_span(&mut self, style: SpanStyle) {
        self.spans.push(Span {
            range: 0..self.text.len(),
            style,
        });
    }

    pub fn with_span(mut self, style: SpanStyle) -> Self {
        self.set_span(style);
        self
    }

    pub fn is_strikethrough(&self) -> bool {
        self.spans
            .iter()
            .any(|span| span.style == SpanStyle::Strikethrough)
    }

    /// La dernière couleur de texte appliquée, s'il y en a une.
    pub fn foreground(&self) -> Option<Color> {
        self.spans.iter().rev().find_map(|span| match span.style {
            | SpanStyle::Foreground(color) => Some(color),
            | SpanStyle::Strikethrough => None,
        })
    }
}

// -------------- //
// Implémentation // -> Interface
// -------------- //

impl str::FromStr for Color {
    type Err = StyleError;

    /// Analyse une couleur `#RRGGBB` ou `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidColor(s.to_owned());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        let [a, r, g, b] = value.to_be_bytes();

        match hex.len() {
            | 6 => Ok(Self::rgb(r, g, b)),
            | 8 => Ok(Self {
                alpha: a,
                red: r,
                green: g,
                blue: b,
            }),
            | _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.red, self.green, self.blue
            )
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl fmt::Display for StyledLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// ---- //
// Test //
// ---- //
