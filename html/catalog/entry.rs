/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

///! Attributs HTML, globaux ou limités à certains éléments.
pub(crate) mod attribute;
///! Catégories de contenu sous lesquelles les éléments sont déclarés.
pub(crate) mod category;
///! Éléments HTML.
pub(crate) mod element;
