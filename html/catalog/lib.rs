/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

mod catalog;
mod dataset;
mod entry;
mod error;
mod suggestion;

pub mod interface;

pub use self::{
    catalog::{Catalog, CatalogBuilder},
    dataset::AttributeRecord,
    entry::{
        attribute::AttributeEntry, category::ElementCategory,
        element::ElementEntry,
    },
    error::CatalogError,
    interface::{CompletionInterface, EntryKind},
    suggestion::Completion,
};
