/*
 * collection/models.rs
 *
 * docwell - Documentation workspace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use crate::schema::collections;
use chrono::NaiveDateTime;
use docwell_core::models::{Collection, Document};
use docwell_core::types::WorkspaceId;

/// Fields supplied when creating a collection.
/// An absent `slug` is derived from the name.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NewCollectionInput<'a> {
    pub name: &'a str,
    pub slug: Option<&'a str>,
    pub description: Option<&'a str>,
    pub icon: Option<&'a str>,
}

/// A collection with its top-level documents, as shown in a workspace sidebar.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CollectionOverview {
    pub collection: Collection,
    pub documents: Vec<Document>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = collections)]
pub struct NewCollection<'a> {
    pub workspace_id: WorkspaceId,
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub order_index: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
