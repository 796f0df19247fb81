/*
 * models/collection.rs
 *
 * docwell-core - Documentation workspace service
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

use super::prelude::*;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    collection_id: CollectionId,
    workspace_id: WorkspaceId,
    name: String,
    slug: String,
    description: Option<String>,
    icon: Option<String>,
    order_index: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl Collection {
    #[inline]
    pub fn id(&self) -> CollectionId {
        self.collection_id
    }

    #[inline]
    pub fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn icon(&self) -> Option<&str> {
        self.icon.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn order_index(&self) -> i32 {
        self.order_index
    }

    #[inline]
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }
}
