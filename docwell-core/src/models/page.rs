/*
 * models/page.rs
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
pub struct Page {
    page_id: PageId,
    space_id: SpaceId,
    title: String,
    slug: String,
    content: String,
    parent_id: Option<PageId>,
    order_index: i32,
    is_published: bool,
    created_by: UserId,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl Page {
    #[inline]
    pub fn id(&self) -> PageId {
        self.page_id
    }

    #[inline]
    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn parent_id(&self) -> Option<PageId> {
        self.parent_id
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    #[inline]
    pub fn order_index(&self) -> i32 {
        self.order_index
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.is_published
    }

    #[inline]
    pub fn created_by(&self) -> UserId {
        self.created_by
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
