/*
 * page/models.rs
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

use crate::schema::pages;
use chrono::NaiveDateTime;
use docwell_core::types::{PageId, SpaceId, UserId};

/// Fields supplied when creating a page.
/// An absent `slug` is derived from the title.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NewPageInput<'a> {
    pub title: &'a str,
    pub slug: Option<&'a str>,
    pub content: &'a str,
    pub parent_id: Option<PageId>,
    pub is_published: bool,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PageChanges<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub is_published: Option<bool>,
}

impl PageChanges<'_> {
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.content.is_some() || self.is_published.is_some()
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = pages)]
pub struct NewPage<'a> {
    pub space_id: SpaceId,
    pub title: &'a str,
    pub slug: &'a str,
    pub content: &'a str,
    pub parent_id: Option<PageId>,
    pub order_index: i32,
    pub is_published: bool,
    pub created_by: UserId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = pages)]
pub struct UpdatePage<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub is_published: Option<bool>,
    pub updated_at: NaiveDateTime,
}
